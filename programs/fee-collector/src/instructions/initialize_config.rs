use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, MAX_BPS};
use crate::errors::ErrorCode;
use crate::states::FeeCollectorConfig;

#[derive(Accounts)]
pub struct InitializeConfig<'info> {
    /// Admin who can initialize the config
    #[account(mut)]
    pub authority: Signer<'info>,

    /// Collector configuration PDA
    #[account(
        init,
        payer = authority,
        space = FeeCollectorConfig::DISCRIMINATOR.len() + FeeCollectorConfig::INIT_SPACE,
        seeds = [CONFIG_SEED],
        bump
    )]
    pub config: Account<'info, FeeCollectorConfig>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct InitializeConfigParams {
    /// Destination for the platform's share of withdrawals
    pub platform_treasury: Pubkey,
    /// Fraction of each vault's pool subject to splitting, in basis points
    pub total_fee_bps: u16,
}

impl<'info> InitializeConfig<'info> {
    pub fn handle(ctx: Context<InitializeConfig>, params: InitializeConfigParams) -> Result<()> {
        msg!("Initializing collector configuration");

        require!(params.total_fee_bps <= MAX_BPS, ErrorCode::InvalidBps);
        require!(
            params.platform_treasury != Pubkey::default(),
            ErrorCode::TreasuryMismatch
        );

        let config_key = ctx.accounts.config.key();
        let config = &mut ctx.accounts.config;

        config.authority = ctx.accounts.authority.key();
        config.platform_treasury = params.platform_treasury;
        config.total_fee_bps = params.total_fee_bps;
        config.next_vault_id = 0;
        config.bump = ctx.bumps.config;

        msg!("Authority: {}", config.authority);
        msg!("Platform treasury: {}", config.platform_treasury);
        msg!("Total fee: {} bps", config.total_fee_bps);

        emit!(crate::events::ConfigInitialized {
            config: config_key,
            authority: config.authority,
            platform_treasury: config.platform_treasury,
            total_fee_bps: config.total_fee_bps,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
