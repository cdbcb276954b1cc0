use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::errors::ErrorCode;
use crate::states::FeeCollectorConfig;

#[derive(Accounts)]
pub struct SetPlatformTreasury<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ ErrorCode::AccessDenied
    )]
    pub config: Account<'info, FeeCollectorConfig>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct SetPlatformTreasuryParams {
    /// New destination for the platform's share
    pub platform_treasury: Pubkey,
}

impl<'info> SetPlatformTreasury<'info> {
    pub fn handle(
        ctx: Context<SetPlatformTreasury>,
        params: SetPlatformTreasuryParams,
    ) -> Result<()> {
        require!(
            params.platform_treasury != Pubkey::default(),
            ErrorCode::TreasuryMismatch
        );

        let config = &mut ctx.accounts.config;
        config.platform_treasury = params.platform_treasury;

        msg!("Platform treasury changed to {}", config.platform_treasury);

        emit!(crate::events::PlatformTreasuryChanged {
            platform_treasury: config.platform_treasury,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
