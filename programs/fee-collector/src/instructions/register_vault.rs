use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, VAULT_SEED};
use crate::states::{FeeCollectorConfig, Vault};

/// Permissionless vault registration. Ids come from the config's
/// monotonic allocator, so several registrations batched into one
/// transaction commit with sequential, gap-free ids or not at all.
#[derive(Accounts)]
pub struct RegisterVault<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, FeeCollectorConfig>,

    #[account(
        init,
        payer = payer,
        space = Vault::DISCRIMINATOR.len() + Vault::INIT_SPACE,
        seeds = [VAULT_SEED, &config.next_vault_id.to_le_bytes()],
        bump
    )]
    pub vault: Account<'info, Vault>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct RegisterVaultParams {
    /// Owner empowered to edit the vault and receive proceeds
    pub owner: Pubkey,
    /// Asset to collect; the default pubkey means native
    pub asset: Pubkey,
    /// Whether one account may pay more than once
    pub multiple_payments: bool,
    /// Exact amount required per payment
    pub fee: u64,
}

impl<'info> RegisterVault<'info> {
    pub fn handle(ctx: Context<RegisterVault>, params: RegisterVaultParams) -> Result<()> {
        let vault_id = ctx.accounts.config.allocate_vault_id()?;

        let vault = &mut ctx.accounts.vault;
        vault.id = vault_id;
        vault.owner = params.owner;
        vault.asset = params.asset;
        vault.multiple_payments = params.multiple_payments;
        vault.fee = params.fee;
        vault.balance = 0;
        vault.bump = ctx.bumps.vault;

        msg!("Registered vault {}", vault_id);
        msg!("Owner: {}", vault.owner);
        msg!("Asset: {}", vault.asset);
        msg!("Fee: {} units", vault.fee);

        emit!(crate::events::VaultRegistered {
            vault_id,
            owner: vault.owner,
            asset: vault.asset,
            fee: vault.fee,
            multiple_payments: vault.multiple_payments,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
