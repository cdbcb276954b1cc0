use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, VAULT_SEED};
use crate::errors::ErrorCode;
use crate::states::{FeeCollectorConfig, Vault};

#[derive(Accounts)]
#[instruction(params: SetVaultDetailsParams)]
pub struct SetVaultDetails<'info> {
    /// The vault's current owner
    pub owner: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, FeeCollectorConfig>,

    #[account(
        mut,
        seeds = [VAULT_SEED, &params.vault_id.to_le_bytes()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct SetVaultDetailsParams {
    /// The vault to edit
    pub vault_id: u64,
    /// New owner
    pub owner: Pubkey,
    /// New multiple-payments policy
    pub multiple_payments: bool,
    /// New fee amount
    pub fee: u64,
}

impl<'info> SetVaultDetails<'info> {
    pub fn handle(ctx: Context<SetVaultDetails>, params: SetVaultDetailsParams) -> Result<()> {
        require!(
            ctx.accounts.config.vault_exists(params.vault_id),
            ErrorCode::VaultDoesNotExist
        );

        let vault = &mut ctx.accounts.vault;
        let caller = ctx.accounts.owner.key();
        if caller != vault.owner {
            msg!("Access denied: caller {} required {}", caller, vault.owner);
            return err!(ErrorCode::AccessDenied);
        }

        vault.update_details(params.owner, params.multiple_payments, params.fee);

        msg!("Vault {} details changed", params.vault_id);
        msg!("Owner: {}", vault.owner);
        msg!("Multiple payments: {}", vault.multiple_payments);
        msg!("Fee: {} units", vault.fee);

        emit!(crate::events::VaultDetailsChanged {
            vault_id: params.vault_id,
            owner: vault.owner,
            multiple_payments: vault.multiple_payments,
            fee: vault.fee,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
