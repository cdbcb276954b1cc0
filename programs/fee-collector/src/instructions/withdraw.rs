use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{
    COLLECTOR_AUTHORITY_SEED, CONFIG_SEED, FEE_SCHEMA_SEED, NATIVE_TREASURY_SEED,
    TOKEN_TREASURY_SEED, VAULT_SEED,
};
use crate::errors::ErrorCode;
use crate::math::split_collected;
use crate::states::{FeeCollectorConfig, FeeSchema, Vault};

/// Permissionless distribution of a vault's collected balance. Every
/// destination is fixed by stored state, so a third-party crank can
/// only move funds to where they already belong.
///
/// Partner destinations are passed as remaining accounts, one per
/// schema entry, in schema order.
#[derive(Accounts)]
#[instruction(params: WithdrawParams)]
pub struct Withdraw<'info> {
    pub caller: Signer<'info>,

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

    /// Schema to split against; absent for names never written, which
    /// read as an empty schema
    #[account(
        seeds = [FEE_SCHEMA_SEED, params.schema_name.as_bytes()],
        bump = fee_schema.bump
    )]
    pub fee_schema: Option<Account<'info, FeeSchema>>,

    /// Holds collected native fees for all vaults
    #[account(
        mut,
        seeds = [NATIVE_TREASURY_SEED],
        bump
    )]
    pub native_treasury: SystemAccount<'info>,

    /// CHECK: PDA acting as the authority over collected token fees
    #[account(
        seeds = [COLLECTOR_AUTHORITY_SEED],
        bump
    )]
    pub collector_authority: UncheckedAccount<'info>,

    /// Holds collected fees for the vault's asset mint
    #[account(
        mut,
        seeds = [TOKEN_TREASURY_SEED, vault.asset.as_ref()],
        bump
    )]
    pub token_treasury: Option<Box<Account<'info, TokenAccount>>>,

    /// CHECK: Validated against the configured platform treasury
    #[account(mut)]
    pub platform_destination: UncheckedAccount<'info>,

    /// CHECK: Validated against the vault's owner
    #[account(mut)]
    pub owner_destination: UncheckedAccount<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct WithdrawParams {
    /// The vault to drain
    pub vault_id: u64,
    /// Name of the schema to split against
    pub schema_name: String,
}

impl<'info> Withdraw<'info> {
    pub fn handle(ctx: Context<Withdraw>, params: WithdrawParams) -> Result<()> {
        require!(
            ctx.accounts.config.vault_exists(params.vault_id),
            ErrorCode::VaultDoesNotExist
        );

        let entries = match &ctx.accounts.fee_schema {
            Some(schema) => schema.entries.clone(),
            None => Vec::new(),
        };
        require!(
            ctx.remaining_accounts.len() == entries.len(),
            ErrorCode::SchemaMismatch
        );

        // Effects before interactions: the balance is gone from the
        // ledger before the first transfer leaves. The transaction
        // reverts wholesale on any failure below, so the zeroing is
        // never visible without its transfers.
        let pool = ctx.accounts.vault.drain();
        msg!(
            "Withdrawing vault {} against schema '{}': pool {} units",
            params.vault_id,
            params.schema_name,
            pool
        );

        let breakdown = split_collected(pool, ctx.accounts.config.total_fee_bps, &entries)?;

        for (index, entry) in entries.iter().enumerate() {
            let amount = breakdown.partner_amounts[index];
            msg!("Partner {}: {} units", entry.treasury, amount);
            ctx.accounts.pay_out(
                &ctx.bumps,
                amount,
                entry.treasury,
                &ctx.remaining_accounts[index],
            )?;
        }

        msg!("Platform: {} units", breakdown.platform_amount);
        ctx.accounts.pay_out(
            &ctx.bumps,
            breakdown.platform_amount,
            ctx.accounts.config.platform_treasury,
            &ctx.accounts.platform_destination.to_account_info(),
        )?;

        msg!("Owner: {} units", breakdown.owner_amount);
        ctx.accounts.pay_out(
            &ctx.bumps,
            breakdown.owner_amount,
            ctx.accounts.vault.owner,
            &ctx.accounts.owner_destination.to_account_info(),
        )?;

        emit!(crate::events::Withdrawn {
            vault_id: params.vault_id,
            schema_name: params.schema_name,
            royalty_amount: breakdown.royalty_amount,
            platform_amount: breakdown.platform_amount,
            owner_amount: breakdown.owner_amount,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }

    /// Sends one computed share to its destination, native or token
    /// depending on the vault's asset. Zero shares are skipped.
    fn pay_out(
        &self,
        bumps: &WithdrawBumps,
        amount: u64,
        expected_wallet: Pubkey,
        destination: &AccountInfo<'info>,
    ) -> Result<()> {
        if amount == 0 {
            return Ok(());
        }

        if self.vault.is_native() {
            require_keys_eq!(
                destination.key(),
                expected_wallet,
                ErrorCode::TreasuryMismatch
            );
            anchor_lang::system_program::transfer(
                CpiContext::new_with_signer(
                    self.system_program.to_account_info(),
                    anchor_lang::system_program::Transfer {
                        from: self.native_treasury.to_account_info(),
                        to: destination.clone(),
                    },
                    &[&[NATIVE_TREASURY_SEED, &[bumps.native_treasury]]],
                ),
                amount,
            )?;
            return Ok(());
        }

        let token_treasury = self
            .token_treasury
            .as_ref()
            .ok_or(ErrorCode::AssetMismatch)?;

        let destination_account = Account::<TokenAccount>::try_from(destination)?;
        require_keys_eq!(
            destination_account.mint,
            self.vault.asset,
            ErrorCode::AssetMismatch
        );
        require_keys_eq!(
            destination_account.owner,
            expected_wallet,
            ErrorCode::TreasuryMismatch
        );

        anchor_spl::token::transfer(
            CpiContext::new_with_signer(
                self.token_program.to_account_info(),
                anchor_spl::token::Transfer {
                    from: token_treasury.to_account_info(),
                    to: destination.clone(),
                    authority: self.collector_authority.to_account_info(),
                },
                &[&[COLLECTOR_AUTHORITY_SEED, &[bumps.collector_authority]]],
            ),
            amount,
        )?;

        Ok(())
    }
}
