use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, FEE_SCHEMA_SEED, PAYMENT_RECORD_SEED, VAULT_SEED};
use crate::errors::ErrorCode;
use crate::states::{FeeCollectorConfig, FeeSchema, FeeShare, PaymentRecord, Vault};

/// Read-only view of a vault's stored details
#[derive(Accounts)]
#[instruction(params: QueryVaultParams)]
pub struct QueryVault<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, FeeCollectorConfig>,

    #[account(
        seeds = [VAULT_SEED, &params.vault_id.to_le_bytes()],
        bump = vault.bump
    )]
    pub vault: Account<'info, Vault>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct QueryVaultParams {
    pub vault_id: u64,
}

/// Response structure for vault queries
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct VaultInfo {
    /// The vault's id
    pub id: u64,
    /// Owner empowered to edit the vault and receive proceeds
    pub owner: Pubkey,
    /// Asset the vault collects (default pubkey = native)
    pub asset: Pubkey,
    /// Whether one account may pay more than once
    pub multiple_payments: bool,
    /// Exact amount required per payment
    pub fee: u64,
    /// Collected, not-yet-withdrawn funds
    pub balance: u64,
}

impl<'info> QueryVault<'info> {
    pub fn handle(ctx: Context<QueryVault>, params: QueryVaultParams) -> Result<VaultInfo> {
        require!(
            ctx.accounts.config.vault_exists(params.vault_id),
            ErrorCode::VaultDoesNotExist
        );

        let vault = &ctx.accounts.vault;
        let vault_info = VaultInfo {
            id: vault.id,
            owner: vault.owner,
            asset: vault.asset,
            multiple_payments: vault.multiple_payments,
            fee: vault.fee,
            balance: vault.balance,
        };

        msg!("Vault {}", vault_info.id);
        msg!("Owner: {}", vault_info.owner);
        msg!("Asset: {}", vault_info.asset);
        msg!("Fee: {} units", vault_info.fee);
        msg!("Balance: {} units", vault_info.balance);

        Ok(vault_info)
    }
}

/// Read-only view of a schema's entries; unknown names read as empty
#[derive(Accounts)]
#[instruction(params: QueryFeeSchemaParams)]
pub struct QueryFeeSchema<'info> {
    #[account(
        seeds = [FEE_SCHEMA_SEED, params.name.as_bytes()],
        bump = fee_schema.bump
    )]
    pub fee_schema: Option<Account<'info, FeeSchema>>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct QueryFeeSchemaParams {
    pub name: String,
}

impl<'info> QueryFeeSchema<'info> {
    pub fn handle(
        ctx: Context<QueryFeeSchema>,
        params: QueryFeeSchemaParams,
    ) -> Result<Vec<FeeShare>> {
        let entries = match &ctx.accounts.fee_schema {
            Some(schema) => schema.entries.clone(),
            None => Vec::new(),
        };

        msg!("Schema '{}': {} entries", params.name, entries.len());

        Ok(entries)
    }
}

/// Read-only view of one account's payment state for a vault
#[derive(Accounts)]
#[instruction(params: QueryPaymentParams)]
pub struct QueryPayment<'info> {
    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump
    )]
    pub config: Account<'info, FeeCollectorConfig>,

    #[account(
        seeds = [
            PAYMENT_RECORD_SEED,
            &params.vault_id.to_le_bytes(),
            params.account.as_ref()
        ],
        bump = payment_record.bump
    )]
    pub payment_record: Option<Account<'info, PaymentRecord>>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct QueryPaymentParams {
    pub vault_id: u64,
    pub account: Pubkey,
}

/// Response structure for payment queries
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct PaymentInfo {
    /// The queried vault's id
    pub vault_id: u64,
    /// The queried account
    pub account: Pubkey,
    /// Whether the account has ever paid this vault
    pub paid: bool,
    /// Number of successful payments by this account
    pub payment_count: u32,
}

impl<'info> QueryPayment<'info> {
    pub fn handle(ctx: Context<QueryPayment>, params: QueryPaymentParams) -> Result<PaymentInfo> {
        require!(
            ctx.accounts.config.vault_exists(params.vault_id),
            ErrorCode::VaultDoesNotExist
        );

        let payment_info = match &ctx.accounts.payment_record {
            Some(record) => PaymentInfo {
                vault_id: record.vault_id,
                account: record.payer,
                paid: record.paid,
                payment_count: record.payment_count,
            },
            None => PaymentInfo {
                vault_id: params.vault_id,
                account: params.account,
                paid: false,
                payment_count: 0,
            },
        };

        msg!(
            "Vault {} account {}: paid {}",
            payment_info.vault_id,
            payment_info.account,
            payment_info.paid
        );

        Ok(payment_info)
    }
}
