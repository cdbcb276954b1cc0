use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{
    COLLECTOR_AUTHORITY_SEED, CONFIG_SEED, NATIVE_TREASURY_SEED, PAYMENT_RECORD_SEED,
    TOKEN_TREASURY_SEED, VAULT_SEED,
};
use crate::errors::ErrorCode;
use crate::states::{FeeCollectorConfig, PaymentRecord, Vault};

#[derive(Accounts)]
#[instruction(params: PayFeeParams)]
pub struct PayFee<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

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

    #[account(
        init_if_needed,
        payer = payer,
        space = PaymentRecord::DISCRIMINATOR.len() + PaymentRecord::INIT_SPACE,
        seeds = [PAYMENT_RECORD_SEED, &params.vault_id.to_le_bytes(), payer.key().as_ref()],
        bump
    )]
    pub payment_record: Account<'info, PaymentRecord>,

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

    /// CHECK: The vault's asset mint; only needed for token vaults
    pub asset_mint: Option<UncheckedAccount<'info>>,

    /// The payer's token account for the vault's asset
    #[account(
        mut,
        token::authority = payer
    )]
    pub payer_token_account: Option<Box<Account<'info, TokenAccount>>>,

    /// Holds collected fees for the vault's asset mint
    #[account(
        init_if_needed,
        payer = payer,
        seeds = [TOKEN_TREASURY_SEED, vault.asset.as_ref()],
        bump,
        token::mint = asset_mint,
        token::authority = collector_authority
    )]
    pub token_treasury: Option<Box<Account<'info, TokenAccount>>>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct PayFeeParams {
    /// The vault being paid
    pub vault_id: u64,
    /// Native amount tendered with this payment; must be zero for
    /// token vaults
    pub amount: u64,
}

impl<'info> PayFee<'info> {
    pub fn handle(mut ctx: Context<PayFee>, params: PayFeeParams) -> Result<()> {
        require!(
            ctx.accounts.config.vault_exists(params.vault_id),
            ErrorCode::VaultDoesNotExist
        );

        let fee = ctx.accounts.vault.fee;
        let payer = ctx.accounts.payer.key();
        msg!("Fee payment for vault {} from {}", params.vault_id, payer);

        if ctx.accounts.vault.is_native() {
            collect_native_fee(&ctx, &params, fee)?;
        } else {
            collect_token_fee(&mut ctx, &params, fee)?;
        }

        let multiple_payments = ctx.accounts.vault.multiple_payments;
        let payment_record = &mut ctx.accounts.payment_record;
        if payment_record.payment_count == 0 {
            payment_record.vault_id = params.vault_id;
            payment_record.payer = payer;
            payment_record.bump = ctx.bumps.payment_record;
        }
        if payment_record.paid && !multiple_payments {
            msg!("Already paid: vault {} payer {}", params.vault_id, payer);
        }
        payment_record.register_payment(multiple_payments)?;

        ctx.accounts.vault.credit(fee)?;

        msg!("Credited {} units, balance {}", fee, ctx.accounts.vault.balance);

        emit!(crate::events::FeeReceived {
            vault_id: params.vault_id,
            payer,
            amount: fee,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}

/// Moves the tendered lamports into the native treasury, requiring the
/// tendered amount to equal the vault's fee exactly.
fn collect_native_fee(ctx: &Context<PayFee>, params: &PayFeeParams, fee: u64) -> Result<()> {
    if params.amount != fee {
        msg!(
            "Incorrect fee for vault {}: tendered {} expected {}",
            params.vault_id,
            params.amount,
            fee
        );
        return err!(ErrorCode::IncorrectFee);
    }

    anchor_lang::system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            anchor_lang::system_program::Transfer {
                from: ctx.accounts.payer.to_account_info(),
                to: ctx.accounts.native_treasury.to_account_info(),
            },
        ),
        fee,
    )?;

    Ok(())
}

/// Pulls exactly `fee` units of the vault's token from the payer,
/// verifying the treasury balance actually grew by that amount.
fn collect_token_fee(ctx: &mut Context<PayFee>, params: &PayFeeParams, fee: u64) -> Result<()> {
    if params.amount != 0 {
        msg!(
            "Incorrect fee for vault {}: tendered {} expected 0",
            params.vault_id,
            params.amount
        );
        return err!(ErrorCode::IncorrectFee);
    }

    let asset_mint = ctx
        .accounts
        .asset_mint
        .as_ref()
        .ok_or(ErrorCode::AssetMismatch)?;
    require_keys_eq!(
        asset_mint.key(),
        ctx.accounts.vault.asset,
        ErrorCode::AssetMismatch
    );

    let payer_token_account = ctx
        .accounts
        .payer_token_account
        .as_ref()
        .ok_or(ErrorCode::AssetMismatch)?;
    require_keys_eq!(
        payer_token_account.mint,
        ctx.accounts.vault.asset,
        ErrorCode::AssetMismatch
    );

    let token_treasury = ctx
        .accounts
        .token_treasury
        .as_ref()
        .ok_or(ErrorCode::AssetMismatch)?;
    let balance_before = token_treasury.amount;

    anchor_spl::token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            anchor_spl::token::Transfer {
                from: payer_token_account.to_account_info(),
                to: token_treasury.to_account_info(),
                authority: ctx.accounts.payer.to_account_info(),
            },
        ),
        fee,
    )?;

    // A token program may report success without moving funds; trust
    // only the observed balance delta.
    let token_treasury = ctx
        .accounts
        .token_treasury
        .as_mut()
        .ok_or(ErrorCode::AssetMismatch)?;
    token_treasury.reload()?;
    let received = token_treasury.amount.saturating_sub(balance_before);
    if received != fee {
        msg!(
            "Transfer failed: from {} to {}",
            ctx.accounts.payer.key(),
            token_treasury.key()
        );
        return err!(ErrorCode::TransferFailed);
    }

    Ok(())
}
