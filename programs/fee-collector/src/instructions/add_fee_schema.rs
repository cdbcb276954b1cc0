use anchor_lang::prelude::*;

use crate::constants::{CONFIG_SEED, FEE_SCHEMA_SEED};
use crate::errors::ErrorCode;
use crate::states::{FeeCollectorConfig, FeeSchema, FeeShare};

/// Creates or wholesale-replaces the schema stored under a name.
#[derive(Accounts)]
#[instruction(params: AddFeeSchemaParams)]
pub struct AddFeeSchema<'info> {
    #[account(mut)]
    pub authority: Signer<'info>,

    #[account(
        seeds = [CONFIG_SEED],
        bump = config.bump,
        has_one = authority @ ErrorCode::AccessDenied
    )]
    pub config: Account<'info, FeeCollectorConfig>,

    #[account(
        init_if_needed,
        payer = authority,
        space = FeeSchema::DISCRIMINATOR.len() + FeeSchema::INIT_SPACE,
        seeds = [FEE_SCHEMA_SEED, params.name.as_bytes()],
        bump
    )]
    pub fee_schema: Account<'info, FeeSchema>,

    pub system_program: Program<'info, System>,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct AddFeeSchemaParams {
    /// The schema's name
    pub name: String,
    /// Partner entries, applied in order at withdrawal
    pub entries: Vec<FeeShare>,
}

impl<'info> AddFeeSchema<'info> {
    pub fn handle(ctx: Context<AddFeeSchema>, params: AddFeeSchemaParams) -> Result<()> {
        let fee_schema = &mut ctx.accounts.fee_schema;
        let entries = params.entries.len();

        fee_schema.set_entries(params.name.clone(), params.entries)?;
        fee_schema.bump = ctx.bumps.fee_schema;

        msg!("Fee schema '{}' stored with {} entries", params.name, entries);

        emit!(crate::events::FeeSchemaAdded {
            name: params.name,
            entries: entries as u32,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
