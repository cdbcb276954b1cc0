use anchor_lang::prelude::*;

use crate::constants::CONFIG_SEED;
use crate::errors::ErrorCode;
use crate::states::FeeCollectorConfig;

#[derive(Accounts)]
pub struct SetTotalFeeBps<'info> {
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
pub struct SetTotalFeeBpsParams {
    /// New rate in basis points
    pub total_fee_bps: u16,
}

impl<'info> SetTotalFeeBps<'info> {
    pub fn handle(ctx: Context<SetTotalFeeBps>, params: SetTotalFeeBpsParams) -> Result<()> {
        let config = &mut ctx.accounts.config;
        config.set_total_fee_bps(params.total_fee_bps)?;

        msg!("Total fee changed to {} bps", config.total_fee_bps);

        emit!(crate::events::TotalFeeBpsChanged {
            total_fee_bps: config.total_fee_bps,
            timestamp: Clock::get()?.unix_timestamp,
        });

        Ok(())
    }
}
