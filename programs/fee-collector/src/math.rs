use anchor_lang::prelude::*;

use crate::constants::BPS_DENOMINATOR;
use crate::errors::ErrorCode;
use crate::states::FeeShare;

/// Full breakdown of a vault's collected balance at withdrawal time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeeBreakdown {
    /// Slice of the balance subject to splitting
    pub royalty_amount: u64,
    /// Partner amounts, in schema entry order
    pub partner_amounts: Vec<u64>,
    /// Royalty residual kept by the platform treasury
    pub platform_amount: u64,
    /// Balance residual returned to the vault owner
    pub owner_amount: u64,
}

/// Returns floor(amount * bps / 10000).
///
/// Callers guarantee `bps <= 10000`, so the result never exceeds `amount`
/// and the narrowing cast is lossless.
pub fn share_of(amount: u64, bps: u16) -> u64 {
    ((amount as u128 * bps as u128) / BPS_DENOMINATOR as u128) as u64
}

/// Splits a collected balance between schema partners, the platform
/// treasury and the vault owner.
///
/// Partner amounts are floored shares of the royalty slice; the platform
/// and owner amounts are derived by subtraction, so truncation loss always
/// accrues to the residual recipients and the four parts sum to `balance`
/// exactly. Over-allocated schemas surface as `ShareExceedsPool` here, at
/// the point of actual fund movement.
pub fn split_collected(
    balance: u64,
    total_fee_bps: u16,
    entries: &[FeeShare],
) -> Result<FeeBreakdown> {
    let royalty_amount = share_of(balance, total_fee_bps);

    let mut partner_amounts = Vec::with_capacity(entries.len());
    let mut platform_amount = royalty_amount;
    for entry in entries {
        let partner_amount = share_of(royalty_amount, entry.fee_share_bps);
        platform_amount = platform_amount
            .checked_sub(partner_amount)
            .ok_or(ErrorCode::ShareExceedsPool)?;
        partner_amounts.push(partner_amount);
    }

    let owner_amount = balance
        .checked_sub(royalty_amount)
        .ok_or(ErrorCode::MathOverflow)?;

    Ok(FeeBreakdown {
        royalty_amount,
        partner_amounts,
        platform_amount,
        owner_amount,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // 0.1 of a 18-decimal asset, the fee used throughout the scenarios
    const POOL: u64 = 100_000_000_000_000_000;
    const TOTAL_FEE_BPS: u16 = 469;

    fn entry(bps: u16) -> FeeShare {
        FeeShare {
            treasury: Pubkey::new_unique(),
            fee_share_bps: bps,
        }
    }

    fn total(breakdown: &FeeBreakdown) -> u64 {
        breakdown.partner_amounts.iter().sum::<u64>()
            + breakdown.platform_amount
            + breakdown.owner_amount
    }

    #[test]
    fn share_of_floors() {
        assert_eq!(share_of(10_000, 10_000), 10_000);
        assert_eq!(share_of(10_000, 0), 0);
        assert_eq!(share_of(10_001, 5_000), 5_000);
        assert_eq!(share_of(3, 3_333), 0);
    }

    #[test]
    fn share_of_widens_before_multiplying() {
        assert_eq!(share_of(u64::MAX, 10_000), u64::MAX);
        assert_eq!(share_of(u64::MAX, 5_000), u64::MAX / 2);
    }

    #[test]
    fn empty_schema_routes_royalty_to_platform() {
        let breakdown = split_collected(POOL, TOTAL_FEE_BPS, &[]).unwrap();
        assert_eq!(breakdown.royalty_amount, 4_690_000_000_000_000);
        assert_eq!(breakdown.platform_amount, breakdown.royalty_amount);
        assert_eq!(breakdown.owner_amount, POOL - breakdown.royalty_amount);
        assert!(breakdown.partner_amounts.is_empty());
        assert_eq!(total(&breakdown), POOL);
    }

    #[test]
    fn partner_schema_splits_royalty() {
        let entries = [entry(2_300), entry(2_700)];
        let breakdown = split_collected(POOL, TOTAL_FEE_BPS, &entries).unwrap();

        let royalty = breakdown.royalty_amount;
        assert_eq!(breakdown.partner_amounts[0], share_of(royalty, 2_300));
        assert_eq!(breakdown.partner_amounts[1], share_of(royalty, 2_700));
        assert_eq!(
            breakdown.platform_amount,
            royalty - breakdown.partner_amounts[0] - breakdown.partner_amounts[1]
        );
        assert_eq!(breakdown.owner_amount, POOL - royalty);
        assert_eq!(total(&breakdown), POOL);
    }

    #[test]
    fn full_allocation_leaves_platform_only_dust() {
        // 4200 + 5800 bps claims the entire royalty; the platform keeps
        // only what flooring left over.
        let entries = [entry(4_200), entry(5_800)];
        let breakdown = split_collected(POOL, TOTAL_FEE_BPS, &entries).unwrap();

        let exact: u64 = breakdown.partner_amounts.iter().sum();
        assert_eq!(breakdown.platform_amount, breakdown.royalty_amount - exact);
        assert!(breakdown.platform_amount < 2);
        assert_eq!(total(&breakdown), POOL);
    }

    #[test]
    fn over_allocated_schema_fails() {
        let entries = [entry(4_200), entry(6_900)];
        assert!(split_collected(POOL, TOTAL_FEE_BPS, &entries).is_err());
    }

    #[test]
    fn truncation_favors_residual_recipients() {
        // Awkward pool sizes: flooring of partner shares may only ever
        // increase the residuals, never decrease them.
        for pool in [1u64, 7, 999, 10_001, 123_456_789] {
            let entries = [entry(3_333), entry(3_333), entry(3_333)];
            let breakdown = split_collected(pool, TOTAL_FEE_BPS, &entries).unwrap();

            // owner_amount * 10^4 >= pool * (10^4 - total_fee_bps)
            let owner_scaled = breakdown.owner_amount as u128 * 10_000;
            let owner_exact_scaled = pool as u128 * (10_000 - TOTAL_FEE_BPS as u128);
            assert!(owner_scaled >= owner_exact_scaled);

            // Partners only ever lose to flooring; the platform absorbs
            // exactly what they lost.
            let partners: u64 = breakdown.partner_amounts.iter().sum();
            assert_eq!(
                breakdown.platform_amount,
                breakdown.royalty_amount - partners
            );
            assert_eq!(total(&breakdown), pool);
        }
    }

    #[test]
    fn zero_rate_leaves_everything_with_the_owner() {
        let breakdown = split_collected(POOL, 0, &[entry(5_000)]).unwrap();
        assert_eq!(breakdown.royalty_amount, 0);
        assert_eq!(breakdown.platform_amount, 0);
        assert_eq!(breakdown.partner_amounts, vec![0]);
        assert_eq!(breakdown.owner_amount, POOL);
    }

    #[test]
    fn zero_balance_splits_to_zero() {
        let breakdown = split_collected(0, TOTAL_FEE_BPS, &[entry(2_300)]).unwrap();
        assert_eq!(total(&breakdown), 0);
    }
}
