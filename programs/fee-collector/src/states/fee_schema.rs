use anchor_lang::prelude::*;

use crate::constants::{MAX_BPS, MAX_SCHEMA_ENTRIES, MAX_SCHEMA_NAME_LEN};
use crate::errors::ErrorCode;

/// One beneficiary of a fee schema
#[derive(AnchorSerialize, AnchorDeserialize, InitSpace, Clone, Debug, PartialEq, Eq)]
pub struct FeeShare {
    /// Destination wallet for this partner's share
    pub treasury: Pubkey,
    /// Partner's share of the royalty slice, in basis points
    pub fee_share_bps: u16,
}

/// A named, ordered list of partner shares
///
/// Entry shares are deliberately not validated against the pool here:
/// a schema may be authored before a compatible total fee rate exists,
/// and over-allocation surfaces at withdrawal time instead.
#[account]
#[derive(InitSpace)]
pub struct FeeSchema {
    /// The schema's name, its registry key
    #[max_len(MAX_SCHEMA_NAME_LEN)]
    pub name: String,
    /// Partner entries, applied in order
    #[max_len(MAX_SCHEMA_ENTRIES)]
    pub entries: Vec<FeeShare>,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl FeeSchema {
    /// Replaces the schema's contents after size and per-entry bounds
    /// checks. Sum-of-shares is left unchecked on purpose.
    pub fn set_entries(&mut self, name: String, entries: Vec<FeeShare>) -> Result<()> {
        require!(
            name.len() <= MAX_SCHEMA_NAME_LEN,
            ErrorCode::SchemaNameTooLong
        );
        require!(
            entries.len() <= MAX_SCHEMA_ENTRIES,
            ErrorCode::TooManySchemaEntries
        );
        for entry in &entries {
            require!(entry.fee_share_bps <= MAX_BPS, ErrorCode::InvalidBps);
        }

        self.name = name;
        self.entries = entries;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn schema() -> FeeSchema {
        FeeSchema {
            name: String::new(),
            entries: Vec::new(),
            bump: 253,
        }
    }

    fn entry(bps: u16) -> FeeShare {
        FeeShare {
            treasury: Pubkey::new_unique(),
            fee_share_bps: bps,
        }
    }

    #[test]
    fn set_entries_overwrites_wholesale() {
        let mut schema = schema();
        schema
            .set_entries("default".to_string(), vec![entry(2_300), entry(2_700)])
            .unwrap();
        assert_eq!(schema.entries.len(), 2);

        schema.set_entries("default".to_string(), vec![]).unwrap();
        assert!(schema.entries.is_empty());
    }

    #[test]
    fn over_allocated_sums_are_accepted_at_write_time() {
        // 4200 + 6900 > 10000: valid to author, fails only on withdrawal.
        let mut schema = schema();
        schema
            .set_entries("partners".to_string(), vec![entry(4_200), entry(6_900)])
            .unwrap();
        assert_eq!(schema.entries.len(), 2);
    }

    #[test]
    fn individual_entries_are_bounded() {
        let mut schema = schema();
        assert!(schema
            .set_entries("bad".to_string(), vec![entry(10_001)])
            .is_err());
    }

    #[test]
    fn size_limits_are_enforced() {
        let mut schema = schema();
        assert!(schema
            .set_entries("x".repeat(MAX_SCHEMA_NAME_LEN + 1), vec![])
            .is_err());
        assert!(schema
            .set_entries(
                "big".to_string(),
                (0..=MAX_SCHEMA_ENTRIES).map(|_| entry(10)).collect()
            )
            .is_err());
    }
}
