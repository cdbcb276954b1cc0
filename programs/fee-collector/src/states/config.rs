use anchor_lang::prelude::*;

use crate::constants::MAX_BPS;
use crate::errors::ErrorCode;

/// Global collector configuration and vault id allocator
#[account]
#[derive(InitSpace)]
pub struct FeeCollectorConfig {
    /// Administrator empowered to manage schemas and platform parameters
    pub authority: Pubkey,
    /// Destination for the platform's share of withdrawals
    pub platform_treasury: Pubkey,
    /// Fraction of each vault's pool subject to splitting, in basis points
    pub total_fee_bps: u16,
    /// Next vault id to assign; monotonic, never reused
    pub next_vault_id: u64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl FeeCollectorConfig {
    /// Assigns the next sequential vault id.
    pub fn allocate_vault_id(&mut self) -> Result<u64> {
        let id = self.next_vault_id;
        self.next_vault_id = id.checked_add(1).ok_or(ErrorCode::MathOverflow)?;
        Ok(id)
    }

    /// Updates the total fee rate, rejecting values above 100%.
    pub fn set_total_fee_bps(&mut self, total_fee_bps: u16) -> Result<()> {
        require!(total_fee_bps <= MAX_BPS, ErrorCode::InvalidBps);
        self.total_fee_bps = total_fee_bps;
        Ok(())
    }

    /// True when `id` has been assigned to a vault.
    pub fn vault_exists(&self, id: u64) -> bool {
        id < self.next_vault_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> FeeCollectorConfig {
        FeeCollectorConfig {
            authority: Pubkey::new_unique(),
            platform_treasury: Pubkey::new_unique(),
            total_fee_bps: 469,
            next_vault_id: 0,
            bump: 255,
        }
    }

    #[test]
    fn vault_ids_are_sequential_and_gap_free() {
        let mut config = config();
        assert_eq!(config.allocate_vault_id().unwrap(), 0);
        assert_eq!(config.allocate_vault_id().unwrap(), 1);
        assert_eq!(config.allocate_vault_id().unwrap(), 2);
        assert_eq!(config.next_vault_id, 3);
    }

    #[test]
    fn vault_exists_tracks_the_allocator() {
        let mut config = config();
        assert!(!config.vault_exists(0));
        config.allocate_vault_id().unwrap();
        assert!(config.vault_exists(0));
        assert!(!config.vault_exists(1));
    }

    #[test]
    fn total_fee_bps_is_bounded() {
        let mut config = config();
        config.set_total_fee_bps(10_000).unwrap();
        assert_eq!(config.total_fee_bps, 10_000);
        assert!(config.set_total_fee_bps(10_001).is_err());
        assert_eq!(config.total_fee_bps, 10_000);
    }
}
