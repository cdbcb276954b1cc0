use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// A registered payee configuration and its accumulated balance
#[account]
#[derive(InitSpace)]
pub struct Vault {
    /// Sequential id, assigned at registration
    pub id: u64,
    /// Owner empowered to edit the vault and receive proceeds
    pub owner: Pubkey,
    /// Asset the vault collects; the default pubkey means native
    pub asset: Pubkey,
    /// Whether one account may pay more than once
    pub multiple_payments: bool,
    /// Exact amount required per payment
    pub fee: u64,
    /// Collected, not-yet-withdrawn funds
    pub balance: u64,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl Vault {
    /// True when the vault collects the native asset rather than a token.
    pub fn is_native(&self) -> bool {
        self.asset == Pubkey::default()
    }

    /// Credits a successful payment to the collected balance.
    pub fn credit(&mut self, amount: u64) -> Result<()> {
        self.balance = self
            .balance
            .checked_add(amount)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }

    /// Takes the entire collected balance, leaving zero behind.
    pub fn drain(&mut self) -> u64 {
        std::mem::take(&mut self.balance)
    }

    /// Replaces the owner-editable fields. `id`, `asset` and `balance`
    /// are not touched.
    pub fn update_details(&mut self, owner: Pubkey, multiple_payments: bool, fee: u64) {
        self.owner = owner;
        self.multiple_payments = multiple_payments;
        self.fee = fee;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vault(asset: Pubkey) -> Vault {
        Vault {
            id: 0,
            owner: Pubkey::new_unique(),
            asset,
            multiple_payments: false,
            fee: 100,
            balance: 0,
            bump: 254,
        }
    }

    #[test]
    fn credit_accumulates_payments() {
        let mut vault = vault(Pubkey::default());
        for _ in 0..5 {
            vault.credit(vault.fee).unwrap();
        }
        assert_eq!(vault.balance, 5 * vault.fee);
    }

    #[test]
    fn credit_detects_overflow() {
        let mut vault = vault(Pubkey::default());
        vault.balance = u64::MAX;
        assert!(vault.credit(1).is_err());
        assert_eq!(vault.balance, u64::MAX);
    }

    #[test]
    fn drain_zeroes_the_balance() {
        let mut vault = vault(Pubkey::default());
        vault.credit(300).unwrap();
        assert_eq!(vault.drain(), 300);
        assert_eq!(vault.balance, 0);
        assert_eq!(vault.drain(), 0);
    }

    #[test]
    fn update_details_preserves_asset_and_balance() {
        let asset = Pubkey::new_unique();
        let mut vault = vault(asset);
        vault.credit(42).unwrap();

        let new_owner = Pubkey::new_unique();
        vault.update_details(new_owner, true, 420);

        assert_eq!(vault.owner, new_owner);
        assert!(vault.multiple_payments);
        assert_eq!(vault.fee, 420);
        assert_eq!(vault.asset, asset);
        assert_eq!(vault.balance, 42);
    }

    #[test]
    fn native_sentinel() {
        assert!(vault(Pubkey::default()).is_native());
        assert!(!vault(Pubkey::new_unique()).is_native());
    }
}
