use anchor_lang::prelude::*;

use crate::errors::ErrorCode;

/// Per-(vault, payer) payment tracker
#[account]
#[derive(InitSpace)]
pub struct PaymentRecord {
    /// The paid vault's id
    pub vault_id: u64,
    /// The paying account
    pub payer: Pubkey,
    /// Set on the first successful payment; never reset
    pub paid: bool,
    /// Number of successful payments by this payer
    pub payment_count: u32,
    /// Bump seed for the PDA
    pub bump: u8,
}

impl PaymentRecord {
    /// Records a successful payment, enforcing the vault's
    /// single-payment policy.
    pub fn register_payment(&mut self, multiple_payments: bool) -> Result<()> {
        if self.paid {
            require!(multiple_payments, ErrorCode::AlreadyPaid);
        }
        self.paid = true;
        self.payment_count = self
            .payment_count
            .checked_add(1)
            .ok_or(ErrorCode::MathOverflow)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> PaymentRecord {
        PaymentRecord {
            vault_id: 0,
            payer: Pubkey::new_unique(),
            paid: false,
            payment_count: 0,
            bump: 252,
        }
    }

    #[test]
    fn first_payment_marks_paid() {
        let mut record = record();
        record.register_payment(false).unwrap();
        assert!(record.paid);
        assert_eq!(record.payment_count, 1);
    }

    #[test]
    fn repeat_payment_requires_multiple_payments() {
        let mut record = record();
        record.register_payment(false).unwrap();

        assert!(record.register_payment(false).is_err());
        assert_eq!(record.payment_count, 1);

        record.register_payment(true).unwrap();
        assert_eq!(record.payment_count, 2);
    }

    #[test]
    fn paid_is_one_way() {
        let mut record = record();
        record.register_payment(true).unwrap();
        record.register_payment(true).unwrap();
        assert!(record.paid);
    }
}
