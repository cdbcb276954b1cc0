use anchor_lang::prelude::*;

/// Event emitted when the collector configuration is created
#[event]
pub struct ConfigInitialized {
    /// The config PDA
    pub config: Pubkey,
    /// Administrator empowered to manage schemas and platform parameters
    pub authority: Pubkey,
    /// Destination for the platform's share of withdrawals
    pub platform_treasury: Pubkey,
    /// Fraction of each vault's pool subject to splitting, in basis points
    pub total_fee_bps: u16,
    /// Timestamp of initialization
    pub timestamp: i64,
}

/// Event emitted when a new vault is registered
#[event]
pub struct VaultRegistered {
    /// Sequential id assigned to the vault
    pub vault_id: u64,
    /// Owner empowered to edit the vault and receive proceeds
    pub owner: Pubkey,
    /// Asset the vault collects (default pubkey = native)
    pub asset: Pubkey,
    /// Exact amount required per payment
    pub fee: u64,
    /// Whether one account may pay more than once
    pub multiple_payments: bool,
    /// Timestamp of registration
    pub timestamp: i64,
}

/// Event emitted when a vault's mutable details are changed
#[event]
pub struct VaultDetailsChanged {
    /// The edited vault's id
    pub vault_id: u64,
    /// New owner
    pub owner: Pubkey,
    /// New multiple-payments policy
    pub multiple_payments: bool,
    /// New fee amount
    pub fee: u64,
    /// Timestamp of the change
    pub timestamp: i64,
}

/// Event emitted when a fee payment is received
#[event]
pub struct FeeReceived {
    /// The paid vault's id
    pub vault_id: u64,
    /// The paying account
    pub payer: Pubkey,
    /// Amount credited to the vault's balance
    pub amount: u64,
    /// Timestamp of the payment
    pub timestamp: i64,
}

/// Event emitted when a vault's collected balance is distributed
#[event]
pub struct Withdrawn {
    /// The drained vault's id
    pub vault_id: u64,
    /// Name of the schema the pool was split against
    pub schema_name: String,
    /// Slice of the balance subject to splitting
    pub royalty_amount: u64,
    /// Residual of the royalty kept by the platform treasury
    pub platform_amount: u64,
    /// Residual of the balance sent to the vault owner
    pub owner_amount: u64,
    /// Timestamp of the withdrawal
    pub timestamp: i64,
}

/// Event emitted when a fee schema is added or replaced
#[event]
pub struct FeeSchemaAdded {
    /// The schema's name
    pub name: String,
    /// Number of partner entries stored
    pub entries: u32,
    /// Timestamp of the write
    pub timestamp: i64,
}

/// Event emitted when the platform treasury address is changed
#[event]
pub struct PlatformTreasuryChanged {
    /// The new platform treasury
    pub platform_treasury: Pubkey,
    /// Timestamp of the change
    pub timestamp: i64,
}

/// Event emitted when the total fee rate is changed
#[event]
pub struct TotalFeeBpsChanged {
    /// The new rate in basis points
    pub total_fee_bps: u16,
    /// Timestamp of the change
    pub timestamp: i64,
}
