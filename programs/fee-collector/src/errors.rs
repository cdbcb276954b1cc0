use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Vault does not exist")]
    VaultDoesNotExist,
    #[msg("Caller is not authorized for this operation")]
    AccessDenied,
    #[msg("Account has already paid this vault's fee")]
    AlreadyPaid,
    #[msg("Tendered amount does not match the required fee")]
    IncorrectFee,
    #[msg("Asset transfer did not credit the expected amount")]
    TransferFailed,
    #[msg("Schema shares exceed the distributable fee pool")]
    ShareExceedsPool,
    #[msg("Math overflow occurred during calculation")]
    MathOverflow,
    #[msg("Basis points value must not exceed 10000")]
    InvalidBps,
    #[msg("Schema name exceeds the maximum length")]
    SchemaNameTooLong,
    #[msg("Schema has too many entries")]
    TooManySchemaEntries,
    #[msg("Partner accounts do not match the schema entries")]
    SchemaMismatch,
    #[msg("Destination account does not match the expected treasury")]
    TreasuryMismatch,
    #[msg("Provided asset accounts do not match the vault's asset")]
    AssetMismatch,
}
