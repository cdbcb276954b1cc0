// PDA Seeds
pub const CONFIG_SEED: &[u8] = b"config";
pub const VAULT_SEED: &[u8] = b"vault";
pub const FEE_SCHEMA_SEED: &[u8] = b"fee_schema";
pub const PAYMENT_RECORD_SEED: &[u8] = b"payment_record";
pub const NATIVE_TREASURY_SEED: &[u8] = b"native_treasury";
pub const TOKEN_TREASURY_SEED: &[u8] = b"token_treasury";
pub const COLLECTOR_AUTHORITY_SEED: &[u8] = b"collector_authority";

// Basis point constants
pub const BPS_DENOMINATOR: u64 = 10_000;
pub const MAX_BPS: u16 = 10_000; // 100%

// Schema limits
pub const MAX_SCHEMA_NAME_LEN: usize = 32;
pub const MAX_SCHEMA_ENTRIES: usize = 16;
