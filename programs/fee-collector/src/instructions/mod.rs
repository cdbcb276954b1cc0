pub mod initialize_config;
pub use initialize_config::*;

pub mod register_vault;
pub use register_vault::*;

pub mod set_vault_details;
pub use set_vault_details::*;

pub mod add_fee_schema;
pub use add_fee_schema::*;

pub mod pay_fee;
pub use pay_fee::*;

pub mod withdraw;
pub use withdraw::*;

pub mod set_platform_treasury;
pub use set_platform_treasury::*;

pub mod set_total_fee_bps;
pub use set_total_fee_bps::*;

pub mod query;
pub use query::*;
