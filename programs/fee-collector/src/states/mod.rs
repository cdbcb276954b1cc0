pub mod config;
pub mod fee_schema;
pub mod payment_record;
pub mod vault;

pub use config::*;
pub use fee_schema::*;
pub use payment_record::*;
pub use vault::*;
