//! Domain value types shared by the payment-method crates.

pub mod configuration;
pub mod consts;
pub mod errors;
pub mod types;

pub use configuration::Configuration;
pub use errors::{ConfigError, CustomResult};
pub use types::{ConfigValue, GatewayParams, SellerId, StoreScope};
