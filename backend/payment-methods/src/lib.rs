//! Payment-method adapters wiring the Dotpay gateway into the host
//! platform's configuration and payment abstractions.

pub mod configs;
pub mod methods;
pub mod value_handler;

pub use configs::{MerchantConfig, ScopedConfigStore};
pub use methods::dotpay::DotpayAdapter;
