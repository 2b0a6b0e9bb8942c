// Payment-method registry and exports

pub mod dotpay;

pub use dotpay::DotpayAdapter;
