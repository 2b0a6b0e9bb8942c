/// Name under which the integration registers with the payment SDK.
pub const MODULE_NAME: &str = "dotpay_payment";

/// Prefix of the environment variables overriding the merchant
/// configuration file.
pub const ENV_PREFIX: &str = "DOTPAY";

/// Configuration path the shop name is stored under.
pub const SHOP_NAME_PATH: &str = "general/store_information/name";

/// Production payment endpoint of the gateway.
pub const PRODUCTION_PAYMENT_URL: &str = "https://ssl.dotpay.pl/t2/";
/// Payment endpoint of the gateway's test environment.
pub const TEST_PAYMENT_URL: &str = "https://ssl.dotpay.pl/test_payment/";
/// Production seller API endpoint.
pub const PRODUCTION_SELLER_API_URL: &str = "https://ssl.dotpay.pl/s2/login/";
/// Seller API endpoint of the gateway's test environment.
pub const TEST_SELLER_API_URL: &str = "https://ssl.dotpay.pl/test_seller/";
