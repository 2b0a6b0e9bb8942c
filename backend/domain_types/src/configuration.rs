use hyperswitch_masking::Secret;

use crate::types::{GatewayParams, SellerId};

/// General configuration object handed to the payment SDK. Constructed
/// fresh per request, no persisted lifecycle of its own.
#[derive(Clone, Debug, Default)]
pub struct Configuration {
    module_name: String,
    enabled: bool,
    seller_id: Option<SellerId>,
    seller_pin: Option<Secret<String>>,
    username: Option<Secret<String>>,
    password: Option<Secret<String>>,
    test_mode: bool,
    instruction_visible: bool,
    shop_name: Option<String>,
    gateway: GatewayParams,
}

impl Configuration {
    pub fn new(module_name: impl Into<String>) -> Self {
        Self {
            module_name: module_name.into(),
            ..Self::default()
        }
    }

    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    pub fn with_seller_id(mut self, seller_id: Option<SellerId>) -> Self {
        self.seller_id = seller_id;
        self
    }

    pub fn with_seller_pin(mut self, seller_pin: Option<Secret<String>>) -> Self {
        self.seller_pin = seller_pin;
        self
    }

    pub fn with_username(mut self, username: Option<Secret<String>>) -> Self {
        self.username = username;
        self
    }

    pub fn with_password(mut self, password: Option<Secret<String>>) -> Self {
        self.password = password;
        self
    }

    pub fn with_test_mode(mut self, test_mode: bool) -> Self {
        self.test_mode = test_mode;
        self
    }

    pub fn with_instruction_visible(mut self, instruction_visible: bool) -> Self {
        self.instruction_visible = instruction_visible;
        self
    }

    pub fn with_shop_name(mut self, shop_name: Option<String>) -> Self {
        self.shop_name = shop_name;
        self
    }

    pub fn with_gateway(mut self, gateway: GatewayParams) -> Self {
        self.gateway = gateway;
        self
    }

    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn seller_id(&self) -> Option<SellerId> {
        self.seller_id
    }

    pub fn seller_pin(&self) -> Option<&Secret<String>> {
        self.seller_pin.as_ref()
    }

    pub fn username(&self) -> Option<&Secret<String>> {
        self.username.as_ref()
    }

    pub fn password(&self) -> Option<&Secret<String>> {
        self.password.as_ref()
    }

    pub fn is_test_mode(&self) -> bool {
        self.test_mode
    }

    pub fn is_instruction_visible(&self) -> bool {
        self.instruction_visible
    }

    pub fn shop_name(&self) -> Option<&str> {
        self.shop_name.as_deref()
    }

    pub fn gateway(&self) -> &GatewayParams {
        &self.gateway
    }

    /// Payment endpoint effective for the configured mode.
    pub fn payment_base_url(&self) -> &str {
        self.gateway.payment_url(self.test_mode)
    }

    /// Seller API endpoint effective for the configured mode.
    pub fn seller_api_url(&self) -> &str {
        self.gateway.seller_api(self.test_mode)
    }
}

#[cfg(test)]
mod tests {
    use hyperswitch_masking::PeekInterface;

    use super::*;
    use crate::consts;

    #[test]
    fn test_fluent_assembly() {
        let configuration = Configuration::new(consts::MODULE_NAME)
            .with_enabled(true)
            .with_seller_id(Some(SellerId::new(123456)))
            .with_seller_pin(Some(Secret::new("pin".to_string())))
            .with_username(Some(Secret::new("seller".to_string())))
            .with_password(Some(Secret::new("password".to_string())))
            .with_test_mode(false)
            .with_instruction_visible(true)
            .with_shop_name(Some("Example Shop".to_string()));

        assert_eq!(configuration.module_name(), "dotpay_payment");
        assert!(configuration.is_enabled());
        assert_eq!(configuration.seller_id(), Some(SellerId::new(123456)));
        assert_eq!(configuration.seller_pin().unwrap().peek(), "pin");
        assert_eq!(configuration.username().unwrap().peek(), "seller");
        assert_eq!(configuration.password().unwrap().peek(), "password");
        assert_eq!(configuration.shop_name(), Some("Example Shop"));
        assert!(configuration.is_instruction_visible());
    }

    #[test]
    fn test_endpoints_follow_test_mode() {
        let live = Configuration::new(consts::MODULE_NAME).with_test_mode(false);
        assert_eq!(live.payment_base_url(), "https://ssl.dotpay.pl/t2/");
        assert_eq!(live.seller_api_url(), "https://ssl.dotpay.pl/s2/login/");

        let test = Configuration::new(consts::MODULE_NAME).with_test_mode(true);
        assert_eq!(test.payment_base_url(), "https://ssl.dotpay.pl/test_payment/");
        assert_eq!(test.seller_api_url(), "https://ssl.dotpay.pl/test_seller/");
    }

    #[test]
    fn test_secrets_masked_in_debug_output() {
        let configuration = Configuration::new(consts::MODULE_NAME)
            .with_seller_pin(Some(Secret::new("super_secret_pin".to_string())));
        let rendered = format!("{configuration:?}");
        assert!(!rendered.contains("super_secret_pin"));
    }
}
