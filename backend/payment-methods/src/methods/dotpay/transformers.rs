use domain_types::{
    errors::ConfigError, Configuration, GatewayParams, SellerId,
};
use hyperswitch_masking::Secret;

use crate::configs::Module;

/// Values the adapter resolved for one scope, ready for aggregation into
/// the SDK-facing types.
#[derive(Clone, Debug, Default)]
pub struct ConfigurationContext {
    pub module: Module,
    pub enabled: bool,
    pub seller_id: Option<SellerId>,
    pub seller_pin: Option<Secret<String>>,
    pub username: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
    pub test_mode: bool,
    pub instruction_visible: bool,
    pub shop_name: Option<String>,
    pub gateway: GatewayParams,
}

// Auth Types
#[derive(Clone, Debug)]
pub struct SellerAuth {
    pub seller_id: SellerId,
    pub pin: Secret<String>,
    pub username: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
}

impl TryFrom<&ConfigurationContext> for SellerAuth {
    type Error = error_stack::Report<ConfigError>;

    fn try_from(context: &ConfigurationContext) -> Result<Self, Self::Error> {
        match (context.seller_id, &context.seller_pin) {
            (Some(seller_id), Some(pin)) => Ok(Self {
                seller_id,
                pin: pin.clone(),
                username: context.username.clone(),
                password: context.password.clone(),
            }),
            _ => Err(ConfigError::FailedToObtainAuthType.into()),
        }
    }
}

impl From<ConfigurationContext> for Configuration {
    fn from(context: ConfigurationContext) -> Self {
        Configuration::new(context.module.name)
            .with_enabled(context.enabled)
            .with_seller_id(context.seller_id)
            .with_seller_pin(context.seller_pin)
            .with_username(context.username)
            .with_password(context.password)
            .with_test_mode(context.test_mode)
            .with_instruction_visible(context.instruction_visible)
            .with_shop_name(context.shop_name)
            .with_gateway(context.gateway)
    }
}
