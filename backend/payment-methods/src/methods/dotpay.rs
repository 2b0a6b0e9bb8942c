pub mod transformers;

use std::sync::Arc;

use common_enums::MethodCode;
use domain_types::{
    consts,
    errors::{ConfigError, CustomResult},
    ConfigValue, Configuration, GatewayParams, SellerId, StoreScope,
};
use error_stack::report;
use hyperswitch_masking::Secret;
use url::Url;

use crate::{
    configs::{MerchantConfig, Module, ScopedConfigStore},
    value_handler::{LookupSubject, ValueHandlerPool, MAIN_HANDLER_GROUP},
};
use transformers::{ConfigurationContext, SellerAuth};

/// Configured field names of the integration.
pub mod fields {
    pub const ACTIVE: &str = "active";
    pub const ID: &str = "id";
    pub const PIN: &str = "pin";
    pub const USERNAME: &str = "username";
    pub const PASSWORD: &str = "password";
    pub const TEST: &str = "test";
    pub const INSTRUCTION: &str = "instruction";
    pub const DISPLAY_LOGO: &str = "display_logo";
    pub const REDIRECT_URL: &str = "redirect_url";
    pub const INSTRUCTION_URL: &str = "instruction_url";
    pub const BACK_URL: &str = "back_url";
    pub const STATUS_URL: &str = "status_url";
    pub const CONFIRM_URL: &str = "confirm_url";
    pub const OC_MANAGE_URL: &str = "oc_manage_url";
    pub const OC_REMOVE_URL: &str = "oc_remove_url";
}

/// Adapter of one Dotpay payment method. Every getter forwards to the
/// injected value-handler pool; the store scope is caller-supplied.
pub struct DotpayAdapter {
    code: MethodCode,
    value_handler_pool: Arc<ValueHandlerPool>,
    scope_config: Arc<ScopedConfigStore>,
    module: Module,
    gateway: GatewayParams,
}

impl DotpayAdapter {
    pub fn new(
        code: MethodCode,
        value_handler_pool: Arc<ValueHandlerPool>,
        scope_config: Arc<ScopedConfigStore>,
        module: Module,
        gateway: GatewayParams,
    ) -> Self {
        Self {
            code,
            value_handler_pool,
            scope_config,
            module,
            gateway,
        }
    }

    /// Adapter wired to scoped handlers seeded from the merchant
    /// configuration.
    pub fn from_merchant_config(
        code: MethodCode,
        config: &MerchantConfig,
    ) -> CustomResult<Self, ConfigError> {
        let store = Arc::new(config.seed_store()?);
        let pool = Arc::new(ValueHandlerPool::scoped(store.clone()));
        Ok(Self::new(
            code,
            pool,
            store,
            config.module.clone(),
            config.gateway.clone(),
        ))
    }

    pub fn code(&self) -> MethodCode {
        self.code
    }

    /// Whether the module as a whole is enabled.
    pub fn is_main_active(&self, scope: &StoreScope) -> CustomResult<bool, ConfigError> {
        self.main_flag(fields::ACTIVE, scope)
    }

    /// Whether this payment method is available. A method is active only
    /// when the module-level flag and its own flag are both set.
    pub fn is_active(&self, scope: &StoreScope) -> CustomResult<bool, ConfigError> {
        if !self.is_main_active(scope)? {
            return Ok(false);
        }
        self.own_flag(fields::ACTIVE, scope)
    }

    pub fn seller_id(&self, scope: &StoreScope) -> CustomResult<Option<SellerId>, ConfigError> {
        match self.configured_main_value(fields::ID, scope)? {
            Some(value) => value
                .as_u64()
                .map(SellerId::new)
                .map(Some)
                .ok_or_else(|| report!(ConfigError::InvalidFieldValue { field: fields::ID })),
            None => Ok(None),
        }
    }

    pub fn seller_pin(
        &self,
        scope: &StoreScope,
    ) -> CustomResult<Option<Secret<String>>, ConfigError> {
        self.main_secret(fields::PIN, scope)
    }

    /// Username of the seller in the gateway panel.
    pub fn seller_username(
        &self,
        scope: &StoreScope,
    ) -> CustomResult<Option<Secret<String>>, ConfigError> {
        self.main_secret(fields::USERNAME, scope)
    }

    /// Password of the seller in the gateway panel.
    pub fn seller_password(
        &self,
        scope: &StoreScope,
    ) -> CustomResult<Option<Secret<String>>, ConfigError> {
        self.main_secret(fields::PASSWORD, scope)
    }

    pub fn is_test_mode(&self, scope: &StoreScope) -> CustomResult<bool, ConfigError> {
        self.main_flag(fields::TEST, scope)
    }

    /// Whether the payment-completion instruction is shown in the shop.
    pub fn is_instruction_available(&self, scope: &StoreScope) -> CustomResult<bool, ConfigError> {
        self.main_flag(fields::INSTRUCTION, scope)
    }

    /// Whether the channel logo is shown on the checkout page.
    pub fn is_logo_displayed(&self, scope: &StoreScope) -> CustomResult<bool, ConfigError> {
        self.main_flag(fields::DISPLAY_LOGO, scope)
    }

    /// Url of the payment-preparing page.
    pub fn redirect_url(&self, scope: &StoreScope) -> CustomResult<Option<Url>, ConfigError> {
        self.main_url(fields::REDIRECT_URL, scope)
    }

    /// Url of the page showing the payment-completion instruction.
    pub fn instruction_url(&self, scope: &StoreScope) -> CustomResult<Option<Url>, ConfigError> {
        self.main_url(fields::INSTRUCTION_URL, scope)
    }

    /// Url the buyer returns to.
    pub fn back_url(&self, scope: &StoreScope) -> CustomResult<Option<Url>, ConfigError> {
        self.main_url(fields::BACK_URL, scope)
    }

    /// Url where the payment status is checked.
    pub fn status_url(&self, scope: &StoreScope) -> CustomResult<Option<Url>, ConfigError> {
        self.main_url(fields::STATUS_URL, scope)
    }

    /// Url receiving payment notifications from the gateway.
    pub fn confirm_url(&self, scope: &StoreScope) -> CustomResult<Option<Url>, ConfigError> {
        self.main_url(fields::CONFIRM_URL, scope)
    }

    /// Url of the saved-cards management page.
    pub fn oc_manage_url(&self, scope: &StoreScope) -> CustomResult<Option<Url>, ConfigError> {
        self.main_url(fields::OC_MANAGE_URL, scope)
    }

    /// Url where saved cards are removed.
    pub fn oc_remove_url(&self, scope: &StoreScope) -> CustomResult<Option<Url>, ConfigError> {
        self.main_url(fields::OC_REMOVE_URL, scope)
    }

    /// Version of the installed integration, from the module registry
    /// entry.
    pub fn module_version(&self) -> &str {
        &self.module.version
    }

    /// Shop name from the store-information configuration.
    pub fn shop_name(&self, scope: &StoreScope) -> Option<String> {
        self.scope_config
            .get(consts::SHOP_NAME_PATH, scope)
            .and_then(|value| value.as_str().map(str::to_owned))
    }

    /// Seller credentials converted from the resolved configuration.
    pub fn seller_auth(&self, scope: &StoreScope) -> CustomResult<SellerAuth, ConfigError> {
        let context = self.resolve_context(scope)?;
        SellerAuth::try_from(&context)
    }

    /// SDK configuration object with general information.
    pub fn configuration(&self, scope: &StoreScope) -> CustomResult<Configuration, ConfigError> {
        let context = self.resolve_context(scope)?;
        tracing::info!(
            method = %self.code,
            enabled = context.enabled,
            test_mode = context.test_mode,
            "assembled sdk configuration"
        );
        Ok(Configuration::from(context))
    }

    fn resolve_context(&self, scope: &StoreScope) -> CustomResult<ConfigurationContext, ConfigError> {
        Ok(ConfigurationContext {
            module: self.module.clone(),
            enabled: self.is_active(scope)?,
            seller_id: self.seller_id(scope)?,
            seller_pin: self.seller_pin(scope)?,
            username: self.seller_username(scope)?,
            password: self.seller_password(scope)?,
            test_mode: self.is_test_mode(scope)?,
            instruction_visible: self.is_instruction_available(scope)?,
            shop_name: self.shop_name(scope),
            gateway: self.gateway.clone(),
        })
    }

    /// Unifies configured value handling for the module-level group.
    fn configured_main_value(
        &self,
        field: &'static str,
        scope: &StoreScope,
    ) -> CustomResult<Option<ConfigValue>, ConfigError> {
        let handler = self.value_handler_pool.get(MAIN_HANDLER_GROUP)?;
        let subject = LookupSubject {
            field,
            method: MethodCode::Main,
        };
        handler.handle(&subject, scope)
    }

    /// Configured value of this method's own group.
    fn configured_own_value(
        &self,
        field: &'static str,
        scope: &StoreScope,
    ) -> CustomResult<Option<ConfigValue>, ConfigError> {
        let handler = self.value_handler_pool.get(self.code.as_str())?;
        let subject = LookupSubject {
            field,
            method: self.code,
        };
        handler.handle(&subject, scope)
    }

    fn main_flag(&self, field: &'static str, scope: &StoreScope) -> CustomResult<bool, ConfigError> {
        flag_value(self.configured_main_value(field, scope)?, field)
    }

    fn own_flag(&self, field: &'static str, scope: &StoreScope) -> CustomResult<bool, ConfigError> {
        flag_value(self.configured_own_value(field, scope)?, field)
    }

    fn main_secret(
        &self,
        field: &'static str,
        scope: &StoreScope,
    ) -> CustomResult<Option<Secret<String>>, ConfigError> {
        Ok(self
            .configured_main_value(field, scope)?
            .map(|value| Secret::new(value.into_string())))
    }

    fn main_url(
        &self,
        field: &'static str,
        scope: &StoreScope,
    ) -> CustomResult<Option<Url>, ConfigError> {
        match self.configured_main_value(field, scope)? {
            Some(value) => {
                let raw = value.into_string();
                let url = Url::parse(&raw).map_err(|error| {
                    tracing::warn!(field, %error, "stored callback url does not parse");
                    report!(ConfigError::InvalidFieldValue { field })
                })?;
                Ok(Some(url))
            }
            None => Ok(None),
        }
    }
}

fn flag_value(
    value: Option<ConfigValue>,
    field: &'static str,
) -> CustomResult<bool, ConfigError> {
    match value {
        Some(value) => value.as_bool().ok_or_else(|| {
            tracing::warn!(field, "stored flag is neither boolean nor a known flag string");
            report!(ConfigError::InvalidFieldValue { field })
        }),
        None => Ok(false),
    }
}
