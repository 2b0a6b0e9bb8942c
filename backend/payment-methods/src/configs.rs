use std::{collections::HashMap, path::PathBuf};

use common_enums::{Env, MethodCode, ScopeLevel};
use domain_types::{
    consts,
    errors::{ConfigError, CustomResult},
    ConfigValue, GatewayParams, StoreScope,
};
use error_stack::{report, ResultExt};
use hyperswitch_masking::{ExposeInterface, Secret};
use serde::Deserialize;

use crate::methods::dotpay::fields;

/// Merchant-side configuration of the integration, loaded from the
/// environment-selected TOML file with environment-variable overrides.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MerchantConfig {
    pub gateway: GatewayParams,
    pub module: Module,
    /// Method field tables keyed by method code.
    pub methods: HashMap<String, MethodFields>,
    pub store: StoreInformation,
    pub overrides: ScopeOverrides,
}

/// Registry entry of the installed integration.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Module {
    pub name: String,
    pub version: String,
}

impl Default for Module {
    fn default() -> Self {
        Self {
            name: consts::MODULE_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Merchant-configured values of one payment method. Every field is
/// optional; absent fields simply resolve to nothing.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct MethodFields {
    pub active: Option<bool>,
    pub id: Option<u64>,
    pub pin: Option<Secret<String>>,
    pub username: Option<Secret<String>>,
    pub password: Option<Secret<String>>,
    pub test: Option<bool>,
    pub instruction: Option<bool>,
    pub display_logo: Option<bool>,
    pub redirect_url: Option<String>,
    pub instruction_url: Option<String>,
    pub back_url: Option<String>,
    pub status_url: Option<String>,
    pub confirm_url: Option<String>,
    pub oc_manage_url: Option<String>,
    pub oc_remove_url: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct StoreInformation {
    /// Shop name presented to the gateway.
    pub name: Option<String>,
}

/// Per-website and per-store method overrides, keyed by scope id.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ScopeOverrides {
    pub websites: HashMap<String, HashMap<String, MethodFields>>,
    pub stores: HashMap<String, HashMap<String, MethodFields>>,
}

impl MerchantConfig {
    /// Build the configuration by picking it from default locations.
    pub fn new() -> CustomResult<Self, ConfigError> {
        Self::new_with_config_path(None)
    }

    pub fn new_with_config_path(
        explicit_config_path: Option<PathBuf>,
    ) -> CustomResult<Self, ConfigError> {
        let env = Env::current_env();
        let config_path = Self::config_path(env, explicit_config_path);

        let config = config::Config::builder()
            .add_source(config::File::from(config_path).required(false))
            .add_source(
                config::Environment::with_prefix(consts::ENV_PREFIX)
                    .try_parsing(true)
                    .separator("__"),
            )
            .build()
            .change_context(ConfigError::LoadFailure)?;

        let merchant: Self = serde_path_to_error::deserialize(config)
            .map_err(|error| {
                tracing::error!(%error, "unable to deserialize merchant configuration");
                error.into_inner()
            })
            .change_context(ConfigError::LoadFailure)?;

        Ok(merchant)
    }

    /// Config path.
    pub fn config_path(environment: Env, explicit_config_path: Option<PathBuf>) -> PathBuf {
        let mut config_path = PathBuf::new();
        if let Some(explicit_config_path_val) = explicit_config_path {
            config_path.push(explicit_config_path_val);
        } else {
            config_path.push(workspace_path());
            config_path.push("config");
            config_path.push(environment.config_file());
        }
        config_path
    }

    /// Flatten the configuration sections into the scoped store the value
    /// handlers read from.
    pub fn seed_store(&self) -> CustomResult<ScopedConfigStore, ConfigError> {
        let mut store = ScopedConfigStore::new();

        if let Some(name) = &self.store.name {
            store.set_default(consts::SHOP_NAME_PATH, name.clone());
        }
        for (raw_code, values) in &self.methods {
            let code = parse_method_code(raw_code)?;
            seed_method(&mut store, ScopeLevel::Default, None, code, values);
        }
        for (raw_id, methods) in &self.overrides.websites {
            let website_id = parse_scope_id(raw_id)?;
            for (raw_code, values) in methods {
                let code = parse_method_code(raw_code)?;
                seed_method(&mut store, ScopeLevel::Website, Some(website_id), code, values);
            }
        }
        for (raw_id, methods) in &self.overrides.stores {
            let store_id = parse_scope_id(raw_id)?;
            for (raw_code, values) in methods {
                let code = parse_method_code(raw_code)?;
                seed_method(&mut store, ScopeLevel::Store, Some(store_id), code, values);
            }
        }

        tracing::debug!(entries = store.len(), "seeded scoped configuration store");
        Ok(store)
    }
}

fn parse_method_code(raw_code: &str) -> CustomResult<MethodCode, ConfigError> {
    raw_code.parse().map_err(|_| {
        report!(ConfigError::UnknownMethodCode {
            code: raw_code.to_string(),
        })
    })
}

fn parse_scope_id(raw_id: &str) -> CustomResult<u32, ConfigError> {
    raw_id.parse().map_err(|_| {
        report!(ConfigError::InvalidScopeId {
            id: raw_id.to_string(),
        })
    })
}

fn seed_method(
    store: &mut ScopedConfigStore,
    level: ScopeLevel,
    id: Option<u32>,
    code: MethodCode,
    values: &MethodFields,
) {
    let mut set = |field: &'static str, value: Option<ConfigValue>| {
        if let Some(value) = value {
            store.set(
                level,
                id,
                format!("payment/{}/{}", code.as_str(), field),
                value,
            );
        }
    };

    set(fields::ACTIVE, values.active.map(ConfigValue::from));
    set(fields::ID, values.id.map(ConfigValue::from));
    set(
        fields::PIN,
        values.pin.clone().map(|pin| ConfigValue::from(pin.expose())),
    );
    set(
        fields::USERNAME,
        values
            .username
            .clone()
            .map(|username| ConfigValue::from(username.expose())),
    );
    set(
        fields::PASSWORD,
        values
            .password
            .clone()
            .map(|password| ConfigValue::from(password.expose())),
    );
    set(fields::TEST, values.test.map(ConfigValue::from));
    set(fields::INSTRUCTION, values.instruction.map(ConfigValue::from));
    set(
        fields::DISPLAY_LOGO,
        values.display_logo.map(ConfigValue::from),
    );
    set(
        fields::REDIRECT_URL,
        values.redirect_url.clone().map(ConfigValue::from),
    );
    set(
        fields::INSTRUCTION_URL,
        values.instruction_url.clone().map(ConfigValue::from),
    );
    set(
        fields::BACK_URL,
        values.back_url.clone().map(ConfigValue::from),
    );
    set(
        fields::STATUS_URL,
        values.status_url.clone().map(ConfigValue::from),
    );
    set(
        fields::CONFIRM_URL,
        values.confirm_url.clone().map(ConfigValue::from),
    );
    set(
        fields::OC_MANAGE_URL,
        values.oc_manage_url.clone().map(ConfigValue::from),
    );
    set(
        fields::OC_REMOVE_URL,
        values.oc_remove_url.clone().map(ConfigValue::from),
    );
}

pub fn workspace_path() -> PathBuf {
    if let Ok(manifest_dir) = std::env::var("CARGO_MANIFEST_DIR") {
        let mut path = PathBuf::from(manifest_dir);
        path.pop();
        path.pop();
        path
    } else {
        PathBuf::from(".")
    }
}

/// In-memory map from (path, scope) to the stored configuration value.
#[derive(Clone, Debug, Default)]
pub struct ScopedConfigStore {
    values: HashMap<ScopeKey, ConfigValue>,
}

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
struct ScopeKey {
    path: String,
    level: ScopeLevel,
    id: Option<u32>,
}

impl ScopedConfigStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn set(
        &mut self,
        level: ScopeLevel,
        id: Option<u32>,
        path: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) {
        self.values.insert(
            ScopeKey {
                path: path.into(),
                level,
                id,
            },
            value.into(),
        );
    }

    pub fn set_default(&mut self, path: impl Into<String>, value: impl Into<ConfigValue>) {
        self.set(ScopeLevel::Default, None, path, value);
    }

    pub fn set_website(
        &mut self,
        website_id: u32,
        path: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) {
        self.set(ScopeLevel::Website, Some(website_id), path, value);
    }

    pub fn set_store(
        &mut self,
        store_id: u32,
        path: impl Into<String>,
        value: impl Into<ConfigValue>,
    ) {
        self.set(ScopeLevel::Store, Some(store_id), path, value);
    }

    /// First value present along the scope's lookup chain.
    pub fn get(&self, path: &str, scope: &StoreScope) -> Option<&ConfigValue> {
        scope.lookup_chain().into_iter().find_map(|(level, id)| {
            self.values.get(&ScopeKey {
                path: path.to_string(),
                level,
                id,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use hyperswitch_masking::PeekInterface;

    use super::*;

    fn sample_config() -> MerchantConfig {
        let source = r#"
            [module]
            name = "dotpay_payment"

            [store]
            name = "Example Shop"

            [methods.dotpay_main]
            active = true
            id = 123456
            pin = "secret_pin"
            test = true

            [methods.dotpay_blik]
            active = true

            [overrides.websites.2.dotpay_main]
            id = 654321

            [overrides.stores.5.dotpay_main]
            active = false
        "#;
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap();
        serde_path_to_error::deserialize(config).unwrap()
    }

    #[test]
    fn test_sections_deserialize() {
        let config = sample_config();
        assert_eq!(config.module.name, "dotpay_payment");
        assert_eq!(config.store.name.as_deref(), Some("Example Shop"));
        let main = &config.methods["dotpay_main"];
        assert_eq!(main.id, Some(123456));
        assert_eq!(main.pin.as_ref().unwrap().peek(), "secret_pin");
        assert_eq!(main.test, Some(true));
    }

    #[test]
    fn test_seed_store_scope_resolution() {
        let store = sample_config().seed_store().unwrap();
        let default_scope = StoreScope::default_scope();

        assert_eq!(
            store
                .get("payment/dotpay_main/id", &default_scope)
                .and_then(ConfigValue::as_u64),
            Some(123456)
        );
        // website override wins for scoped lookups
        assert_eq!(
            store
                .get("payment/dotpay_main/id", &StoreScope::website(2))
                .and_then(ConfigValue::as_u64),
            Some(654321)
        );
        // store entry wins over website and default
        assert_eq!(
            store
                .get("payment/dotpay_main/active", &StoreScope::store(2, 5))
                .and_then(ConfigValue::as_bool),
            Some(false)
        );
        // fallback to the default value when the scope has no entry
        assert_eq!(
            store
                .get("payment/dotpay_main/test", &StoreScope::store(2, 5))
                .and_then(ConfigValue::as_bool),
            Some(true)
        );
        assert_eq!(
            store
                .get("general/store_information/name", &default_scope)
                .and_then(|value| value.as_str()),
            Some("Example Shop")
        );
    }

    #[test]
    fn test_seed_store_rejects_unknown_method_code() {
        let source = r#"
            [methods.dotpay_unknown]
            active = true
        "#;
        let config = config::Config::builder()
            .add_source(config::File::from_str(source, config::FileFormat::Toml))
            .build()
            .unwrap();
        let merchant: MerchantConfig = serde_path_to_error::deserialize(config).unwrap();
        let error = merchant.seed_store().unwrap_err();
        assert!(matches!(
            error.current_context(),
            ConfigError::UnknownMethodCode { .. }
        ));
    }

    #[test]
    fn test_config_path_selection() {
        let path = MerchantConfig::config_path(Env::Production, None);
        assert!(path.ends_with("config/production.toml"));

        let explicit =
            MerchantConfig::config_path(Env::Development, Some(PathBuf::from("/tmp/custom.toml")));
        assert_eq!(explicit, PathBuf::from("/tmp/custom.toml"));
    }

    #[test]
    fn test_module_defaults() {
        let module = Module::default();
        assert_eq!(module.name, "dotpay_payment");
        assert_eq!(module.version, env!("CARGO_PKG_VERSION"));
    }
}
