use std::{collections::HashMap, sync::Arc};

use common_enums::MethodCode;
use domain_types::{
    errors::{ConfigError, CustomResult},
    ConfigValue, StoreScope,
};
use error_stack::report;
use strum::IntoEnumIterator;

use crate::configs::ScopedConfigStore;

/// Handler group serving the module-level configuration.
pub const MAIN_HANDLER_GROUP: &str = "main";

/// Subject of a single configuration lookup.
#[derive(Clone, Copy, Debug)]
pub struct LookupSubject<'a> {
    pub field: &'a str,
    pub method: MethodCode,
}

/// Resolves one configured field to its effective value for a store
/// scope.
pub trait ValueHandler: Send + Sync {
    fn handle(
        &self,
        subject: &LookupSubject<'_>,
        scope: &StoreScope,
    ) -> CustomResult<Option<ConfigValue>, ConfigError>;
}

/// Default handler reading `payment/<method_code>/<field>` from the
/// scoped store.
#[derive(Clone, Debug)]
pub struct ScopedValueHandler {
    store: Arc<ScopedConfigStore>,
}

impl ScopedValueHandler {
    pub fn new(store: Arc<ScopedConfigStore>) -> Self {
        Self { store }
    }
}

impl ValueHandler for ScopedValueHandler {
    fn handle(
        &self,
        subject: &LookupSubject<'_>,
        scope: &StoreScope,
    ) -> CustomResult<Option<ConfigValue>, ConfigError> {
        let path = format!("payment/{}/{}", subject.method.as_str(), subject.field);
        let value = self.store.get(&path, scope).cloned();
        tracing::debug!(path = %path, found = value.is_some(), "resolved configuration value");
        Ok(value)
    }
}

/// Registry resolving a handler group name to its value handler.
#[derive(Clone, Default)]
pub struct ValueHandlerPool {
    handlers: HashMap<String, Arc<dyn ValueHandler>>,
}

impl ValueHandlerPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pool with the scoped handler serving the main group and every
    /// method code.
    pub fn scoped(store: Arc<ScopedConfigStore>) -> Self {
        let handler: Arc<dyn ValueHandler> = Arc::new(ScopedValueHandler::new(store));
        let mut pool = Self::new();
        pool.register(MAIN_HANDLER_GROUP, handler.clone());
        for code in MethodCode::iter() {
            pool.register(code.as_str(), handler.clone());
        }
        pool
    }

    pub fn register(&mut self, group: impl Into<String>, handler: Arc<dyn ValueHandler>) {
        self.handlers.insert(group.into(), handler);
    }

    pub fn get(&self, group: &str) -> CustomResult<Arc<dyn ValueHandler>, ConfigError> {
        self.handlers.get(group).cloned().ok_or_else(|| {
            report!(ConfigError::HandlerNotFound {
                group: group.to_string(),
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pool_serves_main_and_method_groups() {
        let pool = ValueHandlerPool::scoped(Arc::new(ScopedConfigStore::new()));
        assert!(pool.get(MAIN_HANDLER_GROUP).is_ok());
        assert!(pool.get("dotpay_blik").is_ok());

        let missing = pool.get("dotpay_unknown").unwrap_err();
        assert!(matches!(
            missing.current_context(),
            ConfigError::HandlerNotFound { .. }
        ));
    }

    #[test]
    fn test_scoped_handler_reads_method_path() {
        let mut store = ScopedConfigStore::new();
        store.set_default("payment/dotpay_main/pin", "secret");
        let handler = ScopedValueHandler::new(Arc::new(store));

        let subject = LookupSubject {
            field: "pin",
            method: MethodCode::Main,
        };
        let value = handler
            .handle(&subject, &StoreScope::default_scope())
            .unwrap();
        assert_eq!(
            value.as_ref().and_then(ConfigValue::as_str),
            Some("secret")
        );

        let other = LookupSubject {
            field: "pin",
            method: MethodCode::Blik,
        };
        assert!(handler
            .handle(&other, &StoreScope::default_scope())
            .unwrap()
            .is_none());
    }
}
