use std::fmt;

use common_enums::ScopeLevel;
use serde::{Deserialize, Serialize};

use crate::consts;

/// Numeric id of the seller account in the gateway panel.
#[derive(
    Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct SellerId(u64);

impl SellerId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(self) -> u64 {
        self.0
    }
}

impl fmt::Display for SellerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for SellerId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

/// A configuration value as the platform stores it, before typed
/// interpretation by the adapter.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    Bool(bool),
    Int(u64),
    Text(String),
}

impl ConfigValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            Self::Bool(_) | Self::Int(_) => None,
        }
    }

    /// Flags arrive from the platform store as booleans or as the strings
    /// merchants save through admin forms.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Int(value) => Some(*value != 0),
            Self::Text(value) => match value.trim() {
                "1" | "true" | "yes" => Some(true),
                "" | "0" | "false" | "no" => Some(false),
                _ => None,
            },
        }
    }

    pub fn as_u64(&self) -> Option<u64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Text(value) => value.trim().parse().ok(),
            Self::Bool(_) => None,
        }
    }

    pub fn into_string(self) -> String {
        match self {
            Self::Text(value) => value,
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
        }
    }
}

impl From<bool> for ConfigValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<u64> for ConfigValue {
    fn from(value: u64) -> Self {
        Self::Int(value)
    }
}

impl From<String> for ConfigValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for ConfigValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Gateway endpoint set, defaulted to the Dotpay production and test
/// environments and overridable through the merchant configuration.
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GatewayParams {
    /// base url
    pub base_url: String,
    pub test_base_url: String,
    pub seller_api_url: String,
    pub test_seller_api_url: String,
}

impl Default for GatewayParams {
    fn default() -> Self {
        Self {
            base_url: consts::PRODUCTION_PAYMENT_URL.to_string(),
            test_base_url: consts::TEST_PAYMENT_URL.to_string(),
            seller_api_url: consts::PRODUCTION_SELLER_API_URL.to_string(),
            test_seller_api_url: consts::TEST_SELLER_API_URL.to_string(),
        }
    }
}

impl GatewayParams {
    pub fn payment_url(&self, test_mode: bool) -> &str {
        if test_mode {
            &self.test_base_url
        } else {
            &self.base_url
        }
    }

    pub fn seller_api(&self, test_mode: bool) -> &str {
        if test_mode {
            &self.test_seller_api_url
        } else {
            &self.seller_api_url
        }
    }
}

/// Caller-supplied scope of a configuration lookup. Resolution tries the
/// store entry, then the website entry, then the default value.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
pub struct StoreScope {
    pub website_id: Option<u32>,
    pub store_id: Option<u32>,
}

impl StoreScope {
    pub fn default_scope() -> Self {
        Self::default()
    }

    pub fn website(website_id: u32) -> Self {
        Self {
            website_id: Some(website_id),
            store_id: None,
        }
    }

    pub fn store(website_id: u32, store_id: u32) -> Self {
        Self {
            website_id: Some(website_id),
            store_id: Some(store_id),
        }
    }

    /// Lookup order, most specific entry first.
    pub fn lookup_chain(&self) -> Vec<(ScopeLevel, Option<u32>)> {
        let mut chain = Vec::with_capacity(3);
        if let Some(store_id) = self.store_id {
            chain.push((ScopeLevel::Store, Some(store_id)));
        }
        if let Some(website_id) = self.website_id {
            chain.push((ScopeLevel::Website, Some(website_id)));
        }
        chain.push((ScopeLevel::Default, None));
        chain
    }
}
