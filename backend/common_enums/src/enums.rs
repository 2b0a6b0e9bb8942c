use serde::{Deserialize, Serialize};

/// Ids of the order statuses registered by the integration.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum OrderStatus {
    /// Payment was started but not yet confirmed by the gateway.
    #[default]
    #[serde(rename = "dotpay_pending")]
    #[strum(serialize = "dotpay_pending")]
    Pending,
    /// Payment was confirmed by the gateway.
    #[serde(rename = "dotpay_complete")]
    #[strum(serialize = "dotpay_complete")]
    Complete,
    /// Payment was rejected or abandoned.
    #[serde(rename = "dotpay_canceled")]
    #[strum(serialize = "dotpay_canceled")]
    Canceled,
}

impl OrderStatus {
    /// Stable identifier under which the status is registered with the
    /// host order-management subsystem.
    pub fn id(self) -> &'static str {
        match self {
            Self::Pending => "dotpay_pending",
            Self::Complete => "dotpay_complete",
            Self::Canceled => "dotpay_canceled",
        }
    }

    pub fn is_final(self) -> bool {
        matches!(self, Self::Complete | Self::Canceled)
    }
}

/// Payment channels served by the adapter family. `Main` is the
/// module-level method whose `active` flag gates every other channel.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
pub enum MethodCode {
    #[default]
    #[serde(rename = "dotpay_main")]
    #[strum(serialize = "dotpay_main")]
    Main,
    #[serde(rename = "dotpay_oc")]
    #[strum(serialize = "dotpay_oc")]
    OneClick,
    #[serde(rename = "dotpay_cc")]
    #[strum(serialize = "dotpay_cc")]
    CreditCard,
    #[serde(rename = "dotpay_blik")]
    #[strum(serialize = "dotpay_blik")]
    Blik,
    #[serde(rename = "dotpay_mp")]
    #[strum(serialize = "dotpay_mp")]
    MasterPass,
    #[serde(rename = "dotpay_paypal")]
    #[strum(serialize = "dotpay_paypal")]
    Paypal,
}

impl MethodCode {
    /// Configuration key segment of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Main => "dotpay_main",
            Self::OneClick => "dotpay_oc",
            Self::CreditCard => "dotpay_cc",
            Self::Blik => "dotpay_blik",
            Self::MasterPass => "dotpay_mp",
            Self::Paypal => "dotpay_paypal",
        }
    }

    pub fn is_main(self) -> bool {
        matches!(self, Self::Main)
    }
}

/// Level of the hierarchical configuration override mechanism.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    Hash,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum ScopeLevel {
    #[default]
    Default,
    Website,
    Store,
}

/// Deployment environment the merchant configuration file is selected by.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Eq,
    PartialEq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Env {
    #[default]
    Development,
    Sandbox,
    Production,
}

impl Env {
    pub fn current_env() -> Self {
        std::env::var("DOTPAY_ENV")
            .ok()
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Name of the configuration file read for this environment.
    pub fn config_file(self) -> &'static str {
        match self {
            Self::Development => "development.toml",
            Self::Sandbox => "sandbox.toml",
            Self::Production => "production.toml",
        }
    }
}
