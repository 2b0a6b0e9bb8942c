use std::path::PathBuf;

use common_enums::MethodCode;
use domain_types::{SellerId, StoreScope};
use hyperswitch_masking::PeekInterface;
use payment_methods::{DotpayAdapter, MerchantConfig};

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data/merchant.toml")
}

#[test]
fn test_adapter_wired_from_config_file() {
    let config = MerchantConfig::new_with_config_path(Some(fixture_path())).unwrap();
    let adapter = DotpayAdapter::from_merchant_config(MethodCode::Main, &config).unwrap();
    let scope = StoreScope::default_scope();

    assert!(adapter.is_active(&scope).unwrap());
    assert_eq!(
        adapter.seller_id(&scope).unwrap(),
        Some(SellerId::new(123456))
    );
    assert_eq!(
        adapter.seller_pin(&scope).unwrap().unwrap().peek(),
        "fixture_pin"
    );
    assert_eq!(
        adapter
            .confirm_url(&scope)
            .unwrap()
            .unwrap()
            .as_str(),
        "https://shop.example.com/dotpay/payment/confirm"
    );
    assert_eq!(adapter.shop_name(&scope), Some("Fixture Shop".to_string()));
}

#[test]
fn test_configuration_follows_scoped_test_mode() {
    let config = MerchantConfig::new_with_config_path(Some(fixture_path())).unwrap();
    let adapter = DotpayAdapter::from_merchant_config(MethodCode::Main, &config).unwrap();

    let default_configuration = adapter.configuration(&StoreScope::default_scope()).unwrap();
    assert!(default_configuration.is_test_mode());
    assert_eq!(
        default_configuration.payment_base_url(),
        "https://ssl.dotpay.pl/test_payment/"
    );

    // website 2 overrides test mode off, the sdk is pointed at production
    let website_configuration = adapter.configuration(&StoreScope::website(2)).unwrap();
    assert!(!website_configuration.is_test_mode());
    assert_eq!(
        website_configuration.payment_base_url(),
        "https://ssl.dotpay.pl/t2/"
    );
}

#[test]
fn test_secondary_method_gated_by_main() {
    let config = MerchantConfig::new_with_config_path(Some(fixture_path())).unwrap();
    let scope = StoreScope::default_scope();

    let oneclick = DotpayAdapter::from_merchant_config(MethodCode::OneClick, &config).unwrap();
    assert!(oneclick.is_active(&scope).unwrap());

    // blik has no configuration in the fixture at all
    let blik = DotpayAdapter::from_merchant_config(MethodCode::Blik, &config).unwrap();
    assert!(!blik.is_active(&scope).unwrap());
    assert!(blik.is_main_active(&scope).unwrap());
}
