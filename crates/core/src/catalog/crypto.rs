use crate::errors::CoreError;
use crate::models::currency::CryptoAsset;

/// All crypto assets the widget can display, in picker order.
pub static CRYPTO_ASSETS: &[CryptoAsset] = &[
    CryptoAsset::with_symbol("BTC", "Bitcoin", "₿"),
    CryptoAsset::with_symbol("ETH", "Ethereum", "Ξ"),
    CryptoAsset::with_symbol("LTC", "Litecoin", "Ł"),
    CryptoAsset::with_symbol("XRP", "Ripple", "Ʀ"),
    CryptoAsset::with_symbol("BCH", "Bitcoin Cash", "฿"),
    CryptoAsset::new("DASH", "Dash"),
    CryptoAsset::new("ZEC", "ZCash"),
    CryptoAsset::new("LINK", "Chainlink"),
    CryptoAsset::new("DOT", "Polkadot"),
    CryptoAsset::new("ADA", "Cardano"),
    CryptoAsset::new("DOGE", "Dogecoin"),
];

pub fn find_crypto(code: &str) -> Result<&'static CryptoAsset, CoreError> {
    CRYPTO_ASSETS
        .iter()
        .find(|c| c.code == code)
        .ok_or_else(|| CoreError::UnknownCrypto(code.to_string()))
}

/// Human-readable name, e.g. "BTC" → "Bitcoin".
pub fn display_name_of(code: &str) -> Result<&'static str, CoreError> {
    find_crypto(code).map(|c| c.name)
}

/// Picker label, e.g. "BTC" → "Bitcoin (BTC)".
pub fn crypto_display_name(code: &str) -> Result<String, CoreError> {
    find_crypto(code).map(CryptoAsset::display_name)
}

pub fn icon_of(code: &str) -> Result<String, CoreError> {
    find_crypto(code).map(CryptoAsset::icon_key)
}

pub fn crypto_codes() -> impl Iterator<Item = &'static str> {
    CRYPTO_ASSETS.iter().map(|c| c.code)
}

