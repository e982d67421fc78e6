use serde::Serialize;

/// A fiat (or fiat-like stablecoin) currency that exchanges quote against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FiatCurrency {
    /// Uppercase code (e.g., "EUR", "USD", "USDT")
    pub code: &'static str,

    /// Human-readable name (e.g., "Euro")
    pub name: &'static str,

    /// Display symbol (e.g., "€")
    pub symbol: &'static str,
}

impl FiatCurrency {
    pub const fn new(code: &'static str, name: &'static str, symbol: &'static str) -> Self {
        Self { code, name, symbol }
    }

    /// Picker label, e.g. "EUR (€)".
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.code, self.symbol)
    }
}

/// A crypto asset that can be priced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CryptoAsset {
    /// Uppercase code (e.g., "BTC")
    pub code: &'static str,

    /// Human-readable name (e.g., "Bitcoin")
    pub name: &'static str,

    /// Optional display symbol (e.g., "₿"); most assets have none.
    pub symbol: Option<&'static str>,
}

impl CryptoAsset {
    pub const fn new(code: &'static str, name: &'static str) -> Self {
        Self {
            code,
            name,
            symbol: None,
        }
    }

    pub const fn with_symbol(code: &'static str, name: &'static str, symbol: &'static str) -> Self {
        Self {
            code,
            name,
            symbol: Some(symbol),
        }
    }

    /// Picker label, e.g. "Bitcoin (BTC)".
    pub fn display_name(&self) -> String {
        format!("{} ({})", self.name, self.code)
    }

    /// Icon resource key shipped with the widget, e.g. "BTC.svg".
    pub fn icon_key(&self) -> String {
        format!("{}.svg", self.code)
    }
}
