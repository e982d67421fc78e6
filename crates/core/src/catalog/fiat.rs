use crate::errors::CoreError;
use crate::models::currency::FiatCurrency;

/// All quote currencies, in picker order.
///
/// Stablecoins are listed here too: several exchanges only quote against
/// them, and for pair purposes they behave like fiat.
pub static FIAT_CURRENCIES: &[FiatCurrency] = &[
    FiatCurrency::new("CZK", "Czech Koruna", "Kč"),
    FiatCurrency::new("EUR", "Euro", "€"),
    FiatCurrency::new("GBP", "British Pound", "£"),
    FiatCurrency::new("JPY", "Japanese Yen", "¥"),
    FiatCurrency::new("PLN", "Polish Zloty", "zł"),
    FiatCurrency::new("USD", "US Dollar", "$"),
    FiatCurrency::new("USDC", "USD Coin", "$C"),
    FiatCurrency::new("USDT", "USD Tether", "$T"),
    FiatCurrency::new("BUSD", "Binance USD", "B$"),
];

/// Look up a fiat currency by its code.
pub fn find_fiat(code: &str) -> Result<&'static FiatCurrency, CoreError> {
    FIAT_CURRENCIES
        .iter()
        .find(|c| c.code == code)
        .ok_or_else(|| CoreError::UnknownCurrency(code.to_string()))
}

/// Display symbol of a fiat currency, e.g. "EUR" → "€".
pub fn symbol_of(code: &str) -> Result<&'static str, CoreError> {
    find_fiat(code).map(|c| c.symbol)
}

pub fn fiat_name_of(code: &str) -> Result<&'static str, CoreError> {
    find_fiat(code).map(|c| c.name)
}

/// Picker label, e.g. "USD" → "USD ($)".
pub fn fiat_display_name(code: &str) -> Result<String, CoreError> {
    find_fiat(code).map(FiatCurrency::display_name)
}

pub fn fiat_codes() -> impl Iterator<Item = &'static str> {
    FIAT_CURRENCIES.iter().map(|c| c.code)
}

