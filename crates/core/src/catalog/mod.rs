//! Static catalogs of the fiat currencies and crypto assets the widget knows about.
//!
//! Both tables are declared once and never change at runtime. Iteration order
//! is declaration order, which is what the pickers show.

pub mod crypto;
pub mod fiat;

pub use crypto::{crypto_codes, crypto_display_name, display_name_of, find_crypto, icon_of};
pub use fiat::{fiat_codes, fiat_display_name, fiat_name_of, find_fiat, symbol_of};
