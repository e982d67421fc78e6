pub mod currency;
pub mod quote;
pub mod selection;
pub mod settings;
