/// Translator module - the external translation service seen through traits

pub mod translator;
pub mod mock_translator;

pub use translator::*;
