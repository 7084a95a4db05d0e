//! USD to INR conversion backing the converter tab, plus rupee display
//! formatting shared with the results renderer.

pub mod convert;
pub mod format;
pub mod router;

#[cfg(test)]
mod tests;

pub use convert::{
    Conversion, ConversionError, CurrencyService, ExchangeRateSource, FixedRate,
    DEFAULT_USD_INR_RATE,
};
pub use format::format_inr;
pub use router::{currency_router, ConversionRequest, ConversionView};
