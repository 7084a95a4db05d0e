use std::time::Duration;

use serde::Serialize;

/// Fallback USD -> INR rate when no configuration is supplied.
pub const DEFAULT_USD_INR_RATE: f64 = 83.5;

/// Where the converter gets its rate. A trait seam so tests can pin values
/// and a live feed could slot in later without touching the service.
pub trait ExchangeRateSource: Send + Sync {
    fn usd_to_inr(&self) -> f64;
}

/// Single fixed rate, the production default.
#[derive(Debug, Clone, Copy)]
pub struct FixedRate(pub f64);

impl ExchangeRateSource for FixedRate {
    fn usd_to_inr(&self) -> f64 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("amount must be greater than zero")]
    NonPositiveAmount,
}

/// Result of one conversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Conversion {
    pub amount_usd: f64,
    pub rate: f64,
    pub amount_inr: f64,
}

impl Conversion {
    /// "1 USD = 83.50 INR"
    pub fn rate_line(&self) -> String {
        format!("1 USD = {:.2} INR", self.rate)
    }

    /// "$5.00 = ₹417.50"
    pub fn summary(&self) -> String {
        format!("${:.2} = ₹{:.2}", self.amount_usd, self.amount_inr)
    }
}

/// Converter service behind the currency tab.
pub struct CurrencyService<S> {
    source: S,
    conversion_delay: Duration,
}

impl<S> CurrencyService<S>
where
    S: ExchangeRateSource,
{
    pub fn new(source: S, conversion_delay: Duration) -> Self {
        Self {
            source,
            conversion_delay,
        }
    }

    /// Pause advertised to HTTP handlers to simulate a rate lookup.
    pub fn conversion_delay(&self) -> Duration {
        self.conversion_delay
    }

    pub fn convert(&self, amount_usd: f64) -> Result<Conversion, ConversionError> {
        if !(amount_usd > 0.0) {
            return Err(ConversionError::NonPositiveAmount);
        }

        let rate = self.source.usd_to_inr();
        Ok(Conversion {
            amount_usd,
            rate,
            amount_inr: amount_usd * rate,
        })
    }
}
