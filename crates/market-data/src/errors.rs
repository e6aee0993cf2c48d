//! Error types for market data operations.

use thiserror::Error;

/// Errors that can occur while talking to a market data provider.
#[derive(Error, Debug)]
pub enum MarketDataError {
    /// The requested symbol does not resolve to a tradable instrument.
    #[error("Symbol not found: {0}")]
    SymbolNotFound(String),

    /// The symbol exists but has no quotes in the requested period.
    #[error("No data for date range")]
    NoDataForRange,

    /// The request to the provider timed out.
    #[error("Timeout: {provider}")]
    Timeout {
        /// The provider that timed out
        provider: String,
    },

    /// A provider-specific failure (malformed payload, upstream outage, ...).
    #[error("Provider error: {provider} - {message}")]
    ProviderError {
        /// The provider that returned the error
        provider: String,
        /// The error message from the provider
        message: String,
    },

    /// The provider returned data that failed validation checks.
    #[error("Validation failed: {message}")]
    ValidationFailed {
        /// Description of the validation failure
        message: String,
    },

    /// A network error occurred while communicating with a provider.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl MarketDataError {
    /// Whether this error means the symbol simply is not a live instrument.
    ///
    /// A symbol miss is the expected, high-frequency outcome while probing a
    /// numeric code space and is not treated as a fault by callers; every
    /// other variant is a capability fault worth surfacing in logs.
    pub fn is_symbol_miss(&self) -> bool {
        matches!(self, Self::SymbolNotFound(_) | Self::NoDataForRange)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbol_not_found_is_a_miss() {
        assert!(MarketDataError::SymbolNotFound("9999.TW".to_string()).is_symbol_miss());
    }

    #[test]
    fn no_data_for_range_is_a_miss() {
        assert!(MarketDataError::NoDataForRange.is_symbol_miss());
    }

    #[test]
    fn provider_error_is_a_fault() {
        let error = MarketDataError::ProviderError {
            provider: "YAHOO".to_string(),
            message: "Internal server error".to_string(),
        };
        assert!(!error.is_symbol_miss());
    }

    #[test]
    fn timeout_is_a_fault() {
        let error = MarketDataError::Timeout {
            provider: "YAHOO".to_string(),
        };
        assert!(!error.is_symbol_miss());
    }

    #[test]
    fn error_display() {
        let error = MarketDataError::SymbolNotFound("0000.TW".to_string());
        assert_eq!(format!("{}", error), "Symbol not found: 0000.TW");

        let error = MarketDataError::ProviderError {
            provider: "YAHOO".to_string(),
            message: "quote payload truncated".to_string(),
        };
        assert_eq!(
            format!("{}", error),
            "Provider error: YAHOO - quote payload truncated"
        );
    }
}
