//! CoinGecko-specific configuration constants.

/// Default values for the REST client
pub struct ClientDefaults {
    pub timeout_ms: u64,
    pub retries: u32,
    pub backoff_ms: u64,
}

/// The Master Configuration Struct
pub struct CoinGeckoConfig {
    /// REST base URL for the public CoinGecko API
    pub base_url: &'static str,
    /// Quote currency every price is denominated in
    pub vs_currency: &'static str,
    /// How many days of daily history a market-chart call requests
    pub history_days: u32,
    pub client: ClientDefaults,
}

pub const COINGECKO: CoinGeckoConfig = CoinGeckoConfig {
    base_url: "https://api.coingecko.com/api/v3",
    vs_currency: "inr",
    history_days: 365,
    client: ClientDefaults {
        timeout_ms: 10_000,
        // The free tier rate-limits aggressively, hence generous backoff
        retries: 3,
        backoff_ms: 2_000,
    },
};
