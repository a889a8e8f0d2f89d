//! The supported asset catalog.
//!
//! One explicit structure instead of scattered constants: the data layer uses
//! the ids to name CSV files and API calls, the UI uses the names and symbols
//! for display. Adding an asset here is the only change needed to track it.

pub struct AssetSpec {
    /// CoinGecko coin id; doubles as the CSV file stem under the data dir.
    pub id: &'static str,
    pub name: &'static str,
    pub symbol: &'static str,
}

pub struct AssetCatalog {
    pub assets: &'static [AssetSpec],
    /// Asset every beta is measured against.
    pub benchmark_id: &'static str,
    /// How many assets the comparison charts select by default.
    pub default_comparison_count: usize,
}

impl AssetCatalog {
    pub fn ids(&self) -> impl Iterator<Item = &'static str> {
        self.assets.iter().map(|a| a.id)
    }

    pub fn get(&self, id: &str) -> Option<&'static AssetSpec> {
        self.assets.iter().find(|a| a.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Display name, falling back to the raw id for anything uncataloged.
    pub fn display_name<'a>(&self, id: &'a str) -> &'a str {
        self.get(id).map(|a| a.name).unwrap_or(id)
    }

    pub fn symbol<'a>(&self, id: &'a str) -> &'a str {
        self.get(id).map(|a| a.symbol).unwrap_or(id)
    }
}

pub static ASSETS: AssetCatalog = AssetCatalog {
    assets: &[
        AssetSpec {
            id: "bitcoin",
            name: "Bitcoin",
            symbol: "BTC",
        },
        AssetSpec {
            id: "ethereum",
            name: "Ethereum",
            symbol: "ETH",
        },
        AssetSpec {
            id: "solana",
            name: "Solana",
            symbol: "SOL",
        },
        AssetSpec {
            id: "dogecoin",
            name: "Dogecoin",
            symbol: "DOGE",
        },
        AssetSpec {
            id: "cardano",
            name: "Cardano",
            symbol: "ADA",
        },
    ],
    benchmark_id: "bitcoin",
    default_comparison_count: 3,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_lookups() {
        assert_eq!(ASSETS.symbol("dogecoin"), "DOGE");
        assert_eq!(ASSETS.display_name("cardano"), "Cardano");
        // Unknown ids fall back to the raw id instead of panicking
        assert_eq!(ASSETS.display_name("shibainu"), "shibainu");
        assert!(ASSETS.contains(ASSETS.benchmark_id));
    }
}
