//! File-backed provider with deterministic fundamentals.

use async_trait::async_trait;
use screener_core::{Fundamentals, FundamentalsProvider, ProviderError, ProviderResult};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

const BUNDLED_FIXTURE: &str = include_str!("../data/stub_fundamentals.json");

/// Serves fundamentals from a JSON array loaded once at construction.
///
/// Tickers are keyed upper-case, so lookups are case-insensitive. A ticker that
/// appears twice keeps its last record.
#[derive(Debug, Clone)]
pub struct StubProvider {
    records: Arc<BTreeMap<String, Fundamentals>>,
}

impl StubProvider {
    /// Provider over the fixture compiled into the crate.
    pub fn bundled() -> ProviderResult<Self> {
        Self::from_json_str(BUNDLED_FIXTURE)
    }

    pub fn from_path(path: impl AsRef<Path>) -> ProviderResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let provider = Self::from_json_str(&raw)?;
        tracing::info!(
            "Loaded {} stub fundamentals from {}",
            provider.len(),
            path.display()
        );
        Ok(provider)
    }

    /// Bundled fixture unless a path is given.
    pub fn open(path: Option<&Path>) -> ProviderResult<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Self::bundled(),
        }
    }

    pub fn from_json_str(json: &str) -> ProviderResult<Self> {
        let records: Vec<Fundamentals> = serde_json::from_str(json)?;
        Ok(Self::from_records(records))
    }

    pub fn from_records(records: Vec<Fundamentals>) -> Self {
        let records = records
            .into_iter()
            .map(|f| {
                let mut f = f.sanitized();
                f.ticker = f.ticker.trim().to_uppercase();
                (f.ticker.clone(), f)
            })
            .collect();
        Self {
            records: Arc::new(records),
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl FundamentalsProvider for StubProvider {
    async fn get_fundamentals(&self, ticker: &str) -> ProviderResult<Fundamentals> {
        let key = ticker.trim().to_uppercase();
        self.records
            .get(&key)
            .cloned()
            .ok_or(ProviderError::NotFound(key))
    }

    async fn list_universe(&self) -> ProviderResult<Vec<String>> {
        // BTreeMap keys are already sorted
        Ok(self.records.keys().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_bundled_universe_is_sorted() {
        let provider = StubProvider::bundled().unwrap();
        let universe = provider.list_universe().await.unwrap();
        assert!(universe.len() >= 10);
        let mut sorted = universe.clone();
        sorted.sort();
        assert_eq!(universe, sorted);
        assert!(universe.contains(&"WBD".to_string()));
    }

    #[tokio::test]
    async fn test_lookup_is_case_insensitive() {
        let provider = StubProvider::bundled().unwrap();
        let lower = provider.get_fundamentals("msft").await.unwrap();
        let upper = provider.get_fundamentals("MSFT").await.unwrap();
        assert_eq!(lower, upper);
        assert_eq!(lower.ticker, "MSFT");
    }

    #[tokio::test]
    async fn test_unknown_ticker_is_not_found() {
        let provider = StubProvider::bundled().unwrap();
        let err = provider.get_fundamentals("ZZZZ").await.unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "Ticker not found: ZZZZ");
    }

    #[tokio::test]
    async fn test_from_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[{{"ticker":"abc","name":"Abc Corp","pe_ratio":14.0}},{{"ticker":"XYZ","name":"Xyz Inc"}}]"#
        )
        .unwrap();

        let provider = StubProvider::from_path(file.path()).unwrap();
        assert_eq!(provider.len(), 2);
        assert_eq!(provider.list_universe().await.unwrap(), vec!["ABC", "XYZ"]);

        let abc = provider.get_fundamentals("Abc").await.unwrap();
        assert_eq!(abc.pe_ratio, Some(14.0));
        assert!(abc.roe.is_none());
    }

    #[test]
    fn test_bad_files_surface_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            StubProvider::from_path(dir.path().join("missing.json")),
            Err(ProviderError::Io(_))
        ));
        assert!(matches!(
            StubProvider::from_json_str("{\"ticker\": 1}"),
            Err(ProviderError::Parse(_))
        ));
    }
}
