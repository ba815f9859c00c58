//! Fundamentals data sources.

pub mod stub;

pub use stub::StubProvider;

use screener_core::{Fundamentals, FundamentalsProvider, ProviderResult};

/// Fetch fundamentals for `tickers`, or for the whole universe when empty.
///
/// Stops at the first failing ticker.
pub async fn load_fundamentals<P>(provider: &P, tickers: &[String]) -> ProviderResult<Vec<Fundamentals>>
where
    P: FundamentalsProvider + ?Sized,
{
    let tickers = if tickers.is_empty() {
        provider.list_universe().await?
    } else {
        tickers.to_vec()
    };

    let mut batch = Vec::with_capacity(tickers.len());
    for ticker in &tickers {
        match provider.get_fundamentals(ticker).await {
            Ok(fundamentals) => batch.push(fundamentals),
            Err(e) => {
                tracing::warn!("Failed to load fundamentals for {}: {}", ticker, e);
                return Err(e);
            }
        }
    }

    tracing::debug!("Loaded fundamentals for {} tickers", batch.len());
    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_request_loads_universe() {
        let provider = StubProvider::bundled().unwrap();
        let batch = load_fundamentals(&provider, &[]).await.unwrap();
        assert_eq!(batch.len(), provider.len());
    }

    #[tokio::test]
    async fn test_loads_requested_in_order() {
        let provider = StubProvider::bundled().unwrap();
        let tickers = vec!["wbd".to_string(), "AAPL".to_string()];
        let batch = load_fundamentals(&provider, &tickers).await.unwrap();
        let loaded: Vec<&str> = batch.iter().map(|f| f.ticker.as_str()).collect();
        assert_eq!(loaded, vec!["WBD", "AAPL"]);
    }

    #[tokio::test]
    async fn test_first_unknown_ticker_fails_batch() {
        let provider = StubProvider::bundled().unwrap();
        let tickers = vec!["AAPL".to_string(), "NOPE".to_string()];
        let err = load_fundamentals(&provider, &tickers).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_works_through_trait_object() {
        let provider: Box<dyn FundamentalsProvider> = Box::new(StubProvider::bundled().unwrap());
        let batch = load_fundamentals(provider.as_ref(), &["ko".to_string()]).await.unwrap();
        assert_eq!(batch[0].name, "The Coca-Cola Company");
    }
}
