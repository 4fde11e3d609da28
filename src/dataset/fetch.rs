use super::parse_yaml;
use crate::glossary::Entry;
use crate::retry::{with_retry_if, RetryConfig};
use anyhow::{Context, Result};
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

/// Where the canonical YAML glossary lives.
pub const DEFAULT_SOURCE_URL: &str =
    "https://raw.githubusercontent.com/carpentries/glosario/master/glossary.yml";

#[derive(Debug, Error)]
enum FetchError {
    #[error("HTTP {0}")]
    Status(StatusCode),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

impl FetchError {
    /// Server errors, rate limiting and network failures are worth another try;
    /// other client errors are not.
    fn is_retryable(&self) -> bool {
        match self {
            FetchError::Status(status) => {
                status.is_server_error() || *status == StatusCode::TOO_MANY_REQUESTS
            }
            FetchError::Transport(_) => true,
        }
    }
}

/// Download the YAML glossary and convert it to entries.
pub async fn fetch_yaml(url: &str, retry: &RetryConfig) -> Result<Vec<Entry>> {
    info!("Fetching glossary from {}", url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("glosario/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let body = with_retry_if(
        retry,
        "Glossary fetch",
        || fetch_body(&client, url),
        FetchError::is_retryable,
    )
    .await
    .context(format!("Failed to fetch glossary from {}", url))?;

    let entries = parse_yaml(&body)?;
    info!("✓ Fetched {} glossary entries", entries.len());
    Ok(entries)
}

async fn fetch_body(client: &reqwest::Client, url: &str) -> Result<String, FetchError> {
    let response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    Ok(response.text().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{method, path},
        Mock, MockServer, ResponseTemplate,
    };

    const GLOSSARY_YAML: &str = r#"
- slug: _test_term
  en:
    term: "test term"
    def: "for testing purposes"
- slug: _test_alias
  ref: _test_term
"#;

    fn fast_retry() -> RetryConfig {
        RetryConfig::new(3, Duration::from_millis(10)).with_max_delay(Duration::from_millis(20))
    }

    // ==================== FetchError Tests ====================

    #[test]
    fn test_status_retryability() {
        assert!(FetchError::Status(StatusCode::INTERNAL_SERVER_ERROR).is_retryable());
        assert!(FetchError::Status(StatusCode::BAD_GATEWAY).is_retryable());
        assert!(FetchError::Status(StatusCode::TOO_MANY_REQUESTS).is_retryable());
        assert!(!FetchError::Status(StatusCode::NOT_FOUND).is_retryable());
        assert!(!FetchError::Status(StatusCode::FORBIDDEN).is_retryable());
    }

    // ==================== fetch_yaml Tests ====================

    #[tokio::test]
    async fn test_fetch_yaml_success() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/glossary.yml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(GLOSSARY_YAML))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/glossary.yml", mock_server.uri());
        let entries = fetch_yaml(&url, &fast_retry()).await.expect("Should fetch");

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].slug(), "_test_term");
        assert_eq!(entries[1].reference(), Some("_test_term"));
    }

    #[tokio::test]
    async fn test_fetch_yaml_does_not_retry_not_found() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/glossary.yml"))
            .respond_with(ResponseTemplate::new(404))
            .expect(1)
            .mount(&mock_server)
            .await;

        let url = format!("{}/glossary.yml", mock_server.uri());
        let err = fetch_yaml(&url, &fast_retry()).await.unwrap_err();

        let message = format!("{:#}", err);
        assert!(message.contains("Failed to fetch glossary"));
        assert!(message.contains("404"));
    }

    #[tokio::test]
    async fn test_fetch_yaml_retries_server_errors() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/glossary.yml"))
            .respond_with(ResponseTemplate::new(503))
            .expect(3)
            .mount(&mock_server)
            .await;

        let url = format!("{}/glossary.yml", mock_server.uri());
        let result = fetch_yaml(&url, &fast_retry()).await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_fetch_yaml_recovers_after_server_error() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/glossary.yml"))
            .respond_with(ResponseTemplate::new(500))
            .up_to_n_times(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("GET"))
            .and(path("/glossary.yml"))
            .respond_with(ResponseTemplate::new(200).set_body_string(GLOSSARY_YAML))
            .mount(&mock_server)
            .await;

        let url = format!("{}/glossary.yml", mock_server.uri());
        let entries = fetch_yaml(&url, &fast_retry()).await.expect("Should recover");
        assert_eq!(entries.len(), 2);
    }

    #[tokio::test]
    async fn test_fetch_yaml_rejects_non_list_body() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
            .mount(&mock_server)
            .await;

        let url = format!("{}/glossary.yml", mock_server.uri());
        let result = fetch_yaml(&url, &fast_retry()).await;
        assert!(result.is_err());
    }
}
