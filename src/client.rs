use log::{debug, info};
use reqwest::blocking::Client;
use reqwest::StatusCode;

use crate::config::Config;
use crate::error::FetchError;
use crate::records::DnsHistory;

/// Client for the SecurityTrails DNS history endpoint.
pub struct HistoryClient {
    http: Client,
    config: Config,
}

impl HistoryClient {
    pub fn new(config: Config) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// Fetch the historical A records for `domain`.
    ///
    /// Issues at most one request. Without a credential no request is made
    /// at all; every other failure comes back as a classified [`FetchError`].
    pub fn fetch_a_records(&self, domain: &str) -> Result<DnsHistory, FetchError> {
        let api_key = match self.config.api_key.as_deref() {
            Some(key) if !key.is_empty() => key,
            _ => return Err(FetchError::MissingCredential),
        };

        let url = format!(
            "{}/history/{}/dns/a",
            self.config.api_base.as_str().trim_end_matches('/'),
            domain
        );

        info!("Requesting A record history: {}", url);
        let response = self
            .http
            .get(&url)
            .header("APIKEY", api_key)
            .header("Accept", "application/json")
            .send()?;

        let status = response.status();
        debug!("API responded with {}", status);

        if status.is_success() {
            let body = response.text()?;
            return serde_json::from_str(&body)
                .map_err(|err| FetchError::InvalidPayload(err.to_string()));
        }

        match status {
            StatusCode::UNAUTHORIZED => Err(FetchError::Unauthorized),
            StatusCode::NOT_FOUND => Err(FetchError::NotFound),
            _ => Err(FetchError::ApiError {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or("Unknown").to_string(),
                body: response.text().unwrap_or_default(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use url::Url;

    const HISTORY_BODY: &str = r#"{
        "records": [
            {
                "values": [{"ip": "1.2.3.4"}],
                "first_seen": "2020-01-01",
                "last_seen": "2020-06-01"
            }
        ]
    }"#;

    fn client_for(server: &mockito::ServerGuard, api_key: Option<&str>) -> HistoryClient {
        let config = Config::new(
            Url::parse(&server.url()).unwrap(),
            api_key.map(str::to_string),
        );
        HistoryClient::new(config)
    }

    #[test]
    fn decodes_successful_response() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/history/example.com/dns/a")
            .match_header("APIKEY", "test-key")
            .match_header("Accept", "application/json")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(HISTORY_BODY)
            .create();

        let client = client_for(&server, Some("test-key"));
        let history = client.fetch_a_records("example.com").unwrap();

        mock.assert();
        assert_eq!(history.records.len(), 1);
        assert_eq!(history.records[0].values[0].ip, "1.2.3.4");
    }

    #[test]
    fn missing_credential_never_hits_the_network() {
        let mut server = mockito::Server::new();
        let mock = server.mock("GET", mockito::Matcher::Any).expect(0).create();

        let client = client_for(&server, None);
        let err = client.fetch_a_records("example.com").unwrap_err();

        assert!(matches!(err, FetchError::MissingCredential));
        mock.assert();
    }

    #[test]
    fn empty_credential_counts_as_missing() {
        let config = Config::new(
            Url::parse("http://127.0.0.1:9").unwrap(),
            Some(String::new()),
        );
        let client = HistoryClient::new(config);

        let err = client.fetch_a_records("example.com").unwrap_err();
        assert!(matches!(err, FetchError::MissingCredential));
    }

    #[test]
    fn unauthorized_status_maps_to_unauthorized() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/history/example.com/dns/a")
            .with_status(401)
            .create();

        let client = client_for(&server, Some("bad-key"));
        let err = client.fetch_a_records("example.com").unwrap_err();

        assert!(matches!(err, FetchError::Unauthorized));
    }

    #[test]
    fn not_found_status_maps_to_not_found() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/history/unknown.example/dns/a")
            .with_status(404)
            .create();

        let client = client_for(&server, Some("test-key"));
        let err = client.fetch_a_records("unknown.example").unwrap_err();

        assert!(matches!(err, FetchError::NotFound));
    }

    #[test]
    fn other_status_maps_to_api_error_with_body() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/history/example.com/dns/a")
            .with_status(503)
            .with_body("try later")
            .create();

        let client = client_for(&server, Some("test-key"));
        let err = client.fetch_a_records("example.com").unwrap_err();

        match err {
            FetchError::ApiError {
                status,
                status_text,
                body,
            } => {
                assert_eq!(status, 503);
                assert_eq!(status_text, "Service Unavailable");
                assert_eq!(body, "try later");
            }
            other => panic!("expected ApiError, got {:?}", other),
        }
    }

    #[test]
    fn malformed_json_maps_to_invalid_payload() {
        let mut server = mockito::Server::new();
        server
            .mock("GET", "/history/example.com/dns/a")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create();

        let client = client_for(&server, Some("test-key"));
        let err = client.fetch_a_records("example.com").unwrap_err();

        assert!(matches!(err, FetchError::InvalidPayload(_)));
    }

    #[test]
    fn connection_failure_maps_to_network() {
        // Port 1 is unassigned on loopback, so the connect is refused.
        let config = Config::new(
            Url::parse("http://127.0.0.1:1").unwrap(),
            Some("test-key".to_string()),
        );
        let client = HistoryClient::new(config);

        let err = client.fetch_a_records("example.com").unwrap_err();
        assert!(matches!(err, FetchError::Network(_)));
    }
}
