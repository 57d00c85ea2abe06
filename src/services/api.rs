use reqwest::cookie::{CookieStore, Jar};
use reqwest::{Client, Url};
use std::sync::Arc;
use std::time::Duration;

/// Shared HTTP plumbing for the adoption service
///
/// Every request goes through one `reqwest::Client` with a cookie jar, so the
/// session cookie set by `/auth/login` rides along on later calls. The jar can
/// be exported to a header string and restored in a later process.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: Client,
    jar: Arc<Jar>,
}

impl ApiClient {
    /// Create a new API client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let jar = Arc::new(Jar::default());
        let client = Client::builder()
            .timeout(timeout)
            .cookie_provider(jar.clone())
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: base_url.into(),
            client,
            jar,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for a service path
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn http(&self) -> &Client {
        &self.client
    }

    /// Cookies currently held for the service, as a `Cookie` header value
    pub fn export_cookies(&self) -> Option<String> {
        let url = self.parsed_base_url()?;
        self.jar
            .cookies(&url)
            .and_then(|value| value.to_str().ok().map(str::to_string))
            .filter(|value| !value.is_empty())
    }

    /// Load cookies previously returned by [`ApiClient::export_cookies`]
    pub fn restore_cookies(&self, header: &str) {
        let Some(url) = self.parsed_base_url() else {
            return;
        };

        for pair in header.split(';').map(str::trim).filter(|p| !p.is_empty()) {
            self.jar.add_cookie_str(pair, &url);
        }

        tracing::debug!("Restored session cookies for {}", url);
    }

    fn parsed_base_url(&self) -> Option<Url> {
        match Url::parse(&self.base_url) {
            Ok(url) => Some(url),
            Err(e) => {
                tracing::warn!("Invalid service base URL {}: {}", self.base_url, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let api = ApiClient::new("https://dogs.test/", Duration::from_secs(5));

        assert_eq!(api.url("/dogs/search"), "https://dogs.test/dogs/search");
        assert_eq!(api.url("dogs"), "https://dogs.test/dogs");
    }

    #[test]
    fn test_cookie_restore_and_export() {
        let api = ApiClient::new("http://dogs.test", Duration::from_secs(5));
        assert_eq!(api.export_cookies(), None);

        api.restore_cookies("fetch-access-token=abc123");
        assert_eq!(api.export_cookies().as_deref(), Some("fetch-access-token=abc123"));
    }
}
