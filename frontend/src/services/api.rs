use gloo::net::http::{Request, Response};
use portfolio_shared::{Dataset, DatasetError, SkillCatalog};
use web_sys::RequestCache;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("network error for {url}: {message}")]
    Network { url: String, message: String },
    #[error("{url} answered with status {status}")]
    Status { url: String, status: u16 },
    #[error("unreadable response from {url}: {message}")]
    Body { url: String, message: String },
    #[error("failed to parse {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: DatasetError,
    },
}

/// Client for the static JSON files shipped with the site
#[derive(Clone, Debug, PartialEq)]
pub struct DataClient {
    base_url: String,
}

impl DataClient {
    /// Client resolving paths relative to the current page
    pub fn new() -> Self {
        Self {
            base_url: String::new(),
        }
    }

    pub fn with_base_url(base_url: String) -> Self {
        Self { base_url }
    }

    pub fn url(&self, path: &str) -> String {
        if self.base_url.is_empty() {
            path.to_string()
        } else {
            format!(
                "{}/{}",
                self.base_url.trim_end_matches('/'),
                path.trim_start_matches('/')
            )
        }
    }

    /// Fetch and parse the experience/education dataset
    pub async fn fetch_dataset(&self, path: &str) -> Result<Dataset, FetchError> {
        let url = self.url(path);
        let body = self.get_text(&url).await?;
        Dataset::from_json(&body).map_err(|source| FetchError::Parse { url, source })
    }

    pub async fn fetch_skills(&self, path: &str) -> Result<SkillCatalog, FetchError> {
        let url = self.url(path);
        let body = self.get_text(&url).await?;
        SkillCatalog::from_json(&body).map_err(|source| FetchError::Parse { url, source })
    }

    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = Request::get(url)
            .cache(RequestCache::NoCache)
            .send()
            .await
            .map_err(|e| FetchError::Network {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        read_success_body(url, response).await
    }
}

impl Default for DataClient {
    fn default() -> Self {
        Self::new()
    }
}

async fn read_success_body(url: &str, response: Response) -> Result<String, FetchError> {
    if !response.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    response.text().await.map_err(|e| FetchError::Body {
        url: url.to_string(),
        message: e.to_string(),
    })
}
