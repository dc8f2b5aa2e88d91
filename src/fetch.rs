//! Blocking HTTP fetch of channel web-preview pages.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::encoding;
use crate::error::FetchError;
use crate::result::PageRecord;
use crate::url_utils;
use crate::Options;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const TIMEOUT: Duration = Duration::from_secs(30);
const MAX_REDIRECTS: usize = 10;

/// A fetched page body with its declared content type.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// Final URL after redirects.
    pub url: String,
    /// Value of the `Content-Type` header, if any.
    pub content_type: Option<String>,
    /// Raw body bytes.
    pub body: Vec<u8>,
}

impl FetchedPage {
    /// Body decoded to UTF-8 using the header and `<meta>` charset.
    #[must_use]
    pub fn text(&self) -> String {
        encoding::decode_page(&self.body, self.content_type.as_deref())
    }
}

/// HTTP client for channel pages.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    /// Build a client with the crate user agent, a timeout, and a bounded
    /// redirect policy.
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(TIMEOUT)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()?;
        Ok(Self { client })
    }

    /// GET `url` and return the body on a 2xx answer.
    pub fn fetch(&self, url: &str) -> Result<FetchedPage, FetchError> {
        let network = |source| FetchError::Network {
            url: url.to_string(),
            source,
        };

        tracing::debug!(url, "fetching page");
        let resp = self.client.get(url).send().map_err(network)?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let final_url = resp.url().to_string();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        let body = resp.bytes().map_err(network)?.to_vec();

        Ok(FetchedPage {
            url: final_url,
            content_type,
            body,
        })
    }

    /// Fetch the web-preview page of `channel` (`@name` or `name`).
    pub fn fetch_channel(&self, channel: &str, options: &Options) -> Result<FetchedPage, FetchError> {
        self.fetch(&url_utils::channel_url(channel, &options.base_url))
    }

    /// Fetch the web-preview page of `channel` and extract it.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::Fetch`] when the request fails and
    /// [`crate::Error::MissingTitle`] when the answer is not a channel page.
    pub fn fetch_page(&self, channel: &str, options: &Options) -> crate::Result<PageRecord> {
        let page = self.fetch_channel(channel, options)?;
        tracing::debug!(url = %page.url, bytes = page.body.len(), "fetched channel page");
        crate::extract_page_with_options(&page.text(), options)
    }
}
