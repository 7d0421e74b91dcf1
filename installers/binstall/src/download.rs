use std::time::Duration;

use bon::bon;
use camino::Utf8Path;
use reqwest::{
    header::{self, HeaderMap, HeaderValue},
    redirect::Policy,
};
use tokio::{fs::File, io::AsyncWriteExt};
use url::Url;

use crate::InstallerError;

const DEFAULT_CONNECT_TIMEOUT_SECONDS: u64 = 30;
const DEFAULT_MAX_REDIRECTS: usize = 10;
const OCTET_STREAM_HEADER: HeaderValue = HeaderValue::from_static("application/octet-stream");

/// Streams remote resources into local files.
#[derive(Clone, Debug)]
pub struct Fetcher {
    client: reqwest::Client,
}

#[bon]
impl Fetcher {
    #[builder]
    pub fn new(
        user_agent: Option<String>,
        connect_timeout: Option<Duration>,
        max_redirects: Option<usize>,
    ) -> Result<Fetcher, InstallerError> {
        let max_redirects = max_redirects.unwrap_or(DEFAULT_MAX_REDIRECTS);
        // hops are followed as parsed `Url`s, so an already-escaped path is
        // sent as-is instead of being encoded a second time
        let redirect = Policy::custom(move |attempt| {
            if attempt.previous().len() > max_redirects {
                attempt.error(format!("gave up after {max_redirects} redirects"))
            } else {
                tracing::debug!(to = %attempt.url(), hops = attempt.previous().len(), "following redirect");
                attempt.follow()
            }
        });

        let client = reqwest::Client::builder()
            .user_agent(user_agent.unwrap_or_else(|| "hsnerd".to_string()))
            .default_headers(HeaderMap::from_iter([(header::ACCEPT, OCTET_STREAM_HEADER)]))
            .connect_timeout(connect_timeout.unwrap_or_else(|| {
                Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECONDS)
            }))
            .redirect(redirect)
            .build()?;
        Ok(Fetcher { client })
    }

    /// Downloads `url` into `destination`.
    ///
    /// The destination is created (or truncated) before the request is sent,
    /// so a failed download leaves an empty or partial file behind. The
    /// response body is written chunk by chunk as it arrives.
    pub async fn download(&self, url: &str, destination: &Utf8Path) -> Result<(), InstallerError> {
        let url = Url::parse(url).map_err(|source| InstallerError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let mut file = File::create(destination)
            .await
            .map_err(|source| InstallerError::Open {
                path: destination.to_string(),
                source,
            })?;

        tracing::info!("downloading {} to {}", url, destination);
        let mut response = self.client.get(url).send().await?.error_for_status()?;
        tracing::debug!(final_url = %response.url(), status = %response.status());

        let to_write_error = |source| InstallerError::Write {
            path: destination.to_string(),
            source,
        };
        let mut written: u64 = 0;
        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await.map_err(to_write_error)?;
            written += chunk.len() as u64;
        }
        file.flush().await.map_err(to_write_error)?;
        file.sync_all().await.map_err(to_write_error)?;

        tracing::info!("wrote {} bytes to {}", written, destination);
        Ok(())
    }
}
