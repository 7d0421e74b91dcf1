use async_trait::async_trait;
use binstall::Fetcher;
use camino::Utf8Path;

/// Puts the resource at `url` into the file at `destination`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Fetch {
    async fn fetch(&self, url: &str, destination: &Utf8Path) -> anyhow::Result<()>;
}

#[async_trait]
impl Fetch for Fetcher {
    async fn fetch(&self, url: &str, destination: &Utf8Path) -> anyhow::Result<()> {
        self.download(url, destination).await?;
        Ok(())
    }
}
