//! Dump downloading.
//!
//! Files are streamed to a `.part` file that is renamed once complete,
//! so that an interrupted download is never mistaken for a finished one.
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use futures_util::StreamExt;
use log::{debug, error, info};
use tokio::io::AsyncWriteExt;
use url::Url;

/// Chinese Wikipedia dump of 2025-04-01.
pub const BASE_URL: &str = "https://dumps.wikimedia.org/zhwiki/20250401/";
pub const DUMP_FILES: [&str; 1] = ["zhwiki-20250401-pages-articles.xml.bz2"];

const CONNECT_TIMEOUT: Duration = Duration::from_secs(30);
/// progress is logged every time this many bytes are received
const REPORT_EVERY: u64 = 64 * 1024 * 1024;

#[derive(Debug)]
pub enum Error {
    Reqwest(reqwest::Error),
    Io(std::io::Error),
    Url(url::ParseError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Reqwest(e) => write!(f, "{}", e),
            Error::Io(e) => write!(f, "{}", e),
            Error::Url(e) => write!(f, "invalid url: {}", e),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Reqwest(err)
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Error::Url(err)
    }
}

/// Holds the base url of the dump and the http client that will make the requests.
pub struct Downloader {
    base: Url,
    client: reqwest::Client,
}

impl Downloader {
    pub fn new(base_url: &str) -> Result<Self, Error> {
        // without a trailing slash, joining would replace the last segment
        let base = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };

        let client = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .build()?;

        debug!("downloader using base url {}", base);
        Ok(Self { base, client })
    }

    pub fn url_for(&self, file: &str) -> Result<Url, Error> {
        Ok(self.base.join(file)?)
    }

    /// Downloads `file` into `dst_dir`, unless it is already there.
    pub async fn download(&self, file: &str, dst_dir: &Path) -> Result<PathBuf, Error> {
        let dst = dst_dir.join(file);
        if dst.exists() {
            info!("{:?} already exists, skipping download", dst);
            return Ok(dst);
        }

        tokio::fs::create_dir_all(dst_dir).await?;

        let url = self.url_for(file)?;
        info!("downloading {}", url);
        let response = self.client.get(url).send().await?.error_for_status()?;
        let total = response.content_length();

        let part = dst_dir.join(format!("{}.part", file));
        let mut out = tokio::fs::File::create(&part).await?;
        let mut body = response.bytes_stream();
        let mut received = 0u64;
        let mut next_report = REPORT_EVERY;

        while let Some(chunk) = body.next().await {
            let chunk = chunk?;
            out.write_all(&chunk).await?;
            received += chunk.len() as u64;

            if received >= next_report {
                match total {
                    Some(total) => info!("{}: {}/{} bytes", file, received, total),
                    None => info!("{}: {} bytes", file, received),
                }
                next_report += REPORT_EVERY;
            }
        }
        out.flush().await?;
        drop(out);

        tokio::fs::rename(&part, &dst).await?;
        info!("downloaded {:?} ({} bytes)", dst, received);
        Ok(dst)
    }

    /// Sequentially downloads `files`. A failure does not prevent the next files from being attempted.
    pub async fn download_all(&self, files: &[String], dst_dir: &Path) -> Vec<Result<PathBuf, Error>> {
        let mut results = Vec::with_capacity(files.len());
        for (id, file) in files.iter().enumerate() {
            info!("downloading {}/{}", id + 1, files.len());
            let result = self.download(file, dst_dir).await;
            if let Err(e) = &result {
                error!("could not download {}: {}", file, e);
            }
            results.push(result);
        }
        results
    }
}
