//! Source I/O: classify a configured location string as a URL or a file
//! path and fetch its CSV text.

use crate::error::{Result, ScorebookError};
use std::io::Read as _;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

/// How a configured location string will be read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// An `http`/`https` URL, fetched over the network.
    Remote(Box<Url>),
    /// A filesystem path (plain paths and `file://` URLs).
    Local(PathBuf),
}

impl Location {
    pub fn classify(raw: &str) -> Self {
        match Url::parse(raw) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {
                Self::Remote(Box::new(url))
            }
            Ok(url) if url.scheme() == "file" => {
                let path = url
                    .to_file_path()
                    .unwrap_or_else(|()| PathBuf::from(url.path()));
                Self::Local(path)
            }
            // Includes relative paths, which never parse as URLs, and
            // Windows drive prefixes, which parse with a one-letter scheme.
            _ => Self::Local(PathBuf::from(raw)),
        }
    }
}

/// Blocking CSV fetcher shared by every dataset load.
pub struct Fetcher {
    agent: ureq::Agent,
}

impl Fetcher {
    pub fn new() -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(Duration::from_secs(10))
            .timeout(Duration::from_secs(120))
            .build();
        Self { agent }
    }

    /// Fetch the CSV text behind a location.
    ///
    /// # Errors
    ///
    /// Returns [`ScorebookError::DataUnavailable`] naming the location if
    /// the request or the file read fails
    pub fn fetch(&self, raw: &str) -> Result<String> {
        match Location::classify(raw) {
            Location::Remote(url) => self.fetch_remote(&url),
            Location::Local(path) => fetch_local(&path),
        }
    }

    fn fetch_remote(&self, url: &Url) -> Result<String> {
        match self.agent.get(url.as_str()).call() {
            Ok(response) => {
                // into_string() caps the body size; the deliveries export
                // is larger than the cap, so stream the reader instead.
                let mut body = String::new();
                response.into_reader().read_to_string(&mut body).map_err(|err| {
                    ScorebookError::data_unavailable(format!(
                        "failed to read response body from {url}: {err}"
                    ))
                })?;
                Ok(body)
            }
            Err(ureq::Error::Status(code, _)) => Err(ScorebookError::data_unavailable(format!(
                "{url} returned HTTP status {code}"
            ))),
            Err(ureq::Error::Transport(err)) => Err(ScorebookError::data_unavailable(format!(
                "request to {url} failed: {err}"
            ))),
        }
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

fn fetch_local(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|err| {
        ScorebookError::data_unavailable(format!("failed to read {}: {err}", path.display()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_https_url_as_remote() {
        let location = Location::classify("https://example.com/pub?output=csv");
        assert!(matches!(location, Location::Remote(_)));
    }

    #[test]
    fn classify_plain_path_as_local() {
        let location = Location::classify("testdata/matches.csv");
        assert_eq!(
            location,
            Location::Local(PathBuf::from("testdata/matches.csv"))
        );
    }

    #[test]
    fn classify_file_url_as_local_path() {
        let location = Location::classify("file:///data/matches.csv");
        assert_eq!(location, Location::Local(PathBuf::from("/data/matches.csv")));
    }

    #[test]
    fn fetch_missing_file_is_data_unavailable() {
        let fetcher = Fetcher::new();
        let err = match fetcher.fetch("/nonexistent/matches.csv") {
            Err(err) => err,
            Ok(_) => panic!("expected a fetch failure"),
        };
        assert!(!err.is_invalid_input());
        assert!(err.message().contains("/nonexistent/matches.csv"));
    }
}
