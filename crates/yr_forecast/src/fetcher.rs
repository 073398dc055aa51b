use reqwest::{Client, StatusCode};
use slog::{debug, Logger};
use std::path::Path;
use tokio::fs;

use crate::{Error, Settings};

pub struct XmlFetcher {
    logger: Logger,
    client: Client,
}

impl XmlFetcher {
    pub fn new(logger: Logger, settings: &Settings) -> Result<Self, Error> {
        let mut builder = Client::builder().user_agent(settings.user_agent.clone());
        if let Some(timeout) = settings.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| Error::Config(format!("error building http client: {}", e)))?;
        Ok(XmlFetcher { logger, client })
    }

    /// Single GET without retries. Only a `200 OK` counts as success.
    pub async fn fetch_xml(&self, url: &str) -> Result<Vec<u8>, Error> {
        debug!(self.logger, "requesting: {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status();
        if status != StatusCode::OK {
            debug!(self.logger, "error response from {}: {}", url, status);
            return Err(Error::Http(status));
        }
        let body = response.bytes().await?;
        debug!(self.logger, "received {} bytes from {}", body.len(), url);
        Ok(body.to_vec())
    }

    pub async fn read_file(&self, path: &Path) -> Result<Vec<u8>, Error> {
        debug!(self.logger, "reading: {}", path.display());
        fs::read(path).await.map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
