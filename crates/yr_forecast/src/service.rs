use slog::{debug, info, Logger};
use std::{path::Path, sync::Arc};

use crate::{decode, Error, ForecastCache, ForecastDocument, XmlFetcher};

pub struct ForecastService {
    pub logger: Logger,
    pub fetcher: Arc<XmlFetcher>,
    pub cache: Arc<ForecastCache>,
}

impl ForecastService {
    pub fn new(logger: Logger, fetcher: Arc<XmlFetcher>, cache: Arc<ForecastCache>) -> Self {
        ForecastService {
            logger,
            fetcher,
            cache,
        }
    }

    /// Reads and decodes a forecast from disk, bypassing the cache.
    pub async fn load_from_path(&self, path: impl AsRef<Path>) -> Result<ForecastDocument, Error> {
        let raw_xml = self.fetcher.read_file(path.as_ref()).await?;
        let forecast = decode(&raw_xml)?;
        debug!(
            self.logger,
            "loaded forecast for {} from {}",
            forecast.location_name,
            path.as_ref().display()
        );
        Ok(forecast)
    }

    /// Returns the cached forecast for `url` while it is fresh, otherwise
    /// fetches and decodes it again. Only a successfully decoded document is
    /// written back to the cache.
    pub async fn load_from_url(&self, url: &str) -> Result<ForecastDocument, Error> {
        if let Some(forecast) = self.cache.get(url).await {
            debug!(self.logger, "cache hit: {}", url);
            return Ok(forecast);
        }
        debug!(self.logger, "cache miss: {}", url);

        let raw_xml = self.fetcher.fetch_xml(url).await?;
        let forecast = decode(&raw_xml)?;
        self.cache.insert(url, forecast.clone()).await;
        info!(
            self.logger,
            "fetched forecast for {} ({} intervals)",
            forecast.location_name,
            forecast.intervals.len()
        );
        Ok(forecast)
    }

    pub async fn invalidate_cache(&self) {
        self.cache.invalidate().await;
        debug!(self.logger, "forecast cache invalidated");
    }
}
