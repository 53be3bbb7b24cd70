use crate::domain::model::PortRecord;
use crate::domain::ports::PortSource;
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{validate_file_extension, validate_path, validate_range, validate_url};
use async_trait::async_trait;
use reqwest::Client;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::OnceCell;

pub const DEFAULT_CATALOG_PATH: &str = "data/ports.json";
pub const DEFAULT_CATALOG_TIMEOUT_SECS: u64 = 10;

/// Parses and checks a JSON array of `{name, code, lat, lng}`.
pub fn parse_catalog(bytes: &[u8]) -> Result<Vec<PortRecord>> {
    let ports: Vec<PortRecord> = serde_json::from_slice(bytes)?;

    for (index, port) in ports.iter().enumerate() {
        validate_range(&format!("ports[{}].lat", index), port.lat, -90.0, 90.0)
            .and_then(|_| validate_range(&format!("ports[{}].lng", index), port.lng, -180.0, 180.0))
            .map_err(|e| CheckError::CatalogError {
                message: format!("{} ({})", e, port.code),
            })?;
    }

    Ok(ports)
}

#[derive(Debug, Clone)]
pub struct FilePortSource {
    path: PathBuf,
}

impl FilePortSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl PortSource for FilePortSource {
    async fn fetch(&self) -> Result<Vec<PortRecord>> {
        tracing::debug!("Reading port catalog from {}", self.path.display());
        let data = tokio::fs::read(&self.path).await?;
        parse_catalog(&data)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

#[derive(Debug, Clone)]
pub struct HttpPortSource {
    url: String,
    client: Client,
    timeout: Duration,
}

impl HttpPortSource {
    pub fn new(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            url: url.into(),
            client: Client::new(),
            timeout,
        }
    }
}

#[async_trait]
impl PortSource for HttpPortSource {
    async fn fetch(&self) -> Result<Vec<PortRecord>> {
        tracing::debug!("Fetching port catalog from: {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await?
            .error_for_status()?;

        tracing::debug!("Catalog response status: {}", response.status());
        let body = response.bytes().await?;
        parse_catalog(&body)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}

/// In-memory catalog, handy for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticPortSource {
    ports: Vec<PortRecord>,
}

impl StaticPortSource {
    pub fn new(ports: Vec<PortRecord>) -> Self {
        Self { ports }
    }
}

#[async_trait]
impl PortSource for StaticPortSource {
    async fn fetch(&self) -> Result<Vec<PortRecord>> {
        Ok(self.ports.clone())
    }

    fn describe(&self) -> String {
        format!("<{} static ports>", self.ports.len())
    }
}

/// Builds a source from a CLI/TOML value: `http(s)://` URLs go over the network,
/// anything else is read as a local `.json` file.
pub fn source_from_location(location: &str, timeout: Duration) -> Result<Box<dyn PortSource>> {
    if location.starts_with("http://") || location.starts_with("https://") {
        validate_url("catalog.source", location)?;
        Ok(Box::new(HttpPortSource::new(location, timeout)))
    } else {
        validate_path("catalog.source", location)?;
        validate_file_extension("catalog.source", location, &["json"])?;
        Ok(Box::new(FilePortSource::new(location)))
    }
}

/// Port catalog that loads lazily and keeps the first successful result.
///
/// A failed load is logged and treated as an empty catalog; it is not cached, so the
/// next call tries the source again.
pub struct PortCatalog {
    source: Box<dyn PortSource>,
    cache: OnceCell<Vec<PortRecord>>,
}

impl PortCatalog {
    pub fn new(source: Box<dyn PortSource>) -> Self {
        Self {
            source,
            cache: OnceCell::new(),
        }
    }

    pub fn from_ports(ports: Vec<PortRecord>) -> Self {
        Self::new(Box::new(StaticPortSource::new(ports)))
    }

    pub async fn ports(&self) -> &[PortRecord] {
        match self.cache.get_or_try_init(|| self.source.fetch()).await {
            Ok(ports) => {
                tracing::debug!("Port catalog ready: {} ports", ports.len());
                ports.as_slice()
            }
            Err(e) => {
                tracing::warn!(
                    "⚠️ Port catalog load failed from {}: {} - continuing without ports",
                    self.source.describe(),
                    e
                );
                &[]
            }
        }
    }

    pub fn is_loaded(&self) -> bool {
        self.cache.initialized()
    }
}
