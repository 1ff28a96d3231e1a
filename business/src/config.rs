use std::env::vars;

use log::info;
use serde::Deserialize;

use crate::catalog::DEFAULT_CATALOG_URL;
use crate::pagination::{DEFAULT_PAGE_SIZE, is_allowed_page_size};

/// Validated settings of the dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    catalog_url: String,
    default_page_size: usize,
}

// Environment variables as read, before defaults and validation.
#[derive(Deserialize)]
struct RawConfig {
    bookdash_catalog_url: Option<String>,
    bookdash_default_page_size: Option<usize>,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            default_page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl BusinessConfig {
    /// Configuration pointing at another catalog, e.g. a mock server in tests.
    pub fn new(catalog_url: impl Into<String>) -> Self {
        Self {
            catalog_url: catalog_url.into(),
            ..Self::default()
        }
    }

    pub fn catalog_url(&self) -> &str {
        &self.catalog_url
    }

    pub fn default_page_size(&self) -> usize {
        self.default_page_size
    }

    /// Reads `BOOKDASH_*` environment variables, falling back to defaults.
    pub fn init() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");
        Self::from_vars(vars())
    }

    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> anyhow::Result<Self>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let ours: Vec<(String, String)> = vars
            .into_iter()
            .filter(|(key, _)| key.as_ref().starts_with("BOOKDASH_"))
            .map(|(key, value)| (key.as_ref().to_owned(), value.as_ref().to_owned()))
            .collect();
        let raw: RawConfig = serde_env::from_iter(ours)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let RawConfig {
            bookdash_catalog_url,
            bookdash_default_page_size,
        } = raw;

        let catalog_url = match bookdash_catalog_url {
            Some(url) if url.starts_with("http://") || url.starts_with("https://") => {
                info!("Using provided BOOKDASH_CATALOG_URL: {url}");
                url
            }
            Some(url) => anyhow::bail!("BOOKDASH_CATALOG_URL must be an http(s) URL, got {url:?}"),
            None => DEFAULT_CATALOG_URL.to_string(),
        };

        let default_page_size = match bookdash_default_page_size {
            Some(size) if is_allowed_page_size(size) => size,
            Some(size) => {
                anyhow::bail!("BOOKDASH_DEFAULT_PAGE_SIZE must be one of 10, 50 or 100, got {size}")
            }
            None => DEFAULT_PAGE_SIZE,
        };

        Ok(Self {
            catalog_url,
            default_page_size,
        })
    }
}
