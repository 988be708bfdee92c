// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pagination configuration: file format, validation, and normalization.

use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;
use std::path::Path;
use thiserror::Error;

/// Largest page count a configuration may produce; every page gets a
/// rendered control.
pub const MAX_PAGE_COUNT: usize = 100_000;

/// Errors that can occur when building a pagination configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("items per page must be greater than zero (got {0})")]
    InvalidItemsPerPage(i64),

    #[error("{page_count} pages exceeds the limit of {max} (raise items per page)")]
    TooManyPages { page_count: usize, max: usize },

    #[error("missing required setting: {0}")]
    MissingField(&'static str),

    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Validated pagination configuration.
///
/// Immutable once built; a component picks up changes through
/// [`Pagination::configure`](crate::pagination::Pagination::configure).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaginationConfig {
    total_items: usize,
    items_per_page: NonZeroUsize,
    page_number_test_id: Option<String>,
}

impl PaginationConfig {
    /// Build a configuration from raw integers.
    ///
    /// A negative `total_items` is clamped to zero. A non-positive
    /// `items_per_page`, or a combination needing more than
    /// [`MAX_PAGE_COUNT`] pages, is rejected.
    pub fn new(total_items: i64, items_per_page: i64) -> Result<Self, ConfigError> {
        let per_page = usize::try_from(items_per_page)
            .ok()
            .and_then(NonZeroUsize::new)
            .ok_or(ConfigError::InvalidItemsPerPage(items_per_page))?;

        let total = if total_items < 0 {
            tracing::warn!(total_items, "negative total item count clamped to 0");
            0
        } else {
            usize::try_from(total_items).unwrap_or(usize::MAX)
        };

        let page_count = total.div_ceil(per_page.get());
        if page_count > MAX_PAGE_COUNT {
            return Err(ConfigError::TooManyPages {
                page_count,
                max: MAX_PAGE_COUNT,
            });
        }

        Ok(Self {
            total_items: total,
            items_per_page: per_page,
            page_number_test_id: None,
        })
    }

    /// Attach an identification tag to every rendered page-number control.
    pub fn with_page_number_test_id(mut self, id: impl Into<String>) -> Self {
        self.page_number_test_id = Some(id.into());
        self
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn items_per_page(&self) -> NonZeroUsize {
        self.items_per_page
    }

    pub fn page_number_test_id(&self) -> Option<&str> {
        self.page_number_test_id.as_deref()
    }

    /// Number of pages needed to show every item (`ceil(total / per_page)`).
    pub fn page_count(&self) -> usize {
        self.total_items.div_ceil(self.items_per_page.get())
    }

    /// Load and validate a configuration from a TOML or JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        ConfigFile::load(path)?.try_into()
    }
}

/// On-disk configuration (TOML or JSON).
///
/// Every field is optional so that command-line flags can fill in or
/// override values before validation.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Total number of items being paginated
    #[serde(default, alias = "totalItems")]
    pub total_items: Option<i64>,

    /// Number of items shown per page
    #[serde(default, alias = "itemsPerPage")]
    pub items_per_page: Option<i64>,

    /// Identification tag attached to page-number controls
    #[serde(default, alias = "pageNumberTestId")]
    pub page_number_test_id: Option<String>,
}

impl ConfigFile {
    /// Read a config file, picking the format from the extension
    /// (`.json` is JSON, anything else is TOML).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let file = if path.extension().is_some_and(|e| e == "json") {
            serde_json::from_str(&content)?
        } else {
            toml::from_str(&content)?
        };
        tracing::debug!(path = %path.display(), "loaded pagination config");
        Ok(file)
    }

    /// Overlay values from `other` where they are set.
    pub fn merge(self, other: ConfigFile) -> ConfigFile {
        ConfigFile {
            total_items: other.total_items.or(self.total_items),
            items_per_page: other.items_per_page.or(self.items_per_page),
            page_number_test_id: other.page_number_test_id.or(self.page_number_test_id),
        }
    }
}

impl TryFrom<ConfigFile> for PaginationConfig {
    type Error = ConfigError;

    fn try_from(file: ConfigFile) -> Result<Self, Self::Error> {
        let total = file
            .total_items
            .ok_or(ConfigError::MissingField("total_items"))?;
        let per_page = file
            .items_per_page
            .ok_or(ConfigError::MissingField("items_per_page"))?;

        let config = PaginationConfig::new(total, per_page)?;
        Ok(match file.page_number_test_id {
            Some(id) => config.with_page_number_test_id(id),
            None => config,
        })
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
