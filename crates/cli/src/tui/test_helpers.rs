// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Headless screen for testing the pagination component.
//!
//! Queries mirror how a user finds controls: by visible text or by the
//! identification tag attached to page-number controls. Queries return a
//! [`ControlKind`] handle rather than a control snapshot, so assertions made
//! after a click always look at a fresh render.
//!
//! Only compiled for unit tests and with the `test-helpers` feature, which
//! the crate's own dev-dependency enables for `tests/`.

use thiserror::Error;

use super::render::format_controls;
use crate::config::PaginationConfig;
use crate::pagination::{Control, ControlKind, Pagination};

/// Errors from screen queries
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("no control matches {0:?}")]
    NotFound(String),

    #[error("{count} controls match {pattern:?}, expected exactly one")]
    Multiple { pattern: String, count: usize },
}

/// Mounted pagination component with query helpers
pub struct Screen {
    pagination: Pagination,
}

impl Screen {
    /// Mount a component for the given configuration.
    pub fn render(config: PaginationConfig) -> Self {
        Self {
            pagination: Pagination::new(config),
        }
    }

    pub fn pagination(&self) -> &Pagination {
        &self.pagination
    }

    /// Controls as currently rendered
    pub fn controls(&self) -> Vec<Control> {
        self.pagination.render()
    }

    /// Plain-text rendering of the control row
    pub fn text(&self) -> String {
        format_controls(&self.controls())
    }

    /// Find the single control whose label contains `pattern`
    /// (case-insensitive).
    pub fn get_by_text(&self, pattern: &str) -> Result<ControlKind, QueryError> {
        let needle = pattern.to_lowercase();
        let matches: Vec<ControlKind> = self
            .controls()
            .into_iter()
            .filter(|c| c.label.to_lowercase().contains(&needle))
            .map(|c| c.kind)
            .collect();

        match matches.as_slice() {
            [] => Err(QueryError::NotFound(pattern.to_string())),
            [kind] => Ok(*kind),
            _ => Err(QueryError::Multiple {
                pattern: pattern.to_string(),
                count: matches.len(),
            }),
        }
    }

    /// Find every control tagged with `test_id`, in render order.
    pub fn get_all_by_test_id(&self, test_id: &str) -> Result<Vec<ControlKind>, QueryError> {
        let matches: Vec<ControlKind> = self
            .controls()
            .into_iter()
            .filter(|c| c.test_id.as_deref() == Some(test_id))
            .map(|c| c.kind)
            .collect();

        if matches.is_empty() {
            return Err(QueryError::NotFound(test_id.to_string()));
        }
        Ok(matches)
    }

    /// Fresh snapshot of one control
    pub fn control(&self, kind: ControlKind) -> Option<Control> {
        self.controls().into_iter().find(|c| c.kind == kind)
    }

    pub fn has_class(&self, kind: ControlKind, class: &str) -> bool {
        self.control(kind).is_some_and(|c| c.has_class(class))
    }

    /// Label of a control, as `toHaveTextContent` would see it.
    pub fn text_content(&self, kind: ControlKind) -> Option<String> {
        self.control(kind).map(|c| c.label)
    }

    /// Click a control. Returns whether the current page changed.
    pub fn click(&mut self, kind: ControlKind) -> bool {
        self.pagination.click(kind)
    }
}

#[cfg(test)]
#[path = "test_helpers_tests.rs"]
mod tests;
