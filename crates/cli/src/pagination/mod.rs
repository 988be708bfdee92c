// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pagination control component.
//!
//! Holds the current page for a [`PaginationConfig`] and renders the
//! previous / page-number / next controls. Disabled and active flags are
//! derived from the current page on every render, so a render taken right
//! after a click always reflects it.

pub mod control;

pub use control::{Control, ControlKind};

use crate::config::PaginationConfig;

/// Pagination component state
#[derive(Clone, Debug)]
pub struct Pagination {
    config: PaginationConfig,
    /// 1-based; stays within `1..=max(page_count, 1)`
    current_page: usize,
}

impl Pagination {
    pub fn new(config: PaginationConfig) -> Self {
        tracing::debug!(
            total_items = config.total_items(),
            items_per_page = config.items_per_page().get(),
            page_count = config.page_count(),
            "mounted pagination"
        );
        Self {
            config,
            current_page: 1,
        }
    }

    pub fn config(&self) -> &PaginationConfig {
        &self.config
    }

    /// Replace the configuration, clamping the current page if the page
    /// count shrank.
    pub fn configure(&mut self, config: PaginationConfig) {
        self.config = config;
        let last = self.page_count().max(1);
        if self.current_page > last {
            tracing::debug!(
                from = self.current_page,
                to = last,
                "current page clamped after reconfigure"
            );
            self.current_page = last;
        }
    }

    pub fn page_count(&self) -> usize {
        self.config.page_count()
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn is_previous_disabled(&self) -> bool {
        self.current_page == 1
    }

    pub fn is_next_disabled(&self) -> bool {
        let pages = self.page_count();
        pages == 0 || self.current_page == pages
    }

    /// Move to the previous page. Returns false at the first page.
    pub fn previous(&mut self) -> bool {
        if self.is_previous_disabled() {
            return false;
        }
        self.current_page -= 1;
        true
    }

    /// Move to the next page. Returns false at the last page.
    pub fn next(&mut self) -> bool {
        if self.is_next_disabled() {
            return false;
        }
        self.current_page += 1;
        true
    }

    /// Jump straight to `page`. Out-of-range pages are ignored.
    ///
    /// Returns whether the current page changed.
    pub fn go_to(&mut self, page: usize) -> bool {
        if page == 0 || page > self.page_count() {
            tracing::debug!(page, page_count = self.page_count(), "ignored out-of-range page");
            return false;
        }
        let changed = self.current_page != page;
        self.current_page = page;
        changed
    }

    /// Dispatch a click on the given control.
    pub fn click(&mut self, target: ControlKind) -> bool {
        let changed = match target {
            ControlKind::Previous => self.previous(),
            ControlKind::Next => self.next(),
            ControlKind::Page(n) => self.go_to(n),
        };
        tracing::debug!(?target, changed, current_page = self.current_page, "click");
        changed
    }

    /// Render the control list: previous, one control per page, next.
    pub fn render(&self) -> Vec<Control> {
        let pages = self.page_count();
        let test_id = self.config.page_number_test_id();

        let mut controls = Vec::with_capacity(pages + 2);
        controls.push(Control::navigation(
            ControlKind::Previous,
            self.is_previous_disabled(),
        ));
        controls.extend(
            (1..=pages).map(|page| Control::page(page, page == self.current_page, test_id)),
        );
        controls.push(Control::navigation(
            ControlKind::Next,
            self.is_next_disabled(),
        ));
        controls
    }
}

#[cfg(test)]
#[path = "pagination_tests.rs"]
mod tests;
