// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rendered pagination controls.
//!
//! A [`Control`] is a snapshot produced by a render pass. It has no identity
//! beyond its [`ControlKind`], which is also what a click targets.

use serde::Serialize;

/// Label of the previous-page control
pub const PREVIOUS_LABEL: &str = "previous";
/// Label of the next-page control
pub const NEXT_LABEL: &str = "next";

/// Class carried by a navigation control that cannot move
pub const DISABLED_CLASS: &str = "disabled";
/// Class carried by the page-number control of the current page
pub const ACTIVE_CLASS: &str = "active";

/// Which control was rendered (and which one a click targets)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum ControlKind {
    Previous,
    /// Page-number control, 1-based
    Page(usize),
    Next,
}

impl ControlKind {
    /// Text shown on the control
    pub fn label(&self) -> String {
        match self {
            ControlKind::Previous => PREVIOUS_LABEL.to_string(),
            ControlKind::Page(n) => n.to_string(),
            ControlKind::Next => NEXT_LABEL.to_string(),
        }
    }

    pub fn is_navigation(&self) -> bool {
        !matches!(self, ControlKind::Page(_))
    }
}

/// One rendered control
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Control {
    #[serde(flatten)]
    pub kind: ControlKind,
    pub label: String,
    pub disabled: bool,
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_id: Option<String>,
}

impl Control {
    pub(crate) fn navigation(kind: ControlKind, disabled: bool) -> Self {
        Self {
            label: kind.label(),
            kind,
            disabled,
            active: false,
            test_id: None,
        }
    }

    pub(crate) fn page(number: usize, active: bool, test_id: Option<&str>) -> Self {
        let kind = ControlKind::Page(number);
        Self {
            label: kind.label(),
            kind,
            disabled: false,
            active,
            test_id: test_id.map(str::to_string),
        }
    }

    /// Page number for page-number controls
    pub fn page_number(&self) -> Option<usize> {
        match self.kind {
            ControlKind::Page(n) => Some(n),
            _ => None,
        }
    }

    /// Class names mirroring the state flags
    pub fn classes(&self) -> Vec<&'static str> {
        let mut classes = Vec::new();
        if self.disabled {
            classes.push(DISABLED_CLASS);
        }
        if self.active {
            classes.push(ACTIVE_CLASS);
        }
        classes
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes().contains(&class)
    }
}
