// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyboard bindings for the interactive pagination view.

use iocraft::prelude::{KeyCode, KeyEvent, KeyModifiers};

use crate::pagination::ControlKind;

/// What a key press asks the view to do
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyAction {
    /// Click a control
    Click(ControlKind),
    /// Jump to the first page
    First,
    /// Jump to the last page
    Last,
    Quit,
}

/// Map a key event to an action, if it is bound.
pub fn key_action(key: &KeyEvent) -> Option<KeyAction> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('d') => Some(KeyAction::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::PageUp => {
            Some(KeyAction::Click(ControlKind::Previous))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::PageDown => {
            Some(KeyAction::Click(ControlKind::Next))
        }
        KeyCode::Home => Some(KeyAction::First),
        KeyCode::End => Some(KeyAction::Last),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|d| KeyAction::Click(ControlKind::Page(d as usize))),
        KeyCode::Char('q') | KeyCode::Esc => Some(KeyAction::Quit),
        _ => None,
    }
}

#[cfg(test)]
#[path = "keys_tests.rs"]
mod tests;
