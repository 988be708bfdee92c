// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interactive full-screen pagination view.
//!
//! [`PaginationAppState`] owns the component behind a mutex shared with the
//! iocraft event hook. Each key event is applied under the lock and bumps a
//! render counter, so the next frame already shows the new page.

use iocraft::prelude::*;
use parking_lot::Mutex;
use std::sync::Arc;

use super::keys::{key_action, KeyAction};
use super::render::render_pagination;
use crate::pagination::{Control, ControlKind, Pagination};

/// Fallback width when the terminal size cannot be read
const DEFAULT_TERMINAL_WIDTH: u16 = 80;

/// Shared state for the interactive view
#[derive(Clone)]
pub struct PaginationAppState {
    inner: Arc<Mutex<PaginationAppStateInner>>,
}

struct PaginationAppStateInner {
    pagination: Pagination,
    terminal_width: u16,
    should_exit: bool,
}

/// Everything a frame needs, copied out of the lock
#[derive(Clone, Debug)]
pub struct RenderState {
    pub controls: Vec<Control>,
    pub current_page: usize,
    pub page_count: usize,
    pub terminal_width: u16,
}

impl PaginationAppState {
    pub fn new(pagination: Pagination, terminal_width: u16) -> Self {
        Self {
            inner: Arc::new(Mutex::new(PaginationAppStateInner {
                pagination,
                terminal_width,
                should_exit: false,
            })),
        }
    }

    pub fn handle_key_event(&self, key: &KeyEvent) {
        if let Some(action) = key_action(key) {
            self.apply(action);
        }
    }

    /// Apply an action. Returns whether the current page changed.
    pub fn apply(&self, action: KeyAction) -> bool {
        let mut inner = self.inner.lock();
        match action {
            KeyAction::Click(target) => inner.pagination.click(target),
            KeyAction::First => inner.pagination.click(ControlKind::Page(1)),
            KeyAction::Last => {
                let last = inner.pagination.page_count();
                inner.pagination.click(ControlKind::Page(last))
            }
            KeyAction::Quit => {
                inner.should_exit = true;
                false
            }
        }
    }

    pub fn should_exit(&self) -> bool {
        self.inner.lock().should_exit
    }

    pub fn set_terminal_width(&self, width: u16) {
        self.inner.lock().terminal_width = width;
    }

    pub fn current_page(&self) -> usize {
        self.inner.lock().pagination.current_page()
    }

    pub fn render_state(&self) -> RenderState {
        let inner = self.inner.lock();
        RenderState {
            controls: inner.pagination.render(),
            current_page: inner.pagination.current_page(),
            page_count: inner.pagination.page_count(),
            terminal_width: inner.terminal_width,
        }
    }
}

/// Props for the pagination view component
#[derive(Default, Props)]
pub struct PaginationViewProps {
    pub state: Option<PaginationAppState>,
}

/// Pagination view component using iocraft
#[component]
pub fn PaginationView(
    mut hooks: Hooks,
    props: &PaginationViewProps,
) -> impl Into<AnyElement<'static>> {
    let Some(state) = props.state.clone() else {
        return element! {
            View(flex_direction: FlexDirection::Column) {
                Text(content: "Error: PaginationAppState must be provided via props")
            }
        };
    };

    // Render counter to force re-renders when state changes
    let mut render_counter = hooks.use_state(|| 0u64);

    hooks.use_terminal_events({
        let state = state.clone();
        move |event| match event {
            TerminalEvent::Key(key) if key.kind != KeyEventKind::Release => {
                state.handle_key_event(&key);
                let current = *render_counter.read();
                render_counter.set(current.wrapping_add(1));
            }
            TerminalEvent::Resize(width, _height) => {
                state.set_terminal_width(width);
                let current = *render_counter.read();
                render_counter.set(current.wrapping_add(1));
            }
            _ => {}
        }
    });

    if state.should_exit() {
        hooks.use_context_mut::<SystemContext>().exit();
    }

    let view = state.render_state();

    element! {
        View(
            flex_direction: FlexDirection::Column,
            width: 100pct,
        ) {
            #(render_pagination(
                &view.controls,
                view.current_page,
                view.page_count,
                view.terminal_width as usize,
            ))
        }
    }
}

/// Interactive pagination app
pub struct PaginationApp {
    state: PaginationAppState,
}

impl PaginationApp {
    pub fn new(pagination: Pagination) -> Self {
        let width = crossterm::terminal::size()
            .map(|(w, _)| w)
            .unwrap_or(DEFAULT_TERMINAL_WIDTH);
        Self {
            state: PaginationAppState::new(pagination, width),
        }
    }

    pub fn state(&self) -> &PaginationAppState {
        &self.state
    }

    /// Run until the user quits. Returns the page that was current on exit.
    pub fn run(&mut self) -> std::io::Result<usize> {
        let state = self.state.clone();

        if tokio::runtime::Handle::try_current().is_ok() {
            // Already in a runtime - use block_in_place to run async code
            tokio::task::block_in_place(|| {
                tokio::runtime::Handle::current().block_on(async {
                    // ignore_ctrl_c() leaves Ctrl+C to the key bindings
                    element!(PaginationView(state: Some(state.clone())))
                        .fullscreen()
                        .ignore_ctrl_c()
                        .await
                })
            })?;
        } else {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(async {
                element!(PaginationView(state: Some(state.clone())))
                    .fullscreen()
                    .ignore_ctrl_c()
                    .await
            })?;
        }

        let page = self.state.current_page();
        tracing::debug!(page, "interactive session ended");
        Ok(page)
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
