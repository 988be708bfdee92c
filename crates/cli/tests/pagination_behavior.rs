// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

//! Behavior of the pagination control as seen through the screen harness.
//!
//! Nine items are paginated; controls are located by their text
//! ("previous", "next") and by the page-number identification tag.

mod common;

use common::{render_page_numbers, PAGE_NUMBER_TEST_ID};
use pagenation::pagination::control::{ACTIVE_CLASS, DISABLED_CLASS};

#[test]
fn renders_page_numbers_and_navigation_state() {
    let (screen, prev_btn, next_btn) = render_page_numbers(3);

    let page_numbers = screen.get_all_by_test_id(PAGE_NUMBER_TEST_ID).unwrap();
    assert_eq!(page_numbers.len(), 3);
    for (index, page_number) in page_numbers.iter().enumerate() {
        assert_eq!(
            screen.text_content(*page_number),
            Some(format!("{}", index + 1))
        );
    }

    assert!(screen.has_class(prev_btn, DISABLED_CLASS));
    assert!(!screen.has_class(next_btn, DISABLED_CLASS));
    assert!(screen.has_class(page_numbers[0], ACTIVE_CLASS));
}

#[test]
fn cannot_go_back_from_first_page() {
    let (mut screen, prev_btn, _) = render_page_numbers(2);
    assert_eq!(screen.pagination().page_count(), 5);

    screen.click(prev_btn);

    assert_eq!(screen.pagination().current_page(), 1);
    assert!(screen.has_class(prev_btn, DISABLED_CLASS));
}

#[test]
fn middle_page_enables_both_directions() {
    let (mut screen, prev_btn, next_btn) = render_page_numbers(3);

    screen.click(next_btn);

    assert_eq!(screen.pagination().current_page(), 2);
    assert!(!screen.has_class(prev_btn, DISABLED_CLASS));
    assert!(!screen.has_class(next_btn, DISABLED_CLASS));
}

#[test]
fn cannot_go_past_last_page() {
    let (mut screen, _, next_btn) = render_page_numbers(3);

    screen.click(next_btn);
    assert!(!screen.has_class(next_btn, DISABLED_CLASS));

    screen.click(next_btn);
    assert_eq!(screen.pagination().current_page(), 3);
    assert!(screen.has_class(next_btn, DISABLED_CLASS));

    assert!(!screen.click(next_btn));
    assert!(!screen.click(next_btn));
    assert_eq!(screen.pagination().current_page(), 3);
    assert!(screen.has_class(next_btn, DISABLED_CLASS));
}

#[test]
fn clicking_page_number_moves_to_that_page() {
    let (mut screen, _, _) = render_page_numbers(3);
    let page_numbers = screen.get_all_by_test_id(PAGE_NUMBER_TEST_ID).unwrap();

    screen.click(page_numbers[1]);

    assert!(screen.has_class(page_numbers[1], ACTIVE_CLASS));
    assert!(!screen.has_class(page_numbers[0], ACTIVE_CLASS));
    assert_eq!(screen.pagination().current_page(), 2);
}

#[test]
fn clicking_distant_page_jumps_directly() {
    let (mut screen, prev_btn, next_btn) = render_page_numbers(2);
    let page_numbers = screen.get_all_by_test_id(PAGE_NUMBER_TEST_ID).unwrap();

    screen.click(page_numbers[4]);
    assert_eq!(screen.pagination().current_page(), 5);
    assert!(screen.has_class(next_btn, DISABLED_CLASS));

    screen.click(page_numbers[0]);
    assert_eq!(screen.pagination().current_page(), 1);
    assert!(screen.has_class(prev_btn, DISABLED_CLASS));
}

#[test]
fn exactly_one_page_is_active_after_each_click() {
    let (mut screen, prev_btn, next_btn) = render_page_numbers(2);
    let page_numbers = screen.get_all_by_test_id(PAGE_NUMBER_TEST_ID).unwrap();

    let clicks = [next_btn, next_btn, page_numbers[4], prev_btn, page_numbers[0], prev_btn];
    for click in clicks {
        screen.click(click);
        let active: Vec<_> = page_numbers
            .iter()
            .filter(|p| screen.has_class(**p, ACTIVE_CLASS))
            .collect();
        assert_eq!(active.len(), 1, "controls: {}", screen.text());
    }
}
