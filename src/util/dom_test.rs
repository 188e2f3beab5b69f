#![cfg(not(feature = "csr"))]

use super::*;

#[test]
fn reads_are_empty_outside_the_browser() {
    assert_eq!(viewport_width(), None);
    assert!(!element_exists("member-forms-chart"));
    assert_eq!(element_attribute("member-forms-chart", "data-labels"), None);
    assert_eq!(element_text("member-form-config"), None);
}

#[test]
fn writes_are_noops_but_callable() {
    scroll_into_view("id_name_ar");
    show_posting_overlay();
}
