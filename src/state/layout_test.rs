use super::*;

const BASE: &str = "form-control shadow-sm rounded";

#[test]
fn default_is_large_with_standard_threshold() {
    let layout = LayoutState::default();
    assert_eq!(layout.size, InputSize::Large);
    assert_eq!(layout.threshold, 720.0);
    assert_eq!(layout.viewport_width, None);
}

#[test]
fn narrow_viewport_is_small() {
    let mut layout = LayoutState::default();
    layout.apply(500.0);
    assert_eq!(layout.size, InputSize::Small);
    assert_eq!(layout.viewport_width, Some(500.0));
}

#[test]
fn threshold_itself_is_large() {
    let mut layout = LayoutState::default();
    layout.apply(720.0);
    assert_eq!(layout.size, InputSize::Large);
    layout.apply(719.9);
    assert_eq!(layout.size, InputSize::Small);
}

#[test]
fn wide_after_narrow_leaves_no_small_class() {
    let mut layout = LayoutState::default();
    layout.apply(500.0);
    let small = with_size_class(BASE, layout.size);
    assert!(small.split_whitespace().any(|c| c == "form-control-sm"));

    layout.apply(1024.0);
    let large = with_size_class(&small, layout.size);
    assert!(large.split_whitespace().any(|c| c == "form-control-lg"));
    assert!(!large.split_whitespace().any(|c| c == "form-control-sm"));
}

#[test]
fn with_size_class_keeps_other_classes_and_one_size() {
    let classes = with_size_class("form-control form-control-lg form-control-sm is-valid", InputSize::Small);
    assert_eq!(classes, "form-control is-valid form-control-sm");
}

#[test]
fn custom_threshold_is_honored() {
    let mut layout = LayoutState::new(1000.0);
    layout.apply(800.0);
    assert_eq!(layout.size, InputSize::Small);
}
