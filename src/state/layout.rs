//! Viewport-driven input sizing.
//!
//! Re-applied on load and on every `resize`; nothing is remembered between
//! calls except the last width seen.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

pub const DEFAULT_SMALL_WIDTH_THRESHOLD: f64 = 720.0;

/// Bootstrap sizing class applied to every input and select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InputSize {
    Small,
    #[default]
    Large,
}

impl InputSize {
    pub const ALL: [Self; 2] = [Self::Small, Self::Large];

    pub fn class(self) -> &'static str {
        match self {
            Self::Small => "form-control-sm",
            Self::Large => "form-control-lg",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutState {
    pub viewport_width: Option<f64>,
    pub size: InputSize,
    pub threshold: f64,
}

impl Default for LayoutState {
    fn default() -> Self {
        Self::new(DEFAULT_SMALL_WIDTH_THRESHOLD)
    }
}

impl LayoutState {
    pub fn new(threshold: f64) -> Self {
        Self { viewport_width: None, size: InputSize::default(), threshold }
    }

    /// Reclassify for `viewport_width`: below the threshold is small, at or
    /// above is large.
    pub fn apply(&mut self, viewport_width: f64) {
        self.viewport_width = Some(viewport_width);
        self.size = if viewport_width < self.threshold { InputSize::Small } else { InputSize::Large };
    }
}

/// Replace any sizing class in `classes` with `size`'s class.
pub fn with_size_class(classes: &str, size: InputSize) -> String {
    let mut out = classes
        .split_whitespace()
        .filter(|class| !InputSize::ALL.iter().any(|s| s.class() == *class))
        .collect::<Vec<_>>();
    out.push(size.class());
    out.join(" ")
}
