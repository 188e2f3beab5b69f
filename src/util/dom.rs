//! Direct DOM access for the few things that are not reactive views.
//!
//! Reads viewport width, element attributes and the bootstrap config script,
//! and toggles the page-level posting overlay. Requires a browser
//! environment; without the `csr` feature every call is an inert fallback.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const SCREEN_ID: &str = "screen";
pub const POSTING_CLASS: &str = "posting";
pub const BLUR_CLASS: &str = "blur";

#[cfg(feature = "csr")]
fn document() -> Option<web_sys::Document> {
    web_sys::window().and_then(|w| w.document())
}

/// Current viewport width in CSS pixels.
pub fn viewport_width() -> Option<f64> {
    #[cfg(feature = "csr")]
    {
        let window = web_sys::window()?;
        if let Some(width) = window.inner_width().ok().and_then(|v| v.as_f64()) {
            return Some(width);
        }
        let root = window.document()?.document_element()?;
        Some(f64::from(root.client_width()))
    }
    #[cfg(not(feature = "csr"))]
    {
        None
    }
}

/// Whether an element with `id` is present.
pub fn element_exists(id: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        document().and_then(|d| d.get_element_by_id(id)).is_some()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        false
    }
}

/// Attribute `attr` of the element with `id`, if both exist.
pub fn element_attribute(id: &str, attr: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        document()?.get_element_by_id(id)?.get_attribute(attr)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (id, attr);
        None
    }
}

/// Text content of the element with `id`, e.g. a JSON `<script>` block.
pub fn element_text(id: &str) -> Option<String> {
    #[cfg(feature = "csr")]
    {
        document()?.get_element_by_id(id)?.text_content()
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        None
    }
}

/// Bring the element with `id` into view.
pub fn scroll_into_view(id: &str) {
    #[cfg(feature = "csr")]
    {
        if let Some(el) = document().and_then(|d| d.get_element_by_id(id)) {
            el.scroll_into_view();
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
    }
}

/// Show the posting overlay: `posting` on `<body>`, the loading screen
/// displayed and the page content blurred.
pub fn show_posting_overlay() {
    #[cfg(feature = "csr")]
    {
        let Some(doc) = document() else {
            return;
        };
        if let Some(body) = doc.body() {
            let _ = body.class_list().add_1(POSTING_CLASS);
        }
        if let Some(loading) = doc.get_element_by_id(LOADING_SCREEN_ID) {
            let _ = loading.set_attribute("style", "display: block;");
        }
        if let Some(screen) = doc.get_element_by_id(SCREEN_ID) {
            let _ = screen.class_list().add_1(BLUR_CLASS);
        }
    }
}
