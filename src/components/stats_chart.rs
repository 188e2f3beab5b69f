//! Chart.js-backed statistics chart.
//!
//! ARCHITECTURE
//! ============
//! The component renders a `<canvas>` carrying its series as `data-labels` /
//! `data-data` attributes, then, once mounted, `render_chart` reads those
//! attributes back and hands a declarative config to the global `Chart`
//! constructor. Charts are drawn once; there is no update path.

#[cfg(test)]
#[path = "stats_chart_test.rs"]
mod stats_chart_test;

use leptos::prelude::*;

use crate::util::chart::{
    ChartConfig, ChartError, ChartKind, ChartSeries, DATA_ATTR, LABELS_ATTR, join_attr_list,
};
use crate::util::dom;

#[cfg(feature = "csr")]
mod bindings {
    use wasm_bindgen::prelude::*;

    #[wasm_bindgen]
    extern "C" {
        /// Global `Chart` from Chart.js, loaded by the hosting page.
        #[wasm_bindgen(js_name = Chart)]
        pub type ChartJs;

        #[wasm_bindgen(constructor, js_class = "Chart", catch)]
        pub fn new(element: &web_sys::Element, config: &JsValue) -> Result<ChartJs, JsValue>;
    }
}

/// Draw the chart that belongs to `container_id`. The container id decides
/// the chart kind.
pub fn render_chart(container_id: &str) -> Result<(), ChartError> {
    let kind = ChartKind::from_container_id(container_id)
        .ok_or_else(|| ChartError::UnknownContainer(container_id.to_owned()))?;
    if !dom::element_exists(container_id) {
        return Err(ChartError::MissingElement(container_id.to_owned()));
    }
    let read = |attr: &'static str| {
        dom::element_attribute(container_id, attr)
            .ok_or_else(|| ChartError::MissingAttribute { id: container_id.to_owned(), attr })
    };
    let series = ChartSeries::from_attributes(&read(LABELS_ATTR)?, &read(DATA_ATTR)?);
    let config = ChartConfig::new(kind, series).to_json()?;

    #[cfg(feature = "csr")]
    {
        let element = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(container_id))
            .ok_or_else(|| ChartError::MissingElement(container_id.to_owned()))?;
        let config = js_sys::JSON::parse(&config).map_err(|e| ChartError::Library(format!("{e:?}")))?;
        bindings::ChartJs::new(&element, &config).map_err(|e| ChartError::Library(format!("{e:?}")))?;
        log::debug!("rendered {container_id}");
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = config;
    }
    Ok(())
}

#[component]
pub fn StatsChart(kind: ChartKind, series: ChartSeries) -> impl IntoView {
    let labels = join_attr_list(&series.labels);
    let data = join_attr_list(&series.data);

    #[cfg(feature = "csr")]
    Effect::new(move || {
        if let Err(e) = render_chart(kind.container_id()) {
            log::error!("chart {} failed: {e}", kind.container_id());
        }
    });

    view! {
        <div class="card shadow-sm p-3 mb-4">
            <h5 class="card-title">{kind.dataset_label()}</h5>
            <canvas id=kind.container_id() data-labels=labels data-data=data></canvas>
        </div>
    }
}
