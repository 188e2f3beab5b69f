//! One labelled form control with inline feedback.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the field's value, status and the current input size from context.
//! Blur runs the field's validation; every failed validation bumps the
//! field's shake sequence, which this component replays as a short
//! horizontal shake.

#[cfg(test)]
#[path = "form_field_test.rs"]
mod form_field_test;

use leptos::prelude::*;
use leptos::tachys::view::any_view::IntoAny;

use crate::config::FormConfig;
use crate::state::layout::{InputSize, LayoutState, with_size_class};
use crate::state::validation::{FieldStatus, FieldValidator, FormValues};
use crate::util::age;
use crate::util::fields::{FieldId, InputKind};
use crate::util::shake::offset_style;

/// Classes every control carries before sizing and status.
pub const BASE_CLASSES: &str = "form-control shadow-sm rounded";
const SELECT_PROMPT: &str = "اختر...";
const IMAGE_ACCEPT: &str = "image/png, image/jpeg";

/// Full class list for a control of `size` in `status`.
pub(crate) fn control_class(size: InputSize, status: &FieldStatus) -> String {
    let classes = with_size_class(BASE_CLASSES, size);
    match status.class() {
        Some(status_class) => format!("{classes} {status_class}"),
        None => classes,
    }
}

/// `(value, label)` options for a select field. Cities post their own name.
pub(crate) fn field_options(field: FieldId, cities: &[String]) -> Vec<(String, String)> {
    if field == FieldId::City {
        return cities.iter().map(|city| (city.clone(), city.clone())).collect();
    }
    field
        .choices()
        .iter()
        .map(|(value, label)| ((*value).to_owned(), (*label).to_owned()))
        .collect()
}

#[component]
pub fn FormField(field: FieldId) -> impl IntoView {
    let config = expect_context::<FormConfig>();
    let values = expect_context::<RwSignal<FormValues>>();
    let validator = expect_context::<RwSignal<FieldValidator>>();
    let layout = expect_context::<RwSignal<LayoutState>>();
    let offset = RwSignal::new(0.0_f64);

    #[cfg(feature = "csr")]
    replay_shake(field, validator, offset, config.shake);

    let class = move || control_class(layout.with(|l| l.size), &validator.with(|v| v.status(field)));
    let style = move || offset_style(offset.get());
    let message = move || validator.with(|v| v.status(field).message());
    let value = move || values.with(|v| v.get(field).to_owned());
    let on_blur = move |_: leptos::ev::FocusEvent| {
        let current = values.with_untracked(|v| v.get(field).to_owned());
        validator.update(|v| {
            v.validate_field(field, &current, age::today());
        });
    };

    let id = field.dom_id();
    let control = match field.kind() {
        InputKind::Select => {
            let options = field_options(field, &config.cities);
            view! {
                <select
                    id=id.clone()
                    name=field.name()
                    class=class
                    style=style
                    prop:value=value
                    on:change=move |ev| values.update(|v| v.set(field, event_target_value(&ev)))
                    on:blur=on_blur
                >
                    <option value="">{SELECT_PROMPT}</option>
                    {options
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value>{label}</option> })
                        .collect_view()}
                </select>
            }
            .into_any()
        }
        // The browser owns a file input's value; only mirror it out.
        InputKind::File => view! {
            <input
                id=id.clone()
                name=field.name()
                type="file"
                accept=IMAGE_ACCEPT
                class=class
                style=style
                on:change=move |ev| values.update(|v| v.set(field, event_target_value(&ev)))
                on:blur=on_blur
            />
        }
        .into_any(),
        kind => view! {
            <input
                id=id.clone()
                name=field.name()
                type=kind.html_type()
                placeholder=field.placeholder()
                class=class
                style=style
                prop:value=value
                on:input=move |ev| values.update(|v| v.set(field, event_target_value(&ev)))
                on:blur=on_blur
            />
        }
        .into_any(),
    };

    view! {
        <div class="mb-3">
            <label for=id class="form-label">{field.label()}</label>
            {control}
            <div class="invalid-feedback">{message}</div>
        </div>
    }
}

/// Replay the shake schedule each time `field` fails validation. Frames are
/// tagged with the sequence number that started them and dropped once a
/// newer shake takes over.
#[cfg(feature = "csr")]
fn replay_shake(
    field: FieldId,
    validator: RwSignal<FieldValidator>,
    offset: RwSignal<f64>,
    settings: crate::util::shake::ShakeSettings,
) {
    use gloo_timers::callback::Timeout;

    use crate::util::shake::shake_schedule;

    let seen = StoredValue::new(validator.with_untracked(|v| v.shake_seq(field)));
    Effect::new(move || {
        let seq = validator.with(|v| v.shake_seq(field));
        if seq == seen.get_value() {
            return;
        }
        seen.set_value(seq);
        for frame in shake_schedule(&settings) {
            Timeout::new(frame.at_ms, move || {
                if validator.try_with_untracked(|v| v.shake_seq(field)) == Some(seq) {
                    let _ = offset.try_set(frame.offset_px);
                }
            })
            .forget();
        }
    });
}
