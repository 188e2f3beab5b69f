//! Child / partner sub-form with add and remove buttons.
//!
//! All `max` sections are rendered up front and shown or hidden from the
//! group counter. Hidden sections are disabled so they do not post.

#[cfg(test)]
#[path = "repeating_group_test.rs"]
mod repeating_group_test;

use leptos::prelude::*;

use crate::components::form_field::BASE_CLASSES;
use crate::state::groups::{GroupKind, RepeatingGroupState, RepeatingGroups};
use crate::state::layout::{LayoutState, with_size_class};
use crate::util::family::{FamilyError, FamilyRow, age_input, name_input};

const NAME_PLACEHOLDER: &str = "الاسم";
const AGE_PLACEHOLDER: &str = "العمر";
const ADD_LABEL: &str = "إضافة";
const REMOVE_LABEL: &str = "حذف";

/// Value for `style:display`.
pub(crate) fn display(visible: bool) -> &'static str {
    if visible { "" } else { "none" }
}

/// Rows belonging to the currently visible sections.
pub(crate) fn visible_rows<'a>(rows: &'a [FamilyRow], group: &RepeatingGroupState) -> &'a [FamilyRow] {
    &rows[..group.count().min(rows.len())]
}

/// Error message for the row at `index`, if any.
pub(crate) fn row_error(errors: &[FamilyError], index: usize) -> Option<String> {
    errors.iter().find(|e| e.index() == index).map(ToString::to_string)
}

#[component]
pub fn RepeatingGroup(kind: GroupKind, rows: RwSignal<Vec<FamilyRow>>, errors: RwSignal<Vec<FamilyError>>) -> impl IntoView {
    let groups = expect_context::<RwSignal<RepeatingGroups>>();
    let layout = expect_context::<RwSignal<LayoutState>>();
    let max = groups.with_untracked(|g| g.get(kind).max());

    let input_class = move || with_size_class(BASE_CLASSES, layout.with(|l| l.size));

    let sections = (0..max)
        .map(|index| {
            let visible = move || groups.with(|g| g.get(kind).section_visible(index));
            let age_error = move || errors.with(|errs| row_error(errs, index));
            let age_class = move || match age_error() {
                Some(_) => format!("{} is-invalid", input_class()),
                None => input_class(),
            };
            let name_value = move || rows.with(|r| r.get(index).map(|row| row.name.clone()).unwrap_or_default());
            let age_value = move || rows.with(|r| r.get(index).map(|row| row.age.clone()).unwrap_or_default());

            view! {
                <div id=kind.section_id(index) class="row g-2 mb-2" style:display=move || display(visible())>
                    <div class="col-8">
                        <input
                            type="text"
                            id=name_input(kind, index)
                            name=name_input(kind, index)
                            placeholder=NAME_PLACEHOLDER
                            class=input_class
                            prop:disabled=move || !visible()
                            prop:value=name_value
                            on:input=move |ev| {
                                let name = event_target_value(&ev);
                                rows.update(|r| {
                                    if let Some(row) = r.get_mut(index) {
                                        row.name = name;
                                    }
                                });
                            }
                        />
                    </div>
                    <div class="col-4">
                        <input
                            type="number"
                            min="0"
                            id=age_input(kind, index)
                            name=age_input(kind, index)
                            placeholder=AGE_PLACEHOLDER
                            class=age_class
                            prop:disabled=move || !visible()
                            prop:value=age_value
                            on:input=move |ev| {
                                let age = event_target_value(&ev);
                                rows.update(|r| {
                                    if let Some(row) = r.get_mut(index) {
                                        row.age = age;
                                    }
                                });
                            }
                        />
                        <div class="invalid-feedback">{age_error}</div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <fieldset class="mb-4">
            <legend>{kind.title()}</legend>
            {sections}
            <div class="d-flex gap-2">
                <button
                    type="button"
                    id=kind.add_button_id()
                    class="btn btn-outline-primary btn-sm"
                    style:display=move || display(groups.with(|g| g.get(kind).add_visible()))
                    on:click=move |_| {
                        groups.update(|g| {
                            g.add(kind);
                        });
                    }
                >
                    {ADD_LABEL}
                </button>
                <button
                    type="button"
                    id=kind.remove_button_id()
                    class="btn btn-outline-danger btn-sm"
                    style:display=move || display(groups.with(|g| g.get(kind).remove_visible()))
                    on:click=move |_| {
                        groups.update(|g| {
                            g.remove(kind);
                        });
                        // Errors on a hidden row no longer apply.
                        let count = groups.with_untracked(|g| g.get(kind).count());
                        errors.update(|errs| errs.retain(|e| e.index() < count));
                    }
                >
                    {REMOVE_LABEL}
                </button>
            </div>
        </fieldset>
    }
}
