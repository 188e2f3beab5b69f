//! Membership registration page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the form-level orchestration: input sizing on load and resize, the
//! membership consent controls, and the submit gate. A submit is only let
//! through when every field, every visible family row and the consent check
//! pass; otherwise the native post is cancelled and the first problem is
//! scrolled into view.

#[cfg(test)]
#[path = "member_form_test.rs"]
mod member_form_test;

use chrono::NaiveDate;
use leptos::prelude::*;

use crate::components::form_field::{BASE_CLASSES, FormField};
use crate::components::repeating_group::{RepeatingGroup, visible_rows};
use crate::config::FormConfig;
use crate::state::groups::{GroupKind, RepeatingGroups};
use crate::state::layout::{LayoutState, with_size_class};
use crate::state::submission::{MEMBERSHIP_DECLINED, MEMBERSHIP_REQUESTED, SubmissionState, SubmitError};
use crate::state::validation::{FieldValidator, FormValues};
use crate::util::age;
use crate::util::dom::{self, LOADING_SCREEN_ID, SCREEN_ID};
use crate::util::family::{FamilyError, FamilyRow, age_input, collect_members};
use crate::util::fields::{FieldId, Section};

pub const FORM_ID: &str = "member-form";
pub const MEMBERSHIP_ID: &str = "membership";
pub const AGREE_ID: &str = "agree";
/// Posted value of a checked `agree` box; the receiving server only accepts
/// consent carrying exactly this value.
pub const AGREE_VALUE: &str = "agreed";

/// Outcome of one submit attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct SubmitReport {
    pub fields_ok: bool,
    pub child_errors: Vec<FamilyError>,
    pub partner_errors: Vec<FamilyError>,
    pub consent: Result<(), SubmitError>,
}

impl SubmitReport {
    pub fn is_ok(&self) -> bool {
        self.fields_ok && self.child_errors.is_empty() && self.partner_errors.is_empty() && self.consent.is_ok()
    }

    /// DOM id of the first problem in page order.
    pub fn focus_target(&self, validator: &FieldValidator) -> Option<String> {
        if let Some(field) = validator.first_invalid() {
            return Some(field.dom_id());
        }
        let family = [(GroupKind::Child, &self.child_errors), (GroupKind::Partner, &self.partner_errors)];
        for (kind, errors) in family {
            if let Some(err) = errors.first() {
                return Some(age_input(kind, err.index()));
            }
        }
        self.consent.is_err().then(|| AGREE_ID.to_owned())
    }
}

fn family_errors(rows: &[FamilyRow], groups: &RepeatingGroups, kind: GroupKind) -> Vec<FamilyError> {
    collect_members(visible_rows(rows, groups.get(kind))).err().unwrap_or_default()
}

/// Run every submit-time check. Field annotations are refreshed on
/// `validator` as a side effect.
pub(crate) fn check_submission(
    validator: &mut FieldValidator,
    values: &FormValues,
    groups: &RepeatingGroups,
    child_rows: &[FamilyRow],
    partner_rows: &[FamilyRow],
    submission: &SubmissionState,
    today: NaiveDate,
) -> SubmitReport {
    SubmitReport {
        fields_ok: validator.validate_form(values, today),
        child_errors: family_errors(child_rows, groups, GroupKind::Child),
        partner_errors: family_errors(partner_rows, groups, GroupKind::Partner),
        consent: submission.check_consent(),
    }
}

fn apply_viewport(layout: RwSignal<LayoutState>) {
    if let Some(width) = dom::viewport_width() {
        layout.update(|l| l.apply(width));
    }
}

#[component]
pub fn MemberFormPage() -> impl IntoView {
    let config = expect_context::<FormConfig>();
    let values = expect_context::<RwSignal<FormValues>>();
    let validator = expect_context::<RwSignal<FieldValidator>>();
    let layout = expect_context::<RwSignal<LayoutState>>();
    let groups = expect_context::<RwSignal<RepeatingGroups>>();
    let submission = expect_context::<RwSignal<SubmissionState>>();

    let child_rows = RwSignal::new(vec![FamilyRow::default(); config.child_limit]);
    let partner_rows = RwSignal::new(vec![FamilyRow::default(); config.partner_limit]);
    let child_errors = RwSignal::new(Vec::<FamilyError>::new());
    let partner_errors = RwSignal::new(Vec::<FamilyError>::new());
    let consent_error = RwSignal::new(None::<String>);

    apply_viewport(layout);
    #[cfg(feature = "csr")]
    {
        let resize = window_event_listener(leptos::ev::resize, move |_| apply_viewport(layout));
        on_cleanup(move || resize.remove());
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        if submission.with_untracked(|s| s.posting) {
            ev.prevent_default();
            return;
        }
        let mut checked = validator.get_untracked();
        let report = check_submission(
            &mut checked,
            &values.get_untracked(),
            &groups.get_untracked(),
            &child_rows.get_untracked(),
            &partner_rows.get_untracked(),
            &submission.get_untracked(),
            age::today(),
        );
        let target = report.focus_target(&checked);
        validator.set(checked);
        child_errors.set(report.child_errors.clone());
        partner_errors.set(report.partner_errors.clone());
        consent_error.set(report.consent.as_ref().err().map(ToString::to_string));

        if report.is_ok() {
            log::info!("membership form passed validation, posting");
            submission.update(SubmissionState::begin_posting);
            dom::show_posting_overlay();
            return;
        }
        ev.prevent_default();
        log::debug!("submit blocked, first problem at {target:?}");
        if let Some(target) = target {
            dom::scroll_into_view(&target);
        }
    };

    let select_class = move || with_size_class(BASE_CLASSES, layout.with(|l| l.size));
    let agree_class = move || {
        let base = "form-check-input";
        if consent_error.with(Option::is_some) { format!("{base} is-invalid") } else { base.to_owned() }
    };

    let sections = Section::ALL
        .into_iter()
        .map(|section| {
            let fields = FieldId::in_section(section).map(|field| view! { <FormField field=field/> }).collect_view();
            let family = (section == Section::Family).then(|| {
                view! {
                    <RepeatingGroup kind=GroupKind::Child rows=child_rows errors=child_errors/>
                    <RepeatingGroup kind=GroupKind::Partner rows=partner_rows errors=partner_errors/>
                }
            });
            view! {
                <fieldset class="mb-4">
                    <legend class="h5">{section.title()}</legend>
                    {fields}
                    {family}
                </fieldset>
            }
        })
        .collect_view();

    view! {
        <div id=LOADING_SCREEN_ID class="loading-screen" style="display: none;">
            <div class="spinner-border text-primary" role="status"></div>
        </div>
        <div id=SCREEN_ID class="container py-4" dir="rtl">
            <form
                id=FORM_ID
                method="post"
                enctype="multipart/form-data"
                action=config.submit_action.clone()
                novalidate=true
                on:submit=on_submit
            >
                {sections}
                <fieldset class="mb-4">
                    <legend class="h5">"العضوية"</legend>
                    <div class="mb-3">
                        <label for=MEMBERSHIP_ID class="form-label">"هل ترغب في طلب العضوية؟"</label>
                        <select
                            id=MEMBERSHIP_ID
                            name=MEMBERSHIP_ID
                            class=select_class
                            on:change=move |ev| submission.update(|s| s.set_membership(&event_target_value(&ev)))
                        >
                            <option value=MEMBERSHIP_DECLINED>"لا"</option>
                            <option value=MEMBERSHIP_REQUESTED>"نعم"</option>
                        </select>
                    </div>
                    <div class="form-check mb-3">
                        <input
                            type="checkbox"
                            id=AGREE_ID
                            name=AGREE_ID
                            value=AGREE_VALUE
                            class=agree_class
                            prop:disabled=move || !submission.with(SubmissionState::agree_enabled)
                            prop:checked=move || submission.with(|s| s.agreed)
                            on:change=move |ev| {
                                submission.update(|s| s.set_agreed(event_target_checked(&ev)));
                                consent_error.set(None);
                            }
                        />
                        <label for=AGREE_ID class="form-check-label">"أوافق على شروط العضوية"</label>
                        <div class="invalid-feedback">{move || consent_error.get()}</div>
                    </div>
                </fieldset>
                <button
                    type="submit"
                    class="btn btn-primary w-100"
                    disabled=move || submission.with(|s| s.posting)
                >
                    "إرسال"
                </button>
            </form>
        </div>
    }
}
