//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::FormConfig;
use crate::pages::{member_form::MemberFormPage, monitor::MonitorPage};
use crate::state::submission::SubmissionState;
use crate::state::validation::FormValues;

/// Root application component.
///
/// Provides the page configuration and all shared form state as contexts and
/// sets up client-side routing.
#[component]
pub fn App(config: FormConfig) -> impl IntoView {
    provide_meta_context();

    let validator = RwSignal::new(config.validator());
    let layout = RwSignal::new(config.layout());
    let groups = RwSignal::new(config.groups());
    let values = RwSignal::new(FormValues::default());
    let submission = RwSignal::new(SubmissionState::default());

    provide_context(config);
    provide_context(validator);
    provide_context(layout);
    provide_context(groups);
    provide_context(values);
    provide_context(submission);

    view! {
        <Title text="استمارة العضوية"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=MemberFormPage/>
                <Route path=StaticSegment("monitor") view=MonitorPage/>
            </Routes>
        </Router>
    }
}
