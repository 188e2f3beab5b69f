//! Statistics page with the submissions and first-visit charts.

use leptos::prelude::*;
use leptos_meta::Title;

use crate::components::stats_chart::StatsChart;
use crate::config::FormConfig;
use crate::util::chart::ChartKind;

#[component]
pub fn MonitorPage() -> impl IntoView {
    let config = expect_context::<FormConfig>();

    view! {
        <Title text="إحصائيات الاستمارات"/>
        <div class="container py-4" dir="rtl">
            <h1 class="h3 mb-4">"إحصائيات"</h1>
            <div class="row">
                <div class="col-md-6">
                    <StatsChart kind=ChartKind::Submissions series=config.series(ChartKind::Submissions)/>
                </div>
                <div class="col-md-6">
                    <StatsChart kind=ChartKind::FirstVisits series=config.series(ChartKind::FirstVisits)/>
                </div>
            </div>
        </div>
    }
}
