//! Analysis result panel
//!
//! Renders nothing at all until a report exists; after that it stays on
//! screen through failed retries until the next successful analysis.

use leptos::prelude::*;

use freshscan_common::layout::format_percent;
use freshscan_common::{AnalyzerState, ReportView};

#[component]
pub fn ResultPanel(state: RwSignal<AnalyzerState>) -> impl IntoView {
    move || {
        state.with(|s| s.report.as_ref().map(ReportView::from_report)).map(|view| {
            view! {
                <div class="result-panel">
                    <h2 class=format!("status {}", view.tier.class_name())>
                        {view.headline.clone()}
                    </h2>

                    <div class="detail-rows">
                        {view
                            .rows
                            .iter()
                            .map(|row| {
                                view! {
                                    <p class="detail-row">
                                        <span class="detail-label">{row.label}": "</span>
                                        {row.value.clone()}
                                    </p>
                                }
                            })
                            .collect_view()}
                    </div>

                    <div class="predictions">
                        {view
                            .bars
                            .iter()
                            .map(|bar| {
                                view! {
                                    <div class="prediction">
                                        <span class="prediction-label">{bar.label.clone()}</span>
                                        <div class="bar-track">
                                            <div
                                                class=format!("bar-fill {}", bar.tier.class_name())
                                                style=format!("width: {}%", bar.width)
                                            ></div>
                                        </div>
                                        <span class="prediction-value">
                                            {format_percent(bar.percent)}"%"
                                        </span>
                                    </div>
                                }
                            })
                            .collect_view()}
                    </div>
                </div>
            }
        })
    }
}
