//! Analyze trigger and notice area

use leptos::prelude::*;

use freshscan_common::AnalyzerState;

#[component]
pub fn AnalyzeControls<F>(
    state: RwSignal<AnalyzerState>,
    notice: ReadSignal<Option<String>>,
    on_analyze: F,
) -> impl IntoView
where
    F: Fn(()) + 'static + Clone,
{
    view! {
        <div class="analyze-controls">
            <button
                class="btn btn-primary"
                disabled=move || !state.with(|s| s.can_trigger())
                on:click={
                    let on_analyze = on_analyze.clone();
                    move |_| on_analyze(())
                }
            >
                {move || state.with(|s| s.trigger_label())}
            </button>

            <Show when=move || notice.get().is_some()>
                <p class="notice" role="alert">
                    {move || notice.get().unwrap_or_default()}
                </p>
            </Show>
        </div>
    }
}
