//! Result section: prediction headline, confidence line, confidence bar.

use leptos::*;

use crate::ResultState;

/// Panel revealing the verdict for the submitted image.
///
/// Stays mounted and only toggles the `hidden` class, so the predict flow
/// can scroll to it the moment it is revealed.
#[component]
pub fn ResultSection(
    result: ReadSignal<ResultState>,
    bar_percent: ReadSignal<f64>,
    section_ref: NodeRef<leptos::html::Div>,
) -> impl IntoView {
    view! {
        <div
            class="result-section"
            id="result-section"
            class:hidden=move || result.get().is_hidden()
            node_ref=section_ref
        >
            <div class="prediction-text" id="prediction-text">
                {move || result.get().prediction_text()}
            </div>
            <div class="confidence-text" id="confidence-text">
                {move || result.get().confidence_text()}
            </div>
            <div class="confidence-track">
                <div
                    class="confidence-bar"
                    id="confidence-bar"
                    style:width=move || format!("{}%", bar_percent.get())
                ></div>
            </div>
        </div>
    }
}
