//! Image upload component with drag & drop support.
//!
//! Handles file selection, preview rendering, and the predict flow.

use gloo_timers::future::TimeoutFuture;
use leptos::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::{
    DragEvent, Event, File, FileReader, HtmlInputElement, ProgressEvent, ScrollBehavior,
    ScrollIntoViewOptions, ScrollLogicalPosition,
};

use crate::components::notify;
use crate::services::predict_image;
use crate::{
    first_file, NotificationKind, NotificationQueue, Pacing, PredictOutcome, ResultState,
    SubmitDecision, PREDICT_ENDPOINT,
};

#[component]
pub fn UploadSection(
    result: ReadSignal<ResultState>,
    set_result: WriteSignal<ResultState>,
    set_bar_percent: WriteSignal<f64>,
    set_notifications: WriteSignal<NotificationQueue>,
    result_ref: NodeRef<leptos::html::Div>,
    #[prop(optional)] pacing: Pacing,
) -> impl IntoView {
    let (selected_file, set_selected_file) = create_signal(None::<File>);
    let (preview_src, set_preview_src) = create_signal(None::<String>);
    let (drag_active, set_drag_active) = create_signal(false);
    let (is_predicting, set_is_predicting) = create_signal(false);

    let file_input_ref = create_node_ref::<leptos::html::Input>();

    // Un seul lecteur, réutilisé pour chaque sélection
    let preview_reader = store_value(PreviewReader::new(set_preview_src));

    // Handler pour le changement de fichier
    let on_file_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        if let Some(files) = input.files() {
            if let Some(file) = first_file((0..files.length()).filter_map(|i| files.get(i))) {
                select_file(file, preview_reader, set_selected_file, set_result);
            }
        }
    };

    // Handler pour cliquer sur la zone entière
    let trigger_file_input = move |_| {
        if let Some(input) = file_input_ref.get() {
            input.click();
        }
    };

    // Handlers drag & drop
    let on_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(true);
    };
    let on_drag_leave = move |_: DragEvent| {
        set_drag_active.set(false);
    };
    let on_drop = move |ev: DragEvent| {
        ev.prevent_default();
        set_drag_active.set(false);
        if let Some(files) = ev.data_transfer().and_then(|dt| dt.files()) {
            if let Some(file) = first_file((0..files.length()).filter_map(|i| files.get(i))) {
                select_file(file, preview_reader, set_selected_file, set_result);
            }
        }
    };

    // Lancer la prédiction
    let on_predict = move |_| {
        let file = match SubmitDecision::evaluate(selected_file.get(), is_predicting.get()) {
            SubmitDecision::AlreadyRunning => return,
            SubmitDecision::MissingFile => {
                notify(
                    set_notifications,
                    NotificationKind::Error,
                    "Please select an image first",
                    pacing,
                );
                return;
            }
            SubmitDecision::Submit(file) => file,
        };

        // Révéler la zone de résultat en état "analyse"
        set_is_predicting.set(true);
        set_result.set(ResultState::Analyzing);
        set_bar_percent.set(0.0);
        scroll_to_result(result_ref);

        spawn_local(async move {
            log::info!("📤 Submitting {} for prediction", file.name());

            let response = predict_image(&file, PREDICT_ENDPOINT).await;
            if let Err(e) = &response {
                log::error!("❌ Prediction request failed: {}", e);
            }

            let outcome = PredictOutcome::from_response(response);
            apply_outcome(
                outcome,
                result,
                set_result,
                set_bar_percent,
                set_notifications,
                pacing,
            )
            .await;

            set_is_predicting.set(false);
        });
    };

    view! {
        <div class="upload-card">
            <div
                class="drop-zone"
                id="drop-zone"
                class:dragover=move || drag_active.get()
                on:click=trigger_file_input
                on:dragover=on_drag_over
                on:dragleave=on_drag_leave
                on:drop=on_drop
            >
                <Show
                    when=move || preview_src.get().is_some()
                    fallback=|| view! {
                        <div class="drop-zone-hint">
                            <div class="upload-icon">"🐾"</div>
                            <div class="upload-text">"Drag & drop an image here"</div>
                            <div class="upload-hint">"or click to browse"</div>
                        </div>
                    }
                >
                    <img
                        class="image-preview"
                        id="image-preview"
                        alt="Selected image preview"
                        src=move || preview_src.get().unwrap_or_default()
                    />
                </Show>

                <input
                    type="file"
                    id="file-input"
                    accept="image/*"
                    style="display:none"
                    node_ref=file_input_ref
                    on:change=on_file_change
                />
            </div>

            <button
                class="predict-button"
                id="predict-button"
                on:click=on_predict
                disabled=move || is_predicting.get()
            >
                {move || if is_predicting.get() {
                    "⏳ Analyzing..."
                } else {
                    "Upload & Predict"
                }}
            </button>
        </div>
    }
}

/// Lecteur de preview partagé par toutes les sélections.
///
/// Le callback `loadend` n'est enregistré qu'une seule fois et vit aussi
/// longtemps que le composant.
struct PreviewReader {
    reader: FileReader,
    _onloadend: Closure<dyn FnMut(ProgressEvent)>,
}

impl PreviewReader {
    fn new(set_preview_src: WriteSignal<Option<String>>) -> Option<Self> {
        let reader = match FileReader::new() {
            Ok(reader) => reader,
            Err(e) => {
                log::error!("Failed to create FileReader: {:?}", e);
                return None;
            }
        };

        let reader_handle = reader.clone();
        let onloadend = Closure::wrap(Box::new(move |_: ProgressEvent| {
            match reader_handle.result() {
                // Une lecture annulée laisse un résultat null, donc sans effet
                Ok(value) => {
                    if let Some(data_url) = value.as_string() {
                        set_preview_src.set(Some(data_url));
                    }
                }
                Err(e) => log::error!("Failed to read file: {:?}", e),
            }
        }) as Box<dyn FnMut(ProgressEvent)>);

        reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));

        Some(Self {
            reader,
            _onloadend: onloadend,
        })
    }

    /// Arrête une lecture encore en cours, puis lit `file` en data URL.
    fn load(&self, file: &File) {
        self.reader.abort();
        if let Err(e) = self.reader.read_as_data_url(file) {
            log::error!("Failed to start reading file: {:?}", e);
        }
    }
}

/// Retient `file` comme sélection courante et lance la lecture du preview.
fn select_file(
    file: File,
    preview_reader: StoredValue<Option<PreviewReader>>,
    set_selected_file: WriteSignal<Option<File>>,
    set_result: WriteSignal<ResultState>,
) {
    log::info!("🖼️ Selected {} ({} bytes)", file.name(), file.size());

    // Une nouvelle sélection invalide le résultat affiché
    set_result.update(|state| *state = state.after_selection());
    set_selected_file.set(Some(file.clone()));

    preview_reader.with_value(|slot| {
        if let Some(reader) = slot {
            reader.load(&file);
        }
    });
}

/// Centre la zone de résultat dans le viewport.
fn scroll_to_result(result_ref: NodeRef<leptos::html::Div>) {
    if let Some(section) = result_ref.get() {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        options.set_block(ScrollLogicalPosition::Center);
        section.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

/// Applique un verdict terminal à la zone de résultat.
///
/// Une sélection faite pendant la requête a recaché la zone; le verdict
/// périmé est alors supprimé et seule la notification part.
async fn apply_outcome(
    outcome: PredictOutcome,
    result: ReadSignal<ResultState>,
    set_result: WriteSignal<ResultState>,
    set_bar_percent: WriteSignal<f64>,
    set_notifications: WriteSignal<NotificationQueue>,
    pacing: Pacing,
) {
    match &outcome {
        PredictOutcome::Classified { label, .. } => {
            log::info!("✅ Prediction received: {}", label);

            // Laisser le placeholder visible un instant
            TimeoutFuture::new(pacing.reveal_ms).await;
            let Some(state) = outcome.apply_over(&result.get()) else {
                return;
            };
            set_result.set(state.clone());

            // Puis animer la barre de confiance
            if let Some(percent) = outcome.bar_percent() {
                TimeoutFuture::new(pacing.bar_ms).await;
                if result.get() == state {
                    set_bar_percent.set(percent);
                }
            }
        }
        PredictOutcome::Rejected { message } => {
            if let Some(state) = outcome.apply_over(&result.get()) {
                set_result.set(state);
            }
            notify(set_notifications, NotificationKind::Error, message, pacing);
        }
        PredictOutcome::Unreachable => {
            if let Some(state) = outcome.apply_over(&result.get()) {
                set_result.set(state);
            }
            notify(
                set_notifications,
                NotificationKind::Error,
                "Connection error. Please try again.",
                pacing,
            );
        }
    }
}
