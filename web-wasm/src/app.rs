//! Main application component

use leptos::prelude::*;

use crate::api;
use crate::components::{
    analyze_controls::AnalyzeControls, header::Header, result_panel::ResultPanel,
    settings_panel::SettingsPanel, upload_area::UploadArea,
};
use freshscan_common::{AnalyzerState, SelectedFile, DEFAULT_ENDPOINT, DEFAULT_UPLOAD_FIELD};
use gloo::storage::{LocalStorage, Storage};

const ENDPOINT_STORAGE_KEY: &str = "freshscan-endpoint";
const FIELD_STORAGE_KEY: &str = "freshscan-field";

/// A picked image: shared metadata plus the data URL used for the
/// preview and the upload
#[derive(Clone)]
pub struct PickedImage {
    pub meta: SelectedFile,
    pub data_url: String,
}

#[component]
pub fn App() -> impl IntoView {
    let stored_endpoint: String =
        LocalStorage::get(ENDPOINT_STORAGE_KEY).unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
    let stored_field: String =
        LocalStorage::get(FIELD_STORAGE_KEY).unwrap_or_else(|_| DEFAULT_UPLOAD_FIELD.to_string());

    let state = RwSignal::new(AnalyzerState::default());
    let (picked, set_picked) = signal(Option::<PickedImage>::None);
    let (notice, set_notice) = signal(Option::<String>::None);
    let (endpoint, set_endpoint) = signal(stored_endpoint);
    let (field, set_field) = signal(stored_field);

    let on_image_picked = move |image: PickedImage| {
        state.update(|s| s.select_file(image.meta.clone()));
        set_picked.set(Some(image));
    };

    let on_endpoint_changed = move |value: String| {
        let _ = LocalStorage::set(ENDPOINT_STORAGE_KEY, &value);
        set_endpoint.set(value);
    };

    let on_field_changed = move |value: String| {
        let _ = LocalStorage::set(FIELD_STORAGE_KEY, &value);
        set_field.set(value);
    };

    let on_analyze = move |_| {
        let mut begun = Ok(());
        state.update(|s| begun = s.begin());
        if let Err(err) = begun {
            set_notice.set(Some(err.to_string()));
            return;
        }
        set_notice.set(None);

        let Some(image) = picked.get_untracked() else {
            state.update(|s| s.fail());
            set_notice.set(Some(freshscan_common::Error::NoFileSelected.to_string()));
            return;
        };
        let endpoint = endpoint.get_untracked();
        let field = field.get_untracked();

        wasm_bindgen_futures::spawn_local(async move {
            match api::analyze_image(&endpoint, &field, &image).await {
                Ok(report) => {
                    state.update(|s| s.complete(report));
                }
                Err(err) => {
                    web_sys::console::error_1(&err);
                    state.update(|s| s.fail());
                    set_notice.set(Some("Error analyzing image".to_string()));
                }
            }
        });
    };

    view! {
        <div class="container">
            <Header />

            <SettingsPanel
                endpoint=endpoint
                on_endpoint_changed=on_endpoint_changed
                field=field
                on_field_changed=on_field_changed
            />

            <UploadArea picked=picked on_image_picked=on_image_picked />

            <AnalyzeControls state=state notice=notice on_analyze=on_analyze />

            <ResultPanel state=state />
        </div>
    }
}
