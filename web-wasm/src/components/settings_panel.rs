//! Settings panel component

use leptos::prelude::*;

#[component]
pub fn SettingsPanel<FE, FF>(
    endpoint: ReadSignal<String>,
    on_endpoint_changed: FE,
    field: ReadSignal<String>,
    on_field_changed: FF,
) -> impl IntoView
where
    FE: Fn(String) + 'static + Clone,
    FF: Fn(String) + 'static + Clone,
{
    view! {
        <div class="settings-panel">
            <div class="settings-grid">
                <div class="form-group">
                    <label for="endpoint">"Analysis endpoint"</label>
                    <input
                        type="text"
                        id="endpoint"
                        prop:value=move || endpoint.get()
                        on:input={
                            let on_endpoint_changed = on_endpoint_changed.clone();
                            move |ev| on_endpoint_changed(event_target_value(&ev))
                        }
                    />
                </div>

                <div class="form-group">
                    <label for="upload-field">"Upload field"</label>
                    <select
                        id="upload-field"
                        on:change={
                            let on_field_changed = on_field_changed.clone();
                            move |ev| on_field_changed(event_target_value(&ev))
                        }
                    >
                        <option value="image" selected=move || field.get() == "image">"image"</option>
                        <option value="file" selected=move || field.get() == "file">"file"</option>
                    </select>
                </div>
            </div>
        </div>
    }
}
