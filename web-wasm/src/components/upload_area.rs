//! Upload area component

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use web_sys::{DragEvent, File, FileReader};

use crate::app::PickedImage;
use freshscan_common::{layout::format_size, SelectedFile};

#[component]
pub fn UploadArea<F>(picked: ReadSignal<Option<PickedImage>>, on_image_picked: F) -> impl IntoView
where
    F: Fn(PickedImage) + 'static + Clone,
{
    let (is_dragover, set_is_dragover) = signal(false);

    let handle_file = {
        let on_image_picked = on_image_picked.clone();
        move |file: File| read_file(file, on_image_picked.clone())
    };

    let on_drop = {
        let handle_file = handle_file.clone();
        move |ev: DragEvent| {
            ev.prevent_default();
            set_is_dragover.set(false);

            if let Some(dt) = ev.data_transfer() {
                if let Some(files) = dt.files() {
                    if let Some(file) = files.get(0) {
                        handle_file(file);
                    }
                }
            }
        }
    };

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_dragover.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_dragover.set(false);
    };

    let on_click = {
        let handle_file = handle_file.clone();
        move |_| {
            let document = web_sys::window().unwrap().document().unwrap();
            let input: web_sys::HtmlInputElement = document
                .create_element("input")
                .unwrap()
                .dyn_into()
                .unwrap();
            input.set_type("file");
            input.set_accept("image/*");

            let input_clone = input.clone();
            let handle_file = handle_file.clone();
            let closure = Closure::wrap(Box::new(move |_: web_sys::Event| {
                if let Some(files) = input_clone.files() {
                    if let Some(file) = files.get(0) {
                        handle_file(file);
                    }
                }
            }) as Box<dyn FnMut(_)>);

            input.set_onchange(Some(closure.as_ref().unchecked_ref()));
            closure.forget();
            input.click();
        }
    };

    view! {
        <div
            class=move || {
                let mut classes = vec!["upload-area"];
                if is_dragover.get() {
                    classes.push("dragover");
                }
                classes.join(" ")
            }
            on:drop=on_drop
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:click=on_click
        >
            <Show
                when=move || picked.get().is_some()
                fallback=|| view! {
                    <div class="upload-icon">"🍏"</div>
                    <p>"Drag & drop an image, or click to choose"</p>
                    <p class="text-muted">"Supported formats: JPEG, PNG"</p>
                }
            >
                <img
                    class="preview"
                    src=move || picked.get().map(|p| p.data_url).unwrap_or_default()
                />
                <p>
                    {move || {
                        picked
                            .get()
                            .map(|p| {
                                let size = p.meta.size.map(format_size).unwrap_or_default();
                                if size.is_empty() {
                                    p.meta.name
                                } else {
                                    format!("{} ({})", p.meta.name, size)
                                }
                            })
                            .unwrap_or_default()
                    }}
                </p>
                <p class="text-muted">"Click to choose a different image"</p>
            </Show>
        </div>
    }
}

fn read_file<F>(file: File, on_image_picked: F)
where
    F: Fn(PickedImage) + 'static,
{
    let name = file.name();
    let mime = file.type_();
    let size = file.size() as u64;
    let reader = FileReader::new().unwrap();

    let reader_clone = reader.clone();
    let closure = Closure::wrap(Box::new(move |_: web_sys::ProgressEvent| {
        if let Ok(result) = reader_clone.result() {
            if let Some(data_url) = result.as_string() {
                on_image_picked(PickedImage {
                    meta: SelectedFile {
                        name: name.clone(),
                        mime: mime.clone(),
                        size: Some(size),
                    },
                    data_url,
                });
            }
        }
    }) as Box<dyn FnMut(_)>);

    reader.set_onload(Some(closure.as_ref().unchecked_ref()));
    closure.forget();

    let _ = reader.read_as_data_url(&file);
}
