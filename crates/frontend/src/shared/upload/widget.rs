use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{DragEvent, FileReader, HtmlInputElement};

use super::cloudinary;
use crate::shared::icons::icon;

/// Drag-and-drop image upload zone with a file-picker fallback.
///
/// Reports the hosted URL back through `on_upload` (`None` when the image is
/// removed). Invalid files are rejected before any network call.
#[component]
pub fn ImageUpload(
    on_upload: Callback<Option<String>>,
    current_image: Option<String>,
) -> impl IntoView {
    let (is_dragging, set_is_dragging) = signal(false);
    let (is_uploading, set_is_uploading) = signal(false);
    let (progress, set_progress) = signal(0u32);
    let (errors, set_errors) = signal::<Vec<String>>(Vec::new());
    let (preview_url, set_preview_url) = signal(current_image.clone());

    // dragenter/dragleave fire for every child element; a counter keeps the
    // highlight stable until the pointer really leaves the zone.
    let drag_counter = StoredValue::new(0i32);

    let input_ref = NodeRef::<leptos::html::Input>::new();

    // The image the preview falls back to when an upload is rejected.
    let saved_image = StoredValue::new(current_image);

    let handle_file = move |file: web_sys::File| {
        if is_uploading.get_untracked() {
            return;
        }
        set_errors.set(Vec::new());

        if let Err(validation_errors) =
            cloudinary::validate_image_file(&file.type_(), file.size())
        {
            set_errors.set(validation_errors);
            set_preview_url.set(saved_image.get_value());
            return;
        }

        // Local preview while the upload runs
        if let Ok(reader) = FileReader::new() {
            let reader_load = reader.clone();
            let onload = Closure::wrap(Box::new(move || {
                if let Ok(result) = reader_load.result() {
                    if let Some(data_url) = result.as_string() {
                        set_preview_url.set(Some(data_url));
                    }
                }
            }) as Box<dyn FnMut()>);
            reader.set_onload(Some(onload.as_ref().unchecked_ref()));
            onload.forget();
            let _ = reader.read_as_data_url(&file);
        }

        set_is_uploading.set(true);
        set_progress.set(0);

        spawn_local(async move {
            let on_progress = Callback::new(move |percent| set_progress.set(percent));
            match cloudinary::upload_image(&file, Some(on_progress)).await {
                Ok(result) => {
                    log::info!("image uploaded: {}", result.public_id);
                    on_upload.run(Some(result.url));
                }
                Err(e) => {
                    set_errors.set(vec![e]);
                    set_preview_url.set(saved_image.get_value());
                }
            }
            set_is_uploading.set(false);
            set_progress.set(0);
        });
    };

    let handle_file_select = move |ev: leptos::ev::Event| {
        let input = ev
            .target()
            .and_then(|t| t.dyn_into::<HtmlInputElement>().ok());
        if let Some(input) = input {
            if let Some(file) = input.files().and_then(|files| files.get(0)) {
                handle_file(file);
            }
        }
    };

    let handle_drag_enter = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_counter.update_value(|c| *c += 1);
        set_is_dragging.set(true);
    };

    let handle_drag_leave = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_counter.update_value(|c| *c -= 1);
        if drag_counter.get_value() <= 0 {
            set_is_dragging.set(false);
        }
    };

    let handle_drag_over = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };

    let handle_drop = move |ev: DragEvent| {
        ev.prevent_default();
        ev.stop_propagation();
        drag_counter.set_value(0);
        set_is_dragging.set(false);

        if let Some(file) = ev
            .data_transfer()
            .and_then(|dt| dt.files())
            .and_then(|files| files.get(0))
        {
            handle_file(file);
        }
    };

    let handle_remove = move |ev: leptos::ev::MouseEvent| {
        ev.stop_propagation();
        set_preview_url.set(None);
        set_errors.set(Vec::new());
        on_upload.run(None);
        if let Some(input) = input_ref.get() {
            input.set_value("");
        }
    };

    let open_file_dialog = move |_| {
        if is_uploading.get_untracked() {
            return;
        }
        if let Some(input) = input_ref.get() {
            input.click();
        }
    };

    view! {
        <div class="image-upload">
            <div
                class="image-upload__zone"
                class:image-upload__zone--dragging=move || is_dragging.get()
                class:image-upload__zone--error=move || !errors.get().is_empty()
                on:dragenter=handle_drag_enter
                on:dragleave=handle_drag_leave
                on:dragover=handle_drag_over
                on:drop=handle_drop
                on:click=open_file_dialog
            >
                <input
                    type="file"
                    accept="image/jpeg,image/png,image/webp"
                    class="image-upload__input"
                    node_ref=input_ref
                    on:change=handle_file_select
                    // a programmatic click bubbles back to the zone handler
                    on:click=move |ev| ev.stop_propagation()
                />

                {move || match preview_url.get() {
                    Some(url) => view! {
                        <div class="image-upload__preview">
                            <img src={url} alt="Menu item" />
                            <Show when=move || !is_uploading.get()>
                                <button
                                    class="image-upload__remove"
                                    title="Remove image"
                                    on:click=handle_remove
                                >
                                    {icon("x")}
                                </button>
                            </Show>
                        </div>
                    }.into_any(),
                    None => view! {
                        <div class="image-upload__placeholder">
                            {icon("upload")}
                            <span>"Drop an image here or click to browse"</span>
                            <span class="image-upload__hint">"JPEG, PNG or WebP, up to 10MB"</span>
                        </div>
                    }.into_any(),
                }}

                <Show when=move || is_uploading.get()>
                    <div class="image-upload__progress">
                        <div
                            class="image-upload__progress-bar"
                            style=move || format!("width: {}%", progress.get())
                        ></div>
                        <span>{move || format!("{}%", progress.get())}</span>
                    </div>
                </Show>
            </div>

            {move || {
                let current = errors.get();
                if current.is_empty() {
                    view! { <></> }.into_any()
                } else {
                    view! {
                        <ul class="image-upload__errors">
                            {current.into_iter().map(|e| view! { <li>{e}</li> }).collect_view()}
                        </ul>
                    }.into_any()
                }
            }}
        </div>
    }
}
