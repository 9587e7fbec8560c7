use leptos::prelude::{Callable, Callback};
use serde::Deserialize;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{FormData, XmlHttpRequest};

const CLOUD_NAME: &str = "ember-grill";
const UPLOAD_PRESET: &str = "menu_uploads";
const UPLOAD_FOLDER: &str = "menu-items";

/// Uploads larger than this are rejected before any network call.
pub const MAX_FILE_BYTES: f64 = 10.0 * 1024.0 * 1024.0;

const ALLOWED_TYPES: [&str; 4] = ["image/jpeg", "image/jpg", "image/png", "image/webp"];

const UPLOAD_TIMEOUT_MS: u32 = 60_000;

/// Validate MIME type and size. Returns every violation, not just the first,
/// so the widget can list them all.
pub fn validate_image_file(mime_type: &str, size_bytes: f64) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if !ALLOWED_TYPES.contains(&mime_type) {
        errors.push("Invalid file type. Please upload JPEG, PNG, or WebP images.".to_string());
    }
    if size_bytes > MAX_FILE_BYTES {
        errors.push("File size too large. Please upload images smaller than 10MB.".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// What the admin form gets back after a successful upload.
#[derive(Debug, Clone)]
pub struct UploadResult {
    pub url: String,
    pub public_id: String,
    pub width: u32,
    pub height: u32,
    pub format: String,
    pub bytes: u64,
}

#[derive(Debug, Deserialize)]
struct CloudinaryResponse {
    secure_url: String,
    public_id: String,
    #[serde(default)]
    width: u32,
    #[serde(default)]
    height: u32,
    #[serde(default)]
    format: String,
    #[serde(default)]
    bytes: u64,
}

fn upload_endpoint() -> String {
    format!("https://api.cloudinary.com/v1_1/{}/image/upload", CLOUD_NAME)
}

/// Multipart POST of `file` to the media host via `XmlHttpRequest`, so
/// upload progress events can drive `on_progress` (0..=100).
///
/// Callers are expected to have run [`validate_image_file`] first.
pub async fn upload_image(
    file: &web_sys::File,
    on_progress: Option<Callback<u32>>,
) -> Result<UploadResult, String> {
    let form = FormData::new().map_err(|e| format!("{:?}", e))?;
    form.append_with_blob("file", file)
        .map_err(|e| format!("{:?}", e))?;
    form.append_with_str("upload_preset", UPLOAD_PRESET)
        .map_err(|e| format!("{:?}", e))?;
    form.append_with_str("folder", UPLOAD_FOLDER)
        .map_err(|e| format!("{:?}", e))?;

    let xhr = XmlHttpRequest::new().map_err(|e| format!("{:?}", e))?;
    xhr.open("POST", &upload_endpoint())
        .map_err(|e| format!("{:?}", e))?;
    xhr.set_timeout(UPLOAD_TIMEOUT_MS);

    if let Some(on_progress) = on_progress {
        let progress = Closure::wrap(Box::new(move |ev: web_sys::ProgressEvent| {
            if ev.length_computable() && ev.total() > 0.0 {
                let percent = ((ev.loaded() / ev.total()) * 100.0).round() as u32;
                on_progress.run(percent.min(100));
            }
        }) as Box<dyn FnMut(web_sys::ProgressEvent)>);
        if let Ok(upload) = xhr.upload() {
            upload.set_onprogress(Some(progress.as_ref().unchecked_ref()));
        }
        progress.forget(); // keep the handler alive for the duration of the upload
    }

    let promise = js_sys::Promise::new(&mut |resolve, reject| {
        let xhr_load = xhr.clone();
        let reject_load = reject.clone();
        let onload = Closure::wrap(Box::new(move || {
            let status = xhr_load.status().unwrap_or(0);
            if status == 200 {
                let text = xhr_load
                    .response_text()
                    .ok()
                    .flatten()
                    .unwrap_or_default();
                let _ = resolve.call1(&JsValue::UNDEFINED, &JsValue::from_str(&text));
            } else {
                let _ = reject_load.call1(
                    &JsValue::UNDEFINED,
                    &JsValue::from_str(&format!("Upload failed with status: {}", status)),
                );
            }
        }) as Box<dyn FnMut()>);
        xhr.set_onload(Some(onload.as_ref().unchecked_ref()));
        onload.forget();

        let reject_error = reject.clone();
        let onerror = Closure::wrap(Box::new(move || {
            let _ = reject_error.call1(
                &JsValue::UNDEFINED,
                &JsValue::from_str("Network error during upload"),
            );
        }) as Box<dyn FnMut()>);
        xhr.set_onerror(Some(onerror.as_ref().unchecked_ref()));
        onerror.forget();

        let reject_timeout = reject.clone();
        let ontimeout = Closure::wrap(Box::new(move || {
            let _ = reject_timeout
                .call1(&JsValue::UNDEFINED, &JsValue::from_str("Upload timeout"));
        }) as Box<dyn FnMut()>);
        xhr.set_ontimeout(Some(ontimeout.as_ref().unchecked_ref()));
        ontimeout.forget();

        if xhr.send_with_opt_form_data(Some(&form)).is_err() {
            let _ = reject.call1(
                &JsValue::UNDEFINED,
                &JsValue::from_str("Failed to start upload"),
            );
        }
    });

    let text = wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| e.as_string().unwrap_or_else(|| "Upload failed".to_string()))?
        .as_string()
        .ok_or_else(|| "Failed to parse upload response".to_string())?;

    let response: CloudinaryResponse =
        serde_json::from_str(&text).map_err(|_| "Failed to parse upload response".to_string())?;

    Ok(UploadResult {
        url: response.secure_url,
        public_id: response.public_id,
        width: response.width,
        height: response.height,
        format: response.format,
        bytes: response.bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_supported_images_under_limit() {
        assert!(validate_image_file("image/jpeg", 1024.0).is_ok());
        assert!(validate_image_file("image/png", MAX_FILE_BYTES).is_ok());
        assert!(validate_image_file("image/webp", 0.0).is_ok());
    }

    #[test]
    fn rejects_disallowed_type() {
        let errors = validate_image_file("image/gif", 1024.0).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("Invalid file type"));
    }

    #[test]
    fn rejects_oversized_file() {
        let errors = validate_image_file("image/png", MAX_FILE_BYTES + 1.0).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("smaller than 10MB"));
    }

    #[test]
    fn reports_every_violation() {
        let errors = validate_image_file("application/pdf", MAX_FILE_BYTES * 2.0).unwrap_err();
        assert_eq!(errors.len(), 2);
    }
}
