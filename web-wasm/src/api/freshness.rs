//! Freshness endpoint client
//!
//! One multipart POST per analysis: the picked image's data URL is decoded
//! back to bytes, wrapped in a Blob, and sent under the configured field
//! name. The response body is parsed by the shared parser.

use base64::Engine;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Blob, BlobPropertyBag, FormData, Request, RequestInit, RequestMode, Response};

use crate::app::PickedImage;
use freshscan_common::{parse_report, FreshnessReport};

/// Base64 payload of a data URL
///
/// # Arguments
/// * `data_url` - a "data:image/jpeg;base64,/9j/4AAQ..." style URL
///
/// # Returns
/// The encoded data portion, or None when the input is not a data URL
pub fn extract_base64_from_data_url(data_url: &str) -> Option<&str> {
    data_url.split(',').nth(1)
}

/// MIME type of a data URL, defaulting to "image/jpeg"
pub fn extract_mime_type_from_data_url(data_url: &str) -> &str {
    data_url
        .split(':')
        .nth(1)
        .and_then(|s| s.split(';').next())
        .unwrap_or("image/jpeg")
}

/// Upload one image and parse the returned report.
pub async fn analyze_image(
    endpoint: &str,
    field: &str,
    image: &PickedImage,
) -> Result<FreshnessReport, JsValue> {
    let b64 = extract_base64_from_data_url(&image.data_url)
        .ok_or_else(|| JsValue::from_str("selected image is not a data URL"))?;
    let bytes = base64::engine::general_purpose::STANDARD
        .decode(b64)
        .map_err(|e| JsValue::from_str(&format!("invalid image data: {e}")))?;

    let array = js_sys::Uint8Array::new_with_length(bytes.len() as u32);
    array.copy_from(&bytes);
    let parts = js_sys::Array::of1(array.as_ref());
    let options = BlobPropertyBag::new();
    options.set_type(extract_mime_type_from_data_url(&image.data_url));
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;

    let form = FormData::new()?;
    form.append_with_blob_and_filename(field, &blob, &image.meta.name)?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    // no explicit Content-Type: the browser sets the multipart boundary
    let request = Request::new_with_str_and_init(endpoint, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        return Err(JsValue::from_str(&format!(
            "endpoint returned {}",
            resp.status()
        )));
    }

    let text = JsFuture::from(resp.text()?).await?;
    let body = text
        .as_string()
        .ok_or_else(|| JsValue::from_str("empty response body"))?;

    parse_report(&body).map_err(|e| JsValue::from_str(&e.to_string()))
}
