use common::resource::{Attachment, PreviewUrls};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, Url};

/// Object URLs for image previews. Every URL handed out must come back
/// through `revoke`, which the form state guarantees.
#[derive(Debug, Default, Clone, Copy)]
pub struct ObjectUrls;

impl PreviewUrls for ObjectUrls {
    fn create(&mut self, attachment: &Attachment) -> Option<String> {
        let blob = attachment_blob(attachment).ok()?;
        Url::create_object_url_with_blob(&blob).ok()
    }

    fn revoke(&mut self, url: &str) {
        Url::revoke_object_url(url).ok();
    }
}

pub fn attachment_blob(attachment: &Attachment) -> Result<Blob, JsValue> {
    bytes_blob(&attachment.bytes, &attachment.mime_type)
}

pub fn bytes_blob(bytes: &[u8], mime_type: &str) -> Result<Blob, JsValue> {
    let parts = Array::of1(&Uint8Array::from(bytes));
    let options = BlobPropertyBag::new();
    options.set_type(mime_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options)
}
