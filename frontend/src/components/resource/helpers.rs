use common::config::AppConfig;
use common::resource::{CellStyle, FieldKind, FieldSpec, Resource};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{HtmlAnchorElement, HtmlInputElement, Url};
use yew::prelude::*;

use crate::platform::previews::bytes_blob;

/// Offers `text` as a file download through a temporary object URL.
pub fn download_text(file_name: &str, mime_type: &str, text: &str) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let blob = bytes_blob(text.as_bytes(), mime_type)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    Url::revoke_object_url(&url)
}

/// Absolute URLs of the images a record stores under `field`.
pub fn stored_image_urls<R: Resource>(app: &AppConfig, field: &FieldSpec, record: &R) -> Vec<String> {
    record
        .image_refs(field.name)
        .iter()
        .map(|path| app.image_url(field.storage_prefix, path))
        .collect()
}

pub fn image_cell<R: Resource>(app: &AppConfig, field: &FieldSpec, record: &R) -> Html {
    match stored_image_urls(app, field, record).into_iter().next() {
        Some(src) => html! { <img class="thumb" src={src} alt={field.label} /> },
        None => html! { <span class="muted">{"No image"}</span> },
    }
}

/// Table cell for one field of a record.
pub fn cell<R: Resource>(app: &AppConfig, field: &FieldSpec, record: &R) -> Html {
    if field.kind.is_file() {
        return image_cell(app, field, record);
    }
    let value = record.field_value(field.name).unwrap_or_default();
    match field.cell {
        CellStyle::Icon => html! {
            <span><i class={classes!("fa", value.clone())}></i>{" "}{value}</span>
        },
        CellStyle::Stars(_) => html! {
            <span class="stars" title={value.clone()}>{ field.cell.render(&value) }</span>
        },
        CellStyle::Truncate(_) => html! {
            <span title={value.clone()}>{ field.cell.render(&value) }</span>
        },
        CellStyle::Plain => match field.kind {
            FieldKind::Number => html! { <span class="number">{ value }</span> },
            _ => html! { { value } },
        },
    }
}

pub fn input_files(event: &Event) -> Vec<web_sys::File> {
    let input: HtmlInputElement = event.target_unchecked_into();
    let Some(list) = input.files() else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|index| list.get(index)).collect()
}

/// `Created` and `Updated` lines for the detail dialog; the update time is
/// left out when it equals the creation time.
pub fn timestamps<R: Resource>(record: &R) -> Vec<(&'static str, String)> {
    let created = record.field_value("createdAt");
    let updated = record.field_value("updatedAt");
    let mut lines = Vec::new();
    if let Some(created) = &created {
        lines.push(("Created", common::export::format_timestamp(created)));
    }
    if let Some(updated) = updated.filter(|updated| Some(updated) != created.as_ref()) {
        lines.push(("Updated", common::export::format_timestamp(&updated)));
    }
    lines
}
