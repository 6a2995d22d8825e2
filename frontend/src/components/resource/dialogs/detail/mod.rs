use common::resource::{FieldKind, Resource};
use yew::prelude::*;

use crate::components::resource::helpers::{stored_image_urls, timestamps};
use crate::components::resource::{Msg, ResourceComponent};
use crate::tops_sheet::TopSheet;

/// Read-only view of the record selected with "View".
pub fn detail_dialog<R: Resource>(component: &ResourceComponent<R>, ctx: &Context<ResourceComponent<R>>) -> Html {
    let config = component.state.config();
    let body = match component.state.detail() {
        Some(record) => {
            let fields = config.schema.fields().iter().map(|field| {
                let value = if field.kind.is_file() {
                    let urls = stored_image_urls(&component.app, field, record);
                    if urls.is_empty() {
                        html! { <span class="muted">{"No image"}</span> }
                    } else {
                        html! {
                            <div class="gallery">
                                { for urls.into_iter().map(|src| html! { <img src={src} alt={field.label} /> }) }
                            </div>
                        }
                    }
                } else {
                    let text = record.field_value(field.name).unwrap_or_default();
                    match field.kind {
                        FieldKind::LongText => html! { <p class="long-text">{ text }</p> },
                        _ => html! { { field.cell.render(&text) } },
                    }
                };
                html! {
                    <div class="detail-row">
                        <strong>{ field.label }{":"}</strong>
                        { value }
                    </div>
                }
            });
            html! {
                <>
                    { for fields }
                    { for timestamps(record).into_iter().map(|(label, stamp)| html! {
                        <div class="detail-row muted"><strong>{ label }{":"}</strong>{" "}{ stamp }</div>
                    }) }
                </>
            }
        }
        None => html! {},
    };

    html! {
        <TopSheet node_ref={component.detail_ref.clone()}>
            <div class="sheet-card">
                <div class="sheet-header">
                    <h3>{ format!("{} details", config.label) }</h3>
                    <button class="icon-btn" onclick={ctx.link().callback(|_| Msg::CloseDetail)}>{"✕"}</button>
                </div>
                { body }
            </div>
        </TopSheet>
    }
}
