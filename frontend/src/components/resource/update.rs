//! Message handling for the resource panel.
//!
//! Requests follow one shape: a `begin_*` call on the state decides whether
//! anything is sent, the request runs in `spawn_local`, and the matching
//! result message feeds `finish_*`. Returns `true` when the view changed.

use common::export;
use common::resource::{Attachment, Feedback, Notice, Operation, Resource};
use gloo_file::futures::read_as_bytes;
use gloo_file::Blob;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::tops_sheet::{close_top_sheet, open_top_sheet};

use super::helpers::download_text;
use super::messages::Msg;
use super::state::ResourceComponent;

pub fn update<R: Resource>(
    component: &mut ResourceComponent<R>,
    ctx: &Context<ResourceComponent<R>>,
    msg: Msg<R>,
) -> bool {
    match msg {
        Msg::Load => {
            if !component.state.begin_load() {
                return false;
            }
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.list::<R>().await;
                link.send_message(Msg::Loaded(result));
            });
            true
        }
        Msg::Loaded(result) => {
            if let Some(notice) = component.state.finish_load(result, &mut component.previews) {
                component.feedback.notify(notice);
            }
            component.file_input_epoch += 1;
            true
        }
        Msg::SetValue { row, field, value } => component.state.set_row_value(row, &field, value),
        Msg::AddRow => component.state.add_row(),
        Msg::RemoveRow(row) => component.state.remove_row(row),
        Msg::FilesChosen { field, files } => {
            component.state.begin_reading(&field);
            let link = ctx.link().clone();
            spawn_local(async move {
                let mut attachments = Vec::with_capacity(files.len());
                for file in files {
                    let file_name = file.name();
                    let mime_type = file.type_();
                    match read_as_bytes(&Blob::from(file)).await {
                        Ok(bytes) => attachments.push(Attachment::new(file_name, mime_type, bytes)),
                        Err(err) => log::warn!("could not read {file_name}: {err}"),
                    }
                }
                link.send_message(Msg::FilesRead {
                    field,
                    files: attachments,
                });
            });
            true
        }
        Msg::FilesRead { field, files } => {
            component
                .state
                .finish_reading(&field, files, &mut component.previews);
            true
        }
        Msg::Submit => {
            let Some(submission) = component.state.begin_submit() else {
                return false;
            };
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let mode = submission.mode.clone();
                let result = client.submit(submission).await;
                link.send_message(Msg::Submitted { mode, result });
            });
            true
        }
        Msg::Submitted { mode, result } => {
            let succeeded = result.is_ok();
            let notice = component
                .state
                .finish_submit(&mode, result, &mut component.previews);
            component.feedback.notify(notice);
            if succeeded {
                component.file_input_epoch += 1;
                ctx.link().send_message(Msg::Load);
            }
            true
        }
        Msg::Edit(id) => {
            let bound = component.state.edit(&id, &mut component.previews);
            if bound {
                component.file_input_epoch += 1;
                scroll_to_top();
            }
            bound
        }
        Msg::Reset => {
            component.state.reset(&mut component.previews);
            component.file_input_epoch += 1;
            true
        }
        Msg::Remove(id) => {
            if !component.state.can_remove(&id) {
                return false;
            }
            let prompt = component.state.config().confirm_prompt();
            if !component.feedback.confirm(&prompt) {
                return false;
            }
            if !component.state.begin_remove(&id) {
                return false;
            }
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.delete(&id).await;
                link.send_message(Msg::Removed { id, result });
            });
            true
        }
        Msg::Removed { id, result } => {
            let succeeded = result.is_ok();
            let notice = component
                .state
                .finish_remove(&id, result, &mut component.previews);
            component.feedback.notify(notice);
            if succeeded {
                ctx.link().send_message(Msg::Load);
            }
            true
        }
        Msg::RemovePageImage => {
            if !component.state.begin_remove_page_image() {
                return false;
            }
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.remove_page_image().await;
                link.send_message(Msg::PageImageRemoved(result));
            });
            true
        }
        Msg::PageImageRemoved(result) => {
            let succeeded = result.is_ok();
            let notice = component.state.finish_remove_page_image(result);
            component.feedback.notify(notice);
            if succeeded {
                ctx.link().send_message(Msg::Load);
            }
            true
        }
        Msg::View(id) => {
            if !component.state.supports(Operation::Detail) {
                return show_cached(component, &id);
            }
            let client = component.client.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let result = client.fetch::<R>(&id).await;
                link.send_message(Msg::Viewed { id, result });
            });
            false
        }
        Msg::Viewed { id, result } => match result {
            Ok(record) => {
                component.state.show_detail(record);
                open_top_sheet(&component.detail_ref);
                true
            }
            Err(err) => {
                log::warn!("detail fetch for {id} failed: {err}");
                show_cached(component, &id)
            }
        },
        Msg::CloseDetail => {
            close_top_sheet(&component.detail_ref);
            component.state.close_detail();
            true
        }
        Msg::SearchField(field) => {
            component.state.set_search_field(&field);
            true
        }
        Msg::SearchText(text) => {
            component.state.search(text);
            true
        }
        Msg::GoToPage(page) => component.state.go_to_page(page),
        Msg::Export => {
            let Some(spec) = component.state.config().export.clone() else {
                return false;
            };
            let visible = component.state.visible();
            match export::to_csv(&visible, &spec) {
                Ok(csv) => {
                    if download_text(spec.file_name, "text/csv;charset=utf-8", &csv).is_err() {
                        component
                            .feedback
                            .notify(Notice::error("The browser refused the download."));
                    }
                }
                Err(err) => {
                    log::error!("export failed: {err}");
                    component.feedback.notify(Notice::error(err.to_string()));
                }
            }
            false
        }
    }
}

fn show_cached<R: Resource>(component: &mut ResourceComponent<R>, id: &str) -> bool {
    match component.state.find(id).cloned() {
        Some(record) => {
            component.state.show_detail(record);
            open_top_sheet(&component.detail_ref);
            true
        }
        None => {
            let label = component.state.config().label;
            component
                .feedback
                .notify(Notice::error(format!("Failed to fetch {} details.", label.to_lowercase())));
            false
        }
    }
}

fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        window.scroll_to_with_x_and_y(0.0, 0.0);
    }
}
