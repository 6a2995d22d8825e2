//! Sequential driver tying a [`ResourceState`] to a [`ResourceClient`].
//!
//! Each operation awaits its request before returning, so the manager is a
//! straightforward way to run a resource page outside a UI event loop. The
//! browser component drives the same state and client through messages.

use super::Resource;
use super::client::ResourceClient;
use super::endpoints::Operation;
use super::feedback::{Feedback, Notice};
use super::form::{Attachment, PreviewUrls};
use super::pagination::PageView;
use super::state::ResourceState;
use super::transport::Transport;
use std::rc::Rc;

pub struct ResourceManager<R, T, U> {
    state: ResourceState<R>,
    client: ResourceClient<T>,
    ui: U,
}

impl<R, T, U> ResourceManager<R, T, U>
where
    R: Resource,
    T: Transport,
    U: Feedback + PreviewUrls,
{
    pub fn new(transport: T, ui: U) -> Self {
        let config = Rc::new(R::config());
        Self {
            state: ResourceState::new(Rc::clone(&config)),
            client: ResourceClient::new(transport, config),
            ui,
        }
    }

    pub fn state(&self) -> &ResourceState<R> {
        &self.state
    }

    pub fn client(&self) -> &ResourceClient<T> {
        &self.client
    }

    pub fn ui(&self) -> &U {
        &self.ui
    }

    pub fn ui_mut(&mut self) -> &mut U {
        &mut self.ui
    }

    /// Fetches the collection. Returns `false` if another request was in
    /// flight and nothing was sent.
    pub async fn load(&mut self) -> bool {
        if !self.state.begin_load() {
            return false;
        }
        let result = self.client.list::<R>().await;
        if let Some(notice) = self.state.finish_load(result, &mut self.ui) {
            self.ui.notify(notice);
        }
        true
    }

    /// Filters the collection on `field`. Returns `false` when the resource
    /// has no such field; the previous query then stays in effect.
    pub fn search(&mut self, field: &str, text: &str) -> bool {
        self.state.search_by(field, text)
    }

    pub fn paginate(&mut self, page: usize) -> bool {
        self.state.go_to_page(page)
    }

    pub fn page(&self) -> PageView<'_, R> {
        self.state.current_page()
    }

    pub fn set_value(&mut self, field: &str, value: &str) {
        self.state.set_value(field, value);
    }

    pub fn attach(&mut self, field: &str, files: Vec<Attachment>) {
        self.state.attach(field, files, &mut self.ui);
    }

    pub fn set_row_value(&mut self, row: usize, field: &str, value: &str) -> bool {
        self.state.set_row_value(row, field, value)
    }

    /// Adds a row to a batch create form.
    pub fn add_row(&mut self) -> bool {
        self.state.add_row()
    }

    pub fn remove_row(&mut self, row: usize) -> bool {
        self.state.remove_row(row)
    }

    pub fn edit(&mut self, id: &str) -> bool {
        self.state.edit(id, &mut self.ui)
    }

    pub fn reset(&mut self) {
        self.state.reset(&mut self.ui);
    }

    /// Sends the form. On success the collection is reloaded.
    pub async fn submit(&mut self) -> bool {
        let Some(submission) = self.state.begin_submit() else {
            return false;
        };
        let mode = submission.mode.clone();
        let result = self.client.submit(submission).await;
        let succeeded = result.is_ok();
        let notice = self.state.finish_submit(&mode, result, &mut self.ui);
        self.ui.notify(notice);
        if succeeded {
            self.load().await;
        }
        succeeded
    }

    /// Asks for confirmation first; a declined prompt sends nothing.
    pub async fn remove(&mut self, id: &str) -> bool {
        if !self.state.can_remove(id) {
            return false;
        }
        let prompt = self.state.config().confirm_prompt();
        if !self.ui.confirm(&prompt) {
            log::debug!("delete of {} {id} declined", self.state.config().name);
            return false;
        }
        if !self.state.begin_remove(id) {
            return false;
        }
        let result = self.client.delete(id).await;
        let succeeded = result.is_ok();
        let notice = self.state.finish_remove(id, result, &mut self.ui);
        self.ui.notify(notice);
        if succeeded {
            self.load().await;
        }
        succeeded
    }

    /// Deletes the page image and reloads. No confirmation is asked.
    pub async fn remove_page_image(&mut self) -> bool {
        if !self.state.begin_remove_page_image() {
            return false;
        }
        let result = self.client.remove_page_image().await;
        let succeeded = result.is_ok();
        let notice = self.state.finish_remove_page_image(result);
        self.ui.notify(notice);
        if succeeded {
            self.load().await;
        }
        succeeded
    }

    /// Loads a single record into the detail view. A failed fetch falls back
    /// to the copy already in the collection.
    pub async fn view(&mut self, id: &str) -> bool {
        let fetched = if self.state.supports(Operation::Detail) {
            match self.client.fetch::<R>(id).await {
                Ok(record) => Some(record),
                Err(err) => {
                    log::warn!("detail fetch for {id} failed: {err}");
                    None
                }
            }
        } else {
            None
        };
        match fetched.or_else(|| self.state.find(id).cloned()) {
            Some(record) => {
                self.state.show_detail(record);
                true
            }
            None => {
                self.ui
                    .notify(Notice::error(format!("{} not found", self.state.config().label)));
                false
            }
        }
    }

    pub fn close_detail(&mut self) {
        self.state.close_detail();
    }

    /// Revokes every preview still held by the form.
    pub fn release_previews(&mut self) {
        self.state.release_previews(&mut self.ui);
    }
}
