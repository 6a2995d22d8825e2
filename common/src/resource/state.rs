//! Per-page state machine.
//!
//! One [`Phase`] plus one [`FormMode`] replace the loading/editing/submitting
//! flags a page would otherwise juggle. The state never talks to the network:
//! drivers call `begin_*`, perform the request, then hand the outcome to the
//! matching `finish_*`.

use super::Resource;
use super::client::Listing;
use super::config::ResourceConfig;
use super::endpoints::Operation;
use super::feedback::Notice;
use super::form::{Attachment, FormMode, FormState, PreviewUrls};
use super::pagination::{self, PageView};
use super::payload::{Payload, Submission};
use super::search::{self, SearchQuery};
use crate::error::ClientError;
use std::collections::BTreeSet;
use std::rc::Rc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    /// The form is bound to an existing record.
    Editing,
    /// A create, update or delete request is in flight.
    Submitting,
}

impl Phase {
    pub fn is_busy(self) -> bool {
        matches!(self, Phase::Loading | Phase::Submitting)
    }
}

#[derive(Debug, Clone)]
pub struct ResourceState<R> {
    config: Rc<ResourceConfig>,
    records: Vec<R>,
    phase: Phase,
    mode: FormMode,
    form: FormState,
    query: SearchQuery,
    page: usize,
    detail: Option<R>,
    loaded: bool,
    page_image: Option<String>,
    /// File fields whose selection is still being read into memory.
    reading: BTreeSet<String>,
}

impl<R: Resource> ResourceState<R> {
    pub fn new(config: Rc<ResourceConfig>) -> Self {
        let query = SearchQuery::new(config.search_fields.first().copied().unwrap_or_default());
        Self {
            form: FormState::blank(&config.schema),
            config,
            records: Vec::new(),
            phase: Phase::Idle,
            mode: FormMode::Create,
            query,
            page: 1,
            detail: None,
            loaded: false,
            page_image: None,
            reading: BTreeSet::new(),
        }
    }

    pub fn config(&self) -> &ResourceConfig {
        &self.config
    }

    pub fn shared_config(&self) -> Rc<ResourceConfig> {
        Rc::clone(&self.config)
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn query(&self) -> &SearchQuery {
        &self.query
    }

    pub fn detail(&self) -> Option<&R> {
        self.detail.as_ref()
    }

    /// Stored path of the page image, when the resource has one.
    pub fn page_image(&self) -> Option<&str> {
        self.page_image.as_deref()
    }

    /// Whether at least one load has completed, successfully or not.
    pub fn has_loaded(&self) -> bool {
        self.loaded
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn supports(&self, operation: Operation) -> bool {
        self.config.endpoints.supports(operation)
    }

    /// Whether the form can be shown: singletons and creatable collections
    /// always, update-only collections while a record is bound.
    pub fn form_available(&self) -> bool {
        match self.mode {
            FormMode::Create => self.supports(Operation::Create),
            FormMode::Edit { .. } => self.supports(Operation::Update),
        }
    }

    fn settled_phase(&self) -> Phase {
        if self.mode.is_edit() {
            Phase::Editing
        } else {
            Phase::Idle
        }
    }

    /// Returns `false` when another request is already in flight.
    pub fn begin_load(&mut self) -> bool {
        if self.phase.is_busy() {
            return false;
        }
        self.phase = Phase::Loading;
        true
    }

    /// Replaces the collection with the fetched one. A failure empties the
    /// collection and yields an error notice.
    pub fn finish_load(
        &mut self,
        result: Result<Listing<R>, ClientError>,
        previews: &mut dyn PreviewUrls,
    ) -> Option<Notice> {
        self.loaded = true;
        let notice = match result {
            Ok(listing) => {
                self.records = listing.records;
                self.page_image = listing.page_image;
                self.rebind(previews);
                None
            }
            Err(err) => {
                log::error!("failed to load {}: {err}", self.config.name);
                self.records.clear();
                self.page_image = None;
                Some(Notice::error(self.config.load_failed_message()))
            }
        };
        self.clamp_page();
        self.phase = self.settled_phase();
        notice
    }

    /// Singletons bind to their first record. A collection form bound to a
    /// record that no longer exists falls back to create mode.
    fn rebind(&mut self, previews: &mut dyn PreviewUrls) {
        if self.config.is_singleton() {
            match self.records.first() {
                Some(record) => {
                    self.form.release_previews(previews);
                    self.form = FormState::from_record(&self.config.schema, record);
                    self.mode = FormMode::Edit {
                        id: record.id().to_string(),
                    };
                }
                None if self.mode.is_edit() => self.clear_form(previews),
                None => {}
            }
        } else if let Some(id) = self.mode.bound_id() {
            if self.find(id).is_none() {
                self.clear_form(previews);
            }
        }
    }

    pub fn set_value(&mut self, field: &str, value: impl Into<String>) {
        self.form.set_value(field, value);
    }

    pub fn attach(&mut self, field: &str, files: Vec<Attachment>, previews: &mut dyn PreviewUrls) {
        self.reading.remove(field);
        self.form.attach(field, files, previews);
    }

    /// Marks a file selection as being read. Submission waits until every
    /// read has been handed to [`finish_reading`](Self::finish_reading).
    pub fn begin_reading(&mut self, field: &str) {
        self.reading.insert(field.to_string());
    }

    /// Attaches the files of a completed read. A read the form no longer
    /// waits for (the form was reset meanwhile) is dropped.
    pub fn finish_reading(
        &mut self,
        field: &str,
        files: Vec<Attachment>,
        previews: &mut dyn PreviewUrls,
    ) -> bool {
        if !self.reading.contains(field) {
            log::debug!("{}: dropping stale read of {field}", self.config.name);
            return false;
        }
        self.attach(field, files, previews);
        true
    }

    pub fn is_reading(&self) -> bool {
        !self.reading.is_empty()
    }

    /// Whether the form collects several rows for one batch create.
    pub fn collects_rows(&self) -> bool {
        self.config.is_batch_create() && !self.mode.is_edit()
    }

    pub fn set_row_value(&mut self, row: usize, field: &str, value: impl Into<String>) -> bool {
        self.form.set_row_value(row, field, value)
    }

    pub fn add_row(&mut self) -> bool {
        if !self.collects_rows() {
            return false;
        }
        self.form.push_row(&self.config.schema);
        true
    }

    pub fn remove_row(&mut self, row: usize) -> bool {
        self.collects_rows() && self.form.remove_row(row)
    }

    /// Selector path: ignored unless `field` is one of the configured search
    /// fields.
    pub fn set_search_field(&mut self, field: &str) {
        if self.config.search_fields.iter().any(|known| *known == field) {
            self.query.field = field.to_string();
            self.page = 1;
        }
    }

    pub fn search(&mut self, text: impl Into<String>) {
        self.query.text = text.into();
        self.page = 1;
    }

    /// Filters on `field`, which may be any schema field or configured
    /// search field. Returns `false` and leaves the query untouched for a
    /// field the resource does not have.
    pub fn search_by(&mut self, field: &str, text: impl Into<String>) -> bool {
        let known = self.config.search_fields.iter().any(|known| *known == field)
            || self.config.schema.field(field).is_some();
        if !known {
            log::debug!("{}: no field {field} to search", self.config.name);
            return false;
        }
        self.query.field = field.to_string();
        self.search(text);
        true
    }

    /// Records matching the current search, in fetch order.
    pub fn visible(&self) -> Vec<&R> {
        search::filter(&self.records, &self.query.field, &self.query.text)
    }

    pub fn page_number(&self) -> usize {
        self.page
    }

    pub fn total_pages(&self) -> usize {
        let len = self.visible().len();
        match self.config.page_size {
            Some(size) => pagination::total_pages(len, size),
            None => usize::from(len > 0),
        }
    }

    /// Moves to `page`; pages outside `1..=total` are ignored.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if page >= 1 && page <= self.total_pages() {
            self.page = page;
            true
        } else {
            false
        }
    }

    fn clamp_page(&mut self) {
        self.page = self.page.clamp(1, self.total_pages().max(1));
    }

    pub fn current_page(&self) -> PageView<'_, R> {
        let visible = self.visible();
        let (items, total, offset) = match self.config.page_size {
            Some(size) => (
                pagination::page_slice(&visible, self.page, size).to_vec(),
                pagination::total_pages(visible.len(), size),
                (self.page - 1) * size,
            ),
            None => {
                let total = usize::from(!visible.is_empty());
                (visible, total, 0)
            }
        };
        PageView {
            items,
            number: self.page,
            total,
            offset,
            numbers: pagination::page_numbers(self.page, total),
        }
    }

    /// Binds the form to a record for editing. Image fields start empty;
    /// the record's stored images stay displayed until a new upload succeeds.
    pub fn edit(&mut self, id: &str, previews: &mut dyn PreviewUrls) -> bool {
        if self.phase.is_busy() || !self.supports(Operation::Update) {
            return false;
        }
        let Some(record) = self.find(id) else {
            return false;
        };
        let form = FormState::from_record(&self.config.schema, record);
        self.form.release_previews(previews);
        self.form = form;
        self.mode = FormMode::Edit { id: id.to_string() };
        self.phase = Phase::Editing;
        true
    }

    /// Back to an empty create form. An in-flight request keeps its phase.
    pub fn reset(&mut self, previews: &mut dyn PreviewUrls) {
        self.clear_form(previews);
        if !self.phase.is_busy() {
            self.phase = Phase::Idle;
        }
    }

    fn clear_form(&mut self, previews: &mut dyn PreviewUrls) {
        self.reading.clear();
        self.form.release_previews(previews);
        self.form = FormState::blank(&self.config.schema);
        self.mode = FormMode::Create;
    }

    /// Releases every preview reference, e.g. when the page is torn down.
    pub fn release_previews(&mut self, previews: &mut dyn PreviewUrls) {
        self.form.release_previews(previews);
    }

    /// Snapshot of the form for submission, or `None` when busy, while a
    /// file selection is still being read, or when the current mode has no
    /// endpoint.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.phase.is_busy() || self.is_reading() || !self.form_available() {
            return None;
        }
        let payload = Payload::build(&self.config, &self.form, &self.mode);
        self.phase = Phase::Submitting;
        Some(Submission {
            mode: self.mode.clone(),
            payload,
        })
    }

    /// On success the form resets and the caller reloads; on failure the
    /// form is kept untouched for a retry. `submitted` is the mode the
    /// request was sent in, which the form may have left since.
    pub fn finish_submit(
        &mut self,
        submitted: &FormMode,
        result: Result<(), ClientError>,
        previews: &mut dyn PreviewUrls,
    ) -> Notice {
        match result {
            Ok(()) => {
                let notice = match submitted {
                    FormMode::Create => Notice::success("Created!", self.config.created_message()),
                    FormMode::Edit { .. } => {
                        Notice::success("Updated!", self.config.updated_message())
                    }
                };
                self.phase = Phase::Idle;
                self.reset(previews);
                notice
            }
            Err(err) => {
                log::error!("failed to save {}: {err}", self.config.name);
                self.phase = self.settled_phase();
                Notice::error(
                    err.server_message()
                        .map(str::to_string)
                        .unwrap_or_else(|| self.config.save_failed_message()),
                )
            }
        }
    }

    /// Whether `begin_remove` would accept this identifier; checked before
    /// asking the user to confirm.
    pub fn can_remove(&self, id: &str) -> bool {
        !self.phase.is_busy() && self.supports(Operation::Delete) && self.find(id).is_some()
    }

    /// Returns `false` (and changes nothing) when busy, when deletion is not
    /// supported or when no record has this identifier.
    pub fn begin_remove(&mut self, id: &str) -> bool {
        if !self.can_remove(id) {
            return false;
        }
        self.phase = Phase::Submitting;
        true
    }

    /// The collection itself is only changed by the reload that follows.
    pub fn finish_remove(
        &mut self,
        id: &str,
        result: Result<(), ClientError>,
        previews: &mut dyn PreviewUrls,
    ) -> Notice {
        let notice = match result {
            Ok(()) => {
                if self.mode.bound_id() == Some(id) {
                    self.clear_form(previews);
                }
                if self.detail.as_ref().is_some_and(|record| record.id() == id) {
                    self.detail = None;
                }
                Notice::success("Deleted!", self.config.deleted_message())
            }
            Err(err) => {
                log::error!("failed to delete {} {id}: {err}", self.config.name);
                Notice::error(self.config.delete_failed_message())
            }
        };
        self.phase = self.settled_phase();
        notice
    }

    /// Returns `false` when busy, when the resource cannot remove its page
    /// image or when there is none.
    pub fn begin_remove_page_image(&mut self) -> bool {
        if self.phase.is_busy()
            || !self.supports(Operation::RemovePageImage)
            || self.page_image.is_none()
        {
            return false;
        }
        self.phase = Phase::Submitting;
        true
    }

    pub fn finish_remove_page_image(&mut self, result: Result<(), ClientError>) -> Notice {
        let notice = match result {
            Ok(()) => {
                self.page_image = None;
                Notice::success("Deleted!", self.config.page_image_removed_message())
            }
            Err(err) => {
                log::error!("failed to remove {} page image: {err}", self.config.name);
                Notice::error(self.config.page_image_failed_message())
            }
        };
        self.phase = self.settled_phase();
        notice
    }

    pub fn show_detail(&mut self, record: R) {
        self.detail = Some(record);
    }

    pub fn close_detail(&mut self) {
        self.detail = None;
    }
}
