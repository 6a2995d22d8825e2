use common::config::AppConfig;
use common::resource::{Resource, ResourceClient, ResourceState};
use std::rc::Rc;
use yew::prelude::*;

use crate::platform::{BrowserFeedback, HttpTransport, ObjectUrls};

/// One resource panel: the shared state machine plus its browser
/// collaborators.
pub struct ResourceComponent<R: Resource> {
    pub state: ResourceState<R>,
    pub client: ResourceClient<HttpTransport>,
    pub app: Rc<AppConfig>,
    pub previews: ObjectUrls,
    pub feedback: BrowserFeedback,

    /// Detail dialog container.
    pub detail_ref: NodeRef,

    /// File inputs are uncontrolled; cleared by bumping this on reset.
    pub file_input_epoch: u32,
}

impl<R: Resource> ResourceComponent<R> {
    pub fn new(app: Rc<AppConfig>) -> Self {
        let config = Rc::new(R::config());
        Self {
            state: ResourceState::new(Rc::clone(&config)),
            client: ResourceClient::new(HttpTransport::new(Rc::clone(&app)), config),
            app,
            previews: ObjectUrls,
            feedback: BrowserFeedback,
            detail_ref: NodeRef::default(),
            file_input_epoch: 0,
        }
    }
}
