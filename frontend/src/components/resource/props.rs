use common::config::AppConfig;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct ResourceProps {
    /// Backend addresses; endpoints and image paths resolve against it.
    pub app: Rc<AppConfig>,

    /// Heading shown above the panel; defaults to the resource's plural label.
    #[prop_or_default]
    pub heading: Option<AttrValue>,
}
