//! Slide-down sheet used for dialogs. Visibility is toggled through the
//! `show` class so the CSS transition runs.

use uuid::Uuid;
use yew::{html, Component, Context, Html, NodeRef, Properties};

pub struct TopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
}

impl Component for TopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("sheet-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div class="top-sheet" id={self.id.clone()} ref={ctx.props().node_ref.clone()}>
                { ctx.props().children.clone() }
            </div>
        }
    }
}

pub fn open_top_sheet(sheet_ref: &NodeRef) {
    toggle(sheet_ref, true);
}

pub fn close_top_sheet(sheet_ref: &NodeRef) {
    toggle(sheet_ref, false);
}

/// Deferred so a sheet rendered in the same update is in the DOM first.
fn toggle(sheet_ref: &NodeRef, show: bool) {
    let sheet_ref = sheet_ref.clone();
    wasm_bindgen_futures::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(50).await;
        if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
            let classes = sheet.class_list();
            if show {
                classes.add_1("show").ok();
            } else {
                classes.remove_1("show").ok();
            }
        }
    });
}
