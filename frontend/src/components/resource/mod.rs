//! Generic resource panel: the browser face of `common::resource`.
//!
//! The component owns a `ResourceState` and drives it with messages: each
//! request is spawned on the page's event loop and its outcome comes back as
//! a `Msg` handled in `update`.

use common::resource::Resource;
use yew::prelude::*;

mod dialogs;
mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ResourceProps;
pub use state::ResourceComponent;

impl<R: Resource> Component for ResourceComponent<R> {
    type Message = Msg<R>;
    type Properties = ResourceProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load);
        ResourceComponent::new(ctx.props().app.clone())
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().app != old_props.app {
            self.state.release_previews(&mut self.previews);
            *self = ResourceComponent::new(ctx.props().app.clone());
            ctx.link().send_message(Msg::Load);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.state.release_previews(&mut self.previews);
    }
}
