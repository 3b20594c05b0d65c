//! Generic list panel: filter control, card list and detail sheet for any
//! `ListRecord`. All list logic lives in `ListViewController`; this module
//! only moves its futures onto the browser event loop and binds card
//! buttons to messages.

use common::listing::ListRecord;
use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::ListPanelProps;
pub use state::ListPanel;

impl<R: ListRecord> Component for ListPanel<R> {
    type Message = Msg<R>;
    type Properties = ListPanelProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let mut panel = ListPanel::new(props.service.0.clone());
        if panel.refresh.claim(props.active, props.refresh_token) {
            ctx.link().send_message(Msg::Refresh);
        }
        panel
    }

    fn changed(&mut self, ctx: &Context<Self>, _old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        if self.refresh.claim(props.active, props.refresh_token) {
            ctx.link().send_message(Msg::Refresh);
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
