//! Dashboard root: fetches the connection settings once, builds the single
//! data service handle and owns the tab router.

use gloo_console::log;
use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

use crate::services::config::fetch_config;
pub use messages::Msg;
pub use state::App;

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        App::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.started {
            self.started = true;
            log!("fetching dashboard config");
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::ConfigLoaded(fetch_config().await));
            });
        }
    }
}
