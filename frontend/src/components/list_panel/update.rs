//! Update function for the list panel.
//!
//! Network work never holds `&mut` across an await: `Refresh` and `Action`
//! take a detached future from the controller, run it with `spawn_local`
//! and post the outcome back as `Loaded` / `ActionDone`. A successful action
//! is followed by a full refresh.

use common::listing::{ActionContext, ListRecord};
use common::view::state::ERROR_PREFIX;
use common::view::ActionKind;
use gloo_console::{error, log};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{alert, confirm, show_toast};
use crate::tops_sheet::yw_material_top_sheet::open_top_sheet;

use super::messages::Msg;
use super::state::ListPanel;

pub fn update<R: ListRecord>(panel: &mut ListPanel<R>, ctx: &Context<ListPanel<R>>, msg: Msg<R>) -> bool {
    let table = R::KIND.table();
    match msg {
        Msg::Refresh => {
            panel.controller.begin_loading();
            let load = panel.controller.load();
            let link = ctx.link().clone();
            spawn_local(async move {
                link.send_message(Msg::Loaded(load.await));
            });
            true
        }

        Msg::Loaded(outcome) => {
            match &outcome {
                Ok(records) => log!(format!("{}: {} rows", table, records.len())),
                Err(err) => error!(format!("{}: {}", table, err)),
            }
            panel.controller.apply_outcome(outcome);
            true
        }

        Msg::FilterChanged(raw) => match panel.controller.select_filter(&raw) {
            Ok(()) => {
                ctx.link().send_message(Msg::Refresh);
                false
            }
            Err(err) => {
                error!(format!("{}: {}", table, err));
                false
            }
        },

        Msg::Action(id, ActionKind::ViewDetail) => {
            panel.detail = panel.controller.find(id).and_then(ListRecord::detail);
            if panel.detail.is_some() {
                open_top_sheet(panel.detail_ref.clone());
            }
            true
        }

        Msg::Action(id, action) => {
            if let Some(question) = action.confirmation() {
                if !confirm(question) {
                    return false;
                }
            }

            let action_ctx = ActionContext::now(ctx.props().reviewer.to_string());
            match panel.controller.action_request(id, action, &action_ctx) {
                Ok(Some(request)) => {
                    log!(format!("{}: {:?} on {}", table, action, id));
                    let submit = panel.controller.submit(request);
                    let link = ctx.link().clone();
                    spawn_local(async move {
                        link.send_message(Msg::ActionDone(action, submit.await));
                    });
                }
                Ok(None) => {}
                Err(err) => alert(&format!("{}{}", ERROR_PREFIX, err)),
            }
            false
        }

        Msg::ActionDone(action, Ok(())) => {
            show_toast(action.success_message());
            ctx.link().send_message(Msg::Refresh);
            false
        }

        Msg::ActionDone(action, Err(err)) => {
            error!(format!("{}: {:?} failed: {}", table, action, err));
            alert(&format!("{}{}", ERROR_PREFIX, err));
            false
        }

        Msg::CloseDetail => {
            panel.detail = None;
            true
        }
    }
}
