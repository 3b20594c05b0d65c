use common::router::Tab;
use common::stats::fetch_stats;
use gloo_console::{error, log};
use std::rc::Rc;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::alert;
use crate::services::supabase::SupabaseService;
use crate::services::ServiceHandle;
use crate::tops_sheet::yw_material_top_sheet::{close_top_sheet, open_top_sheet};

use super::messages::Msg;
use super::state::{App, Connection};

const CONNECTION_FAILED: &str = "데이터베이스 연결에 실패했습니다. 페이지를 새로고침해주세요.";

/// Recount the summary header; counts change with tab actions, so this runs
/// on every activation as well.
fn reload_stats(app: &App, ctx: &Context<App>) {
    let Connection::Ready { service, .. } = &app.connection else {
        return;
    };
    let service = service.0.clone();
    let link = ctx.link().clone();
    spawn_local(async move {
        link.send_message(Msg::StatsLoaded(fetch_stats(service.as_ref()).await));
    });
}

pub fn update(app: &mut App, ctx: &Context<App>, msg: Msg) -> bool {
    match msg {
        Msg::ConfigLoaded(Ok(config)) => {
            log!(format!("connected to {}", config.supabase_url));
            let service = Rc::new(SupabaseService::new(&config));
            app.connection = Connection::Ready {
                service: ServiceHandle(service),
                reviewer: AttrValue::from(config.reviewer),
            };
            reload_stats(app, ctx);
            true
        }

        Msg::ConfigLoaded(Err(err)) => {
            error!(format!("initialisation failed: {}", err));
            alert(CONNECTION_FAILED);
            app.connection = Connection::Failed(err.to_string());
            true
        }

        Msg::Activate(tab) => {
            app.router.activate(tab);
            reload_stats(app, ctx);
            true
        }

        Msg::OpenLawForm => {
            open_top_sheet(app.law_sheet_ref.clone());
            false
        }

        Msg::LawAdded => {
            close_top_sheet(app.law_sheet_ref.clone());
            app.router.activate(Tab::Laws);
            reload_stats(app, ctx);
            true
        }

        Msg::StatsLoaded(Ok(stats)) => {
            app.stats = Some(stats);
            true
        }

        Msg::StatsLoaded(Err(err)) => {
            error!(format!("stats: {}", err));
            false
        }
    }
}
