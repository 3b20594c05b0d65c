use common::listing::ListRecord;
use common::model::amendment::Amendment;
use common::model::law::LawEntry;
use common::model::log_entry::LogEntry;
use common::model::task::Task;
use common::router::Tab;
use common::view::state::LOADING_MESSAGE;
use common::DashboardError;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::law_form::LawForm;
use crate::components::list_panel::ListPanel;
use crate::services::ServiceHandle;
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

use super::messages::Msg;
use super::state::{App, Connection};

pub fn view(app: &App, ctx: &Context<App>) -> Html {
    let link = ctx.link();

    html! {
        <div class="container">
            <header class="header">
                <h1>{ "⚖️ 법령 개정 모니터링" }</h1>
                <p>{ "안전보건 관련 법령의 개정 사항을 추적하고 후속 업무를 관리합니다." }</p>
            </header>
            { build_stats(app) }
            { build_tab_bar(app, link) }
            {
                match &app.connection {
                    Connection::Pending => html! { <div class="loading">{ LOADING_MESSAGE }</div> },
                    Connection::Failed(message) => html! {
                        <div class="error">{ format!("{}: {}", DashboardError::NotInitialized, message) }</div>
                    },
                    Connection::Ready { service, reviewer } => build_panels(app, link, service, reviewer),
                }
            }
        </div>
    }
}

fn build_stats(app: &App) -> Html {
    if !matches!(app.connection, Connection::Ready { .. }) {
        return html! {};
    }
    let tiles = app.stats.unwrap_or_default().tiles();
    let loaded = app.stats.is_some();
    html! {
        <section class="stats">
            { for tiles.into_iter().map(|(label, value)| html! {
                <div class="stat-card">
                    <div class="stat-value">{ if loaded { value.to_string() } else { "-".to_string() } }</div>
                    <div class="stat-label">{ label }</div>
                </div>
            }) }
        </section>
    }
}

fn build_tab_bar(app: &App, link: &Scope<App>) -> Html {
    html! {
        <nav class="tabs">
            { for Tab::ALL.into_iter().map(|tab| html! {
                <button
                    class={classes!("tab", app.router.is_active(tab).then_some("active"))}
                    data-tab={tab.id()}
                    onclick={link.callback(move |_| Msg::Activate(tab))}
                >
                    { tab.label() }
                </button>
            }) }
        </nav>
    }
}

fn build_panels(app: &App, link: &Scope<App>, service: &ServiceHandle, reviewer: &AttrValue) -> Html {
    let token = app.router.generation();
    let on_saved = link.callback(|_| Msg::LawAdded);

    html! {
        <>
            { tab_content::<Amendment>(app, Tab::Amendments, service, reviewer, token, html! {}) }
            { tab_content::<LawEntry>(app, Tab::Laws, service, reviewer, token, html! {
                <div class="panel-toolbar">
                    <button class="btn btn-complete" onclick={link.callback(|_| Msg::OpenLawForm)}>
                        { "+ 법령 추가" }
                    </button>
                </div>
            }) }
            { tab_content::<Task>(app, Tab::Tasks, service, reviewer, token, html! {}) }
            { tab_content::<LogEntry>(app, Tab::Logs, service, reviewer, token, html! {}) }

            <YwMaterialTopSheet node_ref={app.law_sheet_ref.clone()} title="법령 추가">
                <LawForm service={service.clone()} {on_saved} />
            </YwMaterialTopSheet>
        </>
    }
}

fn tab_content<R: ListRecord>(
    app: &App,
    tab: Tab,
    service: &ServiceHandle,
    reviewer: &AttrValue,
    token: u64,
    toolbar: Html,
) -> Html {
    let active = app.router.is_active(tab);
    html! {
        <div class={classes!("tab-content", active.then_some("active"))} id={format!("{}-tab", tab.id())}>
            { toolbar }
            <ListPanel<R>
                service={service.clone()}
                reviewer={reviewer.clone()}
                {active}
                refresh_token={token}
            />
        </div>
    }
}
