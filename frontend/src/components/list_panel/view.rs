//! View rendering for the list panel: optional filter control, then either a
//! placeholder (loading, empty, error) or the card list, plus the detail
//! sheet for records that have one.

use common::listing::ListRecord;
use common::view::{ActionButton, Card, Note, NoteStyle, ViewState};
use yew::html::Scope;
use yew::prelude::*;

use crate::components::detail_dialog::detail_view;
use crate::tops_sheet::yw_material_top_sheet::YwMaterialTopSheet;

use super::helpers::selected_value;
use super::messages::Msg;
use super::state::ListPanel;

pub fn view<R: ListRecord>(panel: &ListPanel<R>, ctx: &Context<ListPanel<R>>) -> Html {
    let link = ctx.link();

    html! {
        <div class="list-panel">
            { build_filter(panel, link) }
            { build_body(panel.controller.state(), link) }
            <YwMaterialTopSheet
                node_ref={panel.detail_ref.clone()}
                title={panel.detail.as_ref().map(|d| AttrValue::from(d.title.clone())).unwrap_or_default()}
                on_close={link.callback(|_| Msg::CloseDetail)}
            >
                { panel.detail.as_ref().map(detail_view).unwrap_or_default() }
            </YwMaterialTopSheet>
        </div>
    }
}

fn build_filter<R: ListRecord>(panel: &ListPanel<R>, link: &Scope<ListPanel<R>>) -> Html {
    if R::FILTER_FIELD.is_none() {
        return html! {};
    }
    let current = panel.controller.selection().select_value();
    let onchange = link.batch_callback(|e: Event| selected_value(&e).map(Msg::FilterChanged));

    html! {
        <div class="filters">
            <select class="filter-select" {onchange}>
                { for R::FILTER_OPTIONS.iter().map(|(value, label)| html! {
                    <option value={*value} selected={*value == current}>{ *label }</option>
                }) }
            </select>
        </div>
    }
}

fn build_body<R: ListRecord>(state: &ViewState, link: &Scope<ListPanel<R>>) -> Html {
    match state {
        ViewState::Cards(cards) => html! {
            <div class="card-list">
                { for cards.iter().map(|card| build_card(card, link)) }
            </div>
        },
        ViewState::Failed(message) => html! { <div class="error">{ message.clone() }</div> },
        ViewState::Loading => html! { <div class="loading">{ state.placeholder().unwrap_or_default() }</div> },
        ViewState::Empty(message) => html! { <div class="empty">{ *message }</div> },
        ViewState::Idle => html! {},
    }
}

fn build_card<R: ListRecord>(card: &Card, link: &Scope<ListPanel<R>>) -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <div class="card-title">{ card.title.clone() }</div>
                <span class={classes!("badge", card.badge.tone.css_class())}>{ card.badge.label }</span>
            </div>
            <div class="card-info">
                { for card.info.iter().map(|fact| html! { <span>{ fact.clone() }</span> }) }
            </div>
            { card.note.as_ref().map(build_note).unwrap_or_default() }
            if !card.actions.is_empty() {
                <div class="card-actions">
                    { for card.actions.iter().map(|button| build_button(button, link)) }
                </div>
            }
        </div>
    }
}

fn build_note(note: &Note) -> Html {
    let class = match note.style {
        NoteStyle::Summary => "note-summary",
        NoteStyle::Plain => "note-plain",
        NoteStyle::Muted => "note-muted",
        NoteStyle::Warning => "note-warning",
    };
    html! {
        <div class={classes!("note", class)}>
            if let Some(label) = note.label {
                <strong>{ label }</strong>{ " " }
            }
            { note.text.clone() }
        </div>
    }
}

fn build_button<R: ListRecord>(button: &ActionButton, link: &Scope<ListPanel<R>>) -> Html {
    let (id, action) = (button.record_id, button.action);
    html! {
        <button
            class={classes!("btn", button.style.css_class())}
            onclick={link.callback(move |_| Msg::Action(id, action))}
        >
            { button.label }
        </button>
    }
}
