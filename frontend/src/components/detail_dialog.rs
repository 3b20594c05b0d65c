use common::view::{Detail, DetailSection};
use yew::prelude::*;

use crate::helpers::render_markdown;

/// Body of the detail sheet: a fact table followed by the long text sections.
pub fn detail_view(detail: &Detail) -> Html {
    html! {
        <div class="detail">
            <table class="detail-facts">
                { for detail.facts.iter().map(|(label, value)| html! {
                    <tr><th>{ *label }</th><td>{ value.clone() }</td></tr>
                }) }
            </table>
            { for detail.sections.iter().map(section_view) }
        </div>
    }
}

fn section_view(section: &DetailSection) -> Html {
    html! {
        <section class="detail-section">
            <h3>{ section.heading }</h3>
            if section.markdown {
                <div class="detail-markdown">{ render_markdown(&section.body) }</div>
            } else {
                <pre class="detail-text">{ section.body.clone() }</pre>
            }
        </section>
    }
}
