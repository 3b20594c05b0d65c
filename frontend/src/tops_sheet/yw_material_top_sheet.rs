use gloo_timers::callback::Timeout;
use uuid::Uuid;
use yew::{html, AttrValue, Callback, Component, Context, Html, NodeRef, Properties};

const SHOWN_CLASS: &str = "show";

/// Overlay panel that slides down from the top of the page.
///
/// Hidden until `open_top_sheet` adds the `show` class to the node behind
/// `node_ref`; the close button and `close_top_sheet` remove it again.
pub struct YwMaterialTopSheet {
    pub id: String,
}

#[derive(Properties, PartialEq)]
pub struct Props {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub title: AttrValue,
    /// Fired after the close button hid the sheet.
    #[prop_or_default]
    pub on_close: Callback<()>,
}

impl Component for YwMaterialTopSheet {
    type Message = ();
    type Properties = Props;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            id: format!("id-{}", Uuid::new_v4()),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let title_id = format!("{}-title", self.id);
        let close = {
            let node_ref = props.node_ref.clone();
            let on_close = props.on_close.clone();
            Callback::from(move |_| {
                close_top_sheet(node_ref.clone());
                on_close.emit(());
            })
        };

        html! {
            <div class="top-sheet" id={self.id.clone()} ref={props.node_ref.clone()}
                 role="dialog" aria-labelledby={title_id.clone()}>
                <div class="top-sheet-panel">
                    <div class="top-sheet-header">
                        <h2 id={title_id}>{ props.title.clone() }</h2>
                        <button class="top-sheet-close" onclick={close}>{ "✕" }</button>
                    </div>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}

pub fn open_top_sheet(top_sheet_ref: NodeRef) {
    set_shown_later(top_sheet_ref, true);
}

pub fn close_top_sheet(top_sheet_ref: NodeRef) {
    set_shown_later(top_sheet_ref, false);
}

// Deferred so a sheet rendered in the same update exists before it animates.
fn set_shown_later(top_sheet_ref: NodeRef, shown: bool) {
    Timeout::new(50, move || {
        if let Some(top_sheet) = top_sheet_ref.cast::<web_sys::Element>() {
            let classes = top_sheet.class_list();
            let result = if shown {
                classes.add_1(SHOWN_CLASS)
            } else {
                classes.remove_1(SHOWN_CLASS)
            };
            if result.is_err() {
                gloo_console::error!("top sheet class update failed");
            }
        }
    })
    .forget();
}
