//! "Add law" form shown inside the laws tab's top sheet.

use common::requests::{insert_law, NewLaw};
use common::view::state::ERROR_PREFIX;
use common::DashboardError;
use gloo_console::{error, log};
use web_sys::{HtmlFormElement, HtmlInputElement};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{alert, show_toast};
use crate::services::ServiceHandle;

pub enum Msg {
    Submit,
    Saved(Result<(), DashboardError>),
}

#[derive(Properties, PartialEq)]
pub struct LawFormProps {
    pub service: ServiceHandle,
    /// Called after the law was stored; the parent closes the sheet and
    /// reloads the registry.
    pub on_saved: Callback<()>,
}

pub struct LawForm {
    form_ref: NodeRef,
    name_ref: NodeRef,
    type_ref: NodeRef,
    department_ref: NodeRef,
    manager_ref: NodeRef,
    saving: bool,
}

impl LawForm {
    fn read(&self) -> NewLaw {
        let value = |node: &NodeRef| {
            node.cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default()
        };
        NewLaw {
            law_name: value(&self.name_ref),
            law_type: value(&self.type_ref),
            department: value(&self.department_ref),
            manager: value(&self.manager_ref),
        }
    }

    fn reset(&self) {
        if let Some(form) = self.form_ref.cast::<HtmlFormElement>() {
            form.reset();
        }
    }
}

impl Component for LawForm {
    type Message = Msg;
    type Properties = LawFormProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form_ref: NodeRef::default(),
            name_ref: NodeRef::default(),
            type_ref: NodeRef::default(),
            department_ref: NodeRef::default(),
            manager_ref: NodeRef::default(),
            saving: false,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Submit => {
                if self.saving {
                    return false;
                }
                let law = self.read();
                if law.law_name.trim().is_empty() {
                    alert("법령명을 입력해주세요.");
                    return false;
                }

                self.saving = true;
                let service = ctx.props().service.0.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let outcome = insert_law(service.as_ref(), law).await;
                    link.send_message(Msg::Saved(outcome));
                });
                true
            }
            Msg::Saved(Ok(())) => {
                self.saving = false;
                log!("law_master: law added");
                show_toast("법령이 추가되었습니다.");
                self.reset();
                ctx.props().on_saved.emit(());
                true
            }
            Msg::Saved(Err(err)) => {
                self.saving = false;
                error!(format!("law_master: insert failed: {}", err));
                alert(&format!("{}{}", ERROR_PREFIX, err));
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <form class="law-form" ref={self.form_ref.clone()} {onsubmit}>
                <label>
                    { "법령명" }
                    <input type="text" required={true} placeholder="예: 산업안전보건법" ref={self.name_ref.clone()} />
                </label>
                <label>
                    { "법령 유형" }
                    <input type="text" placeholder="법률 / 시행령 / 시행규칙" ref={self.type_ref.clone()} />
                </label>
                <label>
                    { "담당 부서" }
                    <input type="text" ref={self.department_ref.clone()} />
                </label>
                <label>
                    { "담당자" }
                    <input type="text" ref={self.manager_ref.clone()} />
                </label>
                <button type="submit" class="btn btn-complete" disabled={self.saving}>
                    { if self.saving { "저장 중..." } else { "추가" } }
                </button>
            </form>
        }
    }
}
