use common::listing::{ListRecord, ListViewController};
use common::router::RefreshGate;
use common::service::SharedService;
use common::view::Detail;
use yew::prelude::*;

/// One tab's list: a controller plus the bits of UI state around it.
pub struct ListPanel<R: ListRecord> {
    pub controller: ListViewController<R>,
    pub refresh: RefreshGate,

    /// Record shown in the detail sheet, if one was opened.
    pub detail: Option<Detail>,
    pub detail_ref: NodeRef,
}

impl<R: ListRecord> ListPanel<R> {
    pub fn new(service: SharedService) -> Self {
        Self {
            controller: ListViewController::new(service),
            refresh: RefreshGate::default(),
            detail: None,
            detail_ref: NodeRef::default(),
        }
    }
}
