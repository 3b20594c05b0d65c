use yew::prelude::*;

use crate::services::ServiceHandle;

/// Properties of a `ListPanel`.
#[derive(Properties, PartialEq, Clone)]
pub struct ListPanelProps {
    pub service: ServiceHandle,

    /// Recorded as reviewer on "mark reviewed".
    pub reviewer: AttrValue,

    /// Whether the panel's tab is the visible one. Hidden panels never load.
    pub active: bool,

    /// Tab router generation. A visible panel reloads whenever it sees a
    /// value it has not loaded for yet, so clicking the current tab again
    /// still refreshes it.
    pub refresh_token: u64,
}
