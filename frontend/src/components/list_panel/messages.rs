use common::model::RecordId;
use common::view::ActionKind;
use common::DashboardError;

pub enum Msg<R> {
    Refresh,
    Loaded(Result<Vec<R>, DashboardError>),
    FilterChanged(String),
    Action(RecordId, ActionKind),
    ActionDone(ActionKind, Result<(), DashboardError>),
    CloseDetail,
}
