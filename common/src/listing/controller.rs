use super::{ActionContext, ListRecord, UpdateRequest};
use crate::error::DashboardError;
use crate::model::RecordId;
use crate::model::entity::EntityKind;
use crate::query::{FilterSelection, Query};
use crate::service::SharedService;
use crate::view::{ActionKind, ViewState};
use log::{debug, warn};
use std::future::Future;
use std::rc::Rc;

/// Fetches, holds and renders one table's filtered list.
///
/// The record sequence is owned here and only ever replaced as a whole. There
/// is no cache: every `refresh` queries the service again, and every
/// successful action is followed by a `refresh` so the view shows server
/// state instead of a local guess.
///
/// For event loops that cannot hold `&mut self` across an await (a Yew
/// component), `load`/`submit` hand out `'static` futures and
/// `apply_outcome` feeds the result back; `refresh` and `apply_action` are
/// those steps chained for callers that can.
pub struct ListViewController<R: ListRecord> {
    service: SharedService,
    selection: FilterSelection,
    records: Vec<R>,
    state: ViewState,
}

impl<R: ListRecord> ListViewController<R> {
    pub fn new(service: SharedService) -> Self {
        Self {
            service,
            selection: FilterSelection::All,
            records: Vec::new(),
            state: ViewState::Idle,
        }
    }

    pub fn kind(&self) -> EntityKind {
        R::KIND
    }

    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    /// Change the filter. Takes effect on the next refresh.
    pub fn set_filter(&mut self, selection: FilterSelection) {
        self.selection = selection;
    }

    /// Parse and apply a filter control value.
    pub fn select_filter(&mut self, raw: &str) -> Result<(), DashboardError> {
        self.set_filter(R::parse_filter(raw)?);
        Ok(())
    }

    pub fn query(&self) -> Query {
        Query::for_entity(R::KIND).with_filter(self.selection.to_filter(R::FILTER_FIELD))
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    pub fn find(&self, id: RecordId) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn begin_loading(&mut self) {
        self.state = ViewState::Loading;
    }

    /// Query for the current filter, detached from `self`.
    pub fn load(&self) -> impl Future<Output = Result<Vec<R>, DashboardError>> + use<R> {
        let service = Rc::clone(&self.service);
        let query = self.query();
        async move {
            debug!("query {} {:?}", R::KIND.table(), query.params());
            let rows = service.query(R::KIND, &query).await?;
            rows.into_iter()
                .map(|row| serde_json::from_value::<R>(row).map_err(DashboardError::from))
                .collect()
        }
    }

    /// Replace the list with the outcome of a `load`.
    pub fn apply_outcome(&mut self, outcome: Result<Vec<R>, DashboardError>) {
        match outcome {
            Ok(records) if records.is_empty() => {
                self.records = records;
                self.state = ViewState::Empty(R::EMPTY_MESSAGE);
            }
            Ok(records) => {
                self.state = ViewState::Cards(records.iter().map(ListRecord::card).collect());
                self.records = records;
            }
            Err(err) => {
                warn!("loading {} failed: {}", R::KIND.table(), err);
                self.records.clear();
                self.state = ViewState::failed(err);
            }
        }
    }

    pub async fn refresh(&mut self) {
        self.begin_loading();
        let outcome = self.load().await;
        self.apply_outcome(outcome);
    }

    /// Build the update for `action` on a currently listed record.
    ///
    /// `Ok(None)` for actions that do not touch the remote side.
    pub fn action_request(
        &self,
        id: RecordId,
        action: ActionKind,
        ctx: &ActionContext,
    ) -> Result<Option<UpdateRequest>, DashboardError> {
        if !action.is_mutation() {
            return Ok(None);
        }
        let record = self.find(id).ok_or(DashboardError::RecordNotFound(id))?;
        let fields = record.update_fields(action, ctx)?;
        Ok(Some(UpdateRequest {
            entity: R::KIND,
            id,
            fields,
        }))
    }

    /// Send an update, detached from `self`.
    pub fn submit(
        &self,
        request: UpdateRequest,
    ) -> impl Future<Output = Result<(), DashboardError>> + use<R> {
        let service = Rc::clone(&self.service);
        async move { request.send(service.as_ref()).await }
    }

    /// Apply `action` and refetch. On failure nothing local changes.
    pub async fn apply_action(
        &mut self,
        id: RecordId,
        action: ActionKind,
        ctx: &ActionContext,
    ) -> Result<(), DashboardError> {
        let Some(request) = self.action_request(id, action, ctx)? else {
            return Ok(());
        };
        if let Err(err) = self.submit(request).await {
            warn!("{:?} on {} {} failed: {}", action, R::KIND.table(), id, err);
            return Err(err);
        }
        self.refresh().await;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::amendment::Amendment;
    use crate::model::law::LawEntry;
    use crate::model::log_entry::LogEntry;
    use crate::model::task::{Task, TaskStatus};
    use crate::service::memory::MemoryService;
    use crate::view::preview::{PREVIEW_CHARS, TRUNCATION_MARKER};
    use serde_json::{Value, json};
    use std::collections::HashSet;

    fn ctx() -> ActionContext {
        ActionContext::now("검토자")
    }

    fn controller<R: ListRecord>(service: &Rc<MemoryService>) -> ListViewController<R> {
        let shared: SharedService = service.clone();
        ListViewController::new(shared)
    }

    fn amendment_rows() -> Vec<Value> {
        vec![
            json!({"id": 1, "law_code": "A", "amendment_date": "2025-01-10", "is_reviewed": true, "reviewer": "kim", "review_date": "2025-01-11T00:00:00Z"}),
            json!({"id": 2, "law_code": "B", "amendment_date": "2025-03-02", "is_reviewed": false}),
            json!({"id": 3, "law_code": "C", "amendment_date": "2024-12-24", "is_reviewed": false}),
            json!({"id": 4, "law_code": "D", "amendment_date": "2025-02-14", "is_reviewed": true, "reviewer": "lee", "review_date": "2025-02-15T00:00:00Z"}),
            json!({"id": 5, "law_code": "E", "amendment_date": "2025-05-01", "is_reviewed": null}),
        ]
    }

    fn task_rows() -> Vec<Value> {
        vec![
            json!({"id": 10, "task_title": "매뉴얼 수정", "status": "pending", "priority": "high", "created_at": "2025-03-01T00:00:00Z"}),
            json!({"id": 11, "task_title": "교육 실시", "status": "in_progress", "priority": "medium", "created_at": "2025-03-02T00:00:00Z"}),
            json!({"id": 12, "task_title": "문서 개정", "status": "completed", "completed_date": "2025-03-05T00:00:00Z", "created_at": "2025-03-03T00:00:00Z"}),
        ]
    }

    async fn assert_empty_placeholder<R: ListRecord>() {
        let service = Rc::new(MemoryService::default());
        let mut view = controller::<R>(&service);
        view.refresh().await;
        assert_eq!(view.state(), &ViewState::Empty(R::EMPTY_MESSAGE));
        assert_eq!(view.state().placeholder(), Some(R::EMPTY_MESSAGE));
        assert!(view.state().cards().is_empty());
        assert!(view.records().is_empty());
    }

    #[tokio::test]
    async fn empty_result_renders_only_placeholder() {
        assert_empty_placeholder::<Amendment>().await;
        assert_empty_placeholder::<LawEntry>().await;
        assert_empty_placeholder::<Task>().await;
        assert_empty_placeholder::<LogEntry>().await;
    }

    async fn assert_failure_clears_cards<R: ListRecord>(row: Value) {
        let service = Rc::new(MemoryService::with_rows(R::KIND, vec![row]));
        let mut view = controller::<R>(&service);
        view.refresh().await;
        assert_eq!(view.state().cards().len(), 1);

        service.set_failure(Some(DashboardError::Http {
            status: 503,
            message: "upstream unavailable".into(),
        }));
        view.refresh().await;

        let placeholder = view.state().placeholder().unwrap();
        assert!(view.state().is_error());
        assert!(placeholder.contains("upstream unavailable"));
        assert!(view.state().cards().is_empty());
        assert!(view.records().is_empty());
    }

    #[tokio::test]
    async fn query_failure_renders_error_without_stale_cards() {
        assert_failure_clears_cards::<Amendment>(json!({"id": 1, "is_reviewed": false})).await;
        assert_failure_clears_cards::<LawEntry>(json!({"id": 1, "law_name": "x", "is_active": true}))
            .await;
        assert_failure_clears_cards::<Task>(json!({"id": 1, "status": "pending"})).await;
        assert_failure_clears_cards::<LogEntry>(json!({"id": 1, "status": "success"})).await;
    }

    #[tokio::test]
    async fn undecodable_row_is_a_query_failure() {
        let service = Rc::new(MemoryService::with_rows(
            EntityKind::Task,
            vec![json!({"id": 1, "status": "archived"})],
        ));
        let mut view = controller::<Task>(&service);
        view.refresh().await;
        assert!(view.state().is_error());
    }

    #[tokio::test]
    async fn task_buttons_follow_status() {
        let service = Rc::new(MemoryService::with_rows(EntityKind::Task, task_rows()));
        let mut view = controller::<Task>(&service);
        view.refresh().await;

        let actions_of = |id: i64| -> Vec<ActionKind> {
            view.state()
                .cards()
                .iter()
                .find(|card| card.record_id == RecordId(id))
                .unwrap()
                .actions
                .iter()
                .map(|button| button.action)
                .collect()
        };
        assert_eq!(
            actions_of(10),
            vec![
                ActionKind::SetStatus(TaskStatus::InProgress),
                ActionKind::SetStatus(TaskStatus::Completed)
            ]
        );
        assert_eq!(actions_of(11), vec![ActionKind::SetStatus(TaskStatus::Completed)]);
        assert!(actions_of(12).is_empty());
    }

    #[tokio::test]
    async fn completing_a_task_sets_timestamp_in_same_update() {
        let service = Rc::new(MemoryService::with_rows(EntityKind::Task, task_rows()));
        let mut view = controller::<Task>(&service);
        view.refresh().await;

        view.apply_action(RecordId(11), ActionKind::SetStatus(TaskStatus::Completed), &ctx())
            .await
            .unwrap();

        let updates = service.updates.borrow();
        assert_eq!(updates.len(), 1);
        let (entity, id, fields) = &updates[0];
        assert_eq!(*entity, EntityKind::Task);
        assert_eq!(*id, RecordId(11));
        assert_eq!(fields.get("status"), Some(&json!("completed")));
        assert!(fields.get("completed_date").and_then(Value::as_str).is_some());

        // Refetched after the update: the card now shows no buttons.
        let card = view
            .state()
            .cards()
            .iter()
            .find(|card| card.record_id == RecordId(11))
            .unwrap();
        assert!(card.actions.is_empty());
        assert_eq!(service.queries.borrow().len(), 2);
    }

    #[tokio::test]
    async fn starting_a_task_does_not_set_completion() {
        let service = Rc::new(MemoryService::with_rows(EntityKind::Task, task_rows()));
        let mut view = controller::<Task>(&service);
        view.refresh().await;
        view.apply_action(RecordId(10), ActionKind::SetStatus(TaskStatus::InProgress), &ctx())
            .await
            .unwrap();

        let updates = service.updates.borrow();
        let fields = &updates[0].2;
        assert_eq!(fields.get("status"), Some(&json!("in_progress")));
        assert!(!fields.contains_key("completed_date"));
    }

    #[tokio::test]
    async fn backward_transition_is_rejected_locally() {
        let service = Rc::new(MemoryService::with_rows(EntityKind::Task, task_rows()));
        let mut view = controller::<Task>(&service);
        view.refresh().await;

        let err = view
            .apply_action(RecordId(12), ActionKind::SetStatus(TaskStatus::Pending), &ctx())
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DashboardError::InvalidTransition {
                from: TaskStatus::Completed,
                to: TaskStatus::Pending
            }
        );
        assert!(service.updates.borrow().is_empty());
    }

    #[tokio::test]
    async fn mark_reviewed_button_matches_flag() {
        let service = Rc::new(MemoryService::with_rows(EntityKind::Amendment, amendment_rows()));
        let mut view = controller::<Amendment>(&service);
        view.refresh().await;

        for (record, card) in view.records().iter().zip(view.state().cards()) {
            assert_eq!(record.id, card.record_id);
            assert_eq!(card.has_action(ActionKind::MarkReviewed), !record.is_reviewed);
            assert!(card.has_action(ActionKind::ViewDetail));
        }
    }

    #[tokio::test]
    async fn mark_reviewed_writes_reviewer_and_refetches() {
        let service = Rc::new(MemoryService::with_rows(EntityKind::Amendment, amendment_rows()));
        let mut view = controller::<Amendment>(&service);
        view.refresh().await;

        view.apply_action(RecordId(2), ActionKind::MarkReviewed, &ctx())
            .await
            .unwrap();

        let updates = service.updates.borrow();
        let fields = &updates[0].2;
        assert_eq!(fields.get("is_reviewed"), Some(&json!(true)));
        assert_eq!(fields.get("reviewer"), Some(&json!("검토자")));
        assert!(fields.contains_key("review_date"));

        let refreshed = view.find(RecordId(2)).unwrap();
        assert!(refreshed.is_reviewed);
        assert!(refreshed.review_fields_consistent());
    }

    #[tokio::test]
    async fn failed_update_leaves_view_untouched() {
        let service = Rc::new(MemoryService::with_rows(EntityKind::Amendment, amendment_rows()));
        let mut view = controller::<Amendment>(&service);
        view.refresh().await;
        let before = view.state().clone();

        service.set_failure(Some(DashboardError::Transport("offline".into())));
        let err = view
            .apply_action(RecordId(2), ActionKind::MarkReviewed, &ctx())
            .await
            .unwrap_err();

        assert_eq!(err, DashboardError::Transport("offline".into()));
        assert_eq!(view.state(), &before);
        assert!(!view.find(RecordId(2)).unwrap().is_reviewed);
        assert_eq!(service.queries.borrow().len(), 1);
    }

    #[tokio::test]
    async fn unknown_record_is_rejected() {
        let service = Rc::new(MemoryService::with_rows(EntityKind::Amendment, amendment_rows()));
        let view = controller::<Amendment>(&service);
        let err = view
            .action_request(RecordId(2), ActionKind::MarkReviewed, &ctx())
            .unwrap_err();
        assert_eq!(err, DashboardError::RecordNotFound(RecordId(2)));
    }

    #[tokio::test]
    async fn view_detail_sends_nothing() {
        let service = Rc::new(MemoryService::with_rows(EntityKind::Amendment, amendment_rows()));
        let mut view = controller::<Amendment>(&service);
        view.refresh().await;
        view.apply_action(RecordId(1), ActionKind::ViewDetail, &ctx())
            .await
            .unwrap();
        assert!(service.updates.borrow().is_empty());
        assert_eq!(service.queries.borrow().len(), 1);
    }

    async fn ids_for(view: &mut ListViewController<Amendment>, raw: &str) -> Vec<RecordId> {
        view.select_filter(raw).unwrap();
        view.refresh().await;
        let dates: Vec<_> = view.records().iter().map(|r| r.amendment_date.clone()).collect();
        let mut sorted = dates.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(dates, sorted, "filter {raw} not sorted newest first");
        view.records().iter().map(|r| r.id).collect()
    }

    #[tokio::test]
    async fn reviewed_filters_partition_the_list() {
        let service = Rc::new(MemoryService::with_rows(EntityKind::Amendment, amendment_rows()));
        let mut view = controller::<Amendment>(&service);

        let reviewed = ids_for(&mut view, "true").await;
        let pending = ids_for(&mut view, "false").await;
        let all = ids_for(&mut view, "all").await;

        assert_eq!(reviewed, vec![RecordId(4), RecordId(1)]);
        // Row 5 has a null flag and still counts as unreviewed.
        assert_eq!(pending, vec![RecordId(5), RecordId(2), RecordId(3)]);
        let sent = service.queries.borrow()[1].params();
        assert!(sent.contains(&("is_reviewed".to_string(), "not.is.true".to_string())));

        let reviewed_set: HashSet<_> = reviewed.iter().collect();
        let pending_set: HashSet<_> = pending.iter().collect();
        assert!(reviewed_set.is_disjoint(&pending_set));
        let union: HashSet<_> = reviewed_set.union(&pending_set).copied().collect();
        let all_set: HashSet<_> = all.iter().collect();
        assert_eq!(union, all_set);
        assert_eq!(all.len(), reviewed.len() + pending.len());
    }

    #[tokio::test]
    async fn long_summary_is_truncated_on_card() {
        let long = "가".repeat(PREVIEW_CHARS + 40);
        let short = "짧은 요약";
        let service = Rc::new(MemoryService::with_rows(
            EntityKind::Amendment,
            vec![
                json!({"id": 1, "amendment_date": "2025-01-01", "summary": long}),
                json!({"id": 2, "amendment_date": "2025-01-02", "summary": short}),
            ],
        ));
        let mut view = controller::<Amendment>(&service);
        view.refresh().await;

        let notes: Vec<_> = view
            .state()
            .cards()
            .iter()
            .map(|card| card.note.as_ref().unwrap().text.clone())
            .collect();
        assert_eq!(notes[0], short);
        let cut = notes[1].strip_suffix(TRUNCATION_MARKER).unwrap();
        assert_eq!(cut.chars().count(), PREVIEW_CHARS);
    }

    #[tokio::test]
    async fn log_query_is_limited_and_read_only() {
        let rows = (1..=60)
            .map(|i| json!({"id": i, "status": "success", "check_date": format!("2025-01-01T00:{:02}:00Z", i % 60)}))
            .collect();
        let service = Rc::new(MemoryService::with_rows(EntityKind::Log, rows));
        let mut view = controller::<LogEntry>(&service);
        view.refresh().await;
        assert_eq!(view.records().len(), 50);
        assert_eq!(service.queries.borrow()[0].limit, Some(50));

        let newest = view.records()[0].id;
        let err = view
            .action_request(newest, ActionKind::MarkReviewed, &ctx())
            .unwrap_err();
        assert!(matches!(err, DashboardError::Validation(_)));
    }

    #[tokio::test]
    async fn toggling_a_law_flips_active() {
        let service = Rc::new(MemoryService::with_rows(
            EntityKind::Law,
            vec![json!({"id": 3, "law_name": "산업안전보건법", "is_active": true, "created_at": "2025-01-01T00:00:00Z"})],
        ));
        let mut view = controller::<LawEntry>(&service);
        view.refresh().await;
        assert!(view.state().cards()[0].has_action(ActionKind::SetActive(false)));

        view.apply_action(RecordId(3), ActionKind::SetActive(false), &ctx())
            .await
            .unwrap();
        assert!(!view.find(RecordId(3)).unwrap().is_active);
        assert!(view.state().cards()[0].has_action(ActionKind::SetActive(true)));
    }

    #[test]
    fn bad_filter_value_is_rejected() {
        let service = Rc::new(MemoryService::default());
        let mut view = controller::<Task>(&service);
        assert!(view.select_filter("archived").is_err());
        assert_eq!(view.selection(), &FilterSelection::All);
        view.select_filter("completed").unwrap();
        assert_eq!(view.selection().select_value(), "completed");
    }
}
