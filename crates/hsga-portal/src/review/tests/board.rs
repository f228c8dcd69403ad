use std::sync::Arc;

use super::common::*;
use crate::forms::registration::{
    Institution, RecordId, RegistrationStatus, ReviewerSummary, UniqueId,
};
use crate::review::board::{AdminConsole, BoardError, ReviewBoard};
use crate::review::workflow::ReviewError;

#[tokio::test]
async fn refresh_loads_pending_institutions_and_approved_trainers() {
    let (service, _, _) = build_service();
    let board = ReviewBoard::new(service);
    assert!(board.institutions().is_empty());

    board.refresh().await.expect("refresh");

    let pending: Vec<String> = board
        .pending()
        .into_iter()
        .map(|record| record.id.0)
        .collect();
    assert_eq!(pending, ["inst-000001"]);
    assert_eq!(board.institutions().len(), 2);
    assert_eq!(board.reviewers().len(), 1);
}

#[tokio::test]
async fn successful_mutations_refetch_the_lists() {
    let (service, _, _) = build_service();
    let board = ReviewBoard::new(service);
    board.refresh().await.expect("refresh");

    board
        .set_status(&record_id("inst-000001"), RegistrationStatus::Approved)
        .await
        .expect("status changes");
    assert!(board.pending().is_empty());

    board
        .assign_reviewer(&record_id("inst-000001"), Some(unique_id("HSGA-TR-0001")))
        .await
        .expect("assigned");
    let record = board
        .institutions()
        .into_iter()
        .find(|record| record.id == record_id("inst-000001"))
        .expect("present");
    assert_eq!(record.assigned_reviewer_id, Some(unique_id("HSGA-TR-0001")));
}

#[tokio::test]
async fn failed_mutations_keep_the_snapshot() {
    let (service, institutions, _) = build_service();
    let board = ReviewBoard::new(service);
    board.refresh().await.expect("refresh");

    crate::forms::registration::InstitutionRepository::update(
        institutions.as_ref(),
        institution(1, RegistrationStatus::Declined),
    )
    .expect("external update");

    match board
        .assign_reviewer(&record_id("inst-000001"), Some(unique_id("HSGA-TR-0001")))
        .await
    {
        Err(BoardError::Console(ReviewError::NotApproved { .. })) => {}
        other => panic!("expected refused assignment, got {other:?}"),
    }
    assert_eq!(board.pending().len(), 1, "snapshot is not refreshed on failure");
    assert!(!board.is_busy(&record_id("inst-000001")));
}

/// Console whose mutations yield once before completing, so two calls can overlap.
struct YieldingConsole {
    inner: Service,
}

impl AdminConsole for YieldingConsole {
    type Error = ReviewError;

    async fn institutions(&self) -> Result<Vec<Institution>, ReviewError> {
        self.inner.institutions()
    }

    async fn approved_reviewers(&self) -> Result<Vec<ReviewerSummary>, ReviewError> {
        self.inner.approved_reviewers()
    }

    async fn set_status(
        &self,
        id: &RecordId,
        status: RegistrationStatus,
    ) -> Result<(), ReviewError> {
        tokio::task::yield_now().await;
        self.inner.set_status(id, status).map(|_| ())
    }

    async fn assign_reviewer(
        &self,
        id: &RecordId,
        reviewer: Option<UniqueId>,
    ) -> Result<(), ReviewError> {
        tokio::task::yield_now().await;
        self.inner.assign_reviewer(id, reviewer).map(|_| ())
    }
}

#[tokio::test]
async fn second_action_on_a_busy_record_is_refused() {
    let (service, _, _) = build_service();
    let board = Arc::new(ReviewBoard::new(YieldingConsole { inner: service }));
    let id = record_id("inst-000001");
    let other_id = record_id("inst-000002");

    let (first, second, other_record) = tokio::join!(
        board.set_status(&id, RegistrationStatus::Approved),
        board.set_status(&id, RegistrationStatus::Declined),
        board.set_status(&other_id, RegistrationStatus::Declined),
    );

    first.expect("first action completes");
    match second {
        Err(BoardError::Busy(busy)) => assert_eq!(busy, id),
        other => panic!("expected busy refusal, got {other:?}"),
    }
    other_record.expect("other records are independent");
    assert!(!board.is_busy(&id));

    let approved = board
        .institutions()
        .into_iter()
        .find(|record| record.id == id)
        .expect("present");
    assert_eq!(approved.status, RegistrationStatus::Approved);
}
