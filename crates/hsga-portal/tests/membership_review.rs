//! Registration through review: institutions and trainers register through the submission
//! pipeline, an admin approves them on the review board, and a trainer is assigned.

use std::sync::Arc;

use hsga_portal::forms::registration::{
    InstitutionRegistration, InstitutionType, RecordId, RegistrationService, RegistrationStatus,
    TrainerRegistration, UniqueId,
};
use hsga_portal::forms::{PipelineState, SubmissionPipeline};
use hsga_portal::memory::{InMemoryInstitutionRepository, InMemoryReviewerRepository};
use hsga_portal::review::{BoardError, ReviewBoard, ReviewError, ReviewService};

fn institution() -> InstitutionRegistration {
    InstitutionRegistration {
        name: "Kendriya Vidyalaya".to_string(),
        kind: Some(InstitutionType::School),
        contact_name: "S. Padma".to_string(),
        phone: "9440012345".to_string(),
        email: "kv.adilabad@example.org".to_string(),
        district: "Adilabad".to_string(),
        password: "lend-a-hand".to_string(),
    }
}

fn trainer() -> TrainerRegistration {
    TrainerRegistration {
        full_name: "Venkat Rao".to_string(),
        phone: "6300123456".to_string(),
        email: "venkat.rao@example.org".to_string(),
        district: "Adilabad".to_string(),
        password: "always-ready".to_string(),
    }
}

#[tokio::test]
async fn registered_institution_is_approved_and_assigned_a_trainer() {
    let institutions = Arc::new(InMemoryInstitutionRepository::default());
    let reviewers = Arc::new(InMemoryReviewerRepository::default());
    let registration = RegistrationService::new(institutions.clone(), reviewers.clone());

    let mut institution_form = SubmissionPipeline::new(institution());
    institution_form
        .submit(&registration)
        .await
        .expect("submit runs");
    match institution_form.state() {
        PipelineState::Accepted(receipt) => {
            assert_eq!(receipt.unique_id.as_deref(), Some("HSGA-INST-0001"));
        }
        other => panic!("expected acceptance, got {other:?}"),
    }

    let mut trainer_form = SubmissionPipeline::new(trainer());
    trainer_form.submit(&registration).await.expect("submit runs");
    assert!(matches!(trainer_form.state(), PipelineState::Accepted(_)));

    let board = ReviewBoard::new(ReviewService::new(institutions, reviewers));
    board.refresh().await.expect("refresh");
    assert_eq!(board.pending().len(), 1);
    assert!(board.reviewers().is_empty(), "trainer awaits approval");

    let institution_id = RecordId("inst-000001".to_string());
    let trainer_id = UniqueId("HSGA-TR-0001".to_string());

    match board
        .assign_reviewer(&institution_id, Some(trainer_id.clone()))
        .await
    {
        Err(BoardError::Console(ReviewError::NotApproved { status, .. })) => {
            assert_eq!(status, RegistrationStatus::Pending);
        }
        other => panic!("expected precondition failure, got {other:?}"),
    }

    board
        .console()
        .set_reviewer_status(&RecordId("trn-000001".to_string()), RegistrationStatus::Approved)
        .expect("trainer approved");
    board
        .set_status(&institution_id, RegistrationStatus::Approved)
        .await
        .expect("institution approved");
    assert_eq!(board.reviewers().len(), 1);

    board
        .assign_reviewer(&institution_id, Some(trainer_id.clone()))
        .await
        .expect("assigned");

    let records = board.institutions();
    assert_eq!(records[0].status, RegistrationStatus::Approved);
    assert_eq!(records[0].assigned_reviewer_id, Some(trainer_id));
    assert!(board.pending().is_empty());
}
