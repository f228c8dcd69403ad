use crate::infra::Services;
use chrono::{Datelike, Local};
use clap::Args;
use hsga_portal::calendar::{
    fallback_events, CalendarCell, CalendarEvent, MonthCursor, MonthView, NewEvent,
};
use hsga_portal::error::AppError;
use hsga_portal::forms::admission::{AdmissionDraft, AdmissionField, AttachmentSlot, Declarant};
use hsga_portal::forms::registration::{
    InstitutionRegistration, InstitutionType, RecordId, RegistrationStatus, TrainerRegistration,
    UniqueId,
};
use hsga_portal::forms::{FormDraft, PipelineState, SubmissionPipeline, SubmissionTransport};
use hsga_portal::review::ReviewBoard;
use std::fmt::Write as _;

#[derive(Args, Debug, Default)]
pub(crate) struct CalendarArgs {
    /// Year to show (defaults to the current year)
    #[arg(long)]
    pub(crate) year: Option<i32>,
    /// Month to show, 1-12 (defaults to the current month)
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=12))]
    pub(crate) month: Option<u32>,
    /// Step back this many months from the selected month
    #[arg(long, conflicts_with = "next")]
    pub(crate) prev: Option<u32>,
    /// Step forward this many months from the selected month
    #[arg(long)]
    pub(crate) next: Option<u32>,
}

pub(crate) fn run_calendar(args: CalendarArgs) -> Result<(), AppError> {
    let today = Local::now().date_naive();
    let mut cursor = MonthCursor::new(
        args.year.unwrap_or_else(|| today.year()),
        args.month.unwrap_or_else(|| today.month()),
    )?;
    for _ in 0..args.prev.unwrap_or(0) {
        cursor = cursor.prev();
    }
    for _ in 0..args.next.unwrap_or(0) {
        cursor = cursor.next();
    }

    let events = fallback_events();
    let view = MonthView {
        year: cursor.year(),
        month: cursor.month(),
        label: cursor.label(),
        cells: cursor.layout(&events)?,
    };
    print!("{}", render_month(&view));
    Ok(())
}

/// Sunday-first text grid followed by the month's events.
pub(crate) fn render_month(view: &MonthView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.label);
    let _ = writeln!(out, " Sun Mon Tue Wed Thu Fri Sat");

    for week in view.cells.chunks(7) {
        let mut line = String::new();
        for cell in week {
            match cell {
                CalendarCell::Blank => line.push_str("    "),
                CalendarCell::Day { day, events, .. } => {
                    let marker = if events.is_empty() { ' ' } else { '*' };
                    let _ = write!(line, "{day:>3}{marker}");
                }
            }
        }
        let _ = writeln!(out, "{}", line.trim_end());
    }

    let events: Vec<&CalendarEvent> = view.cells.iter().flat_map(CalendarCell::events).collect();
    if events.is_empty() {
        let _ = writeln!(out, "\nEvents: none");
    } else {
        let _ = writeln!(out, "\nEvents");
        for event in events {
            match &event.description {
                Some(description) => {
                    let _ = writeln!(out, "- {} {}: {}", event.date, event.title, description);
                }
                None => {
                    let _ = writeln!(out, "- {} {}", event.date, event.title);
                }
            }
        }
    }
    out
}

pub(crate) async fn run_demo() -> Result<(), AppError> {
    let services = Services::in_memory();

    println!("HSGA portal demo");
    println!("\nRegistration");
    let institution = InstitutionRegistration {
        name: "Zilla Parishad High School, Ghatkesar".to_string(),
        kind: Some(InstitutionType::School),
        contact_name: "K. Sunitha".to_string(),
        phone: "9849012345".to_string(),
        email: "zphs.ghatkesar@example.org".to_string(),
        district: "Medchal".to_string(),
        password: "be-prepared".to_string(),
    };
    let trainer = TrainerRegistration {
        full_name: "Ramesh Naidu".to_string(),
        phone: "9701234567".to_string(),
        email: "ramesh.naidu@example.org".to_string(),
        district: "Medchal".to_string(),
        password: "lend-a-hand".to_string(),
    };
    submit_and_report("Institution", institution, services.registrations.as_ref()).await?;
    submit_and_report("Trainer", trainer, services.registrations.as_ref()).await?;

    println!("\nReview");
    let board = ReviewBoard::new(services.review.clone());
    board.refresh().await.map_err(submission_error)?;
    println!("- {} institution(s) awaiting review", board.pending().len());

    let institution_id = RecordId("inst-000001".to_string());
    let trainer_id = UniqueId("HSGA-TR-0001".to_string());
    match board
        .assign_reviewer(&institution_id, Some(trainer_id.clone()))
        .await
    {
        Ok(()) => println!("- Unexpected: assignment accepted while pending"),
        Err(err) => println!("- Assignment before approval refused: {err}"),
    }

    services
        .review
        .set_reviewer_status(&RecordId("trn-000001".to_string()), RegistrationStatus::Approved)
        .map_err(submission_error)?;
    board
        .set_status(&institution_id, RegistrationStatus::Approved)
        .await
        .map_err(submission_error)?;
    board
        .assign_reviewer(&institution_id, Some(trainer_id))
        .await
        .map_err(submission_error)?;
    for record in board.institutions() {
        println!(
            "- {} {} -> {} (trainer {})",
            record.unique_id,
            record.name,
            record.status.label(),
            record
                .assigned_reviewer_id
                .as_ref()
                .map(|id| id.0.as_str())
                .unwrap_or("Unassigned")
        );
    }

    println!("\nStudent admission");
    let draft = demo_admission_draft()?;
    submit_and_report("Admission", draft, services.admissions.as_ref()).await?;
    let stored = services.admissions.list().map_err(submission_error)?;
    println!("- {} admission form(s) on file", stored.len());

    println!("\nCalendar");
    services.calendar.create(NewEvent {
        title: "District Rally".to_string(),
        date: "2026-01-26".to_string(),
        description: Some("Joint march past with the Republic Day parade".to_string()),
    })?;
    let view = services
        .calendar
        .month_view(MonthCursor::new(2026, 1)?)?;
    print!("{}", render_month(&view));

    Ok(())
}

async fn submit_and_report<D, T>(label: &str, draft: D, transport: &T) -> Result<(), AppError>
where
    D: FormDraft,
    T: SubmissionTransport<D::Payload>,
{
    let mut pipeline = SubmissionPipeline::new(draft);
    let state = pipeline.submit(transport).await.map_err(submission_error)?;
    match state {
        PipelineState::Accepted(receipt) => {
            println!("- {label}: {}", receipt.confirmation());
            Ok(())
        }
        other => Err(AppError::Submission(format!(
            "{label}: {}",
            other.error_message().unwrap_or_default()
        ))),
    }
}

fn demo_admission_draft() -> Result<AdmissionDraft, AppError> {
    let mut draft = AdmissionDraft::default();
    for (field, value) in [
        (AdmissionField::District, "Medchal"),
        (AdmissionField::InstitutionName, "Zilla Parishad High School"),
        (AdmissionField::StudentName, "Priya Sharma"),
        (AdmissionField::GuardianName, "Rajesh Sharma"),
        (AdmissionField::ClassName, "9-A"),
        (AdmissionField::IdentityNumber, "456745674567"),
        (AdmissionField::PhoneNumber, "9912345678"),
        (AdmissionField::Address, "3-14, Main Road, Ghatkesar, Medchal"),
    ] {
        draft
            .set_field(field, value)
            .map_err(|err| AppError::Submission(err.to_string()))?;
    }
    draft
        .set_date_of_birth("2012-03-21")
        .map_err(|err| AppError::Submission(err.to_string()))?;
    draft.set_consent(Declarant::Student, true);
    draft.set_consent(Declarant::Authority, true);

    const PLACEHOLDER_PNG: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";
    for slot in AttachmentSlot::ALL {
        draft.attach(slot, &mime_guess::mime::IMAGE_PNG, PLACEHOLDER_PNG)?;
    }
    Ok(draft)
}

fn submission_error(err: impl std::fmt::Display) -> AppError {
    AppError::Submission(err.to_string())
}
