use hsga_portal::calendar::CalendarService;
use hsga_portal::forms::admission::AdmissionService;
use hsga_portal::forms::registration::RegistrationService;
use hsga_portal::memory::{
    InMemoryAdmissionRepository, InMemoryEventRepository, InMemoryInstitutionRepository,
    InMemoryReviewerRepository,
};
use hsga_portal::review::ReviewService;
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) type Admissions = AdmissionService<InMemoryAdmissionRepository>;
pub(crate) type Registrations =
    RegistrationService<InMemoryInstitutionRepository, InMemoryReviewerRepository>;
pub(crate) type Review = ReviewService<InMemoryInstitutionRepository, InMemoryReviewerRepository>;
pub(crate) type Calendar = CalendarService<InMemoryEventRepository>;

/// Domain services wired to process-local storage. Registration and review share the same
/// institution and trainer repositories.
#[derive(Clone)]
pub(crate) struct Services {
    pub(crate) admissions: Arc<Admissions>,
    pub(crate) registrations: Arc<Registrations>,
    pub(crate) review: Arc<Review>,
    pub(crate) calendar: Arc<Calendar>,
}

impl Services {
    pub(crate) fn in_memory() -> Self {
        let institutions = Arc::new(InMemoryInstitutionRepository::default());
        let reviewers = Arc::new(InMemoryReviewerRepository::default());

        Self {
            admissions: Arc::new(AdmissionService::new(Arc::new(
                InMemoryAdmissionRepository::default(),
            ))),
            registrations: Arc::new(RegistrationService::new(
                institutions.clone(),
                reviewers.clone(),
            )),
            review: Arc::new(ReviewService::new(institutions, reviewers)),
            calendar: Arc::new(CalendarService::new(Arc::new(
                InMemoryEventRepository::default(),
            ))),
        }
    }
}
