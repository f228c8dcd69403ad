//! Admin dashboard state: the last fetched institution and trainer lists plus the set of
//! records with an action in flight. Every successful mutation is followed by a full
//! re-fetch; a failed mutation leaves the previous snapshot untouched.

use std::collections::HashSet;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use super::workflow::{ReviewError, ReviewService};
use crate::forms::registration::{
    Institution, InstitutionRepository, RecordId, RegistrationStatus, ReviewerRepository,
    ReviewerSummary, UniqueId,
};

/// Remote (or in-process) admin API the board talks to.
pub trait AdminConsole: Send + Sync {
    type Error: std::error::Error + Send + 'static;

    fn institutions(&self) -> impl Future<Output = Result<Vec<Institution>, Self::Error>> + Send;

    fn approved_reviewers(
        &self,
    ) -> impl Future<Output = Result<Vec<ReviewerSummary>, Self::Error>> + Send;

    fn set_status(
        &self,
        id: &RecordId,
        status: RegistrationStatus,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;

    fn assign_reviewer(
        &self,
        id: &RecordId,
        reviewer: Option<UniqueId>,
    ) -> impl Future<Output = Result<(), Self::Error>> + Send;
}

impl<I, T> AdminConsole for ReviewService<I, T>
where
    I: InstitutionRepository + 'static,
    T: ReviewerRepository + 'static,
{
    type Error = ReviewError;

    async fn institutions(&self) -> Result<Vec<Institution>, ReviewError> {
        ReviewService::institutions(self)
    }

    async fn approved_reviewers(&self) -> Result<Vec<ReviewerSummary>, ReviewError> {
        ReviewService::approved_reviewers(self)
    }

    async fn set_status(
        &self,
        id: &RecordId,
        status: RegistrationStatus,
    ) -> Result<(), ReviewError> {
        ReviewService::set_status(self, id, status).map(|_| ())
    }

    async fn assign_reviewer(
        &self,
        id: &RecordId,
        reviewer: Option<UniqueId>,
    ) -> Result<(), ReviewError> {
        ReviewService::assign_reviewer(self, id, reviewer).map(|_| ())
    }
}

impl<C: AdminConsole> AdminConsole for Arc<C> {
    type Error = C::Error;

    fn institutions(&self) -> impl Future<Output = Result<Vec<Institution>, C::Error>> + Send {
        (**self).institutions()
    }

    fn approved_reviewers(
        &self,
    ) -> impl Future<Output = Result<Vec<ReviewerSummary>, C::Error>> + Send {
        (**self).approved_reviewers()
    }

    fn set_status(
        &self,
        id: &RecordId,
        status: RegistrationStatus,
    ) -> impl Future<Output = Result<(), C::Error>> + Send {
        (**self).set_status(id, status)
    }

    fn assign_reviewer(
        &self,
        id: &RecordId,
        reviewer: Option<UniqueId>,
    ) -> impl Future<Output = Result<(), C::Error>> + Send {
        (**self).assign_reviewer(id, reviewer)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum BoardError<E: std::error::Error + 'static> {
    #[error("an action on {0} is already in progress")]
    Busy(RecordId),
    #[error(transparent)]
    Console(E),
}

#[derive(Debug, Clone, Default)]
struct Snapshot {
    institutions: Vec<Institution>,
    reviewers: Vec<ReviewerSummary>,
}

pub struct ReviewBoard<C> {
    console: C,
    snapshot: Mutex<Snapshot>,
    in_flight: Mutex<HashSet<RecordId>>,
}

impl<C: AdminConsole> ReviewBoard<C> {
    pub fn new(console: C) -> Self {
        Self {
            console,
            snapshot: Mutex::new(Snapshot::default()),
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Replace the snapshot with the console's current lists.
    pub async fn refresh(&self) -> Result<(), BoardError<C::Error>> {
        let institutions = self
            .console
            .institutions()
            .await
            .map_err(BoardError::Console)?;
        let reviewers = self
            .console
            .approved_reviewers()
            .await
            .map_err(BoardError::Console)?;
        debug!(
            institutions = institutions.len(),
            reviewers = reviewers.len(),
            "review board refreshed"
        );
        *lock(&self.snapshot) = Snapshot {
            institutions,
            reviewers,
        };
        Ok(())
    }

    pub fn institutions(&self) -> Vec<Institution> {
        lock(&self.snapshot).institutions.clone()
    }

    pub fn pending(&self) -> Vec<Institution> {
        lock(&self.snapshot)
            .institutions
            .iter()
            .filter(|record| record.status == RegistrationStatus::Pending)
            .cloned()
            .collect()
    }

    pub fn reviewers(&self) -> Vec<ReviewerSummary> {
        lock(&self.snapshot).reviewers.clone()
    }

    pub fn is_busy(&self, id: &RecordId) -> bool {
        lock(&self.in_flight).contains(id)
    }

    pub async fn set_status(
        &self,
        id: &RecordId,
        status: RegistrationStatus,
    ) -> Result<(), BoardError<C::Error>> {
        let _guard = self.begin(id)?;
        if let Err(error) = self.console.set_status(id, status).await {
            warn!(id = %id, %error, "status change failed");
            return Err(BoardError::Console(error));
        }
        self.refresh().await
    }

    pub async fn assign_reviewer(
        &self,
        id: &RecordId,
        reviewer: Option<UniqueId>,
    ) -> Result<(), BoardError<C::Error>> {
        let _guard = self.begin(id)?;
        if let Err(error) = self.console.assign_reviewer(id, reviewer).await {
            warn!(id = %id, %error, "trainer assignment failed");
            return Err(BoardError::Console(error));
        }
        self.refresh().await
    }

    fn begin(&self, id: &RecordId) -> Result<InFlight<'_>, BoardError<C::Error>> {
        if !lock(&self.in_flight).insert(id.clone()) {
            return Err(BoardError::Busy(id.clone()));
        }
        Ok(InFlight {
            set: &self.in_flight,
            id: id.clone(),
        })
    }
}

struct InFlight<'a> {
    set: &'a Mutex<HashSet<RecordId>>,
    id: RecordId,
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        lock(self.set).remove(&self.id);
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}
