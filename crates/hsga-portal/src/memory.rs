//! Process-local repositories used by the API binary, the demo walkthrough, and tests.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::calendar::{CalendarEvent, EventId, EventRepository};
use crate::forms::admission::{AdmissionId, AdmissionRecord, AdmissionRepository};
use crate::forms::registration::{
    Institution, InstitutionRepository, RecordId, Reviewer, ReviewerRepository,
};
use crate::repository::RepositoryError;

fn lock<T>(mutex: &Mutex<T>) -> Result<MutexGuard<'_, T>, RepositoryError> {
    mutex
        .lock()
        .map_err(|_| RepositoryError::Unavailable("repository mutex poisoned".to_string()))
}

#[derive(Default, Clone)]
pub struct InMemoryAdmissionRepository {
    records: Arc<Mutex<HashMap<AdmissionId, AdmissionRecord>>>,
}

impl AdmissionRepository for InMemoryAdmissionRepository {
    fn insert(&self, record: AdmissionRecord) -> Result<AdmissionRecord, RepositoryError> {
        let mut guard = lock(&self.records)?;
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn list(&self) -> Result<Vec<AdmissionRecord>, RepositoryError> {
        let guard = lock(&self.records)?;
        Ok(guard.values().cloned().collect())
    }
}

#[derive(Default, Clone)]
pub struct InMemoryInstitutionRepository {
    records: Arc<Mutex<HashMap<RecordId, Institution>>>,
}

impl InstitutionRepository for InMemoryInstitutionRepository {
    fn insert(&self, record: Institution) -> Result<Institution, RepositoryError> {
        let mut guard = lock(&self.records)?;
        let email_taken = guard
            .values()
            .any(|existing| existing.email.eq_ignore_ascii_case(&record.email));
        if email_taken || guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: Institution) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.records)?;
        match guard.get_mut(&record.id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<Institution>, RepositoryError> {
        let guard = lock(&self.records)?;
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<Institution>, RepositoryError> {
        let guard = lock(&self.records)?;
        let mut records: Vec<Institution> = guard.values().cloned().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }
}

#[derive(Default, Clone)]
pub struct InMemoryReviewerRepository {
    records: Arc<Mutex<HashMap<RecordId, Reviewer>>>,
}

impl ReviewerRepository for InMemoryReviewerRepository {
    fn insert(&self, record: Reviewer) -> Result<Reviewer, RepositoryError> {
        let mut guard = lock(&self.records)?;
        let email_taken = guard
            .values()
            .any(|existing| existing.email.eq_ignore_ascii_case(&record.email));
        if email_taken || guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: Reviewer) -> Result<(), RepositoryError> {
        let mut guard = lock(&self.records)?;
        match guard.get_mut(&record.id) {
            Some(slot) => {
                *slot = record;
                Ok(())
            }
            None => Err(RepositoryError::NotFound),
        }
    }

    fn fetch(&self, id: &RecordId) -> Result<Option<Reviewer>, RepositoryError> {
        let guard = lock(&self.records)?;
        Ok(guard.get(id).cloned())
    }

    fn list(&self) -> Result<Vec<Reviewer>, RepositoryError> {
        let guard = lock(&self.records)?;
        let mut records: Vec<Reviewer> = guard.values().cloned().collect();
        records.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(records)
    }
}

#[derive(Default, Clone)]
pub struct InMemoryEventRepository {
    events: Arc<Mutex<Vec<CalendarEvent>>>,
}

impl EventRepository for InMemoryEventRepository {
    fn insert(&self, event: CalendarEvent) -> Result<CalendarEvent, RepositoryError> {
        let mut guard = lock(&self.events)?;
        if event.id.is_some() && guard.iter().any(|existing| existing.id == event.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.push(event.clone());
        Ok(event)
    }

    fn list(&self) -> Result<Vec<CalendarEvent>, RepositoryError> {
        Ok(lock(&self.events)?.clone())
    }

    fn remove(&self, id: &EventId) -> Result<Option<CalendarEvent>, RepositoryError> {
        let mut guard = lock(&self.events)?;
        let position = guard
            .iter()
            .position(|event| event.id.as_ref() == Some(id));
        Ok(position.map(|index| guard.remove(index)))
    }
}
