use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::IntoDeserializer;
use serde::{Deserialize, Deserializer, Serialize};

use crate::forms::pipeline::{FormKind, FormPayload};

/// Storage identifier used by admin routes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RecordId(pub String);

/// Public identifier handed to the registrant (e.g. `HSGA-INST-0007`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UniqueId(pub String);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl fmt::Display for UniqueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Review status shared by institutions and trainers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Approved,
    Declined,
}

impl RegistrationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            RegistrationStatus::Pending => "PENDING",
            RegistrationStatus::Approved => "APPROVED",
            RegistrationStatus::Declined => "DECLINED",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InstitutionType {
    School,
    College,
    Other,
}

/// Institution registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InstitutionRegistration {
    #[serde(alias = "instiName")]
    pub name: String,
    /// An unselected category (`""`) reads as `None` and fails validation.
    #[serde(rename = "type", alias = "instiType", deserialize_with = "blank_as_none")]
    pub kind: Option<InstitutionType>,
    #[serde(alias = "headName")]
    pub contact_name: String,
    #[serde(alias = "phoneNo")]
    pub phone: String,
    pub email: String,
    pub district: String,
    pub password: String,
}

fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<InstitutionType>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => InstitutionType::deserialize(value.into_deserializer()).map(Some),
    }
}

impl FormPayload for InstitutionRegistration {
    const KIND: FormKind = FormKind::InstitutionRegistration;
    const PATH: &'static str = "/forms/insti-registration";
}

/// Trainer registration form. Approved trainers act as reviewers for institutions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TrainerRegistration {
    pub full_name: String,
    #[serde(alias = "phoneNo")]
    pub phone: String,
    pub email: String,
    pub district: String,
    pub password: String,
}

impl FormPayload for TrainerRegistration {
    const KIND: FormKind = FormKind::TrainerRegistration;
    const PATH: &'static str = "/forms/trainer-registration";
}

/// Registered institution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Institution {
    pub id: RecordId,
    pub unique_id: UniqueId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: InstitutionType,
    pub contact_name: String,
    pub phone: String,
    pub email: String,
    pub district: String,
    pub status: RegistrationStatus,
    #[serde(
        rename = "trainerId",
        alias = "assignedReviewerId",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub assigned_reviewer_id: Option<UniqueId>,
    #[serde(skip)]
    pub credential_hash: String,
    pub registered_at: DateTime<Utc>,
}

/// Registered trainer (reviewer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reviewer {
    pub id: RecordId,
    pub unique_id: UniqueId,
    pub full_name: String,
    pub phone: String,
    pub email: String,
    pub district: String,
    pub status: RegistrationStatus,
    #[serde(skip)]
    pub credential_hash: String,
    pub registered_at: DateTime<Utc>,
}

impl Reviewer {
    pub fn summary(&self) -> ReviewerSummary {
        ReviewerSummary {
            unique_id: self.unique_id.clone(),
            full_name: self.full_name.clone(),
            district: self.district.clone(),
        }
    }
}

/// Reference view of an approved reviewer offered when assigning institutions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewerSummary {
    pub unique_id: UniqueId,
    pub full_name: String,
    pub district: String,
}
