use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::portal::error::PortalError;
use crate::portal::rooms::domain::{Room, RoomId, RoomSummary};

/// Identifier wrapper for ledger applications.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub String);

/// Identity reference asserted by the authentication layer; the ledger trusts
/// it without re-validation and never resolves it to a user record.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UserId(pub String);

/// Lifecycle status of a housing application.
///
/// Pending is the only initial state. Approved and Rejected are both
/// re-enterable: a resubmission or an administrative override may move an
/// application out of either.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ApplicationStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApplicationStatus {
    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Pending => "pending",
            ApplicationStatus::Approved => "approved",
            ApplicationStatus::Rejected => "rejected",
        }
    }

    /// Normalize an administrative status token at the boundary.
    ///
    /// Matching is case-insensitive; `approved` and its historical synonym
    /// `accepted` both map to [`ApplicationStatus::Approved`]. Every other
    /// token is a validation error, so the transition logic only ever sees
    /// canonical states.
    pub fn parse(token: &str) -> Result<Self, PortalError> {
        match token.trim().to_ascii_lowercase().as_str() {
            "approved" | "accepted" => Ok(Self::Approved),
            "rejected" => Ok(Self::Rejected),
            _ => Err(PortalError::Validation(format!(
                "unknown status '{}'",
                token.trim()
            ))),
        }
    }
}

/// A student's single housing request and its review state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Application {
    pub id: ApplicationId,
    pub user_id: UserId,
    pub room_id: RoomId,
    pub status: ApplicationStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Application joined with its room summary for student and admin reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationView {
    pub id: ApplicationId,
    pub user_id: UserId,
    pub status: ApplicationStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub room_number: Option<String>,
    pub created_at: DateTime<Utc>,
    pub room: RoomSummary,
}

impl ApplicationView {
    pub fn join(application: Application, room: &Room) -> Self {
        Self {
            id: application.id,
            user_id: application.user_id,
            status: application.status,
            room_number: application.room_number,
            created_at: application.created_at,
            room: RoomSummary::from(room),
        }
    }
}
