use serde::{Deserialize, Serialize};

use crate::portal::error::PortalError;

/// Identifier wrapper for registered rooms.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct RoomId(pub String);

/// Closed classification of housing units offered by the portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoomType {
    Single,
    Double,
    Quad,
}

impl RoomType {
    pub const fn label(self) -> &'static str {
        match self {
            RoomType::Single => "single",
            RoomType::Double => "double",
            RoomType::Quad => "quad",
        }
    }

    /// Parse a catalog token, matched case-insensitively.
    pub fn parse(token: &str) -> Result<Self, PortalError> {
        match token.trim().to_ascii_lowercase().as_str() {
            "single" => Ok(Self::Single),
            "double" => Ok(Self::Double),
            "quad" => Ok(Self::Quad),
            _ => Err(PortalError::Validation(format!(
                "unknown room type '{}'",
                token.trim()
            ))),
        }
    }
}

/// A housing unit with a fixed capacity and a live occupancy counter.
///
/// `occupancy` is derived state: the count of Approved applications currently
/// referencing the room. It is maintained exclusively by the application
/// ledger's status transitions and never written by clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: RoomId,
    pub name: String,
    pub description: String,
    pub image_url: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
    pub capacity: u32,
    pub occupancy: u32,
}

impl Room {
    pub fn is_full(&self) -> bool {
        self.occupancy >= self.capacity
    }

    /// Seats still available before the room reaches capacity.
    pub fn remaining(&self) -> u32 {
        self.capacity.saturating_sub(self.occupancy)
    }
}

/// Administrator-provided fields for a new room; the registry assigns the id
/// and starts occupancy at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomDraft {
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub room_type: RoomType,
    pub capacity: u32,
}

/// Compact room view joined into application listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomSummary {
    pub id: RoomId,
    pub name: String,
    #[serde(rename = "type")]
    pub room_type: RoomType,
}

impl From<&Room> for RoomSummary {
    fn from(room: &Room) -> Self {
        Self {
            id: room.id.clone(),
            name: room.name.clone(),
            room_type: room.room_type,
        }
    }
}
