use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, EntityMetadata};

// ============================================================================
// ID Type
// ============================================================================

/// Unique identifier of a restaurant record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantId(pub Uuid);

impl RestaurantId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for RestaurantId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(RestaurantId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Enums
// ============================================================================

/// Publication status of a restaurant record.
///
/// `Draft` means the record was saved incomplete from the wizard and has
/// never been published. A record with status `Active` but `is_active ==
/// false` is soft-deleted, which is a different thing from a draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecordStatus {
    Draft,
    Active,
    Inactive,
}

impl Default for RecordStatus {
    fn default() -> Self {
        Self::Draft
    }
}

impl RecordStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// How a record must be deleted.
///
/// Drafts were never live, so they are removed outright. Everything else
/// gets a soft delete (activity flag flip) so it can be restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteMode {
    Hard,
    Soft,
}

impl DeleteMode {
    pub fn for_status(status: RecordStatus) -> Self {
        match status {
            RecordStatus::Draft => Self::Hard,
            _ => Self::Soft,
        }
    }
}

// ============================================================================
// Field groups
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginDetails {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDetails {
    pub name: String,
    pub owner_name: String,
    pub category: String,
    pub tagline: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    pub phone: String,
    pub alternate_phone: Option<String>,
    pub support_email: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationDetails {
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub landmark: Option<String>,
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Restaurant record as stored by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    pub id: RestaurantId,
    pub status: RecordStatus,
    pub is_active: bool,
    pub login: LoginDetails,
    pub restaurant: RestaurantDetails,
    pub contact: ContactDetails,
    pub location: LocationDetails,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

impl Restaurant {
    /// Create a fresh draft. Drafts are never active.
    pub fn new_draft(
        login: LoginDetails,
        restaurant: RestaurantDetails,
        contact: ContactDetails,
        location: LocationDetails,
    ) -> Self {
        Self {
            id: RestaurantId::new_v4(),
            status: RecordStatus::Draft,
            is_active: false,
            login,
            restaurant,
            contact,
            location,
            metadata: EntityMetadata::new(),
        }
    }

    pub fn delete_mode(&self) -> DeleteMode {
        DeleteMode::for_status(self.status)
    }

    /// Promote a draft (or re-publish an edited record) to an active listing.
    pub fn promote_to_active(&mut self, now: DateTime<Utc>) {
        self.status = RecordStatus::Active;
        self.is_active = true;
        self.metadata.updated_at = now;
    }

    /// Soft delete: flip the activity flag, keep the status so the record
    /// stays distinguishable from a draft.
    pub fn soft_delete(&mut self, now: DateTime<Utc>) {
        self.is_active = false;
        self.metadata.updated_at = now;
    }

    /// Restore a soft-deleted record. Status is never changed here.
    pub fn restore(&mut self, now: DateTime<Utc>) {
        self.is_active = true;
        self.metadata.updated_at = now;
    }
}

// ============================================================================
// DTO
// ============================================================================

/// Wire DTO for create/update calls. `id` and timestamps are absent until
/// the record has been persisted once.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantDto {
    pub id: Option<String>,
    #[serde(default)]
    pub status: RecordStatus,
    #[serde(default)]
    pub is_active: bool,
    pub login: LoginDetails,
    pub restaurant: RestaurantDetails,
    pub contact: ContactDetails,
    pub location: LocationDetails,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<Restaurant> for RestaurantDto {
    fn from(r: Restaurant) -> Self {
        Self {
            id: Some(r.id.as_string()),
            status: r.status,
            is_active: r.is_active,
            login: r.login,
            restaurant: r.restaurant,
            contact: r.contact,
            location: r.location,
            created_at: Some(r.metadata.created_at),
            updated_at: Some(r.metadata.updated_at),
        }
    }
}

impl TryFrom<RestaurantDto> for Restaurant {
    type Error = anyhow::Error;

    fn try_from(dto: RestaurantDto) -> Result<Self, Self::Error> {
        let id = match dto.id {
            Some(ref s) => RestaurantId::from_string(s).map_err(anyhow::Error::msg)?,
            None => anyhow::bail!("restaurant dto without id"),
        };
        let now = Utc::now();
        Ok(Self {
            id,
            status: dto.status,
            is_active: dto.is_active,
            login: dto.login,
            restaurant: dto.restaurant,
            contact: dto.contact,
            location: dto.location,
            metadata: EntityMetadata::at(
                dto.created_at.unwrap_or(now),
                dto.updated_at.unwrap_or(now),
            ),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Restaurant {
        Restaurant::new_draft(
            LoginDetails {
                email: "owner@tandoor.in".into(),
                password: "secret123".into(),
                confirm_password: "secret123".into(),
            },
            RestaurantDetails {
                name: "Tandoor Tales".into(),
                owner_name: "Asha".into(),
                category: "North Indian".into(),
                tagline: "Slow-cooked, fast served".into(),
            },
            ContactDetails {
                phone: "9876543210".into(),
                alternate_phone: None,
                support_email: None,
            },
            LocationDetails {
                address: "12 MG Road".into(),
                city: "Pune".into(),
                state: "MH".into(),
                pincode: "411001".into(),
                landmark: None,
            },
        )
    }

    #[test]
    fn draft_is_never_active() {
        let r = sample();
        assert_eq!(r.status, RecordStatus::Draft);
        assert!(!r.is_active);
        assert_eq!(r.delete_mode(), DeleteMode::Hard);
    }

    #[test]
    fn promote_sets_active_status_and_flag() {
        let mut r = sample();
        r.promote_to_active(Utc::now());
        assert_eq!(r.status, RecordStatus::Active);
        assert!(r.is_active);
        assert_eq!(r.delete_mode(), DeleteMode::Soft);
    }

    #[test]
    fn soft_delete_keeps_status() {
        let mut r = sample();
        r.promote_to_active(Utc::now());
        r.soft_delete(Utc::now());
        assert_eq!(r.status, RecordStatus::Active);
        assert!(!r.is_active);
        // Still distinguishable from a draft.
        assert_eq!(r.delete_mode(), DeleteMode::Soft);
    }

    #[test]
    fn restore_flips_flag_only() {
        let mut r = sample();
        r.promote_to_active(Utc::now());
        r.soft_delete(Utc::now());
        r.restore(Utc::now());
        assert!(r.is_active);
        assert_eq!(r.status, RecordStatus::Active);
    }

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&RecordStatus::Draft).unwrap(),
            "\"draft\""
        );
        assert_eq!(
            serde_json::to_string(&RecordStatus::Active).unwrap(),
            "\"active\""
        );
    }

    #[test]
    fn dto_round_trip_preserves_fields() {
        let mut r = sample();
        r.promote_to_active(Utc::now());
        let dto = RestaurantDto::from(r.clone());
        let back = Restaurant::try_from(dto).unwrap();
        assert_eq!(back.id, r.id);
        assert_eq!(back.login, r.login);
        assert_eq!(back.restaurant, r.restaurant);
        assert_eq!(back.contact, r.contact);
        assert_eq!(back.location, r.location);
        assert_eq!(back.status, r.status);
        assert_eq!(back.is_active, r.is_active);
    }

    #[test]
    fn wire_json_uses_camel_case() {
        let json = serde_json::to_value(RestaurantDto::from(sample())).unwrap();
        assert!(json.get("isActive").is_some());
        assert!(json.get("createdAt").is_some());
        assert!(json.get("updatedAt").is_some());
    }
}
