//! Draft / publish lifecycle.
//!
//! Decides what happens when the wizard closes (persist a draft, or
//! nothing), promotes drafts to active records, and reconciles local
//! list state after write operations without refetching.

use chrono::{DateTime, Utc};
use serde_json::Value;

use crate::domain::a001_restaurant::{RecordStatus, Restaurant, RestaurantDto, RestaurantId};
use crate::domain::common::AggregateId;

use super::store::FormValues;

/// What closing the wizard should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseOutcome {
    /// Skip flag was armed (a publish just happened): clear it and close
    /// without persisting anything.
    SkipAndClear,
    /// At least one field holds user content: persist a draft, then close.
    PersistDraft,
    /// Entirely blank form: just close.
    CloseOnly,
}

/// A value counts as content when it is defined, non-empty and not
/// `false`.
fn is_meaningful(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(_) => true,
        Value::String(s) => !s.trim().is_empty(),
        Value::Array(a) => a.iter().any(is_meaningful),
        Value::Object(o) => o.values().any(is_meaningful),
    }
}

/// True iff any non-excluded field holds content.
pub fn has_draft_content(values: &FormValues, excluded: &[&str]) -> bool {
    values
        .iter()
        .filter(|(path, _)| !excluded.contains(&path.as_str()))
        .any(|(_, value)| is_meaningful(value))
}

pub fn close_outcome(values: &FormValues, excluded: &[&str], skip: bool) -> CloseOutcome {
    if skip {
        CloseOutcome::SkipAndClear
    } else if has_draft_content(values, excluded) {
        CloseOutcome::PersistDraft
    } else {
        CloseOutcome::CloseOnly
    }
}

/// Shape a DTO into a persistable draft: generated id if absent, draft
/// status, inactive, original `created_at` preserved, `updated_at`
/// stamped to now.
pub fn prepare_draft(mut dto: RestaurantDto, now: DateTime<Utc>) -> RestaurantDto {
    if dto.id.is_none() {
        dto.id = Some(RestaurantId::new_v4().as_string());
    }
    dto.status = RecordStatus::Draft;
    dto.is_active = false;
    if dto.created_at.is_none() {
        dto.created_at = Some(now);
    }
    dto.updated_at = Some(now);
    dto
}

/// Promote to a published record. Persisted via update (PUT), not
/// create: the draft row already exists.
pub fn promote_to_active(mut dto: RestaurantDto, now: DateTime<Utc>) -> RestaurantDto {
    dto.status = RecordStatus::Active;
    dto.is_active = true;
    if dto.created_at.is_none() {
        dto.created_at = Some(now);
    }
    dto.updated_at = Some(now);
    dto
}

// ============================================================================
// Local list reconciliation (no refetch)
// ============================================================================

/// Flip the activity flag on every listed record whose id is in `ids`.
/// Safe without a refetch because the patch payload is exactly this flag
/// and the caller holds the authoritative pre-operation list.
pub fn apply_activity(
    list: &mut Vec<Restaurant>,
    ids: &[String],
    is_active: bool,
    now: DateTime<Utc>,
) {
    for record in list.iter_mut() {
        if ids.contains(&record.id.as_string()) {
            record.is_active = is_active;
            record.metadata.updated_at = now;
        }
    }
}

/// Drop hard-deleted ids from the local list.
pub fn remove_ids(list: &mut Vec<Restaurant>, ids: &[String]) {
    list.retain(|record| !ids.contains(&record.id.as_string()));
}

/// Replace the matching record, or append when it is new.
pub fn upsert(list: &mut Vec<Restaurant>, record: Restaurant) {
    match list.iter_mut().find(|r| r.id == record.id) {
        Some(slot) => *slot = record,
        None => list.push(record),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::registration::{self, DRAFT_EXCLUDED};
    use serde_json::json;

    #[test]
    fn blank_form_closes_without_persisting() {
        let values = FormValues::new();
        assert_eq!(
            close_outcome(&values, DRAFT_EXCLUDED, false),
            CloseOutcome::CloseOnly
        );
    }

    #[test]
    fn single_filled_field_persists_a_draft() {
        let mut values = FormValues::new();
        values.insert("restaurant.name".into(), json!("Tandoor Tales"));
        assert_eq!(
            close_outcome(&values, DRAFT_EXCLUDED, false),
            CloseOutcome::PersistDraft
        );
    }

    #[test]
    fn whitespace_and_false_are_not_content() {
        let mut values = FormValues::new();
        values.insert("restaurant.name".into(), json!("   "));
        values.insert("someFlag".into(), json!(false));
        assert_eq!(
            close_outcome(&values, DRAFT_EXCLUDED, false),
            CloseOutcome::CloseOnly
        );
    }

    #[test]
    fn excluded_metadata_never_counts() {
        let mut values = FormValues::new();
        values.insert("id".into(), json!("abc"));
        values.insert("status".into(), json!("draft"));
        assert!(!has_draft_content(&values, DRAFT_EXCLUDED));
    }

    #[test]
    fn skip_flag_wins_over_content() {
        let mut values = FormValues::new();
        values.insert("restaurant.name".into(), json!("Tandoor Tales"));
        assert_eq!(
            close_outcome(&values, DRAFT_EXCLUDED, true),
            CloseOutcome::SkipAndClear
        );
    }

    #[test]
    fn prepare_draft_assigns_identity_and_stamps() {
        let now = Utc::now();
        let dto = registration::tests_support::complete_dto();
        let draft = prepare_draft(dto, now);
        assert!(draft.id.is_some());
        assert_eq!(draft.status, RecordStatus::Draft);
        assert!(!draft.is_active);
        assert_eq!(draft.created_at, Some(now));
        assert_eq!(draft.updated_at, Some(now));
    }

    #[test]
    fn prepare_draft_preserves_existing_identity() {
        let created = Utc::now() - chrono::Duration::days(3);
        let mut dto = registration::tests_support::complete_dto();
        dto.id = Some("11111111-1111-1111-1111-111111111111".into());
        dto.created_at = Some(created);
        let now = Utc::now();
        let draft = prepare_draft(dto, now);
        assert_eq!(
            draft.id.as_deref(),
            Some("11111111-1111-1111-1111-111111111111")
        );
        assert_eq!(draft.created_at, Some(created));
        assert_eq!(draft.updated_at, Some(now));
    }

    #[test]
    fn promote_activates() {
        let now = Utc::now();
        let mut dto = prepare_draft(registration::tests_support::complete_dto(), now);
        dto = promote_to_active(dto, now);
        assert_eq!(dto.status, RecordStatus::Active);
        assert!(dto.is_active);
    }

    fn listed(n: usize) -> Vec<Restaurant> {
        (0..n)
            .map(|_| {
                let dto = prepare_draft(registration::tests_support::complete_dto(), Utc::now());
                let dto = promote_to_active(dto, Utc::now());
                Restaurant::try_from(dto).unwrap()
            })
            .collect()
    }

    #[test]
    fn apply_activity_touches_only_requested_ids() {
        let mut list = listed(3);
        let target = list[1].id.as_string();
        apply_activity(&mut list, &[target.clone()], false, Utc::now());
        assert!(list[0].is_active);
        assert!(!list[1].is_active);
        assert!(list[2].is_active);
    }

    #[test]
    fn partial_bulk_result_updates_only_succeeded_ids() {
        // Restore of [a, b] where a failed: the caller passes only b.
        let mut list = listed(2);
        for r in list.iter_mut() {
            r.is_active = false;
        }
        let b = list[1].id.as_string();
        apply_activity(&mut list, &[b], true, Utc::now());
        assert!(!list[0].is_active);
        assert!(list[1].is_active);
    }

    #[test]
    fn remove_ids_drops_records() {
        let mut list = listed(3);
        let gone = list[0].id.as_string();
        remove_ids(&mut list, &[gone.clone()]);
        assert_eq!(list.len(), 2);
        assert!(list.iter().all(|r| r.id.as_string() != gone));
    }

    #[test]
    fn upsert_replaces_in_place() {
        let mut list = listed(2);
        let mut edited = list[0].clone();
        edited.restaurant.name = "Renamed".into();
        upsert(&mut list, edited);
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].restaurant.name, "Renamed");
    }
}
