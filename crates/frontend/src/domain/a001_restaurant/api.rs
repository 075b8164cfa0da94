//! REST calls for the restaurant resource.

use chrono::{DateTime, Utc};
use contracts::domain::a001_restaurant::{Restaurant, RestaurantDto};
use serde::Serialize;

use crate::shared::api_utils::{self, ApiError};

pub async fn fetch_all() -> Result<Vec<Restaurant>, ApiError> {
    api_utils::get_json("/restaurants").await
}

pub async fn fetch_by_id(id: &str) -> Result<Restaurant, ApiError> {
    api_utils::get_json(&format!("/restaurants/{}", id)).await
}

pub async fn create(dto: &RestaurantDto) -> Result<Restaurant, ApiError> {
    api_utils::send_json("POST", "/restaurants", dto).await
}

pub async fn update(id: &str, dto: &RestaurantDto) -> Result<Restaurant, ApiError> {
    api_utils::send_json("PUT", &format!("/restaurants/{}", id), dto).await
}

/// Soft delete and restore share this payload; only the flag differs.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ActivityPatch {
    is_active: bool,
    updated_at: DateTime<Utc>,
}

pub async fn patch_activity(
    id: &str,
    is_active: bool,
    updated_at: DateTime<Utc>,
) -> Result<(), ApiError> {
    api_utils::send_json_no_content(
        "PATCH",
        &format!("/restaurants/{}", id),
        &ActivityPatch {
            is_active,
            updated_at,
        },
    )
    .await
}

/// Hard delete. Only valid for drafts, which never went live.
pub async fn delete_hard(id: &str) -> Result<(), ApiError> {
    api_utils::delete(&format!("/restaurants/{}", id)).await
}
