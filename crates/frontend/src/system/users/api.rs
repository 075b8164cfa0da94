use contracts::system::users::{UpdateFavoritesDto, User};

use crate::shared::api_utils::{self, ApiError};

pub async fn fetch_user(id: &str) -> Result<User, ApiError> {
    api_utils::get_json(&format!("/users/{}", id)).await
}

/// Persist the favorites list on the user resource.
pub async fn update_favorites(id: &str, favorites: Vec<String>) -> Result<User, ApiError> {
    api_utils::send_json("PATCH", &format!("/users/{}", id), &UpdateFavoritesDto { favorites })
        .await
}
