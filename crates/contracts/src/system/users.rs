use serde::{Deserialize, Serialize};

/// Role of a signed-in user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Customer,
    Owner,
    Admin,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::Customer
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub email: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    /// Favorite restaurant ids, persisted as a field on the user resource.
    #[serde(default)]
    pub favorites: Vec<String>,
    pub created_at: String,
    pub updated_at: String,
}

/// Payload for `PATCH /users/:id` when toggling favorites.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFavoritesDto {
    pub favorites: Vec<String>,
}
