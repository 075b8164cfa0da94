//! REST calls for the restaurant-info resource.

use contracts::domain::a002_restaurant_info::{RestaurantInfo, RestaurantInfoDto};

use crate::shared::api_utils::{self, ApiError};

pub async fn fetch_all() -> Result<Vec<RestaurantInfo>, ApiError> {
    api_utils::get_json("/restaurantinfo").await
}

pub async fn fetch_by_id(id: &str) -> Result<RestaurantInfo, ApiError> {
    api_utils::get_json(&format!("/restaurantinfo/{}", id)).await
}

pub async fn create(dto: &RestaurantInfoDto) -> Result<RestaurantInfo, ApiError> {
    api_utils::send_json("POST", "/restaurantinfo", dto).await
}

pub async fn update(id: &str, dto: &RestaurantInfoDto) -> Result<RestaurantInfo, ApiError> {
    api_utils::send_json("PUT", &format!("/restaurantinfo/{}", id), dto).await
}
