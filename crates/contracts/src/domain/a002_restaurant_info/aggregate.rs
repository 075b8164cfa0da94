use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::common::{AggregateId, EntityMetadata};

/// Bounded collection sizes for the restaurant-info form.
pub const MAX_MENU_ITEMS: usize = 6;
pub const MAX_BRANCHES: usize = 3;
pub const MAX_COMPLIANCE_PER_BRANCH: usize = 3;

/// Unique identifier of a restaurant-info record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RestaurantInfoId(pub Uuid);

impl RestaurantInfoId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl AggregateId for RestaurantInfoId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(RestaurantInfoId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

/// One dish on the menu. A restaurant carries between 1 and
/// [`MAX_MENU_ITEMS`] of these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub name: String,
    pub category: String,
    pub price: f64,
    pub image_url: Option<String>,
}

/// License record attached to a branch. `valid_till` must not precede
/// `valid_from`; the form engine enforces this via a `NotBefore` rule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceDetail {
    pub license_type: String,
    pub license_number: String,
    pub valid_from: String,
    pub valid_till: String,
}

/// Branch of a restaurant with its own compliance licenses (1..=3).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub name: String,
    pub code: String,
    pub compliance: Vec<ComplianceDetail>,
}

/// Restaurant-info record: menu and branch structure of a restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantInfo {
    pub id: RestaurantInfoId,
    pub restaurant_name: String,
    pub owner_name: String,
    pub menu: Vec<MenuItem>,
    pub branches: Vec<Branch>,
    #[serde(flatten)]
    pub metadata: EntityMetadata,
}

/// Wire DTO; `id` is absent before the first save.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantInfoDto {
    pub id: Option<String>,
    pub restaurant_name: String,
    pub owner_name: String,
    pub menu: Vec<MenuItem>,
    pub branches: Vec<Branch>,
}

impl RestaurantInfoDto {
    /// Check the collection bounds the form enforces interactively. The
    /// backend is generic, so the client re-checks before sending.
    pub fn check_bounds(&self) -> anyhow::Result<()> {
        if self.menu.is_empty() || self.menu.len() > MAX_MENU_ITEMS {
            anyhow::bail!("menu must hold 1..={} items", MAX_MENU_ITEMS);
        }
        if self.branches.is_empty() || self.branches.len() > MAX_BRANCHES {
            anyhow::bail!("branches must hold 1..={} entries", MAX_BRANCHES);
        }
        for branch in &self.branches {
            if branch.compliance.is_empty()
                || branch.compliance.len() > MAX_COMPLIANCE_PER_BRANCH
            {
                anyhow::bail!(
                    "branch '{}' must hold 1..={} compliance entries",
                    branch.name,
                    MAX_COMPLIANCE_PER_BRANCH
                );
            }
        }
        Ok(())
    }
}

impl From<RestaurantInfo> for RestaurantInfoDto {
    fn from(info: RestaurantInfo) -> Self {
        Self {
            id: Some(info.id.as_string()),
            restaurant_name: info.restaurant_name,
            owner_name: info.owner_name,
            menu: info.menu,
            branches: info.branches,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dto_with(menu: usize, branches: usize, compliance: usize) -> RestaurantInfoDto {
        RestaurantInfoDto {
            id: None,
            restaurant_name: "Tandoor Tales".into(),
            owner_name: "Asha".into(),
            menu: (0..menu)
                .map(|i| MenuItem {
                    name: format!("Dish {}", i),
                    category: "Mains".into(),
                    price: 120.0,
                    image_url: None,
                })
                .collect(),
            branches: (0..branches)
                .map(|i| Branch {
                    name: format!("Branch {}", i),
                    code: format!("BR-{}", i),
                    compliance: (0..compliance)
                        .map(|j| ComplianceDetail {
                            license_type: "FSSAI".into(),
                            license_number: format!("L-{}", j),
                            valid_from: "2025-01-01".into(),
                            valid_till: "2026-01-01".into(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }

    #[test]
    fn bounds_accept_valid_shape() {
        assert!(dto_with(6, 3, 3).check_bounds().is_ok());
        assert!(dto_with(1, 1, 1).check_bounds().is_ok());
    }

    #[test]
    fn bounds_reject_overflow_and_empty() {
        assert!(dto_with(7, 1, 1).check_bounds().is_err());
        assert!(dto_with(1, 4, 1).check_bounds().is_err());
        assert!(dto_with(1, 1, 4).check_bounds().is_err());
        assert!(dto_with(0, 1, 1).check_bounds().is_err());
        assert!(dto_with(1, 0, 1).check_bounds().is_err());
        assert!(dto_with(1, 1, 0).check_bounds().is_err());
    }
}
