//! ViewModel for the restaurant-info editor.
//!
//! The menu and branch collections are [`FieldArray`]s held in signals;
//! each branch row owns its own nested compliance array, so nested edit
//! state is created and discarded together with the branch.

use contracts::domain::a002_restaurant_info::{
    Branch, ComplianceDetail, MenuItem, RestaurantInfo, RestaurantInfoDto, MAX_BRANCHES,
    MAX_COMPLIANCE_PER_BRANCH, MAX_MENU_ITEMS,
};
use contracts::domain::common::AggregateId;
use contracts::shared::forms::{AddOutcome, FieldArray};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_restaurant_info::api;

/// Menu-item row as edited. Price stays a string until save.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MenuItemForm {
    pub name: String,
    pub category: String,
    pub price: String,
    pub image_url: String,
}

impl MenuItemForm {
    fn from_item(item: &MenuItem) -> Self {
        Self {
            name: item.name.clone(),
            category: item.category.clone(),
            price: format!("{}", item.price),
            image_url: item.image_url.clone().unwrap_or_default(),
        }
    }

    fn to_item(&self) -> MenuItem {
        MenuItem {
            name: self.name.trim().to_string(),
            category: self.category.trim().to_string(),
            price: self.price.trim().parse().unwrap_or(0.0),
            image_url: match self.image_url.trim() {
                "" => None,
                url => Some(url.to_string()),
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComplianceForm {
    pub license_type: String,
    pub license_number: String,
    pub valid_from: String,
    pub valid_till: String,
}

impl ComplianceForm {
    fn from_detail(detail: &ComplianceDetail) -> Self {
        Self {
            license_type: detail.license_type.clone(),
            license_number: detail.license_number.clone(),
            valid_from: detail.valid_from.clone(),
            valid_till: detail.valid_till.clone(),
        }
    }

    fn to_detail(&self) -> ComplianceDetail {
        ComplianceDetail {
            license_type: self.license_type.trim().to_string(),
            license_number: self.license_number.trim().to_string(),
            valid_from: self.valid_from.trim().to_string(),
            valid_till: self.valid_till.trim().to_string(),
        }
    }
}

/// Branch row with its nested compliance array.
#[derive(Debug, Clone)]
pub struct BranchForm {
    pub name: String,
    pub code: String,
    pub compliance: FieldArray<ComplianceForm>,
}

impl Default for BranchForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            code: String::new(),
            compliance: FieldArray::new(1, MAX_COMPLIANCE_PER_BRANCH),
        }
    }
}

impl BranchForm {
    fn from_branch(branch: &Branch) -> Self {
        Self {
            name: branch.name.clone(),
            code: branch.code.clone(),
            compliance: FieldArray::from_values(
                branch.compliance.iter().map(ComplianceForm::from_detail).collect(),
                1,
                MAX_COMPLIANCE_PER_BRANCH,
            ),
        }
    }

    fn to_branch(&self) -> Branch {
        Branch {
            name: self.name.trim().to_string(),
            code: self.code.trim().to_string(),
            compliance: self.compliance.values().iter().map(|c| c.to_detail()).collect(),
        }
    }
}

pub fn validate_menu_row(item: &MenuItemForm) -> Result<(), String> {
    if item.name.trim().is_empty() {
        return Err("Dish name is required".into());
    }
    if item.category.trim().is_empty() {
        return Err("Category is required".into());
    }
    match item.price.trim().parse::<f64>() {
        Ok(price) if price > 0.0 => Ok(()),
        _ => Err("Price must be a positive number".into()),
    }
}

pub fn validate_compliance_row(detail: &ComplianceForm) -> Result<(), String> {
    if detail.license_type.trim().is_empty() {
        return Err("License type is required".into());
    }
    if detail.license_number.trim().is_empty() {
        return Err("License number is required".into());
    }
    if detail.valid_from.trim().is_empty() || detail.valid_till.trim().is_empty() {
        return Err("Validity dates are required".into());
    }
    // ISO dates compare correctly as strings.
    if detail.valid_till.trim() < detail.valid_from.trim() {
        return Err("Valid till must not precede valid from".into());
    }
    Ok(())
}

pub fn validate_branch_row(branch: &BranchForm) -> Result<(), String> {
    if branch.name.trim().is_empty() {
        return Err("Branch name is required".into());
    }
    if branch.code.trim().is_empty() {
        return Err("Branch code is required".into());
    }
    for detail in branch.compliance.values() {
        validate_compliance_row(&detail)?;
    }
    Ok(())
}

#[derive(Clone, Copy)]
pub struct RestaurantInfoVm {
    pub id: RwSignal<Option<String>>,
    pub restaurant_name: RwSignal<String>,
    pub owner_name: RwSignal<String>,
    pub menu: RwSignal<FieldArray<MenuItemForm>>,
    pub branches: RwSignal<FieldArray<BranchForm>>,
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl RestaurantInfoVm {
    pub fn new() -> Self {
        Self {
            id: RwSignal::new(None),
            restaurant_name: RwSignal::new(String::new()),
            owner_name: RwSignal::new(String::new()),
            menu: RwSignal::new(FieldArray::new(1, MAX_MENU_ITEMS)),
            branches: RwSignal::new(FieldArray::new(1, MAX_BRANCHES)),
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    pub fn reset(&self) {
        self.id.set(None);
        self.restaurant_name.set(String::new());
        self.owner_name.set(String::new());
        self.menu.set(FieldArray::new(1, MAX_MENU_ITEMS));
        self.branches.set(FieldArray::new(1, MAX_BRANCHES));
        self.error.set(None);
    }

    pub fn load(&self, id: String) {
        let vm = *self;
        vm.loading.set(true);
        vm.error.set(None);
        spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(info) => {
                    vm.from_record(&info);
                    vm.loading.set(false);
                }
                Err(e) => {
                    vm.loading.set(false);
                    vm.error.set(Some(format!("Failed to load: {}", e)));
                }
            }
        });
    }

    fn from_record(&self, info: &RestaurantInfo) {
        self.id.set(Some(info.id.as_string()));
        self.restaurant_name.set(info.restaurant_name.clone());
        self.owner_name.set(info.owner_name.clone());
        self.menu.set(FieldArray::from_values(
            info.menu.iter().map(MenuItemForm::from_item).collect(),
            1,
            MAX_MENU_ITEMS,
        ));
        self.branches.set(FieldArray::from_values(
            info.branches.iter().map(BranchForm::from_branch).collect(),
            1,
            MAX_BRANCHES,
        ));
    }

    // === Menu rows ===

    pub fn menu_add(&self) {
        let mut outcome = AddOutcome::Added;
        self.menu.update(|arr| outcome = arr.add(validate_menu_row));
        self.surface_add_outcome(outcome, "menu item");
    }

    pub fn menu_save(&self, index: usize) {
        let mut result = Ok(());
        self.menu
            .update(|arr| result = arr.save(index, validate_menu_row));
        if let Err(message) = result {
            self.error.set(Some(message));
        }
    }

    pub fn menu_edit(&self, index: usize) {
        self.menu.update(|arr| arr.edit(index));
    }

    pub fn menu_remove(&self, index: usize) {
        self.menu.update(|arr| {
            arr.remove(index);
        });
    }

    pub fn menu_update(&self, index: usize, f: impl FnOnce(&mut MenuItemForm)) {
        self.menu.update(|arr| arr.update_value(index, f));
    }

    // === Branch rows ===

    pub fn branch_add(&self) {
        let mut outcome = AddOutcome::Added;
        self.branches
            .update(|arr| outcome = arr.add(validate_branch_row));
        self.surface_add_outcome(outcome, "branch");
    }

    pub fn branch_save(&self, index: usize) {
        let mut result = Ok(());
        self.branches
            .update(|arr| result = arr.save(index, validate_branch_row));
        if let Err(message) = result {
            self.error.set(Some(message));
        }
    }

    pub fn branch_edit(&self, index: usize) {
        self.branches.update(|arr| arr.edit(index));
    }

    pub fn branch_remove(&self, index: usize) {
        self.branches.update(|arr| {
            arr.remove(index);
        });
    }

    pub fn branch_update(&self, index: usize, f: impl FnOnce(&mut BranchForm)) {
        self.branches.update(|arr| arr.update_value(index, f));
    }

    // === Nested compliance rows ===

    pub fn compliance_add(&self, branch_index: usize) {
        let mut outcome = AddOutcome::Added;
        self.branches.update(|arr| {
            arr.update_value(branch_index, |branch| {
                outcome = branch.compliance.add(validate_compliance_row);
            })
        });
        self.surface_add_outcome(outcome, "compliance entry");
    }

    pub fn compliance_save(&self, branch_index: usize, index: usize) {
        let mut result = Ok(());
        self.branches.update(|arr| {
            arr.update_value(branch_index, |branch| {
                result = branch.compliance.save(index, validate_compliance_row);
            })
        });
        if let Err(message) = result {
            self.error.set(Some(message));
        }
    }

    pub fn compliance_edit(&self, branch_index: usize, index: usize) {
        self.branches.update(|arr| {
            arr.update_value(branch_index, |branch| branch.compliance.edit(index))
        });
    }

    pub fn compliance_remove(&self, branch_index: usize, index: usize) {
        self.branches.update(|arr| {
            arr.update_value(branch_index, |branch| {
                branch.compliance.remove(index);
            })
        });
    }

    pub fn compliance_update(
        &self,
        branch_index: usize,
        index: usize,
        f: impl FnOnce(&mut ComplianceForm),
    ) {
        self.branches.update(|arr| {
            arr.update_value(branch_index, |branch| {
                branch.compliance.update_value(index, f)
            })
        });
    }

    fn surface_add_outcome(&self, outcome: AddOutcome, noun: &str) {
        match outcome {
            AddOutcome::Added | AddOutcome::AtCapacity => {}
            AddOutcome::Invalid { index, message } => {
                self.error
                    .set(Some(format!("Fix {} {} first: {}", noun, index + 1, message)));
            }
        }
    }

    // === Persistence ===

    fn current_dto(&self) -> RestaurantInfoDto {
        RestaurantInfoDto {
            id: self.id.get_untracked(),
            restaurant_name: self.restaurant_name.get_untracked().trim().to_string(),
            owner_name: self.owner_name.get_untracked().trim().to_string(),
            menu: self
                .menu
                .with_untracked(|arr| arr.values().iter().map(|m| m.to_item()).collect()),
            branches: self
                .branches
                .with_untracked(|arr| arr.values().iter().map(|b| b.to_branch()).collect()),
        }
    }

    pub fn save(&self, on_saved: Callback<RestaurantInfo>) {
        let vm = *self;

        if vm.restaurant_name.get_untracked().trim().is_empty() {
            vm.error.set(Some("Restaurant name is required".into()));
            return;
        }
        let menu_check = vm
            .menu
            .with_untracked(|arr| arr.values().iter().map(validate_menu_row).collect::<Result<Vec<_>, _>>());
        if let Err(message) = menu_check {
            vm.error.set(Some(message));
            return;
        }
        let branch_check = vm.branches.with_untracked(|arr| {
            arr.values().iter().map(validate_branch_row).collect::<Result<Vec<_>, _>>()
        });
        if let Err(message) = branch_check {
            vm.error.set(Some(message));
            return;
        }

        let dto = vm.current_dto();
        if let Err(e) = dto.check_bounds() {
            vm.error.set(Some(e.to_string()));
            return;
        }

        vm.saving.set(true);
        vm.error.set(None);
        spawn_local(async move {
            let result = match dto.id.clone() {
                Some(id) => api::update(&id, &dto).await,
                None => api::create(&dto).await,
            };
            vm.saving.set(false);
            match result {
                Ok(info) => {
                    vm.id.set(Some(info.id.as_string()));
                    on_saved.run(info);
                }
                Err(e) => vm.error.set(Some(format!("Failed to save: {}", e))),
            }
        });
    }
}
