//! Tab orchestrator for the registration wizard.
//!
//! Tracks the active tab, derives per-tab aggregate validity without a
//! full-form submit attempt, and decides what the center action button
//! does. Navigation is always allowed; only submission is gated on
//! whole-form validity.

use std::collections::HashMap;

use super::rules::{self, FieldSpec};
use super::store::FormValues;

/// Logical sections of the registration wizard, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationTab {
    Login,
    Restaurant,
    Contact,
    Location,
}

impl RegistrationTab {
    pub const ALL: [RegistrationTab; 4] = [
        Self::Login,
        Self::Restaurant,
        Self::Contact,
        Self::Location,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Restaurant => "Restaurant",
            Self::Contact => "Contact",
            Self::Location => "Location",
        }
    }

    pub fn next(&self) -> Option<Self> {
        let idx = Self::ALL.iter().position(|t| t == self)?;
        Self::ALL.get(idx + 1).copied()
    }

    pub fn prev(&self) -> Option<Self> {
        let idx = Self::ALL.iter().position(|t| t == self)?;
        idx.checked_sub(1).map(|i| Self::ALL[i])
    }

    pub fn is_last(&self) -> bool {
        self.next().is_none()
    }
}

/// Derived aggregate validity of one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TabStatus {
    Neutral,
    Success,
    Error,
}

/// What the center button does in the current wizard state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterAction {
    /// Edit mode: always a full submit.
    Update,
    /// Final tab with every tab valid: confirm, then submit.
    Register,
    /// Persist a draft, then advance to the next tab if there is one.
    SaveDraft,
}

impl CenterAction {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Update => "Update",
            Self::Register => "Register",
            Self::SaveDraft => "Save",
        }
    }
}

fn owned_by(schema: &[FieldSpec], tab: RegistrationTab) -> Vec<FieldSpec> {
    schema.iter().filter(|s| s.tab == tab).copied().collect()
}

/// `Error` if the tab owns a surfaced error, or a filled field that
/// fails validation; `Success` if every owned field is filled and
/// valid; else `Neutral`. Blank fields count as untouched rather than
/// invalid, so a missing required value colors the tab only after a
/// navigation or submit attempt has surfaced it.
pub fn compute_tab_status(
    tab: RegistrationTab,
    values: &FormValues,
    surfaced: &HashMap<String, String>,
    schema: &[FieldSpec],
) -> TabStatus {
    let specs = owned_by(schema, tab);
    if specs.iter().any(|s| surfaced.contains_key(s.path)) {
        return TabStatus::Error;
    }
    let mut all_filled = true;
    for spec in &specs {
        if !rules::is_filled(values.get(spec.path)) {
            all_filled = false;
            continue;
        }
        if rules::validate_field(spec, values).is_some() {
            return TabStatus::Error;
        }
    }
    if all_filled && !specs.is_empty() {
        TabStatus::Success
    } else {
        TabStatus::Neutral
    }
}

/// Every tab filled and valid, independent of what has been surfaced.
pub fn all_tabs_valid(values: &FormValues, schema: &[FieldSpec]) -> bool {
    let no_surfaced = HashMap::new();
    RegistrationTab::ALL
        .iter()
        .all(|tab| compute_tab_status(*tab, values, &no_surfaced, schema) == TabStatus::Success)
}

/// Wizard navigation state.
#[derive(Debug, Clone)]
pub struct Wizard {
    pub active: RegistrationTab,
    pub edit_mode: bool,
    skip_draft_on_close: bool,
}

impl Wizard {
    pub fn new(edit_mode: bool) -> Self {
        Self {
            active: RegistrationTab::Login,
            edit_mode,
            skip_draft_on_close: false,
        }
    }

    fn validate_active(
        &self,
        values: &FormValues,
        schema: &[FieldSpec],
    ) -> HashMap<String, String> {
        rules::validate_fields(&owned_by(schema, self.active), values)
    }

    /// Validate the active tab; advance only when it has no errors.
    /// No-op at the last tab. The returned error map is what the form
    /// should surface either way.
    pub fn go_next(
        &mut self,
        values: &FormValues,
        schema: &[FieldSpec],
    ) -> HashMap<String, String> {
        let errors = self.validate_active(values, schema);
        if errors.is_empty() {
            if let Some(next) = self.active.next() {
                self.active = next;
            }
        }
        errors
    }

    /// Validate the active tab so errors surface, then move back
    /// unconditionally. No-op at the first tab.
    pub fn go_back(
        &mut self,
        values: &FormValues,
        schema: &[FieldSpec],
    ) -> HashMap<String, String> {
        let errors = self.validate_active(values, schema);
        if let Some(prev) = self.active.prev() {
            self.active = prev;
        }
        errors
    }

    /// Validate the tab being left, then navigate regardless of validity.
    pub fn jump_to(
        &mut self,
        target: RegistrationTab,
        values: &FormValues,
        schema: &[FieldSpec],
    ) -> HashMap<String, String> {
        let errors = self.validate_active(values, schema);
        self.active = target;
        errors
    }

    /// Resolve the center action for the current state.
    pub fn center_action(&self, values: &FormValues, schema: &[FieldSpec]) -> CenterAction {
        if self.edit_mode {
            CenterAction::Update
        } else if self.active.is_last() && all_tabs_valid(values, schema) {
            CenterAction::Register
        } else {
            CenterAction::SaveDraft
        }
    }

    /// Arm the skip flag right after a successful publish so closing the
    /// wizard does not also persist a draft.
    pub fn mark_published(&mut self) {
        self.skip_draft_on_close = true;
    }

    /// Read and clear the skip flag.
    pub fn take_skip_flag(&mut self) -> bool {
        std::mem::take(&mut self.skip_draft_on_close)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::forms::registration::{self, registration_schema};
    use serde_json::json;

    fn valid_values() -> FormValues {
        registration::values_from_dto(&registration::tests_support::complete_dto())
    }

    #[test]
    fn tab_order_is_fixed() {
        assert_eq!(RegistrationTab::Login.next(), Some(RegistrationTab::Restaurant));
        assert_eq!(RegistrationTab::Location.next(), None);
        assert_eq!(RegistrationTab::Login.prev(), None);
        assert_eq!(
            RegistrationTab::Location.prev(),
            Some(RegistrationTab::Contact)
        );
    }

    #[test]
    fn blanked_required_field_invalidates_form_without_painting_tab() {
        let schema = registration_schema();
        let mut values = valid_values();
        assert!(all_tabs_valid(&values, schema));

        // Blank means untouched: the tab drops back to neutral, but the
        // form is no longer submittable.
        values.insert("restaurant.name".into(), json!(""));
        assert_eq!(
            compute_tab_status(RegistrationTab::Restaurant, &values, &HashMap::new(), schema),
            TabStatus::Neutral
        );
        assert!(!all_tabs_valid(&values, schema));
    }

    #[test]
    fn untouched_tab_is_neutral() {
        let schema = registration_schema();
        let values = FormValues::new();
        for tab in RegistrationTab::ALL {
            assert_eq!(
                compute_tab_status(tab, &values, &HashMap::new(), schema),
                TabStatus::Neutral
            );
        }
        assert!(!all_tabs_valid(&values, schema));
    }

    #[test]
    fn fresh_form_seeded_with_empty_strings_is_all_neutral() {
        // Input bindings seed every path with "" before the user types.
        let schema = registration_schema();
        let mut values = FormValues::new();
        for spec in schema {
            values.insert(spec.path.to_string(), json!(""));
        }
        for tab in RegistrationTab::ALL {
            assert_eq!(
                compute_tab_status(tab, &values, &HashMap::new(), schema),
                TabStatus::Neutral
            );
        }
    }

    #[test]
    fn surfaced_errors_paint_only_the_owning_tab() {
        let schema = registration_schema();
        let mut wizard = Wizard::new(false);
        let values = FormValues::new();
        let errors = wizard.go_next(&values, schema);
        assert!(!errors.is_empty());
        assert_eq!(
            compute_tab_status(RegistrationTab::Login, &values, &errors, schema),
            TabStatus::Error
        );
        assert_eq!(
            compute_tab_status(RegistrationTab::Contact, &values, &errors, schema),
            TabStatus::Neutral
        );
    }

    #[test]
    fn invalid_pattern_is_error_even_when_filled() {
        let schema = registration_schema();
        let mut values = valid_values();
        values.insert("contact.phone".into(), json!("12345"));
        assert_eq!(
            compute_tab_status(RegistrationTab::Contact, &values, &HashMap::new(), schema),
            TabStatus::Error
        );
    }

    #[test]
    fn go_next_blocked_by_errors() {
        let schema = registration_schema();
        let mut wizard = Wizard::new(false);
        let errors = wizard.go_next(&FormValues::new(), schema);
        assert!(!errors.is_empty());
        assert_eq!(wizard.active, RegistrationTab::Login);

        let errors = wizard.go_next(&valid_values(), schema);
        assert!(errors.is_empty());
        assert_eq!(wizard.active, RegistrationTab::Restaurant);
    }

    #[test]
    fn go_next_noop_at_last_tab() {
        let schema = registration_schema();
        let mut wizard = Wizard::new(false);
        wizard.active = RegistrationTab::Location;
        wizard.go_next(&valid_values(), schema);
        assert_eq!(wizard.active, RegistrationTab::Location);
    }

    #[test]
    fn go_back_surfaces_errors_but_still_moves() {
        let schema = registration_schema();
        let mut wizard = Wizard::new(false);
        wizard.active = RegistrationTab::Contact;
        let errors = wizard.go_back(&FormValues::new(), schema);
        assert!(!errors.is_empty());
        assert_eq!(wizard.active, RegistrationTab::Restaurant);
    }

    #[test]
    fn jump_always_navigates() {
        let schema = registration_schema();
        let mut wizard = Wizard::new(false);
        let errors = wizard.jump_to(RegistrationTab::Location, &FormValues::new(), schema);
        assert!(!errors.is_empty());
        assert_eq!(wizard.active, RegistrationTab::Location);
    }

    #[test]
    fn center_action_matrix() {
        let schema = registration_schema();
        let values = valid_values();

        let mut wizard = Wizard::new(true);
        assert_eq!(wizard.center_action(&values, schema), CenterAction::Update);

        wizard = Wizard::new(false);
        assert_eq!(
            wizard.center_action(&values, schema),
            CenterAction::SaveDraft
        );

        wizard.active = RegistrationTab::Location;
        assert_eq!(wizard.center_action(&values, schema), CenterAction::Register);

        // Final tab but one tab incomplete: still a draft save.
        let mut partial = values.clone();
        partial.insert("login.email".into(), json!(""));
        assert_eq!(
            wizard.center_action(&partial, schema),
            CenterAction::SaveDraft
        );
    }

    #[test]
    fn skip_flag_reads_once() {
        let mut wizard = Wizard::new(false);
        assert!(!wizard.take_skip_flag());
        wizard.mark_published();
        assert!(wizard.take_skip_flag());
        assert!(!wizard.take_skip_flag());
    }
}
