//! ViewModel for the registration wizard (EditDetails MVVM standard).
//!
//! Form fields are individual RwSignals for THAW two-way binding. The
//! validation source of truth is a [`FormStore`]: commands push the
//! current signal values into it, run the wizard transition, and the
//! store's error subscriptions feed the reactive `field_errors` map the
//! tabs render from.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use contracts::domain::a001_restaurant::{RecordStatus, Restaurant, RestaurantDto};
use contracts::domain::common::AggregateId;
use contracts::shared::forms::registration::{
    dto_from_values, registration_schema, values_from_dto, DRAFT_EXCLUDED,
};
use contracts::shared::forms::{
    draft, rules, CenterAction, CloseOutcome, FormStore, FormValues, RegistrationTab, TabStatus,
    Wizard,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use serde_json::json;

use crate::domain::a001_restaurant::api;

/// ViewModel for the restaurant registration / edit wizard.
#[derive(Clone, Copy)]
pub struct RegistrationVm {
    // === Record identity (kept out of the form value map) ===
    pub id: RwSignal<Option<String>>,
    pub status: RwSignal<RecordStatus>,
    pub is_active: RwSignal<bool>,
    pub created_at: RwSignal<Option<DateTime<Utc>>>,

    // === Form fields (individual RwSignals for THAW) ===
    pub email: RwSignal<String>,
    pub password: RwSignal<String>,
    pub confirm_password: RwSignal<String>,
    pub name: RwSignal<String>,
    pub owner_name: RwSignal<String>,
    pub category: RwSignal<String>,
    pub tagline: RwSignal<String>,
    pub phone: RwSignal<String>,
    pub alternate_phone: RwSignal<String>,
    pub support_email: RwSignal<String>,
    pub address: RwSignal<String>,
    pub city: RwSignal<String>,
    pub state: RwSignal<String>,
    pub pincode: RwSignal<String>,
    pub landmark: RwSignal<String>,

    // === Orchestration state ===
    wizard: RwSignal<Wizard>,
    store: StoredValue<FormStore, LocalStorage>,
    pub field_errors: RwSignal<HashMap<String, String>>,
    values_memo: Memo<FormValues>,

    // === UI state ===
    pub loading: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl RegistrationVm {
    pub fn new(id: Option<String>) -> Self {
        let edit_mode = id.is_some();

        let email = RwSignal::new(String::new());
        let password = RwSignal::new(String::new());
        let confirm_password = RwSignal::new(String::new());
        let name = RwSignal::new(String::new());
        let owner_name = RwSignal::new(String::new());
        let category = RwSignal::new(String::new());
        let tagline = RwSignal::new(String::new());
        let phone = RwSignal::new(String::new());
        let alternate_phone = RwSignal::new(String::new());
        let support_email = RwSignal::new(String::new());
        let address = RwSignal::new(String::new());
        let city = RwSignal::new(String::new());
        let state = RwSignal::new(String::new());
        let pincode = RwSignal::new(String::new());
        let landmark = RwSignal::new(String::new());

        let values_memo = Memo::new(move |_| {
            let mut values = FormValues::new();
            values.insert("login.email".into(), json!(email.get()));
            values.insert("login.password".into(), json!(password.get()));
            values.insert("login.confirmPassword".into(), json!(confirm_password.get()));
            values.insert("restaurant.name".into(), json!(name.get()));
            values.insert("restaurant.ownerName".into(), json!(owner_name.get()));
            values.insert("restaurant.category".into(), json!(category.get()));
            values.insert("restaurant.tagline".into(), json!(tagline.get()));
            values.insert("contact.phone".into(), json!(phone.get()));
            values.insert("contact.alternatePhone".into(), json!(alternate_phone.get()));
            values.insert("contact.supportEmail".into(), json!(support_email.get()));
            values.insert("location.address".into(), json!(address.get()));
            values.insert("location.city".into(), json!(city.get()));
            values.insert("location.state".into(), json!(state.get()));
            values.insert("location.pincode".into(), json!(pincode.get()));
            values.insert("location.landmark".into(), json!(landmark.get()));
            values
        });

        let vm = Self {
            id: RwSignal::new(None),
            status: RwSignal::new(RecordStatus::Draft),
            is_active: RwSignal::new(false),
            created_at: RwSignal::new(None),
            email,
            password,
            confirm_password,
            name,
            owner_name,
            category,
            tagline,
            phone,
            alternate_phone,
            support_email,
            address,
            city,
            state,
            pincode,
            landmark,
            wizard: RwSignal::new(Wizard::new(edit_mode)),
            store: StoredValue::new_local(FormStore::new()),
            field_errors: RwSignal::new(HashMap::new()),
            values_memo,
            loading: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        };

        // Bridge store error subscriptions into the reactive error map.
        let field_errors = vm.field_errors;
        vm.store.with_value(|store| {
            for spec in registration_schema() {
                let path = spec.path;
                store.subscribe_to_errors(path, move |error| {
                    field_errors.update(|map| match error {
                        Some(message) => {
                            map.insert(path.to_string(), message);
                        }
                        None => {
                            map.remove(path);
                        }
                    });
                });
            }
        });

        if let Some(existing_id) = id {
            vm.load(existing_id);
        }

        vm
    }

    // === Derived signals ===

    pub fn active_tab(&self) -> Signal<RegistrationTab> {
        let wizard = self.wizard;
        Signal::derive(move || wizard.get().active)
    }

    pub fn tab_status(&self, tab: RegistrationTab) -> Signal<TabStatus> {
        let values = self.values_memo;
        let field_errors = self.field_errors;
        Signal::derive(move || {
            field_errors.with(|surfaced| {
                contracts::shared::forms::wizard::compute_tab_status(
                    tab,
                    &values.get(),
                    surfaced,
                    registration_schema(),
                )
            })
        })
    }

    pub fn center_action(&self) -> Signal<CenterAction> {
        let wizard = self.wizard;
        let values = self.values_memo;
        Signal::derive(move || wizard.get().center_action(&values.get(), registration_schema()))
    }

    pub fn field_error(&self, path: &'static str) -> Signal<Option<String>> {
        let field_errors = self.field_errors;
        Signal::derive(move || field_errors.with(|map| map.get(path).cloned()))
    }

    // === Navigation commands ===

    pub fn go_next(&self) {
        let values = self.values_untracked();
        let mut wizard = self.wizard.get_untracked();
        let errors = wizard.go_next(&values, registration_schema());
        self.wizard.set(wizard);
        self.publish_errors(values, errors);
    }

    pub fn go_back(&self) {
        let values = self.values_untracked();
        let mut wizard = self.wizard.get_untracked();
        let errors = wizard.go_back(&values, registration_schema());
        self.wizard.set(wizard);
        self.publish_errors(values, errors);
    }

    pub fn jump_to(&self, target: RegistrationTab) {
        let values = self.values_untracked();
        let mut wizard = self.wizard.get_untracked();
        let errors = wizard.jump_to(target, &values, registration_schema());
        self.wizard.set(wizard);
        self.publish_errors(values, errors);
    }

    // === Persistence commands ===

    /// Persist the current form as a draft. Used by the center "Save"
    /// action (which then advances) and by the close-with-draft-check.
    pub fn save_draft(&self, advance: bool, on_saved: Callback<Restaurant>) {
        let vm = *self;
        vm.saving.set(true);
        vm.error.set(None);

        let had_id = vm.id.get_untracked();
        let dto = draft::prepare_draft(vm.current_dto(), Utc::now());

        spawn_local(async move {
            let result = match &had_id {
                Some(id) => api::update(id, &dto).await,
                None => api::create(&dto).await,
            };
            vm.saving.set(false);
            match result {
                Ok(record) => {
                    vm.id.set(Some(record.id.as_string()));
                    vm.status.set(record.status);
                    vm.created_at.set(Some(record.metadata.created_at));
                    if advance {
                        vm.wizard.update(|w| {
                            if let Some(next) = w.active.next() {
                                w.active = next;
                            }
                        });
                    }
                    on_saved.run(record);
                }
                Err(e) => vm.error.set(Some(format!("Failed to save draft: {}", e))),
            }
        });
    }

    /// Full-form submit for the final "Register" action: promotes the
    /// in-progress record (draft or brand new) to an active listing.
    pub fn register(&self, on_saved: Callback<Restaurant>) {
        if !self.validate_all() {
            return;
        }
        let vm = *self;
        vm.saving.set(true);
        vm.error.set(None);

        let had_id = vm.id.get_untracked();
        let dto = draft::promote_to_active(vm.current_dto(), Utc::now());

        spawn_local(async move {
            // A draft being promoted already exists: update, not create.
            let result = match &had_id {
                Some(id) => api::update(id, &dto).await,
                None => api::create(&dto).await,
            };
            vm.saving.set(false);
            match result {
                Ok(record) => {
                    vm.id.set(Some(record.id.as_string()));
                    vm.status.set(record.status);
                    vm.is_active.set(record.is_active);
                    vm.wizard.update(|w| w.mark_published());
                    on_saved.run(record);
                }
                Err(e) => vm.error.set(Some(format!("Failed to register: {}", e))),
            }
        });
    }

    /// Full submit in edit mode. Keeps the record's current status and
    /// activity, stamps `updated_at`.
    pub fn update(&self, on_saved: Callback<Restaurant>) {
        if !self.validate_all() {
            return;
        }
        let vm = *self;
        let Some(id) = vm.id.get_untracked() else {
            vm.error.set(Some("Nothing to update".into()));
            return;
        };
        vm.saving.set(true);
        vm.error.set(None);

        let mut dto = vm.current_dto();
        dto.updated_at = Some(Utc::now());

        spawn_local(async move {
            match api::update(&id, &dto).await {
                Ok(record) => {
                    vm.saving.set(false);
                    on_saved.run(record);
                }
                Err(e) => {
                    vm.saving.set(false);
                    vm.error.set(Some(format!("Failed to update: {}", e)));
                }
            }
        });
    }

    /// Close with draft check. A publish that just happened arms the
    /// skip flag so the record is not immediately re-persisted as a
    /// draft.
    pub fn close(&self, on_saved: Callback<Restaurant>, on_close: Callback<()>) {
        let skip = {
            let mut wizard = self.wizard.get_untracked();
            let skip = wizard.take_skip_flag();
            self.wizard.set(wizard);
            skip
        };
        let values = self.values_untracked();
        match draft::close_outcome(&values, DRAFT_EXCLUDED, skip) {
            CloseOutcome::SkipAndClear | CloseOutcome::CloseOnly => on_close.run(()),
            CloseOutcome::PersistDraft => {
                // Persist, then close regardless of the outcome; a
                // failed draft save must not trap the user in the form.
                let vm = *self;
                vm.save_draft(false, on_saved);
                on_close.run(());
            }
        }
    }

    // === Data loading ===

    pub fn load(&self, id: String) {
        let vm = *self;
        vm.loading.set(true);
        vm.error.set(None);

        spawn_local(async move {
            match api::fetch_by_id(&id).await {
                Ok(record) => {
                    vm.from_record(&record);
                    vm.loading.set(false);
                }
                Err(e) => {
                    vm.loading.set(false);
                    vm.error.set(Some(format!("Failed to load: {}", e)));
                }
            }
        });
    }

    // === Helpers ===

    fn values_untracked(&self) -> FormValues {
        // Reading through the memo inside commands must not track.
        self.values_memo.get_untracked()
    }

    fn publish_errors(&self, values: FormValues, errors: HashMap<String, String>) {
        self.store.with_value(|store| {
            store.replace_values(values);
            store.set_errors(errors);
        });
    }

    /// Validate every tab; surface all errors. True when clean.
    fn validate_all(&self) -> bool {
        let values = self.values_untracked();
        let errors = rules::validate_fields(registration_schema(), &values);
        let ok = errors.is_empty();
        self.publish_errors(values, errors);
        ok
    }

    /// Current DTO: form fields from the signals, identity and
    /// lifecycle fields from the record signals.
    fn current_dto(&self) -> RestaurantDto {
        let mut dto = dto_from_values(&self.values_untracked());
        dto.id = self.id.get_untracked();
        dto.status = self.status.get_untracked();
        dto.is_active = self.is_active.get_untracked();
        dto.created_at = self.created_at.get_untracked();
        dto
    }

    /// Pre-fill every field from a loaded record (edit-mode round trip).
    fn from_record(&self, record: &Restaurant) {
        let dto = RestaurantDto::from(record.clone());
        let values = values_from_dto(&dto);
        let text = |path: &str| match values.get(path) {
            Some(serde_json::Value::String(s)) => s.clone(),
            _ => String::new(),
        };

        self.id.set(dto.id.clone());
        self.status.set(dto.status);
        self.is_active.set(dto.is_active);
        self.created_at.set(dto.created_at);

        self.email.set(text("login.email"));
        self.password.set(text("login.password"));
        self.confirm_password.set(text("login.confirmPassword"));
        self.name.set(text("restaurant.name"));
        self.owner_name.set(text("restaurant.ownerName"));
        self.category.set(text("restaurant.category"));
        self.tagline.set(text("restaurant.tagline"));
        self.phone.set(text("contact.phone"));
        self.alternate_phone.set(text("contact.alternatePhone"));
        self.support_email.set(text("contact.supportEmail"));
        self.address.set(text("location.address"));
        self.city.set(text("location.city"));
        self.state.set(text("location.state"));
        self.pincode.set(text("location.pincode"));
        self.landmark.set(text("location.landmark"));

        self.store.with_value(|store| store.replace_values(values));
    }
}
