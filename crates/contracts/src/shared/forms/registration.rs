//! Static field schema of the restaurant registration wizard, plus the
//! conversions between the wire DTO and the flat form-value map.

use serde_json::{json, Value};

use crate::domain::a001_restaurant::RestaurantDto;

use super::rules::{FieldSpec, PatternKind, Rule};
use super::store::FormValues;
use super::wizard::RegistrationTab;

/// Record-level keys never counted as user content by the draft check.
/// The wizard's own value map carries schema paths only (see
/// `values_from_dto`), so these only come into play when a raw record
/// payload is flattened into the map.
pub const DRAFT_EXCLUDED: &[&str] = &["id", "status", "isActive", "createdAt", "updatedAt"];

const SCHEMA: &[FieldSpec] = &[
    // Login
    FieldSpec {
        path: "login.email",
        label: "Email",
        tab: RegistrationTab::Login,
        rules: &[Rule::Required, Rule::Pattern(PatternKind::Email)],
    },
    FieldSpec {
        path: "login.password",
        label: "Password",
        tab: RegistrationTab::Login,
        rules: &[Rule::Required, Rule::MinLength(6)],
    },
    FieldSpec {
        path: "login.confirmPassword",
        label: "Confirm password",
        tab: RegistrationTab::Login,
        rules: &[Rule::Required, Rule::Matches("login.password")],
    },
    // Restaurant
    FieldSpec {
        path: "restaurant.name",
        label: "Restaurant name",
        tab: RegistrationTab::Restaurant,
        rules: &[Rule::Required, Rule::MaxLength(80)],
    },
    FieldSpec {
        path: "restaurant.ownerName",
        label: "Owner name",
        tab: RegistrationTab::Restaurant,
        rules: &[Rule::Required],
    },
    FieldSpec {
        path: "restaurant.category",
        label: "Category",
        tab: RegistrationTab::Restaurant,
        rules: &[Rule::Required],
    },
    FieldSpec {
        path: "restaurant.tagline",
        label: "Tagline",
        tab: RegistrationTab::Restaurant,
        rules: &[Rule::Required, Rule::MaxLength(120)],
    },
    // Contact
    FieldSpec {
        path: "contact.phone",
        label: "Phone",
        tab: RegistrationTab::Contact,
        rules: &[Rule::Required, Rule::Pattern(PatternKind::Phone)],
    },
    // Location
    FieldSpec {
        path: "location.address",
        label: "Address",
        tab: RegistrationTab::Location,
        rules: &[Rule::Required],
    },
    FieldSpec {
        path: "location.city",
        label: "City",
        tab: RegistrationTab::Location,
        rules: &[Rule::Required],
    },
    FieldSpec {
        path: "location.state",
        label: "State",
        tab: RegistrationTab::Location,
        rules: &[Rule::Required],
    },
    FieldSpec {
        path: "location.pincode",
        label: "Pincode",
        tab: RegistrationTab::Location,
        rules: &[Rule::Required, Rule::Pattern(PatternKind::Pincode)],
    },
];

pub fn registration_schema() -> &'static [FieldSpec] {
    SCHEMA
}

fn opt_str(value: Option<&String>) -> Value {
    json!(value.map(String::as_str).unwrap_or(""))
}

fn get_string(values: &FormValues, path: &str) -> String {
    match values.get(path) {
        Some(Value::String(s)) => s.clone(),
        _ => String::new(),
    }
}

fn get_opt(values: &FormValues, path: &str) -> Option<String> {
    let s = get_string(values, path);
    if s.trim().is_empty() {
        None
    } else {
        Some(s)
    }
}

/// Flatten a DTO into the wizard's value map. Identity, status and
/// timestamps are deliberately left out; the view model keeps those.
pub fn values_from_dto(dto: &RestaurantDto) -> FormValues {
    let mut values = FormValues::new();
    values.insert("login.email".into(), json!(dto.login.email));
    values.insert("login.password".into(), json!(dto.login.password));
    values.insert(
        "login.confirmPassword".into(),
        json!(dto.login.confirm_password),
    );
    values.insert("restaurant.name".into(), json!(dto.restaurant.name));
    values.insert(
        "restaurant.ownerName".into(),
        json!(dto.restaurant.owner_name),
    );
    values.insert("restaurant.category".into(), json!(dto.restaurant.category));
    values.insert("restaurant.tagline".into(), json!(dto.restaurant.tagline));
    values.insert("contact.phone".into(), json!(dto.contact.phone));
    values.insert(
        "contact.alternatePhone".into(),
        opt_str(dto.contact.alternate_phone.as_ref()),
    );
    values.insert(
        "contact.supportEmail".into(),
        opt_str(dto.contact.support_email.as_ref()),
    );
    values.insert("location.address".into(), json!(dto.location.address));
    values.insert("location.city".into(), json!(dto.location.city));
    values.insert("location.state".into(), json!(dto.location.state));
    values.insert("location.pincode".into(), json!(dto.location.pincode));
    values.insert(
        "location.landmark".into(),
        opt_str(dto.location.landmark.as_ref()),
    );
    values
}

/// Rebuild the field groups of a DTO from the value map. Identity,
/// status and timestamps stay at their defaults; the caller merges them.
pub fn dto_from_values(values: &FormValues) -> RestaurantDto {
    let mut dto = RestaurantDto::default();
    dto.login.email = get_string(values, "login.email");
    dto.login.password = get_string(values, "login.password");
    dto.login.confirm_password = get_string(values, "login.confirmPassword");
    dto.restaurant.name = get_string(values, "restaurant.name");
    dto.restaurant.owner_name = get_string(values, "restaurant.ownerName");
    dto.restaurant.category = get_string(values, "restaurant.category");
    dto.restaurant.tagline = get_string(values, "restaurant.tagline");
    dto.contact.phone = get_string(values, "contact.phone");
    dto.contact.alternate_phone = get_opt(values, "contact.alternatePhone");
    dto.contact.support_email = get_opt(values, "contact.supportEmail");
    dto.location.address = get_string(values, "location.address");
    dto.location.city = get_string(values, "location.city");
    dto.location.state = get_string(values, "location.state");
    dto.location.pincode = get_string(values, "location.pincode");
    dto.location.landmark = get_opt(values, "location.landmark");
    dto
}

#[cfg(test)]
pub mod tests_support {
    use crate::domain::a001_restaurant::{
        ContactDetails, LocationDetails, LoginDetails, RestaurantDetails, RestaurantDto,
    };

    /// A DTO that satisfies every rule in the registration schema.
    pub fn complete_dto() -> RestaurantDto {
        RestaurantDto {
            login: LoginDetails {
                email: "owner@tandoor.in".into(),
                password: "secret123".into(),
                confirm_password: "secret123".into(),
            },
            restaurant: RestaurantDetails {
                name: "Tandoor Tales".into(),
                owner_name: "Asha Rao".into(),
                category: "North Indian".into(),
                tagline: "Slow-cooked, fast served".into(),
            },
            contact: ContactDetails {
                phone: "9876543210".into(),
                alternate_phone: Some("9876500000".into()),
                support_email: None,
            },
            location: LocationDetails {
                address: "12 MG Road".into(),
                city: "Pune".into(),
                state: "Maharashtra".into(),
                pincode: "411001".into(),
                landmark: None,
            },
            ..RestaurantDto::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn schema_covers_every_tab() {
        for tab in RegistrationTab::ALL {
            assert!(
                SCHEMA.iter().any(|s| s.tab == tab),
                "tab {:?} owns no fields",
                tab
            );
        }
    }

    #[test]
    fn round_trip_dto_values_dto() {
        let dto = tests_support::complete_dto();
        let values = values_from_dto(&dto);
        let back = dto_from_values(&values);
        assert_eq!(back.login, dto.login);
        assert_eq!(back.restaurant, dto.restaurant);
        assert_eq!(back.contact, dto.contact);
        assert_eq!(back.location, dto.location);
    }

    #[test]
    fn blank_optionals_come_back_as_none() {
        let mut dto = tests_support::complete_dto();
        dto.contact.alternate_phone = None;
        dto.location.landmark = None;
        let back = dto_from_values(&values_from_dto(&dto));
        assert_eq!(back.contact.alternate_phone, None);
        assert_eq!(back.location.landmark, None);
    }
}
