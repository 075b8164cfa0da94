//! Declarative per-field validation rules, grouped into a static schema.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

use super::store::FormValues;
use super::wizard::RegistrationTab;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").expect("phone regex"));
static PINCODE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[1-9][0-9]{5}$").expect("pincode regex"));

/// Named patterns used by [`Rule::Pattern`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    Email,
    Phone,
    Pincode,
}

impl PatternKind {
    fn regex(&self) -> &'static Regex {
        match self {
            Self::Email => &EMAIL_RE,
            Self::Phone => &PHONE_RE,
            Self::Pincode => &PINCODE_RE,
        }
    }
}

/// A single validation rule. Rules other than `Required` are skipped on
/// blank values so that only `Required` reports emptiness.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Rule {
    Required,
    MinLength(usize),
    MaxLength(usize),
    Pattern(PatternKind),
    /// Value must equal the string at the given path (confirm password).
    Matches(&'static str),
    /// Date value (YYYY-MM-DD) must not precede the date at the given path.
    NotBefore(&'static str),
    /// Numeric value must be greater than zero.
    Positive,
}

/// One field of a form: where it lives, which tab owns it, how it is
/// validated.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub path: &'static str,
    pub label: &'static str,
    pub tab: RegistrationTab,
    pub rules: &'static [Rule],
}

/// Type-aware "filled" check: booleans and numbers always count as
/// filled, strings must be non-blank after trim.
pub fn is_filled(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::Bool(_)) | Some(Value::Number(_)) => true,
        Some(Value::String(s)) => !s.trim().is_empty(),
        Some(Value::Array(a)) => !a.is_empty(),
        Some(Value::Object(o)) => !o.is_empty(),
    }
}

fn as_str(value: Option<&Value>) -> &str {
    match value {
        Some(Value::String(s)) => s.as_str(),
        _ => "",
    }
}

fn as_number(value: Option<&Value>) -> Option<f64> {
    match value {
        Some(Value::Number(n)) => n.as_f64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Validate one field against the current values; returns the first
/// failing rule's message.
pub fn validate_field(spec: &FieldSpec, values: &FormValues) -> Option<String> {
    let value = values.get(spec.path);
    for rule in spec.rules {
        if let Some(msg) = check_rule(rule, spec, value, values) {
            return Some(msg);
        }
    }
    None
}

/// Validate a group of fields; returns path -> message for every failure.
pub fn validate_fields(
    specs: &[FieldSpec],
    values: &FormValues,
) -> std::collections::HashMap<String, String> {
    specs
        .iter()
        .filter_map(|spec| validate_field(spec, values).map(|msg| (spec.path.to_string(), msg)))
        .collect()
}

fn check_rule(
    rule: &Rule,
    spec: &FieldSpec,
    value: Option<&Value>,
    values: &FormValues,
) -> Option<String> {
    let text = as_str(value);
    let blank = !is_filled(value);
    match rule {
        Rule::Required => blank.then(|| format!("{} is required", spec.label)),
        _ if blank => None,
        Rule::MinLength(min) => (text.chars().count() < *min)
            .then(|| format!("{} must be at least {} characters", spec.label, min)),
        Rule::MaxLength(max) => (text.chars().count() > *max)
            .then(|| format!("{} must be at most {} characters", spec.label, max)),
        Rule::Pattern(kind) => (!kind.regex().is_match(text.trim()))
            .then(|| format!("Enter a valid {}", spec.label.to_lowercase())),
        Rule::Matches(other) => {
            (text != as_str(values.get(*other))).then(|| format!("{} does not match", spec.label))
        }
        Rule::NotBefore(other) => {
            let this = chrono::NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").ok()?;
            let floor =
                chrono::NaiveDate::parse_from_str(as_str(values.get(*other)).trim(), "%Y-%m-%d")
                    .ok()?;
            (this < floor).then(|| format!("{} is earlier than {}", spec.label, floor))
        }
        Rule::Positive => match as_number(value) {
            Some(n) if n > 0.0 => None,
            _ => Some(format!("{} must be greater than zero", spec.label)),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn values(pairs: &[(&str, Value)]) -> FormValues {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    const EMAIL: FieldSpec = FieldSpec {
        path: "login.email",
        label: "Email",
        tab: RegistrationTab::Login,
        rules: &[Rule::Required, Rule::Pattern(PatternKind::Email)],
    };

    const CONFIRM: FieldSpec = FieldSpec {
        path: "login.confirmPassword",
        label: "Confirm password",
        tab: RegistrationTab::Login,
        rules: &[Rule::Required, Rule::Matches("login.password")],
    };

    #[test]
    fn required_fires_only_on_blank() {
        let vals = values(&[("login.email", json!("  "))]);
        assert_eq!(
            validate_field(&EMAIL, &vals),
            Some("Email is required".into())
        );
        let vals = values(&[("login.email", json!("a@b.co"))]);
        assert_eq!(validate_field(&EMAIL, &vals), None);
    }

    #[test]
    fn pattern_skipped_when_blank() {
        // Blank value: only Required reports, and only when present in rules.
        let spec = FieldSpec {
            rules: &[Rule::Pattern(PatternKind::Email)],
            ..EMAIL
        };
        assert_eq!(validate_field(&spec, &values(&[])), None);
    }

    #[test]
    fn email_pattern() {
        let bad = values(&[("login.email", json!("not-an-email"))]);
        assert_eq!(
            validate_field(&EMAIL, &bad),
            Some("Enter a valid email".into())
        );
    }

    #[test]
    fn phone_and_pincode_patterns() {
        assert!(PatternKind::Phone.regex().is_match("9876543210"));
        assert!(!PatternKind::Phone.regex().is_match("98765"));
        assert!(PatternKind::Pincode.regex().is_match("411001"));
        assert!(!PatternKind::Pincode.regex().is_match("041100"));
    }

    #[test]
    fn matches_compares_against_other_path() {
        let vals = values(&[
            ("login.password", json!("secret123")),
            ("login.confirmPassword", json!("secret124")),
        ]);
        assert_eq!(
            validate_field(&CONFIRM, &vals),
            Some("Confirm password does not match".into())
        );
        let vals = values(&[
            ("login.password", json!("secret123")),
            ("login.confirmPassword", json!("secret123")),
        ]);
        assert_eq!(validate_field(&CONFIRM, &vals), None);
    }

    #[test]
    fn not_before_orders_dates() {
        let spec = FieldSpec {
            path: "validTill",
            label: "Valid till",
            tab: RegistrationTab::Login,
            rules: &[Rule::NotBefore("validFrom")],
        };
        let vals = values(&[
            ("validFrom", json!("2025-06-01")),
            ("validTill", json!("2025-05-01")),
        ]);
        assert!(validate_field(&spec, &vals).is_some());
        let vals = values(&[
            ("validFrom", json!("2025-06-01")),
            ("validTill", json!("2025-06-01")),
        ]);
        assert_eq!(validate_field(&spec, &vals), None);
    }

    #[test]
    fn filled_check_is_type_aware() {
        assert!(is_filled(Some(&json!(false))));
        assert!(is_filled(Some(&json!(0))));
        assert!(!is_filled(Some(&json!(""))));
        assert!(!is_filled(Some(&json!("   "))));
        assert!(!is_filled(Some(&Value::Null)));
        assert!(!is_filled(None));
        assert!(is_filled(Some(&json!("x"))));
    }
}
