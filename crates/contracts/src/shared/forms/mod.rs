//! Pure form-orchestration engine behind the registration wizard and the
//! restaurant-info editor.
//!
//! Nothing in here touches the DOM or the network: the frontend view
//! models feed values in and render the statuses and error maps that come
//! back out. That keeps every state transition natively testable.

pub mod draft;
pub mod field_array;
pub mod registration;
pub mod rules;
pub mod store;
pub mod wizard;

pub use draft::CloseOutcome;
pub use field_array::{AddOutcome, FieldArray, Row};
pub use rules::{FieldSpec, PatternKind, Rule};
pub use store::{FormStore, FormValues};
pub use wizard::{CenterAction, RegistrationTab, TabStatus, Wizard};
