//! Observable form-state store.
//!
//! Explicit bidirectional binding surface for form fields: views write
//! through `set_value`, read through `get_value`, and watch per-path
//! validation errors through `subscribe_to_errors`. The store knows
//! nothing about rendering; the UI layer mirrors it into reactive
//! signals.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use serde_json::Value;

/// Flat form values keyed by field path, e.g. `"login.email"`.
pub type FormValues = HashMap<String, Value>;

type ErrorCallback = Rc<dyn Fn(Option<String>)>;

#[derive(Default)]
struct Inner {
    values: FormValues,
    errors: HashMap<String, String>,
    subscribers: HashMap<String, Vec<ErrorCallback>>,
}

/// Shared form state. Clones point at the same underlying state; the UI
/// is single-threaded so plain `Rc<RefCell<..>>` interior is enough.
#[derive(Clone, Default)]
pub struct FormStore {
    inner: Rc<RefCell<Inner>>,
}

impl FormStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_values(values: FormValues) -> Self {
        let store = Self::new();
        store.inner.borrow_mut().values = values;
        store
    }

    pub fn get_value(&self, path: &str) -> Option<Value> {
        self.inner.borrow().values.get(path).cloned()
    }

    pub fn set_value(&self, path: &str, value: Value) {
        self.inner.borrow_mut().values.insert(path.to_string(), value);
    }

    /// Snapshot of all current values.
    pub fn values(&self) -> FormValues {
        self.inner.borrow().values.clone()
    }

    /// Replace the whole value map (used when loading a record into the
    /// form). Does not touch errors.
    pub fn replace_values(&self, values: FormValues) {
        self.inner.borrow_mut().values = values;
    }

    pub fn error(&self, path: &str) -> Option<String> {
        self.inner.borrow().errors.get(path).cloned()
    }

    /// Watch validation errors for one path. The callback fires
    /// immediately with the current error, then on every change.
    pub fn subscribe_to_errors(&self, path: &str, callback: impl Fn(Option<String>) + 'static) {
        let callback: ErrorCallback = Rc::new(callback);
        callback(self.error(path));
        self.inner
            .borrow_mut()
            .subscribers
            .entry(path.to_string())
            .or_default()
            .push(callback);
    }

    /// Install a fresh error map, notifying subscribers of every path
    /// whose error appeared, changed, or cleared.
    pub fn set_errors(&self, errors: HashMap<String, String>) {
        let notify: Vec<(String, Option<String>)> = {
            let mut inner = self.inner.borrow_mut();
            let old = std::mem::replace(&mut inner.errors, errors);
            let inner = &*inner;
            let mut changed: Vec<(String, Option<String>)> = Vec::new();
            for (path, msg) in &inner.errors {
                if old.get(path) != Some(msg) {
                    changed.push((path.clone(), Some(msg.clone())));
                }
            }
            for path in old.keys() {
                if !inner.errors.contains_key(path) {
                    changed.push((path.clone(), None));
                }
            }
            changed
        };
        for (path, msg) in notify {
            let callbacks: Vec<ErrorCallback> = self
                .inner
                .borrow()
                .subscribers
                .get(&path)
                .map(|cbs| cbs.to_vec())
                .unwrap_or_default();
            for cb in callbacks {
                cb(msg.clone());
            }
        }
    }

    pub fn clear_errors(&self) {
        self.set_errors(HashMap::new());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn set_and_get_round_trip() {
        let store = FormStore::new();
        store.set_value("login.email", json!("a@b.co"));
        assert_eq!(store.get_value("login.email"), Some(json!("a@b.co")));
        assert_eq!(store.get_value("login.password"), None);
    }

    #[test]
    fn clones_share_state() {
        let store = FormStore::new();
        let alias = store.clone();
        alias.set_value("restaurant.name", json!("Tandoor Tales"));
        assert_eq!(
            store.get_value("restaurant.name"),
            Some(json!("Tandoor Tales"))
        );
    }

    #[test]
    fn subscribers_see_appear_change_and_clear() {
        let store = FormStore::new();
        let seen: Rc<RefCell<Vec<Option<String>>>> = Rc::default();
        let sink = seen.clone();
        store.subscribe_to_errors("login.email", move |e| sink.borrow_mut().push(e));

        let mut errors = HashMap::new();
        errors.insert("login.email".to_string(), "Email is required".to_string());
        store.set_errors(errors.clone());
        // Unchanged map must not re-notify.
        store.set_errors(errors);
        store.clear_errors();

        assert_eq!(
            *seen.borrow(),
            vec![
                None,
                Some("Email is required".to_string()),
                None,
            ]
        );
    }

    #[test]
    fn unrelated_paths_do_not_notify() {
        let store = FormStore::new();
        let count = Rc::new(RefCell::new(0));
        let sink = count.clone();
        store.subscribe_to_errors("contact.phone", move |_| *sink.borrow_mut() += 1);

        let mut errors = HashMap::new();
        errors.insert("login.email".to_string(), "Email is required".to_string());
        store.set_errors(errors);
        // One initial call only.
        assert_eq!(*count.borrow(), 1);
    }
}
