//! localStorage backing for the session context.
//!
//! Only [`super::context::SessionContext`] reads or writes these keys;
//! the rest of the app goes through the context. Per-user snapshots are
//! a client-side cache, the user resource on the backend stays
//! authoritative.

use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::window;

const SESSION_USER_KEY: &str = "session_user";

fn local_storage() -> Option<web_sys::Storage> {
    window()?.local_storage().ok()?
}

fn load<T: DeserializeOwned>(key: &str) -> Option<T> {
    let raw = local_storage()?.get_item(key).ok()??;
    serde_json::from_str(&raw).ok()
}

fn save<T: Serialize>(key: &str, value: &T) {
    if let (Some(storage), Ok(json)) = (local_storage(), serde_json::to_string(value)) {
        let _ = storage.set_item(key, &json);
    }
}

fn remove(key: &str) {
    if let Some(storage) = local_storage() {
        let _ = storage.remove_item(key);
    }
}

fn favorites_key(user_id: &str) -> String {
    format!("favorites_{}", user_id)
}

fn cart_key(user_id: &str) -> String {
    format!("cart_{}", user_id)
}

pub fn load_session_user<T: DeserializeOwned>() -> Option<T> {
    load(SESSION_USER_KEY)
}

pub fn save_session_user<T: Serialize>(user: &T) {
    save(SESSION_USER_KEY, user)
}

pub fn clear_session_user() {
    remove(SESSION_USER_KEY)
}

pub fn load_favorites(user_id: &str) -> Option<Vec<String>> {
    load(&favorites_key(user_id))
}

pub fn save_favorites(user_id: &str, favorites: &[String]) {
    save(&favorites_key(user_id), &favorites)
}

pub fn load_cart<T: DeserializeOwned>(user_id: &str) -> Option<T> {
    load(&cart_key(user_id))
}

pub fn save_cart<T: Serialize>(user_id: &str, cart: &T) {
    save(&cart_key(user_id), cart)
}
