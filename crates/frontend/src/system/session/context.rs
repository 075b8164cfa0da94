//! Explicit session context, provided once at startup.
//!
//! Replaces ad hoc storage reads scattered across components: the
//! context is loaded in `App`, injected via `provide_context`, and every
//! mutation goes through a method with a defined save step.

use contracts::system::users::{User, UserRole};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use super::storage;

/// Identity snapshot of the signed-in user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    pub username: String,
    pub role: UserRole,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            username: user.username.clone(),
            role: user.role,
        }
    }
}

/// One line of the per-user cart snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub restaurant_id: String,
    pub item_name: String,
    pub price: f64,
    pub quantity: u32,
}

#[derive(Clone, Copy)]
pub struct SessionContext {
    pub user: RwSignal<Option<SessionUser>>,
    pub favorites: RwSignal<Vec<String>>,
    pub cart: RwSignal<Vec<CartLine>>,
}

impl SessionContext {
    /// Load lifecycle hook: restore the session and the signed-in
    /// user's cached snapshots from localStorage.
    pub fn load() -> Self {
        let user: Option<SessionUser> = storage::load_session_user();
        let (favorites, cart) = match &user {
            Some(u) => (
                storage::load_favorites(&u.id).unwrap_or_default(),
                storage::load_cart(&u.id).unwrap_or_default(),
            ),
            None => (Vec::new(), Vec::new()),
        };
        Self {
            user: RwSignal::new(user),
            favorites: RwSignal::new(favorites),
            cart: RwSignal::new(cart),
        }
    }

    pub fn sign_in(&self, user: &User) {
        let session_user = SessionUser::from(user);
        storage::save_session_user(&session_user);
        self.favorites.set(user.favorites.clone());
        storage::save_favorites(&session_user.id, &user.favorites);
        self.cart
            .set(storage::load_cart(&session_user.id).unwrap_or_default());
        self.user.set(Some(session_user));
    }

    pub fn sign_out(&self) {
        storage::clear_session_user();
        self.user.set(None);
        self.favorites.set(Vec::new());
        self.cart.set(Vec::new());
    }

    pub fn user_id(&self) -> Option<String> {
        self.user.with_untracked(|u| u.as_ref().map(|u| u.id.clone()))
    }

    /// Toggle a favorite locally and persist the snapshot. Returns the
    /// new list so the caller can PATCH the user resource.
    pub fn toggle_favorite(&self, restaurant_id: &str) -> Vec<String> {
        self.favorites.update(|favs| {
            if let Some(pos) = favs.iter().position(|id| id == restaurant_id) {
                favs.remove(pos);
            } else {
                favs.push(restaurant_id.to_string());
            }
        });
        let favorites = self.favorites.get_untracked();
        if let Some(user_id) = self.user_id() {
            storage::save_favorites(&user_id, &favorites);
        }
        favorites
    }

    /// Overwrite favorites (used to roll back a failed PATCH).
    pub fn set_favorites(&self, favorites: Vec<String>) {
        if let Some(user_id) = self.user_id() {
            storage::save_favorites(&user_id, &favorites);
        }
        self.favorites.set(favorites);
    }

    pub fn is_favorite(&self, restaurant_id: &str) -> bool {
        self.favorites
            .with(|favs| favs.iter().any(|id| id == restaurant_id))
    }

    /// Add one unit of an item to the cart snapshot.
    pub fn cart_add(&self, line: CartLine) {
        self.cart.update(|cart| {
            match cart.iter_mut().find(|l| {
                l.restaurant_id == line.restaurant_id && l.item_name == line.item_name
            }) {
                Some(existing) => existing.quantity += line.quantity,
                None => cart.push(line),
            }
        });
        self.persist_cart();
    }

    pub fn cart_remove(&self, restaurant_id: &str, item_name: &str) {
        self.cart.update(|cart| {
            cart.retain(|l| !(l.restaurant_id == restaurant_id && l.item_name == item_name));
        });
        self.persist_cart();
    }

    pub fn cart_count(&self) -> usize {
        self.cart.with(|cart| cart.iter().map(|l| l.quantity as usize).sum())
    }

    fn persist_cart(&self) {
        if let Some(user_id) = self.user_id() {
            storage::save_cart(&user_id, &self.cart.get_untracked());
        }
    }
}

/// Hook to access the session context.
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>().expect("SessionContext not found in component tree")
}
