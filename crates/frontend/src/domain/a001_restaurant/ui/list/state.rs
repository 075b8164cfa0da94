use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug)]
pub struct RestaurantListState {
    pub selected: RwSignal<HashSet<String>>,
    pub filter: RwSignal<String>,
    pub sort_field: RwSignal<String>,
    pub sort_ascending: RwSignal<bool>,
}

pub fn create_state() -> RestaurantListState {
    RestaurantListState {
        selected: RwSignal::new(HashSet::new()),
        filter: RwSignal::new(String::new()),
        sort_field: RwSignal::new("name".to_string()),
        sort_ascending: RwSignal::new(true),
    }
}
