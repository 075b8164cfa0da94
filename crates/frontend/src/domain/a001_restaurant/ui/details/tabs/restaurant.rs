use leptos::prelude::*;

use super::FormField;
use crate::domain::a001_restaurant::ui::details::view_model::RegistrationVm;

#[component]
pub fn RestaurantTab(vm: RegistrationVm) -> impl IntoView {
    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Restaurant details"</h4>
            <div class="details-grid--3col">
                <FormField
                    label="Restaurant name"
                    value=vm.name
                    error=vm.field_error("restaurant.name")
                    placeholder="e.g. Tandoor Tales"
                />
                <FormField
                    label="Owner name"
                    value=vm.owner_name
                    error=vm.field_error("restaurant.ownerName")
                />
                <FormField
                    label="Category"
                    value=vm.category
                    error=vm.field_error("restaurant.category")
                    placeholder="e.g. North Indian"
                />
                <FormField
                    label="Tagline"
                    value=vm.tagline
                    error=vm.field_error("restaurant.tagline")
                />
            </div>
        </div>
    }
}
