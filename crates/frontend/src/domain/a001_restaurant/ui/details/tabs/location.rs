use leptos::prelude::*;

use super::FormField;
use crate::domain::a001_restaurant::ui::details::view_model::RegistrationVm;

#[component]
pub fn LocationTab(vm: RegistrationVm) -> impl IntoView {
    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Location details"</h4>
            <div class="details-grid--3col">
                <FormField
                    label="Address"
                    value=vm.address
                    error=vm.field_error("location.address")
                />
                <FormField
                    label="City"
                    value=vm.city
                    error=vm.field_error("location.city")
                />
                <FormField
                    label="State"
                    value=vm.state
                    error=vm.field_error("location.state")
                />
                <FormField
                    label="Pincode"
                    value=vm.pincode
                    error=vm.field_error("location.pincode")
                    placeholder="6 digits"
                />
                <FormField
                    label="Landmark"
                    value=vm.landmark
                    error=Signal::derive(|| None::<String>)
                />
            </div>
        </div>
    }
}
