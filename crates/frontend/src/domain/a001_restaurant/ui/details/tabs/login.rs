use leptos::prelude::*;
use thaw::*;

use super::FormField;
use crate::domain::a001_restaurant::ui::details::view_model::RegistrationVm;

#[component]
pub fn LoginTab(vm: RegistrationVm) -> impl IntoView {
    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Login details"</h4>
            <div class="details-grid--3col">
                <FormField
                    label="Email"
                    value=vm.email
                    error=vm.field_error("login.email")
                    placeholder="owner@example.com"
                />
                <FormField
                    label="Password"
                    value=vm.password
                    error=vm.field_error("login.password")
                    input_type=InputType::Password
                />
                <FormField
                    label="Confirm password"
                    value=vm.confirm_password
                    error=vm.field_error("login.confirmPassword")
                    input_type=InputType::Password
                />
            </div>
        </div>
    }
}
