use leptos::prelude::*;

use super::FormField;
use crate::domain::a001_restaurant::ui::details::view_model::RegistrationVm;

#[component]
pub fn ContactTab(vm: RegistrationVm) -> impl IntoView {
    view! {
        <div class="details-section">
            <h4 class="details-section__title">"Contact details"</h4>
            <div class="details-grid--3col">
                <FormField
                    label="Phone"
                    value=vm.phone
                    error=vm.field_error("contact.phone")
                    placeholder="10 digits"
                />
                <FormField
                    label="Alternate phone"
                    value=vm.alternate_phone
                    error=Signal::derive(|| None::<String>)
                />
                <FormField
                    label="Support email"
                    value=vm.support_email
                    error=Signal::derive(|| None::<String>)
                />
            </div>
        </div>
    }
}
