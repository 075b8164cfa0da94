mod contact;
mod location;
mod login;
mod restaurant;

pub use contact::ContactTab;
pub use location::LocationTab;
pub use login::LoginTab;
pub use restaurant::RestaurantTab;

use leptos::prelude::*;
use thaw::*;

/// One labelled input with its validation message. Every tab is built
/// out of these.
#[component]
pub fn FormField(
    label: &'static str,
    value: RwSignal<String>,
    #[prop(into)] error: Signal<Option<String>>,
    #[prop(optional)] placeholder: &'static str,
    #[prop(optional)] input_type: Option<InputType>,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            <Input
                value=value
                placeholder=placeholder
                input_type=input_type.unwrap_or(InputType::Text)
                attr:style="width: 100%;"
            />
            {move || {
                error
                    .get()
                    .map(|message| {
                        view! { <span class="form__error">{message}</span> }
                    })
            }}
        </div>
    }
}
