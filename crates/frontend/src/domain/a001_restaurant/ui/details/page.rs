//! Registration wizard page: tab bar, active section, footer actions.

use contracts::domain::a001_restaurant::Restaurant;
use contracts::shared::forms::{CenterAction, RegistrationTab, TabStatus};
use leptos::prelude::*;
use thaw::*;

use super::tabs::{ContactTab, LocationTab, LoginTab, RestaurantTab};
use super::view_model::RegistrationVm;
use crate::shared::icons::icon;

#[component]
pub fn RestaurantDetails(
    id: Option<String>,
    #[prop(into)] on_saved: Callback<Restaurant>,
    #[prop(into)] on_close: Callback<()>,
) -> impl IntoView {
    let is_edit = id.is_some();
    let vm = RegistrationVm::new(id);
    let title = if is_edit {
        "Edit restaurant"
    } else {
        "New restaurant"
    };

    let active_tab = vm.active_tab();
    let center_action = vm.center_action();

    let handle_center = move |_| {
        match center_action.get_untracked() {
            CenterAction::Update => vm.update(on_saved),
            CenterAction::Register => {
                let confirmed = window()
                    .confirm_with_message("Publish this restaurant listing?")
                    .unwrap_or(false);
                if confirmed {
                    vm.register(on_saved);
                }
            }
            CenterAction::SaveDraft => vm.save_draft(true, on_saved),
        }
    };

    let handle_close = move |_| {
        vm.close(on_saved, on_close);
    };

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h2>{title}</h2>
                    {move || {
                        (vm.id.get().is_some())
                            .then(|| {
                                view! {
                                    <span class=move || {
                                        format!("status-badge status-badge--{}", vm.status.get().as_str())
                                    }>{move || vm.status.get().as_str().to_string()}</span>
                                }
                            })
                    }}
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=handle_close
                    >
                        {icon("x")}
                        " Close"
                    </Button>
                </div>
            </div>

            <div class="wizard__tabs">
                {RegistrationTab::ALL
                    .iter()
                    .map(|tab| {
                        let tab = *tab;
                        let status = vm.tab_status(tab);
                        view! {
                            <button
                                class=move || {
                                    let mut class = String::from("wizard-tab");
                                    if active_tab.get() == tab {
                                        class.push_str(" wizard-tab--active");
                                    }
                                    match status.get() {
                                        TabStatus::Error => class.push_str(" wizard-tab--error"),
                                        TabStatus::Success => class.push_str(" wizard-tab--success"),
                                        TabStatus::Neutral => {}
                                    }
                                    class
                                }
                                on:click=move |_| vm.jump_to(tab)
                            >
                                {tab.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>

            <div class="page__content">
                {move || {
                    vm.error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="warning-box" style="background: var(--color-error-50); border-color: var(--color-error-100); margin: var(--spacing-md);">
                                    <span class="warning-box__icon" style="color: var(--color-error);">"⚠"</span>
                                    <span class="warning-box__text" style="color: var(--color-error);">{err}</span>
                                </div>
                            }
                        })
                }}
                {move || {
                    if vm.loading.get() {
                        view! { <div class="page__loading">"Loading..."</div> }.into_any()
                    } else {
                        match active_tab.get() {
                            RegistrationTab::Login => view! { <LoginTab vm=vm /> }.into_any(),
                            RegistrationTab::Restaurant => {
                                view! { <RestaurantTab vm=vm /> }.into_any()
                            }
                            RegistrationTab::Contact => view! { <ContactTab vm=vm /> }.into_any(),
                            RegistrationTab::Location => view! { <LocationTab vm=vm /> }.into_any(),
                        }
                    }
                }}
            </div>

            <div class="wizard__footer">
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.go_back()
                    disabled=Signal::derive(move || active_tab.get().prev().is_none())
                >
                    "Back"
                </Button>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=handle_center
                    disabled=Signal::derive(move || vm.saving.get())
                >
                    {icon("save")}
                    {move || format!(" {}", center_action.get().label())}
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| vm.go_next()
                    disabled=Signal::derive(move || active_tab.get().next().is_none())
                >
                    "Next"
                </Button>
            </div>
        </div>
    }
}
