//! Restaurant-info editor page: record picker, menu and branch sections.

use contracts::domain::a002_restaurant_info::RestaurantInfo;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::sections::{BranchesSection, MenuSection};
use super::view_model::RestaurantInfoVm;
use crate::domain::a002_restaurant_info::api;
use crate::shared::icons::icon;

#[component]
pub fn RestaurantInfoDetails() -> impl IntoView {
    let vm = RestaurantInfoVm::new();
    let known: RwSignal<Vec<(String, String)>> = RwSignal::new(Vec::new());

    let fetch_known = move || {
        spawn_local(async move {
            if let Ok(list) = api::fetch_all().await {
                known.set(
                    list.iter()
                        .map(|info| (info.id.as_string(), info.restaurant_name.clone()))
                        .collect(),
                );
            }
        });
    };
    fetch_known();

    let on_saved = Callback::new(move |info: RestaurantInfo| {
        known.update(|list| {
            let id = info.id.as_string();
            match list.iter_mut().find(|(known_id, _)| *known_id == id) {
                Some(entry) => entry.1 = info.restaurant_name.clone(),
                None => list.push((id, info.restaurant_name.clone())),
            }
        });
    });

    view! {
        <div class="page page--detail">
            <div class="page__header">
                <div class="page__header-left">
                    <h2>"Restaurant info"</h2>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| vm.reset()
                    >
                        {icon("plus")}
                        " New"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=move |_| vm.save(on_saved)
                        disabled=Signal::derive(move || vm.saving.get())
                    >
                        {icon("save")}
                        " Save"
                    </Button>
                </div>
            </div>

            <div class="page__content">
                {move || {
                    vm.error
                        .get()
                        .map(|err| {
                            view! {
                                <div class="warning-box warning-box--error">
                                    <span class="warning-box__icon">"⚠"</span>
                                    <span class="warning-box__text">{err}</span>
                                </div>
                            }
                        })
                }}

                <div class="details-section">
                    <h4 class="details-section__title">"Record"</h4>
                    <div class="details-grid--3col">
                        <div class="form__group">
                            <label class="form__label">"Open existing"</label>
                            <select
                                class="form__input"
                                on:change=move |ev| {
                                    let id = event_target_value(&ev);
                                    if id.is_empty() {
                                        vm.reset();
                                    } else {
                                        vm.load(id);
                                    }
                                }
                            >
                                <option value="">"(new record)"</option>
                                {move || {
                                    known
                                        .get()
                                        .into_iter()
                                        .map(|(id, name)| {
                                            let selected = vm.id.get() == Some(id.clone());
                                            view! {
                                                <option value=id selected=selected>{name}</option>
                                            }
                                        })
                                        .collect_view()
                                }}
                            </select>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Restaurant name"</label>
                            <Input value=vm.restaurant_name attr:style="width: 100%;" />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Owner name"</label>
                            <Input value=vm.owner_name attr:style="width: 100%;" />
                        </div>
                    </div>
                </div>

                {move || {
                    if vm.loading.get() {
                        view! { <div class="page__loading">"Loading..."</div> }.into_any()
                    } else {
                        view! {
                            <MenuSection vm=vm />
                            <BranchesSection vm=vm />
                        }
                            .into_any()
                    }
                }}
            </div>
        </div>
    }
}
