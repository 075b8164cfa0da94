//! Menu collection: bounded row editor (1..=6 dishes).

use contracts::domain::a002_restaurant_info::MAX_MENU_ITEMS;
use leptos::prelude::*;
use thaw::*;

use super::super::view_model::RestaurantInfoVm;
use crate::shared::date_utils::format_price;
use crate::shared::icons::icon;

#[component]
pub fn MenuSection(vm: RestaurantInfoVm) -> impl IntoView {
    view! {
        <div class="details-section">
            <div class="details-section__header">
                <h4 class="details-section__title">"Menu"</h4>
                <span class="details-section__hint">
                    {move || format!("{} of {}", vm.menu.with(|arr| arr.len()), MAX_MENU_ITEMS)}
                </span>
                <Button
                    appearance=ButtonAppearance::Secondary
                    size=ButtonSize::Small
                    on_click=move |_| vm.menu_add()
                    disabled=Signal::derive(move || !vm.menu.with(|arr| arr.can_add()))
                >
                    {icon("plus")}
                    " Add dish"
                </Button>
            </div>

            {move || {
                let can_remove = vm.menu.with(|arr| arr.can_remove());
                vm.menu
                    .get()
                    .rows()
                    .iter()
                    .cloned()
                    .enumerate()
                    .map(|(i, row)| {
                        let item = row.value;
                        if row.editing {
                            view! {
                                <div class="array-row array-row--editing">
                                    <div class="details-grid--3col">
                                        <div class="form__group">
                                            <label class="form__label">"Dish name"</label>
                                            <input
                                                class="form__input"
                                                type="text"
                                                prop:value=item.name.clone()
                                                on:input=move |ev| {
                                                    vm.menu_update(i, |m| m.name = event_target_value(&ev))
                                                }
                                            />
                                        </div>
                                        <div class="form__group">
                                            <label class="form__label">"Category"</label>
                                            <input
                                                class="form__input"
                                                type="text"
                                                prop:value=item.category.clone()
                                                on:input=move |ev| {
                                                    vm.menu_update(
                                                        i,
                                                        |m| m.category = event_target_value(&ev),
                                                    )
                                                }
                                            />
                                        </div>
                                        <div class="form__group">
                                            <label class="form__label">"Price"</label>
                                            <input
                                                class="form__input"
                                                type="number"
                                                prop:value=item.price.clone()
                                                on:input=move |ev| {
                                                    vm.menu_update(i, |m| m.price = event_target_value(&ev))
                                                }
                                            />
                                        </div>
                                        <div class="form__group">
                                            <label class="form__label">"Image URL"</label>
                                            <input
                                                class="form__input"
                                                type="text"
                                                prop:value=item.image_url.clone()
                                                on:input=move |ev| {
                                                    vm.menu_update(
                                                        i,
                                                        |m| m.image_url = event_target_value(&ev),
                                                    )
                                                }
                                            />
                                        </div>
                                    </div>
                                    <div class="array-row__actions">
                                        <button
                                            class="button button--icon"
                                            title="Save dish"
                                            on:click=move |_| vm.menu_save(i)
                                        >
                                            {icon("check")}
                                        </button>
                                        <button
                                            class="button button--icon"
                                            title="Remove dish"
                                            disabled=!can_remove
                                            on:click=move |_| vm.menu_remove(i)
                                        >
                                            {icon("delete")}
                                        </button>
                                    </div>
                                </div>
                            }
                                .into_any()
                        } else {
                            let price = item.price.trim().parse::<f64>().unwrap_or(0.0);
                            view! {
                                <div class="array-row">
                                    <span class="array-row__text">
                                        {format!(
                                            "{} · {} · {}",
                                            item.name,
                                            item.category,
                                            format_price(price),
                                        )}
                                    </span>
                                    <div class="array-row__actions">
                                        <button
                                            class="button button--icon"
                                            title="Edit dish"
                                            on:click=move |_| vm.menu_edit(i)
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="button button--icon"
                                            title="Remove dish"
                                            disabled=!can_remove
                                            on:click=move |_| vm.menu_remove(i)
                                        >
                                            {icon("delete")}
                                        </button>
                                    </div>
                                </div>
                            }
                                .into_any()
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}
