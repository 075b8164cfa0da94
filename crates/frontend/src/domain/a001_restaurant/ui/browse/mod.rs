//! Public discovery page: card grid of published restaurants with
//! search, favorites and add-to-cart from the expanded menu.

use contracts::domain::a001_restaurant::Restaurant;
use contracts::domain::a002_restaurant_info::RestaurantInfo;
use contracts::domain::common::AggregateId;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::domain::a001_restaurant::api;
use crate::domain::a002_restaurant_info::api as info_api;
use crate::shared::date_utils::format_price;
use crate::shared::icons::icon;
use crate::system::session::{use_session, CartLine};
use crate::system::users;

#[component]
pub fn RestaurantBrowse() -> impl IntoView {
    let session = use_session();
    let records: RwSignal<Vec<Restaurant>> = RwSignal::new(Vec::new());
    let infos: RwSignal<Vec<RestaurantInfo>> = RwSignal::new(Vec::new());
    let filter = RwSignal::new(String::new());
    let error: RwSignal<Option<String>> = RwSignal::new(None);
    // Restaurant id whose menu is expanded, if any.
    let expanded: RwSignal<Option<String>> = RwSignal::new(None);

    spawn_local(async move {
        match api::fetch_all().await {
            Ok(list) => {
                records.set(list.into_iter().filter(|r| r.is_active).collect());
                error.set(None);
            }
            Err(e) => error.set(Some(format!("Failed to load restaurants: {}", e))),
        }
    });
    spawn_local(async move {
        if let Ok(list) = info_api::fetch_all().await {
            infos.set(list);
        }
    });

    let visible = Memo::new(move |_| {
        let query = filter.with(|f| f.trim().to_lowercase());
        records.with(|list| {
            list.iter()
                .filter(|r| {
                    query.is_empty()
                        || r.restaurant.name.to_lowercase().contains(&query)
                        || r.restaurant.category.to_lowercase().contains(&query)
                        || r.location.city.to_lowercase().contains(&query)
                })
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    // Optimistic toggle: local state flips first, the PATCH follows, a
    // failed PATCH rolls the list back.
    let toggle_favorite = move |restaurant_id: String| {
        let Some(user_id) = session.user_id() else {
            error.set(Some("Sign in to save favorites".to_string()));
            return;
        };
        let previous = session.favorites.get_untracked();
        let updated = session.toggle_favorite(&restaurant_id);
        spawn_local(async move {
            if users::api::update_favorites(&user_id, updated).await.is_err() {
                session.set_favorites(previous);
                error.set(Some("Failed to update favorites".to_string()));
            }
        });
    };

    view! {
        <div class="page page--browse">
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Discover restaurants"</h1>
                </div>
                <div class="page__header-right">
                    <Input
                        value=filter
                        placeholder="Search by name, category or city..."
                        attr:style="width: 280px;"
                    />
                </div>
            </div>

            <div class="page__content">
                {move || {
                    error
                        .get()
                        .map(|e| {
                            view! {
                                <div class="warning-box warning-box--error">
                                    <span class="warning-box__icon">"⚠"</span>
                                    <span class="warning-box__text">{e}</span>
                                </div>
                            }
                        })
                }}

                <div class="card-grid">
                    {move || {
                        visible
                            .get()
                            .into_iter()
                            .map(|r| {
                                let id = r.id.as_string();
                                view! {
                                    <RestaurantCard
                                        restaurant=r
                                        infos=infos
                                        expanded=expanded
                                        on_favorite=Callback::new(move |_| {
                                            toggle_favorite(id.clone())
                                        })
                                    />
                                }
                            })
                            .collect_view()
                    }}
                </div>
            </div>
        </div>
    }
}

#[component]
fn RestaurantCard(
    restaurant: Restaurant,
    infos: RwSignal<Vec<RestaurantInfo>>,
    expanded: RwSignal<Option<String>>,
    on_favorite: Callback<()>,
) -> impl IntoView {
    let session = use_session();
    let id = restaurant.id.as_string();
    let name = restaurant.restaurant.name.clone();

    let fav_id = id.clone();
    let is_favorite = Signal::derive(move || session.is_favorite(&fav_id));

    let menu_name = name.clone();
    let menu = Signal::derive(move || {
        infos.with(|list| {
            list.iter()
                .find(|info| info.restaurant_name == menu_name)
                .map(|info| info.menu.clone())
        })
    });

    let expand_id = id.clone();
    let is_expanded = Signal::derive(move || expanded.with(|e| e.as_deref() == Some(&expand_id)));
    let toggle_id = id.clone();
    let toggle_menu = move |_| {
        expanded.update(|e| {
            if e.as_deref() == Some(&toggle_id) {
                *e = None;
            } else {
                *e = Some(toggle_id.clone());
            }
        });
    };

    let cart_restaurant_id = id.clone();
    let add_to_cart = move |item_name: String, price: f64| {
        session.cart_add(CartLine {
            restaurant_id: cart_restaurant_id.clone(),
            item_name,
            price,
            quantity: 1,
        });
    };

    view! {
        <div class="card">
            <div class="card__header">
                <h3 class="card__title">{name.clone()}</h3>
                <button
                    class=move || {
                        if is_favorite.get() {
                            "button button--icon card__favorite card__favorite--on"
                        } else {
                            "button button--icon card__favorite"
                        }
                    }
                    title="Toggle favorite"
                    on:click=move |_| on_favorite.run(())
                >
                    {icon("heart")}
                </button>
            </div>
            <p class="card__tagline">{restaurant.restaurant.tagline.clone()}</p>
            <p class="card__meta">
                {format!(
                    "{} · {}, {}",
                    restaurant.restaurant.category,
                    restaurant.location.city,
                    restaurant.location.state,
                )}
            </p>
            <button class="button button--secondary" on:click=toggle_menu>
                {move || if is_expanded.get() { "Hide menu" } else { "View menu" }}
            </button>
            {move || {
                if !is_expanded.get() {
                    return None;
                }
                Some(
                    match menu.get() {
                        Some(items) => {
                            items
                                .into_iter()
                                .map(|item| {
                                    let add = add_to_cart.clone();
                                    let item_name = item.name.clone();
                                    let price = item.price;
                                    view! {
                                        <div class="card__menu-row">
                                            <span>{item.name.clone()}</span>
                                            <span>{format_price(item.price)}</span>
                                            <button
                                                class="button button--icon"
                                                title="Add to cart"
                                                on:click=move |_| add(item_name.clone(), price)
                                            >
                                                {icon("cart")}
                                            </button>
                                        </div>
                                    }
                                        .into_any()
                                })
                                .collect_view()
                                .into_any()
                        }
                        None => {
                            view! {
                                <p class="card__menu-empty">"No menu published yet"</p>
                            }
                                .into_any()
                        }
                    },
                )
            }}
        </div>
    }
}
