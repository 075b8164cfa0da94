//! Top navigation bar: sign-in, session display and the cart panel.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use thaw::*;

use crate::shared::date_utils::format_price;
use crate::shared::icons::icon;
use crate::system::session::use_session;
use crate::system::users;

#[component]
pub fn AppHeader() -> impl IntoView {
    let session = use_session();

    let user_id_input = RwSignal::new(String::new());
    let signing_in = RwSignal::new(false);
    let error = RwSignal::new(Option::<String>::None);
    let cart_open = RwSignal::new(false);

    let sign_in = move |_| {
        let id = user_id_input.get_untracked().trim().to_string();
        if id.is_empty() {
            return;
        }
        signing_in.set(true);
        error.set(None);
        spawn_local(async move {
            match users::api::fetch_user(&id).await {
                Ok(user) => {
                    session.sign_in(&user);
                    user_id_input.set(String::new());
                    signing_in.set(false);
                }
                Err(e) => {
                    signing_in.set(false);
                    error.set(Some(format!("Sign-in failed: {}", e)));
                }
            }
        });
    };

    let sign_out = move |_| {
        session.sign_out();
        cart_open.set(false);
        error.set(None);
    };

    view! {
        <header class="app-header">
            <div class="app-header__brand">"Restaurants"</div>
            <nav class="app-header__nav">
                <A href="/">"Browse"</A>
                <A href="/admin/restaurants">"Admin"</A>
                <A href="/admin/restaurant-info">"Restaurant info"</A>
            </nav>
            <div class="app-header__session">
                {move || match session.user.get() {
                    Some(user) => {
                        view! {
                            <span class="app-header__user">{user.username}</span>
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                on_click=sign_out
                            >
                                "Sign out"
                            </Button>
                        }
                            .into_any()
                    }
                    None => {
                        view! {
                            <Input
                                value=user_id_input
                                placeholder="User id"
                                attr:style="width: 140px;"
                            />
                            <Button
                                appearance=ButtonAppearance::Subtle
                                size=ButtonSize::Small
                                on_click=sign_in
                                disabled=signing_in
                            >
                                "Sign in"
                            </Button>
                        }
                            .into_any()
                    }
                }}
                {move || {
                    error
                        .get()
                        .map(|message| {
                            view! { <span class="app-header__error">{message}</span> }
                        })
                }}
                <button
                    class="app-header__cart"
                    title="Cart"
                    on:click=move |_| cart_open.update(|open| *open = !*open)
                >
                    {icon("cart")}
                    <span class="app-header__cart-count">{move || session.cart_count()}</span>
                </button>
            </div>
            {move || {
                cart_open
                    .get()
                    .then(|| {
                        view! {
                            <div class="app-header__cart-panel">
                                {move || {
                                    let lines = session.cart.get();
                                    if lines.is_empty() {
                                        view! {
                                            <div class="cart-panel__empty">"Cart is empty"</div>
                                        }
                                            .into_any()
                                    } else {
                                        lines
                                            .into_iter()
                                            .map(|line| {
                                                let restaurant_id = line.restaurant_id.clone();
                                                let item_name = line.item_name.clone();
                                                let total = line.price * line.quantity as f64;
                                                view! {
                                                    <div class="cart-panel__line">
                                                        <span class="cart-panel__name">
                                                            {line.item_name.clone()}
                                                        </span>
                                                        <span class="cart-panel__qty">
                                                            {format!("x{}", line.quantity)}
                                                        </span>
                                                        <span class="cart-panel__price">
                                                            {format_price(total)}
                                                        </span>
                                                        <button
                                                            class="icon-button"
                                                            title="Remove"
                                                            on:click=move |_| {
                                                                session.cart_remove(&restaurant_id, &item_name)
                                                            }
                                                        >
                                                            {icon("x")}
                                                        </button>
                                                    </div>
                                                }
                                            })
                                            .collect_view()
                                            .into_any()
                                    }
                                }}
                            </div>
                        }
                    })
            }}
        </header>
    }
}
