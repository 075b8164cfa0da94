use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_restaurant::ui::browse::RestaurantBrowse;
use crate::domain::a001_restaurant::ui::list::RestaurantList;
use crate::domain::a002_restaurant_info::ui::details::RestaurantInfoDetails;
use crate::layout::AppHeader;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <AppHeader />
            <main class="app__main">
                <Routes fallback=|| view! { <p class="page__loading">"Not found"</p> }>
                    <Route path=path!("/") view=RestaurantBrowse />
                    <Route path=path!("/admin/restaurants") view=RestaurantList />
                    <Route path=path!("/admin/restaurant-info") view=RestaurantInfoDetails />
                </Routes>
            </main>
        </Router>
    }
}
