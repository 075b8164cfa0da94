use leptos::prelude::*;

use crate::routes::routes::AppRoutes;
use crate::system::session::SessionContext;

#[component]
pub fn App() -> impl IntoView {
    // One session context for the whole tree; components reach it via
    // use_session().
    provide_context(SessionContext::load());

    view! { <AppRoutes /> }
}
