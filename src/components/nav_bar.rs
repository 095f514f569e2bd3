//! Top navigation between the two admin lists

use leptos::prelude::*;
use leptos_router::components::A;
use rental_admin_core::{Guide, Resource, TransportItem};

#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="admin-nav">
            <span class="admin-brand">"Rental Admin"</span>
            <A href=TransportItem::LIST_ROUTE>"Transport Items"</A>
            <A href=Guide::LIST_ROUTE>"Tour Guides"</A>
        </nav>
    }
}
