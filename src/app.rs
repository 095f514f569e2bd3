//! Rental Admin App
//!
//! Router with the transport and guide CRUD screens.

use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;
use rental_admin_core::{Resource, TransportItem};

use crate::components::NavBar;
use crate::config::AdminConfig;
use crate::context::AppContext;
use crate::pages::{
    AddGuidePage, AddTransportPage, GuideListPage, TransportListPage, UpdateGuidePage,
    UpdateTransportPage,
};

#[component]
pub fn App(config: AdminConfig) -> impl IntoView {
    provide_context(AppContext::new(&config));

    view! {
        <Router>
            <NavBar />
            <main class="main-content">
                <Routes fallback=|| view! { <h1 class="con_topic">"Page not found"</h1> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=TransportItem::LIST_ROUTE /> } />
                    <Route path=path!("/admin-items") view=TransportListPage />
                    <Route path=path!("/add-items") view=AddTransportPage />
                    <Route path=path!("/update-item/:id") view=UpdateTransportPage />
                    <Route path=path!("/admin-guides") view=GuideListPage />
                    <Route path=path!("/add-guide") view=AddGuidePage />
                    <Route path=path!("/update-guide/:id") view=UpdateGuidePage />
                </Routes>
            </main>
        </Router>
    }
}
