//! Route pages
//!
//! Thin components binding each route to a resource.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use rental_admin_core::{FormMode, Guide, RecordId, Resource, TransportItem};

use crate::components::{form_view, list_view};

fn edit_page<R: Resource>() -> impl IntoView {
    let id = use_params_map().with_untracked(|params| params.get("id")).unwrap_or_default();
    form_view::<R>(FormMode::Edit(RecordId::new(id)))
}

#[component]
pub fn TransportListPage() -> impl IntoView {
    list_view::<TransportItem>()
}

#[component]
pub fn AddTransportPage() -> impl IntoView {
    form_view::<TransportItem>(FormMode::Create)
}

#[component]
pub fn UpdateTransportPage() -> impl IntoView {
    edit_page::<TransportItem>()
}

#[component]
pub fn GuideListPage() -> impl IntoView {
    list_view::<Guide>()
}

#[component]
pub fn AddGuidePage() -> impl IntoView {
    form_view::<Guide>(FormMode::Create)
}

#[component]
pub fn UpdateGuidePage() -> impl IntoView {
    edit_page::<Guide>()
}
