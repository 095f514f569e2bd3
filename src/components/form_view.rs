//! Form View
//!
//! Create/edit form for any resource. Edit mode pre-fills from the
//! backend before the user types.

use leptos::prelude::*;
use leptos::task::spawn_local;
use rental_admin_core::{Backend, Draft, FormMode, FormState, Resource};
use web_sys::SubmitEvent;

use super::field_input::field_input;
use crate::context::AppContext;
use crate::interaction::BrowserInteraction;

pub fn form_view<R: Resource>(mode: FormMode) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let ui = BrowserInteraction::from_router();
    let state = RwSignal::new(FormState::<R>::new(mode.clone()));

    if let FormMode::Edit(id) = mode {
        let backend = ctx.backend.clone();
        spawn_local(async move {
            let result = backend.fetch::<R>(&id).await;
            state.update(|s| s.apply_loaded(result));
        });
    }

    let on_submit = {
        let backend = ctx.backend.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some(payload) = state.try_update(|s| s.begin_submit()).flatten() else {
                return;
            };
            let mode = state.with_untracked(|s| s.mode().clone());
            let backend = backend.clone();
            let ui = ui.clone();
            spawn_local(async move {
                let result = match &mode {
                    FormMode::Create => backend.create::<R>(&payload).await,
                    FormMode::Edit(id) => backend.update::<R>(id, &payload).await,
                };
                state.update(|s| s.finish_submit(result, &ui));
            });
        }
    };

    let fields = R::Draft::fields()
        .iter()
        .map(|spec| field_input(state, spec))
        .collect_view();

    let submit_error = move || {
        state
            .with(|s| s.submit_error().map(str::to_string))
            .map(|message| view! { <p class="error-message">{message}</p> })
    };

    view! {
        <div class="cart-container">
            <h2 class="cart-header">{move || state.with(|s| s.title())}</h2>
            <form class="cart-form" novalidate=true on:submit=on_submit>
                {fields}
                <button class="viewbtn" type="submit" disabled=move || state.with(|s| s.is_submitting())>
                    {move || state.with(|s| s.title())}
                </button>
                {submit_error}
            </form>
        </div>
    }
}
