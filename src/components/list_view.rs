//! List View
//!
//! Admin list screen for any resource: toolbar (add, search, report,
//! refresh), dismissible alert and the record table.

use chrono::Local;
use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use leptos::task::spawn_local;
use rental_admin_core::{Backend, Interaction, ListState, RecordId, ReportRenderer, Resource};

use super::record_table::record_table;
use crate::context::AppContext;
use crate::interaction::BrowserInteraction;
use crate::print::BrowserPrinter;

pub fn list_view<R: Resource>() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let ui = BrowserInteraction::from_router();
    let state = RwSignal::new(ListState::<R>::new());

    let load = {
        let backend = ctx.backend.clone();
        move || {
            state.update(|s| s.begin_load());
            let backend = backend.clone();
            spawn_local(async move {
                let result = backend.list::<R>().await;
                state.update(|s| s.apply_load(result));
            });
        }
    };

    // Load on mount
    {
        let load = load.clone();
        Effect::new(move |_| load());
    }

    let on_delete = {
        let backend = ctx.backend.clone();
        let ui = ui.clone();
        move |id: RecordId| {
            if !state.with_untracked(|s| s.confirm_delete(&id, &ui)) {
                return;
            }
            let backend = backend.clone();
            let ui = ui.clone();
            spawn_local(async move {
                let result = backend.delete::<R>(&id).await;
                state.update(|s| s.apply_delete(&id, result, &ui));
            });
        }
    };

    // Hide the Action column first, capture and print on the next tick
    let on_report = {
        let ui = ui.clone();
        move |_| {
            let Some(report) = state.try_update(|s| s.begin_report(Local::now())).flatten() else {
                return;
            };
            let ui = ui.clone();
            Timeout::new(0, move || {
                let result = BrowserPrinter.export(&report);
                state.update(|s| s.end_report(result, &ui));
            })
            .forget();
        }
    };

    let on_add = {
        let ui = ui.clone();
        move |_| ui.navigate(R::ADD_ROUTE)
    };

    let alert = move || {
        state.with(|s| s.alert().map(str::to_string)).map(|message| view! {
            <div class="alert" role="alert">
                <span>{message}</span>
                <button class="alert-close" on:click=move |_| state.update(|s| s.dismiss_alert())>"×"</button>
            </div>
        })
    };

    let on_refresh = {
        let load = load.clone();
        move |_| load()
    };

    view! {
        <div class="list-page">
            <h1 class="cart-header">{R::LIST_TITLE}</h1>
            {alert}
            <div class="tbldetsil">
                <div class="search_pdf_div">
                    <button class="updtbtn" on:click=on_add>{R::ADD_LABEL}</button>
                    <div class="search-box">
                        <input
                            type="text"
                            class="serch"
                            placeholder="Search..."
                            prop:value=move || state.with(|s| s.query().to_string())
                            on:input=move |ev| state.update(|s| s.set_query(event_target_value(&ev)))
                            on:keydown=move |ev: web_sys::KeyboardEvent| {
                                if ev.key() == "Enter" {
                                    state.update(|s| s.search());
                                }
                            }
                        />
                        <button class="updtbtn" on:click=move |_| state.update(|s| s.search())>"Search"</button>
                        <Show when=move || state.with(|s| s.is_filtered())>
                            <button class="updtbtn" on:click=move |_| state.update(|s| s.clear_search())>"Clear"</button>
                        </Show>
                    </div>
                    <button
                        class="updtbtn"
                        disabled=move || !state.with(|s| s.action_column_visible())
                        on:click=on_report
                    >
                        "Generate Report"
                    </button>
                    <button
                        class="updtbtn"
                        disabled=move || state.with(|s| s.is_loading())
                        on:click=on_refresh
                    >
                        "Refresh"
                    </button>
                </div>
                {record_table(state, on_delete)}
            </div>
        </div>
    }
}
