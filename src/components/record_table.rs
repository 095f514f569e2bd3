//! Record Table
//!
//! Header from `Resource::columns`, one row per displayed record, and the
//! Action column while no report is being captured.

use leptos::prelude::*;
use rental_admin_core::{ColumnKind, ListState, RecordId, Resource};

pub fn record_table<R: Resource>(
    state: RwSignal<ListState<R>>,
    on_delete: impl Fn(RecordId) + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let show_actions = move || state.with(|s| s.action_column_visible());
    let headers = R::columns()
        .iter()
        .map(|column| view! { <th class="admin_tbl_th">{column.label}</th> })
        .collect_view();

    view! {
        <table class="table_details_admin">
            <thead>
                <tr>
                    {headers}
                    {move || show_actions().then(|| view! { <th class="admin_tbl_th Action">"Action"</th> })}
                </tr>
            </thead>
            <tbody>
                <For
                    each=move || state.with(|s| s.rows().into_iter().cloned().collect::<Vec<R>>())
                    // Key on content too so refreshed rows re-render
                    key=|record: &R| (record.id().clone(), record.cells())
                    children=move |record: R| record_row(record, show_actions, on_delete.clone())
                />
            </tbody>
        </table>
        {move || state.with(|s| s.no_results()).then(|| view! {
            <div>
                <br />
                <h1 class="con_topic">"No " <span class="clo_us">"Results"</span> " Found"</h1>
            </div>
        })}
    }
}

fn record_row<R: Resource>(
    record: R,
    show_actions: impl Fn() -> bool + Copy + Send + Sync + 'static,
    on_delete: impl Fn(RecordId) + Clone + Send + Sync + 'static,
) -> impl IntoView {
    let id = record.id().clone();
    let update_href = R::update_route(&id);
    let name = record.display_name().to_string();

    let cells = R::columns()
        .iter()
        .zip(record.cells())
        .map(|(column, cell)| match column.kind {
            ColumnKind::Image => view! {
                <td class="admin_tbl_td">
                    <img src=cell alt=name.clone() style="width: 50px; height: 50px;" />
                </td>
            }
            .into_any(),
            ColumnKind::Text => view! { <td class="admin_tbl_td">{cell}</td> }.into_any(),
        })
        .collect_view();

    let actions = move || {
        show_actions().then(|| {
            let id = id.clone();
            let on_delete = on_delete.clone();
            view! {
                <td class="admin_tbl_td">
                    <button class="dltbtn" on:click=move |_| on_delete(id.clone())>"Delete"</button>
                    <a class="updtbtn" href=update_href.clone()>"Update"</a>
                </td>
            }
        })
    };

    view! {
        <tr>
            {cells}
            {actions}
        </tr>
    }
}
