//! Type Selector Component
//!
//! Dropdown over a fixed `(value, label)` option list.

use leptos::prelude::*;

#[component]
pub fn TypeSelector(
    id: &'static str,
    name: &'static str,
    options: &'static [(&'static str, &'static str)],
    #[prop(into)] current: Signal<String>,
    on_change: impl Fn(String) + Copy + Send + Sync + 'static,
) -> impl IntoView {
    view! {
        <select
            class="cart-input-select"
            id=id
            name=name
            prop:value=move || current.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            <option value="" selected=move || current.get().is_empty()>"Select a type"</option>
            {options.iter().map(|(value, label)| {
                let is_selected = move || current.get() == *value;
                view! {
                    <option value=*value selected=is_selected>{*label}</option>
                }
            }).collect_view()}
        </select>
    }
}
