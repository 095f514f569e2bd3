//! Form field: label, input control, inline error

use leptos::prelude::*;
use rental_admin_core::{Draft, FieldSpec, FormState, InputKind, Resource};

use super::type_selector::TypeSelector;

type FieldOf<R> = <<R as Resource>::Draft as Draft>::Field;

/// DOM id shared by the control and its `<label for>`
fn control_id<F>(spec: &FieldSpec<F>) -> &'static str {
    spec.name
}

/// Render one field bound to `state`. Rejected keystrokes (numeric-only
/// fields) are undone by the `prop:value` binding re-running.
pub fn field_input<R: Resource>(
    state: RwSignal<FormState<R>>,
    spec: &'static FieldSpec<FieldOf<R>>,
) -> impl IntoView {
    let field = spec.field;
    let id = control_id(spec);
    let value = move || state.with(|s| s.value(field).to_string());
    let on_change = move |raw: String| state.update(|s| {
        s.change(field, &raw);
    });
    let error = move || {
        state
            .with(|s| s.error(field).map(|e| e.message.clone()))
            .map(|message| view! { <p class="error-message">{message}</p> })
    };

    let control = match spec.input {
        InputKind::Text | InputKind::Number => {
            let input_type = if matches!(spec.input, InputKind::Number) { "number" } else { "text" };
            view! {
                <input
                    class="cart-input"
                    type=input_type
                    id=id
                    name=spec.name
                    prop:value=value
                    on:input=move |ev| on_change(event_target_value(&ev))
                />
            }
            .into_any()
        }
        InputKind::TextArea => view! {
            <textarea
                class="cart-input"
                id=id
                name=spec.name
                prop:value=value
                on:input=move |ev| on_change(event_target_value(&ev))
            />
        }
        .into_any(),
        InputKind::Select(options) => view! {
            <TypeSelector
                id=id
                name=spec.name
                options=options
                current=Signal::derive(value)
                on_change=on_change
            />
        }
        .into_any(),
    };

    view! {
        <div class="form-field">
            <label class="cart-label" for=id>{spec.label}</label>
            {control}
            {error}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use rental_admin_core::{GuideDraft, TransportItemDraft};

    use super::*;

    fn assert_unique_ids<D: Draft>() {
        let ids: Vec<&str> = D::fields().iter().map(control_id).collect();
        let unique: HashSet<&str> = ids.iter().copied().collect();
        assert_eq!(unique.len(), ids.len(), "duplicate control id in {:?}", ids);
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn test_every_label_targets_a_unique_control() {
        assert_unique_ids::<TransportItemDraft>();
        assert_unique_ids::<GuideDraft>();
    }
}
