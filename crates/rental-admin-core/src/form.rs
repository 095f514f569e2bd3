//! Form State
//!
//! Create/edit form logic shared by every resource. The browser component
//! keeps a `FormState` in a signal and drives it with the split
//! `begin_submit` / `finish_submit` pair so that no borrow is held across
//! the network await; `submit` chains them for callers that own the state.

use crate::backend::{ApiResult, Backend};
use crate::draft::{Draft, FieldErrors};
use crate::interaction::Interaction;
use crate::record::{RecordId, Resource};
use crate::validation::{self, FieldError};

type FieldOf<R> = <<R as Resource>::Draft as Draft>::Field;
type ErrorsOf<R> = <<R as Resource>::Draft as Draft>::Errors;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(RecordId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct FormState<R: Resource> {
    mode: FormMode,
    draft: R::Draft,
    errors: ErrorsOf<R>,
    submit_error: Option<String>,
    submitting: bool,
}

impl<R: Resource> Default for FormState<R> {
    fn default() -> Self {
        Self::new(FormMode::Create)
    }
}

impl<R: Resource> FormState<R> {
    pub fn new(mode: FormMode) -> Self {
        Self {
            mode,
            draft: R::Draft::default(),
            errors: Default::default(),
            submit_error: None,
            submitting: false,
        }
    }

    pub fn edit(id: RecordId) -> Self {
        Self::new(FormMode::Edit(id))
    }

    pub fn mode(&self) -> &FormMode {
        &self.mode
    }

    pub fn draft(&self) -> &R::Draft {
        &self.draft
    }

    pub fn errors(&self) -> &ErrorsOf<R> {
        &self.errors
    }

    pub fn value(&self, field: FieldOf<R>) -> &str {
        self.draft.value(field)
    }

    pub fn error(&self, field: FieldOf<R>) -> Option<&FieldError> {
        self.errors.get(field)
    }

    pub fn submit_error(&self) -> Option<&str> {
        self.submit_error.as_deref()
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn title(&self) -> String {
        match self.mode {
            FormMode::Create => format!("Add New {}", R::NOUN),
            FormMode::Edit(_) => format!("Update {}", R::NOUN),
        }
    }

    /// Apply an edit. Numeric-only fields drop non-numeric input.
    /// Returns whether the value was accepted.
    pub fn change(&mut self, field: FieldOf<R>, raw: &str) -> bool {
        let numeric_only = R::Draft::spec(field).is_some_and(|spec| spec.numeric_only);
        if numeric_only && !validation::is_numeric_input(raw) {
            return false;
        }
        *self.draft.value_mut(field) = raw.to_string();
        self.errors.clear(field);
        true
    }

    /// Seed the draft from a fetched record (edit mode)
    pub fn apply_loaded(&mut self, result: ApiResult<R>) {
        match result {
            Ok(record) => {
                log::debug!("[FORM] Loaded {} {}", R::NOUN, record.id());
                self.draft = record.to_draft();
                self.errors = Default::default();
                self.submit_error = None;
            }
            Err(e) => {
                log::warn!("[FORM] Failed to load {}: {}", R::NOUN, e);
                self.submit_error = Some(format!("Error loading {}.", R::noun_lower()));
            }
        }
    }

    /// Validate and, when every field passes, return the payload to send.
    /// Returns `None` on validation failure or while a submit is in flight.
    pub fn begin_submit(&mut self) -> Option<R::Draft> {
        if self.submitting {
            return None;
        }
        let errors = self.draft.validate();
        if R::Draft::has_errors(&errors) {
            log::debug!("[FORM] {} draft rejected: {:?}", R::NOUN, errors);
            self.errors = errors;
            self.submit_error = None;
            return None;
        }
        self.errors = errors;
        self.submit_error = None;
        self.submitting = true;
        Some(self.draft.clone())
    }

    /// Record the backend outcome of a submit started by `begin_submit`
    pub fn finish_submit(&mut self, result: ApiResult<()>, ui: &dyn Interaction) {
        self.submitting = false;
        let noun = R::noun_lower();
        match (result, &self.mode) {
            (Ok(()), FormMode::Create) => {
                ui.notify(&format!("{} added successfully.", R::NOUN));
                ui.navigate(R::LIST_ROUTE);
            }
            (Ok(()), FormMode::Edit(_)) => {
                ui.notify(&format!("{} updated successfully.", R::NOUN));
                ui.navigate(R::LIST_ROUTE);
            }
            (Err(e), FormMode::Create) => {
                log::warn!("[FORM] Error submitting {}: {}", noun, e);
                self.submit_error = Some(format!("Error adding {}. Please try again.", noun));
            }
            (Err(e), FormMode::Edit(_)) => {
                log::warn!("[FORM] Error updating {}: {}", noun, e);
                self.submit_error = Some(format!("Error updating {}. Please try again.", noun));
            }
        }
    }

    /// Edit mode: fetch the record and seed the draft
    pub async fn load<B: Backend>(&mut self, backend: &B) {
        if let FormMode::Edit(id) = self.mode.clone() {
            let result = backend.fetch::<R>(&id).await;
            self.apply_loaded(result);
        }
    }

    /// Validate, send, and apply the outcome. Returns whether a request was made.
    pub async fn submit<B: Backend>(&mut self, backend: &B, ui: &dyn Interaction) -> bool {
        let Some(payload) = self.begin_submit() else {
            return false;
        };
        let result = match &self.mode {
            FormMode::Create => backend.create::<R>(&payload).await,
            FormMode::Edit(id) => backend.update::<R>(id, &payload).await,
        };
        self.finish_submit(result, ui);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::ApiError;
    use crate::guide::{Guide, GuideDraft, GuideField};
    use crate::testing::{sample_transport_draft, Call, MemoryBackend, RecordingInteraction};
    use crate::transport::{TransportField, TransportItem, TransportItemDraft};

    fn filled_form() -> FormState<TransportItem> {
        let draft = sample_transport_draft();
        let mut form = FormState::<TransportItem>::default();
        for spec in TransportItemDraft::fields() {
            assert!(form.change(spec.field, draft.value(spec.field)));
        }
        form
    }

    #[test]
    fn test_numeric_only_field_change() {
        let mut form = FormState::<TransportItem>::default();
        assert!(form.change(TransportField::Contact, "123"));
        assert_eq!(form.value(TransportField::Contact), "123");

        assert!(!form.change(TransportField::Contact, "12a"));
        assert_eq!(form.value(TransportField::Contact), "123");

        assert!(form.change(TransportField::Contact, ""));
        assert_eq!(form.value(TransportField::Contact), "");
    }

    #[test]
    fn test_free_text_field_accepts_anything() {
        let mut form = FormState::<TransportItem>::default();
        assert!(form.change(TransportField::Name, "12a"));
        assert_eq!(form.value(TransportField::Name), "12a");
    }

    #[test]
    fn test_guide_age_is_numeric_only() {
        let mut form = FormState::<Guide>::default();
        assert!(form.change(GuideField::Age, "42"));
        assert!(!form.change(GuideField::Age, "forty"));
        assert_eq!(form.value(GuideField::Age), "42");
    }

    #[test]
    fn test_accepted_edit_clears_field_error() {
        let mut form = FormState::<TransportItem>::default();
        assert!(form.begin_submit().is_none());
        assert!(form.error(TransportField::Name).is_some());
        assert!(form.error(TransportField::Contact).is_some());

        form.change(TransportField::Name, "Hiace");
        assert!(form.error(TransportField::Name).is_none());
        assert!(form.error(TransportField::Contact).is_some());

        // rejected edits leave the error in place
        form.change(TransportField::Contact, "x");
        assert!(form.error(TransportField::Contact).is_some());
    }

    #[test]
    fn test_failed_validation_replaces_errors_wholesale() {
        let mut form = filled_form();
        form.change(TransportField::Name, "J4ne");
        assert!(form.begin_submit().is_none());
        assert!(form.error(TransportField::Name).is_some());

        form.change(TransportField::Name, "Jane");
        form.change(TransportField::Price, "0");
        assert!(form.begin_submit().is_none());
        assert!(form.error(TransportField::Name).is_none());
        assert_eq!(
            form.error(TransportField::Price).unwrap().message,
            "Price must be a positive number"
        );
    }

    #[tokio::test]
    async fn test_valid_submit_creates_once_and_navigates() {
        let backend = MemoryBackend::new();
        let ui = RecordingInteraction::new();
        let mut form = filled_form();

        assert!(form.submit(&backend, &ui).await);

        let calls = backend.calls();
        assert_eq!(calls.len(), 1);
        match &calls[0] {
            Call::Create { collection, payload } => {
                assert_eq!(collection, "items");
                assert_eq!(payload, &serde_json::to_value(sample_transport_draft()).unwrap());
            }
            other => panic!("unexpected call {:?}", other),
        }
        assert_eq!(ui.notifications(), vec!["Item added successfully."]);
        assert_eq!(ui.navigations(), vec!["/admin-items"]);
        assert!(!form.is_submitting());
    }

    #[tokio::test]
    async fn test_invalid_submit_makes_no_calls() {
        let backend = MemoryBackend::new();
        let ui = RecordingInteraction::new();
        let mut form = filled_form();
        form.change(TransportField::Name, "Jane Doe");
        form.change(TransportField::Contact, "071234567");
        form.change(TransportField::Description, "  ");

        assert!(!form.submit(&backend, &ui).await);

        assert!(backend.calls().is_empty());
        assert!(ui.navigations().is_empty());
        assert!(form.error(TransportField::Name).is_some());
        assert!(form.error(TransportField::Contact).is_some());
        assert!(form.error(TransportField::Description).is_some());
        assert!(form.error(TransportField::Price).is_none());
    }

    #[tokio::test]
    async fn test_backend_failure_preserves_draft() {
        let backend = MemoryBackend::new();
        backend.fail_next(ApiError::Network("offline".to_string()));
        let ui = RecordingInteraction::new();
        let mut form = filled_form();

        assert!(form.submit(&backend, &ui).await);

        assert_eq!(form.submit_error(), Some("Error adding item. Please try again."));
        assert_eq!(form.draft(), &sample_transport_draft());
        assert!(ui.navigations().is_empty());
        assert!(ui.notifications().is_empty());

        // retry is just submitting again
        assert!(form.submit(&backend, &ui).await);
        assert_eq!(form.submit_error(), None);
        assert_eq!(backend.len("items"), 1);
    }

    #[tokio::test]
    async fn test_invalid_resubmit_drops_stale_submit_error() {
        let backend = MemoryBackend::new();
        backend.fail_next(ApiError::Network("offline".to_string()));
        let ui = RecordingInteraction::new();
        let mut form = filled_form();
        assert!(form.submit(&backend, &ui).await);
        assert!(form.submit_error().is_some());

        form.change(TransportField::Name, "J4ne");
        assert!(!form.submit(&backend, &ui).await);

        assert_eq!(form.submit_error(), None);
        assert!(form.error(TransportField::Name).is_some());
        assert_eq!(backend.calls().len(), 1);
    }

    #[test]
    fn test_second_submit_ignored_while_in_flight() {
        let mut form = filled_form();
        assert!(form.begin_submit().is_some());
        assert!(form.is_submitting());
        assert!(form.begin_submit().is_none());
    }

    #[tokio::test]
    async fn test_edit_mode_loads_and_updates() {
        let backend = MemoryBackend::new();
        let id = backend.insert::<TransportItem>(&sample_transport_draft());
        let ui = RecordingInteraction::new();

        let mut form = FormState::<TransportItem>::edit(id.clone());
        form.load(&backend).await;
        assert_eq!(form.value(TransportField::Name), "Hiace");
        assert_eq!(form.title(), "Update Item");

        form.change(TransportField::Price, "175");
        assert!(form.submit(&backend, &ui).await);

        let stored: TransportItem = backend.get(&id).unwrap();
        assert_eq!(stored.price, "175");
        assert_eq!(ui.notifications(), vec!["Item updated successfully."]);
        assert_eq!(ui.navigations(), vec!["/admin-items"]);
    }

    #[tokio::test]
    async fn test_edit_mode_load_failure() {
        let backend = MemoryBackend::new();
        let mut form = FormState::<Guide>::edit(RecordId::new("missing"));
        form.load(&backend).await;
        assert_eq!(form.submit_error(), Some("Error loading guide."));
        assert_eq!(form.draft(), &GuideDraft::default());
    }
}
