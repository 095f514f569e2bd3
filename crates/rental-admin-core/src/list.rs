//! List State
//!
//! Client-side cache of one collection plus the search, delete and
//! report operations of the list screen.
//!
//! The fetched records are kept as a master list; search derives the
//! displayed rows from it, so clearing a search needs no re-fetch.

use chrono::{DateTime, Local};

use crate::backend::{ApiResult, Backend};
use crate::interaction::Interaction;
use crate::record::{RecordId, Resource};
use crate::report::{ReportError, ReportRenderer, ReportTable};

/// Report generation state; the action column is hidden while printing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrintState {
    #[default]
    Idle,
    Printing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListState<R: Resource> {
    records: Vec<R>,
    alert: Option<String>,
    query: String,
    /// Normalized needle of the applied search
    applied_query: Option<String>,
    print: PrintState,
    loading: bool,
}

impl<R: Resource> Default for ListState<R> {
    fn default() -> Self {
        Self::new()
    }
}

/// Lowercase with all whitespace removed
fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

fn matches<R: Resource>(record: &R, needle: &str) -> bool {
    needle.is_empty()
        || record
            .search_text()
            .iter()
            .any(|text| normalize(text).contains(needle))
}

impl<R: Resource> ListState<R> {
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            alert: None,
            query: String::new(),
            applied_query: None,
            print: PrintState::Idle,
            loading: false,
        }
    }

    /// The full cached collection, ignoring any search
    pub fn records(&self) -> &[R] {
        &self.records
    }

    /// Rows currently displayed
    pub fn rows(&self) -> Vec<&R> {
        match &self.applied_query {
            Some(needle) => self.records.iter().filter(|r| matches(*r, needle)).collect(),
            None => self.records.iter().collect(),
        }
    }

    /// A search is applied and matched nothing
    pub fn no_results(&self) -> bool {
        self.applied_query.is_some() && self.rows().is_empty()
    }

    pub fn alert(&self) -> Option<&str> {
        self.alert.as_deref()
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    // ========================
    // Load
    // ========================

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    pub fn apply_load(&mut self, result: ApiResult<Vec<R>>) {
        self.loading = false;
        match result {
            Ok(records) => {
                log::debug!("[LIST] Loaded {} {}", records.len(), R::COLLECTION);
                self.records = records;
                self.alert = None;
            }
            Err(e) => {
                log::warn!("[LIST] Error fetching {}: {}", R::COLLECTION, e);
                self.records.clear();
                self.alert = Some(format!("Error fetching {}.", R::COLLECTION));
            }
        }
    }

    pub async fn load<B: Backend>(&mut self, backend: &B) {
        self.begin_load();
        let result = backend.list::<R>().await;
        self.apply_load(result);
    }

    // ========================
    // Search
    // ========================

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn is_filtered(&self) -> bool {
        self.applied_query.is_some()
    }

    /// Apply the current query. Matching is case- and whitespace-insensitive
    /// over every displayed cell and the identifier.
    pub fn search(&mut self) {
        let needle = normalize(&self.query);
        log::debug!("[LIST] Search {} for {:?}", R::COLLECTION, needle);
        self.applied_query = Some(needle);
    }

    pub fn clear_search(&mut self) {
        self.query.clear();
        self.applied_query = None;
    }

    // ========================
    // Delete
    // ========================

    pub fn find(&self, id: &RecordId) -> Option<&R> {
        self.records.iter().find(|r| r.id() == id)
    }

    /// Ask the user to confirm deleting a cached record
    pub fn confirm_delete(&self, id: &RecordId, ui: &dyn Interaction) -> bool {
        match self.find(id) {
            Some(record) => ui.confirm(&format!(
                "Are you sure you want to delete {}?",
                record.display_name()
            )),
            None => false,
        }
    }

    /// Apply the backend outcome of a delete. Local state changes only on success.
    pub fn apply_delete(&mut self, id: &RecordId, result: ApiResult<()>, ui: &dyn Interaction) {
        match result {
            Ok(()) => {
                if let Some(pos) = self.records.iter().position(|r| r.id() == id) {
                    self.records.remove(pos);
                }
                self.alert = None;
                ui.notify(&format!("{} deleted successfully.", R::NOUN));
            }
            Err(e) => {
                log::warn!("[LIST] Error deleting {} {}: {}", R::NOUN, id, e);
                let name = self
                    .find(id)
                    .map(|r| r.display_name().to_string())
                    .unwrap_or_else(|| id.to_string());
                self.alert = Some(format!("Error deleting {}. Please try again.", name));
            }
        }
    }

    /// Confirm, delete on the backend, and apply. Returns whether a request was made.
    pub async fn delete<B: Backend>(&mut self, backend: &B, ui: &dyn Interaction, id: &RecordId) -> bool {
        if !self.confirm_delete(id, ui) {
            return false;
        }
        let result = backend.delete::<R>(id).await;
        self.apply_delete(id, result, ui);
        true
    }

    // ========================
    // Report
    // ========================

    pub fn print_state(&self) -> PrintState {
        self.print
    }

    pub fn action_column_visible(&self) -> bool {
        self.print == PrintState::Idle
    }

    /// idle → printing; captures the displayed rows. `None` if already printing.
    pub fn begin_report(&mut self, now: DateTime<Local>) -> Option<ReportTable> {
        if self.print == PrintState::Printing {
            return None;
        }
        self.print = PrintState::Printing;
        Some(ReportTable::capture::<R>(self.rows(), now))
    }

    /// printing → idle, whatever the export outcome
    pub fn end_report(&mut self, result: Result<(), ReportError>, ui: &dyn Interaction) {
        if self.print == PrintState::Idle {
            return;
        }
        self.print = PrintState::Idle;
        match result {
            Ok(()) => ui.notify(&format!("{} Successfully Downloaded!", R::REPORT_TITLE)),
            Err(e) => {
                log::warn!("[LIST] {} failed: {}", R::REPORT_TITLE, e);
                self.alert = Some(format!("Report generation failed: {}", e));
            }
        }
    }

    /// Capture, export and restore in one step
    pub fn generate_report(
        &mut self,
        renderer: &dyn ReportRenderer,
        ui: &dyn Interaction,
        now: DateTime<Local>,
    ) -> bool {
        let Some(report) = self.begin_report(now) else {
            return false;
        };
        let result = renderer.export(&report);
        self.end_report(result, ui);
        true
    }
}
