//! Test doubles and fixtures
//!
//! In-memory backend with a call log and one-shot failure injection,
//! plus recording interaction and report collaborators.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use async_trait::async_trait;
use serde_json::Value;

use crate::backend::{ApiError, ApiResult, Backend};
use crate::guide::Guide;
use crate::interaction::Interaction;
use crate::record::{RecordId, Resource};
use crate::report::{ReportError, ReportRenderer, ReportTable};
use crate::transport::{TransportItem, TransportItemDraft};

/// One backend request as seen by `MemoryBackend`
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List { collection: String },
    Fetch { collection: String, id: RecordId },
    Create { collection: String, payload: Value },
    Update { collection: String, id: RecordId, payload: Value },
    Delete { collection: String, id: RecordId },
}

/// Collections held as JSON documents keyed by collection name
#[derive(Default)]
pub struct MemoryBackend {
    collections: RefCell<BTreeMap<String, Vec<Value>>>,
    calls: RefCell<Vec<Call>>,
    failure: RefCell<Option<ApiError>>,
    next_id: Cell<u32>,
}

fn decode<R: Resource>(value: Value) -> ApiResult<R> {
    serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

fn has_id(doc: &Value, id: &RecordId) -> bool {
    doc.get("_id").and_then(Value::as_str) == Some(id.as_str())
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make the next request fail with `error`
    pub fn fail_next(&self, error: ApiError) {
        *self.failure.borrow_mut() = Some(error);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    pub fn len(&self, collection: &str) -> usize {
        self.collections.borrow().get(collection).map_or(0, Vec::len)
    }

    /// Store records as-is, without logging a call
    pub fn seed<R: Resource>(&self, records: Vec<R>) -> Vec<RecordId> {
        let mut collections = self.collections.borrow_mut();
        let docs = collections.entry(R::COLLECTION.to_string()).or_default();
        records
            .into_iter()
            .map(|record| {
                let id = record.id().clone();
                docs.push(serde_json::to_value(&record).unwrap_or_default());
                id
            })
            .collect()
    }

    /// Store a draft under a fresh identifier, without logging a call
    pub fn insert<R: Resource>(&self, draft: &R::Draft) -> RecordId {
        let id = self.assign_id::<R>();
        let doc = Self::document(&id, draft);
        self.collections
            .borrow_mut()
            .entry(R::COLLECTION.to_string())
            .or_default()
            .push(doc);
        id
    }

    pub fn get<R: Resource>(&self, id: &RecordId) -> Option<R> {
        let collections = self.collections.borrow();
        let doc = collections.get(R::COLLECTION)?.iter().find(|doc| has_id(doc, id))?;
        decode(doc.clone()).ok()
    }

    fn assign_id<R: Resource>(&self) -> RecordId {
        let n = self.next_id.get() + 1;
        self.next_id.set(n);
        RecordId::new(format!("{}-{}", R::COLLECTION, n))
    }

    fn document<D: serde::Serialize>(id: &RecordId, draft: &D) -> Value {
        let mut doc = serde_json::to_value(draft).unwrap_or_default();
        if let Value::Object(map) = &mut doc {
            map.insert("_id".to_string(), Value::String(id.to_string()));
        }
        doc
    }

    fn record(&self, call: Call) -> ApiResult<()> {
        self.calls.borrow_mut().push(call);
        match self.failure.borrow_mut().take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }
}

#[async_trait(?Send)]
impl Backend for MemoryBackend {
    async fn list<R: Resource>(&self) -> ApiResult<Vec<R>> {
        self.record(Call::List { collection: R::COLLECTION.to_string() })?;
        let docs = self.collections.borrow().get(R::COLLECTION).cloned().unwrap_or_default();
        docs.into_iter().map(decode::<R>).collect()
    }

    async fn fetch<R: Resource>(&self, id: &RecordId) -> ApiResult<R> {
        self.record(Call::Fetch { collection: R::COLLECTION.to_string(), id: id.clone() })?;
        self.get::<R>(id).ok_or_else(|| ApiError::NotFound(id.to_string()))
    }

    async fn create<R: Resource>(&self, draft: &R::Draft) -> ApiResult<()> {
        let payload = serde_json::to_value(draft).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.record(Call::Create { collection: R::COLLECTION.to_string(), payload })?;
        self.insert::<R>(draft);
        Ok(())
    }

    async fn update<R: Resource>(&self, id: &RecordId, draft: &R::Draft) -> ApiResult<()> {
        let payload = serde_json::to_value(draft).map_err(|e| ApiError::Decode(e.to_string()))?;
        self.record(Call::Update { collection: R::COLLECTION.to_string(), id: id.clone(), payload })?;
        let mut collections = self.collections.borrow_mut();
        let doc = collections
            .get_mut(R::COLLECTION)
            .and_then(|docs| docs.iter_mut().find(|doc| has_id(doc, id)))
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        *doc = Self::document(id, draft);
        Ok(())
    }

    async fn delete<R: Resource>(&self, id: &RecordId) -> ApiResult<()> {
        self.record(Call::Delete { collection: R::COLLECTION.to_string(), id: id.clone() })?;
        let mut collections = self.collections.borrow_mut();
        let docs = collections
            .get_mut(R::COLLECTION)
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        let pos = docs
            .iter()
            .position(|doc| has_id(doc, id))
            .ok_or_else(|| ApiError::NotFound(id.to_string()))?;
        docs.remove(pos);
        Ok(())
    }
}

/// Records every prompt, notification and navigation
pub struct RecordingInteraction {
    answer: bool,
    confirmations: RefCell<Vec<String>>,
    notifications: RefCell<Vec<String>>,
    navigations: RefCell<Vec<String>>,
}

impl RecordingInteraction {
    /// Answers yes to every confirmation
    pub fn new() -> Self {
        Self::answering(true)
    }

    /// Answers no to every confirmation
    pub fn declining() -> Self {
        Self::answering(false)
    }

    fn answering(answer: bool) -> Self {
        Self {
            answer,
            confirmations: RefCell::default(),
            notifications: RefCell::default(),
            navigations: RefCell::default(),
        }
    }

    pub fn confirmations(&self) -> Vec<String> {
        self.confirmations.borrow().clone()
    }

    pub fn notifications(&self) -> Vec<String> {
        self.notifications.borrow().clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.borrow().clone()
    }
}

impl Default for RecordingInteraction {
    fn default() -> Self {
        Self::new()
    }
}

impl Interaction for RecordingInteraction {
    fn confirm(&self, message: &str) -> bool {
        self.confirmations.borrow_mut().push(message.to_string());
        self.answer
    }

    fn notify(&self, message: &str) {
        self.notifications.borrow_mut().push(message.to_string());
    }

    fn navigate(&self, route: &str) {
        self.navigations.borrow_mut().push(route.to_string());
    }
}

/// Keeps exported reports; optionally fails every export
#[derive(Default)]
pub struct RecordingRenderer {
    exported: RefCell<Vec<ReportTable>>,
    failure: Option<ReportError>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(error: ReportError) -> Self {
        Self { exported: RefCell::default(), failure: Some(error) }
    }

    pub fn exported(&self) -> Vec<ReportTable> {
        self.exported.borrow().clone()
    }
}

impl ReportRenderer for RecordingRenderer {
    fn export(&self, report: &ReportTable) -> Result<(), ReportError> {
        if let Some(error) = &self.failure {
            return Err(error.clone());
        }
        self.exported.borrow_mut().push(report.clone());
        Ok(())
    }
}

// ========================
// Fixtures
// ========================

pub fn sample_transport_draft() -> TransportItemDraft {
    TransportItemDraft {
        name: "Hiace".to_string(),
        image: "https://img.example/hiace.png".to_string(),
        contact: "0712345678".to_string(),
        location: "Kandy".to_string(),
        price: "200".to_string(),
        item_type: "van".to_string(),
        description: "Ten seat van".to_string(),
    }
}

fn transport_item(id: &str, name: &str, location: &str, price: &str, item_type: &str, description: &str) -> TransportItem {
    TransportItem {
        id: RecordId::new(id),
        name: name.to_string(),
        image: format!("https://img.example/{}.png", name.to_lowercase()),
        contact: "0712345678".to_string(),
        location: location.to_string(),
        price: price.to_string(),
        item_type: item_type.to_string(),
        description: description.to_string(),
    }
}

/// Hiace (Rs 200), Pulsar (Rs 50) and Tent (Rs 20)
pub fn sample_transport_items() -> Vec<TransportItem> {
    vec![
        transport_item("item-1", "Hiace", "Kandy", "200", "van", "Ten seat van"),
        transport_item("item-2", "Pulsar", "Kandy", "50", "motorcycle", "150cc motorbike"),
        transport_item("item-3", "Tent", "Ella", "20", "tent", "Two person shelter"),
    ]
}

pub fn sample_guides() -> Vec<Guide> {
    vec![
        Guide {
            id: RecordId::new("guide-1"),
            name: "Nimal".to_string(),
            image: "https://img.example/nimal.png".to_string(),
            contact: "0771234567".to_string(),
            location: "Galle".to_string(),
            age: "42".to_string(),
            language: "English, Sinhala".to_string(),
            description: "Coastal tours".to_string(),
        },
        Guide {
            id: RecordId::new("guide-2"),
            name: "Kamala".to_string(),
            image: "https://img.example/kamala.png".to_string(),
            contact: "0777654321".to_string(),
            location: "Ella".to_string(),
            age: "35".to_string(),
            language: "English, Tamil".to_string(),
            description: "Hill country hikes".to_string(),
        },
    ]
}
