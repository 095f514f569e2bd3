//! Rental Admin Core
//!
//! Target-independent half of the admin console:
//! - record: resource trait, identifiers, table columns
//! - transport / guide: the two concrete resources
//! - draft + validation: editable form values and field rules
//! - form / list: view state for the CRUD form and CRUD list
//! - report: static report tables and the export seam
//! - backend / interaction: injected collaborators

mod wire;

pub mod backend;
pub mod draft;
pub mod form;
pub mod guide;
pub mod interaction;
pub mod list;
pub mod record;
pub mod report;
pub mod transport;
pub mod validation;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use backend::{ApiError, ApiResult, Backend, ListEnvelope, RecordEnvelope};
pub use draft::{Draft, FieldErrors, FieldSpec, InputKind};
pub use form::{FormMode, FormState};
pub use guide::{Guide, GuideDraft, GuideErrors, GuideField};
pub use interaction::Interaction;
pub use list::{ListState, PrintState};
pub use record::{Column, ColumnKind, RecordId, Resource};
pub use report::{ReportError, ReportRenderer, ReportTable};
pub use transport::{TransportField, TransportItem, TransportItemDraft, TransportItemErrors, TRANSPORT_TYPES};
pub use validation::FieldError;
