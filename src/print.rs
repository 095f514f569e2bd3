//! Browser report printer
//!
//! Writes the report document into a new window and opens the print dialog,
//! from which the user saves it as PDF.

use js_sys::Array;
use leptos::prelude::*;
use rental_admin_core::{ReportError, ReportRenderer, ReportTable};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::HtmlDocument;

#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserPrinter;

fn render_error(e: JsValue) -> ReportError {
    ReportError::Render(format!("{:?}", e))
}

impl ReportRenderer for BrowserPrinter {
    fn export(&self, report: &ReportTable) -> Result<(), ReportError> {
        let popup = window()
            .open_with_url_and_target("", "_blank")
            .map_err(render_error)?
            .ok_or_else(|| ReportError::Unavailable("print window was blocked".to_string()))?;
        let document: HtmlDocument = popup
            .document()
            .ok_or_else(|| ReportError::Unavailable("print window has no document".to_string()))?
            .unchecked_into();

        document.open().map_err(render_error)?;
        document
            .write(&Array::of1(&JsValue::from_str(&report.to_html())))
            .map_err(render_error)?;
        document.close().map_err(render_error)?;

        popup.print().map_err(render_error)?;
        log::info!("[REPORT] printed {} ({} rows)", report.title, report.rows.len());
        Ok(())
    }
}
