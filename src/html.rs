//! Form extraction from HTML content

use crate::error::{Result, ScanError};
use crate::models::{FormInput, FormRecord};
use scraper::{Html, Selector};
use tracing::debug;

/// Extracts forms and their inputs from raw markup.
///
/// Tolerant best-effort parse: malformed markup yields whatever `<form>` and
/// `<input>` elements are recoverable, and missing attributes fall back to
/// defaults (method "get", action empty, input type "text"). No forms found
/// is not an error; the caller decides how to report it.
pub fn extract_forms(markup: &str) -> Result<Vec<FormRecord>> {
    let document = Html::parse_document(markup);

    let form_selector = Selector::parse("form")
        .map_err(|e| ScanError::Analysis(format!("invalid form selector: {e}")))?;
    let input_selector = Selector::parse("input")
        .map_err(|e| ScanError::Analysis(format!("invalid input selector: {e}")))?;

    let mut forms = Vec::new();

    for form in document.select(&form_selector) {
        let method = form.value().attr("method").unwrap_or("get").to_lowercase();
        let action = form.value().attr("action").unwrap_or("").to_string();

        let inputs: Vec<FormInput> = form
            .select(&input_selector)
            .map(|input| {
                let input_type = input.value().attr("type").unwrap_or("text").to_lowercase();
                FormInput {
                    name: input.value().attr("name").unwrap_or("").to_string(),
                    is_hidden: input_type == "hidden",
                    input_type,
                }
            })
            .collect();

        forms.push(FormRecord {
            method,
            action,
            inputs,
        });
    }

    if forms.is_empty() {
        debug!("No <form> elements found; JavaScript-driven sites may render forms dynamically");
    }

    Ok(forms)
}
