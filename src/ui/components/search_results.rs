use crate::api::DocumentRecord;
use dioxus::prelude::*;

/// Pretty-printed dump of the records returned by a search
#[component]
pub fn DocumentResults(docs: Vec<DocumentRecord>) -> Element {
    let rendered = render_records(&docs);

    rsx! {
        div { class: "results-container",
            h3 { "Results:" }
            pre { "{rendered}" }
        }
    }
}

#[component]
pub fn NoResultsFound() -> Element {
    rsx! {
        div { class: "no-results",
            h3 { "No matches found" }
        }
    }
}

pub(crate) fn render_records(docs: &[DocumentRecord]) -> String {
    serde_json::to_string_pretty(docs).unwrap_or_else(|_| format!("{:?}", docs))
}
