use crate::forms::SearchForm;
use crate::ui::AppContext;
use dioxus::prelude::*;
use tracing::debug;

use super::{Button, DocumentResults, InputField, NoResultsFound};

/// Keyword search view. Searches only on an explicit click.
#[component]
pub fn SearchPage() -> Element {
    let app = use_context::<AppContext>();
    let mut form = use_signal(SearchForm::default);

    let on_search = move |_event: MouseEvent| {
        let begun = form.write().begin_search();
        let keyword = match begun {
            Ok(keyword) => keyword,
            Err(e) => {
                debug!("Search not sent: {}", e);
                return;
            }
        };

        let api = app.api.clone();
        spawn(async move {
            let result = api.search_documents(&keyword).await;
            form.write().finish_search(result);
        });
    };

    let state = form.read();
    let keyword = state.keyword().to_string();
    let view = state.view();
    let loading = view.loading;
    let error = view.error.map(str::to_string);
    let no_results = view.no_results;
    let results = view.results.map(<[_]>::to_vec);
    drop(state);

    rsx! {
        h2 { "Search Documents" }
        div { class: "input-container",
            InputField {
                value: keyword,
                placeholder: "Enter keyword",
                oninput: move |value| form.write().set_keyword(value),
            }
            Button {
                text: "Search",
                class: "search-button",
                disabled: loading,
                onclick: on_search,
            }
        }

        if loading {
            div { class: "loader", "Loading..." }
        }
        if let Some(error) = error {
            div { class: "error-message", "{error}" }
        }

        if no_results {
            NoResultsFound {}
        }
        if let Some(docs) = results {
            DocumentResults { docs }
        }
    }
}
