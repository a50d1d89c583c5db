use crate::forms::UploadForm;
use crate::ui::AppContext;
use dioxus::prelude::*;
use tracing::debug;

use super::{Button, InputField};

/// Document upload view
#[component]
pub fn UploadPage() -> Element {
    let app = use_context::<AppContext>();
    let mut form = use_signal(UploadForm::default);

    let on_submit = move |event: FormEvent| {
        event.prevent_default();

        let begun = form.write().begin_submit();
        let request = match begun {
            Ok(request) => request,
            Err(e) => {
                debug!("Upload not sent: {}", e);
                return;
            }
        };

        let api = app.api.clone();
        spawn(async move {
            let result = api.upload_document(&request).await;
            form.write().finish_submit(result);
        });
    };

    let state = form.read();
    let document = state.document().to_string();
    let keyword = state.keyword().to_string();
    let button_label = state.button_label().to_string();
    let can_submit = state.can_submit();
    let message = state.message().map(str::to_string);
    drop(state);

    rsx! {
        h2 { "Upload Document" }
        form { class: "form-container", onsubmit: on_submit,
            InputField {
                label: "Document",
                value: document,
                required: true,
                oninput: move |value| form.write().set_document(value),
            }
            InputField {
                label: "Keyword",
                value: keyword,
                required: true,
                oninput: move |value| form.write().set_keyword(value),
            }
            Button {
                text: button_label,
                class: "submit-button",
                submit: true,
                disabled: !can_submit,
            }
        }

        if let Some(message) = message {
            div { class: "message", "{message}" }
        }
    }
}
