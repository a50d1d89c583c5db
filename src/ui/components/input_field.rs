use dioxus::prelude::*;

/// Text input with an optional label above it
#[component]
pub fn InputField(
    value: String,
    oninput: EventHandler<String>,
    label: Option<String>,
    placeholder: Option<String>,
    #[props(default)] required: bool,
) -> Element {
    rsx! {
        div { class: "input-field-container",
            if let Some(text) = label {
                label { class: "input-label", "{text}" }
            }
            input {
                r#type: "text",
                class: "input-field",
                value: "{value}",
                placeholder,
                required,
                oninput: move |event: FormEvent| oninput.call(event.value()),
            }
        }
    }
}
