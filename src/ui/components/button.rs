use dioxus::prelude::*;

#[component]
pub fn Button(
    text: String,
    class: String,
    #[props(default)] disabled: bool,
    /// Render as a form submit button instead of a plain one
    #[props(default)]
    submit: bool,
    onclick: Option<EventHandler<MouseEvent>>,
) -> Element {
    rsx! {
        button {
            r#type: if submit { "submit" } else { "button" },
            class: "{class}",
            disabled,
            onclick: move |event| {
                if let Some(handler) = onclick {
                    handler.call(event);
                }
            },
            "{text}"
        }
    }
}
