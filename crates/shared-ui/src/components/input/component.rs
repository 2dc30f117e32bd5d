use dioxus::prelude::*;

/// Text input with an optional inline error message.
///
/// When `error` is non-empty the input is marked `aria-invalid` and the message
/// is rendered beneath it, linked through `aria-describedby`.
#[component]
pub fn Input(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] id: String,
    #[props(default = "text".to_string())] input_type: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: String,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let base = vec![Attribute::new("class", "input", None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let error_id = format!("{id}-error");
    let invalid = !error.is_empty();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        input {
            id: "{id}",
            r#type: "{input_type}",
            value: value,
            placeholder: placeholder,
            disabled: disabled,
            "aria-invalid": invalid,
            "aria-describedby": if invalid { error_id.clone() } else { String::new() },
            oninput: move |evt| on_input.call(evt),
            ..merged,
        }
        if invalid {
            p { id: "{error_id}", class: "input-error", role: "alert", "{error}" }
        }
    }
}
