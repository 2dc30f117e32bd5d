use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdEye, LdEyeOff};
use dioxus_free_icons::Icon;

use crate::components::input::Input;

/// Input type for the current visibility state.
pub fn password_input_type(visible: bool) -> &'static str {
    if visible {
        "text"
    } else {
        "password"
    }
}

/// Password field with a show/hide toggle.
///
/// Visibility is owned by the caller so the toggle state can live next to
/// the rest of the form state.
#[component]
pub fn PasswordInput(
    #[props(default)] value: String,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] placeholder: String,
    #[props(default)] id: String,
    #[props(default = false)] visible: bool,
    #[props(default)] on_toggle: EventHandler<()>,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: String,
) -> Element {
    let toggle_label = if visible { "Hide password" } else { "Show password" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "password-input",
            Input {
                id: id,
                input_type: password_input_type(visible).to_string(),
                value: value,
                placeholder: placeholder,
                disabled: disabled,
                error: error,
                on_input: move |evt| on_input.call(evt),
            }
            button {
                r#type: "button",
                class: "password-toggle",
                "aria-label": toggle_label,
                disabled: disabled,
                onclick: move |_| on_toggle.call(()),
                if visible {
                    Icon::<LdEyeOff> { icon: LdEyeOff, width: 16, height: 16 }
                } else {
                    Icon::<LdEye> { icon: LdEye, width: 16, height: 16 }
                }
            }
        }
    }
}
