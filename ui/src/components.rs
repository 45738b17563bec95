//! Minimal form controls shared by the desktop views.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Outline,
    Danger,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn btn-primary",
            ButtonVariant::Outline => "btn btn-outline",
            ButtonVariant::Danger => "btn btn-danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[props(default = String::new())] class: String,
    #[props(default = "button".to_string())] r#type: String,
    #[props(default = false)] disabled: bool,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let button_type = r#type;
    rsx! {
        button {
            class: "{variant.class()} {class}",
            r#type: "{button_type}",
            disabled,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}

#[component]
pub fn Input(
    #[props(default = String::new())] id: String,
    #[props(default = "text".to_string())] r#type: String,
    #[props(default = String::new())] class: String,
    #[props(default = String::new())] placeholder: String,
    #[props(default = String::new())] value: String,
    #[props(default = false)] required: bool,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    let input_type = r#type;
    rsx! {
        input {
            id: "{id}",
            r#type: "{input_type}",
            class: "text-input {class}",
            placeholder: "{placeholder}",
            value: "{value}",
            required,
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Textarea(
    #[props(default = String::new())] id: String,
    #[props(default = String::new())] class: String,
    #[props(default = 6)] rows: i64,
    #[props(default = String::new())] value: String,
    oninput: Option<EventHandler<FormEvent>>,
) -> Element {
    rsx! {
        textarea {
            id: "{id}",
            class: "text-area {class}",
            rows: "{rows}",
            value: "{value}",
            oninput: move |evt| {
                if let Some(handler) = &oninput {
                    handler.call(evt);
                }
            },
        }
    }
}

#[component]
pub fn Label(html_for: String, children: Element) -> Element {
    rsx! {
        label {
            class: "field-label",
            r#for: "{html_for}",
            {children}
        }
    }
}
