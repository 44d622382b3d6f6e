//! Input Field Components
//!
//! Labelled text inputs used by the card editor.

use dioxus::prelude::*;

/// Properties for the Input component
#[derive(Clone, PartialEq, Props)]
pub struct InputProps {
    /// Current input value
    pub value: String,
    /// Handler called when input changes
    pub oninput: EventHandler<String>,
    /// Input label text, also used to derive the element id
    pub label: String,
    #[props(default)]
    pub placeholder: Option<String>,
    /// Hint shown after the label (e.g. "optional")
    #[props(default)]
    pub hint: Option<String>,
    /// Input type (text, tel, url, etc.)
    #[props(default = "text".to_string())]
    pub input_type: String,
    #[props(default = false)]
    pub required: bool,
    /// Message shown under the field and used to mark it invalid
    #[props(default)]
    pub error: Option<String>,
}

/// Text input with a label
///
/// # Example
///
/// ```rust,ignore
/// let mut name = use_signal(String::new);
///
/// rsx! {
///     Input {
///         value: name(),
///         oninput: move |s| name.set(s),
///         label: "Name".to_string(),
///         required: true,
///     }
/// }
/// ```
#[component]
pub fn Input(props: InputProps) -> Element {
    let id = field_id("input", &props.label);
    let input_class = if props.error.is_some() {
        "input-field input-field--invalid"
    } else {
        "input-field"
    };

    rsx! {
        div { class: "form-field",
            label {
                class: "input-label",
                r#for: "{id}",
                "{props.label}"
                if let Some(hint) = &props.hint {
                    span { class: "input-hint", " ({hint})" }
                }
            }
            input {
                id: "{id}",
                class: "{input_class}",
                r#type: "{props.input_type}",
                value: "{props.value}",
                placeholder: props.placeholder.as_deref().unwrap_or(""),
                required: props.required,
                oninput: move |e| props.oninput.call(e.value()),
            }
            if let Some(error) = &props.error {
                span { class: "input-error", role: "alert", "{error}" }
            }
        }
    }
}

/// Element id derived from the label so each editor field is stable
/// across renders.
pub fn field_id(prefix: &str, label: &str) -> String {
    let slug: String = label
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '-' })
        .collect();
    let slug = slug
        .split('-')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join("-");
    format!("{}-{}", prefix, slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_ids_are_slugs() {
        assert_eq!(field_id("input", "Name"), "input-name");
        assert_eq!(field_id("input", "Business Name(s)"), "input-business-name-s");
        assert_eq!(field_id("input", "  Title / Tagline "), "input-title-tagline");
    }

    #[test]
    fn field_ids_are_stable() {
        assert_eq!(field_id("input", "Phone"), field_id("input", "Phone"));
    }
}
