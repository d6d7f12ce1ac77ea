//! Askama templates for the structural elements of each fragment.
//!
//! Interpolated values are escaped by the template engine; only the
//! already-expanded body is marked safe.

use askama::Template;

/// Computed htmx attribute values attached to a trigger when a fetch URL
/// is in play.
#[derive(Debug, Clone)]
pub(crate) struct FetchBinding {
    pub(crate) url: String,
    pub(crate) target: String,
    pub(crate) trigger: String,
    pub(crate) indicator: String,
}

#[derive(Template)]
#[template(path = "trigger.html")]
pub(crate) struct TriggerTemplate<'a> {
    pub(crate) is_button: bool,
    pub(crate) classes: &'a str,
    pub(crate) text: &'a str,
    pub(crate) dialog_id: &'a str,
    pub(crate) fetch: Option<FetchBinding>,
}

#[derive(Template)]
#[template(path = "modal.html")]
pub(crate) struct ModalTemplate<'a> {
    pub(crate) id: &'a str,
    pub(crate) title: &'a str,
    pub(crate) size_class: &'a str,
    pub(crate) body: &'a str,
    pub(crate) form: bool,
    pub(crate) form_button: &'a str,
    pub(crate) indicator_src: &'a str,
}

#[derive(Template)]
#[template(path = "dynamic_load.html")]
pub(crate) struct DynamicLoadTemplate<'a> {
    pub(crate) id: &'a str,
    pub(crate) url: Option<&'a str>,
    pub(crate) trigger: &'a str,
    pub(crate) body: &'a str,
    pub(crate) indicator_src: &'a str,
}
