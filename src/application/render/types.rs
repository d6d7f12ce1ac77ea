use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::registry;
use crate::domain::attrs::ShortcodeAttrs;
use crate::domain::ids::DomId;

const DEFAULT_TRIGGER_TEXT: &str = "[text]";
const DEFAULT_FORM_BUTTON_LABEL: &str = "Save";
const DEFAULT_LOAD_TRIGGER: &str = "load";

/// The four fragment shapes the renderer produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FragmentKind {
    Modal,
    ModalButton,
    DynamicLoad,
    PageEmbed,
}

/// How a trigger element is rendered. Anything that is not explicitly a
/// button renders as a link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TriggerKind {
    #[default]
    Link,
    Button,
}

impl TriggerKind {
    fn from_attr(value: &str) -> Self {
        if value.eq_ignore_ascii_case("button") {
            Self::Button
        } else {
            Self::Link
        }
    }

    pub fn is_button(self) -> bool {
        matches!(self, Self::Button)
    }
}

/// Typed `popup_modal` attributes with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalAttrs {
    pub trigger: TriggerKind,
    pub url: Option<String>,
    pub ajax: Option<String>,
    pub classes: String,
    pub text: String,
    pub title: String,
    pub size: String,
    pub swap: bool,
    pub form: bool,
    pub id: Option<DomId>,
    pub form_button: String,
}

impl ModalAttrs {
    pub fn from_attrs(attrs: &ShortcodeAttrs) -> Self {
        Self {
            trigger: TriggerKind::from_attr(attrs.get_or("type", "")),
            url: attrs.non_empty("url").map(str::to_string),
            ajax: ajax_action(attrs),
            classes: attrs.get_or("classes", "").to_string(),
            text: attrs.get_or("text", DEFAULT_TRIGGER_TEXT).to_string(),
            title: attrs.get_or("title", "").to_string(),
            size: attrs.get_or("size", "").to_string(),
            swap: attrs.flag("swap", true),
            form: attrs.flag("form", true),
            id: attrs.non_empty("id").map(DomId::new),
            form_button: attrs
                .get_or("form_button", DEFAULT_FORM_BUTTON_LABEL)
                .to_string(),
        }
    }
}

impl Default for ModalAttrs {
    fn default() -> Self {
        Self::from_attrs(&ShortcodeAttrs::new())
    }
}

/// Typed `popup_modal_button` attributes. The referenced dialog id is
/// mandatory; the trigger is meaningless without it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModalButtonAttrs {
    pub trigger: TriggerKind,
    pub url: Option<String>,
    pub ajax: Option<String>,
    pub classes: String,
    pub text: String,
    pub id: DomId,
}

impl ModalButtonAttrs {
    pub fn from_attrs(attrs: &ShortcodeAttrs) -> Result<Self, RenderError> {
        let id = attrs
            .non_empty("id")
            .map(DomId::new)
            .ok_or(RenderError::MissingAttribute {
                tag: registry::MODAL_BUTTON_TAG,
                attribute: "id",
            })?;

        Ok(Self {
            trigger: TriggerKind::from_attr(attrs.get_or("type", "")),
            url: attrs.non_empty("url").map(str::to_string),
            ajax: ajax_action(attrs),
            classes: attrs.get_or("classes", "").to_string(),
            text: attrs.get_or("text", DEFAULT_TRIGGER_TEXT).to_string(),
            id,
        })
    }
}

/// Typed `dynamic_load` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DynamicLoadAttrs {
    pub url: Option<String>,
    pub ajax: Option<String>,
    pub id: Option<DomId>,
    pub trigger: String,
}

impl DynamicLoadAttrs {
    pub fn from_attrs(attrs: &ShortcodeAttrs) -> Self {
        Self {
            url: attrs.non_empty("url").map(str::to_string),
            ajax: ajax_action(attrs),
            id: attrs.non_empty("id").map(DomId::new),
            trigger: attrs.get_or("trigger", DEFAULT_LOAD_TRIGGER).to_string(),
        }
    }
}

impl Default for DynamicLoadAttrs {
    fn default() -> Self {
        Self::from_attrs(&ShortcodeAttrs::new())
    }
}

/// Typed `page_content` attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageEmbedAttrs {
    pub page: String,
}

impl PageEmbedAttrs {
    pub fn from_attrs(attrs: &ShortcodeAttrs) -> Self {
        Self {
            page: attrs.get_or("page", "").to_string(),
        }
    }

    pub fn new(page: impl Into<String>) -> Self {
        Self { page: page.into() }
    }
}

/// The `ajax` attribute names a server action; absent, empty, and
/// negative spellings all mean "no action".
fn ajax_action(attrs: &ShortcodeAttrs) -> Option<String> {
    attrs
        .non_empty("ajax")
        .filter(|value| !value.eq_ignore_ascii_case("false") && *value != "0")
        .map(str::to_string)
}

/// A fragment plus its typed attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fragment {
    Modal(ModalAttrs),
    ModalButton(ModalButtonAttrs),
    DynamicLoad(DynamicLoadAttrs),
    PageEmbed(PageEmbedAttrs),
}

impl Fragment {
    pub fn kind(&self) -> FragmentKind {
        match self {
            Fragment::Modal(_) => FragmentKind::Modal,
            Fragment::ModalButton(_) => FragmentKind::ModalButton,
            Fragment::DynamicLoad(_) => FragmentKind::DynamicLoad,
            Fragment::PageEmbed(_) => FragmentKind::PageEmbed,
        }
    }

    /// Build a fragment for `kind` from a raw attribute map. ModalButton
    /// validation happens here, before any markup is produced.
    pub fn from_attrs(kind: FragmentKind, attrs: &ShortcodeAttrs) -> Result<Self, RenderError> {
        Ok(match kind {
            FragmentKind::Modal => Fragment::Modal(ModalAttrs::from_attrs(attrs)),
            FragmentKind::ModalButton => {
                Fragment::ModalButton(ModalButtonAttrs::from_attrs(attrs)?)
            }
            FragmentKind::DynamicLoad => Fragment::DynamicLoad(DynamicLoadAttrs::from_attrs(attrs)),
            FragmentKind::PageEmbed => Fragment::PageEmbed(PageEmbedAttrs::from_attrs(attrs)),
        })
    }
}

/// Rendering request handed over by the host's shortcode dispatch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FragmentRequest {
    pub fragment: Fragment,
    /// Raw inner content; expanded through the host seam during rendering.
    #[serde(default)]
    pub content: String,
}

impl FragmentRequest {
    pub fn new(fragment: Fragment) -> Self {
        Self {
            fragment,
            content: String::new(),
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }
}

/// Structured errors surfaced by fragment rendering. Malformed attribute
/// values are never an error; they pass through into the markup.
#[derive(Debug, Clone, Error)]
pub enum RenderError {
    #[error("shortcode `{tag}` requires attribute `{attribute}`")]
    MissingAttribute {
        tag: &'static str,
        attribute: &'static str,
    },
    #[error("unknown shortcode tag `{tag}`")]
    UnknownTag { tag: String },
    #[error("template rendering failed: {message}")]
    Template { message: String },
}

impl From<askama::Error> for RenderError {
    fn from(err: askama::Error) -> Self {
        Self::Template {
            message: err.to_string(),
        }
    }
}
