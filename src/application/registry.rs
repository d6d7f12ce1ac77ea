//! Host-facing shortcode tag bindings.
//!
//! The host registers these tags with its own shortcode engine and routes
//! matches to [`render_tag`](crate::application::render::FragmentRenderService::render_tag).

use crate::application::render::FragmentKind;

pub const MODAL_TAG: &str = "popup_modal";
pub const MODAL_BUTTON_TAG: &str = "popup_modal_button";
pub const DYNAMIC_LOAD_TAG: &str = "dynamic_load";
pub const PAGE_CONTENT_TAG: &str = "page_content";

/// Every tag the renderer answers to, in registration order.
pub const ALL_TAGS: [&str; 4] = [
    MODAL_TAG,
    MODAL_BUTTON_TAG,
    DYNAMIC_LOAD_TAG,
    PAGE_CONTENT_TAG,
];

impl FragmentKind {
    /// Shortcode tag this kind is registered under.
    pub fn tag(self) -> &'static str {
        match self {
            FragmentKind::Modal => MODAL_TAG,
            FragmentKind::ModalButton => MODAL_BUTTON_TAG,
            FragmentKind::DynamicLoad => DYNAMIC_LOAD_TAG,
            FragmentKind::PageEmbed => PAGE_CONTENT_TAG,
        }
    }

    /// Resolve a shortcode tag to its fragment kind.
    pub fn for_tag(tag: &str) -> Option<Self> {
        match tag {
            MODAL_TAG => Some(FragmentKind::Modal),
            MODAL_BUTTON_TAG => Some(FragmentKind::ModalButton),
            DYNAMIC_LOAD_TAG => Some(FragmentKind::DynamicLoad),
            PAGE_CONTENT_TAG => Some(FragmentKind::PageEmbed),
            _ => None,
        }
    }
}
