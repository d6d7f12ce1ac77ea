//! Fragment rendering service.
//!
//! The renderer is intentionally kept pure: it accepts typed shortcode
//! attributes plus opaque inner content, produces an HTML string, and
//! surfaces structured errors. Content lookup and recursive expansion
//! happen behind the host seams; the only mutable state is the injected
//! identifier generator.

mod dynamic;
mod modal;
mod page;
mod templates;
mod types;

use std::sync::Arc;

use tracing::debug;

use crate::application::host::{ContentExpander, ContentSource, ResponseMode};
use crate::config::Settings;
use crate::domain::attrs::ShortcodeAttrs;
use crate::domain::ids::{DomId, DomIdGenerator};

use self::templates::FetchBinding;

pub use types::{
    DynamicLoadAttrs, Fragment, FragmentKind, FragmentRequest, ModalAttrs, ModalButtonAttrs,
    PageEmbedAttrs, RenderError, TriggerKind,
};

/// Renders shortcode fragments into HTML strings.
///
/// Construction injects every host seam; rendering itself performs no
/// I/O and no blocking work.
pub struct FragmentRenderService {
    settings: Settings,
    ids: DomIdGenerator,
    content: Arc<dyn ContentSource>,
    expander: Arc<dyn ContentExpander>,
}

impl FragmentRenderService {
    pub fn new(
        settings: Settings,
        content: Arc<dyn ContentSource>,
        expander: Arc<dyn ContentExpander>,
    ) -> Self {
        let ids = DomIdGenerator::new(settings.markup.modal_id_prefix.clone());
        Self {
            settings,
            ids,
            content,
            expander,
        }
    }

    /// Render one fragment. Data-only responses suppress every kind.
    pub fn render(
        &self,
        request: &FragmentRequest,
        mode: ResponseMode,
    ) -> Result<String, RenderError> {
        if mode.is_data_only() {
            return Ok(String::new());
        }

        match &request.fragment {
            Fragment::Modal(attrs) => modal::render_modal(self, attrs, &request.content),
            Fragment::ModalButton(attrs) => modal::render_modal_button(self, attrs),
            Fragment::DynamicLoad(attrs) => {
                dynamic::render_dynamic_load(self, attrs, &request.content)
            }
            Fragment::PageEmbed(attrs) => page::render_page_embed(self, attrs),
        }
    }

    /// String-keyed entry point for host shortcode dispatch.
    pub fn render_tag(
        &self,
        tag: &str,
        attrs: &ShortcodeAttrs,
        content: &str,
        mode: ResponseMode,
    ) -> Result<String, RenderError> {
        let Some(kind) = FragmentKind::for_tag(tag) else {
            return Err(RenderError::UnknownTag {
                tag: tag.to_string(),
            });
        };
        let fragment = Fragment::from_attrs(kind, attrs)?;
        self.render(&FragmentRequest::new(fragment).with_content(content), mode)
    }

    /// Render a `popup_modal` fragment.
    pub fn modal(
        &self,
        attrs: &ShortcodeAttrs,
        content: &str,
        mode: ResponseMode,
    ) -> Result<String, RenderError> {
        let fragment = Fragment::Modal(ModalAttrs::from_attrs(attrs));
        self.render(&FragmentRequest::new(fragment).with_content(content), mode)
    }

    /// Render a `popup_modal_button` fragment.
    pub fn modal_button(
        &self,
        attrs: &ShortcodeAttrs,
        mode: ResponseMode,
    ) -> Result<String, RenderError> {
        let fragment = Fragment::ModalButton(ModalButtonAttrs::from_attrs(attrs)?);
        self.render(&FragmentRequest::new(fragment), mode)
    }

    /// Render a `dynamic_load` fragment.
    pub fn dynamic_load(
        &self,
        attrs: &ShortcodeAttrs,
        content: &str,
        mode: ResponseMode,
    ) -> Result<String, RenderError> {
        let fragment = Fragment::DynamicLoad(DynamicLoadAttrs::from_attrs(attrs));
        self.render(&FragmentRequest::new(fragment).with_content(content), mode)
    }

    /// Render a `page_content` fragment for `page` (numeric id or path).
    pub fn page_embed(&self, page: &str, mode: ResponseMode) -> Result<String, RenderError> {
        let fragment = Fragment::PageEmbed(PageEmbedAttrs::new(page));
        self.render(&FragmentRequest::new(fragment), mode)
    }

    pub(crate) fn settings(&self) -> &Settings {
        &self.settings
    }

    pub(crate) fn ids(&self) -> &DomIdGenerator {
        &self.ids
    }

    pub(crate) fn content(&self) -> &dyn ContentSource {
        self.content.as_ref()
    }

    pub(crate) fn expander(&self) -> &dyn ContentExpander {
        self.expander.as_ref()
    }

    pub(crate) fn indicator_src(&self) -> &str {
        self.settings.assets.indicator_url.as_str()
    }

    /// The fetch URL for a trigger or load container: an explicit `url`
    /// wins; otherwise an `ajax` action resolves against the configured
    /// endpoint. Actions with no endpoint are ignored.
    pub(crate) fn resolve_fetch_url(
        &self,
        url: Option<&str>,
        ajax: Option<&str>,
    ) -> Option<String> {
        if let Some(value) = url {
            return Some(value.to_string());
        }
        let action = ajax?;
        match self.settings.ajax.action_url(action) {
            Some(resolved) => Some(resolved.into()),
            None => {
                debug!(
                    target: "application::render",
                    action,
                    "ajax action ignored: no endpoint configured"
                );
                None
            }
        }
    }

    pub(crate) fn fetch_binding(
        &self,
        url: Option<&str>,
        ajax: Option<&str>,
        dialog_id: &DomId,
        trigger_rule: &str,
    ) -> Option<FetchBinding> {
        let resolved = self.resolve_fetch_url(url, ajax)?;
        Some(FetchBinding {
            url: resolved,
            target: format!("#{dialog_id} .modal-body"),
            trigger: trigger_rule.to_string(),
            indicator: format!("#{dialog_id}-ind"),
        })
    }
}
