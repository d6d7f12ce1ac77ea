use askama::Template;
use tracing::debug;

use crate::application::render::FragmentRenderService;
use crate::application::render::templates::DynamicLoadTemplate;
use crate::application::render::types::{DynamicLoadAttrs, RenderError};

pub(crate) fn render_dynamic_load(
    service: &FragmentRenderService,
    attrs: &DynamicLoadAttrs,
    content: &str,
) -> Result<String, RenderError> {
    let id = match &attrs.id {
        Some(id) => id.clone(),
        None => {
            let id = service.ids().next_fragment_id();
            debug!(
                target: "application::render::dynamic",
                id = %id,
                "synthesized load-container id"
            );
            id
        }
    };

    let body = service.expander().expand(content);
    let url = service.resolve_fetch_url(attrs.url.as_deref(), attrs.ajax.as_deref());

    let template = DynamicLoadTemplate {
        id: id.as_str(),
        url: url.as_deref(),
        trigger: &attrs.trigger,
        body: &body,
        indicator_src: service.indicator_src(),
    };
    Ok(template.render()?)
}
