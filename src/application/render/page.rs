use tracing::debug;

use crate::application::host::ContentRef;
use crate::application::render::FragmentRenderService;
use crate::application::render::types::{PageEmbedAttrs, RenderError};

pub(crate) fn render_page_embed(
    service: &FragmentRenderService,
    attrs: &PageEmbedAttrs,
) -> Result<String, RenderError> {
    let Some(reference) = ContentRef::parse(&attrs.page) else {
        return Ok(String::new());
    };

    let document = match &reference {
        ContentRef::Id(id) => service.content().find_by_id(*id),
        ContentRef::Path(path) => service.content().find_by_path(path),
    };

    match document {
        Some(document) => Ok(service.expander().expand(&document.body)),
        None => {
            debug!(
                target: "application::render::page",
                page = %attrs.page,
                "embedded page not found"
            );
            Ok(String::new())
        }
    }
}
