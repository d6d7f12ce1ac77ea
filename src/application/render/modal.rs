use askama::Template;
use tracing::debug;

use crate::application::render::FragmentRenderService;
use crate::application::render::templates::{ModalTemplate, TriggerTemplate};
use crate::application::render::types::{ModalAttrs, ModalButtonAttrs, RenderError, TriggerKind};
use crate::domain::ids::DomId;
use crate::util::html::mend_stranded_paragraph;

/// Class modifier applied when a modal asks for the wide layout. Other
/// size values pass through so themes can define their own modifiers.
const WIDE_DIALOG_CLASS: &str = "modal-lg";

pub(crate) fn render_modal(
    service: &FragmentRenderService,
    attrs: &ModalAttrs,
    content: &str,
) -> Result<String, RenderError> {
    let dialog_id = match &attrs.id {
        Some(id) => id.clone(),
        None => {
            let id = service.ids().next_dialog_id();
            debug!(
                target: "application::render::modal",
                id = %id,
                "synthesized dialog id"
            );
            id
        }
    };

    let mended = mend_stranded_paragraph(content);
    let body = service.expander().expand(&mended);

    let trigger = render_trigger(
        service,
        attrs.trigger,
        &attrs.classes,
        &attrs.text,
        &dialog_id,
        attrs.url.as_deref(),
        attrs.ajax.as_deref(),
        fetch_trigger_rule(attrs.swap),
    )?;

    let dialog = ModalTemplate {
        id: dialog_id.as_str(),
        title: &attrs.title,
        size_class: dialog_size_class(&attrs.size),
        body: &body,
        form: attrs.form,
        form_button: &attrs.form_button,
        indicator_src: service.indicator_src(),
    }
    .render()?;

    Ok(format!("{trigger}\n{dialog}"))
}

pub(crate) fn render_modal_button(
    service: &FragmentRenderService,
    attrs: &ModalButtonAttrs,
) -> Result<String, RenderError> {
    render_trigger(
        service,
        attrs.trigger,
        &attrs.classes,
        &attrs.text,
        &attrs.id,
        attrs.url.as_deref(),
        attrs.ajax.as_deref(),
        "click",
    )
}

#[allow(clippy::too_many_arguments)]
fn render_trigger(
    service: &FragmentRenderService,
    trigger: TriggerKind,
    classes: &str,
    text: &str,
    dialog_id: &DomId,
    url: Option<&str>,
    ajax: Option<&str>,
    trigger_rule: &str,
) -> Result<String, RenderError> {
    let template = TriggerTemplate {
        is_button: trigger.is_button(),
        classes: trigger_classes(trigger, classes, service),
        text,
        dialog_id: dialog_id.as_str(),
        fetch: service.fetch_binding(url, ajax, dialog_id, trigger_rule),
    };
    Ok(template.render()?)
}

/// Button triggers that declare no classes get the configured defaults;
/// links never do.
fn trigger_classes<'a>(
    trigger: TriggerKind,
    classes: &'a str,
    service: &'a FragmentRenderService,
) -> &'a str {
    if trigger.is_button() && classes.is_empty() {
        &service.settings().markup.button_classes
    } else {
        classes
    }
}

fn dialog_size_class(size: &str) -> &str {
    if size == "lg" { WIDE_DIALOG_CLASS } else { size }
}

/// `swap = false` fetches the body once and leaves it in place on later
/// opens; the default re-fetches on every click.
fn fetch_trigger_rule(swap: bool) -> &'static str {
    if swap { "click" } else { "click once" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_lg_maps_to_the_wide_class() {
        assert_eq!(dialog_size_class("lg"), "modal-lg");
        assert_eq!(dialog_size_class("xl"), "xl");
        assert_eq!(dialog_size_class(""), "");
    }

    #[test]
    fn swap_controls_the_fetch_trigger() {
        assert_eq!(fetch_trigger_rule(true), "click");
        assert_eq!(fetch_trigger_rule(false), "click once");
    }
}
