//! Small HTML helpers shared by the fragment renderers.

use std::borrow::Cow;

/// Wrap content whose leading markup is a stray closing paragraph tag.
///
/// Rich-text editors occasionally hand shortcode bodies that begin with
/// the tail of a split paragraph; wrapping the raw content restores
/// balanced markup before it is expanded.
pub fn mend_stranded_paragraph(content: &str) -> Cow<'_, str> {
    if content.trim_start().starts_with("</p>") {
        Cow::Owned(format!("<p>{content}</p>"))
    } else {
        Cow::Borrowed(content)
    }
}
