//! finestra renders pop-up modal dialogs, dynamically-loaded HTML
//! fragments, and embedded page bodies from shortcode-style attribute
//! maps.
//!
//! The crate is the rendering core a content-management host plugs in
//! behind its own shortcode parser: the host parses
//! `[popup_modal ...]`-style directives out of page content, hands the
//! tag name, attribute map, and raw inner content to
//! [`FragmentRenderService`](application::render::FragmentRenderService),
//! and embeds the returned HTML fragment. Content lookup, recursive
//! shortcode expansion, and the data-only request probe stay on the host
//! side of the [`application::host`] seams.

pub mod application;
pub mod config;
pub mod domain;
pub mod util;
