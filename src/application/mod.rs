//! Application services layer: the render service and its host seams.

pub mod host;
pub mod registry;
pub mod render;
