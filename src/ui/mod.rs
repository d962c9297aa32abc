//! Terminal presentation: glyphs, capability detection, tree rendering, the
//! interactive picker and NDJSON events.

pub mod json;
pub mod picker;
pub mod render;
pub mod terminal;
pub mod theme;
