//! Helper functions shared by the renderers
//!
//! Date formatting, escaping and small tag builders.

mod date;
mod html;

pub use date::*;
pub use html::*;
