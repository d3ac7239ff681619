//! Built-in page templates
//!
//! The page skeleton, the post list fragment and the navigation bar are
//! plain string builders: pure, synchronous and safe to share between
//! threads.

mod list;
mod nav;
mod page;

pub use list::{render_post_list, render_post_list_with};
pub use nav::{BeaconReporter, Navigation, Reporter};
pub use page::{render_page, PageRenderer};
