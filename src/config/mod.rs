//! Configuration module

mod site;

pub use site::AnalyticsConfig;
pub use site::NavConfig;
pub use site::NavLink;
pub use site::SiteConfig;
