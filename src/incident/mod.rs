mod models;
mod render;
pub mod title;
pub mod window;

pub use models::{sort_by_date, FeedEntry, FeedMessage, IncidentRecord};
pub use render::{format_disruption, format_maintenance};
