mod schema;

pub use schema::{Config, InteractiveConfig, ScheduleConfig};
