//! HTTP API handlers for mbrs-server

pub mod attendance;
pub mod extract;
pub mod health;
pub mod members;
pub mod plans;
pub mod subscriptions;

pub use attendance::attendance_routes;
pub use health::health_routes;
pub use members::member_routes;
pub use plans::plan_routes;
pub use subscriptions::subscription_routes;
