pub mod booking_routes;
pub mod service_routes;
pub mod user_routes;
pub mod utils_routes;
