pub mod app_route;
pub mod navigator;
pub mod routes;
