mod redis;
mod services;
mod web;

pub mod constants;
pub mod routes;

pub use services::Services;
