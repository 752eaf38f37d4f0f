//! Employee registry, attendance log and reliability dashboard served over HTTP.

pub mod analytics;
pub mod api;
pub mod config;
pub mod dashboard;
pub mod db;
pub mod docs;
pub mod error;
pub mod model;
pub mod routes;
pub mod store;
