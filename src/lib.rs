pub mod configuration;
pub mod db;
pub mod forms;
pub mod health;
mod helpers;
mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod startup;
pub mod telemetry;
