pub mod chatbot;
pub mod configuration;
pub mod connectors;
pub mod console;
pub mod errors;
pub mod forms;
mod helpers;
pub mod models;
pub mod portfolio;
pub mod routes;
pub mod services;
pub mod startup;
pub mod store;
pub mod telemetry;
