//! Core gateway engine module

pub mod client;
pub mod config;
pub mod errors;
pub mod gateway;
pub mod models;
pub mod provider;
