pub mod app;
pub mod auth;
pub mod components;
pub mod config;
pub mod data;
pub mod format;
pub mod models;
pub mod stats;
pub mod storage;
pub mod utils;
