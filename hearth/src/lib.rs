pub mod api;
pub mod config;
pub mod db;
pub mod error;
pub mod inference;
pub mod intelligence;
pub mod llm;
pub mod models;
pub mod services;
