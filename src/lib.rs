// src/lib.rs
pub mod api_client;
pub mod db;
pub mod error;
pub mod models;
pub mod services;
pub mod session_store;
pub mod state;
pub mod templates;
pub mod web;
