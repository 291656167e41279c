pub mod components;
pub mod config;
pub mod hooks;
pub mod router;
pub mod services;
pub mod store;
