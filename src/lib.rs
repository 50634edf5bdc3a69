pub mod config;
pub mod console;
pub mod error;
pub mod handlers;
pub mod message;
pub mod page;
pub mod services;
pub mod state;
