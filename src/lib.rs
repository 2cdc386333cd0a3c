pub mod auth;
pub mod cart;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod logging;
pub mod ui;
