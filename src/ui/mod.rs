pub mod alert;
pub mod app;
pub mod auth;
pub mod cart;
pub mod catalog;
pub mod components;
pub mod detail;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod mvi;
pub mod nav;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
