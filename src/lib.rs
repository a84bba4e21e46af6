pub mod actions;
pub mod config;
pub mod connector;
pub mod contracts;
pub mod notify;
pub mod ui;
pub mod wallet;
