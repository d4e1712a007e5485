pub mod catalog;
pub mod diagnosis;
pub mod health;
pub mod server;
pub mod web;
