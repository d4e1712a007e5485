pub mod controller;
pub mod ports;
