pub mod backdrop;
pub mod client;
pub mod config;
pub mod consts;
pub mod controller;
pub mod error;
pub mod interpret;
pub mod io;
pub mod selection;
pub mod session;
