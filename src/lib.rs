pub mod application;
pub mod cli;
pub mod domain;
pub mod http;

pub use domain::*;
