// Application layer - the vote service any client (HTTP, tests) talks to.

pub mod error;
pub mod service;

pub use error::*;
pub use service::*;
