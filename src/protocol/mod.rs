//! Bold API wire contract: endpoints and response codes.

pub mod endpoints;
pub mod models;
