//! Transport layer: the authenticated request seam and its reqwest implementation.

pub mod auth;
pub mod http;
