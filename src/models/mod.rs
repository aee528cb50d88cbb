//! Request, upstream and response models for the release tag endpoint.
//!
//! Nothing here outlives a single request.

pub mod query;
pub mod release;
pub mod response;
