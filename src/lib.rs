//! Client-side exerciser for a ranked-preference poll service.
//!
//! The crate drives a running service instance over HTTP: it creates a
//! poll, submits a batch of randomly generated ranked ballots against it,
//! and fetches the aggregated tally. The service, its storage, and its
//! tallying algorithm are external; this crate only issues requests and
//! reports what came back.

pub mod ballot;
pub mod client;
pub mod config;
pub mod driver;
pub mod error;
pub mod models;
