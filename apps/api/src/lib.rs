//! Voice assistant API for the Frac fractional-executive job platform.
//!
//! Three HTTP endpoints turn voice transcripts into actions: an agent that
//! detects human-in-the-loop confirmations, a preference extractor, and an
//! intent analyzer that searches the jobs table. A separate `domain-lookup`
//! binary backfills company web domains.

pub mod agent;
pub mod config;
pub mod db;
pub mod domains;
pub mod errors;
pub mod extraction;
pub mod intent;
pub mod llm_client;
pub mod models;
pub mod routes;
pub mod state;
