//! Tracks player wins and serves them over HTTP.
//!
//! - `GET /players/{name}` returns a player's wins as plain text, or 404
//! - `POST /players/{name}` records a win and answers 202
//! - `GET /league` returns every player as a JSON array

pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod store;
