//! GSD Assessment Server library.
//!
//! In-memory registry of users, images, scoring models and simulated GSD
//! assessments, with the referential checks and cascade deletes that keep
//! the records consistent, exposed over an Actix-web JSON API.

pub mod api;
pub mod config;
pub mod error;
pub mod middleware;
pub mod models;
pub mod services;
pub mod store;
