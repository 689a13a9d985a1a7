//! API E2E test suite.
//!
//! Drives the full route table through `actix_web::test` against an
//! in-process registry. No external services are needed.
//!
//! Run with: cargo test --test api_e2e


mod test_assessments;
mod test_cascade;
mod test_images;
mod test_models;
mod test_root;
mod test_users;
