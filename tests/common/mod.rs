//! Shared fixtures for address book integration tests.

pub mod fixtures;
