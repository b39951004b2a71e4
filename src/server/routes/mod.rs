//! Route handlers module.

pub mod health;
pub mod ingest;
pub mod pages;
