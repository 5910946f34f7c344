//! Analytical engines. Each one is constructed from validated definitions and is
//! read-only afterwards, so a single instance can be shared across threads.

pub mod benchmark;
pub mod diversity;
pub mod planning;
pub mod retention;
pub mod scoring;
pub mod succession;
pub mod talent;
