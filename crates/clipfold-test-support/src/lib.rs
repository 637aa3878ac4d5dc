#![forbid(unsafe_code)]
#![deny(
    unused_must_use,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]

//! Shared test helpers used across integration suites.
//! Layout: fixtures.rs (scratch trees), tools.rs (fake media tools), sink.rs (recording sink).

pub mod fixtures;
pub mod sink;
#[cfg(unix)]
pub mod tools;
