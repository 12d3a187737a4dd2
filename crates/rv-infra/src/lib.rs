//! # rv-infra
//!
//! Infrastructure implementations of the `rv-core` ports.

pub mod snapshot;

pub use snapshot::FileSnapshotRepository;
