//! # rival
//!
//! Composition root: configuration, logging, wiring of the port
//! implementations, and the stdio line protocol spoken with the UI.

pub mod adapters;
pub mod bootstrap;
pub mod cli;
pub mod ipc;
