//! Command-line interface for the `kgraph` binary.

pub mod commands;
