// filtergen/src/lib.rs
//! # Filtergen CLI Application
//!
//! This crate provides the command-line interface for the filtergen pattern
//! generator: argument parsing, logging setup, themed console output, and the
//! file I/O at the edges of the pure core library.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod ui;
