//! Client library and command-line tool for the Bitnami Stacksmith API
//!
//! The [`client`] module is usable on its own; [`cli`], [`output`] and
//! [`models`] make up the `stacksmith` binary.

pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod output;
