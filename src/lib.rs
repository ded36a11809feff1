//! sentinel — triage workflow failure alerts from the terminal.
//!
//! The binary is a thin layer over `sentinel-core` (parsing, normalization,
//! board, views) and `sentinel-feeds` (sources and sinks). This crate exposes
//! the CLI definition, the command runners and the text renderers so that
//! integration tests can drive them directly.
//!
//! # Architecture
//!
//! ```text
//! Feed ──► mpsc ──► AlertBoard ──► Search / Group / Analytics ──► render
//!                       │
//!                       └──► MutationSink (resolve, delete)
//! ```

pub mod cli;
pub mod commands;
pub mod render;
