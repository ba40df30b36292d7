//! CLI command implementations for ambiclass operations.
//!
//! Each submodule handles one command with its configuration and
//! execution logic.
//!
//! Available commands:
//! - **classify**: Split a word list into ambiguous and proper buckets
//! - **evaluate**: Score prediction files against a gold standard
//! - **init**: Initialize a new ambiclass configuration file

pub mod classify;
pub mod evaluate;
pub mod init;

pub use classify::{handle_classify, ClassifyConfig};
pub use evaluate::{handle_evaluate, EvaluateConfig};
pub use init::init_config;
