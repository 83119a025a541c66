//! Platform-specific utilities for the Zellij sandbox.

pub mod paths;

pub use paths::{data_dir, default_data_dir, expand_tilde};
