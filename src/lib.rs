//! Iconswap - CLI tool for rewriting icon-library references across a source tree.
//!
//! This library provides the core functionality for iconswap, including:
//! - Configuration file parsing and lookup, with a built-in FontAwesome mapping
//! - Regex rules and a single-pass longest-match token table
//! - Directory walking and atomic in-place rewriting with per-file errors
//! - The `envprobe` diagnostic report
//!
//! # Example
//!
//! ```no_run
//! use iconswap::config::load_config;
//! use iconswap::rewrite::{ProcessOptions, process};
//! use iconswap::rules::compile_rules;
//!
//! let cwd = std::env::current_dir().unwrap();
//! let loaded = load_config(None, &cwd).unwrap();
//! let rules = compile_rules(&loaded.config).unwrap();
//!
//! let report = process(
//!     &loaded.root_dirs(),
//!     &loaded.config.extension,
//!     &rules,
//!     ProcessOptions::default(),
//!     |record| println!("Processed: {}", record.path.display()),
//! );
//! println!("{} rewritten, {} failed", report.rewritten(), report.failed());
//! ```

pub mod config;
pub mod error;
pub mod probe;
pub mod rewrite;
pub mod rules;

pub use error::{Result, SwapError};
