//! # Design Pattern Demos
//!
//! Small, self-contained demonstrations of three classic patterns:
//!
//! ## Abstract Factory
//! - Factory traits returning boxed product trait objects
//! - Two product families with matching variants
//!
//! ## Bridge
//! - Abstraction holding an owned implementation
//! - Extended abstraction reusing the same implementations
//!
//! ## Singleton
//! - Process-wide instance behind `OnceLock`
//!
//! Run the demos with:
//! ```bash
//! cargo run --bin pattern-demos -- --demo bridge --platform b --abstraction extended
//! ```

pub mod abstract_factory;
pub mod bridge;
pub mod config;
pub mod error;
pub mod logger;
pub mod runner;
pub mod singleton;

pub use config::{DemoConfig, DemoKind};
pub use error::{DemoError, Result};
pub use runner::{run_demo, run_demos, DemoReport};
