//! quantumnexus: application launcher
//!
//! A small library and CLI that builds the quantumnexus application from a
//! verbosity flag and runs it once.
//!
//! ## Embedding
//!
//! Anything implementing [`Application`] can be driven by the launcher:
//!
//! ```rust
//! use quantumnexus::{cli, Application, Result};
//!
//! struct Hello {
//!     verbose: bool,
//! }
//!
//! impl Application for Hello {
//!     fn run(&mut self) -> Result<()> {
//!         if self.verbose {
//!             println!("hello, verbosely");
//!         }
//!         Ok(())
//!     }
//! }
//!
//! cli::run_from(["hello", "--verbose"], |verbose| Hello { verbose }).unwrap();
//! ```

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod logging;

// Re-export commonly used types
pub use app::{App, Application};
pub use config::Config;
pub use error::{Error, Result};
