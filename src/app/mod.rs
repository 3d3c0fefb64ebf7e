//! Application contract and the shipped application
//!
//! The launcher only knows the `Application` trait: build an instance from the
//! verbosity flag, call `run` once, drop it.

use crate::config::Config;
use crate::error::Result;
use crate::logging;
use std::path::PathBuf;
use tracing::{debug, info};

/// Something the launcher can run to completion
pub trait Application {
    /// Run the application once
    ///
    /// Any error is fatal to the process.
    fn run(&mut self) -> Result<()>;
}

/// The quantumnexus application
#[derive(Debug, Clone)]
pub struct App {
    verbose: bool,
    config_path: Option<PathBuf>,
}

impl App {
    /// Create a new application with the given verbosity
    pub fn new(verbose: bool) -> Self {
        Self {
            verbose,
            config_path: None,
        }
    }

    /// Read configuration from `path` instead of the XDG default
    pub fn with_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn verbose(&self) -> bool {
        self.verbose
    }

    fn load_config(&self) -> Result<(Config, PathBuf)> {
        match &self.config_path {
            Some(path) => Ok((Config::load_from(path)?, path.clone())),
            None => Ok((Config::load()?, Config::config_path()?)),
        }
    }
}

impl Application for App {
    fn run(&mut self) -> Result<()> {
        let (config, path) = self.load_config()?;

        logging::init(&config.logging, self.verbose)?;

        info!("Starting quantumnexus v{}", env!("CARGO_PKG_VERSION"));
        debug!("Config file: {}", path.display());
        debug!(
            verbose = self.verbose,
            directive = config.logging.directive(self.verbose),
            "Logging configured"
        );

        info!("quantumnexus finished");
        Ok(())
    }
}
