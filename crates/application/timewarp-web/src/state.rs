//! Application state for the analysis page

use timewarp_core::Datasets;

use crate::error::Result;
use crate::templates;

/// Address the server binds to
pub const DEFAULT_ADDR: &str = "127.0.0.1:8050";

/// Server settings resolved from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub addr: String,
    /// Verbose logging and a fresh render on every request
    pub debug: bool,
}

impl ServerConfig {
    pub fn new(debug: bool) -> Self {
        Self {
            addr: DEFAULT_ADDR.to_string(),
            debug,
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self::new(false)
    }
}

/// The application, built once at startup and shared by every request
pub struct AppState {
    datasets: Datasets,
    page: String,
    debug: bool,
}

impl AppState {
    /// Render the page up front so a bad dataset stops startup
    pub fn new(datasets: Datasets, debug: bool) -> Result<Self> {
        let page = templates::page_html(&datasets)?;
        tracing::info!(
            sweep = datasets.sweep().len(),
            samples = datasets.samples().len(),
            bytes = page.len(),
            "rendered analysis page"
        );
        Ok(Self {
            datasets,
            page,
            debug,
        })
    }

    /// Build the default datasets and render them
    pub fn load(debug: bool) -> Result<Self> {
        Self::new(Datasets::build()?, debug)
    }

    /// Page for one request. Debug mode re-renders from the held datasets.
    pub fn page(&self) -> Result<String> {
        if self.debug {
            tracing::debug!("debug mode: re-rendering page");
            return templates::page_html(&self.datasets);
        }
        Ok(self.page.clone())
    }
}
