//! Route definitions for the analysis server

/// All routes defined in the application
pub const ROUTES: &[(&str, &str, &str)] = &[
    ("GET", "/", "Timewarp multiplier chart, table and observations"),
];

/// Log all routes
pub fn log_routes() {
    for (method, path, desc) in ROUTES {
        tracing::info!("{:6} {:10} {}", method, path, desc);
    }
}
