/// Health check route that returns `200 OK` with the body `OK` while the server is running.
pub mod health;

/// Root route. Upstream callers only check that it answers with the fixed body.
pub mod root;

pub use health::*;
pub use root::*;
