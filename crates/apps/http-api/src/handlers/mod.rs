use std::error::Error;

use domain::ErrorKind;
use tracing::{error, warn};

pub mod categories;
pub mod products;

/// Liveness probe
pub async fn health() -> &'static str {
    "OK"
}

/// Client-caused outcomes are warnings; only store failures are errors
fn log_failure(action: &'static str, kind: ErrorKind, err: &dyn Error) {
    match kind {
        ErrorKind::NotFound | ErrorKind::AlreadyExists => {
            warn!(error = %err, ?kind, "{action} failed")
        }
        ErrorKind::Unknown => error!(error = %err, ?kind, "{action} failed"),
    }
}
