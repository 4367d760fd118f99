//! One-time storage permission request at toolbar startup.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

/// Outcome of the startup permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PermissionStatus {
    /// Not requested yet
    #[default]
    Unknown,
    Granted,
    Denied,
}

/// Errors raised by a permission gate.
#[derive(Debug, Error)]
pub enum PermissionError {
    #[error("permission service unavailable: {0}")]
    Unavailable(String),
}

/// Abstraction over the platform's permission dialog.
#[async_trait]
pub trait PermissionGate: Send + Sync {
    /// Asks for storage access, showing `title` and `message` to the user.
    ///
    /// # Returns
    /// `Ok(true)` if access was granted, `Ok(false)` if the user declined
    async fn request(&self, title: &str, message: &str) -> Result<bool, PermissionError>;
}

/// Gate with a fixed answer, for hosts without a permission model.
#[derive(Debug, Clone, Copy)]
pub struct StaticPermission(pub bool);

#[async_trait]
impl PermissionGate for StaticPermission {
    async fn request(&self, title: &str, _message: &str) -> Result<bool, PermissionError> {
        log::debug!("Static permission answer for '{}': {}", title, self.0);
        Ok(self.0)
    }
}

/// Runs `gate` and folds its result into a [`PermissionStatus`].
///
/// Gate errors count as a denial.
pub async fn request_permission(
    gate: &dyn PermissionGate,
    title: &str,
    message: &str,
) -> PermissionStatus {
    match gate.request(title, message).await {
        Ok(true) => {
            log::info!("Storage permission granted");
            PermissionStatus::Granted
        }
        Ok(false) => {
            log::warn!("Storage permission denied");
            PermissionStatus::Denied
        }
        Err(err) => {
            log::warn!("Storage permission request failed: {}", err);
            PermissionStatus::Denied
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenGate;

    #[async_trait]
    impl PermissionGate for BrokenGate {
        async fn request(&self, _title: &str, _message: &str) -> Result<bool, PermissionError> {
            Err(PermissionError::Unavailable("no dialog service".to_string()))
        }
    }

    #[tokio::test]
    async fn static_gate_maps_to_status() {
        assert_eq!(
            request_permission(&StaticPermission(true), "t", "m").await,
            PermissionStatus::Granted
        );
        assert_eq!(
            request_permission(&StaticPermission(false), "t", "m").await,
            PermissionStatus::Denied
        );
    }

    #[tokio::test]
    async fn gate_errors_count_as_denied() {
        assert_eq!(
            request_permission(&BrokenGate, "t", "m").await,
            PermissionStatus::Denied
        );
    }
}
