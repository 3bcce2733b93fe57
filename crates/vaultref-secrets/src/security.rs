//! Security utilities for secret values
//!
//! Provides:
//! - SecureString with zeroize
//! - Audit logging (never logs secret values)

use std::fmt;
use tracing::Level;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A secure string that is automatically zeroed on drop
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct SecureString {
    inner: String,
}

impl SecureString {
    /// Create a new secure string
    pub fn new(value: String) -> Self {
        Self { inner: value }
    }

    /// Get the string value (use with caution)
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Get length
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl From<String> for SecureString {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for SecureString {
    fn from(s: &str) -> Self {
        Self::new(s.to_string())
    }
}

impl fmt::Debug for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecureString([REDACTED {} bytes])", self.len())
    }
}

impl fmt::Display for SecureString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[REDACTED]")
    }
}

/// Audit log entry for one parameter's resolution
#[derive(Debug, Clone)]
pub struct AuditLog {
    pub operation: String,
    pub parameter: String,
    /// Secret names substituted into the parameter
    pub resolved: Vec<String>,
    /// In-scope names left in the parameter's final text
    pub unresolved: Vec<String>,
    pub timestamp: std::time::SystemTime,
}

impl AuditLog {
    pub fn new(operation: impl Into<String>, parameter: impl Into<String>) -> Self {
        Self {
            operation: operation.into(),
            parameter: parameter.into(),
            resolved: Vec::new(),
            unresolved: Vec::new(),
            timestamp: std::time::SystemTime::now(),
        }
    }

    pub fn with_resolved(mut self, names: Vec<String>) -> Self {
        self.resolved = names;
        self
    }

    pub fn with_unresolved(mut self, names: Vec<String>) -> Self {
        self.unresolved = names;
        self
    }

    pub fn success(&self) -> bool {
        self.unresolved.is_empty()
    }

    /// Fully resolved parameters are routine; leftovers are worth a warning
    pub fn level(&self) -> Level {
        if self.success() {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }

    /// Log the audit entry (never logs secret values)
    pub fn log(&self) {
        if self.level() == Level::DEBUG {
            tracing::debug!(
                operation = %self.operation,
                parameter = %self.parameter,
                resolved = ?self.resolved,
                timestamp = ?self.timestamp,
                "Parameter resolved"
            );
        } else {
            tracing::warn!(
                operation = %self.operation,
                parameter = %self.parameter,
                resolved = ?self.resolved,
                unresolved = ?self.unresolved,
                timestamp = ?self.timestamp,
                "Parameter has unresolved secret references"
            );
        }
    }
}
