//! Error types.

use std::fmt;

/// Rejected configuration. Raised when the arbiter is built or reconfigured,
/// never while events are being processed.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// A distance or ratio threshold is not a positive, finite number.
    InvalidThreshold { name: &'static str, value: f32 },
    /// The long-press timeout is zero, so every press would be a long-press.
    ZeroLongPressTimeout,
    /// The selection title template never mentions the count.
    MissingCountPlaceholder { template: String },
    /// A `{` or `}` in the template is neither a placeholder nor escaped.
    UnbalancedBrace { template: String, position: usize },
    /// The template names a placeholder other than `{count}`.
    UnknownPlaceholder { template: String, name: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidThreshold { name, value } => {
                write!(f, "threshold `{name}` must be positive and finite, got {value}")
            }
            ConfigError::ZeroLongPressTimeout => {
                write!(f, "long-press timeout must be greater than zero")
            }
            ConfigError::MissingCountPlaceholder { template } => {
                write!(f, "selection title template {template:?} has no {{count}} placeholder")
            }
            ConfigError::UnbalancedBrace { template, position } => {
                write!(f, "unbalanced brace at byte {position} in template {template:?}")
            }
            ConfigError::UnknownPlaceholder { template, name } => {
                write!(f, "unknown placeholder {{{name}}} in template {template:?}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Haptic pulses are best effort; the arbiter logs these and carries on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HapticError {
    /// The device has no vibrator, or access was denied.
    Unavailable,
    Failed { reason: String },
}

impl fmt::Display for HapticError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HapticError::Unavailable => write!(f, "haptic feedback unavailable"),
            HapticError::Failed { reason } => write!(f, "haptic pulse failed: {reason}"),
        }
    }
}

impl std::error::Error for HapticError {}
