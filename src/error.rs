use thiserror::Error;

/// Returned when a [`RenderStyle`](crate::RenderStyle) name is not recognised.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseRenderStyleError {
    /// Carries the offending name, trimmed.
    #[error("unknown render style `{0}`, expected `unicode` or `ascii`")]
    Unknown(String),
}
