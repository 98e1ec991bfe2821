//! Crate error type.
//!
//! Animation itself never fails; errors only come from rejecting a
//! configuration up front or from the host event loop.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid {field}: {reason}")]
    InvalidConfig {
        field: &'static str,
        reason: &'static str,
    },

    #[error("spring (stiffness {stiffness}, viscosity {viscosity}) diverges at {max_step_ms} ms steps")]
    UnstableSpring {
        stiffness: f32,
        viscosity: f32,
        max_step_ms: f32,
    },

    #[error("event loop: {0}")]
    EventLoop(#[from] calloop::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
