//! Error Types
//!
//! All fallible setup paths (GPU acquisition, surface configuration, the
//! event loop) return [`Result<T>`], an alias for
//! `std::result::Result<T, SpecularError>`. The per-frame render path
//! deliberately performs no runtime validation; malformed inputs produce
//! visibly wrong pixels rather than errors.

use thiserror::Error;

/// The main error type for the renderer.
#[derive(Error, Debug)]
pub enum SpecularError {
    /// Failed to request a compatible GPU adapter.
    #[error("Failed to request WGPU adapter: {0}")]
    AdapterRequestFailed(String),

    /// Failed to create the GPU device.
    #[error("Failed to create WGPU device: {0}")]
    DeviceCreateFailed(#[from] wgpu::RequestDeviceError),

    /// The surface could not be configured for the adapter.
    #[error("Surface configuration failed: {0}")]
    SurfaceConfigFailed(String),

    /// The surface frame could not be acquired.
    #[error("Surface error: {0}")]
    SurfaceError(#[from] wgpu::SurfaceError),

    /// Window system error.
    #[error("Window system error: {0}")]
    WindowError(#[from] raw_window_handle::HandleError),

    /// Event loop error (winit).
    #[error("Event loop error: {0}")]
    EventLoopError(#[from] winit::error::EventLoopError),

    /// Window creation error (winit).
    #[error("Window creation error: {0}")]
    WindowCreateError(#[from] winit::error::OsError),
}

/// Alias for `Result<T, SpecularError>`.
pub type Result<T> = std::result::Result<T, SpecularError>;
