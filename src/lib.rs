//! Warboard - war-room console animations for a chained LED matrix
//!
//! Core modules:
//! - `sim`: Deterministic simulation (missile physics, shockwave finale, code-lock puzzle)
//! - `surface`: Pixel surface abstraction over the panel strip
//! - `clock`: Frame pacing and monotonic time
//! - `effects`: Pixel-level scene effects (flash reveal, noise storm)
//! - `config`: Data-driven show tuning

pub mod clock;
pub mod config;
pub mod effects;
pub mod sim;
pub mod surface;

pub use clock::{FrameClock, ManualClock, WallClock};
pub use config::ShowConfig;
pub use surface::{FrameBuffer, PixelSurface};

/// Display and physics constants
pub mod consts {
    /// Strip dimensions: 8 chained 8x8 panels
    pub const WIDTH: i32 = 64;
    pub const HEIGHT: i32 = 8;
    /// Bottom row; missiles launch from and detonate on it
    pub const GROUND_ROW: i32 = 7;

    /// Per-tick downward acceleration applied to missile velocity
    pub const GRAVITY: f32 = 0.07;
    /// Launch velocity draws
    pub const LAUNCH_VY_MIN: f32 = -1.5;
    pub const LAUNCH_VY_MAX: f32 = -1.2;
    pub const LAUNCH_VX_SPREAD: f32 = 0.3;

    /// Ticks spent in the debris phase before the ring starts
    pub const EXPLODE_DURATION_TICKS: u32 = 12;
    /// Debris pixels drawn per explosion frame
    pub const DEBRIS_PIXELS: u32 = 15;
    /// Debris jitter around the impact point (x: +/-2, y: -2..=0)
    pub const DEBRIS_JITTER: i32 = 2;
    /// Ring radius past which a missile is finished
    pub const SHOCKWAVE_MAX_RADIUS: i32 = 8;
    /// Angular resolution of the discretized ring
    pub const SHOCKWAVE_STEP_DEGREES: u32 = 10;

    /// Finale sweep: fixed center, radii 1..=FINALE_MAX_RADIUS
    pub const FINALE_CENTER: (i32, i32) = (31, 3);
    pub const FINALE_MAX_RADIUS: i32 = 5;
    /// Half-width of the lit ring band
    pub const FINALE_BAND: f32 = 0.75;
    /// Full-grid on/off cycles closing the finale
    pub const FINALE_FLASH_CYCLES: u32 = 3;

    /// Symbol set the code lock draws from
    pub const ALPHABET: &[u8] =
        b"abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789!@#$%&*+=[]{}?";
    /// One slot per panel
    pub const CODE_LENGTH: usize = 8;
    /// Glyph cell edge in pixels
    pub const GLYPH_CELL: i32 = 8;
}
