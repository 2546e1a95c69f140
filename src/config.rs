//! Show configuration
//!
//! All tunables live in one explicit struct handed to the scene sequencer at
//! startup; nothing in the core reads process-wide mutable state. Defaults
//! reproduce the reference rig's timings.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::consts;

/// Missile swarm tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SwarmConfig {
    /// Max concurrently live missiles
    pub capacity: usize,
    /// Total frames before the finale is forced
    pub frame_limit: u32,
    /// Frame interval in milliseconds
    pub frame_ms: u64,
    /// Launch x is drawn from [margin, width - margin]
    pub launch_margin: i32,
    /// Frames until the next permitted launch, drawn per launch
    pub countdown_min: i32,
    pub countdown_max: i32,
}

impl Default for SwarmConfig {
    fn default() -> Self {
        Self {
            capacity: 12,
            frame_limit: 200,
            frame_ms: 50,
            launch_margin: 8,
            countdown_min: 3,
            countdown_max: 7,
        }
    }
}

impl SwarmConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

/// Finale ring-sweep tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinaleConfig {
    /// Interval between rings and between flash edges, in milliseconds
    pub frame_ms: u64,
}

impl Default for FinaleConfig {
    fn default() -> Self {
        Self { frame_ms: 50 }
    }
}

impl FinaleConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }
}

/// Code-lock puzzle tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CodeLockConfig {
    /// Slots in the target code
    pub code_len: usize,
    /// Per-slot delay before a slot becomes lockable, seconds, drawn uniformly
    pub unlock_delay_secs: (f32, f32),
    /// Per-slot minimum gap since the previous lock event, seconds
    pub lock_interval_secs: (f32, f32),
    /// Absolute session deadline, seconds
    pub timeout_secs: f32,
    /// Decoy flicker frame interval, milliseconds
    pub frame_ms: u64,
    /// Lock-scan cadence, milliseconds
    pub scan_ms: u64,
    /// Invert-flash cycles after the code is fully revealed
    pub reveal_cycles: u32,
    /// Reveal flash cadence, milliseconds
    pub reveal_ms: u64,
}

impl Default for CodeLockConfig {
    fn default() -> Self {
        Self {
            code_len: consts::CODE_LENGTH,
            unlock_delay_secs: (18.0, 42.0),
            lock_interval_secs: (18.0, 42.0),
            timeout_secs: 300.0,
            frame_ms: 15,
            scan_ms: 30,
            reveal_cycles: 25,
            reveal_ms: 200,
        }
    }
}

impl CodeLockConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f32(self.timeout_secs)
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn scan_interval(&self) -> Duration {
        Duration::from_millis(self.scan_ms)
    }

    pub fn reveal_interval(&self) -> Duration {
        Duration::from_millis(self.reveal_ms)
    }
}

/// Noise-storm (console static) tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StormConfig {
    /// Random pixels drawn per frame
    pub intensity: u32,
    /// Frame interval, milliseconds
    pub frame_ms: u64,
    /// Storm duration, seconds
    pub duration_secs: f32,
}

impl Default for StormConfig {
    fn default() -> Self {
        // DEFCON 3 settings from the reference rig, trimmed to a short intro
        Self {
            intensity: 500,
            frame_ms: 225,
            duration_secs: 6.0,
        }
    }
}

impl StormConfig {
    pub fn frame_interval(&self) -> Duration {
        Duration::from_millis(self.frame_ms)
    }

    pub fn duration(&self) -> Duration {
        Duration::from_secs_f32(self.duration_secs)
    }
}

/// Complete show configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ShowConfig {
    pub swarm: SwarmConfig,
    pub finale: FinaleConfig,
    pub codelock: CodeLockConfig,
    pub storm: StormConfig,
}

impl ShowConfig {
    /// Load from a JSON file.
    pub fn load(path: &Path) -> Result<Self, Box<dyn std::error::Error>> {
        let json = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    /// Load from a JSON file, falling back to defaults if it is missing or
    /// malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                log::info!("Loaded show config from {}", path.display());
                config
            }
            Err(e) => {
                log::info!("Using default show config ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    /// Write as pretty JSON.
    pub fn save(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_reference_rig() {
        let config = ShowConfig::default();
        assert_eq!(config.swarm.capacity, 12);
        assert_eq!(config.swarm.frame_limit, 200);
        assert_eq!(config.swarm.frame_interval(), Duration::from_millis(50));
        assert_eq!(config.codelock.code_len, 8);
        assert_eq!(config.codelock.unlock_delay_secs, (18.0, 42.0));
        assert_eq!(config.codelock.timeout(), Duration::from_secs(300));
    }

    #[test]
    fn test_json_round_trip() {
        let config = ShowConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: ShowConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back.swarm.capacity, config.swarm.capacity);
        assert_eq!(back.codelock.scan_ms, config.codelock.scan_ms);
        assert_eq!(back.storm.intensity, config.storm.intensity);
    }
}
