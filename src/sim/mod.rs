//! Deterministic simulation module
//!
//! The two scenes with real state machines live here. This module must stay
//! pure and deterministic:
//! - Fixed frame step only
//! - Seeded RNG only, passed in by the caller
//! - No direct clock or platform access; pacing goes through `FrameClock`

pub mod codelock;
pub mod finale;
pub mod missile;
pub mod swarm;

pub use codelock::{CodeLockPuzzle, PuzzleOutcome, run_code_search};
pub use finale::run_finale;
pub use missile::{Missile, MissileState};
pub use swarm::{MissileSwarm, run_missile_sequence};
