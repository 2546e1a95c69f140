//! Code-lock reveal puzzle
//!
//! Eight slots flicker through decoy symbols until each permanently locks,
//! revealing one symbol of the hidden target code. Lock order and timing are
//! randomized at setup; the scan that performs locking runs at a coarser
//! cadence than the decoy flicker. The session either solves (all slots
//! locked) or hits the absolute deadline.

use std::time::Duration;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::clock::FrameClock;
use crate::config::CodeLockConfig;
use crate::consts::{ALPHABET, GLYPH_CELL};
use crate::surface::{PixelSurface, draw_glyph};

/// Terminal state of a code-search session.
///
/// Timeout is an explicit outcome rather than a silent fall-through; what
/// happens after a timeout is the caller's decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PuzzleOutcome {
    /// Every slot locked; carries the revealed code
    Solved(Vec<char>),
    /// Deadline hit with slots still flickering
    TimedOut,
}

fn random_symbol<R: Rng>(rng: &mut R) -> char {
    ALPHABET[rng.random_range(0..ALPHABET.len())] as char
}

/// Per-session puzzle state
#[derive(Debug, Clone)]
pub struct CodeLockPuzzle {
    /// Hidden target code, fixed at setup
    pub code: Vec<char>,
    /// Symbols currently shown: decoys for live slots, the true symbol once
    /// locked
    pub display: Vec<char>,
    pub locked: Vec<bool>,
    /// Random permutation of slot indices; slots lock in this order
    pub lock_order: Vec<usize>,
    /// Absolute time after which each slot becomes lockable
    pub unlock_eligible_at: Vec<Duration>,
    /// Required gap since the previous lock event, per slot
    pub min_interval: Vec<Duration>,
    cursor: usize,
    last_lock_at: Duration,
}

impl CodeLockPuzzle {
    pub fn new<R: Rng>(config: &CodeLockConfig, now: Duration, rng: &mut R) -> Self {
        let n = config.code_len;
        let code: Vec<char> = (0..n).map(|_| random_symbol(rng)).collect();

        let mut lock_order: Vec<usize> = (0..n).collect();
        lock_order.shuffle(rng);

        let (delay_min, delay_max) = config.unlock_delay_secs;
        let (gap_min, gap_max) = config.lock_interval_secs;
        let unlock_eligible_at = (0..n)
            .map(|_| now + Duration::from_secs_f32(rng.random_range(delay_min..=delay_max)))
            .collect();
        let min_interval = (0..n)
            .map(|_| Duration::from_secs_f32(rng.random_range(gap_min..=gap_max)))
            .collect();

        let display = (0..n).map(|_| random_symbol(rng)).collect();

        Self {
            code,
            display,
            locked: vec![false; n],
            lock_order,
            unlock_eligible_at,
            min_interval,
            cursor: 0,
            last_lock_at: now,
        }
    }

    pub fn locked_count(&self) -> usize {
        self.cursor
    }

    pub fn solved(&self) -> bool {
        self.cursor == self.code.len()
    }

    /// Replace every unlocked slot's symbol with a fresh decoy. Locked slots
    /// keep their revealed symbol.
    pub fn refresh_decoys<R: Rng>(&mut self, rng: &mut R) {
        for (slot, locked) in self.locked.iter().enumerate() {
            if !locked {
                self.display[slot] = random_symbol(rng);
            }
        }
    }

    /// One lock scan: the slot at the cursor locks iff it is past its
    /// eligibility time and the gap since the previous lock event satisfies
    /// its interval. At most one slot locks per call; returns the slot that
    /// locked, if any.
    pub fn scan(&mut self, now: Duration) -> Option<usize> {
        if self.solved() {
            return None;
        }
        let slot = self.lock_order[self.cursor];
        if now < self.unlock_eligible_at[slot] {
            return None;
        }
        if now.saturating_sub(self.last_lock_at) < self.min_interval[slot] {
            return None;
        }

        self.locked[slot] = true;
        self.display[slot] = self.code[slot];
        self.cursor += 1;
        self.last_lock_at = now;
        log::info!("Locked slot {} with '{}'", slot + 1, self.code[slot]);
        Some(slot)
    }

    /// Draw one symbol per panel cell.
    pub fn draw<S: PixelSurface>(&self, surface: &mut S) {
        for (slot, ch) in self.display.iter().enumerate() {
            draw_glyph(surface, *ch, slot as i32 * GLYPH_CELL, 0);
        }
    }
}

/// Run a code-search session to its terminal state.
///
/// Renders the decoy flicker every frame and performs lock scans at the
/// coarser scan cadence. Returns when the puzzle solves or the deadline hits;
/// the flash reveal and missile handoff are the caller's to run.
pub fn run_code_search<S, C, R>(
    surface: &mut S,
    clock: &mut C,
    rng: &mut R,
    config: &CodeLockConfig,
) -> PuzzleOutcome
where
    S: PixelSurface,
    C: FrameClock,
    R: Rng,
{
    let start = clock.now();
    let deadline = start + config.timeout();
    let mut puzzle = CodeLockPuzzle::new(config, start, rng);
    log::info!(
        "Code search started, target: {}",
        puzzle.code.iter().collect::<String>()
    );

    let mut next_scan = start;
    loop {
        let now = clock.now();
        if puzzle.solved() {
            log::info!("Code search solved");
            return PuzzleOutcome::Solved(puzzle.code);
        }
        if now >= deadline {
            log::warn!(
                "Code search timed out with {}/{} slots locked",
                puzzle.locked_count(),
                config.code_len
            );
            return PuzzleOutcome::TimedOut;
        }

        puzzle.refresh_decoys(rng);
        surface.clear();
        puzzle.draw(surface);
        surface.present();

        if now >= next_scan {
            puzzle.scan(now);
            next_scan = now + config.scan_interval();
        }

        clock.wait(config.frame_interval());
    }
}
