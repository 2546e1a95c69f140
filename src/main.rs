//! Warboard entry point
//!
//! Thin scene sequencer: wires config, surface, clock, and RNG together and
//! runs the show. On the reference rig the surface is the MAX7219 strip; here
//! a terminal renderer stands in so the show runs anywhere.

use std::io::Write;
use std::path::Path;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use warboard::clock::WallClock;
use warboard::config::ShowConfig;
use warboard::consts::{HEIGHT, WIDTH};
use warboard::effects;
use warboard::sim::{PuzzleOutcome, run_code_search, run_missile_sequence};
use warboard::surface::{FrameBuffer, PixelSurface};

/// Terminal stand-in for the panel strip: presents the frame buffer as a
/// block-character grid.
struct TerminalSurface {
    fb: FrameBuffer,
}

impl TerminalSurface {
    fn new(width: i32, height: i32) -> Self {
        Self {
            fb: FrameBuffer::new(width, height),
        }
    }
}

impl PixelSurface for TerminalSurface {
    fn width(&self) -> i32 {
        self.fb.width()
    }

    fn height(&self) -> i32 {
        self.fb.height()
    }

    fn clear(&mut self) {
        self.fb.clear();
    }

    fn set_pixel(&mut self, x: i32, y: i32, on: bool) {
        self.fb.set_pixel(x, y, on);
    }

    fn pixel(&self, x: i32, y: i32) -> bool {
        self.fb.pixel(x, y)
    }

    fn present(&mut self) {
        self.fb.present();
        let mut out = String::with_capacity(((self.width() + 1) * self.height()) as usize + 8);
        // Home the cursor instead of clearing to avoid flicker
        out.push_str("\x1b[H");
        for y in 0..self.height() {
            for x in 0..self.width() {
                out.push(if self.fb.pixel(x, y) { '█' } else { ' ' });
            }
            out.push('\n');
        }
        print!("{}", out);
        let _ = std::io::stdout().flush();
    }
}

/// Stand-in for the shutdown/reboot animation collaborator.
fn shutdown_handoff<S: PixelSurface>(surface: &mut S) {
    log::info!("Handing off to shutdown sequence");
    surface.clear();
    surface.present();
}

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random::<u64>);
    log::info!("Warboard starting, seed {}", seed);

    let config = ShowConfig::load_or_default(Path::new("warboard.json"));
    let mut rng = Pcg32::seed_from_u64(seed);
    let mut surface = TerminalSurface::new(WIDTH, HEIGHT);
    let mut clock = WallClock::new();

    print!("\x1b[2J");

    effects::run_noise_storm(&mut surface, &mut clock, &mut rng, &config.storm);

    match run_code_search(&mut surface, &mut clock, &mut rng, &config.codelock) {
        PuzzleOutcome::Solved(code) => {
            effects::flash_reveal(
                &mut surface,
                &mut clock,
                &code,
                config.codelock.reveal_cycles,
                config.codelock.reveal_interval(),
            );
            run_missile_sequence(
                &mut surface,
                &mut clock,
                &mut rng,
                &config.swarm,
                &config.finale,
            );
            shutdown_handoff(&mut surface);
        }
        PuzzleOutcome::TimedOut => {
            log::warn!("Code search expired; returning to sequencer");
        }
    }
}
