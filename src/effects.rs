//! Pixel-level scene effects
//!
//! Small effects shared by the scene sequencer: the invert-flash code reveal
//! that follows a solved lock, and the random static the console idles on
//! between headline scenes. Both draw through [`PixelSurface`] and pace
//! through [`FrameClock`] like everything else.

use std::time::Duration;

use rand::Rng;

use crate::clock::FrameClock;
use crate::config::StormConfig;
use crate::consts::GLYPH_CELL;
use crate::surface::{PixelSurface, draw_glyph};

/// Invert every pixel in place.
pub fn invert<S: PixelSurface>(surface: &mut S) {
    for y in 0..surface.height() {
        for x in 0..surface.width() {
            let on = surface.pixel(x, y);
            surface.set_pixel(x, y, !on);
        }
    }
}

/// Flash the revealed code: draw it, then invert the whole strip, repeating
/// for `cycles` on/off pairs at `cadence`.
pub fn flash_reveal<S, C>(surface: &mut S, clock: &mut C, code: &[char], cycles: u32, cadence: Duration)
where
    S: PixelSurface,
    C: FrameClock,
{
    for _ in 0..cycles {
        surface.clear();
        for (slot, ch) in code.iter().enumerate() {
            draw_glyph(surface, *ch, slot as i32 * GLYPH_CELL, 0);
        }
        surface.present();
        clock.wait(cadence);

        invert(surface);
        surface.present();
        clock.wait(cadence);
    }
}

/// One frame of console static: `intensity` random pixels, each randomly on
/// or off.
pub fn noise_frame<S, R>(surface: &mut S, rng: &mut R, intensity: u32)
where
    S: PixelSurface,
    R: Rng,
{
    surface.clear();
    for _ in 0..intensity {
        let x = rng.random_range(0..surface.width());
        let y = rng.random_range(0..surface.height());
        surface.set_pixel(x, y, rng.random());
    }
}

/// Run the static effect for the configured duration.
pub fn run_noise_storm<S, C, R>(surface: &mut S, clock: &mut C, rng: &mut R, config: &StormConfig)
where
    S: PixelSurface,
    C: FrameClock,
    R: Rng,
{
    let deadline = clock.now() + config.duration();
    while clock.now() < deadline {
        noise_frame(surface, rng, config.intensity);
        surface.present();
        clock.wait(config.frame_interval());
    }
}
