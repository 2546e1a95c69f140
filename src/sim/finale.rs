//! Finale shockwave
//!
//! Deterministic closing flourish after the swarm: a thin ring sweeps out
//! from a fixed center, then the whole strip flashes. Unlike per-missile
//! shockwaves this is not tied to any impact point and takes no RNG.

use crate::clock::FrameClock;
use crate::config::FinaleConfig;
use crate::consts::{FINALE_BAND, FINALE_CENTER, FINALE_FLASH_CYCLES, FINALE_MAX_RADIUS};
use crate::surface::PixelSurface;

/// Light every pixel whose distance to `center` falls within the band around
/// `radius`.
pub fn draw_ring<S: PixelSurface>(surface: &mut S, center: (i32, i32), radius: f32, band: f32) {
    for x in 0..surface.width() {
        for y in 0..surface.height() {
            let dx = (x - center.0) as f32;
            let dy = (y - center.1) as f32;
            let dist = (dx * dx + dy * dy).sqrt();
            if (dist - radius).abs() < band {
                surface.set_pixel(x, y, true);
            }
        }
    }
}

/// Run the finale once: radius sweep, then full-grid flash cycles. The strip
/// is left dark.
pub fn run_finale<S, C>(surface: &mut S, clock: &mut C, config: &FinaleConfig)
where
    S: PixelSurface,
    C: FrameClock,
{
    for radius in 1..=FINALE_MAX_RADIUS {
        surface.clear();
        draw_ring(surface, FINALE_CENTER, radius as f32, FINALE_BAND);
        surface.present();
        clock.wait(config.frame_interval());
    }

    for _ in 0..FINALE_FLASH_CYCLES {
        surface.fill(true);
        surface.present();
        clock.wait(config.frame_interval());
        surface.fill(false);
        surface.present();
        clock.wait(config.frame_interval());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::surface::FrameBuffer;
    use std::time::Duration;

    #[test]
    fn test_ring_pixels_lie_in_band() {
        let mut fb = FrameBuffer::new(64, 8);
        draw_ring(&mut fb, FINALE_CENTER, 3.0, FINALE_BAND);
        assert!(fb.lit_count() > 0);
        for (x, y) in fb.lit_pixels() {
            let dx = (x - FINALE_CENTER.0) as f32;
            let dy = (y - FINALE_CENTER.1) as f32;
            let dist = (dx * dx + dy * dy).sqrt();
            assert!((dist - 3.0).abs() < FINALE_BAND, "({}, {})", x, y);
        }
    }

    #[test]
    fn test_each_radius_lights_something() {
        for radius in 1..=FINALE_MAX_RADIUS {
            let mut fb = FrameBuffer::new(64, 8);
            draw_ring(&mut fb, FINALE_CENTER, radius as f32, FINALE_BAND);
            assert!(fb.lit_count() > 0, "radius {} dark", radius);
        }
    }

    #[test]
    fn test_finale_frame_count_and_ends_dark() {
        let mut fb = FrameBuffer::new(64, 8);
        let mut clock = ManualClock::new();
        let config = FinaleConfig::default();

        run_finale(&mut fb, &mut clock, &config);

        let frames = FINALE_MAX_RADIUS as u64 + 2 * FINALE_FLASH_CYCLES as u64;
        assert_eq!(fb.presented, frames);
        assert_eq!(fb.lit_count(), 0);
        assert_eq!(clock.now(), Duration::from_millis(50) * frames as u32);
    }
}
