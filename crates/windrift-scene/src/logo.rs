//! A single drifting logo sprite.

use windrift_core::ColorId;

use crate::sampler::Sampler;

/// State for one logo on screen.
///
/// Logos are allocated once at startup and never dropped; when one drifts
/// out of frame it is recycled in place with a fresh position and color.
/// Position is unbounded and may sit outside the surface until the next
/// update notices and recycles it.
#[derive(Debug, Clone)]
pub struct Logo {
    /// Current x position, in cells.
    pub x: f64,
    /// Current y position, in cells.
    pub y: f64,
    /// Outward drift rate, fixed for the logo's lifetime.
    pub speed: f64,
    /// Palette color, reassigned on each recycle.
    pub color: ColorId,
}

impl Logo {
    /// Create a logo at a random position with a random color.
    pub fn random(sampler: &mut Sampler, speed: f64, width: u16, height: u16) -> Self {
        let (x, y) = sampler.position(0.0, 0.0, width as f64, height as f64);
        Self {
            x,
            y,
            speed,
            color: sampler.color(),
        }
    }

    /// Reset this logo to a new random position and color.
    ///
    /// Speed is deliberately untouched; a logo keeps the drift rate it was
    /// born with across every recycle.
    pub fn recycle(&mut self, sampler: &mut Sampler, width: u16, height: u16) {
        let (x, y) = sampler.position(0.0, 0.0, width as f64, height as f64);
        self.x = x;
        self.y = y;
        self.color = sampler.color();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recycle_keeps_speed_and_stays_in_bounds() {
        let mut sampler = Sampler::with_seed(11);
        let mut logo = Logo::random(&mut sampler, 3.3, 800, 600);

        for _ in 0..50 {
            logo.recycle(&mut sampler, 800, 600);
            assert!((0.0..800.0).contains(&logo.x));
            assert!((0.0..600.0).contains(&logo.y));
            assert_eq!(logo.speed, 3.3);
        }
    }

    #[test]
    fn recycle_twice_in_a_row_is_safe() {
        let mut sampler = Sampler::with_seed(5);
        let mut logo = Logo::random(&mut sampler, 1.2, 200, 100);

        logo.recycle(&mut sampler, 200, 100);
        let first = (logo.x, logo.y);
        assert!((0.0..200.0).contains(&first.0));
        assert!((0.0..100.0).contains(&first.1));

        logo.recycle(&mut sampler, 200, 100);
        assert!((0.0..200.0).contains(&logo.x));
        assert!((0.0..100.0).contains(&logo.y));
        assert_eq!(logo.speed, 1.2);
    }
}
