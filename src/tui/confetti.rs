//! Falling confetti shown after a win.

use rand::Rng;
use rand::seq::IndexedRandom;
use ratatui::style::Color;
use std::time::{Duration, Instant};

use super::theme::CONFETTI_COLORS;

/// A single confetti piece.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Particle {
    /// Horizontal position as a fraction of the screen width.
    column: f32,
    color: Color,
    /// Time to fall from top to bottom.
    fall: Duration,
    /// Time before the piece starts falling.
    delay: Duration,
}

/// A burst of confetti with a fixed lifetime.
#[derive(Debug, Clone)]
pub struct Confetti {
    particles: Vec<Particle>,
    started: Instant,
    lifetime: Duration,
}

/// A particle's position at some instant, as fractions of the area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Piece {
    /// 0.0 is the left edge.
    pub x: f32,
    /// 0.0 is the top edge.
    pub y: f32,
    /// Fill color.
    pub color: Color,
}

impl Confetti {
    /// Spawns `count` particles starting at `now`.
    pub fn burst<R: Rng + ?Sized>(
        count: usize,
        lifetime: Duration,
        now: Instant,
        rng: &mut R,
    ) -> Self {
        let particles = (0..count)
            .map(|_| Particle {
                column: rng.random_range(0.0..1.0),
                color: CONFETTI_COLORS.choose(rng).copied().unwrap_or(Color::White),
                fall: Duration::from_secs_f32(rng.random_range(2.0..5.0)),
                delay: Duration::from_secs_f32(rng.random_range(0.0..2.0)),
            })
            .collect();
        Self {
            particles,
            started: now,
            lifetime,
        }
    }

    /// Whether the burst should be cleared.
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.lifetime
    }

    /// Number of particles in the burst.
    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Particles currently in flight.
    pub fn pieces(&self, now: Instant) -> impl Iterator<Item = Piece> + '_ {
        let elapsed = now.saturating_duration_since(self.started);
        self.particles.iter().filter_map(move |p| {
            let falling = elapsed.checked_sub(p.delay)?;
            let y = falling.as_secs_f32() / p.fall.as_secs_f32();
            (y < 1.0).then_some(Piece {
                x: p.column,
                y,
                color: p.color,
            })
        })
    }
}
