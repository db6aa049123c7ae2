//! Celebration burst shown when an accent color is applied.
//!
//! A [`Burst`] is fully decided up front: each particle's color, angle,
//! speed and spawn offset are drawn when the burst is created, so the host
//! only has to schedule them. [`ParticleRegistry`] replays bursts against a
//! clock and reports which particles appear and disappear at each step.
//!
//! Timeline of one burst started at `t`:
//!
//! ```text
//! particle i: spawns at t + i*30ms, flies for 1000ms, removed at t + i*30ms + 1000ms
//! ```

#[cfg(test)]
#[path = "confetti_test.rs"]
mod confetti_test;

use std::f64::consts::TAU;

use rand::Rng;

use crate::consts::{
    CONFETTI_COUNT, CONFETTI_EASING, CONFETTI_LIFETIME_MS, CONFETTI_MAX_SPEED, CONFETTI_MIN_SPEED,
    CONFETTI_PALETTE, CONFETTI_SIZE_PX, CONFETTI_STAGGER_MS,
};

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
    pub index: usize,
    pub color: &'static str,
    /// Emission direction in radians, `[0, 2π)`.
    pub angle: f64,
    /// Travel distance in pixels, `[100, 200)`.
    pub speed: f64,
    /// Absolute spawn time in milliseconds.
    pub spawn_at_ms: f64,
}

impl Particle {
    /// Offset `(dx, dy)` in pixels reached at the end of the flight.
    #[must_use]
    pub fn displacement(&self) -> (f64, f64) {
        (self.speed * self.angle.cos(), self.speed * self.angle.sin())
    }

    /// Delay from burst start to this particle's spawn.
    #[must_use]
    pub fn spawn_offset_ms(&self) -> u32 {
        stagger_offset_ms(self.index)
    }

    #[must_use]
    pub fn remove_at_ms(&self) -> f64 {
        self.spawn_at_ms + f64::from(CONFETTI_LIFETIME_MS)
    }

    /// Inline CSS of the particle element: a small circle at viewport center.
    #[must_use]
    pub fn css_text(&self) -> String {
        format!(
            "position: fixed; width: {size}px; height: {size}px; background: {color}; border-radius: 50%; \
             top: 50%; left: 50%; pointer-events: none; z-index: 9999;",
            size = CONFETTI_SIZE_PX,
            color = self.color,
        )
    }

    /// Inline `transition` driving the flight from start to end values.
    #[must_use]
    pub fn transition(&self) -> String {
        format!(
            "transform {CONFETTI_LIFETIME_MS}ms {CONFETTI_EASING}, opacity {CONFETTI_LIFETIME_MS}ms {CONFETTI_EASING}"
        )
    }

    /// `transform` values at the start and end of the flight.
    #[must_use]
    pub fn transforms(&self) -> (String, String) {
        let (dx, dy) = self.displacement();
        ("translate(0, 0) scale(1)".to_owned(), format!("translate({dx}px, {dy}px) scale(0)"))
    }
}

fn stagger_offset_ms(index: usize) -> u32 {
    u32::try_from(index).map_or(u32::MAX, |i| i.saturating_mul(CONFETTI_STAGGER_MS))
}

#[derive(Clone, Debug)]
pub struct Burst {
    pub started_at_ms: f64,
    particles: Vec<Particle>,
}

impl Burst {
    /// Draw a full burst starting at `started_at_ms`.
    pub fn new<R: Rng>(rng: &mut R, started_at_ms: f64) -> Self {
        let particles = (0..CONFETTI_COUNT)
            .map(|index| Particle {
                index,
                color: CONFETTI_PALETTE[rng.random_range(0..CONFETTI_PALETTE.len())],
                angle: rng.random_range(0.0..TAU),
                speed: rng.random_range(CONFETTI_MIN_SPEED..CONFETTI_MAX_SPEED),
                spawn_at_ms: started_at_ms + f64::from(stagger_offset_ms(index)),
            })
            .collect();
        Self { started_at_ms, particles }
    }

    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Time the last particle leaves the page.
    #[must_use]
    pub fn ends_at_ms(&self) -> f64 {
        self.particles.iter().map(Particle::remove_at_ms).fold(self.started_at_ms, f64::max)
    }
}

/// Particles appearing and disappearing during one [`ParticleRegistry::advance`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Advance {
    pub spawned: Vec<Particle>,
    pub removed: Vec<Particle>,
}

/// Clock-driven view of every launched burst.
#[derive(Debug, Default)]
pub struct ParticleRegistry {
    pending: Vec<Particle>,
    live: Vec<Particle>,
    now_ms: f64,
}

impl ParticleRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue every particle of `burst`. Bursts may overlap.
    pub fn launch(&mut self, burst: &Burst) {
        self.pending.extend(burst.particles().iter().cloned());
        self.pending.sort_by(|a, b| a.spawn_at_ms.total_cmp(&b.spawn_at_ms));
    }

    /// Move the clock to `now_ms`, spawning then retiring what is due.
    ///
    /// The clock never moves backwards; an earlier `now_ms` is ignored.
    pub fn advance(&mut self, now_ms: f64) -> Advance {
        self.now_ms = self.now_ms.max(now_ms);
        let now = self.now_ms;

        let due = self.pending.iter().take_while(|p| p.spawn_at_ms <= now).count();
        let spawned: Vec<Particle> = self.pending.drain(..due).collect();
        self.live.extend(spawned.iter().cloned());

        let (removed, live): (Vec<Particle>, Vec<Particle>) =
            std::mem::take(&mut self.live).into_iter().partition(|p| p.remove_at_ms() <= now);
        self.live = live;

        Advance { spawned, removed }
    }

    /// Particles currently on the page.
    #[must_use]
    pub fn live(&self) -> &[Particle] {
        &self.live
    }

    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty() && self.live.is_empty()
    }
}

#[cfg(feature = "hydrate")]
pub use browser::launch;

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;
    use web_sys::{Document, HtmlElement};

    use super::{Burst, Particle};
    use crate::consts::CONFETTI_LIFETIME_MS;
    use crate::dom;
    use crate::error::PageError;

    /// Schedule every particle of `burst` onto the page.
    pub fn launch(document: &Document, burst: &Burst) {
        for particle in burst.particles() {
            let document = document.clone();
            let particle = particle.clone();
            dom::after(particle.spawn_offset_ms(), move || {
                if let Err(e) = spawn(&document, &particle) {
                    log::warn!("confetti particle {} skipped: {e}", particle.index);
                }
            });
        }
    }

    fn spawn(document: &Document, particle: &Particle) -> Result<(), PageError> {
        let body = document.body().ok_or_else(|| PageError::MissingElement("body".to_owned()))?;
        let el = document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| PageError::Js("confetti node is not an HtmlElement".to_owned()))?;
        let (from, to) = particle.transforms();
        el.style().set_css_text(&particle.css_text());
        dom::set_style(&el, "transform", &from);
        dom::set_style(&el, "opacity", "1");
        dom::set_style(&el, "transition", &particle.transition());
        body.append_child(&el)?;

        // Start values must be committed before the end values land.
        let flying = el.clone();
        dom::after(0, move || {
            dom::set_style(&flying, "transform", &to);
            dom::set_style(&flying, "opacity", "0");
        });
        dom::after(CONFETTI_LIFETIME_MS, move || el.remove());
        Ok(())
    }
}
