//=========================================================================
// Particle System
//=========================================================================
//
// Euler-integrated emitter with per-particle random velocity,
// acceleration and lifetime.
//
// Per particle and frame:
//   velocity += acceleration * dt
//   position += velocity * dt
//   lifetime  = max(0, lifetime - dt)
//   color     = start.lerp(end, 1 - lifetime / initial_lifetime)
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::debug;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use super::{Color, ParticleRenderer, TextureHandle};

//=== Distribution ========================================================

/// Where particles are placed relative to the emitter origin on emit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Distribution {
    /// Every particle starts at the origin.
    Point,

    /// Uniformly random inside a rectangle of this size centered on the
    /// origin.
    Area(Vec2),

    /// Row-major grid starting at the origin. Particles beyond
    /// `columns * rows` wrap back to the first cell.
    Grid {
        columns: u32,
        rows: u32,
        spacing: Vec2,
    },
}

impl Default for Distribution {
    fn default() -> Self {
        Self::Point
    }
}

//=== Particle ============================================================

/// One simulated particle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: Vec2,
    pub velocity: Vec2,
    pub acceleration: Vec2,
    /// Seconds left to live; zero means dead.
    pub lifetime: f32,
    pub initial_lifetime: f32,
    pub color: Color,
}

impl Particle {
    fn dead(origin: Vec2) -> Self {
        Self {
            position: origin,
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
            lifetime: 0.0,
            initial_lifetime: 0.0,
            color: Color::TRANSPARENT,
        }
    }

    pub fn is_alive(&self) -> bool {
        self.lifetime > 0.0
    }
}

//=== ParticleSystem ======================================================

/// A fixed pool of particles sharing one texture and configuration.
///
/// # Example
///
/// ```rust
/// use glam::Vec2;
/// use stagehand::particles::{Color, Distribution, ParticleSystem, TextureHandle};
///
/// let mut sparks = ParticleSystem::new(TextureHandle(3), 64, Vec2::new(100.0, 50.0))
///     .with_seed(7);
/// sparks.set_lifetime_range(0.5, 1.0);
/// sparks.set_velocity_range(Vec2::new(-20.0, -40.0), Vec2::new(20.0, -10.0));
/// sparks.set_acceleration_range(Vec2::new(0.0, 98.0), Vec2::new(0.0, 98.0));
/// sparks.set_distribution(Distribution::Area(Vec2::new(8.0, 8.0)));
/// sparks.set_colors(Color::YELLOW, Color::TRANSPARENT);
/// sparks.emit();
///
/// sparks.update(1.0 / 60.0);
/// assert!(!sparks.should_destroy());
/// ```
pub struct ParticleSystem {
    texture: TextureHandle,
    origin: Vec2,
    particles: Vec<Particle>,
    lifetime: (f32, f32),
    velocity: (Vec2, Vec2),
    acceleration: (Vec2, Vec2),
    distribution: Distribution,
    start_color: Color,
    end_color: Color,
    elapsed: f32,
    rng: SmallRng,
}

impl ParticleSystem {
    //--- Construction -----------------------------------------------------

    /// Creates `count` dead particles at `origin`. Call [`emit`](Self::emit)
    /// to bring them to life.
    pub fn new(texture: TextureHandle, count: usize, origin: Vec2) -> Self {
        debug!("Creating particle system with {} particle(s) at {:?}", count, origin);

        Self {
            texture,
            origin,
            particles: vec![Particle::dead(origin); count],
            lifetime: (1.0, 1.0),
            velocity: (Vec2::ZERO, Vec2::ZERO),
            acceleration: (Vec2::ZERO, Vec2::ZERO),
            distribution: Distribution::Point,
            start_color: Color::WHITE,
            end_color: Color::TRANSPARENT,
            elapsed: 0.0,
            rng: SmallRng::from_entropy(),
        }
    }

    /// Replaces the random source with a seeded one for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SmallRng::seed_from_u64(seed);
        self
    }

    //--- Configuration ----------------------------------------------------

    /// Lifetime in seconds, sampled per particle. Negative values are
    /// clamped to zero and the bounds may be given in any order.
    pub fn set_lifetime_range(&mut self, a: f32, b: f32) {
        let (a, b) = (a.max(0.0), b.max(0.0));
        self.lifetime = (a.min(b), a.max(b));
    }

    /// Initial velocity, sampled per component.
    pub fn set_velocity_range(&mut self, a: Vec2, b: Vec2) {
        self.velocity = (a.min(b), a.max(b));
    }

    /// Constant acceleration, sampled per component.
    pub fn set_acceleration_range(&mut self, a: Vec2, b: Vec2) {
        self.acceleration = (a.min(b), a.max(b));
    }

    pub fn set_distribution(&mut self, distribution: Distribution) {
        self.distribution = match distribution {
            Distribution::Grid { columns, rows, spacing } => Distribution::Grid {
                columns: columns.max(1),
                rows: rows.max(1),
                spacing,
            },
            other => other,
        };
    }

    /// Colors at birth and at death.
    pub fn set_colors(&mut self, start: Color, end: Color) {
        self.start_color = start;
        self.end_color = end;
    }

    pub fn set_origin(&mut self, origin: Vec2) {
        self.origin = origin;
    }

    //--- Simulation -------------------------------------------------------

    /// Restarts the effect: every particle is re-placed and re-randomized
    /// and the elapsed time returns to zero.
    pub fn emit(&mut self) {
        self.elapsed = 0.0;

        for index in 0..self.particles.len() {
            let position = self.spawn_position(index);
            let velocity = sample_vec(&mut self.rng, self.velocity);
            let acceleration = sample_vec(&mut self.rng, self.acceleration);
            let lifetime = sample(&mut self.rng, self.lifetime);

            self.particles[index] = Particle {
                position,
                velocity,
                acceleration,
                lifetime,
                initial_lifetime: lifetime,
                color: self.start_color,
            };
        }

        debug!("Emitted {} particle(s)", self.particles.len());
    }

    /// Advances every live particle by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        self.elapsed += dt;

        for particle in self.particles.iter_mut().filter(|p| p.is_alive()) {
            particle.velocity += particle.acceleration * dt;
            particle.position += particle.velocity * dt;
            particle.lifetime = (particle.lifetime - dt).max(0.0);

            let progress = if particle.initial_lifetime > 0.0 {
                1.0 - particle.lifetime / particle.initial_lifetime
            } else {
                1.0
            };
            particle.color = self.start_color.lerp(self.end_color, progress);
        }
    }

    /// Hands every live particle to `renderer`. Returns how many were drawn.
    pub fn draw<R: ParticleRenderer>(&self, renderer: &mut R) -> usize {
        let mut drawn = 0;
        for particle in self.particles.iter().filter(|p| p.is_alive()) {
            renderer.draw_particle(self.texture, particle.position, particle.color);
            drawn += 1;
        }
        drawn
    }

    /// True once more time has passed than the longest possible lifetime.
    pub fn should_destroy(&self) -> bool {
        self.elapsed > self.lifetime.1
    }

    /// Releases the particles and gives the texture back to its owner.
    pub fn unload(self) -> TextureHandle {
        debug!("Unloading particle system ({} particle(s))", self.particles.len());
        self.texture
    }

    //--- Queries ----------------------------------------------------------

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn alive_count(&self) -> usize {
        self.particles.iter().filter(|p| p.is_alive()).count()
    }

    pub fn elapsed(&self) -> f32 {
        self.elapsed
    }

    pub fn texture(&self) -> TextureHandle {
        self.texture
    }

    //--- Internal Helpers -------------------------------------------------

    fn spawn_position(&mut self, index: usize) -> Vec2 {
        match self.distribution {
            Distribution::Point => self.origin,
            Distribution::Area(size) => {
                let half = size.abs() * 0.5;
                self.origin + sample_vec(&mut self.rng, (-half, half))
            }
            Distribution::Grid { columns, rows, spacing } => {
                let cell = index % (columns as usize * rows as usize);
                let column = (cell % columns as usize) as f32;
                let row = (cell / columns as usize) as f32;
                self.origin + Vec2::new(column, row) * spacing
            }
        }
    }
}

fn sample(rng: &mut SmallRng, (min, max): (f32, f32)) -> f32 {
    if min == max {
        min
    } else {
        rng.gen_range(min..=max)
    }
}

fn sample_vec(rng: &mut SmallRng, (min, max): (Vec2, Vec2)) -> Vec2 {
    Vec2::new(sample(rng, (min.x, max.x)), sample(rng, (min.y, max.y)))
}

//=== Tests ===============================================================
