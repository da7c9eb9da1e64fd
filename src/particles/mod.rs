//=========================================================================
// Particle Effects
//=========================================================================
//
// Fixed-size particle emitters integrated once per frame.
//
// Flow:
//   ParticleSystem::new() → set_*() → emit() → [update(dt) → draw()]*
//                                                  ↓
//                                  should_destroy() → unload()
//
// Rendering is left to the caller through `ParticleRenderer`.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Module Declarations =================================================

mod color;
mod system;

//=== Public API ==========================================================

pub use color::Color;
pub use system::{Distribution, Particle, ParticleSystem};

//=== TextureHandle =======================================================

/// Opaque identifier of a texture owned by the caller's renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

//=== ParticleRenderer Trait ==============================================

/// Receives live particles from [`ParticleSystem::draw`].
pub trait ParticleRenderer {
    fn draw_particle(&mut self, texture: TextureHandle, position: Vec2, color: Color);
}
