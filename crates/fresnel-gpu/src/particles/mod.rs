//! Particle simulation contract.
//!
//! The simulation itself runs in a compute kernel; this module owns the
//! record layout the kernel reads, the per-frame uniform block, dispatch
//! sizing against the fixed pool capacity, and a CPU reference of the
//! integration step that fixes its order as a contract. The kernel must
//! match [`step`] exactly or determinism tests against captured frames
//! diverge.

use anyhow::{Result, ensure};
use bytemuck::{Pod, Zeroable};
use fresnel_contract::{MAX_PARTICLES, THREADGROUP_SIZE, limits};

/// One particle record.
///
/// Layout (size 48): 0: position, 8: velocity, 16: color, 32: life,
/// 36: size, 40: pad.
///
/// `life` counts down in seconds; a particle with `life == 0` is dead and
/// skipped by the kernel. Slots are recycled by respawning dead records in
/// place, so the buffer never needs compaction.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct Particle {
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    pub color: [f32; 4],
    /// Remaining lifetime in seconds, >= 0.
    pub life: f32,
    /// Point size in pixels, >= 0.
    pub size: f32,
    pub _pad: [f32; 2],
}

impl Particle {
    pub fn new(position: [f32; 2], velocity: [f32; 2], color: [f32; 4], life: f32, size: f32) -> Self {
        Self {
            position,
            velocity,
            color,
            life: life.max(0.0),
            size: size.max(0.0),
            _pad: [0.0; 2],
        }
    }

    #[inline]
    pub fn is_alive(self) -> bool {
        self.life > 0.0
    }
}

/// Per-frame simulation uniform block.
///
/// Layout (size 48): 0: delta_time, 4: pad, 8: gravity, 16: damping,
/// 20: pad, 32: bounds. The pads mirror the alignment holes the kernel
/// sees under 16-byte-vector rules.
#[repr(C)]
#[derive(Debug, Copy, Clone, Default, PartialEq, Pod, Zeroable)]
pub struct ParticleUniforms {
    /// Frame delta in seconds, >= 0.
    pub delta_time: f32,
    pub _pad0: f32,
    /// Acceleration applied each frame.
    pub gravity: [f32; 2],
    /// Per-frame velocity retention, typically in [0, 1].
    pub damping: f32,
    pub _pad1: [f32; 3],
    /// Simulation rectangle as (min_x, min_y, max_x, max_y).
    pub bounds: [f32; 4],
}

impl ParticleUniforms {
    /// Builds the uniform block, clamping `delta_time` to non-negative and
    /// normalizing `bounds` so min <= max componentwise.
    pub fn new(delta_time: f32, gravity: [f32; 2], damping: f32, bounds: [f32; 4]) -> Self {
        if delta_time < 0.0 {
            log::debug!("negative particle delta_time {delta_time}; clamping to 0");
        }

        let [x0, y0, x1, y1] = bounds;
        Self {
            delta_time: delta_time.max(0.0),
            _pad0: 0.0,
            gravity,
            damping,
            _pad1: [0.0; 3],
            bounds: [x0.min(x1), y0.min(y1), x0.max(x1), y0.max(y1)],
        }
    }
}

/// Number of threadgroups to dispatch for `count` particles.
///
/// Rejects counts beyond the pool capacity: the kernel indexes the
/// particle buffer by global thread id, so an oversized dispatch reads
/// past the allocation.
pub fn dispatch_groups(count: usize) -> Result<u32> {
    ensure!(
        count <= MAX_PARTICLES,
        "particle count {count} exceeds pool capacity {MAX_PARTICLES}"
    );
    Ok(limits::dispatch_groups(count as u32, THREADGROUP_SIZE))
}

/// CPU reference for one simulation step of one particle.
///
/// This fixes the integration order the kernel must reproduce:
/// 1. `position += velocity * dt` (pre-update velocity)
/// 2. `velocity = velocity * damping + gravity * dt`
/// 3. reflect at `bounds`: position clamped to the rectangle, the
///    offending velocity component sign-flipped
/// 4. `life = max(life - dt, 0)`
///
/// Dead particles (`life <= 0`) are left untouched.
pub fn step(p: &mut Particle, u: &ParticleUniforms) {
    if !p.is_alive() {
        return;
    }

    let dt = u.delta_time;

    p.position[0] += p.velocity[0] * dt;
    p.position[1] += p.velocity[1] * dt;

    p.velocity[0] = p.velocity[0] * u.damping + u.gravity[0] * dt;
    p.velocity[1] = p.velocity[1] * u.damping + u.gravity[1] * dt;

    let [min_x, min_y, max_x, max_y] = u.bounds;
    reflect(&mut p.position[0], &mut p.velocity[0], min_x, max_x);
    reflect(&mut p.position[1], &mut p.velocity[1], min_y, max_y);

    p.life = (p.life - dt).max(0.0);
}

fn reflect(pos: &mut f32, vel: &mut f32, lo: f32, hi: f32) {
    if *pos < lo {
        *pos = lo;
        *vel = -*vel;
    } else if *pos > hi {
        *pos = hi;
        *vel = -*vel;
    }
}
