//! Injected sources of uniform random draws.
//!
//! The move selector never reaches for an ambient RNG. Callers pass a
//! [`RandomDraw`], which is either a real [`rand::Rng`] or a
//! [`ScriptedDraws`] sequence that reproduces a game exactly.

use rand::Rng;
use tracing::trace;

/// A source of uniform values in `[0, 1)`.
pub trait RandomDraw {
    /// Returns the next draw.
    fn draw(&mut self) -> f64;
}

impl<R: Rng + ?Sized> RandomDraw for R {
    fn draw(&mut self) -> f64 {
        self.r#gen::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
///
/// An empty script always yields `0.0`. Values are clamped into `[0, 1)`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ScriptedDraws {
    values: Vec<f64>,
    next: usize,
}

impl ScriptedDraws {
    /// Creates a script from the given draws.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// A script that always yields `value`.
    pub fn constant(value: f64) -> Self {
        Self::new(vec![value])
    }

    /// Number of draws consumed so far.
    pub fn consumed(&self) -> usize {
        self.next
    }
}

impl RandomDraw for ScriptedDraws {
    fn draw(&mut self) -> f64 {
        if self.values.is_empty() {
            return 0.0;
        }
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value.clamp(0.0, 1.0 - f64::EPSILON)
    }
}

/// Picks one element uniformly from `pool` using a single draw.
///
/// Index is `floor(u * len)`, clamped to the last element. Returns `None`
/// for an empty pool without consuming a draw.
pub fn pick<T: Copy + std::fmt::Debug, R: RandomDraw + ?Sized>(pool: &[T], rng: &mut R) -> Option<T> {
    if pool.is_empty() {
        return None;
    }
    let u = rng.draw();
    let idx = ((u * pool.len() as f64) as usize).min(pool.len() - 1);
    trace!(u, idx, len = pool.len(), "Picked from pool");
    pool.get(idx).copied()
}
