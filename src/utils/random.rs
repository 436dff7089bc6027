use std::sync::Arc;

use rand::Rng;

/// Source of randomness for quiz selection.
///
/// Injected through [`crate::state::AppState`] so tests can pin the draw
/// to a known index while production uses the thread-local RNG.
pub trait RandomSource: Send + Sync {
    /// Picks a uniform index in `0..len`. Callers guarantee `len > 0`.
    fn pick_index(&self, len: usize) -> usize;
}

/// Production source backed by `rand::thread_rng`.
#[derive(Debug, Default)]
pub struct ThreadRngSource;

impl RandomSource for ThreadRngSource {
    fn pick_index(&self, len: usize) -> usize {
        rand::thread_rng().gen_range(0..len)
    }
}

pub fn default_random_source() -> Arc<dyn RandomSource> {
    Arc::new(ThreadRngSource)
}
