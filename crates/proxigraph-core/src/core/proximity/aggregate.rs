use std::cell::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CacheState {
    #[default]
    Fresh,
    Stale,
}

/// A cached scalar that is recomputed on read after being invalidated.
///
/// Reads take `&self` so that aggregate queries can be served from a shared graph reference;
/// the cache therefore uses interior mutability and is `Send` but not `Sync`.
#[derive(Debug, Clone, Default)]
pub struct CachedAggregate {
    value: Cell<f64>,
    state: Cell<CacheState>,
    recomputations: Cell<u64>,
}

impl CachedAggregate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> CacheState {
        self.state.get()
    }

    pub fn is_stale(&self) -> bool {
        self.state.get() == CacheState::Stale
    }

    pub fn invalidate(&mut self) {
        self.state.set(CacheState::Stale);
    }

    /// Returns the cached value, first refreshing it with `recompute` if the cache is stale.
    #[inline]
    pub fn get_or_recompute<F>(&self, recompute: F) -> f64
    where
        F: FnOnce() -> f64,
    {
        if self.is_stale() {
            self.value.set(recompute());
            self.state.set(CacheState::Fresh);
            self.recomputations.set(self.recomputations.get() + 1);
        }
        self.value.get()
    }

    /// The last computed value, regardless of staleness.
    pub fn peek(&self) -> f64 {
        self.value.get()
    }

    /// How many times the value has been recomputed.
    pub fn recomputations(&self) -> u64 {
        self.recomputations.get()
    }
}
