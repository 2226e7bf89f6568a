//! Process-lifetime cache for the shared adaptive-mask scale.
//!
//! Every adaptive icon on a device shares one mask shape, so its scale
//! and bounds are the same for all of them and only worth computing
//! once per process. The cache is an explicit value the embedder owns
//! and shares (behind an `Arc`, in a factory struct, wherever), never a
//! hidden global.

use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::types::Insets;

/// Scale and bounds computed once for the device-wide adaptive mask.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveScale {
    /// The precomputed scale factor.
    pub scale: f32,
    /// Fractional insets of the mask silhouette's bounding box.
    pub bounds: Insets,
}

/// Write-once, read-many store for [`AdaptiveScale`].
///
/// The mask shape is immutable while the process runs, so the first
/// computed value is served to every later caller. Concurrent first
/// requests race on the same slot: exactly one compute closure runs,
/// and every waiter observes its fully-written result.
#[derive(Debug, Default)]
pub struct AdaptiveScaleCache {
    slot: OnceLock<AdaptiveScale>,
}

impl AdaptiveScaleCache {
    /// An empty cache; the first [`get_or_compute`](Self::get_or_compute)
    /// fills it.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached value, computing and storing it on first call.
    pub fn get_or_compute(&self, compute: impl FnOnce() -> AdaptiveScale) -> AdaptiveScale {
        *self.slot.get_or_init(compute)
    }

    /// The cached value, if one has been computed yet.
    #[must_use]
    pub fn get(&self) -> Option<AdaptiveScale> {
        self.slot.get().copied()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    const fn entry(scale: f32) -> AdaptiveScale {
        AdaptiveScale {
            scale,
            bounds: Insets::ZERO,
        }
    }

    #[test]
    fn empty_until_first_compute() {
        let cache = AdaptiveScaleCache::new();
        assert!(cache.get().is_none());
        cache.get_or_compute(|| entry(0.9));
        assert!(cache.get().is_some());
    }

    #[test]
    fn compute_runs_exactly_once() {
        let cache = AdaptiveScaleCache::new();
        let runs = AtomicUsize::new(0);
        for _ in 0..5 {
            let result = cache.get_or_compute(|| {
                runs.fetch_add(1, Ordering::SeqCst);
                entry(0.8)
            });
            assert!((result.scale - 0.8).abs() < f32::EPSILON);
        }
        assert_eq!(runs.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn later_computes_cannot_replace_the_value() {
        let cache = AdaptiveScaleCache::new();
        cache.get_or_compute(|| entry(0.8));
        let second = cache.get_or_compute(|| entry(0.5));
        assert!(
            (second.scale - 0.8).abs() < f32::EPSILON,
            "cache is write-once; got {}",
            second.scale
        );
    }

    #[test]
    fn concurrent_first_requests_observe_one_value() {
        let cache = AdaptiveScaleCache::new();
        let runs = AtomicUsize::new(0);
        std::thread::scope(|scope| {
            let mut handles = Vec::new();
            for i in 0..8 {
                let cache = &cache;
                let runs = &runs;
                handles.push(scope.spawn(move || {
                    cache
                        .get_or_compute(|| {
                            runs.fetch_add(1, Ordering::SeqCst);
                            #[allow(clippy::cast_precision_loss)]
                            let scale = 0.5 + i as f32 * 0.01;
                            entry(scale)
                        })
                        .scale
                }));
            }
            let scales: Vec<f32> = handles
                .into_iter()
                .filter_map(|handle| handle.join().ok())
                .collect();
            assert_eq!(scales.len(), 8);
            for s in &scales {
                assert!(
                    (s - scales[0]).abs() < f32::EPSILON,
                    "waiters saw different values: {scales:?}"
                );
            }
        });
        assert_eq!(runs.load(Ordering::SeqCst), 1, "exactly one closure runs");
    }
}
