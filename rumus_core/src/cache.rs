//! # Calculation Cache
//!
//! Optional memoization of formula evaluations, keyed by formula and exact
//! argument values. The cache is injected into a
//! [`Calculator`](crate::calculator::Calculator) by the caller; there is no
//! ambient global cache.
//!
//! Entries are idempotent (the same key always maps to the same result), so
//! a racing double computation is harmless. Insertions still go through a
//! write lock so no update is lost.
//!
//! [`MemoCache`] grows without bound unless given `max_entries`. That is fine
//! for interactive single-user call volumes and nothing more.

use std::collections::HashMap;

use parking_lot::RwLock;

use crate::errors::CalcResult;
use crate::formulas::registry::Formula;

/// Cache key: formula identity plus argument bit patterns.
///
/// Floats are keyed by `to_bits`, so `0.0` and `-0.0` are distinct keys and
/// every NaN payload is its own key. Both are harmless for memoization.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub formula: Formula,
    args: Vec<u64>,
}

impl CacheKey {
    pub fn new(formula: Formula, args: &[f64]) -> Self {
        Self {
            formula,
            args: args.iter().map(|a| a.to_bits()).collect(),
        }
    }

    /// The argument values this key was built from
    pub fn args(&self) -> Vec<f64> {
        self.args.iter().map(|bits| f64::from_bits(*bits)).collect()
    }
}

/// Get-or-compute contract for memoizing formula results.
pub trait CalculationCache: Send + Sync {
    /// Return the cached result for `key`, or run `compute` and remember it.
    fn get_or_compute(
        &self,
        key: CacheKey,
        compute: &mut dyn FnMut() -> CalcResult<f64>,
    ) -> CalcResult<f64>;

    /// Number of cached entries
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry
    fn clear(&self);
}

/// Concurrent in-memory cache backed by a `RwLock<HashMap>`.
#[derive(Debug, Default)]
pub struct MemoCache {
    entries: RwLock<HashMap<CacheKey, CalcResult<f64>>>,
    max_entries: Option<usize>,
}

impl MemoCache {
    /// Unbounded cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Cache that stops inserting once it holds `max_entries` results.
    ///
    /// Lookups past the bound still compute correctly; they just are not stored.
    pub fn with_max_entries(max_entries: usize) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            max_entries: Some(max_entries),
        }
    }

    pub fn max_entries(&self) -> Option<usize> {
        self.max_entries
    }
}

impl CalculationCache for MemoCache {
    fn get_or_compute(
        &self,
        key: CacheKey,
        compute: &mut dyn FnMut() -> CalcResult<f64>,
    ) -> CalcResult<f64> {
        if let Some(hit) = self.entries.read().get(&key) {
            tracing::debug!(formula = %key.formula, "Cache hit");
            return hit.clone();
        }

        tracing::debug!(formula = %key.formula, "Cache miss");
        let result = compute();

        let mut entries = self.entries.write();
        let full = self.max_entries.is_some_and(|max| entries.len() >= max);
        if !full {
            entries.entry(key).or_insert_with(|| result.clone());
        }
        result
    }

    fn len(&self) -> usize {
        self.entries.read().len()
    }

    fn clear(&self) {
        self.entries.write().clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::CalcError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_get_or_compute_memoizes() {
        let cache = MemoCache::new();
        let mut calls = 0;

        let first = cache.get_or_compute(CacheKey::new(Formula::Force, &[5.0, 3.0]), &mut || {
            calls += 1;
            Ok(15.0)
        });
        let second = cache.get_or_compute(CacheKey::new(Formula::Force, &[5.0, 3.0]), &mut || {
            calls += 1;
            Ok(-1.0)
        });

        assert_eq!(first, Ok(15.0));
        assert_eq!(second, Ok(15.0));
        assert_eq!(calls, 1);
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_keys_distinguish_formula_and_args() {
        let cache = MemoCache::new();
        cache.get_or_compute(CacheKey::new(Formula::Force, &[5.0, 3.0]), &mut || Ok(15.0)).unwrap();
        cache
            .get_or_compute(CacheKey::new(Formula::Momentum, &[5.0, 3.0]), &mut || Ok(15.0))
            .unwrap();
        cache.get_or_compute(CacheKey::new(Formula::Force, &[3.0, 5.0]), &mut || Ok(15.0)).unwrap();
        assert_eq!(cache.len(), 3);
    }

    #[test]
    fn test_errors_are_cached() {
        let cache = MemoCache::new();
        let key = CacheKey::new(Formula::Pressure, &[500.0, 0.0]);
        let err =
            cache.get_or_compute(key.clone(), &mut || Err(CalcError::division_by_zero("area")));
        assert_eq!(err, Err(CalcError::division_by_zero("area")));

        let again = cache.get_or_compute(key, &mut || Ok(0.0));
        assert_eq!(again, Err(CalcError::division_by_zero("area")));
    }

    #[test]
    fn test_bounded_cache_stops_inserting() {
        let cache = MemoCache::with_max_entries(2);
        for i in 0..5 {
            let v = i as f64;
            let key = CacheKey::new(Formula::Force, &[v, 2.0]);
            let r = cache.get_or_compute(key, &mut || Ok(v * 2.0));
            assert_eq!(r, Ok(v * 2.0));
        }
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_clear() {
        let cache = MemoCache::new();
        cache.get_or_compute(CacheKey::new(Formula::Force, &[1.0, 1.0]), &mut || Ok(1.0)).unwrap();
        assert!(!cache.is_empty());
        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_key_args_roundtrip() {
        let key = CacheKey::new(Formula::Work, &[20.0, 5.0, -0.0]);
        let args = key.args();
        assert_eq!(args[..2], [20.0, 5.0]);
        assert!(args[2].is_sign_negative());
    }

    #[test]
    fn test_concurrent_inserts() {
        let cache = Arc::new(MemoCache::new());
        let calls = Arc::new(AtomicUsize::new(0));

        let handles: Vec<_> = (0..8)
            .map(|t| {
                let cache = Arc::clone(&cache);
                let calls = Arc::clone(&calls);
                std::thread::spawn(move || {
                    for i in 0..50 {
                        let m = (i % 10) as f64;
                        let key = CacheKey::new(Formula::Force, &[m, t as f64 % 2.0]);
                        let r = cache.get_or_compute(key, &mut || {
                            calls.fetch_add(1, Ordering::Relaxed);
                            Ok(m * (t as f64 % 2.0))
                        });
                        assert_eq!(r, Ok(m * (t as f64 % 2.0)));
                    }
                })
            })
            .collect();

        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(cache.len(), 20);
        assert!(calls.load(Ordering::Relaxed) >= 20);
    }
}
