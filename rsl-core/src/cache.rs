//! Fixed-capacity LRU cache for per-ticker indicator lookups.
//!
//! Keys are `(symbol, period)` pairs compared exactly. Recency is bumped on
//! every hit and every insert; inserting past capacity evicts the least
//! recently used entry. There is no expiry: entries live until evicted or
//! until [`LruCache::clear`].
//!
//! All state sits behind one `Mutex`. Callers must not hold a lookup open
//! across slow work: `get` and `insert` are separate critical sections.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::domain::IndicatorResult;
use crate::indicators::round2;

/// Default number of memoized lookups.
pub const DEFAULT_CAPACITY: usize = 100;

/// Exact-match cache key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub symbol: String,
    pub period: String,
}

impl CacheKey {
    pub fn new(symbol: impl Into<String>, period: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            period: period.into(),
        }
    }
}

/// Snapshot of cache counters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub capacity: usize,
    pub current_size: usize,
    /// Percentage of lookups served from the cache, 2 decimals.
    pub hit_rate: f64,
}

#[derive(Debug)]
struct Slot<V> {
    value: V,
    last_used: u64,
}

#[derive(Debug)]
struct LruState<V> {
    entries: HashMap<CacheKey, Slot<V>>,
    /// Recency index: tick of last use → key. Smallest tick is evicted first.
    order: BTreeMap<u64, CacheKey>,
    tick: u64,
    hits: u64,
    misses: u64,
}

impl<V> LruState<V> {
    fn next_tick(&mut self) -> u64 {
        self.tick += 1;
        self.tick
    }
}

/// Thread-safe LRU map with hit/miss accounting.
#[derive(Debug)]
pub struct LruCache<V> {
    capacity: usize,
    state: Mutex<LruState<V>>,
}

/// Memoized indicator lookups. `None` values are negative entries.
pub type IndicatorCache = LruCache<Option<IndicatorResult>>;

impl<V: Clone> LruCache<V> {
    /// A capacity of zero stores nothing; every lookup is a miss.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            state: Mutex::new(LruState {
                entries: HashMap::new(),
                order: BTreeMap::new(),
                tick: 0,
                hits: 0,
                misses: 0,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, LruState<V>> {
        // Every mutation leaves the maps consistent, so a poisoned lock is usable
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Look up `key`, counting a hit or a miss. A hit becomes most recent.
    pub fn get(&self, key: &CacheKey) -> Option<V> {
        let mut guard = self.lock();
        let state = &mut *guard;
        let tick = state.next_tick();

        match state.entries.get_mut(key) {
            Some(slot) => {
                let previous = std::mem::replace(&mut slot.last_used, tick);
                state.order.remove(&previous);
                state.order.insert(tick, key.clone());
                state.hits += 1;
                Some(slot.value.clone())
            }
            None => {
                state.misses += 1;
                None
            }
        }
    }

    /// Store `value` under `key` as the most recent entry, evicting the
    /// least recently used entry if the cache is full.
    pub fn insert(&self, key: CacheKey, value: V) {
        if self.capacity == 0 {
            return;
        }

        let mut state = self.lock();
        let tick = state.next_tick();

        if let Some(old) = state.entries.insert(
            key.clone(),
            Slot {
                value,
                last_used: tick,
            },
        ) {
            state.order.remove(&old.last_used);
        }
        state.order.insert(tick, key);

        while state.entries.len() > self.capacity {
            let Some((_, evicted)) = state.order.pop_first() else {
                break;
            };
            state.entries.remove(&evicted);
            tracing::debug!(symbol = %evicted.symbol, period = %evicted.period, "evicted LRU entry");
        }
    }

    /// Whether `key` is cached. Does not touch counters or recency.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.lock().entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.lock().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop every entry and reset the hit/miss counters.
    pub fn clear(&self) {
        let mut state = self.lock();
        state.entries.clear();
        state.order.clear();
        state.hits = 0;
        state.misses = 0;
    }

    pub fn stats(&self) -> CacheStats {
        let state = self.lock();
        let lookups = state.hits + state.misses;
        let hit_rate = if lookups > 0 {
            round2(state.hits as f64 / lookups as f64 * 100.0)
        } else {
            0.0
        };
        CacheStats {
            hits: state.hits,
            misses: state.misses,
            capacity: self.capacity,
            current_size: state.entries.len(),
            hit_rate,
        }
    }
}

impl<V: Clone> Default for LruCache<V> {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
