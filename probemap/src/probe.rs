use std::collections::hash_map::RandomState;
use std::hash::{BuildHasher, Hash};

const DEFAULT_C1: u64 = 1;
const DEFAULT_C2: u64 = 3;
const DEFAULT_SECONDARY_PRIME: u64 = 97;

/// A probe sequence maps `(key, hash, attempt, capacity)` to the next
/// candidate slot index.
///
/// Implementations must be pure and return an index in `[0, capacity)`;
/// the table indexes the slot array with the result directly. Lookup and
/// insertion run attempts `0..capacity` in order, so a family that visits
/// `capacity` distinct indices over that range (a full permutation) can
/// always reach a free slot in a non-full table. Linear probing guarantees
/// this for every capacity; quadratic and double hashing only for suitable
/// capacity/constant combinations, which is why insertion treats an
/// unproductive full cycle as an error instead of looping.
pub trait ProbeSequence {
    fn probe<Q: Hash + ?Sized>(
        &self,
        key: &Q,
        hash: u64,
        attempt: usize,
        capacity: usize,
    ) -> usize;
}

/// `(hash + attempt) mod capacity`. Visits every slot at any capacity, at
/// the price of primary clustering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LinearProbing;

impl ProbeSequence for LinearProbing {
    fn probe<Q: Hash + ?Sized>(
        &self,
        _key: &Q,
        hash: u64,
        attempt: usize,
        capacity: usize,
    ) -> usize {
        (hash.wrapping_add(attempt as u64) % capacity as u64) as usize
    }
}

/// `(hash + c1*attempt + c2*attempt²) mod capacity`.
///
/// Spreads collision chains better than linear probing, but coverage
/// depends on the constants: on the power-of-two capacities produced by
/// doubling growth, an odd `c1` with an even `c2` visits every slot,
/// while the defaults `c1 = 1, c2 = 3` reach only half of them. With
/// partial coverage, inserting into a crowded table can fail with a
/// capacity-exhausted error before the table is truly full.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuadraticProbing {
    c1: u64,
    c2: u64,
}

impl QuadraticProbing {
    pub fn new(c1: u64, c2: u64) -> Self {
        Self { c1, c2 }
    }
}

impl Default for QuadraticProbing {
    fn default() -> Self {
        Self::new(DEFAULT_C1, DEFAULT_C2)
    }
}

impl ProbeSequence for QuadraticProbing {
    fn probe<Q: Hash + ?Sized>(
        &self,
        _key: &Q,
        hash: u64,
        attempt: usize,
        capacity: usize,
    ) -> usize {
        let attempt = attempt as u64;
        let offset = self
            .c1
            .wrapping_mul(attempt)
            .wrapping_add(self.c2.wrapping_mul(attempt).wrapping_mul(attempt));
        (hash.wrapping_add(offset) % capacity as u64) as usize
    }
}

/// `(hash + attempt * step) mod capacity` with
/// `step = secondary_prime - (hash2 mod secondary_prime)`.
///
/// `hash2` comes from the strategy's own hasher, so the step is
/// independent of the table's primary hash, and the subtraction keeps it
/// non-zero. Full coverage needs the step and the capacity to be coprime;
/// a prime capacity above `secondary_prime` guarantees that, while
/// composite capacities can degrade to a subset of slots (bounded probing
/// turns that into a capacity-exhausted error rather than a hang).
#[derive(Clone, Debug)]
pub struct DoubleHashing<S = RandomState> {
    secondary_prime: u64,
    hash_builder: S,
}

impl DoubleHashing<RandomState> {
    /// # Panics
    /// Panics if `secondary_prime` is zero.
    pub fn new(secondary_prime: u64) -> Self {
        Self::with_hasher(secondary_prime, RandomState::new())
    }
}

impl<S> DoubleHashing<S> {
    /// Builds the strategy around an explicit secondary hasher.
    ///
    /// # Panics
    /// Panics if `secondary_prime` is zero.
    pub fn with_hasher(secondary_prime: u64, hash_builder: S) -> Self {
        assert!(secondary_prime > 0, "secondary prime must be non-zero");
        Self {
            secondary_prime,
            hash_builder,
        }
    }

    pub fn secondary_prime(&self) -> u64 {
        self.secondary_prime
    }
}

impl<S: Default> Default for DoubleHashing<S> {
    fn default() -> Self {
        Self {
            secondary_prime: DEFAULT_SECONDARY_PRIME,
            hash_builder: S::default(),
        }
    }
}

impl<S: BuildHasher> ProbeSequence for DoubleHashing<S> {
    fn probe<Q: Hash + ?Sized>(
        &self,
        key: &Q,
        hash: u64,
        attempt: usize,
        capacity: usize,
    ) -> usize {
        let hash2 = self.hash_builder.hash_one(key);
        let step = self.secondary_prime - (hash2 % self.secondary_prime);
        (hash.wrapping_add((attempt as u64).wrapping_mul(step)) % capacity as u64) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn linear_probing_is_a_full_permutation() {
        for capacity in [1usize, 2, 7, 16, 33] {
            let seen: HashSet<usize> = (0..capacity)
                .map(|attempt| LinearProbing.probe("key", 0xDEAD_BEEF, attempt, capacity))
                .collect();
            assert_eq!(seen.len(), capacity);
        }
    }

    #[test]
    fn quadratic_defaults_match_the_formula() {
        // hash + attempt + 3 * attempt^2, all mod capacity
        let probing = QuadraticProbing::default();

        assert_eq!(probing.probe("key", 5, 0, 64), 5);
        assert_eq!(probing.probe("key", 5, 1, 64), 9);
        assert_eq!(probing.probe("key", 5, 2, 64), 19);
        assert_eq!(probing.probe("key", 5, 3, 64), 35);
    }

    #[test]
    fn quadratic_odd_even_constants_cover_powers_of_two() {
        // offsets differ by (i - j) * (c1 + c2 * (i + j)), and with an odd
        // c1 and even c2 the second factor is odd, so no two attempts
        // collide modulo a power of two
        let probing = QuadraticProbing::new(1, 2);

        for capacity in [8usize, 16, 64, 256] {
            let seen: HashSet<usize> = (0..capacity)
                .map(|attempt| probing.probe("key", 3, attempt, capacity))
                .collect();
            assert_eq!(seen.len(), capacity);
        }
    }

    #[test]
    fn double_hashing_stays_in_range_and_is_deterministic() {
        let probing = DoubleHashing::new(97);

        for attempt in 0..512 {
            let first = probing.probe(&42u64, 1234, attempt, 101);
            let again = probing.probe(&42u64, 1234, attempt, 101);
            assert!(first < 101);
            assert_eq!(first, again);
        }
    }

    #[test]
    fn double_hashing_covers_a_prime_capacity() {
        // every step is at most 97, so with a larger prime capacity the
        // step and the capacity are always coprime
        let probing = DoubleHashing::new(97);

        for key in 0u64..32 {
            let seen: HashSet<usize> = (0..103)
                .map(|attempt| probing.probe(&key, key.wrapping_mul(0x9E37_79B9), attempt, 103))
                .collect();
            assert_eq!(seen.len(), 103);
        }
    }

    #[test]
    fn cloned_strategies_probe_identically() {
        let probing = DoubleHashing::new(31);
        let copy = probing.clone();

        for attempt in 0..64 {
            assert_eq!(
                probing.probe("key", 999, attempt, 64),
                copy.probe("key", 999, attempt, 64)
            );
        }
    }

    #[test]
    #[should_panic(expected = "secondary prime")]
    fn zero_secondary_prime_is_rejected() {
        DoubleHashing::new(0);
    }
}
