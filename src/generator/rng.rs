//! Seeded sequence generator
//!
//! Every random choice the generator makes comes from one `SeededRng`, so the same
//! seed string always produces the same puzzle.

use chrono::NaiveDate;
use rand::RngCore;
use sha2::{Digest, Sha256};

const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
const INCREMENT: u64 = 1_442_695_040_888_963_407;

/// Deterministic random source derived from a seed string
///
/// The SHA-256 digest of the seed provides the starting state of a 64-bit linear
/// congruential generator. Outputs take the high 32 bits of each state, which are
/// the well-mixed ones.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator from an arbitrary seed string
    ///
    /// # Examples
    /// ```
    /// use daily_crossword::generator::SeededRng;
    ///
    /// let mut a = SeededRng::from_seed("2024-01-01|secret");
    /// let mut b = SeededRng::from_seed("2024-01-01|secret");
    /// assert_eq!(a.next_float(), b.next_float());
    /// ```
    #[must_use]
    pub fn from_seed(seed: &str) -> Self {
        let digest = Sha256::digest(seed.as_bytes());
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&digest[..8]);
        Self {
            state: u64::from_be_bytes(bytes),
        }
    }

    #[inline]
    fn step(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(MULTIPLIER)
            .wrapping_add(INCREMENT);
        (self.state >> 32) as u32
    }

    /// Uniform float in `[0, 1)` with 53 bits of precision
    pub fn next_float(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform index in `0..len`
    ///
    /// Returns 0 when `len` is 0.
    pub fn next_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.next_float() * len as f64) as usize).min(len - 1)
    }

    /// Fair coin flip
    pub fn next_bool(&mut self) -> bool {
        self.next_float() < 0.5
    }
}

impl RngCore for SeededRng {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.step());
        let low = u64::from(self.step());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        for chunk in dst.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }
}

/// Seed string for a date's puzzle: `"{date}|{secret}"`
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use daily_crossword::generator::daily_seed;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// assert_eq!(daily_seed(date, "secret"), "2024-01-01|secret");
/// ```
#[must_use]
pub fn daily_seed(date: NaiveDate, secret: &str) -> String {
    format!("{}|{secret}", date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::seq::SliceRandom;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = SeededRng::from_seed("2024-01-01|secret");
        let mut b = SeededRng::from_seed("2024-01-01|secret");
        let first: Vec<u64> = (0..32).map(|_| a.next_u64()).collect();
        let second: Vec<u64> = (0..32).map(|_| b.next_u64()).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SeededRng::from_seed("2024-01-01|secret");
        let mut b = SeededRng::from_seed("2024-01-02|secret");
        let first: Vec<u32> = (0..8).map(|_| a.next_u32()).collect();
        let second: Vec<u32> = (0..8).map(|_| b.next_u32()).collect();
        assert_ne!(first, second);
    }

    #[test]
    fn floats_stay_in_unit_interval() {
        let mut rng = SeededRng::from_seed("range");
        for _ in 0..10_000 {
            let x = rng.next_float();
            assert!((0.0..1.0).contains(&x), "{x} out of range");
        }
    }

    #[test]
    fn index_stays_in_bounds() {
        let mut rng = SeededRng::from_seed("index");
        for len in 1..50 {
            assert!(rng.next_index(len) < len);
        }
        assert_eq!(rng.next_index(0), 0);
    }

    #[test]
    fn fill_bytes_handles_partial_chunks() {
        let mut a = SeededRng::from_seed("bytes");
        let mut b = a.clone();
        let mut buf = [0u8; 7];
        a.fill_bytes(&mut buf);

        let first = b.next_u32().to_le_bytes();
        let second = b.next_u32().to_le_bytes();
        assert_eq!(&buf[..4], &first);
        assert_eq!(&buf[4..], &second[..3]);
    }

    #[test]
    fn shuffle_is_reproducible() {
        let mut items: Vec<u32> = (0..20).collect();
        let mut again = items.clone();
        items.shuffle(&mut SeededRng::from_seed("shuffle"));
        again.shuffle(&mut SeededRng::from_seed("shuffle"));
        assert_eq!(items, again);
        assert_ne!(items, (0..20).collect::<Vec<_>>());
    }
}
