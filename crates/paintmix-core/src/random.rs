//! Injectable randomness for order generation.

/// A source of uniformly distributed random numbers.
///
/// Order generation takes one of these explicitly so tests can script the
/// draws. Implementors only provide [`RandomSource::next_u64`].
pub trait RandomSource {
    fn next_u64(&mut self) -> u64;

    /// Uniform integer in `low..=high`. Returns `low` if the range is empty.
    fn gen_range(&mut self, low: u32, high: u32) -> u32 {
        if high <= low {
            return low;
        }
        let span = u64::from(high - low) + 1;
        // rejection sampling to avoid modulo bias
        let zone = u64::MAX - (u64::MAX % span);
        loop {
            let value = self.next_u64();
            if value < zone {
                return low + (value % span) as u32;
            }
        }
    }

    /// Uniform index in `0..len`. `len` must be non-zero.
    ///
    /// Draws are 32-bit: for sequences longer than `u32::MAX + 1` only the
    /// first `u32::MAX + 1` indices can be chosen.
    fn choose_index(&mut self, len: usize) -> usize {
        debug_assert!(len > 0, "cannot choose from an empty sequence");
        let high = u32::try_from(len.saturating_sub(1)).unwrap_or(u32::MAX);
        self.gen_range(0, high) as usize
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u64(&mut self) -> u64 {
        (**self).next_u64()
    }

    fn gen_range(&mut self, low: u32, high: u32) -> u32 {
        (**self).gen_range(low, high)
    }

    fn choose_index(&mut self, len: usize) -> usize {
        (**self).choose_index(len)
    }
}

/// SplitMix64 generator: small, fast and reproducible from a seed.
#[derive(Debug, Clone)]
pub struct SplitMix64 {
    state: u64,
}

impl SplitMix64 {
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed from a random v4 UUID.
    pub fn from_entropy() -> Self {
        let bits = uuid::Uuid::new_v4().as_u128();
        Self::new((bits >> 64) as u64 ^ bits as u64)
    }
}

impl RandomSource for SplitMix64 {
    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SplitMix64::new(42);
        let mut b = SplitMix64::new(42);
        for _ in 0..16 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }

    #[test]
    fn test_known_first_output() {
        // reference value for seed 0
        let mut rng = SplitMix64::new(0);
        assert_eq!(rng.next_u64(), 0xE220_A839_7B1D_CDAF);
    }

    #[test]
    fn test_gen_range_bounds() {
        let mut rng = SplitMix64::new(7);
        let mut seen = [false; 5];
        for _ in 0..500 {
            let value = rng.gen_range(4, 8);
            assert!((4..=8).contains(&value));
            seen[(value - 4) as usize] = true;
        }
        assert!(seen.iter().all(|&s| s), "every value in range should appear");
    }

    #[test]
    fn test_gen_range_single_value() {
        let mut rng = SplitMix64::new(1);
        assert_eq!(rng.gen_range(3, 3), 3);
        assert_eq!(rng.choose_index(1), 0);
    }

    #[test]
    fn test_choose_index_bounds() {
        let mut rng = SplitMix64::from_entropy();
        for _ in 0..200 {
            assert!(rng.choose_index(7) < 7);
        }
    }

    #[cfg(target_pointer_width = "64")]
    #[test]
    fn test_choose_index_saturates_long_sequences() {
        let len = u32::MAX as usize + 2;
        let mut rng = SplitMix64::new(31);
        let picks: Vec<usize> = (0..8).map(|_| rng.choose_index(len)).collect();
        assert!(picks.iter().all(|&i| i <= u32::MAX as usize));
        assert!(picks.iter().any(|&i| i > 0), "draws collapsed to index 0: {picks:?}");
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn draw<R: RandomSource>(mut rng: R) -> u32 {
            rng.gen_range(0, 100)
        }

        let mut rng = SplitMix64::new(9);
        let mut copy = rng.clone();
        assert_eq!(draw(&mut rng), copy.gen_range(0, 100));
        assert_eq!(rng.next_u64(), copy.next_u64());
    }
}
