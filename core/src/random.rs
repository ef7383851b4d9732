use alloc::vec::Vec;

const WIDTH: usize = 256;

/// Keystream bytes that form the first numerator of every sample.
const CHUNKS: usize = 6;

/// A sample needs at least this many significant bits.
const SIGNIFICANCE: u64 = 1 << 52;

/// Numerator bound before the last byte is added, keeps the sample below 1.
const OVERFLOW: u64 = SIGNIFICANCE << 1;

/// ARC4 based generator keyed by a string, the algorithm known as `seedrandom`.
///
/// The whole stream is a pure function of the seed and every sample is an exact binary fraction, so a board built
/// from a seed here matches one built by a JavaScript `seedrandom` in a browser. Do not swap this for a general purpose
/// PRNG: shared links depend on the exact sequence.
#[derive(Clone, Debug)]
pub struct SeedRandom {
    sbox: [u8; WIDTH],
    i: u8,
    j: u8,
}

impl SeedRandom {
    pub fn new(seed: &str) -> Self {
        let key = mix_key(seed);

        let mut sbox = [0u8; WIDTH];
        for (value, slot) in sbox.iter_mut().enumerate() {
            *slot = value as u8;
        }

        let mut j: u8 = 0;
        for i in 0..WIDTH {
            j = j.wrapping_add(sbox[i]).wrapping_add(key[i % key.len()]);
            sbox.swap(i, j.into());
        }

        let mut rng = Self { sbox, i: 0, j: 0 };
        // the first WIDTH bytes are discarded, RC4 is biased early on
        for _ in 0..WIDTH {
            rng.next_byte();
        }
        rng
    }

    fn next_byte(&mut self) -> u8 {
        self.i = self.i.wrapping_add(1);
        let t = self.sbox[usize::from(self.i)];
        self.j = self.j.wrapping_add(t);
        let u = self.sbox[usize::from(self.j)];
        self.sbox[usize::from(self.i)] = u;
        self.sbox[usize::from(self.j)] = t;
        self.sbox[usize::from(t.wrapping_add(u))]
    }

    /// Uniform sample in `[0, 1)` with randomness in every bit of the mantissa.
    pub fn next_f64(&mut self) -> f64 {
        let mut numerator: u64 = 0;
        for _ in 0..CHUNKS {
            numerator = (numerator << 8) | u64::from(self.next_byte());
        }
        let mut denominator_exp: u32 = 8 * CHUNKS as u32;
        let mut extra: u64 = 0;

        while numerator < SIGNIFICANCE {
            numerator = (numerator + extra) << 8;
            denominator_exp += 8;
            extra = self.next_byte().into();
        }
        while numerator >= OVERFLOW {
            numerator >>= 1;
            denominator_exp -= 1;
            extra >>= 1;
        }

        (numerator + extra) as f64 / pow2(denominator_exp)
    }

    /// Uniform integer in `[0, bound)`, `bound` must not be zero.
    pub fn below(&mut self, bound: usize) -> usize {
        debug_assert!(bound > 0, "empty range");
        // truncation is floor here, the product is never negative
        ((self.next_f64() * bound as f64) as usize).min(bound.saturating_sub(1))
    }
}

/// Folds the seed's UTF-16 code units into an RC4 key of at most `WIDTH` bytes.
fn mix_key(seed: &str) -> Vec<u8> {
    let mut key: Vec<u8> = Vec::new();
    let mut smear: u32 = 0;

    for (pos, unit) in seed.encode_utf16().enumerate() {
        let slot = pos % WIDTH;
        smear ^= u32::from(key.get(slot).copied().unwrap_or(0)) * 19;
        let mixed = (smear.wrapping_add(unit.into()) & 0xff) as u8;
        match key.get_mut(slot) {
            Some(byte) => *byte = mixed,
            None => key.push(mixed),
        }
    }

    if key.is_empty() {
        key.push(0);
    }
    key
}

/// Exact `2^exp` for the exponents a sample can reach.
fn pow2(exp: u32) -> f64 {
    f64::from_bits((1023 + u64::from(exp)) << 52)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_published_seedrandom_values() {
        let mut rng = SeedRandom::new("hello.");
        assert_eq!(rng.next_f64(), 0.9282578795792454);
        assert_eq!(rng.next_f64(), 0.3752569768646784);
    }

    #[test]
    fn numeric_seed_stream_is_pinned() {
        let mut rng = SeedRandom::new("12345678");
        assert_eq!(rng.next_f64(), 0.783177648369455);
        assert_eq!(rng.next_f64(), 0.6765514191906422);
        assert_eq!(rng.next_f64(), 0.7429756487747112);
    }

    #[test]
    fn same_seed_same_stream() {
        let mut a = SeedRandom::new("party");
        let mut b = SeedRandom::new("party");
        for _ in 0..64 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn samples_stay_in_unit_interval() {
        let mut rng = SeedRandom::new("bounds");
        for _ in 0..1000 {
            let sample = rng.next_f64();
            assert!((0.0..1.0).contains(&sample), "{sample}");
        }
    }

    #[test]
    fn below_stays_in_range() {
        let mut rng = SeedRandom::new("range");
        for bound in 1..50 {
            assert!(rng.below(bound) < bound);
        }
    }

    #[test]
    fn key_mixing_is_plain_for_short_ascii_seeds() {
        assert_eq!(mix_key("hello."), [104, 101, 108, 108, 111, 46]);
        assert_eq!(mix_key(""), [0]);
    }

    #[test]
    fn long_seeds_wrap_the_key() {
        let seed: alloc::string::String = core::iter::repeat_n('a', WIDTH + 3).collect();
        assert_eq!(mix_key(&seed).len(), WIDTH);
    }
}
