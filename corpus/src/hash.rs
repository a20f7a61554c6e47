//! Deterministic 32-bit term embeddings.
//!
//! A term's embedding is xxHash64 (seed 0) of its UTF-8 bytes, pushed through a
//! SplitMix64 finalizer and truncated to the low 32 bits. Nothing here depends on
//! process state, so values are stable across runs and machines.

use std::hash::Hasher;
use twox_hash::XxHash64;

const GOLDEN_GAMMA: u64 = 0x9E37_79B9_7F4A_7C15;
const MIX_1: u64 = 0xBF58_476D_1CE4_E5B9;
const MIX_2: u64 = 0x94D0_49BB_1331_11EB;

/// 64-bit hash of the raw term bytes.
pub fn hash64(term: &str) -> u64 {
    // write() rather than Hash::hash: str's Hash impl appends a 0xff terminator.
    let mut hasher = XxHash64::with_seed(0);
    hasher.write(term.as_bytes());
    hasher.finish()
}

/// SplitMix64 finalizer, truncated to 32 bits.
#[inline]
pub fn splitmix32(mut x: u64) -> u32 {
    x = x.wrapping_add(GOLDEN_GAMMA);
    x = (x ^ (x >> 30)).wrapping_mul(MIX_1);
    x = (x ^ (x >> 27)).wrapping_mul(MIX_2);
    (x ^ (x >> 31)) as u32
}

/// Deterministic embedding for a term. Collisions are possible and not resolved.
#[inline]
pub fn hash32(term: &str) -> u32 {
    splitmix32(hash64(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_terms(n: usize) -> Vec<String> {
        // Alphabetic terms only, to look like tokenizer output.
        (0..n)
            .map(|mut i| {
                let mut s = String::new();
                loop {
                    s.push((b'a' + (i % 26) as u8) as char);
                    i /= 26;
                    if i == 0 {
                        break;
                    }
                }
                s
            })
            .collect()
    }

    #[test]
    fn splitmix_matches_reference_outputs() {
        // First two SplitMix64 outputs for seeds 0 and 1, low 32 bits.
        assert_eq!(splitmix32(0), 0x7B1D_CDAF);
        assert_eq!(splitmix32(1), 0x8902_5CC1);
    }

    #[test]
    fn hash32_is_deterministic() {
        for term in ["cat", "dog", "", "zebra"] {
            assert_eq!(hash32(term), hash32(term));
        }
        assert_eq!(hash32("cat"), splitmix32(hash64("cat")));
        assert_ne!(hash32("cat"), hash32("dog"));
    }

    #[test]
    fn buckets_are_roughly_uniform() {
        const BUCKETS: usize = 64;
        let terms = sample_terms(64_000);
        let expected = terms.len() as f64 / BUCKETS as f64;

        for shift in [0u32, 26] {
            let mut counts = [0usize; BUCKETS];
            for t in &terms {
                counts[((hash32(t) >> shift) as usize) % BUCKETS] += 1;
            }
            let chi2: f64 = counts
                .iter()
                .map(|&c| {
                    let d = c as f64 - expected;
                    d * d / expected
                })
                .sum();
            // 63 degrees of freedom; 150 is far past any plausible p-value.
            assert!(chi2 < 150.0, "chi2={chi2} at shift {shift}");
        }
    }

    #[test]
    fn single_character_change_flips_about_half_the_bits() {
        let terms = sample_terms(2_000);
        let mut flipped = 0u32;
        for t in &terms {
            let mut other = t.clone();
            other.push('a');
            flipped += (hash32(t) ^ hash32(&other)).count_ones();
        }
        let mean = flipped as f64 / terms.len() as f64;
        assert!((15.0..17.0).contains(&mean), "mean flipped bits {mean}");
    }
}
