//! Deterministic startup name synthesis from curated token lists.
//!
//! Names are two tokens glued together without a separator:
//! prefix+suffix (40%), prefix+middle (30%) or middle+suffix (30%).
//! All generation is deterministic (same RNG seed = same names).

use crate::{
    error::{FundingError, FundingResult},
    rng::SamplerRng,
};
use std::collections::HashSet;

/// Deterministic name generator using curated token lists
pub struct StartupNameGenerator;

impl StartupNameGenerator {
    /// Synthesize one candidate name. May repeat earlier draws.
    pub fn generate(rng: &mut SamplerRng) -> String {
        let style = rng.next_f64();
        let (first, second) = if style < 0.4 {
            (Self::prefixes(), Self::suffixes())
        } else if style < 0.7 {
            (Self::prefixes(), Self::middles())
        } else {
            (Self::middles(), Self::suffixes())
        };
        let a = first[rng.next_u64_below(first.len() as u64) as usize];
        let b = second[rng.next_u64_below(second.len() as u64) as usize];
        format!("{a}{b}")
    }

    /// Draw until a name not in `used` comes up, then record it.
    /// Gives up after `max_attempts` draws.
    pub fn generate_unique(
        rng: &mut SamplerRng,
        used: &mut HashSet<String>,
        max_attempts: usize,
    ) -> FundingResult<String> {
        for _ in 0..max_attempts {
            let name = Self::generate(rng);
            if used.insert(name.clone()) {
                return Ok(name);
            }
        }
        Err(FundingError::NameSpaceExhausted { attempts: max_attempts })
    }

    fn prefixes() -> &'static [&'static str] {
        &[
            "Neo", "Meta", "Hyper", "Super", "Ultra", "Omni", "Quantum", "Nova", "Apex", "Prime",
            "Core", "Next", "Smart", "Deep", "Fast", "Clear", "Open", "True", "Pure", "Real",
        ]
    }

    fn suffixes() -> &'static [&'static str] {
        &[
            "AI", "Labs", "Tech", "Systems", "Cloud", "Data", "Flow", "Hub", "Base", "Stack",
            "Wave", "Shift", "Scale", "Mind", "Logic", "Forge", "Works", "Space", "Pulse", "Grid",
        ]
    }

    fn middles() -> &'static [&'static str] {
        &["Flux", "Sync", "Link", "Core", "Net", "Bit", "Code", "Node", "Mesh", "Edge"]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{RngBank, SamplerSlot};

    #[test]
    fn name_generation_is_deterministic() {
        let mut rng1 = RngBank::new(12345).for_sampler(SamplerSlot::Startup);
        let mut rng2 = RngBank::new(12345).for_sampler(SamplerSlot::Startup);

        for _ in 0..20 {
            assert_eq!(
                StartupNameGenerator::generate(&mut rng1),
                StartupNameGenerator::generate(&mut rng2),
                "Same seed should produce same name"
            );
        }
    }

    #[test]
    fn names_are_two_capitalized_tokens_without_spaces() {
        let mut rng = RngBank::new(3).for_sampler(SamplerSlot::Startup);
        for _ in 0..100 {
            let name = StartupNameGenerator::generate(&mut rng);
            assert!(!name.contains(' '), "unexpected space in {name}");
            assert!(name.chars().next().is_some_and(|c| c.is_ascii_uppercase()));
            assert!(name.len() >= 5, "name too short: {name}");
        }
    }

    #[test]
    fn unique_names_never_repeat() {
        let mut rng = RngBank::new(8).for_sampler(SamplerSlot::Startup);
        let mut used = HashSet::new();
        for _ in 0..300 {
            StartupNameGenerator::generate_unique(&mut rng, &mut used, 1_000).unwrap();
        }
        assert_eq!(used.len(), 300);
    }

    #[test]
    fn exhausted_space_fails_instead_of_looping() {
        let mut rng = RngBank::new(8).for_sampler(SamplerSlot::Startup);
        let mut used = HashSet::new();
        let result = (0..2_000)
            .map(|_| StartupNameGenerator::generate_unique(&mut rng, &mut used, 50))
            .find(|r| r.is_err());
        assert!(matches!(
            result,
            Some(Err(FundingError::NameSpaceExhausted { attempts: 50 }))
        ));
    }
}
