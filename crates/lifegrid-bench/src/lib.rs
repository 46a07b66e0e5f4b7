//! Benchmark profiles for lifegrid.
//!
//! - [`soup_profile`]: a seeded random soup on a square grid.
//! - [`glider_profile`]: a glider crossing a square grid, no stop condition.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use lifegrid_core::{Generation, LifeRule, Pattern, PatternError};
use lifegrid_engine::EvolutionConfig;

/// Density used by [`soup_profile`].
pub const SOUP_DENSITY: f64 = 0.35;

/// A `size x size` random soup under `rule`, deterministic per `seed`.
pub fn soup_profile(size: u32, rule: LifeRule, seed: u64) -> Result<Generation, PatternError> {
    let soup = Pattern::random(size, size, SOUP_DENSITY, seed)?;
    Ok(Generation::new(soup.cells().iter().copied(), size, size, rule))
}

/// A glider in the top-right corner of a `size x size` Conway grid.
///
/// It travels down-left, so it stays clear of the edges for roughly
/// `4 * size` generations.
pub fn glider_profile<'o>(size: u32) -> EvolutionConfig<'o> {
    EvolutionConfig::default()
        .size(size, size)
        .rule(LifeRule::Conway)
        .populate_with_pattern(Pattern::glider().up_right(size))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn soup_profile_is_reproducible() {
        let a = soup_profile(64, LifeRule::Conway, 42).unwrap();
        let b = soup_profile(64, LifeRule::Conway, 42).unwrap();
        assert_eq!(a, b);
        assert!(a.alive_count() > 0);
    }

    #[test]
    fn glider_profile_fits_the_grid() {
        let config = glider_profile(32);
        assert_eq!(config.resolved_size(), (32, 32));
        assert!(config.validate().is_ok());
    }
}
