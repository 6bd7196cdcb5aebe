//! Word-family catalog
//!
//! Read-only table of word families grouped by difficulty tier. The default
//! catalog is compiled into the binary; `loader` can read a replacement from disk.

mod embedded;
pub mod loader;

pub use embedded::{LEVEL1, LEVEL1_COUNT, LEVEL2, LEVEL2_COUNT, LEVEL3, LEVEL3_COUNT};

use crate::core::{GameError, Tier, WordFamily};
use crate::game::RandomSource;
use loader::families_from_slice;

/// Word families for every tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    tiers: [Vec<WordFamily>; 3],
}

impl Catalog {
    /// The catalog compiled into the binary
    #[must_use]
    pub fn embedded() -> Self {
        Self {
            tiers: [
                families_from_slice(LEVEL1),
                families_from_slice(LEVEL2),
                families_from_slice(LEVEL3),
            ],
        }
    }

    /// Build a catalog from per-tier family lists
    ///
    /// # Errors
    /// Returns `GameError::EmptyTier` for the first tier without families.
    pub fn from_tiers(
        level1: Vec<WordFamily>,
        level2: Vec<WordFamily>,
        level3: Vec<WordFamily>,
    ) -> Result<Self, GameError> {
        let catalog = Self {
            tiers: [level1, level2, level3],
        };
        if let Some(tier) = Tier::ALL.into_iter().find(|&t| catalog.families(t).is_empty()) {
            return Err(GameError::EmptyTier(tier));
        }
        Ok(catalog)
    }

    /// Families of a tier, in catalog order
    #[must_use]
    pub fn families(&self, tier: Tier) -> &[WordFamily] {
        &self.tiers[tier.number() - 1]
    }

    /// Families of a tier given by its key
    ///
    /// # Errors
    /// Returns `GameError::UnknownTier` if `name` is not a tier key.
    pub fn families_for_tier(&self, name: &str) -> Result<&[WordFamily], GameError> {
        Ok(self.families(name.parse()?))
    }

    /// Draw one family of `tier` uniformly at random
    ///
    /// # Errors
    /// Returns `GameError::EmptyTier` if the tier has no families. Catalogs built
    /// through `embedded`, `from_tiers` or the loader never do.
    pub fn pick_random<S: RandomSource + ?Sized>(
        &self,
        tier: Tier,
        source: &mut S,
    ) -> Result<&WordFamily, GameError> {
        let families = self.families(tier);
        if families.is_empty() {
            return Err(GameError::EmptyTier(tier));
        }
        Ok(&families[source.pick(families.len())])
    }

    /// Look up a family by root, ignoring case
    ///
    /// # Errors
    /// Returns `GameError::UnknownFamily` if no family in `tier` has this root.
    pub fn find(&self, tier: Tier, root: &str) -> Result<&WordFamily, GameError> {
        let wanted = root.trim().to_uppercase();
        self.families(tier)
            .iter()
            .find(|family| family.root_upper() == wanted)
            .ok_or_else(|| GameError::UnknownFamily {
                tier,
                root: root.trim().to_string(),
            })
    }

    /// Total number of families across all tiers
    #[must_use]
    pub fn len(&self) -> usize {
        self.tiers.iter().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Every `(tier, family)` pair, easiest tier first
    pub fn iter(&self) -> impl Iterator<Item = (Tier, &WordFamily)> {
        Tier::ALL
            .into_iter()
            .flat_map(move |tier| self.families(tier).iter().map(move |f| (tier, f)))
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::embedded()
    }
}
