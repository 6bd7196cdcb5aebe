//! Tier listing

use crate::catalog::Catalog;
use crate::core::Tier;
use crate::game::list_tiers;
use serde::Serialize;

/// One row of the tier menu
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TierSummary {
    pub tier: Tier,
    pub title: &'static str,
    pub families: usize,
}

/// Summaries of every tier, easiest first
#[must_use]
pub fn tier_summaries(catalog: &Catalog) -> Vec<TierSummary> {
    list_tiers()
        .into_iter()
        .map(|tier| TierSummary {
            tier,
            title: tier.title(),
            families: catalog.families(tier).len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{LEVEL1_COUNT, LEVEL3_COUNT};

    #[test]
    fn lists_all_tiers_with_counts() {
        let summaries = tier_summaries(&Catalog::embedded());
        assert_eq!(summaries.len(), 3);
        assert_eq!(summaries[0].tier, Tier::Level1);
        assert_eq!(summaries[0].families, LEVEL1_COUNT);
        assert_eq!(summaries[2].title, "Negatives & Prefixes");
        assert_eq!(summaries[2].families, LEVEL3_COUNT);
    }
}
