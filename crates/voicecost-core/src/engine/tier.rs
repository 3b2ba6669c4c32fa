//! Generic subscription-tier optimizer.
//!
//! Given a provider's tier ladder and a required unit count, picks the
//! tier with the lowest total monthly cost, allowing overage where the
//! tier permits it. Ties go to the first tier in table order, so the
//! result is deterministic for equal-cost candidates.

use tracing::debug;

use crate::pricing::plans::ProviderTier;

#[derive(Debug, Clone, Copy)]
pub struct TierChoice {
    pub tier: &'static ProviderTier,
    pub cost: f64,
    /// Units billed above the tier's allotment.
    pub overage: f64,
}

/// Pick the cheapest tier that can serve `units_needed`.
///
/// Returns `None` when no tier is feasible (every tier has a zero overage
/// rate and too small an allotment) or the ladder is empty; callers record
/// a `Warning::NoFeasibleTier` in that case rather than charging zero
/// silently. Zero or negative usage resolves to the first tier at no cost.
pub fn optimize_tier(tiers: &'static [ProviderTier], units_needed: f64) -> Option<TierChoice> {
    if units_needed <= 0.0 {
        return tiers.first().map(|tier| TierChoice { tier, cost: 0.0, overage: 0.0 });
    }

    let mut best: Option<TierChoice> = None;

    for tier in tiers {
        let (cost, overage) = if units_needed <= tier.included_units {
            (tier.monthly_fee, 0.0)
        } else if tier.overage_rate > 0.0 {
            let overage = units_needed - tier.included_units;
            (tier.monthly_fee + overage * tier.overage_rate, overage)
        } else {
            continue; // cannot cover usage, skip this tier
        };

        if best.map_or(true, |b| cost < b.cost) {
            best = Some(TierChoice { tier, cost, overage });
        }
    }

    if let Some(choice) = best {
        debug!(
            tier = choice.tier.name,
            cost = choice.cost,
            units = units_needed,
            "tier optimizer selected"
        );
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    const TIERS: &[ProviderTier] = &[
        ProviderTier { name: "Free",  monthly_fee: 0.0,   included_units: 1_000.0,   overage_rate: 0.0 },
        ProviderTier { name: "Pro",   monthly_fee: 20.0,  included_units: 100_000.0, overage_rate: 0.001 },
        ProviderTier { name: "Scale", monthly_fee: 200.0, included_units: 2_000_000.0, overage_rate: 0.0005 },
    ];

    #[test]
    fn test_zero_units_is_free_first_tier() {
        let choice = optimize_tier(TIERS, 0.0).unwrap();
        assert_eq!(choice.tier.name, "Free");
        assert_eq!(choice.cost, 0.0);
        assert_eq!(choice.overage, 0.0);
    }

    #[test]
    fn test_within_allotment_pays_fee_only() {
        let choice = optimize_tier(TIERS, 500.0).unwrap();
        assert_eq!(choice.tier.name, "Free");
        assert_eq!(choice.cost, 0.0);
    }

    #[test]
    fn test_zero_overage_tier_skipped_above_allotment() {
        // 50K units: Free can't serve (no overage), Pro covers within allotment.
        let choice = optimize_tier(TIERS, 50_000.0).unwrap();
        assert_eq!(choice.tier.name, "Pro");
        assert_eq!(choice.cost, 20.0);
    }

    #[test]
    fn test_overage_math() {
        // 150K units on Pro: 20 + 50K x 0.001 = 70. Scale flat fee 200. Pro wins.
        let choice = optimize_tier(TIERS, 150_000.0).unwrap();
        assert_eq!(choice.tier.name, "Pro");
        assert!((choice.cost - 70.0).abs() < 1e-9);
        assert_eq!(choice.overage, 50_000.0);
    }

    #[test]
    fn test_higher_tier_wins_at_volume() {
        // 500K units: Pro = 20 + 400K x 0.001 = 420; Scale = 200 flat.
        let choice = optimize_tier(TIERS, 500_000.0).unwrap();
        assert_eq!(choice.tier.name, "Scale");
        assert_eq!(choice.cost, 200.0);
    }

    #[test]
    fn test_minimality_against_every_feasible_tier() {
        for units in [0.0, 999.0, 1_001.0, 80_000.0, 240_000.0, 3_000_000.0] {
            let best = optimize_tier(TIERS, units).unwrap();
            for tier in TIERS {
                let candidate = if units <= tier.included_units {
                    tier.monthly_fee
                } else if tier.overage_rate > 0.0 {
                    tier.monthly_fee + (units - tier.included_units) * tier.overage_rate
                } else {
                    continue;
                };
                assert!(best.cost <= candidate + 1e-9, "units={}", units);
            }
        }
    }

    #[test]
    fn test_tie_breaks_to_first_tier() {
        const EQUAL: &[ProviderTier] = &[
            ProviderTier { name: "A", monthly_fee: 10.0, included_units: 100.0, overage_rate: 0.0 },
            ProviderTier { name: "B", monthly_fee: 10.0, included_units: 100.0, overage_rate: 0.0 },
        ];
        let choice = optimize_tier(EQUAL, 50.0).unwrap();
        assert_eq!(choice.tier.name, "A");
    }

    #[test]
    fn test_exhaustion_returns_none() {
        const CAPPED: &[ProviderTier] = &[
            ProviderTier { name: "Only", monthly_fee: 5.0, included_units: 100.0, overage_rate: 0.0 },
        ];
        assert!(optimize_tier(CAPPED, 200.0).is_none());
        assert!(optimize_tier(&[], 10.0).is_none());
    }
}
