//! Sibling-discount ranking for a household's children.
//!
//! The discount itself is already embedded in enrollment day prices by the
//! roster; this module recomputes the ranking to report each child's
//! position and whether the discount applies. The ranking orders children
//! by theoretical full-price monthly cost (stored prices grossed back up
//! to their pre-discount value), descending; ties break by the earliest
//! enrollment creation time. It is only defined when at least three
//! children of the household hold an active enrollment, and only positions
//! three and beyond carry the discount.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::models::{Enrollment, Person, PricingConfig, SiblingDiscount};

/// Minimum number of actively enrolled children for the ranking to exist.
const MIN_RANKED_CHILDREN: usize = 3;

/// First rank (1-based) that receives the sibling discount.
const FIRST_DISCOUNTED_RANK: u32 = 3;

struct RankedChild<'a> {
    person_id: &'a str,
    theoretical_cost: Decimal,
    earliest_created_at: DateTime<Utc>,
}

/// Computes the sibling-discount outcome for every child of a household.
///
/// Children without an active enrollment are left out of the ranking and
/// never discounted. When fewer than three children rank, the ranking is
/// undefined and every child reports [`SiblingDiscount::none`].
pub fn rank_household(
    children: &[Person],
    enrollments: &[Enrollment],
    config: &PricingConfig,
) -> BTreeMap<String, SiblingDiscount> {
    let mut outcomes: BTreeMap<String, SiblingDiscount> = children
        .iter()
        .map(|child| (child.id().to_string(), SiblingDiscount::none()))
        .collect();

    let mut ranked: Vec<RankedChild<'_>> = children
        .iter()
        .filter_map(|child| {
            let active: Vec<&Enrollment> = enrollments
                .iter()
                .filter(|e| e.active && e.person_id == child.id())
                .collect();
            let earliest_created_at = active.iter().map(|e| e.created_at).min()?;
            let theoretical_cost = active.iter().map(|e| e.theoretical_monthly_cost()).sum();
            Some(RankedChild {
                person_id: child.id(),
                theoretical_cost,
                earliest_created_at,
            })
        })
        .collect();

    if ranked.len() < MIN_RANKED_CHILDREN {
        return outcomes;
    }

    ranked.sort_by(|a, b| {
        b.theoretical_cost
            .cmp(&a.theoretical_cost)
            .then_with(|| a.earliest_created_at.cmp(&b.earliest_created_at))
            .then_with(|| a.person_id.cmp(b.person_id))
    });

    for (index, child) in ranked.iter().enumerate() {
        let rank = index as u32 + 1;
        let applied = rank >= FIRST_DISCOUNTED_RANK;
        outcomes.insert(
            child.person_id.to_string(),
            SiblingDiscount {
                applied,
                rate_pct: if applied {
                    config.sibling_discount_pct
                } else {
                    Decimal::ZERO
                },
                rank: Some(rank),
            },
        );
    }

    outcomes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Exemption;
    use chrono::NaiveDate;
    use std::collections::BTreeSet;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn config() -> PricingConfig {
        PricingConfig {
            active: true,
            days_min: 1,
            days_max: 5,
            base_price: dec("6.00"),
            staff_price: dec("4.50"),
            staff_child_price: dec("3.00"),
            sibling_discount_pct: dec("20"),
            attendance_discount_pct: dec("10"),
            attendance_threshold_pct: dec("80"),
        }
    }

    fn child(id: &str) -> Person {
        Person::Child {
            id: id.to_string(),
            household_id: "fam_001".to_string(),
            exemption: Exemption::default(),
        }
    }

    fn enrollment(person_id: &str, daily_price: &str, weekday_count: u8, created: &str) -> Enrollment {
        Enrollment {
            id: format!("enr_{person_id}"),
            person_id: person_id.to_string(),
            weekdays: (0u8..weekday_count).collect(),
            daily_price: dec(daily_price),
            discount_percent: Decimal::ZERO,
            active: true,
            start_date: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            end_date: None,
            created_at: created.parse().unwrap(),
        }
    }

    #[test]
    fn test_third_ranked_child_gets_discount() {
        let children = vec![child("a"), child("b"), child("c")];
        let enrollments = vec![
            enrollment("a", "25.00", 5, "2025-08-01T10:00:00Z"), // 125
            enrollment("b", "20.00", 5, "2025-08-02T10:00:00Z"), // 100
            enrollment("c", "16.00", 5, "2025-08-03T10:00:00Z"), // 80
        ];
        let outcomes = rank_household(&children, &enrollments, &config());

        assert_eq!(outcomes["a"].rank, Some(1));
        assert!(!outcomes["a"].applied);
        assert_eq!(outcomes["b"].rank, Some(2));
        assert!(!outcomes["b"].applied);
        assert_eq!(outcomes["c"].rank, Some(3));
        assert!(outcomes["c"].applied);
        assert_eq!(outcomes["c"].rate_pct, dec("20"));
    }

    #[test]
    fn test_tie_at_top_breaks_by_earliest_created_at() {
        // Costs [100, 100, 80]: the tie resolves to the earlier record, so
        // exactly one of the tied pair holds rank 1 and only the third
        // child is discounted.
        let children = vec![child("a"), child("b"), child("c")];
        let enrollments = vec![
            enrollment("a", "20.00", 5, "2025-08-05T10:00:00Z"),
            enrollment("b", "20.00", 5, "2025-08-01T10:00:00Z"),
            enrollment("c", "16.00", 5, "2025-08-03T10:00:00Z"),
        ];
        let outcomes = rank_household(&children, &enrollments, &config());

        assert_eq!(outcomes["b"].rank, Some(1));
        assert_eq!(outcomes["a"].rank, Some(2));
        assert_eq!(outcomes["c"].rank, Some(3));
        assert!(!outcomes["b"].applied);
        assert!(!outcomes["a"].applied);
        assert!(outcomes["c"].applied);
    }

    #[test]
    fn test_two_children_have_no_ranking() {
        let children = vec![child("a"), child("b")];
        let enrollments = vec![
            enrollment("a", "25.00", 5, "2025-08-01T10:00:00Z"),
            enrollment("b", "20.00", 5, "2025-08-02T10:00:00Z"),
        ];
        let outcomes = rank_household(&children, &enrollments, &config());

        assert_eq!(outcomes["a"], SiblingDiscount::none());
        assert_eq!(outcomes["b"], SiblingDiscount::none());
    }

    #[test]
    fn test_inactive_enrollments_do_not_count_toward_ranking() {
        let children = vec![child("a"), child("b"), child("c")];
        let mut inactive = enrollment("c", "16.00", 5, "2025-08-03T10:00:00Z");
        inactive.active = false;
        let enrollments = vec![
            enrollment("a", "25.00", 5, "2025-08-01T10:00:00Z"),
            enrollment("b", "20.00", 5, "2025-08-02T10:00:00Z"),
            inactive,
        ];
        let outcomes = rank_household(&children, &enrollments, &config());

        // Only two children rank, so the ranking is undefined.
        assert!(outcomes.values().all(|o| *o == SiblingDiscount::none()));
    }

    #[test]
    fn test_cost_reconstructed_from_discounted_price() {
        // Child c's stored price already carries a 20% discount; the
        // ranking must compare full prices, so c (4.80 -> 6.00 * 5 = 30)
        // outranks d (5.00 * 5 = 25).
        let children = vec![child("a"), child("b"), child("c"), child("d")];
        let mut discounted = enrollment("c", "4.80", 5, "2025-08-03T10:00:00Z");
        discounted.discount_percent = dec("20");
        let enrollments = vec![
            enrollment("a", "9.00", 5, "2025-08-01T10:00:00Z"),
            enrollment("b", "8.00", 5, "2025-08-02T10:00:00Z"),
            discounted,
            enrollment("d", "5.00", 5, "2025-08-04T10:00:00Z"),
        ];
        let outcomes = rank_household(&children, &enrollments, &config());

        assert_eq!(outcomes["c"].rank, Some(3));
        assert_eq!(outcomes["d"].rank, Some(4));
        assert!(outcomes["c"].applied);
        assert!(outcomes["d"].applied);
    }

    #[test]
    fn test_fourth_and_beyond_also_discounted() {
        let children = vec![child("a"), child("b"), child("c"), child("d")];
        let enrollments = vec![
            enrollment("a", "9.00", 5, "2025-08-01T10:00:00Z"),
            enrollment("b", "8.00", 5, "2025-08-02T10:00:00Z"),
            enrollment("c", "7.00", 5, "2025-08-03T10:00:00Z"),
            enrollment("d", "6.00", 5, "2025-08-04T10:00:00Z"),
        ];
        let outcomes = rank_household(&children, &enrollments, &config());

        assert!(!outcomes["a"].applied);
        assert!(!outcomes["b"].applied);
        assert!(outcomes["c"].applied);
        assert!(outcomes["d"].applied);
    }

    #[test]
    fn test_unenrolled_child_reports_none_even_when_ranking_exists() {
        let children = vec![child("a"), child("b"), child("c"), child("x")];
        let enrollments = vec![
            enrollment("a", "9.00", 5, "2025-08-01T10:00:00Z"),
            enrollment("b", "8.00", 5, "2025-08-02T10:00:00Z"),
            enrollment("c", "7.00", 5, "2025-08-03T10:00:00Z"),
        ];
        let outcomes = rank_household(&children, &enrollments, &config());

        assert_eq!(outcomes["x"], SiblingDiscount::none());
        assert!(outcomes["c"].applied);
    }
}
