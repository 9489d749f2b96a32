//! # Rule Selector
//!
//! Generic first-match-wins rule selection.
//!
//! This module provides the [`SelectableRule`] trait and the
//! [`select_rule`] function shared by quote resolution and agent
//! commission resolution. Candidates are filtered to those eligible on
//! the evaluation date, ordered by ascending priority, and walked until
//! the first rule whose structural criteria all pass. A criterion left
//! unset on a rule is a wildcard; a set criterion must be satisfied by
//! the request.
//!
//! # Examples
//!
//! ```
//! use rate_engine::application::services::rule_selector::{select_rule, SelectableRule};
//! use rate_engine::domain::entities::PricingRule;
//! use rate_engine::domain::value_objects::ServiceType;
//! use chrono::NaiveDate;
//!
//! let rules = vec![
//!     PricingRule::builder(ServiceType::Transport, 2).vehicle_type("gmc").build()?,
//!     PricingRule::builder(ServiceType::Transport, 1).vehicle_type("sedan").build()?,
//! ];
//! let today = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
//!
//! let selected = select_rule(&rules, today, |rule| rule.vehicle_type() == Some("gmc"));
//! assert_eq!(selected.map(SelectableRule::priority), Some(2));
//! # Ok::<(), rate_engine::domain::errors::DomainError>(())
//! ```

use crate::domain::entities::{AgentCommissionRule, PricingRule};
use chrono::NaiveDate;

/// A rule that can take part in priority-ordered selection.
pub trait SelectableRule {
    /// Selection order; lower values are considered first.
    fn priority(&self) -> i32;

    /// Whether the rule may be selected on the given date.
    fn is_eligible(&self, on: NaiveDate) -> bool;
}

impl SelectableRule for PricingRule {
    fn priority(&self) -> i32 {
        Self::priority(self)
    }

    fn is_eligible(&self, on: NaiveDate) -> bool {
        self.active() && self.is_in_effect(on)
    }
}

impl SelectableRule for AgentCommissionRule {
    fn priority(&self) -> i32 {
        Self::priority(self)
    }

    fn is_eligible(&self, on: NaiveDate) -> bool {
        self.active() && self.is_in_effect(on)
    }
}

/// Selects the first rule whose criteria fully match.
///
/// Ineligible rules (inactive, or outside their validity window on
/// `today`) are skipped. The remainder is ordered by ascending priority,
/// ties keeping input order, and the first rule for which `matches`
/// returns true wins. `None` is a valid outcome, not an error.
pub fn select_rule<'a, R, F>(rules: &'a [R], today: NaiveDate, matches: F) -> Option<&'a R>
where
    R: SelectableRule,
    F: Fn(&R) -> bool,
{
    let mut eligible: Vec<&R> = rules.iter().filter(|rule| rule.is_eligible(today)).collect();
    eligible.sort_by_key(|rule| rule.priority());
    eligible.into_iter().find(|rule| matches(rule))
}

/// Matches a text criterion against a request value.
///
/// An unset criterion matches anything. A set criterion requires the
/// request value to be present and equal.
#[must_use]
pub fn matches_text(criterion: Option<&str>, requested: Option<&str>) -> bool {
    match criterion {
        None => true,
        Some(expected) => requested == Some(expected),
    }
}

/// Matches an exact-value criterion against a request value.
///
/// Same wildcard semantics as [`matches_text`].
#[must_use]
pub fn matches_exact<T: PartialEq>(criterion: Option<T>, requested: Option<T>) -> bool {
    match criterion {
        None => true,
        Some(expected) => requested.as_ref() == Some(&expected),
    }
}

/// Checks a value against an optional inclusive range.
///
/// Either bound may be open; a bound that is set includes its endpoint.
#[must_use]
pub fn within_range<T: PartialOrd>(min: Option<T>, max: Option<T>, value: T) -> bool {
    if min.is_some_and(|lower| value < lower) {
        return false;
    }
    if max.is_some_and(|upper| value > upper) {
        return false;
    }
    true
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ServiceType;
    use rust_decimal::Decimal;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn rule(priority: i32) -> PricingRule {
        PricingRule::builder(ServiceType::Transport, priority)
            .build()
            .unwrap()
    }

    mod matching {
        use super::*;

        #[test]
        fn unset_criterion_is_wildcard() {
            assert!(matches_text(None, Some("gmc")));
            assert!(matches_text(None, None));
            assert!(matches_exact::<i16>(None, None));
        }

        #[test]
        fn set_criterion_requires_equal_value() {
            assert!(matches_text(Some("gmc"), Some("gmc")));
            assert!(!matches_text(Some("gmc"), Some("sedan")));
            assert!(!matches_text(Some("gmc"), Some("GMC")));
        }

        #[test]
        fn set_criterion_rejects_missing_value() {
            assert!(!matches_text(Some("EK"), None));
            assert!(!matches_exact(Some(5_i16), None));
        }

        #[test]
        fn range_bounds_are_inclusive() {
            let min = Some(Decimal::new(10, 0));
            let max = Some(Decimal::new(50, 0));
            assert!(within_range(min, max, Decimal::new(10, 0)));
            assert!(within_range(min, max, Decimal::new(50, 0)));
            assert!(within_range(min, max, Decimal::new(30, 0)));
            assert!(!within_range(min, max, Decimal::new(9, 0)));
            assert!(!within_range(min, max, Decimal::new(51, 0)));
        }

        #[test]
        fn open_bounds_match_everything() {
            assert!(within_range::<i32>(None, None, 1_000_000));
            assert!(within_range(None, Some(5), 5));
            assert!(within_range(Some(5), None, 5));
        }
    }

    mod selection {
        use super::*;

        #[test]
        fn lowest_priority_full_match_wins() {
            let rules = vec![rule(30), rule(10), rule(20)];
            let selected = select_rule(&rules, today(), |_| true).unwrap();
            assert_eq!(SelectableRule::priority(selected), 10);
        }

        #[test]
        fn skips_non_matching_lower_priorities() {
            let rules = vec![rule(1), rule(2), rule(3)];
            let selected =
                select_rule(&rules, today(), |r| SelectableRule::priority(r) > 2).unwrap();
            assert_eq!(SelectableRule::priority(selected), 3);
        }

        #[test]
        fn inactive_rules_are_skipped() {
            let active = rule(2);
            let inactive = PricingRule::builder(ServiceType::Transport, 1)
                .inactive()
                .build()
                .unwrap();
            let rules = vec![inactive, active];
            let selected = select_rule(&rules, today(), |_| true).unwrap();
            assert_eq!(SelectableRule::priority(selected), 2);
        }

        #[test]
        fn out_of_window_rules_are_skipped() {
            let expired = PricingRule::builder(ServiceType::Transport, 1)
                .valid_to(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap())
                .build()
                .unwrap();
            let open = rule(2);
            let rules = vec![expired, open];
            let selected = select_rule(&rules, today(), |_| true).unwrap();
            assert_eq!(SelectableRule::priority(selected), 2);
        }

        #[test]
        fn window_bounds_are_inclusive() {
            let bounded = PricingRule::builder(ServiceType::Transport, 1)
                .valid_from(today())
                .valid_to(today())
                .build()
                .unwrap();
            let rules = vec![bounded];
            assert!(select_rule(&rules, today(), |_| true).is_some());
        }

        #[test]
        fn no_match_yields_none() {
            let rules = vec![rule(1)];
            assert!(select_rule(&rules, today(), |_| false).is_none());
        }

        #[test]
        fn empty_rule_set_yields_none() {
            let rules: Vec<PricingRule> = Vec::new();
            assert!(select_rule(&rules, today(), |_| true).is_none());
        }
    }
}
