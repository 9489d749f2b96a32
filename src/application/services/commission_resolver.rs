//! # Commission Resolver
//!
//! Agent commission resolution for bookings.
//!
//! Resolution walks the same first-match-wins shape as rate rules:
//! the first active, in-effect agent rule by ascending priority wins,
//! then the agent's stored default percentage, then zero. Unlike quote
//! commissions (taken on the base fare), an agent's booking commission
//! applies to the computed price. A flat-amount rule is back-converted
//! to the equivalent percentage for reporting.

use crate::application::services::rule_selector::select_rule;
use crate::domain::entities::{Agent, AgentCommissionRule};
use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{
    AgentRuleId, CheckedArithmetic, CommissionType, Money, Percent,
};
use chrono::NaiveDate;
use rust_decimal::Decimal;

/// Where a resolved commission came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommissionSource {
    /// An agent commission rule matched.
    Rule(AgentRuleId),
    /// The agent's stored default percentage applied.
    AgentDefault,
    /// Neither a rule nor a default existed; commission is zero.
    None,
}

/// A commission amount with the percentage it represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedCommission {
    amount: Money,
    percent: Percent,
    source: CommissionSource,
}

impl ResolvedCommission {
    /// Returns the commission amount.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    /// Returns the commission as a percentage of the price.
    #[inline]
    #[must_use]
    pub const fn percent(&self) -> Percent {
        self.percent
    }

    /// Returns where the commission came from.
    #[inline]
    #[must_use]
    pub const fn source(&self) -> CommissionSource {
        self.source
    }
}

/// Resolves the commission an agent earns on a computed price.
///
/// `rules` must already be scoped to the agent and service type;
/// eligibility (active flag and validity window) is evaluated here
/// against `today`.
///
/// # Errors
///
/// Returns `DomainError::Arithmetic` if a commission computation
/// overflows.
pub fn resolve_agent_commission(
    agent: &Agent,
    rules: &[AgentCommissionRule],
    price: Money,
    today: NaiveDate,
) -> DomainResult<ResolvedCommission> {
    if let Some(rule) = select_rule(rules, today, |_| true) {
        return commission_from_rule(rule, price);
    }
    if let Some(percent) = agent.default_commission_percent() {
        return Ok(ResolvedCommission {
            amount: percent.of(price)?.round2(),
            percent,
            source: CommissionSource::AgentDefault,
        });
    }
    Ok(ResolvedCommission {
        amount: Money::ZERO,
        percent: Percent::ZERO,
        source: CommissionSource::None,
    })
}

fn commission_from_rule(
    rule: &AgentCommissionRule,
    price: Money,
) -> DomainResult<ResolvedCommission> {
    match rule.commission_type() {
        CommissionType::Percent => {
            let percent = Percent::new(rule.rate())?;
            Ok(ResolvedCommission {
                amount: percent.of(price)?.round2(),
                percent,
                source: CommissionSource::Rule(rule.id()),
            })
        }
        CommissionType::Flat => {
            let amount = Money::new(rule.rate())?.round2();
            let percent = equivalent_percent(amount, price)?;
            Ok(ResolvedCommission {
                amount,
                percent,
                source: CommissionSource::Rule(rule.id()),
            })
        }
    }
}

fn equivalent_percent(amount: Money, price: Money) -> DomainResult<Percent> {
    if price.is_zero() {
        return Ok(Percent::ZERO);
    }
    let ratio = amount.amount().safe_div(price.amount())?;
    Ok(Percent::new(ratio.safe_mul(Decimal::ONE_HUNDRED)?)?.round2())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::value_objects::ServiceType;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
    }

    fn agent(default_percent: Option<i64>) -> Agent {
        Agent::new(
            "Desert Tours",
            "key-123",
            default_percent.map(|value| Decimal::new(value, 0)),
        )
        .unwrap()
    }

    fn rule(
        agent: &Agent,
        priority: i32,
        commission_type: CommissionType,
        rate: i64,
    ) -> AgentCommissionRule {
        AgentCommissionRule::new(
            agent.id(),
            ServiceType::Transport,
            priority,
            commission_type,
            Decimal::new(rate, 0),
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            None,
        )
        .unwrap()
    }

    fn price(value: i64) -> Money {
        Money::new(Decimal::new(value, 0)).unwrap()
    }

    #[test]
    fn percent_rule_applies_on_price() {
        let agent = agent(Some(20));
        let rules = vec![rule(&agent, 1, CommissionType::Percent, 10)];

        let resolved = resolve_agent_commission(&agent, &rules, price(460), today()).unwrap();

        assert_eq!(resolved.amount().amount(), Decimal::new(4600, 2));
        assert_eq!(resolved.percent().value(), Decimal::new(10, 0));
        assert!(matches!(resolved.source(), CommissionSource::Rule(_)));
    }

    #[test]
    fn flat_rule_back_converts_to_percent() {
        let agent = agent(None);
        let rules = vec![rule(&agent, 1, CommissionType::Flat, 50)];

        let resolved = resolve_agent_commission(&agent, &rules, price(400), today()).unwrap();

        assert_eq!(resolved.amount().amount(), Decimal::new(5000, 2));
        assert_eq!(resolved.percent().value(), Decimal::new(1250, 2));
    }

    #[test]
    fn lowest_priority_rule_wins() {
        let agent = agent(None);
        let rules = vec![
            rule(&agent, 5, CommissionType::Percent, 8),
            rule(&agent, 1, CommissionType::Percent, 12),
        ];

        let resolved = resolve_agent_commission(&agent, &rules, price(100), today()).unwrap();

        assert_eq!(resolved.percent().value(), Decimal::new(12, 0));
    }

    #[test]
    fn out_of_window_rule_falls_back_to_default() {
        let agent = agent(Some(7));
        let expired = AgentCommissionRule::new(
            agent.id(),
            ServiceType::Transport,
            1,
            CommissionType::Percent,
            Decimal::new(15, 0),
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            Some(NaiveDate::from_ymd_opt(2024, 12, 31).unwrap()),
        )
        .unwrap();

        let resolved =
            resolve_agent_commission(&agent, &[expired], price(200), today()).unwrap();

        assert_eq!(resolved.source(), CommissionSource::AgentDefault);
        assert_eq!(resolved.amount().amount(), Decimal::new(1400, 2));
    }

    #[test]
    fn not_yet_effective_rule_is_skipped() {
        let agent = agent(None);
        let future = AgentCommissionRule::new(
            agent.id(),
            ServiceType::Transport,
            1,
            CommissionType::Percent,
            Decimal::new(15, 0),
            NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            None,
        )
        .unwrap();

        let resolved =
            resolve_agent_commission(&agent, &[future], price(200), today()).unwrap();

        assert_eq!(resolved.source(), CommissionSource::None);
        assert_eq!(resolved.amount(), Money::ZERO);
    }

    #[test]
    fn no_rule_and_no_default_is_zero() {
        let agent = agent(None);

        let resolved = resolve_agent_commission(&agent, &[], price(500), today()).unwrap();

        assert_eq!(resolved.source(), CommissionSource::None);
        assert_eq!(resolved.amount(), Money::ZERO);
        assert_eq!(resolved.percent(), Percent::ZERO);
    }
}
