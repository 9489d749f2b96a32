//! # Fare Calculator
//!
//! Percentage resolution and quote assembly on top of a derived base
//! fare.
//!
//! Commission and profit percentages resolve with the same precedence:
//! a request-supplied override wins over the matched rule's value, and
//! zero applies when neither is present. Both percentages are taken on
//! the base fare; they never compound.
//!
//! # Examples
//!
//! ```
//! use rate_engine::application::services::fare_calculator::build_quote;
//! use rate_engine::domain::entities::{BaseFare, PricingRule};
//! use rate_engine::domain::requests::PercentOverrides;
//! use rate_engine::domain::value_objects::{Money, ServiceType};
//! use rust_decimal::Decimal;
//!
//! let rule = PricingRule::builder(ServiceType::Transport, 1)
//!     .agent_commission_percent(Decimal::new(10, 0))
//!     .profit_percent(Decimal::new(15, 0))
//!     .build()?;
//! let fare = BaseFare::flat(Money::new(Decimal::new(400, 0))?);
//!
//! let quote = build_quote(Some(&rule), fare, &PercentOverrides::none())?;
//! assert_eq!(quote.agent_commission().amount(), Decimal::new(4000, 2));
//! assert_eq!(quote.total_price().amount(), Decimal::new(46000, 2));
//! # Ok::<(), rate_engine::domain::errors::DomainError>(())
//! ```

use crate::domain::entities::{BaseFare, PricingRule, Quote};
use crate::domain::errors::DomainResult;
use crate::domain::requests::PercentOverrides;
use crate::domain::value_objects::Percent;

/// Resolves one percentage with override-beats-rule precedence.
#[must_use]
pub fn resolve_percent(override_value: Option<Percent>, rule_value: Option<Percent>) -> Percent {
    override_value.or(rule_value).unwrap_or(Percent::ZERO)
}

/// Builds the final quote for a derived base fare.
///
/// The rule contributes its id and default percentages; request
/// overrides take precedence per [`resolve_percent`].
///
/// # Errors
///
/// Returns `DomainError::Arithmetic` if a fare computation overflows.
pub fn build_quote(
    rule: Option<&PricingRule>,
    fare: BaseFare,
    overrides: &PercentOverrides,
) -> DomainResult<Quote> {
    let commission = resolve_percent(
        overrides.agent_commission_percent(),
        rule.and_then(PricingRule::agent_commission_percent),
    );
    let profit = resolve_percent(overrides.profit_percent(), rule.and_then(PricingRule::profit_percent));
    Quote::compute(rule.map(PricingRule::id), fare, commission, profit)
}
