//! # Quote Entity
//!
//! The computed result of a rate resolution: base fare, agent commission,
//! total price, and the rule that produced them (if any).
//!
//! All four monetary figures are rounded to two decimal places when the
//! quote is computed. Commission is always a share of the base fare, and
//! the total is the base fare plus the profit markup, also on the base
//! fare; the two percentages never compound.
//!
//! # Examples
//!
//! ```
//! use rate_engine::domain::entities::{BaseFare, Quote};
//! use rate_engine::domain::value_objects::{Money, Percent};
//! use rust_decimal::Decimal;
//!
//! let base = BaseFare::flat(Money::new(Decimal::new(400, 0))?);
//! let quote = Quote::compute(
//!     None,
//!     base,
//!     Percent::new(Decimal::new(10, 0))?,
//!     Percent::new(Decimal::new(15, 0))?,
//! )?;
//!
//! assert_eq!(quote.agent_commission().amount(), Decimal::new(4000, 2));
//! assert_eq!(quote.total_price().amount(), Decimal::new(46000, 2));
//! # Ok::<(), rate_engine::domain::errors::DomainError>(())
//! ```

use crate::domain::errors::DomainResult;
use crate::domain::value_objects::{Money, Percent, RuleId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A derived base fare, with the per-unit rate it came from when one
/// exists (the nightly rate for hotel quotes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BaseFare {
    amount: Money,
    per_unit: Option<Money>,
}

impl BaseFare {
    /// A base fare with no per-unit component.
    #[must_use]
    pub const fn flat(amount: Money) -> Self {
        Self {
            amount,
            per_unit: None,
        }
    }

    /// A base fare derived from a per-unit rate.
    #[must_use]
    pub const fn per_unit(amount: Money, rate: Money) -> Self {
        Self {
            amount,
            per_unit: Some(rate),
        }
    }

    /// Returns the fare amount.
    #[inline]
    #[must_use]
    pub const fn amount(&self) -> Money {
        self.amount
    }

    /// Returns the per-unit rate, when one was used.
    #[inline]
    #[must_use]
    pub const fn unit_rate(&self) -> Option<Money> {
        self.per_unit
    }
}

/// The externally visible outcome of a successful rate resolution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    rule_id: Option<RuleId>,
    base_fare: Money,
    per_unit: Option<Money>,
    agent_commission: Money,
    total_price: Money,
}

impl Quote {
    /// Computes a quote from a derived base fare and resolved percentages.
    ///
    /// Commission and markup are both taken on the unrounded base fare;
    /// each output figure is then rounded to two decimals independently.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Arithmetic` if a fare computation overflows.
    pub fn compute(
        rule_id: Option<RuleId>,
        fare: BaseFare,
        commission_percent: Percent,
        profit_percent: Percent,
    ) -> DomainResult<Self> {
        let agent_commission = commission_percent.of(fare.amount())?.round2();
        let markup = profit_percent.of(fare.amount())?;
        let total_price = fare.amount().safe_add(markup)?.round2();

        Ok(Self {
            rule_id,
            base_fare: fare.amount().round2(),
            per_unit: fare.unit_rate().map(Money::round2),
            agent_commission,
            total_price,
        })
    }

    /// The rule that priced this quote; `None` when a fallback or a
    /// manual value was used without any rule matching.
    #[inline]
    #[must_use]
    pub const fn rule_id(&self) -> Option<RuleId> {
        self.rule_id
    }

    /// The rounded base fare.
    #[inline]
    #[must_use]
    pub const fn base_fare(&self) -> Money {
        self.base_fare
    }

    /// The rounded per-unit rate, when the fare came from one.
    #[inline]
    #[must_use]
    pub const fn per_unit(&self) -> Option<Money> {
        self.per_unit
    }

    /// The rounded agent commission, computed on the base fare.
    #[inline]
    #[must_use]
    pub const fn agent_commission(&self) -> Money {
        self.agent_commission
    }

    /// The rounded customer-facing total price.
    #[inline]
    #[must_use]
    pub const fn total_price(&self) -> Money {
        self.total_price
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "quote base {} commission {} total {}",
            self.base_fare, self.agent_commission, self.total_price
        )?;
        match self.rule_id {
            Some(id) => write!(f, " (rule {id})"),
            None => write!(f, " (no rule)"),
        }
    }
}
