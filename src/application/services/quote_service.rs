//! # Quote Service
//!
//! The generic quote flow shared by all three products.
//!
//! One invocation validates the request, fetches the active rules for
//! the product's service type, selects the first full match by
//! ascending priority, derives the base fare through the product
//! adapter, layers commission and profit percentages, and records
//! exactly one audit entry whatever the outcome. Validation failures
//! short-circuit before any rule lookup but are still audited.
//!
//! The caller hands over both the raw request payload (for the audit
//! trail) and the validation outcome, so invalid input flows through
//! the same auditing path as priced quotes.

use crate::application::error::{ApplicationError, ApplicationResult};
use crate::application::services::audit::AuditLogger;
use crate::application::services::fare_calculator::build_quote;
use crate::application::services::products::ProductQuoter;
use crate::application::services::rule_selector::select_rule;
use crate::domain::entities::Quote;
use crate::domain::errors::DomainResult;
use crate::domain::requests::QuoteInput;
use crate::infrastructure::persistence::traits::PricingRuleRepository;
use chrono::NaiveDate;
use std::sync::Arc;

/// Resolves quotes for one product type.
#[derive(Debug, Clone)]
pub struct QuoteService<P: ProductQuoter> {
    quoter: P,
    rules: Arc<dyn PricingRuleRepository>,
    audit: AuditLogger,
}

impl<P: ProductQuoter> QuoteService<P> {
    /// Creates a quote service from a product adapter and its
    /// collaborators.
    #[must_use]
    pub fn new(quoter: P, rules: Arc<dyn PricingRuleRepository>, audit: AuditLogger) -> Self {
        Self {
            quoter,
            rules,
            audit,
        }
    }

    /// Resolves one quote and audits the attempt.
    ///
    /// `raw` is the request payload exactly as received; it goes into
    /// the audit entry untouched. `request` is the validation outcome
    /// for that payload and `today` the date rule validity windows are
    /// evaluated against.
    ///
    /// # Errors
    ///
    /// Returns the validation error for invalid input,
    /// `DomainError::NoPriceAvailable` when no usable base rate
    /// resolves, or `ApplicationError::Repository` when the rule fetch
    /// fails.
    pub async fn quote(
        &self,
        raw: serde_json::Value,
        request: DomainResult<P::Request>,
        today: NaiveDate,
    ) -> ApplicationResult<Quote> {
        let outcome = self.resolve(request, today).await;
        match &outcome {
            Ok(quote) => {
                self.audit
                    .record_success(self.quoter.service_type(), raw, quote)
                    .await;
            }
            Err(error) => {
                self.audit
                    .record_failure(self.quoter.service_type(), raw, error.to_string())
                    .await;
            }
        }
        outcome
    }

    async fn resolve(
        &self,
        request: DomainResult<P::Request>,
        today: NaiveDate,
    ) -> ApplicationResult<Quote> {
        let request = request?;
        let rules = self.rules.find_active(self.quoter.service_type()).await?;
        let rule = select_rule(&rules, today, |rule| self.quoter.matches(rule, &request));
        let fare = self.quoter.base_fare(rule, &request)?;
        let quote = build_quote(rule, fare, request.overrides())?;
        tracing::debug!(
            service = %self.quoter.service_type(),
            rule = ?quote.rule_id(),
            total = %quote.total_price(),
            "quote resolved"
        );
        Ok(quote)
    }
}
