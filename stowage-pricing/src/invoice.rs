//! Invoice generation from priced quotes.

use crate::{round_currency, Quote};
use chrono::{DateTime, TimeDelta, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use stowage_core::{PricingConfig, PricingError, StowageResult, ValidationError};
use uuid::Uuid;

/// Kind of invoice line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineKind {
    Charge,
    VolumeDiscount,
    MembershipDiscount,
}

/// One line on an invoice. Discount lines carry negative amounts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvoiceLine {
    pub kind: LineKind,
    pub description: String,
    pub quantity: Decimal,
    pub amount: Decimal,
}

/// Invoice for one or more priced bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invoice {
    pub invoice_id: Uuid,
    pub booking_reference: String,
    pub issued_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
    pub currency: String,
    pub lines: Vec<InvoiceLine>,
    /// Sum of charge lines
    pub subtotal: Decimal,
    /// Sum of discount lines, as a positive amount
    pub discount_total: Decimal,
    pub taxable_amount: Decimal,
    pub tax_rate_percent: Decimal,
    pub tax_amount: Decimal,
    pub total: Decimal,
}

/// Builder collecting quotes into an invoice.
#[derive(Debug, Clone)]
pub struct InvoiceBuilder<'a> {
    config: &'a PricingConfig,
    booking_reference: String,
    issued_at: Option<DateTime<Utc>>,
    quotes: Vec<Quote>,
}

impl<'a> InvoiceBuilder<'a> {
    pub fn new(config: &'a PricingConfig, booking_reference: impl Into<String>) -> Self {
        Self {
            config,
            booking_reference: booking_reference.into(),
            issued_at: None,
            quotes: Vec::new(),
        }
    }

    /// Fix the issue timestamp; defaults to now.
    pub fn issued_at(mut self, issued_at: DateTime<Utc>) -> Self {
        self.issued_at = Some(issued_at);
        self
    }

    pub fn with_quote(mut self, quote: Quote) -> Self {
        self.quotes.push(quote);
        self
    }

    pub fn build(self) -> StowageResult<Invoice> {
        if self.booking_reference.trim().is_empty() {
            return Err(ValidationError::RequiredFieldMissing {
                field: "booking_reference".to_string(),
            }
            .into());
        }
        if self.quotes.is_empty() {
            return Err(ValidationError::RequiredFieldMissing {
                field: "quotes".to_string(),
            }
            .into());
        }

        let mut lines = Vec::new();
        let mut subtotal = Decimal::ZERO;
        let mut discount_total = Decimal::ZERO;

        for quote in &self.quotes {
            if quote.currency != self.config.currency {
                return Err(ValidationError::InvalidValue {
                    field: "quote.currency".to_string(),
                    reason: format!(
                        "expected {}, got {}",
                        self.config.currency, quote.currency
                    ),
                }
                .into());
            }

            subtotal = subtotal
                .checked_add(quote.base_amount)
                .ok_or(PricingError::Overflow { stage: "subtotal" })?;
            discount_total = discount_total
                .checked_add(quote.discount_total())
                .ok_or(PricingError::Overflow { stage: "discounts" })?;

            lines.extend(quote_lines(quote));
        }

        let taxable_amount = subtotal - discount_total;
        let tax_amount = taxable_amount
            .checked_mul(self.config.tax_rate_percent / Decimal::ONE_HUNDRED)
            .map(round_currency)
            .ok_or(PricingError::Overflow { stage: "tax" })?;

        let issued_at = self.issued_at.unwrap_or_else(Utc::now);
        let due_at = TimeDelta::try_days(i64::from(self.config.payment_terms_days))
            .and_then(|terms| issued_at.checked_add_signed(terms))
            .ok_or(PricingError::Overflow { stage: "due date" })?;

        let invoice = Invoice {
            invoice_id: Uuid::now_v7(),
            booking_reference: self.booking_reference,
            issued_at,
            due_at,
            currency: self.config.currency.clone(),
            lines,
            subtotal,
            discount_total,
            taxable_amount,
            tax_rate_percent: self.config.tax_rate_percent,
            tax_amount,
            total: taxable_amount + tax_amount,
        };

        tracing::info!(
            invoice_id = %invoice.invoice_id,
            booking_reference = %invoice.booking_reference,
            total = %invoice.total,
            currency = %invoice.currency,
            "Invoice generated"
        );

        Ok(invoice)
    }
}

fn quote_lines(quote: &Quote) -> Vec<InvoiceLine> {
    let mut lines = vec![InvoiceLine {
        kind: LineKind::Charge,
        description: format!(
            "{} {} x {} days @ {} {}/day",
            quote.quantity, quote.unit, quote.billed_days, quote.rate, quote.currency
        ),
        quantity: quote.quantity,
        amount: quote.base_amount,
    }];

    if !quote.volume_discount_amount.is_zero() {
        lines.push(InvoiceLine {
            kind: LineKind::VolumeDiscount,
            description: format!("Volume discount ({}%)", quote.volume_discount_percent),
            quantity: Decimal::ONE,
            amount: -quote.volume_discount_amount,
        });
    }

    if !quote.tier_discount_amount.is_zero() {
        lines.push(InvoiceLine {
            kind: LineKind::MembershipDiscount,
            description: format!(
                "{} membership discount ({}%)",
                quote.tier, quote.tier_discount_percent
            ),
            quantity: Decimal::ONE,
            amount: -quote.tier_discount_amount,
        });
    }

    lines
}
