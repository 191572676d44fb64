//! Built-in issuer tables.
//!
//! Each issuer is plain data: a display name, a short id, detection
//! keywords and one ordered rule list per field. Rules are listed from most
//! to least specific.

mod amex;
mod axis;
mod hdfc;
mod icici;
mod sbi;

use crate::models::statement::Field;

use super::rules::RuleSpec;

/// Static description of one issuer.
#[derive(Debug, Clone, Copy)]
pub struct IssuerSpec {
    /// Display name, reported as `issuer`.
    pub name: &'static str,
    /// Short id accepted in configuration.
    pub id: &'static str,
    /// Case-insensitive detection keywords.
    pub keywords: &'static [&'static str],
    pub card_holder: &'static [RuleSpec],
    pub last_4_digits: &'static [RuleSpec],
    pub billing_cycle: &'static [RuleSpec],
    pub payment_due_date: &'static [RuleSpec],
    pub total_amount_due: &'static [RuleSpec],
}

impl IssuerSpec {
    /// Rules for one field in priority order.
    pub fn rules(&self, field: Field) -> &'static [RuleSpec] {
        match field {
            Field::CardHolder => self.card_holder,
            Field::LastFourDigits => self.last_4_digits,
            Field::BillingCycle => self.billing_cycle,
            Field::PaymentDueDate => self.payment_due_date,
            Field::TotalAmountDue => self.total_amount_due,
        }
    }

    /// Matches the display name or id, ignoring case and surrounding space.
    pub fn is_named(&self, name: &str) -> bool {
        let name = name.trim();
        self.name.eq_ignore_ascii_case(name) || self.id.eq_ignore_ascii_case(name)
    }
}

/// All built-in issuers in default detection order.
pub static BUILTIN: [IssuerSpec; 5] = [hdfc::SPEC, icici::SPEC, sbi::SPEC, axis::SPEC, amex::SPEC];

/// Look up a built-in issuer by display name or id.
pub fn find(name: &str) -> Option<&'static IssuerSpec> {
    BUILTIN.iter().find(|spec| spec.is_named(name))
}
