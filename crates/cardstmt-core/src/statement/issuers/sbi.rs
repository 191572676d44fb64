use super::IssuerSpec;
use crate::statement::rules::RuleSpec;

pub const SPEC: IssuerSpec = IssuerSpec {
    name: "SBI Card",
    id: "sbi",
    keywords: &["sbi card", "sbi credit card", "state bank of india", "www.sbicard.com"],
    card_holder: &[
        RuleSpec::group(r"Card\s*Holder(?:\s+Name)?[:\s]+([A-Z][A-Z\s]+?)(?:\n|\bCard\b|\bNumber\b|[^A-Za-z\s]|$)"),
        RuleSpec::group(r"Name\s+on\s+Card[:\s]+([A-Z][A-Z\s]+?)(?:\n|\bCard\b|\bNumber\b|[^A-Za-z\s]|$)"),
        RuleSpec::group(r"Card\s+Member[:\s]+([A-Z][A-Z\s]+?)(?:\n|\bCard\b|[^A-Za-z\s]|$)"),
        RuleSpec::group(r"Customer\s+Name[:\s]+([A-Z][A-Z\s]+?)(?:\n|\bCard\b|[^A-Za-z\s]|$)"),
        RuleSpec::group(r"\bDear\s+([A-Z][A-Z\s]+?)(?:\n|[^A-Za-z\s]|$)"),
    ],
    last_4_digits: &[
        RuleSpec::group(r"Card\s+(?:Number|No\.?)[:\s]+(?:[X*]+[\s-]*)*(\d{4})\b"),
        RuleSpec::group(r"(?:[X*]{4}[\s-]*){3}(\d{4})\b"),
        RuleSpec::group(r"\bending\s+(?:with\s+|in\s+)?(\d{4})\b"),
    ],
    billing_cycle: &[
        RuleSpec::group(
            r"Billing\s+(?:Cycle|Period)[:\s]+(\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4}\s*(?:-|–|to)\s*\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4})",
        ),
        RuleSpec::group(
            r"Statement\s+Period[:\s]+(\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4}\s*(?:-|–|to)\s*\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4})",
        ),
        RuleSpec::group(r"(\d{1,2}\s+[A-Za-z]{3,9}\s+\d{4}\s*[-–]+\s*\d{1,2}\s+[A-Za-z]{3,9}\s+\d{4})"),
        RuleSpec::range(r"From[:\s]+(\d{1,2}[/-]\d{1,2}[/-]\d{4})\s+To[:\s]+(\d{1,2}[/-]\d{1,2}[/-]\d{4})"),
        RuleSpec::range(r"(\d{1,2}[/-]\d{1,2}[/-]\d{4})\s+(?:to|-)\s+(\d{1,2}[/-]\d{1,2}[/-]\d{4})"),
    ],
    payment_due_date: &[
        RuleSpec::group(r"Payment\s+Due\s+Date[:\s]+(\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4})"),
        RuleSpec::group(r"Due\s+Date[:\s]+(\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4})"),
        RuleSpec::group(r"Pay\s+by[:\s]+(\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4})"),
        RuleSpec::group(r"Due\s+Date[:\s]+(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})"),
    ],
    total_amount_due: &[
        RuleSpec::group(r"Total\s+Amount\s+Due[:\s]+(?:Rs\.?|INR|₹)?\s*([\d,]+(?:\.\d+)?)"),
        RuleSpec::group(r"Total\s+Outstanding[:\s]+(?:Rs\.?|INR|₹)?\s*([\d,]+(?:\.\d+)?)"),
        RuleSpec::group(r"Amount\s+Due[:\s]+(?:Rs\.?|INR|₹)?\s*([\d,]+(?:\.\d+)?)"),
        RuleSpec::group(r"Amount\s+Payable[:\s]+(?:Rs\.?|INR|₹)?\s*([\d,]+(?:\.\d+)?)"),
    ],
};
