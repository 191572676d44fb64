use super::IssuerSpec;
use crate::statement::rules::RuleSpec;

pub const SPEC: IssuerSpec = IssuerSpec {
    name: "American Express",
    id: "amex",
    keywords: &["american express", "amex", "www.americanexpress.com"],
    card_holder: &[
        RuleSpec::group(r"Card\s+(?:Member|Holder)[:\s]+([A-Z][A-Z\s]+?)(?:\n|\bCard\b|[^A-Za-z\s]|$)"),
        RuleSpec::group(r"\bDear\s+([A-Z][A-Z\s]+?)(?:\n|[^A-Za-z\s]|$)"),
        RuleSpec::group(r"Account\s+Holder[:\s]+([A-Z][A-Z\s]+?)(?:\n|[^A-Za-z\s]|$)"),
    ],
    last_4_digits: &[
        RuleSpec::group(r"Card\s+(?:Number|No\.?)[:\s]+(?:[X*]+[\s-]*)*(\d{4,5})\b"),
        RuleSpec::group(r"[X*]{11}(\d{4})\b"),
        RuleSpec::group(r"Account\s+ending[:\s]+(?:in\s+)?(\d{4,5})\b"),
    ],
    billing_cycle: &[
        RuleSpec::group(r"Statement\s+Period[:\s]+(\d{1,2}\s+[A-Za-z]{3}\s+\d{4}\s*(?:-|–|to)\s*\d{1,2}\s+[A-Za-z]{3}\s+\d{4})"),
        RuleSpec::group(r"(\d{1,2}\s+[A-Za-z]{3}\s+\d{4}\s*[-–]+\s*\d{1,2}\s+[A-Za-z]{3}\s+\d{4})"),
    ],
    payment_due_date: &[
        RuleSpec::group(r"Payment\s+Due[:\s]+(\d{1,2}\s+[A-Za-z]{3}\s+\d{4})"),
        RuleSpec::group(r"Due\s+Date[:\s]+(\d{1,2}\s+[A-Za-z]{3}\s+\d{4})"),
    ],
    total_amount_due: &[
        RuleSpec::group(r"Total\s+(?:Amount\s+)?Due[:\s]+(?:Rs\.?|INR|₹)\s*([\d,]+(?:\.\d+)?)"),
        RuleSpec::group(r"Amount\s+Due[:\s]+(?:Rs\.?|INR|₹)\s*([\d,]+(?:\.\d+)?)"),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statement::IssuerProfile;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_account_ending_layout() {
        let fields = IssuerProfile::from_spec(&SPEC).unwrap().extract(
            "American Express Statement\n\
             Card Member: AYUSH KARANI\n\
             Account ending: 3456\n\
             Statement Period: 01 Sep 2025 - 30 Sep 2025\n\
             Payment Due: 20 Oct 2025\n\
             Total Amount Due: Rs. 45,000.00\n",
        );

        assert_eq!(fields.card_holder.as_deref(), Some("AYUSH KARANI"));
        assert_eq!(fields.last_4_digits.as_deref(), Some("3456"));
        assert_eq!(fields.billing_cycle.as_deref(), Some("01 Sep 2025 - 30 Sep 2025"));
        assert_eq!(fields.payment_due_date.as_deref(), Some("20 Oct 2025"));
        assert_eq!(fields.total_amount_due.as_deref(), Some("45,000.00"));
    }

    #[test]
    fn test_fifteen_digit_card_keeps_last_four() {
        let fields = IssuerProfile::from_spec(&SPEC)
            .unwrap()
            .extract("Card Number: XXXX XXXXXX X1005\nxxxxxxxxxxx2008\n");

        assert_eq!(fields.last_4_digits.as_deref(), Some("1005"));
    }
}
