use super::IssuerSpec;
use crate::statement::rules::RuleSpec;

pub const SPEC: IssuerSpec = IssuerSpec {
    name: "HDFC Bank",
    id: "hdfc",
    keywords: &["hdfc bank", "hdfc credit card", "www.hdfcbank.com"],
    card_holder: &[
        RuleSpec::group(r"Card\s*holder\s+Name\s*:\s*([A-Z][A-Za-z\s]+?)(?:\n|\bName:|\bAddress:|\bFor\b|[^A-Za-z\s]|$)"),
        RuleSpec::group(r"Name\s+on\s+Card[:\s]+([A-Z][A-Z\s]+?)(?:\n|\bCard\b|\bNumber\b|[^A-Za-z\s]|$)"),
        RuleSpec::group(r"Card\s*Holder[:\s]+([A-Z][A-Z\s]+?)(?:\n|\bCard\b|\bNumber\b|[^A-Za-z\s]|$)"),
        RuleSpec::group(r"Primary\s+Member[:\s]+([A-Z][A-Z\s]+?)(?:\n|\bCard\b|\bNumber\b|[^A-Za-z\s]|$)"),
        RuleSpec::group(r"Customer\s+Name[:\s]+([A-Z][A-Z\s]+?)(?:\n|\bCard\b|\bNumber\b|[^A-Za-z\s]|$)"),
        RuleSpec::group(r"Account\s+Holder[:\s]+([A-Z][A-Z\s]+?)(?:\n|\bCard\b|\bNumber\b|[^A-Za-z\s]|$)"),
        RuleSpec::group(r"\bDear\s+([A-Z][A-Z\s]+?)(?:\n|[^A-Za-z\s]|$)"),
        RuleSpec::group(r"\bM(?:rs|r|s)\.?\s+([A-Z][A-Z\s]+?)(?:\n|[^A-Za-z\s]|$)"),
    ],
    last_4_digits: &[
        RuleSpec::group(r"\b(\d{4}\s+\d{4}\s+\d{4}\s+\d{4})\b"),
        RuleSpec::group(r"Card\s+(?:Number|No\.?|ending)[:\s]+(?:[X*]+\s*)*(\d{4})\b"),
        RuleSpec::group(r"Card\s+No\.?\s*[:\s]*[X*]+(\d{4})\b"),
        RuleSpec::group(r"(?:[X*]{4}[\s-]*){3}(\d{4})\b"),
        RuleSpec::group(r"\bending\s+(?:with\s+|in\s+)?(\d{4})\b"),
        RuleSpec::group(r"Card:\s*[X*]+(\d{4})\b"),
        RuleSpec::group(r"Card\s+[X*]{4,}\s*(\d{4})\b"),
    ],
    billing_cycle: &[
        RuleSpec::range(r"Opening/Closing\s+Date\s+(\d{1,2}/\d{1,2}/\d{2,4})\s*[-–]\s*(\d{1,2}/\d{1,2}/\d{2,4})"),
        RuleSpec::group(
            r"Statement\s+Period[:\s]+(\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4}\s*(?:-|–|to)\s*\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4})",
        ),
        RuleSpec::group(
            r"Billing\s+(?:Cycle|Period)[:\s]+(\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4}\s*(?:-|–|to)\s*\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4})",
        ),
        RuleSpec::group(
            r"Statement\s+Date[:\s]+(\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4}\s*(?:-|–|to)\s*\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4})",
        ),
        RuleSpec::group(r"(\d{1,2}\s+[A-Za-z]{3,9}\s+\d{4}\s*[-–]+\s*\d{1,2}\s+[A-Za-z]{3,9}\s+\d{4})"),
        RuleSpec::range(r"From[:\s]+(\d{1,2}[/-]\d{1,2}[/-]\d{4})\s+To[:\s]+(\d{1,2}[/-]\d{1,2}[/-]\d{4})"),
        RuleSpec::range(r"(\d{1,2}[/-]\d{1,2}[/-]\d{4})\s+(?:to|-)\s+(\d{1,2}[/-]\d{1,2}[/-]\d{4})"),
    ],
    payment_due_date: &[
        RuleSpec::group(r"Payment\s+Due\s+Date\s*:\s*(\d{1,2}/\d{1,2}/\d{4})"),
        RuleSpec::group(r"Payment\s+Due\s+Date[:\s]+(\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4})"),
        RuleSpec::group(r"Due\s+Date[:\s]+(\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4})"),
        RuleSpec::group(r"Pay\s+by[:\s]+(\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4})"),
        RuleSpec::group(r"Payment\s+Due[:\s]+(\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4})"),
        RuleSpec::group(r"Due\s+on[:\s]+(\d{1,2}\s+[A-Za-z]{3,9},?\s+\d{4})"),
        RuleSpec::group(r"Payment\s+Due\s+Date[:\s]+(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})"),
        RuleSpec::group(r"Due\s+Date[:\s]+(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})"),
        RuleSpec::group(r"Pay\s+by[:\s]+(\d{1,2}[/-]\d{1,2}[/-]\d{2,4})"),
    ],
    total_amount_due: &[
        RuleSpec::group(r"New\s+Balance[:\s]+(?:Rs\.?|INR|₹|\$)?\s*([\d,]+(?:\.\d+)?)"),
        RuleSpec::group(r"Total\s+Balance\s*:\s*(?:Rs\.?|INR|₹|\$)?\s*([\d,]+(?:\.\d+)?)"),
        RuleSpec::group(r"Total\s+Amount\s+Due[:\s]+(?:Rs\.?|INR|₹|\$)?\s*([\d,]+(?:\.\d+)?)"),
        RuleSpec::group(r"Total\s+Due[:\s]+(?:Rs\.?|INR|₹|\$)?\s*([\d,]+(?:\.\d+)?)"),
        RuleSpec::group(r"Amount\s+Due[:\s]+(?:Rs\.?|INR|₹|\$)?\s*([\d,]+(?:\.\d+)?)"),
        RuleSpec::group(r"Total\s+Outstanding[:\s]+(?:Rs\.?|INR|₹|\$)?\s*([\d,]+(?:\.\d+)?)"),
        RuleSpec::group(r"Outstanding\s+Amount[:\s]+(?:Rs\.?|INR|₹|\$)?\s*([\d,]+(?:\.\d+)?)"),
        RuleSpec::group(r"Amount\s+Payable[:\s]+(?:Rs\.?|INR|₹|\$)?\s*([\d,]+(?:\.\d+)?)"),
        RuleSpec::group(r"(?:Rs\.?|INR|₹|\$)\s*([\d,]+(?:\.\d+)?)\s+Total\s+(?:Amount\s+)?Due"),
        RuleSpec::group(r"(?:Rs\.?|INR|₹|\$)\s*([\d,]+(?:\.\d+)?)\s+(?:is\s+)?(?:the\s+)?Total"),
    ],
};
