//! End-to-end extraction over statement text as a PDF text layer yields it.

use std::sync::Arc;
use std::thread;

use cardstmt_core::{
    Capture, ExtractionResult, Field, FieldSet, IssuerProfile, IssuerRegistry, Normalizer, StatementConfig,
    StatementError, StatementParser, UNKNOWN_ISSUER,
};
use pretty_assertions::assert_eq;
use serde_json::json;

const HDFC: &str = "
    HDFC Bank Credit Card Statement
    Name on Card: AYUSH KARANI
    Card Number: XXXX XXXX XXXX 4581
    Statement Period: 01 Sep 2025 - 30 Sep 2025
    Payment Due Date: 15 Oct 2025
    Total Amount Due: Rs. 14,820.00
    ";

const ICICI: &str = "
    ICICI Bank Credit Card Statement
    Card Member: AYUSH KARANI
    Card Number: XXXX XXXX XXXX 1234
    Statement Period: 05 Sep 2025 - 04 Oct 2025
    Payment Due Date: 20 Oct 2025
    Total Amount Due: Rs. 25,500.00
    ";

const SBI: &str = "
    SBI Card Statement
    Card Holder: AYUSH KARANI
    Card Number: XXXX XXXX XXXX 5678
    Billing Cycle: 10 Sep 2025 - 09 Oct 2025
    Due Date: 25 Oct 2025
    Total Amount Due: Rs. 18,200.00
    ";

const AXIS: &str = "
    Axis Bank Credit Card Statement
    Customer Name: AYUSH KARANI
    Card Number: XXXX XXXX XXXX 9012
    Statement Period: 15 Sep 2025 - 14 Oct 2025
    Payment Due Date: 30 Oct 2025
    Total Amount Due: Rs. 32,450.00
    ";

const AMEX: &str = "
    American Express Statement
    Card Member: AYUSH KARANI
    Account ending: 3456
    Statement Period: 01 Sep 2025 - 30 Sep 2025
    Payment Due: 20 Oct 2025
    Total Amount Due: Rs. 45,000.00
    ";

fn fields(values: [Option<&str>; 5]) -> FieldSet {
    let mut set = FieldSet::default();
    for (field, value) in Field::ALL.into_iter().zip(values) {
        set.set(field, value.map(str::to_string));
    }
    set
}

fn without_line(text: &str, needle: &str) -> String {
    text.lines()
        .filter(|line| !line.contains(needle))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn test_hdfc_statement() {
    let result = StatementParser::default().parse(HDFC);

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "issuer": "HDFC Bank",
            "card_holder": "AYUSH KARANI",
            "last_4_digits": "4581",
            "billing_cycle": "01 Sep 2025 - 30 Sep 2025",
            "payment_due_date": "15 Oct 2025",
            "total_amount_due": "14,820.00",
        })
    );
}

#[test]
fn test_missing_line_only_clears_its_field() {
    let parser = StatementParser::default();
    let full = parser.parse(HDFC);

    let result = parser.parse(&without_line(HDFC, "Name on Card"));

    assert_eq!(result.issuer, "HDFC Bank");
    assert_eq!(result.fields.card_holder, None);
    assert_eq!(result.missing_fields(), vec![Field::CardHolder]);
    for field in Field::ALL.into_iter().skip(1) {
        assert_eq!(result.fields.get(field), full.fields.get(field));
    }
}

#[test]
fn test_empty_text_is_unknown() {
    let result = StatementParser::default().parse("");

    assert_eq!(result, ExtractionResult::unknown());
    assert_eq!(result.issuer, UNKNOWN_ISSUER);
    assert!(result.fields.is_empty());
}

#[test]
fn test_unregistered_bank_is_unknown() {
    let parser = StatementParser::default();

    assert_eq!(parser.parse("Kotak Mahindra Bank"), ExtractionResult::unknown());

    let lookalike = HDFC.replace("HDFC Bank", "Kotak Mahindra Bank");
    assert_eq!(parser.parse(&lookalike), ExtractionResult::unknown());
}

#[test]
fn test_numeric_due_date_falls_back() {
    let text = HDFC.replace("Payment Due Date: 15 Oct 2025", "Due Date: 15/10/2025");

    let result = StatementParser::default().parse(&text);

    assert_eq!(result.fields.payment_due_date.as_deref(), Some("15/10/2025"));
    assert!(result.is_complete());
}

#[test]
fn test_every_builtin_issuer() {
    let parser = StatementParser::default();
    let cases = [
        (HDFC, "HDFC Bank", ["4581", "01 Sep 2025 - 30 Sep 2025", "15 Oct 2025", "14,820.00"]),
        (ICICI, "ICICI Bank", ["1234", "05 Sep 2025 - 04 Oct 2025", "20 Oct 2025", "25,500.00"]),
        (SBI, "SBI Card", ["5678", "10 Sep 2025 - 09 Oct 2025", "25 Oct 2025", "18,200.00"]),
        (AXIS, "Axis Bank", ["9012", "15 Sep 2025 - 14 Oct 2025", "30 Oct 2025", "32,450.00"]),
        (AMEX, "American Express", ["3456", "01 Sep 2025 - 30 Sep 2025", "20 Oct 2025", "45,000.00"]),
    ];

    for (text, issuer, [last4, cycle, due, amount]) in cases {
        let result = parser.parse(text);

        assert_eq!(result.issuer, issuer);
        assert_eq!(
            result.fields,
            fields([Some("AYUSH KARANI"), Some(last4), Some(cycle), Some(due), Some(amount)]),
            "{issuer}"
        );
    }
}

#[test]
fn test_extraction_is_deterministic() {
    let parser = StatementParser::default();

    for text in [HDFC, ICICI, SBI, AXIS, AMEX, "", "noise"] {
        let first = serde_json::to_string(&parser.parse(text)).unwrap();
        let second = serde_json::to_string(&parser.parse(text)).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_concurrent_parsing_agrees() {
    let parser = Arc::new(StatementParser::default());
    let expected: Vec<_> = [HDFC, ICICI, SBI, AXIS, AMEX].iter().map(|t| parser.parse(t)).collect();

    thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| {
                let parser = Arc::clone(&parser);
                scope.spawn(move || [HDFC, ICICI, SBI, AXIS, AMEX].map(|t| parser.parse(t)))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap().to_vec(), expected);
        }
    });
}

#[test]
fn test_first_registered_issuer_wins() {
    let both = format!("{AXIS}\n    Payments accepted at any HDFC Bank branch\n");

    assert_eq!(StatementParser::default().parse(&both).issuer, "HDFC Bank");

    let config = StatementConfig::from_json(r#"{"registry": {"issuers": ["axis", "hdfc"]}}"#).unwrap();
    let axis_first = StatementParser::from_config(&config).unwrap();
    let result = axis_first.parse(&both);

    assert_eq!(result.issuer, "Axis Bank");
    assert!(result.is_complete());
}

fn assert_fields_independent(text: &str, lines: [(Field, &str); 5]) {
    let parser = StatementParser::default();
    let full = parser.parse(text);
    assert!(full.is_complete());

    for (removed, needle) in lines {
        let result = parser.parse(&without_line(text, needle));

        assert_eq!(result.fields.get(removed), None, "{removed} should be absent");
        for field in Field::ALL.into_iter().filter(|f| *f != removed) {
            assert_eq!(result.fields.get(field), full.fields.get(field), "{field} changed when {removed} was removed");
        }
    }
}

#[test]
fn test_fields_are_independent() {
    assert_fields_independent(
        HDFC,
        [
            (Field::CardHolder, "Name on Card"),
            (Field::LastFourDigits, "Card Number"),
            (Field::BillingCycle, "Statement Period"),
            (Field::PaymentDueDate, "Payment Due Date"),
            (Field::TotalAmountDue, "Total Amount Due"),
        ],
    );

    // Name directly above the last line, so removing that line leaves the
    // name at the very end of the text.
    let name_before_amount = "HDFC Bank Credit Card Statement\n\
                              Card Number: XXXX XXXX XXXX 4581\n\
                              Statement Period: 01 Sep 2025 - 30 Sep 2025\n\
                              Payment Due Date: 15 Oct 2025\n\
                              Name on Card: AYUSH KARANI\n\
                              Total Amount Due: Rs. 14,820.00";
    assert_fields_independent(
        name_before_amount,
        [
            (Field::CardHolder, "Name on Card"),
            (Field::LastFourDigits, "Card Number"),
            (Field::BillingCycle, "Statement Period"),
            (Field::PaymentDueDate, "Payment Due Date"),
            (Field::TotalAmountDue, "Total Amount Due"),
        ],
    );
}

#[test]
fn test_single_line_statement() {
    let text = "HDFC Bank ... Name on Card: AYUSH KARANI ... Card Number: XXXX XXXX XXXX 4581 ... \
                Statement Period: 01 Sep 2025 - 30 Sep 2025 ... Payment Due Date: 15 Oct 2025 ... \
                Total Amount Due: Rs. 14,820.00";

    let result = StatementParser::default().parse(text);

    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "issuer": "HDFC Bank",
            "card_holder": "AYUSH KARANI",
            "last_4_digits": "4581",
            "billing_cycle": "01 Sep 2025 - 30 Sep 2025",
            "payment_due_date": "15 Oct 2025",
            "total_amount_due": "14,820.00",
        })
    );
}

#[test]
fn test_every_builtin_issuer_on_one_line() {
    let parser = StatementParser::default();

    for text in [HDFC, ICICI, SBI, AXIS, AMEX] {
        let flattened = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect::<Vec<_>>()
            .join(" ... ");

        assert_eq!(parser.parse(&flattened), parser.parse(text), "{flattened}");
    }
}

#[test]
fn test_name_ends_at_punctuation() {
    let text = HDFC.replace("Name on Card: AYUSH KARANI", "Name on Card: AYUSH KARANI; Member since 2019");

    let result = StatementParser::default().parse(&text);

    assert_eq!(result.fields.card_holder.as_deref(), Some("AYUSH KARANI"));
}

#[test]
fn test_corrupted_value_keeps_other_fields() {
    let parser = StatementParser::default();
    let full = parser.parse(HDFC);

    let result = parser.parse(&HDFC.replace("Rs. 14,820.00", "Rs. --"));

    assert_eq!(result.fields.total_amount_due, None);
    assert_eq!(result.extracted_count(), 4);
    assert_eq!(result.fields.card_holder, full.fields.card_holder);
}

#[test]
fn test_whitespace_in_names_is_normalized() {
    let text = HDFC.replace("AYUSH KARANI", "AYUSH   KARANI");

    let result = StatementParser::default().parse(&text);

    assert_eq!(result.fields.card_holder.as_deref(), Some("AYUSH KARANI"));
}

fn exploding(_: &str) -> Option<String> {
    panic!("normalizer fault")
}

fn mock_registry() -> IssuerRegistry {
    let mut faulty = IssuerProfile::builder("Faulty Bank")
        .detector(|text: &str| text.starts_with("FAULTY"))
        .rule_with(Field::CardHolder, r"Holder:\s*(\w+)", Capture::Group(1), Normalizer::Custom(exploding))
        .unwrap();
    for field in Field::ALL.into_iter().skip(1) {
        faulty = faulty.rule(field, r"Value:\s*(\S+)").unwrap();
    }

    let mock = IssuerProfile::builder("Mock Bank")
        .keywords(["mock bank"])
        .rule(Field::CardHolder, r"Holder:\s*([A-Z ]+)\n")
        .unwrap()
        .rule(Field::LastFourDigits, r"Card:\s*(\d+)")
        .unwrap()
        .rule_with(
            Field::BillingCycle,
            r"From (\S+) until (\S+)",
            Capture::Range(1, 2),
            Normalizer::Date,
        )
        .unwrap()
        .rule(Field::PaymentDueDate, r"Due:\s*(\S+)")
        .unwrap()
        .rule(Field::TotalAmountDue, r"Owed:\s*(\S+)")
        .unwrap();

    IssuerRegistry::builder()
        .register(faulty.build().unwrap())
        .unwrap()
        .register(mock.build().unwrap())
        .unwrap()
        .build()
        .unwrap()
}

#[test]
fn test_mock_registry() {
    let parser = StatementParser::new(Arc::new(mock_registry()));

    let result = parser.parse("Mock Bank\nHolder: JANE DOE\nCard: 123456789\nFrom 1/9 until 30/9\nDue: 15/10\nOwed: $12.50\n");

    assert_eq!(result.issuer, "Mock Bank");
    assert_eq!(
        result.fields,
        fields([Some("JANE DOE"), Some("6789"), Some("1/9 - 30/9"), Some("15/10"), Some("12.50")])
    );
    assert!(parser.parse(HDFC).is_unknown());
}

#[test]
fn test_faulting_rule_leaves_only_its_field_absent() {
    let parser = StatementParser::new(Arc::new(mock_registry()));

    let result = parser.parse("FAULTY\nHolder: JANE\nValue: 4242\n");

    assert_eq!(result.issuer, "Faulty Bank");
    assert_eq!(result.fields.card_holder, None);
    assert_eq!(result.fields.last_4_digits.as_deref(), Some("4242"));
    assert_eq!(result.fields.payment_due_date.as_deref(), Some("4242"));
    assert_eq!(result.fields.total_amount_due.as_deref(), Some("4242"));
}

#[test]
fn test_format_drift_is_reported() {
    let result = StatementParser::default().parse("HDFC Bank\nA redesigned statement with no familiar labels");

    assert_eq!(result.issuer, "HDFC Bank");
    assert!(result.is_format_drift());
    assert_eq!(result.missing_fields(), Field::ALL.to_vec());
}

#[test]
fn test_unknown_config_issuer_is_rejected() {
    let config = StatementConfig::from_json(r#"{"registry": {"issuers": ["hdfc", "kotak"]}}"#).unwrap();

    let err = StatementParser::from_config(&config).unwrap_err();

    assert!(matches!(err, StatementError::UnknownIssuer(name) if name == "kotak"));
}
