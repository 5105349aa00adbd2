use debtwise_core::dti::ratio::debt_to_income;
use debtwise_core::dti::recommendation::{recommend_for_dti, DtiLevel};
use debtwise_core::dti::summary::{summarize_portfolio, PortfolioInput};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Ratio + classifier
// ===========================================================================

#[test]
fn test_dti_never_divides_by_zero() {
    assert_eq!(debt_to_income(dec!(12_000), Decimal::ZERO), Decimal::ZERO);
    assert_eq!(debt_to_income(Decimal::ZERO, Decimal::ZERO), Decimal::ZERO);
}

#[test]
fn test_every_ratio_lands_in_exactly_one_tier() {
    let grid = [
        (dec!(0), DtiLevel::Healthy),
        (dec!(20), DtiLevel::Healthy),
        (dec!(20.01), DtiLevel::Moderate),
        (dec!(35), DtiLevel::Moderate),
        (dec!(35.01), DtiLevel::Caution),
        (dec!(50), DtiLevel::Caution),
        (dec!(50.01), DtiLevel::Urgent),
        (dec!(250), DtiLevel::Urgent),
    ];
    for (dti, expected) in grid {
        assert_eq!(recommend_for_dti(dti).level, expected, "dti = {dti}");
    }
}

#[test]
fn test_suggestions_are_ordered_and_nonempty() {
    for dti in [dec!(10), dec!(30), dec!(45), dec!(80)] {
        let rec = recommend_for_dti(dti);
        assert!(!rec.suggestions.is_empty());
        assert!(!rec.message.is_empty());
    }
}

// ===========================================================================
// Portfolio summary, fed from host-style JSON documents
// ===========================================================================

fn sample_portfolio() -> PortfolioInput {
    serde_json::from_str(
        r#"{
            "debts": [
                {
                    "id": "66f0a1",
                    "name": "Car Loan",
                    "principal": 450000,
                    "current_balance": 380000,
                    "monthly_payment": 12000,
                    "apr": 9.5,
                    "status": "active",
                    "currency": "INR"
                },
                {
                    "id": "66f0a2",
                    "name": "Credit Card",
                    "principal": 80000,
                    "monthly_payment": 6000,
                    "apr": 36,
                    "status": "active"
                },
                {
                    "id": "66f0a3",
                    "name": "Education Loan",
                    "principal": 200000,
                    "monthly_payment": 0,
                    "apr": 7,
                    "status": "paid_off"
                }
            ],
            "monthly_income": 90000
        }"#,
    )
    .unwrap()
}

#[test]
fn test_summary_over_host_documents() {
    let input = sample_portfolio();
    let result = summarize_portfolio(&input).unwrap();
    let s = &result.result;

    // Principal sums include the paid-off loan
    assert_eq!(s.total_debt, dec!(730_000));
    assert_eq!(s.total_monthly_payment, dec!(18_000));
    // 18 000 / 90 000 = 20%, the healthy/moderate boundary
    assert_eq!(s.dti, dec!(20));
    assert_eq!(s.recommendation.level, DtiLevel::Healthy);
}

#[test]
fn test_missing_income_defaults_to_zero() {
    let input: PortfolioInput = serde_json::from_str(r#"{ "debts": [] }"#).unwrap();
    let result = summarize_portfolio(&input).unwrap();
    assert_eq!(result.result.dti, Decimal::ZERO);
    assert_eq!(result.result.recommendation.level, DtiLevel::Healthy);
}

#[test]
fn test_recommendation_serializes_snake_case() {
    let rec = recommend_for_dti(dec!(60));
    let json = serde_json::to_value(&rec).unwrap();
    assert_eq!(json["level"], "urgent");
}
