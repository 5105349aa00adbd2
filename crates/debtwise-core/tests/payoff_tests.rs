use chrono::NaiveDate;
use debtwise_core::projection::payoff::{
    project_payoff, PayoffInput, PayoffProjection, INSUFFICIENT_PAYMENT_WARNING,
};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn jan_15_2025() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 15).unwrap()
}

fn input(principal: Decimal, payment: Decimal, annual_rate: Decimal) -> PayoffInput {
    PayoffInput {
        principal,
        monthly_payment: payment,
        annual_rate,
        as_of: jan_15_2025(),
    }
}

// ===========================================================================
// Regression scenarios
// ===========================================================================

#[test]
fn test_aggressive_paydown_of_personal_loan() {
    // 50 000 at 18% APR with a 5 000 payment clears in 11 months
    let result = project_payoff(&input(dec!(50_000), dec!(5000), dec!(0.18))).unwrap();
    match result.result {
        PayoffProjection::PaidOff {
            months_to_payoff,
            total_interest,
            total_paid,
            projected_payoff_date,
        } => {
            assert_eq!(months_to_payoff, 11);
            // 11 full payments of 5 000
            assert_eq!(total_paid, dec!(55_000));
            assert_eq!(total_interest, dec!(5000));
            assert_eq!(
                projected_payoff_date,
                NaiveDate::from_ymd_opt(2025, 12, 15).unwrap()
            );
        }
        other => panic!("Expected PaidOff, got {other:?}"),
    }
    assert!(result.warnings.is_empty());
}

#[test]
fn test_multi_year_home_loan() {
    // 2 000 000 at 8.5% APR with a 25 000 payment is a ~10 year payoff
    let result = project_payoff(&input(dec!(2_000_000), dec!(25_000), dec!(0.085))).unwrap();
    match result.result {
        PayoffProjection::PaidOff {
            months_to_payoff,
            total_interest,
            total_paid,
            projected_payoff_date,
        } => {
            assert_eq!(months_to_payoff, 119);
            assert_eq!(total_paid, dec!(2_975_000));
            assert_eq!(total_interest, dec!(975_000));
            assert_eq!(
                projected_payoff_date,
                NaiveDate::from_ymd_opt(2034, 12, 15).unwrap()
            );
        }
        other => panic!("Expected PaidOff, got {other:?}"),
    }
}

#[test]
fn test_underwater_credit_card() {
    // 24% APR on 100 000 accrues 2 000 a month; a 500 payment never wins
    let result = project_payoff(&input(dec!(100_000), dec!(500), dec!(0.24))).unwrap();
    match result.result {
        PayoffProjection::NeverPaidOff {
            monthly_interest,
            warning,
        } => {
            assert_eq!(monthly_interest, dec!(2000));
            assert_eq!(warning, INSUFFICIENT_PAYMENT_WARNING);
        }
        other => panic!("Expected NeverPaidOff, got {other:?}"),
    }
}

// ===========================================================================
// Invariants
// ===========================================================================

#[test]
fn test_paid_equals_principal_plus_interest() {
    let cases = [
        (dec!(50_000), dec!(5000), dec!(0.18)),
        (dec!(2_000_000), dec!(25_000), dec!(0.085)),
        (dec!(1200), dec!(110), dec!(0.36)),
        (dec!(750), dec!(750), Decimal::ZERO),
    ];
    for (principal, payment, rate) in cases {
        let result = project_payoff(&input(principal, payment, rate)).unwrap();
        match result.result {
            PayoffProjection::PaidOff {
                total_interest,
                total_paid,
                ..
            } => {
                assert_eq!(total_paid - total_interest, principal);
            }
            other => panic!("Expected PaidOff for {principal}/{payment}/{rate}, got {other:?}"),
        }
    }
}

#[test]
fn test_interest_covering_payments_always_terminate() {
    // Just above the accrual threshold still converges (within the horizon
    // the payment share of principal compounds)
    let result = project_payoff(&input(dec!(10_000), dec!(105), dec!(0.12))).unwrap();
    match result.result {
        PayoffProjection::PaidOff {
            months_to_payoff, ..
        } => assert!(months_to_payoff > 0),
        PayoffProjection::HorizonExceeded {
            months_simulated, ..
        } => assert_eq!(months_simulated, 600),
        other => panic!("Expected a bounded simulation, got {other:?}"),
    }
}

#[test]
fn test_guard_boundary_is_inclusive() {
    // Payment exactly equal to the first accrual takes the non-payoff path
    let at_boundary = project_payoff(&input(dec!(10_000), dec!(100), dec!(0.12))).unwrap();
    assert!(matches!(
        at_boundary.result,
        PayoffProjection::NeverPaidOff { .. }
    ));

    // One paisa above it simulates
    let above = project_payoff(&input(dec!(10_000), dec!(100.01), dec!(0.12))).unwrap();
    assert!(!matches!(
        above.result,
        PayoffProjection::NeverPaidOff { .. }
    ));
}
