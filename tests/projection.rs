//! 임대 vs 매수 계산 회귀 테스트. 기준값은 월별 상환 시뮬레이션으로 구한 값이다.
use rent_buy_calculator::housing::{
    amortization_schedule, buy_projection, compute_projection, monthly_payment,
    simulate_amortization, total_rent_cost, yearly_summary, ProjectionError, ProjectionInput,
    ProjectionWarning, Recommendation, MAX_YEARS,
};

fn assert_close(label: &str, actual: f64, expected: f64, rel_tol: f64) {
    let denom = expected.abs().max(1.0);
    let diff = (actual - expected).abs();
    assert!(
        diff <= rel_tol * denom,
        "{label} expected {expected:.6} got {actual:.6} (diff {diff:.6}, tol {rel_tol})"
    );
}

fn reference_input() -> ProjectionInput {
    ProjectionInput {
        monthly_rent: 2000.0,
        home_price: 500_000.0,
        down_payment_pct: 20.0,
        mortgage_rate: 5.0,
        amortization_years: 25,
        property_tax_rate: 1.0,
        appreciation_rate: 3.0,
        horizon_years: 10,
    }
}

#[test]
fn reference_example_matches_simulation() {
    let res = compute_projection(&reference_input()).expect("projection");
    assert_close("rent", res.total_rent_cost, 240_000.0, 1e-12);

    let buy = &res.buy;
    assert_close("down", buy.down_payment, 100_000.0, 1e-12);
    assert_close("mortgage", buy.mortgage_amount, 400_000.0, 1e-12);
    assert_close("payment", buy.monthly_payment, 2_338.360_166_031_920_5, 1e-9);
    assert_close("payments", buy.total_mortgage_payments, 280_603.219_923_830_5, 1e-9);
    assert_close("tax", buy.property_tax, 50_000.0, 1e-12);
    assert_close("future", buy.future_home_value, 671_958.189_672_061_1, 1e-9);
    assert_close("principal", buy.principal_repaid, 104_302.097_670_273_83, 1e-9);
    assert_close("balance", buy.remaining_balance, 295_697.902_329_726_2, 1e-9);
    assert_close("net", buy.net_cost, 154_342.932_581_495_52, 1e-9);

    assert_eq!(res.recommendation, Recommendation::Buy);
    assert!(res.warnings.is_empty());
}

#[test]
fn zero_rate_payment_is_plain_division() {
    assert_eq!(monthly_payment(270_000.0, 0.0, 30), 750.0);
    assert_eq!(monthly_payment(100_000.0, 0.0, 10), 100_000.0 / 120.0);
}

#[test]
fn zero_rate_principal_equals_payments() {
    let input = ProjectionInput {
        monthly_rent: 1000.0,
        home_price: 300_000.0,
        down_payment_pct: 10.0,
        mortgage_rate: 0.0,
        amortization_years: 30,
        property_tax_rate: 0.0,
        appreciation_rate: 0.0,
        horizon_years: 5,
    };
    let buy = buy_projection(&input);
    assert_close("payment", buy.monthly_payment, 750.0, 1e-12);
    assert_close("principal", buy.principal_repaid, buy.total_mortgage_payments, 1e-12);
    assert_close("net", buy.net_cost, buy.down_payment, 1e-9);
}

#[test]
fn rent_total_is_linear() {
    let base = total_rent_cost(2000.0, 10);
    assert_eq!(base, 240_000.0);
    assert_eq!(total_rent_cost(4000.0, 10), 2.0 * base);
    assert_eq!(total_rent_cost(2000.0, 20), 2.0 * base);
}

#[test]
fn principal_plus_balance_equals_loan() {
    for (rate, years, horizon) in [(5.0, 25, 10), (3.5, 30, 30), (7.25, 15, 20), (0.0, 10, 12)] {
        let p = monthly_payment(400_000.0, rate, years);
        let summary = simulate_amortization(400_000.0, rate, p, horizon * 12);
        assert_close(
            "loan",
            summary.principal_repaid + summary.remaining_balance,
            400_000.0,
            1e-9,
        );
    }
}

#[test]
fn loan_is_repaid_when_horizon_covers_term() {
    let mut input = reference_input();
    input.amortization_years = 5;
    let res = compute_projection(&input).expect("projection");
    assert!(res.buy.principal_repaid >= 400_000.0 * (1.0 - 1e-9));
    assert!(res.buy.remaining_balance <= 1e-6);
    assert_close(
        "loan",
        res.buy.principal_repaid + res.buy.remaining_balance,
        400_000.0,
        1e-9,
    );
    // 상환이 끝난 뒤에도 월 납입액은 분석 기간 전체에 합산된다.
    assert_close(
        "payments",
        res.buy.total_mortgage_payments,
        res.buy.monthly_payment * 120.0,
        1e-12,
    );
    assert!(res.warnings.contains(&ProjectionWarning::AmortizationShorterThanHorizon {
        amortization_years: 5,
        horizon_years: 10,
    }));
}

#[test]
fn net_cost_falls_as_appreciation_rises() {
    let mut input = reference_input();
    let mut previous = f64::INFINITY;
    for step in -10..=20 {
        input.appreciation_rate = f64::from(step) * 0.5;
        let net = compute_projection(&input).expect("projection").buy.net_cost;
        assert!(net < previous, "appreciation {} gave {net}", input.appreciation_rate);
        previous = net;
    }
}

#[test]
fn recommendation_uses_strict_comparison() {
    assert_eq!(Recommendation::from_costs(100.0, 200.0), Recommendation::Rent);
    assert_eq!(Recommendation::from_costs(200.0, 100.0), Recommendation::Buy);
    assert_eq!(Recommendation::from_costs(150.0, 150.0), Recommendation::Equal);
    assert_eq!(
        Recommendation::from_costs(150.0, 150.0 + f64::EPSILON * 256.0),
        Recommendation::Rent
    );
}

#[test]
fn high_rent_recommends_buying_and_low_rent_renting() {
    let mut input = reference_input();
    input.monthly_rent = 500.0;
    assert_eq!(
        compute_projection(&input).unwrap().recommendation,
        Recommendation::Rent
    );
    input.monthly_rent = 5000.0;
    assert_eq!(
        compute_projection(&input).unwrap().recommendation,
        Recommendation::Buy
    );
}

#[test]
fn strong_appreciation_flags_negative_net_cost() {
    let mut input = reference_input();
    input.appreciation_rate = 12.0;
    let res = compute_projection(&input).expect("projection");
    assert!(res.buy.net_cost < 0.0);
    assert!(res.warnings.contains(&ProjectionWarning::NegativeNetBuyCost));
    assert_eq!(res.chart().buy.proportion, 0.0);
    assert_eq!(res.chart().rent.percent(), 100);
}

#[test]
fn invalid_fields_are_rejected_before_computing() {
    let cases: Vec<(&str, Box<dyn Fn(&mut ProjectionInput)>)> = vec![
        ("monthly_rent", Box::new(|i| i.monthly_rent = 0.0)),
        ("monthly_rent", Box::new(|i| i.monthly_rent = f64::NAN)),
        ("home_price", Box::new(|i| i.home_price = -1.0)),
        ("down_payment_pct", Box::new(|i| i.down_payment_pct = 100.5)),
        ("down_payment_pct", Box::new(|i| i.down_payment_pct = -0.1)),
        ("mortgage_rate", Box::new(|i| i.mortgage_rate = -2.0)),
        ("amortization_years", Box::new(|i| i.amortization_years = 0)),
        ("property_tax_rate", Box::new(|i| i.property_tax_rate = f64::INFINITY)),
        ("appreciation_rate", Box::new(|i| i.appreciation_rate = -150.0)),
        ("horizon_years", Box::new(|i| i.horizon_years = 0)),
        ("amortization_years", Box::new(|i| i.amortization_years = MAX_YEARS + 1)),
        ("horizon_years", Box::new(|i| i.horizon_years = MAX_YEARS + 1)),
        ("horizon_years", Box::new(|i| i.horizon_years = u32::MAX)),
    ];
    for (field, mutate) in cases {
        let mut input = reference_input();
        mutate(&mut input);
        match compute_projection(&input) {
            Err(ProjectionError::InvalidInput { field: f, .. }) => assert_eq!(f, field),
            other => panic!("{field}: expected InvalidInput, got {other:?}"),
        }
    }
}

#[test]
fn boundary_values_are_accepted() {
    let mut input = reference_input();
    input.down_payment_pct = 100.0;
    let res = compute_projection(&input).expect("all cash");
    assert_eq!(res.buy.mortgage_amount, 0.0);
    assert_eq!(res.buy.monthly_payment, 0.0);
    assert_eq!(res.buy.principal_repaid, 0.0);

    input.down_payment_pct = 0.0;
    input.appreciation_rate = -100.0;
    let res = compute_projection(&input).expect("total loss");
    assert_eq!(res.buy.future_home_value, 0.0);
}

#[test]
fn overflowing_figures_are_degenerate() {
    let mut input = reference_input();
    input.mortgage_rate = 1e308;
    assert!(matches!(
        compute_projection(&input),
        Err(ProjectionError::DegenerateResult("monthly_payment"))
    ));

    let mut input = reference_input();
    input.appreciation_rate = 1e300;
    assert!(matches!(
        compute_projection(&input),
        Err(ProjectionError::DegenerateResult("future_home_value"))
    ));
}

#[test]
fn yearly_summary_adds_up_to_simulation() {
    let input = reference_input();
    let res = compute_projection(&input).expect("projection");
    let rows = amortization_schedule(
        res.buy.mortgage_amount,
        input.mortgage_rate,
        res.buy.monthly_payment,
        input.horizon_months(),
    );
    assert_eq!(rows.len(), 120);
    let years = yearly_summary(&rows);
    assert_eq!(years.len(), 10);
    let principal: f64 = years.iter().map(|y| y.principal).sum();
    assert_close("principal", principal, res.buy.principal_repaid, 1e-9);
    assert_close(
        "balance",
        years.last().unwrap().ending_balance,
        res.buy.remaining_balance,
        1e-12,
    );
    // 원리금균등: 원금 비중은 해마다 커진다.
    assert!(years.windows(2).all(|w| w[1].principal > w[0].principal));
}

#[test]
fn all_cash_purchase_over_longest_horizon() {
    let input = ProjectionInput {
        down_payment_pct: 100.0,
        appreciation_rate: 0.0,
        horizon_years: MAX_YEARS,
        ..reference_input()
    };
    let res = compute_projection(&input).expect("projection");
    assert_eq!(res.buy.principal_repaid, 0.0);
    assert_eq!(res.buy.remaining_balance, 0.0);
    assert_close("tax", res.buy.property_tax, 500_000.0, 1e-12);

    let too_long = ProjectionInput {
        horizon_years: 100_000_000,
        ..input
    };
    assert!(matches!(
        compute_projection(&too_long),
        Err(ProjectionError::InvalidInput { field: "horizon_years", .. })
    ));
}

#[test]
fn simulation_runs_without_storing_rows() {
    let summary = simulate_amortization(0.0, 5.0, 0.0, 24_000_000);
    assert_eq!(summary.months_simulated, 24_000_000);
    assert_eq!(summary.principal_repaid, 0.0);
    assert_eq!(summary.interest_paid, 0.0);
    assert_eq!(summary.remaining_balance, 0.0);

    let p = monthly_payment(400_000.0, 5.0, 25);
    let rows = amortization_schedule(400_000.0, 5.0, p, 120);
    let summary = simulate_amortization(400_000.0, 5.0, p, 120);
    let principal: f64 = rows.iter().map(|row| row.principal).sum();
    assert_eq!(summary.months_simulated as usize, rows.len());
    assert_eq!(summary.remaining_balance, rows.last().unwrap().balance);
    assert_close("principal", summary.principal_repaid, principal, 1e-12);
}
