use rent_buy_calculator::chart::{BarKind, ChartData};

#[test]
fn larger_cost_fills_the_chart() {
    let chart = ChartData::from_costs(240_000.0, 154_342.93);
    assert_eq!(chart.rent.proportion, 1.0);
    assert_eq!(chart.rent.percent(), 100);
    assert!((chart.buy.proportion - 154_342.93 / 240_000.0).abs() < 1e-12);
    assert_eq!(chart.buy.percent(), 64);
}

#[test]
fn buy_side_can_be_the_taller_bar() {
    let chart = ChartData::from_costs(60_000.0, 120_000.0);
    assert_eq!(chart.buy.proportion, 1.0);
    assert_eq!(chart.rent.proportion, 0.5);
    let kinds: Vec<BarKind> = chart.bars().iter().map(|b| b.kind).collect();
    assert_eq!(kinds, vec![BarKind::Rent, BarKind::Buy]);
}

#[test]
fn equal_costs_give_equal_bars() {
    let chart = ChartData::from_costs(1000.0, 1000.0);
    assert_eq!(chart.rent.proportion, 1.0);
    assert_eq!(chart.buy.proportion, 1.0);
}

#[test]
fn negative_cost_keeps_value_but_draws_nothing() {
    let chart = ChartData::from_costs(240_000.0, -50_000.0);
    assert_eq!(chart.buy.value, -50_000.0);
    assert_eq!(chart.buy.proportion, 0.0);
    assert_eq!(chart.buy.percent(), 0);
    assert_eq!(chart.rent.proportion, 1.0);
}

#[test]
fn nothing_positive_means_empty_chart() {
    for (rent, buy) in [(0.0, 0.0), (0.0, -10.0), (-5.0, -10.0)] {
        let chart = ChartData::from_costs(rent, buy);
        assert_eq!(chart.rent.proportion, 0.0, "rent {rent} buy {buy}");
        assert_eq!(chart.buy.proportion, 0.0, "rent {rent} buy {buy}");
    }
}
