use rent_buy_calculator::chart::ChartData;
use rent_buy_calculator::housing::{compute_projection, ProjectionInput};
use rent_buy_calculator::i18n::Translator;
use rent_buy_calculator::report::{format_bar_chart, format_summary, format_yearly_schedule};

#[test]
fn summary_shows_rounded_totals_and_recommendation() {
    let tr = Translator::new("en");
    let input = ProjectionInput::default();
    let result = compute_projection(&input).expect("projection");
    let text = format_summary(&tr, "$", &input, &result);

    assert!(text.contains("Total Rent Cost: $240,000\n"), "{text}");
    assert!(text.contains("Total Buy Cost: $154,343\n"), "{text}");
    assert!(text.contains("Recommendation: Better to Buy\n"), "{text}");
    assert!(text.contains("$2,338"), "{text}");
    assert!(!text.contains("Warning"), "{text}");
}

#[test]
fn summary_lists_warnings() {
    let tr = Translator::new("en");
    let input = ProjectionInput {
        amortization_years: 5,
        appreciation_rate: 15.0,
        ..ProjectionInput::default()
    };
    let result = compute_projection(&input).expect("projection");
    let text = format_summary(&tr, "$", &input, &result);

    assert!(text.contains("amortization (5 yr)"), "{text}");
    assert!(text.contains("comparison period (10 yr)"), "{text}");
    assert!(text.contains("net buy cost is negative"), "{text}");
    assert!(text.contains("Total Buy Cost: -$"), "{text}");
}

#[test]
fn bar_chart_scales_to_width() {
    let tr = Translator::new("en");
    let chart = ChartData::from_costs(100.0, 50.0);
    let text = format_bar_chart(&tr, "$", &chart, 10);

    assert!(text.contains("Rent | ██████████ $100 (100%)\n"), "{text}");
    assert!(text.contains("Buy  | █████      $50 (50%)\n"), "{text}");
}

#[test]
fn korean_output_uses_korean_labels() {
    let tr = Translator::new("ko");
    let input = ProjectionInput::default();
    let result = compute_projection(&input).expect("projection");
    let text = format_summary(&tr, "₩", &input, &result);
    assert!(text.contains("총 임대 비용: ₩240,000"), "{text}");
    assert!(text.contains("매수가 유리합니다"), "{text}");
}

#[test]
fn schedule_has_one_row_per_year() {
    let tr = Translator::new("en");
    let input = ProjectionInput::default();
    let result = compute_projection(&input).expect("projection");
    let text = format_yearly_schedule(&tr, "$", &input, &result);

    let rows: Vec<&str> = text
        .lines()
        .filter(|l| l.trim_start().starts_with(|c: char| c.is_ascii_digit()))
        .collect();
    assert_eq!(rows.len(), 10, "{text}");
    assert!(rows[9].trim_start().starts_with("10 "), "{text}");
    assert!(rows[9].contains("$295,698"), "{text}");
}
