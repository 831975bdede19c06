//! 비교 결과를 터미널 출력용 문자열로 만든다.
//!
//! 계산 코드와 출력 형식을 분리해 두면 CLI 출력 변경이 한 곳에 모이고
//! 문자열 자체를 테스트할 수 있다.

use crate::chart::{BarKind, ChartData};
use crate::format::format_currency;
use crate::housing::{
    amortization_schedule, yearly_summary, ProjectionInput, ProjectionResult, ProjectionWarning,
    Recommendation,
};
use crate::i18n::{fill_template, keys, Translator};

/// 텍스트 막대 차트의 기본 폭(문자 수).
pub const DEFAULT_BAR_WIDTH: usize = 40;

/// 추천 결과 문구.
pub fn recommendation_text(tr: &Translator, rec: Recommendation) -> &str {
    match rec {
        Recommendation::Rent => tr.t(keys::RECOMMEND_RENT),
        Recommendation::Buy => tr.t(keys::RECOMMEND_BUY),
        Recommendation::Equal => tr.t(keys::RECOMMEND_EQUAL),
    }
}

/// 경고 문구.
pub fn warning_text(tr: &Translator, warning: &ProjectionWarning) -> String {
    match warning {
        ProjectionWarning::AmortizationShorterThanHorizon {
            amortization_years,
            horizon_years,
        } => fill_template(
            tr.t(keys::WARNING_AMORTIZATION_SHORTER),
            &[
                ("amortization", amortization_years.to_string()),
                ("horizon", horizon_years.to_string()),
            ],
        ),
        ProjectionWarning::NegativeNetBuyCost => tr.t(keys::WARNING_NEGATIVE_NET_COST).to_string(),
    }
}

/// 총비용 두 줄과 추천, 매수 비용 내역, 경고를 출력 형식으로 만든다.
pub fn format_summary(
    tr: &Translator,
    symbol: &str,
    input: &ProjectionInput,
    result: &ProjectionResult,
) -> String {
    let money = |v: f64| format_currency(v, symbol);
    let buy = &result.buy;
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        tr.t(keys::RESULT_TOTAL_RENT),
        money(result.total_rent_cost)
    ));
    out.push_str(&format!("{} {}\n", tr.t(keys::RESULT_TOTAL_BUY), money(buy.net_cost)));
    out.push_str(&format!(
        "{} {}\n",
        tr.t(keys::RESULT_RECOMMENDATION),
        recommendation_text(tr, result.recommendation)
    ));

    out.push_str(tr.t(keys::BREAKDOWN_HEADING));
    out.push('\n');
    let rows = [
        (keys::BREAKDOWN_DOWN_PAYMENT, buy.down_payment),
        (keys::BREAKDOWN_MORTGAGE_AMOUNT, buy.mortgage_amount),
        (keys::BREAKDOWN_MONTHLY_PAYMENT, buy.monthly_payment),
        (keys::BREAKDOWN_TOTAL_MORTGAGE, buy.total_mortgage_payments),
        (keys::BREAKDOWN_PROPERTY_TAX, buy.property_tax),
        (keys::BREAKDOWN_FUTURE_VALUE, buy.future_home_value),
        (
            keys::BREAKDOWN_APPRECIATION_GAIN,
            buy.appreciation_gain(input.home_price),
        ),
        (keys::BREAKDOWN_PRINCIPAL_REPAID, buy.principal_repaid),
        (keys::BREAKDOWN_REMAINING_BALANCE, buy.remaining_balance),
    ];
    for (key, value) in rows {
        out.push_str(&format!("  {:<28} {:>14}\n", tr.t(key), money(value)));
    }

    for w in &result.warnings {
        out.push_str(&warning_text(tr, w));
        out.push('\n');
    }
    out
}

/// 두 막대를 가로 텍스트 막대로 그린다. 큰 쪽이 `width` 칸을 채운다.
pub fn format_bar_chart(tr: &Translator, symbol: &str, chart: &ChartData, width: usize) -> String {
    let labels: Vec<&str> = chart
        .bars()
        .iter()
        .map(|bar| match bar.kind {
            BarKind::Rent => tr.t(keys::CHART_RENT),
            BarKind::Buy => tr.t(keys::CHART_BUY),
        })
        .collect();
    let label_width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    out.push_str(tr.t(keys::CHART_HEADING));
    out.push('\n');
    for (bar, label) in chart.bars().iter().zip(labels) {
        let cells = (bar.proportion * width as f64).round() as usize;
        let pad = label_width - label.chars().count();
        out.push_str(&format!(
            "{label}{} | {}{} {} ({}%)\n",
            " ".repeat(pad),
            "█".repeat(cells),
            " ".repeat(width.saturating_sub(cells)),
            format_currency(bar.value, symbol),
            bar.percent()
        ));
    }
    out
}

/// 연도별 상환 내역 표.
pub fn format_yearly_schedule(
    tr: &Translator,
    symbol: &str,
    input: &ProjectionInput,
    result: &ProjectionResult,
) -> String {
    let rows = amortization_schedule(
        result.buy.mortgage_amount,
        input.mortgage_rate,
        result.buy.monthly_payment,
        input.horizon_months(),
    );
    let mut out = String::new();
    out.push_str(tr.t(keys::SCHEDULE_HEADING));
    out.push('\n');
    out.push_str(tr.t(keys::SCHEDULE_COLUMNS));
    out.push('\n');
    for year in yearly_summary(&rows) {
        out.push_str(&format!(
            "{:>4} {:>13} {:>13} {:>13}\n",
            year.year,
            format_currency(year.interest, symbol),
            format_currency(year.principal, symbol),
            format_currency(year.ending_balance, symbol)
        ));
    }
    out
}
