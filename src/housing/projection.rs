use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use super::buy_cost::{buy_projection, BuyProjection};
use super::rent_cost::total_rent_cost;
use crate::chart::ChartData;

/// 상환 기간과 분석 기간의 상한 [년].
pub const MAX_YEARS: u32 = 100;

/// 임대 vs 매수 비교 입력값. 비율 필드는 모두 % 단위.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectionInput {
    /// 월 임대료
    pub monthly_rent: f64,
    pub home_price: f64,
    /// 계약금 비율(0~100 %)
    pub down_payment_pct: f64,
    /// 연 대출 이자율(%)
    pub mortgage_rate: f64,
    /// 상환 기간 [년]
    pub amortization_years: u32,
    /// 연 재산세율(%)
    pub property_tax_rate: f64,
    /// 연 주택가격 상승률(%), 음수 가능
    pub appreciation_rate: f64,
    /// 분석 기간 [년]
    pub horizon_years: u32,
}

impl Default for ProjectionInput {
    fn default() -> Self {
        Self {
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
}

impl ProjectionInput {
    /// 분석 기간 [개월]
    pub fn horizon_months(&self) -> u32 {
        self.horizon_years.saturating_mul(12)
    }

    /// 계산 전에 각 필드의 범위를 검사한다.
    pub fn validate(&self) -> Result<(), ProjectionError> {
        positive("monthly_rent", self.monthly_rent)?;
        positive("home_price", self.home_price)?;
        finite("down_payment_pct", self.down_payment_pct)?;
        if !(0.0..=100.0).contains(&self.down_payment_pct) {
            return Err(ProjectionError::invalid(
                "down_payment_pct",
                "0~100 % 범위여야 합니다.",
            ));
        }
        non_negative("mortgage_rate", self.mortgage_rate)?;
        non_negative("property_tax_rate", self.property_tax_rate)?;
        finite("appreciation_rate", self.appreciation_rate)?;
        if self.appreciation_rate < -100.0 {
            return Err(ProjectionError::invalid(
                "appreciation_rate",
                "-100 % 보다 작을 수 없습니다.",
            ));
        }
        years("amortization_years", self.amortization_years)?;
        years("horizon_years", self.horizon_years)?;
        Ok(())
    }
}

fn years(field: &'static str, value: u32) -> Result<(), ProjectionError> {
    if (1..=MAX_YEARS).contains(&value) {
        Ok(())
    } else {
        Err(ProjectionError::invalid(field, "1~100년 사이의 정수여야 합니다."))
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ProjectionError::invalid(field, "유한한 숫자여야 합니다."))
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    finite(field, value)?;
    if value > 0.0 {
        Ok(())
    } else {
        Err(ProjectionError::invalid(field, "0보다 커야 합니다."))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<(), ProjectionError> {
    finite(field, value)?;
    if value >= 0.0 {
        Ok(())
    } else {
        Err(ProjectionError::invalid(field, "0 이상이어야 합니다."))
    }
}

/// 비교 계산 오류.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// 입력값이 범위를 벗어난 경우
    #[error("입력 오류({field}): {reason}")]
    InvalidInput {
        field: &'static str,
        reason: &'static str,
    },
    /// 계산 결과가 NaN/무한대가 된 경우
    #[error("계산 결과가 유효하지 않습니다: {0}")]
    DegenerateResult(&'static str),
}

impl ProjectionError {
    fn invalid(field: &'static str, reason: &'static str) -> Self {
        ProjectionError::InvalidInput { field, reason }
    }
}

/// 추천 결과.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Recommendation {
    Rent,
    Buy,
    /// 두 비용이 정확히 같을 때만
    Equal,
}

impl Recommendation {
    /// 더 작은 쪽을 추천한다. 허용오차 없이 정확히 같을 때만 `Equal`.
    pub fn from_costs(total_rent_cost: f64, buy_net_cost: f64) -> Self {
        if total_rent_cost < buy_net_cost {
            Recommendation::Rent
        } else if buy_net_cost < total_rent_cost {
            Recommendation::Buy
        } else {
            Recommendation::Equal
        }
    }
}

/// 계산 결과와 함께 전달되는 주의 사항.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProjectionWarning {
    /// 상환 기간이 분석 기간보다 짧다. 월 납입액은 분석 기간 전체에 그대로 합산된다.
    AmortizationShorterThanHorizon {
        amortization_years: u32,
        horizon_years: u32,
    },
    /// 매수 순비용이 음수(자산 증가가 지출보다 큼). 차트 막대는 0으로 표시된다.
    NegativeNetBuyCost,
}

/// 임대 vs 매수 비교 결과.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionResult {
    pub total_rent_cost: f64,
    pub buy: BuyProjection,
    pub recommendation: Recommendation,
    pub warnings: Vec<ProjectionWarning>,
}

impl ProjectionResult {
    /// 두 총비용을 막대 차트용 데이터로 변환한다.
    pub fn chart(&self) -> ChartData {
        ChartData::from_costs(self.total_rent_cost, self.buy.net_cost)
    }
}

/// 입력값을 검증한 뒤 임대/매수 총비용과 추천을 계산한다.
pub fn compute_projection(input: &ProjectionInput) -> Result<ProjectionResult, ProjectionError> {
    input.validate()?;

    let total_rent = total_rent_cost(input.monthly_rent, input.horizon_years);
    let buy = buy_projection(input);

    let figures = [
        ("total_rent_cost", total_rent),
        ("monthly_payment", buy.monthly_payment),
        ("total_mortgage_payments", buy.total_mortgage_payments),
        ("property_tax", buy.property_tax),
        ("future_home_value", buy.future_home_value),
        ("principal_repaid", buy.principal_repaid),
        ("net_cost", buy.net_cost),
    ];
    if let Some((name, _)) = figures.iter().find(|(_, v)| !v.is_finite()) {
        warn!(figure = *name, "projection produced a non-finite figure");
        return Err(ProjectionError::DegenerateResult(*name));
    }

    let mut warnings = Vec::new();
    if input.amortization_years < input.horizon_years {
        warnings.push(ProjectionWarning::AmortizationShorterThanHorizon {
            amortization_years: input.amortization_years,
            horizon_years: input.horizon_years,
        });
    }
    if buy.net_cost < 0.0 {
        warnings.push(ProjectionWarning::NegativeNetBuyCost);
    }
    for w in &warnings {
        debug!(warning = ?w, "projection warning");
    }

    let recommendation = Recommendation::from_costs(total_rent, buy.net_cost);
    debug!(
        total_rent,
        buy_net_cost = buy.net_cost,
        ?recommendation,
        "projection computed"
    );

    Ok(ProjectionResult {
        total_rent_cost: total_rent,
        buy,
        recommendation,
        warnings,
    })
}
