use super::mortgage::{monthly_payment, simulate_amortization};
use super::projection::ProjectionInput;

/// 매수 시나리오의 비용 분해.
#[derive(Debug, Clone, PartialEq)]
pub struct BuyProjection {
    /// 순비용 = 현금 지출 − (시세 차익 + 원금 상환액)
    pub net_cost: f64,
    pub down_payment: f64,
    /// 대출 원금
    pub mortgage_amount: f64,
    /// 월 납입액
    pub monthly_payment: f64,
    /// 분석 기간 전체의 월 납입액 합계
    pub total_mortgage_payments: f64,
    pub property_tax: f64,
    /// 분석 기간 종료 시점 주택 가치
    pub future_home_value: f64,
    pub principal_repaid: f64,
    /// 시뮬레이션 종료 시점 대출 잔액
    pub remaining_balance: f64,
}

impl BuyProjection {
    /// 시세 차익(음수면 손실).
    pub fn appreciation_gain(&self, home_price: f64) -> f64 {
        self.future_home_value - home_price
    }
}

/// 분석 기간 동안 매수 시 순비용을 계산한다.
///
/// 상환기간이 분석 기간보다 짧아도 월 납입액 × 분석 개월 수를 그대로 쓴다.
/// 이 경우는 호출 측에서 경고로 알린다.
pub fn buy_projection(input: &ProjectionInput) -> BuyProjection {
    let down_payment = input.home_price * (input.down_payment_pct / 100.0);
    let mortgage_amount = input.home_price - down_payment;
    let payment = monthly_payment(mortgage_amount, input.mortgage_rate, input.amortization_years);
    let months = input.horizon_months();
    let total_mortgage_payments = payment * f64::from(months);
    let property_tax =
        input.home_price * (input.property_tax_rate / 100.0) * f64::from(input.horizon_years);
    let future_home_value = input.home_price
        * (1.0 + input.appreciation_rate / 100.0).powf(f64::from(input.horizon_years));
    let amortization = simulate_amortization(mortgage_amount, input.mortgage_rate, payment, months);

    let net_cost = down_payment + total_mortgage_payments + property_tax
        - (future_home_value - input.home_price)
        - amortization.principal_repaid;

    BuyProjection {
        net_cost,
        down_payment,
        mortgage_amount,
        monthly_payment: payment,
        total_mortgage_payments,
        property_tax,
        future_home_value,
        principal_repaid: amortization.principal_repaid,
        remaining_balance: amortization.remaining_balance,
    }
}
