/// 월 이자율(소수)을 연 이자율(%)에서 구한다.
pub fn monthly_rate(annual_rate_pct: f64) -> f64 {
    annual_rate_pct / 100.0 / 12.0
}

/// 고정금리 원리금균등 상환의 월 납입액을 계산한다.
///
/// - n = 상환기간(년) × 12
/// - r = 연이율 / 100 / 12
/// - r = 0 이면 P / n, 아니면 P·r·(1+r)^n / ((1+r)^n − 1)
pub fn monthly_payment(principal: f64, annual_rate_pct: f64, years: u32) -> f64 {
    let n = f64::from(years) * 12.0;
    let r = monthly_rate(annual_rate_pct);
    if r == 0.0 {
        return principal / n;
    }
    let growth = (1.0 + r).powf(n);
    principal * (r * growth) / (growth - 1.0)
}

const MAX_PREALLOCATED_ROWS: u32 = 1200;

/// 상환 스케줄의 한 달치 기록.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationRow {
    /// 1부터 시작하는 납입 회차
    pub month: u32,
    pub interest: f64,
    pub principal: f64,
    /// 이번 회차 납입 후 잔액
    pub balance: f64,
}

/// 시뮬레이션 결과 요약.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AmortizationSummary {
    /// 누적 원금 상환액
    pub principal_repaid: f64,
    /// 누적 이자
    pub interest_paid: f64,
    /// 시뮬레이션 종료 시점 잔액
    pub remaining_balance: f64,
    /// 실제로 진행된 개월 수
    pub months_simulated: u32,
}

/// 연 단위로 묶은 상환 내역.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct YearlyAmortization {
    pub year: u32,
    pub interest: f64,
    pub principal: f64,
    /// 해당 연도 마지막 회차 후 잔액
    pub ending_balance: f64,
}

/// 월별 상환 스케줄을 만든다.
///
/// 매달 이자 = 잔액 × 월이율, 원금 = 납입액 − 이자. 잔액이 음수가 되는 달까지
/// 기록하고 그 다음 달부터는 멈춘다.
pub fn amortization_schedule(
    principal: f64,
    annual_rate_pct: f64,
    payment: f64,
    months: u32,
) -> Vec<AmortizationRow> {
    let r = monthly_rate(annual_rate_pct);
    let mut rows = Vec::with_capacity(months.min(MAX_PREALLOCATED_ROWS) as usize);
    let mut balance = principal;
    for month in 1..=months {
        let interest = balance * r;
        let principal_part = payment - interest;
        balance -= principal_part;
        rows.push(AmortizationRow {
            month,
            interest,
            principal: principal_part,
            balance,
        });
        if balance < 0.0 {
            break;
        }
    }
    rows
}

/// 월별 시뮬레이션을 돌려 누적 원금 상환액과 잔액을 구한다.
/// 폐형식(closed form) 대신 `amortization_schedule`과 같은 규칙으로 누적만 한다.
pub fn simulate_amortization(
    principal: f64,
    annual_rate_pct: f64,
    payment: f64,
    months: u32,
) -> AmortizationSummary {
    let r = monthly_rate(annual_rate_pct);
    let mut summary = AmortizationSummary {
        principal_repaid: 0.0,
        interest_paid: 0.0,
        remaining_balance: principal,
        months_simulated: 0,
    };
    for _ in 0..months {
        let interest = summary.remaining_balance * r;
        let principal_part = payment - interest;
        summary.remaining_balance -= principal_part;
        summary.principal_repaid += principal_part;
        summary.interest_paid += interest;
        summary.months_simulated += 1;
        if summary.remaining_balance < 0.0 {
            break;
        }
    }
    summary
}

/// 월별 스케줄을 연 단위로 집계한다.
pub fn yearly_summary(rows: &[AmortizationRow]) -> Vec<YearlyAmortization> {
    rows.chunks(12)
        .enumerate()
        .map(|(idx, chunk)| YearlyAmortization {
            year: idx as u32 + 1,
            interest: chunk.iter().map(|row| row.interest).sum(),
            principal: chunk.iter().map(|row| row.principal).sum(),
            ending_balance: chunk.last().map_or(0.0, |row| row.balance),
        })
        .collect()
}
