use clap::{Args, Parser, Subcommand};

use crate::housing::ProjectionInput;

/// 임대 vs 매수 계산기 CLI.
#[derive(Debug, Parser)]
#[command(name = "rent_buy_calculator_cli", version)]
pub struct Cli {
    /// 언어 코드(auto/ko/en-us)
    #[arg(long, short = 'L', default_value = "auto")]
    pub lang: String,
    /// 디버그 로그 출력
    #[arg(long, short)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 대화형 입력 없이 한 번 계산하고 종료한다.
    Compare(CompareArgs),
}

/// 비교 계산 인자. 생략한 값은 config.toml의 기본값을 쓴다.
#[derive(Debug, Clone, Default, Args)]
pub struct CompareArgs {
    /// 월 임대료
    #[arg(long)]
    pub rent: Option<f64>,
    /// 주택 가격
    #[arg(long)]
    pub home_price: Option<f64>,
    /// 계약금 비율 [%]
    #[arg(long)]
    pub down_payment: Option<f64>,
    /// 대출 이자율 [%/년]
    #[arg(long)]
    pub mortgage_rate: Option<f64>,
    /// 상환 기간 [년]
    #[arg(long)]
    pub amortization: Option<u32>,
    /// 재산세율 [%/년]
    #[arg(long)]
    pub property_tax: Option<f64>,
    /// 주택가격 상승률 [%/년]
    #[arg(long, allow_hyphen_values = true)]
    pub appreciation: Option<f64>,
    /// 분석 기간 [년]
    #[arg(long)]
    pub years: Option<u32>,
    /// 연도별 상환 내역 출력
    #[arg(long)]
    pub schedule: bool,
}

impl CompareArgs {
    /// 주어진 기본값 위에 명시된 인자만 덮어쓴다.
    pub fn into_input(self, defaults: &ProjectionInput) -> ProjectionInput {
        ProjectionInput {
            monthly_rent: self.rent.unwrap_or(defaults.monthly_rent),
            home_price: self.home_price.unwrap_or(defaults.home_price),
            down_payment_pct: self.down_payment.unwrap_or(defaults.down_payment_pct),
            mortgage_rate: self.mortgage_rate.unwrap_or(defaults.mortgage_rate),
            amortization_years: self.amortization.unwrap_or(defaults.amortization_years),
            property_tax_rate: self.property_tax.unwrap_or(defaults.property_tax_rate),
            appreciation_rate: self.appreciation.unwrap_or(defaults.appreciation_rate),
            horizon_years: self.years.unwrap_or(defaults.horizon_years),
        }
    }
}
