/// 분석 기간 동안의 총 임대료. 임대료 인상은 반영하지 않는다.
pub fn total_rent_cost(monthly_rent: f64, years: u32) -> f64 {
    monthly_rent * 12.0 * f64::from(years)
}
