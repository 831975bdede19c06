//! 임대/매수 총비용 비교 막대 차트용 데이터.
//!
//! 렌더링은 CLI(텍스트 막대)와 GUI(egui painter)가 각자 담당하고, 여기서는
//! 두 값과 상대 높이만 계산한다.

/// 막대 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarKind {
    Rent,
    Buy,
}

/// 막대 하나.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartBar {
    pub kind: BarKind,
    /// 표시용 원래 값(음수 가능)
    pub value: f64,
    /// 최대값 대비 높이(0~1)
    pub proportion: f64,
}

impl ChartBar {
    /// 높이를 정수 %로 반올림한다.
    pub fn percent(&self) -> u8 {
        (self.proportion * 100.0).round().clamp(0.0, 100.0) as u8
    }
}

/// 두 막대로 이루어진 비교 차트.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartData {
    pub rent: ChartBar,
    pub buy: ChartBar,
}

impl ChartData {
    /// 큰 쪽을 100%로 두고 작은 쪽은 비율로 환산한다.
    /// 음수 값은 높이 0으로 취급하고, 둘 다 0 이하이면 두 막대 모두 0이다.
    pub fn from_costs(rent_cost: f64, buy_cost: f64) -> Self {
        let rent_h = rent_cost.max(0.0);
        let buy_h = buy_cost.max(0.0);
        let max = rent_h.max(buy_h);
        let ratio = |v: f64| if max > 0.0 { v / max } else { 0.0 };
        Self {
            rent: ChartBar {
                kind: BarKind::Rent,
                value: rent_cost,
                proportion: ratio(rent_h),
            },
            buy: ChartBar {
                kind: BarKind::Buy,
                value: buy_cost,
                proportion: ratio(buy_h),
            },
        }
    }

    pub fn bars(&self) -> [ChartBar; 2] {
        [self.rent, self.buy]
    }
}
