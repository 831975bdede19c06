//! 임대 vs 매수 비용 비교 계산 모듈 모음.

pub mod buy_cost;
pub mod mortgage;
pub mod projection;
pub mod rent_cost;

pub use buy_cost::*;
pub use mortgage::*;
pub use projection::*;
pub use rent_cost::*;
