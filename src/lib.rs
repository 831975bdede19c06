//! 핵심 계산 로직을 라이브러리로 분리하여 CLI 와 GUI 가 같은 계산을 공유한다.

pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod format;
pub mod housing;
pub mod i18n;
pub mod logging;
pub mod report;
pub mod ui_cli;
