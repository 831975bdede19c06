use thiserror::Error;
use tracing::info;

use crate::cli::CompareArgs;
use crate::config::{Config, ConfigError};
use crate::housing::{compute_projection, ProjectionError};
use crate::i18n::{self, Translator};
use crate::report;
use crate::ui_cli::{self, MenuChoice};

/// 애플리케이션 실행 중 발생 가능한 오류를 표현한다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 파일/표준입출력 오류
    #[error("입출력 오류: {0}")]
    Io(#[from] std::io::Error),
    /// 설정 저장/로드 오류
    #[error("설정 오류: {0}")]
    Config(#[from] ConfigError),
    /// 비교 계산 오류
    #[error("계산 오류: {0}")]
    Projection(#[from] ProjectionError),
}

/// CLI 애플리케이션의 메인 루프를 실행한다.
pub fn run(config: &mut Config, tr: &Translator) -> Result<(), AppError> {
    loop {
        match ui_cli::main_menu(tr)? {
            MenuChoice::Compare => ui_cli::handle_compare(tr, config)?,
            MenuChoice::Settings => {
                ui_cli::handle_settings(tr, config)?;
                config.save()?;
            }
            MenuChoice::Exit => {
                config.save()?;
                println!("{}", tr.t(i18n::keys::APP_EXIT));
                break;
            }
        }
    }
    Ok(())
}

/// `compare` 하위 명령: 한 번 계산해 결과를 출력한다.
pub fn run_compare(args: CompareArgs, config: &Config, tr: &Translator) -> Result<(), AppError> {
    let show_schedule = args.schedule;
    let input = args.into_input(&config.defaults);
    info!(?input, "one-shot comparison");
    let result = compute_projection(&input)?;
    let symbol = config.currency_symbol.as_str();
    print!("{}", report::format_summary(tr, symbol, &input, &result));
    print!(
        "{}",
        report::format_bar_chart(tr, symbol, &result.chart(), report::DEFAULT_BAR_WIDTH)
    );
    if show_schedule {
        print!("{}", report::format_yearly_schedule(tr, symbol, &input, &result));
    }
    Ok(())
}
