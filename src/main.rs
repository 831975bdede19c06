use clap::Parser;
use std::process::ExitCode;

use rent_buy_calculator::cli::{Cli, Command};
use rent_buy_calculator::{app, config, i18n, logging};

/// 프로그램의 엔트리 포인트. 설정을 로드한 뒤 CLI 애플리케이션을 실행한다.
fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    match try_run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("오류 / Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn try_run(cli: Cli) -> Result<(), app::AppError> {
    let mut cfg = config::load_or_default()?;
    let lang = i18n::resolve_language(&cli.lang, Some(cfg.language.as_str()));
    let tr = i18n::Translator::new_with_pack(&lang, cfg.language_pack_dir.as_deref());
    match cli.command {
        Some(Command::Compare(args)) => app::run_compare(args, &cfg, &tr),
        None => app::run(&mut cfg, &tr),
    }
}
