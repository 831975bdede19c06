use std::io::{self, Write};

use crate::app::AppError;
use crate::config::Config;
use crate::housing::{compute_projection, ProjectionInput};
use crate::i18n::{fill_template, keys, normalize_lang, Translator};
use crate::report;

/// 메인 메뉴 선택지를 표현한다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Compare,
    Settings,
    Exit,
}

/// 메인 메뉴를 표시하고 선택값을 반환한다.
pub fn main_menu(tr: &Translator) -> Result<MenuChoice, AppError> {
    println!("{}", tr.t(keys::MAIN_MENU_TITLE));
    println!("{}", tr.t(keys::MAIN_MENU_COMPARE));
    println!("{}", tr.t(keys::MAIN_MENU_SETTINGS));
    println!("{}", tr.t(keys::MAIN_MENU_EXIT));
    loop {
        let sel = read_line(tr.t(keys::PROMPT_MENU_SELECT))?;
        match sel.trim() {
            "1" => return Ok(MenuChoice::Compare),
            "2" => return Ok(MenuChoice::Settings),
            "0" => return Ok(MenuChoice::Exit),
            _ => println!("{}", tr.t(keys::INVALID_SELECTION_RETRY)),
        }
    }
}

/// 임대 vs 매수 비교 메뉴를 처리한다.
/// 입력 오류는 메시지만 출력하고 메뉴로 돌아간다.
pub fn handle_compare(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::COMPARE_HEADING));
    println!("{}", tr.t(keys::COMPARE_HINT_DEFAULT));
    let d = cfg.defaults.clone();
    let input = ProjectionInput {
        monthly_rent: read_f64_or(tr, keys::PROMPT_MONTHLY_RENT, d.monthly_rent)?,
        home_price: read_f64_or(tr, keys::PROMPT_HOME_PRICE, d.home_price)?,
        down_payment_pct: read_f64_or(tr, keys::PROMPT_DOWN_PAYMENT, d.down_payment_pct)?,
        mortgage_rate: read_f64_or(tr, keys::PROMPT_MORTGAGE_RATE, d.mortgage_rate)?,
        amortization_years: read_u32_or(tr, keys::PROMPT_AMORTIZATION, d.amortization_years)?,
        property_tax_rate: read_f64_or(tr, keys::PROMPT_PROPERTY_TAX, d.property_tax_rate)?,
        appreciation_rate: read_f64_or(tr, keys::PROMPT_APPRECIATION, d.appreciation_rate)?,
        horizon_years: read_u32_or(tr, keys::PROMPT_HORIZON, d.horizon_years)?,
    };

    let result = match compute_projection(&input) {
        Ok(result) => result,
        Err(e) => {
            println!("{}: {e}", tr.t(keys::ERROR_PREFIX));
            return Ok(());
        }
    };

    let symbol = cfg.currency_symbol.as_str();
    println!();
    print!("{}", report::format_summary(tr, symbol, &input, &result));
    print!(
        "{}",
        report::format_bar_chart(tr, symbol, &result.chart(), report::DEFAULT_BAR_WIDTH)
    );
    let answer = read_line(tr.t(keys::PROMPT_SHOW_SCHEDULE))?;
    if matches!(answer.trim(), "y" | "Y" | "yes") {
        print!("{}", report::format_yearly_schedule(tr, symbol, &input, &result));
    }

    // 다음 계산의 기본값으로 사용
    cfg.defaults = input;
    Ok(())
}

/// 설정 메뉴를 처리한다.
pub fn handle_settings(tr: &Translator, cfg: &mut Config) -> Result<(), AppError> {
    println!("{}", tr.t(keys::SETTINGS_HEADING));
    println!(
        "{}",
        fill_template(
            tr.t(keys::SETTINGS_CURRENT),
            &[
                ("language", cfg.language.clone()),
                ("currency", cfg.currency_symbol.clone()),
            ],
        )
    );
    println!("{}", tr.t(keys::SETTINGS_OPTIONS));
    let sel = read_line(tr.t(keys::SETTINGS_PROMPT_CHANGE))?;
    match sel.trim() {
        "" => return Ok(()),
        "1" => {
            let code = read_line(tr.t(keys::SETTINGS_PROMPT_LANGUAGE))?;
            match language_choice(&code) {
                Some(lang) => cfg.language = lang,
                None => {
                    println!("{}", tr.t(keys::SETTINGS_INVALID));
                    return Ok(());
                }
            }
        }
        "2" => {
            let symbol = read_line(tr.t(keys::SETTINGS_PROMPT_CURRENCY))?;
            let symbol = symbol.trim();
            if symbol.is_empty() {
                println!("{}", tr.t(keys::SETTINGS_INVALID));
                return Ok(());
            }
            cfg.currency_symbol = symbol.to_string();
        }
        "3" => cfg.defaults = ProjectionInput::default(),
        _ => {
            println!("{}", tr.t(keys::SETTINGS_INVALID));
            return Ok(());
        }
    }
    println!("{}", tr.t(keys::SETTINGS_SAVED));
    Ok(())
}

/// 설정에 저장할 언어 코드. `auto` 또는 지원 언어만 허용한다.
fn language_choice(input: &str) -> Option<String> {
    let code = input.trim();
    if code.eq_ignore_ascii_case("auto") {
        Some("auto".into())
    } else {
        normalize_lang(code)
    }
}

fn read_line(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut buf = String::new();
    io::stdin().read_line(&mut buf)?;
    Ok(buf)
}

/// 빈 입력이면 기본값을 돌려준다.
fn read_f64_or(tr: &Translator, key: &str, default: f64) -> Result<f64, AppError> {
    loop {
        let s = read_line(&format!("{} [{default}]: ", tr.t(key)))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match parse_number(s) {
            Some(v) => return Ok(v),
            None => println!("{}", tr.t(keys::ERROR_INVALID_NUMBER)),
        }
    }
}

fn read_u32_or(tr: &Translator, key: &str, default: u32) -> Result<u32, AppError> {
    loop {
        let s = read_line(&format!("{} [{default}]: ", tr.t(key)))?;
        let s = s.trim();
        if s.is_empty() {
            return Ok(default);
        }
        match s.parse::<u32>() {
            Ok(v) => return Ok(v),
            Err(_) => println!("{}", tr.t(keys::ERROR_INVALID_INTEGER)),
        }
    }
}

/// 천 단위 구분 기호(`,`, `_`)와 통화 기호 `$`를 허용하는 숫자 파서.
pub fn parse_number(s: &str) -> Option<f64> {
    let cleaned: String = s
        .trim()
        .chars()
        .filter(|c| !matches!(c, ',' | '_' | '$'))
        .collect();
    cleaned.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::{language_choice, parse_number};

    #[test]
    fn parse_number_accepts_grouping() {
        assert_eq!(parse_number("500,000"), Some(500_000.0));
        assert_eq!(parse_number("$2_000.50"), Some(2000.5));
        assert_eq!(parse_number(" -3 "), Some(-3.0));
        assert_eq!(parse_number("abc"), None);
        assert_eq!(parse_number("inf"), None);
    }

    #[test]
    fn language_choice_rejects_unknown_codes() {
        assert_eq!(language_choice("fr"), None);
        assert_eq!(language_choice("  "), None);
        assert_eq!(language_choice("AUTO\n"), Some("auto".into()));
        assert_eq!(language_choice("ko-KR"), Some("ko-kr".into()));
        assert_eq!(language_choice("en-gb"), Some("en-us".into()));
    }
}
