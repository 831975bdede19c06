use std::collections::HashMap;
use std::fs;
use std::path::Path;
use sys_locale::get_locale;
use tracing::debug;

/// 문자열 키를 모아두는 네임스페이스.
pub mod keys {
    pub const ERROR_PREFIX: &str = "general.error_prefix";
    pub const APP_EXIT: &str = "general.app_exit";

    pub const MAIN_MENU_TITLE: &str = "main_menu.title";
    pub const MAIN_MENU_COMPARE: &str = "main_menu.compare";
    pub const MAIN_MENU_SETTINGS: &str = "main_menu.settings";
    pub const MAIN_MENU_EXIT: &str = "main_menu.exit";
    pub const PROMPT_MENU_SELECT: &str = "prompt.menu_select";
    pub const INVALID_SELECTION_RETRY: &str = "error.invalid_selection_retry";
    pub const ERROR_INVALID_NUMBER: &str = "error.invalid_number";
    pub const ERROR_INVALID_INTEGER: &str = "error.invalid_integer";

    pub const COMPARE_HEADING: &str = "compare.heading";
    pub const COMPARE_HINT_DEFAULT: &str = "compare.hint_default";
    pub const PROMPT_MONTHLY_RENT: &str = "prompt.monthly_rent";
    pub const PROMPT_HOME_PRICE: &str = "prompt.home_price";
    pub const PROMPT_DOWN_PAYMENT: &str = "prompt.down_payment_pct";
    pub const PROMPT_MORTGAGE_RATE: &str = "prompt.mortgage_rate";
    pub const PROMPT_AMORTIZATION: &str = "prompt.amortization_years";
    pub const PROMPT_PROPERTY_TAX: &str = "prompt.property_tax_rate";
    pub const PROMPT_APPRECIATION: &str = "prompt.appreciation_rate";
    pub const PROMPT_HORIZON: &str = "prompt.horizon_years";
    pub const PROMPT_SHOW_SCHEDULE: &str = "prompt.show_schedule";

    pub const RESULT_TOTAL_RENT: &str = "result.total_rent";
    pub const RESULT_TOTAL_BUY: &str = "result.total_buy";
    pub const RESULT_RECOMMENDATION: &str = "result.recommendation";
    pub const RECOMMEND_RENT: &str = "recommendation.rent";
    pub const RECOMMEND_BUY: &str = "recommendation.buy";
    pub const RECOMMEND_EQUAL: &str = "recommendation.equal";

    pub const BREAKDOWN_HEADING: &str = "breakdown.heading";
    pub const BREAKDOWN_DOWN_PAYMENT: &str = "breakdown.down_payment";
    pub const BREAKDOWN_MORTGAGE_AMOUNT: &str = "breakdown.mortgage_amount";
    pub const BREAKDOWN_MONTHLY_PAYMENT: &str = "breakdown.monthly_payment";
    pub const BREAKDOWN_TOTAL_MORTGAGE: &str = "breakdown.total_mortgage_payments";
    pub const BREAKDOWN_PROPERTY_TAX: &str = "breakdown.property_tax";
    pub const BREAKDOWN_FUTURE_VALUE: &str = "breakdown.future_home_value";
    pub const BREAKDOWN_APPRECIATION_GAIN: &str = "breakdown.appreciation_gain";
    pub const BREAKDOWN_PRINCIPAL_REPAID: &str = "breakdown.principal_repaid";
    pub const BREAKDOWN_REMAINING_BALANCE: &str = "breakdown.remaining_balance";

    pub const CHART_HEADING: &str = "chart.heading";
    pub const CHART_RENT: &str = "chart.rent";
    pub const CHART_BUY: &str = "chart.buy";

    pub const SCHEDULE_HEADING: &str = "schedule.heading";
    pub const SCHEDULE_COLUMNS: &str = "schedule.columns";

    pub const WARNING_AMORTIZATION_SHORTER: &str = "warning.amortization_shorter";
    pub const WARNING_NEGATIVE_NET_COST: &str = "warning.negative_net_cost";

    pub const SETTINGS_HEADING: &str = "settings.heading";
    pub const SETTINGS_CURRENT: &str = "settings.current";
    pub const SETTINGS_OPTIONS: &str = "settings.options";
    pub const SETTINGS_PROMPT_CHANGE: &str = "settings.prompt_change";
    pub const SETTINGS_PROMPT_LANGUAGE: &str = "settings.prompt_language";
    pub const SETTINGS_PROMPT_CURRENCY: &str = "settings.prompt_currency";
    pub const SETTINGS_INVALID: &str = "settings.invalid";
    pub const SETTINGS_SAVED: &str = "settings.saved";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Language {
    Ko,
    En,
}

impl Language {
    fn from_code(code: &str) -> Self {
        let c = code.to_lowercase();
        if c.starts_with("ko") {
            Language::Ko
        } else {
            Language::En
        }
    }
}

/// 런타임 언어 번들을 제공한다.
#[derive(Debug, Clone)]
pub struct Translator {
    lang: Language,
    overrides: Option<HashMap<String, String>>,
}

impl Translator {
    /// 언어 코드(ko/en)에 따라 번역기를 생성한다. 알 수 없는 코드는 en으로 폴백한다.
    pub fn new(lang_code: &str) -> Self {
        Self {
            lang: Language::from_code(lang_code),
            overrides: None,
        }
    }

    /// 언어 코드 + 언어팩 디렉터리(locales/ 등)를 받아서 번역기를 생성한다.
    /// 디렉터리가 없거나 파일이 없으면 내장 언어팩을 사용한다.
    pub fn new_with_pack(lang_code: &str, pack_dir: Option<&str>) -> Self {
        let overrides = pack_dir
            .and_then(|dir| load_overrides(dir, lang_code))
            .or_else(|| load_overrides("locales", lang_code))
            .or_else(|| built_in_pack(lang_code));
        debug!(
            lang = lang_code,
            overrides = overrides.as_ref().map_or(0, HashMap::len),
            "translator ready"
        );
        Self {
            lang: Language::from_code(lang_code),
            overrides,
        }
    }

    pub fn language(&self) -> Language {
        self.lang
    }

    /// 키를 조회해 문자열을 반환한다. 언어팩에 없으면 None.
    pub fn lookup(&self, key: &str) -> Option<String> {
        self.overrides.as_ref().and_then(|m| m.get(key).cloned())
    }

    /// 번역을 가져온다. 언어팩 → 내장 문자열 순이며 한국어 번역이 없으면 영어로 폴백한다.
    pub fn t<'a>(&'a self, key: &str) -> &'a str {
        if let Some(v) = self.overrides.as_ref().and_then(|m| m.get(key)) {
            return v;
        }
        match self.lang {
            Language::Ko => ko(key).unwrap_or_else(|| en(key)),
            Language::En => en(key),
        }
    }
}

/// `{name}` 형태의 자리표시자를 값으로 바꾼다.
pub fn fill_template(template: &str, vars: &[(&str, String)]) -> String {
    let mut out = template.to_string();
    for (k, v) in vars {
        out = out.replace(&format!("{{{k}}}"), v);
    }
    out
}

/// CLI 플래그/설정/시스템 순으로 언어 코드를 결정한다.
pub fn resolve_language(cli_arg: &str, config_lang: Option<&str>) -> String {
    normalize_lang(cli_arg)
        .or_else(|| config_lang.and_then(normalize_lang))
        .or_else(detect_system_language)
        .unwrap_or_else(|| "en-us".to_string())
}

/// 지원하는 언어 코드로 정규화한다. `auto`나 알 수 없는 코드는 None.
pub fn normalize_lang(code: &str) -> Option<String> {
    let c = code.trim().to_lowercase();
    match c.as_str() {
        "ko" => Some("ko".into()),
        "ko-kr" => Some("ko-kr".into()),
        "en" => Some("en".into()),
        "en-us" => Some("en-us".into()),
        "en-uk" | "en-gb" | "en-ca" => Some("en-us".into()),
        "auto" | "" => None,
        other if other.starts_with("ko") => Some("ko".into()),
        other if other.starts_with("en") => Some("en-us".into()),
        _ => None,
    }
}

fn normalize_locale_string(loc: &str) -> Option<String> {
    let lang = loc
        .split(['.', '_', '-'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    match lang.as_str() {
        "ko" => Some("ko".into()),
        "en" => Some("en".into()),
        _ => None,
    }
}

/// 시스템 로케일에서 언어를 추정한다.
pub fn detect_system_language() -> Option<String> {
    if let Some(lang) = get_locale().as_deref().and_then(normalize_locale_string) {
        return Some(lang);
    }
    ["LANG", "LC_ALL"]
        .iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|v| normalize_locale_string(&v))
}

/// TOML 기반 언어팩을 로드한다. 형식: key = "value" 로 구성된 (중첩 가능) 맵.
fn load_overrides(dir: &str, lang: &str) -> Option<HashMap<String, String>> {
    let try_load = |code: &str| -> Option<HashMap<String, String>> {
        let path = Path::new(dir).join(format!("{code}.toml"));
        let content = fs::read_to_string(path).ok()?;
        parse_toml_to_map(&content)
    };

    // 1) 전체 코드 (en-us)
    if let Some(map) = try_load(lang) {
        return Some(map);
    }
    // 2) 기본 코드 (en)
    if let Some((base, _)) = lang.split_once(['-', '_']) {
        if let Some(map) = try_load(base) {
            return Some(map);
        }
    }
    None
}

fn parse_toml_to_map(src: &str) -> Option<HashMap<String, String>> {
    let value: toml::Value = toml::from_str(src).ok()?;
    let table = value.as_table()?;
    let mut map = HashMap::new();

    fn walk(prefix: &str, val: &toml::Value, out: &mut HashMap<String, String>) {
        match val {
            toml::Value::String(s) => {
                out.insert(prefix.to_string(), s.to_string());
            }
            toml::Value::Table(t) => {
                for (k, v) in t {
                    let key = if prefix.is_empty() {
                        k.clone()
                    } else {
                        format!("{prefix}.{k}")
                    };
                    walk(&key, v, out);
                }
            }
            _ => {}
        }
    }

    for (k, v) in table {
        walk(k, v, &mut map);
    }

    if map.is_empty() {
        None
    } else {
        Some(map)
    }
}

/// 내장 언어팩(파일이 없어도 동작하도록 빌드 시 포함).
fn built_in_pack(lang: &str) -> Option<HashMap<String, String>> {
    match lang.to_lowercase().as_str() {
        "en-us" | "en" => parse_toml_to_map(include_str!("../locales/en-us.toml")),
        "ko-kr" | "ko" => parse_toml_to_map(include_str!("../locales/ko-kr.toml")),
        _ => None,
    }
}

fn ko(key: &str) -> Option<&'static str> {
    use keys::*;
    Some(match key {
        ERROR_PREFIX => "오류",
        APP_EXIT => "프로그램을 종료합니다.",
        MAIN_MENU_TITLE => "\n=== 임대 vs 매수 계산기 ===",
        MAIN_MENU_COMPARE => "1) 임대 vs 매수 비교",
        MAIN_MENU_SETTINGS => "2) 설정",
        MAIN_MENU_EXIT => "0) 종료",
        PROMPT_MENU_SELECT => "메뉴 선택: ",
        INVALID_SELECTION_RETRY => "잘못된 입력입니다. 다시 선택하세요.",
        ERROR_INVALID_NUMBER => "숫자를 입력하세요.",
        ERROR_INVALID_INTEGER => "0 이상의 정수를 입력하세요.",
        COMPARE_HEADING => "\n-- 임대 vs 매수 비교 --",
        COMPARE_HINT_DEFAULT => "엔터만 누르면 [ ] 안의 기본값을 사용합니다.",
        PROMPT_MONTHLY_RENT => "월 임대료",
        PROMPT_HOME_PRICE => "주택 가격",
        PROMPT_DOWN_PAYMENT => "계약금 비율 [%]",
        PROMPT_MORTGAGE_RATE => "대출 이자율 [%/년]",
        PROMPT_AMORTIZATION => "상환 기간 [년]",
        PROMPT_PROPERTY_TAX => "재산세율 [%/년]",
        PROMPT_APPRECIATION => "주택가격 상승률 [%/년]",
        PROMPT_HORIZON => "분석 기간 [년]",
        PROMPT_SHOW_SCHEDULE => "연도별 상환 내역을 볼까요? (y/N): ",
        RESULT_TOTAL_RENT => "총 임대 비용:",
        RESULT_TOTAL_BUY => "총 매수 비용:",
        RESULT_RECOMMENDATION => "추천:",
        RECOMMEND_RENT => "임대가 유리합니다",
        RECOMMEND_BUY => "매수가 유리합니다",
        RECOMMEND_EQUAL => "비용이 거의 같습니다",
        BREAKDOWN_HEADING => "\n-- 매수 비용 내역 --",
        BREAKDOWN_DOWN_PAYMENT => "계약금:",
        BREAKDOWN_MORTGAGE_AMOUNT => "대출 원금:",
        BREAKDOWN_MONTHLY_PAYMENT => "월 납입액:",
        BREAKDOWN_TOTAL_MORTGAGE => "기간 내 총 납입액:",
        BREAKDOWN_PROPERTY_TAX => "재산세 합계:",
        BREAKDOWN_FUTURE_VALUE => "기간 말 주택 가치:",
        BREAKDOWN_APPRECIATION_GAIN => "시세 차익:",
        BREAKDOWN_PRINCIPAL_REPAID => "원금 상환액:",
        BREAKDOWN_REMAINING_BALANCE => "남은 대출 잔액:",
        CHART_HEADING => "\n-- 비용 비교 --",
        CHART_RENT => "임대",
        CHART_BUY => "매수",
        SCHEDULE_HEADING => "\n-- 연도별 상환 내역 --",
        SCHEDULE_COLUMNS => "연차        이자          원금          잔액",
        WARNING_AMORTIZATION_SHORTER => {
            "주의: 상환 기간({amortization}년)이 분석 기간({horizon}년)보다 짧지만 월 납입액은 분석 기간 전체에 합산됩니다."
        }
        WARNING_NEGATIVE_NET_COST => {
            "주의: 자산 증가분이 지출보다 커서 매수 순비용이 음수입니다. 차트 막대는 0으로 표시됩니다."
        }
        SETTINGS_HEADING => "\n-- 설정 --",
        SETTINGS_CURRENT => "현재 언어: {language}, 통화 기호: {currency}",
        SETTINGS_OPTIONS => "1) 언어  2) 통화 기호  3) 기본 입력값 초기화",
        SETTINGS_PROMPT_CHANGE => "변경할 번호(취소하려면 엔터): ",
        SETTINGS_PROMPT_LANGUAGE => "언어 코드(auto/ko/en-us): ",
        SETTINGS_PROMPT_CURRENCY => "통화 기호: ",
        SETTINGS_INVALID => "잘못된 입력이므로 변경하지 않습니다.",
        SETTINGS_SAVED => "설정을 저장했습니다.",
        _ => return None,
    })
}

fn en(key: &str) -> &'static str {
    use keys::*;
    match key {
        ERROR_PREFIX => "Error",
        APP_EXIT => "Exiting application.",
        MAIN_MENU_TITLE => "\n=== Rent vs Buy Calculator ===",
        MAIN_MENU_COMPARE => "1) Rent vs buy comparison",
        MAIN_MENU_SETTINGS => "2) Settings",
        MAIN_MENU_EXIT => "0) Exit",
        PROMPT_MENU_SELECT => "Select menu: ",
        INVALID_SELECTION_RETRY => "Invalid input. Please try again.",
        ERROR_INVALID_NUMBER => "Please enter a number.",
        ERROR_INVALID_INTEGER => "Please enter a whole number.",
        COMPARE_HEADING => "\n-- Rent vs Buy --",
        COMPARE_HINT_DEFAULT => "Press enter to keep the default shown in [ ].",
        PROMPT_MONTHLY_RENT => "Monthly rent",
        PROMPT_HOME_PRICE => "Home price",
        PROMPT_DOWN_PAYMENT => "Down payment [%]",
        PROMPT_MORTGAGE_RATE => "Mortgage rate [%/yr]",
        PROMPT_AMORTIZATION => "Amortization [years]",
        PROMPT_PROPERTY_TAX => "Property tax [%/yr]",
        PROMPT_APPRECIATION => "Home appreciation [%/yr]",
        PROMPT_HORIZON => "Years to compare",
        PROMPT_SHOW_SCHEDULE => "Show yearly amortization? (y/N): ",
        RESULT_TOTAL_RENT => "Total Rent Cost:",
        RESULT_TOTAL_BUY => "Total Buy Cost:",
        RESULT_RECOMMENDATION => "Recommendation:",
        RECOMMEND_RENT => "Better to Rent",
        RECOMMEND_BUY => "Better to Buy",
        RECOMMEND_EQUAL => "Costs are about the same",
        BREAKDOWN_HEADING => "\n-- Buy cost breakdown --",
        BREAKDOWN_DOWN_PAYMENT => "Down payment:",
        BREAKDOWN_MORTGAGE_AMOUNT => "Mortgage amount:",
        BREAKDOWN_MONTHLY_PAYMENT => "Monthly payment:",
        BREAKDOWN_TOTAL_MORTGAGE => "Mortgage payments in period:",
        BREAKDOWN_PROPERTY_TAX => "Property tax:",
        BREAKDOWN_FUTURE_VALUE => "Home value at end:",
        BREAKDOWN_APPRECIATION_GAIN => "Appreciation gain:",
        BREAKDOWN_PRINCIPAL_REPAID => "Principal repaid:",
        BREAKDOWN_REMAINING_BALANCE => "Remaining balance:",
        CHART_HEADING => "\n-- Cost comparison --",
        CHART_RENT => "Rent",
        CHART_BUY => "Buy",
        SCHEDULE_HEADING => "\n-- Yearly amortization --",
        SCHEDULE_COLUMNS => "Year    Interest     Principal       Balance",
        WARNING_AMORTIZATION_SHORTER => {
            "Warning: amortization ({amortization} yr) is shorter than the comparison period ({horizon} yr); the monthly payment is still counted for the whole period."
        }
        WARNING_NEGATIVE_NET_COST => {
            "Warning: equity gained exceeds the cash spent, so the net buy cost is negative. Its bar is drawn at zero."
        }
        SETTINGS_HEADING => "\n-- Settings --",
        SETTINGS_CURRENT => "Language: {language}, currency symbol: {currency}",
        SETTINGS_OPTIONS => "1) Language  2) Currency symbol  3) Reset default inputs",
        SETTINGS_PROMPT_CHANGE => "Enter number to change (enter to cancel): ",
        SETTINGS_PROMPT_LANGUAGE => "Language code (auto/ko/en-us): ",
        SETTINGS_PROMPT_CURRENCY => "Currency symbol: ",
        SETTINGS_INVALID => "Invalid input; nothing changed.",
        SETTINGS_SAVED => "Settings saved.",
        _ => "[missing translation]",
    }
}
