/// 통화 기호 + 천 단위 구분 기호, 소수점 없이 표시한다. 예: `$671,958`, `-$1,234`.
pub fn format_currency(value: f64, symbol: &str) -> String {
    if !value.is_finite() {
        return format!("{symbol}-");
    }
    let rounded = value.round();
    let sign = if rounded < 0.0 { "-" } else { "" };
    let digits = format!("{:.0}", rounded.abs());
    format!("{sign}{symbol}{}", group_thousands(&digits))
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut out = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// 비율을 `12.5%` 형태로 표시한다.
pub fn format_percent(value: f64) -> String {
    let s = format!("{value:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    format!("{s}%")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_currency(671_958.4, "$"), "$671,958");
        assert_eq!(format_currency(1_000_000.0, "$"), "$1,000,000");
        assert_eq!(format_currency(999.5, "$"), "$1,000");
        assert_eq!(format_currency(12.0, "$"), "$12");
        assert_eq!(format_currency(0.0, "$"), "$0");
    }

    #[test]
    fn negative_sign_before_symbol() {
        assert_eq!(format_currency(-1234.0, "$"), "-$1,234");
        assert_eq!(format_currency(-0.4, "₩"), "₩0");
    }

    #[test]
    fn percent_trims_zeros() {
        assert_eq!(format_percent(5.0), "5%");
        assert_eq!(format_percent(2.75), "2.75%");
        assert_eq!(format_percent(-1.5), "-1.5%");
    }
}
