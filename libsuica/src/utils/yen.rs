//! 金額表示 (JPY) helpers.

/// Format an amount the way a balance is shown: `¥` sign, comma-grouped
/// thousands, no decimals. Negative amounts get a leading `-`.
///
/// Example: `12345` -> `"¥12,345"`, `-210` -> `"-¥210"`
pub fn format_yen(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i != 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    if amount < 0 {
        format!("-¥{}", grouped)
    } else {
        format!("¥{}", grouped)
    }
}

/// Format a balance change; charges get an explicit `+`.
///
/// Example: `1000` -> `"+¥1,000"`, `-180` -> `"-¥180"`, `0` -> `"¥0"`
pub fn format_yen_delta(delta: i64) -> String {
    if delta > 0 {
        format!("+{}", format_yen(delta))
    } else {
        format_yen(delta)
    }
}
