/// Render an amount in Indian-locale currency form with zero fractional
/// digits, e.g. `format_inr(1234567)` is `"₹12,34,567"`.
///
/// Display-only helper; persisted amounts stay as plain integers. Negative
/// amounts render as zero, matching how the UI treats missing prices.
pub fn format_inr(amount: i64) -> String {
    let amount = amount.max(0);
    let digits = amount.to_string();

    // en-IN grouping: last three digits, then groups of two.
    let head_len = digits.len().saturating_sub(3);
    let (head, tail) = digits.split_at(head_len);

    let mut grouped = String::new();
    let head_bytes = head.as_bytes();
    let lead = head_bytes.len() % 2;
    if lead == 1 {
        grouped.push(head_bytes[0] as char);
    }
    for pair in head_bytes[lead..].chunks(2) {
        if !grouped.is_empty() {
            grouped.push(',');
        }
        grouped.push(pair[0] as char);
        grouped.push(pair[1] as char);
    }

    if grouped.is_empty() {
        format!("₹{tail}")
    } else {
        format!("₹{grouped},{tail}")
    }
}
