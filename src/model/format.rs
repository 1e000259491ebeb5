//! Display formatting shared by the text view and the export adapter.

/// Format an amount as Indian rupees with lakh/crore digit grouping.
///
/// `15000.0` becomes `"₹15,000"`, `1500000.0` becomes `"₹15,00,000"`.
/// At most two fraction digits are kept and trailing zeros are dropped.
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return format!("₹{amount}");
    }

    let negative = amount < 0.0;
    // Saturating float-to-int cast; amounts beyond u64 paise are not meaningful.
    let paise = (amount.abs() * 100.0).round() as u64;
    let whole = paise / 100;
    let fraction = paise % 100;

    let mut out = String::from("₹");
    if negative && paise > 0 {
        out.push('-');
    }
    out.push_str(&group_indian(whole));

    if fraction != 0 {
        if fraction % 10 == 0 {
            out.push_str(&format!(".{}", fraction / 10));
        } else {
            out.push_str(&format!(".{fraction:02}"));
        }
    }
    out
}

/// Group digits as 12,34,56,789: last three, then pairs.
fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}
