/// Locale-style display formatting for price estimates.
///
/// The UI shows whole currency units only: the fractional part is discarded
/// (truncated toward zero, never rounded) and digits are grouped in threes
/// with `.` as the separator.
pub fn format_with_dots(value: f64) -> String {
    let integer_value = value.trunc() as i64;
    let digits = integer_value.unsigned_abs().to_string();

    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    if integer_value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}
