//! Human-friendly number rendering for resource and power counters.

/// Render a counter compactly: `1.5K`, `2.5M`, or the plain value below 1000.
///
/// Values are divided first and rounded to one decimal afterwards, so numbers
/// just under one million render as `1000.0K` rather than `1.0M`.
#[must_use]
pub fn format_number(value: f64) -> String {
    if value >= 1_000_000.0 {
        format!("{}M", to_fixed_one(value / 1_000_000.0))
    } else if value >= 1_000.0 {
        format!("{}K", to_fixed_one(value / 1_000.0))
    } else {
        locale_string(value)
    }
}

/// [`format_number`] for integer counters.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn format_count(value: u64) -> String {
    format_number(value as f64)
}

/// One-decimal rendering where an exact tie rounds towards the larger value.
///
/// `{:.1}` breaks ties to even (`1.25 → 1.2`); dashboards built on the browser
/// `toFixed` show `1.3`, so ties are detected and bumped. A one-decimal tie is
/// only representable when the value is an odd multiple of a quarter.
#[allow(clippy::float_cmp)]
fn to_fixed_one(value: f64) -> String {
    let quarters = value * 4.0;
    if quarters == quarters.trunc() && quarters % 2.0 != 0.0 {
        let tenths = (value * 10.0).floor() + 1.0;
        return format!("{:.1}", tenths / 10.0);
    }
    format!("{value:.1}")
}

/// en-US rendering for values below one thousand: at most three decimals,
/// trailing zeros dropped, thousands grouped with `,`.
///
/// Exact ties round away from zero like `Intl.NumberFormat`. A three-decimal
/// tie is only representable when the value is an odd multiple of 1/16.
#[allow(clippy::float_cmp)]
fn locale_string(value: f64) -> String {
    if !value.is_finite() {
        return if value.is_nan() {
            "NaN".to_string()
        } else {
            "-∞".to_string()
        };
    }
    let sixteenths = value * 16.0;
    let rendered = if sixteenths == sixteenths.trunc() && sixteenths % 2.0 != 0.0 {
        let thousandths = (value * 1_000.0).trunc() + value.signum();
        format!("{:.3}", thousandths / 1_000.0)
    } else {
        format!("{value:.3}")
    };

    let (integer, fraction) = rendered.split_once('.').unwrap_or((rendered.as_str(), ""));
    let fraction = fraction.trim_end_matches('0');
    let integer = group_thousands(integer);
    if integer == "-0" && fraction.is_empty() {
        return "0".to_string();
    }
    if fraction.is_empty() {
        integer
    } else {
        format!("{integer}.{fraction}")
    }
}

/// Insert `,` every three digits from the right, keeping a leading sign.
fn group_thousands(integer: &str) -> String {
    let (sign, digits) = match integer.strip_prefix('-') {
        Some(digits) => ("-", digits),
        None => ("", integer),
    };
    let mut grouped = String::with_capacity(integer.len() + digits.len() / 3);
    grouped.push_str(sign);
    for (index, digit) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}
