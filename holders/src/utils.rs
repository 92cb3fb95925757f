use crate::constants::ADDRESS_DISPLAY_MAX_LEN;
use crate::constants::ADDRESS_PREFIX_LEN;
use crate::constants::ADDRESS_SUFFIX_LEN;
use crate::constants::UAKT_PER_AKT;

pub fn uakt_to_akt(uakt: f64) -> f64 {
    uakt / UAKT_PER_AKT
}

/// Round half away from zero to `places` decimals
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Share of `total_supply` held by `balance`, both in the same unit, rounded to 2 decimals.
/// A non-positive supply yields 0.
pub fn percentage_of_supply(balance: f64, total_supply: f64) -> f64 {
    if total_supply <= 0.0 || !total_supply.is_finite() {
        return 0.0;
    }
    round_to(balance / total_supply * 100.0, 2)
}

/// Shorten long bech32 addresses to `akash1abcde...wxyz`
pub fn truncate_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= ADDRESS_DISPLAY_MAX_LEN {
        return address.to_string();
    }

    let prefix: String = chars[..ADDRESS_PREFIX_LEN].iter().collect();
    let suffix: String = chars[chars.len() - ADDRESS_SUFFIX_LEN..].iter().collect();
    format!("{}...{}", prefix, suffix)
}

/// `15.00M`, `2.50K`, or the amount with thousands separators and up to
/// three fraction digits
pub fn format_balance(balance: f64) -> String {
    if balance >= 1_000_000.0 {
        format!("{:.2}M", balance / 1_000_000.0)
    } else if balance >= 1_000.0 {
        format!("{:.2}K", balance / 1_000.0)
    } else {
        format_grouped(balance, 3)
    }
}

fn format_grouped(value: f64, max_fraction_digits: usize) -> String {
    let text = format!("{:.*}", max_fraction_digits, value);
    let (whole, fraction) = text.split_once('.').unwrap_or((&text, ""));
    let fraction = fraction.trim_end_matches('0');

    let whole = whole.parse::<i64>().map(group_thousands).unwrap_or_else(|_| whole.to_string());
    if fraction.is_empty() { whole } else { format!("{}.{}", whole, fraction) }
}

fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    if value < 0 {
        out.insert(0, '-');
    }
    out
}

/// Trim trailing zeros the way a JS number prints: `15.5`, `2`, `0.25`
pub fn format_percentage(value: f64) -> String {
    let rounded = round_to(value, 2);
    let text = format!("{:.2}", rounded);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    text.to_string()
}
