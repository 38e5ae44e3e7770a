use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

/// Placeholder for absent optional values, shared by every section so the
/// two targets print identical cells.
pub const BLANK: &str = "-";

pub fn opt(value: &Option<String>) -> String {
    value.clone().unwrap_or_else(|| BLANK.to_string())
}

pub fn date(value: NaiveDate) -> String {
    value.format("%d %b %Y").to_string()
}

pub fn opt_date(value: &Option<NaiveDate>) -> String {
    value.map(date).unwrap_or_else(|| BLANK.to_string())
}

pub fn time(value: NaiveTime) -> String {
    value.format("%H:%M").to_string()
}

pub fn opt_time(value: &Option<NaiveTime>) -> String {
    value.map(time).unwrap_or_else(|| BLANK.to_string())
}

pub fn opt_datetime(value: &Option<DateTime<Utc>>) -> String {
    value
        .map(|v| v.format("%d %b %Y %H:%M").to_string())
        .unwrap_or_else(|| BLANK.to_string())
}

pub fn opt_i32(value: &Option<i32>) -> String {
    value.map(|v| v.to_string()).unwrap_or_else(|| BLANK.to_string())
}

pub fn yes_no(value: bool) -> String {
    if value { "Yes" } else { "No" }.to_string()
}

/// Currency formatting with thousands grouping, e.g. `$12,480.50`.
pub fn money(amount: f64) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    let sign = if negative { "-" } else { "" };
    format!("{}${}.{:02}", sign, grouped, frac)
}

pub fn opt_money(value: &Option<f64>) -> String {
    value.map(money).unwrap_or_else(|| BLANK.to_string())
}
