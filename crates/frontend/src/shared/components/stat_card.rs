use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum StatFormat {
    Count,
    Money,
}

pub fn format_stat(value: f64, format: StatFormat) -> String {
    match format {
        StatFormat::Count => format_thousands(value.round() as i64),
        StatFormat::Money => {
            let cents = (value * 100.0).round() as i64;
            let sign = if cents < 0 { "-" } else { "" };
            let cents = cents.abs();
            format!("{}₹{}.{:02}", sign, format_thousands(cents / 100), cents % 100)
        }
    }
}

fn format_thousands(n: i64) -> String {
    let s = n.abs().to_string();
    let mut result = String::new();
    for (i, ch) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    if n < 0 {
        result.push('-');
    }
    result.chars().rev().collect()
}

#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,
    /// Icon name from the icon() helper
    icon_name: &'static str,
    /// None while loading
    #[prop(into)]
    value: Signal<Option<f64>>,
    format: StatFormat,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || match value.get() {
                        Some(v) => format_stat(v, format),
                        None => "—".to_string(),
                    }}
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_count() {
        assert_eq!(format_stat(0.0, StatFormat::Count), "0");
        assert_eq!(format_stat(1234567.0, StatFormat::Count), "1,234,567");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_stat(1234.5, StatFormat::Money), "₹1,234.50");
        assert_eq!(format_stat(-0.25, StatFormat::Money), "-₹0.25");
    }
}
