use crate::models::{
    AlertSeverity, BudgetAlert, ExpenseAnalysis, MarketSnapshot, MonthlyPoint, SavingsPlan,
    SipResult, TrendPoint,
};
use std::fmt::Write;

pub const NO_TREND_DATA: &str = "No trend data available";
pub const NO_EXPENSES: &str = "No expenses recorded yet. Add some expenses to see the breakdown.";

/// Formats an amount with Indian digit grouping (`12,34,567.5`), keeping at
/// most two fraction digits and dropping trailing zeros. Ties round away
/// from zero (`0.125` becomes `0.13`).
pub fn format_inr(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = (value.abs() * 100.0).round() / 100.0;
    let fixed = format!("{rounded:.2}");
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac_part.trim_end_matches('0');
    let negative = value < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    let mut out = String::with_capacity(fixed.len() + 8);
    if negative {
        out.push('-');
    }
    out.push_str(&group_indian(int_part));
    if !frac.is_empty() {
        out.push('.');
        out.push_str(frac);
    }
    out
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

pub fn render_sip(result: &SipResult) -> String {
    format!(
        "Total investment: ₹{}\nTotal returns:    ₹{}\nFinal amount:     ₹{}\n",
        format_inr(result.total_investment),
        format_inr(result.total_returns),
        format_inr(result.final_amount),
    )
}

pub fn render_trend(points: &[MonthlyPoint], trend: &[TrendPoint], window: usize) -> String {
    if points.is_empty() {
        return format!("{NO_TREND_DATA}\n");
    }

    let trend_header = format!("{window}-Month Trend");
    let mut out = String::new();
    let _ = writeln!(out, "{:<10} {:>14} {:>16}", "Month", "Amount", trend_header);
    for (point, smoothed) in points.iter().zip(trend) {
        let value = smoothed
            .value
            .map(format_inr)
            .unwrap_or_else(|| "-".to_string());
        let _ = writeln!(
            out,
            "{:<10} {:>14} {:>16}",
            point.month,
            format_inr(point.amount),
            value
        );
    }
    out
}

pub fn render_breakdown(analysis: &ExpenseAnalysis) -> String {
    if analysis.breakdown.is_empty() {
        return format!("{NO_EXPENSES}\n");
    }

    let mut out = String::new();
    for (category, share) in &analysis.breakdown {
        let _ = writeln!(
            out,
            "{:<16} ₹{:>14} {:>6.1}%",
            category,
            format_inr(share.amount),
            share.percentage
        );
    }
    let _ = writeln!(out, "Total: ₹{}", format_inr(analysis.total_spent));
    out
}

pub fn render_alerts(alerts: &[BudgetAlert]) -> String {
    if alerts.is_empty() {
        return "No budget alerts\n".to_string();
    }

    let mut out = String::new();
    for alert in alerts {
        let label = match alert.severity {
            AlertSeverity::Danger => "DANGER",
            AlertSeverity::Warning => "WARNING",
            AlertSeverity::Info => "INFO",
        };
        let _ = writeln!(out, "[{label}] {}: {}", alert.category, alert.message);
    }
    out
}

pub fn render_market(snapshot: &MarketSnapshot) -> String {
    match (&snapshot.nifty50, &snapshot.error) {
        (Some(quote), _) => format!(
            "NIFTY 50: {} ({:+.2}, {}) as of {}\n",
            format_inr(quote.price),
            quote.change,
            quote.change_percent,
            quote.last_updated
        ),
        (None, Some(error)) => format!("Market data unavailable: {error}\n"),
        (None, None) => "Market data unavailable\n".to_string(),
    }
}

pub fn render_savings_plan(plan: &SavingsPlan) -> String {
    match plan {
        SavingsPlan::Plan {
            monthly_saving_needed,
            total_amount_needed,
            months_remaining,
        } => format!(
            "Save ₹{} per month for {months_remaining:.1} months (₹{} in total)\n",
            format_inr(*monthly_saving_needed),
            format_inr(*total_amount_needed),
        ),
        SavingsPlan::Error { error } => format!("No savings plan: {error}\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CategoryShare, IndexQuote};
    use crate::trend::trend_series;

    #[test]
    fn inr_grouping() {
        assert_eq!(format_inr(0.0), "0");
        assert_eq!(format_inr(999.0), "999");
        assert_eq!(format_inr(1000.0), "1,000");
        assert_eq!(format_inr(100000.0), "1,00,000");
        assert_eq!(format_inr(1234567.5), "12,34,567.5");
        assert_eq!(format_inr(12345678.129), "1,23,45,678.13");
        assert_eq!(format_inr(-2500.25), "-2,500.25");
        assert_eq!(format_inr(-0.001), "0");
    }

    #[test]
    fn inr_ties_round_away_from_zero() {
        assert_eq!(format_inr(0.125), "0.13");
        assert_eq!(format_inr(1000.125), "1,000.13");
        assert_eq!(format_inr(-1000.125), "-1,000.13");
    }

    #[test]
    fn trend_values_round_like_amounts() {
        let points = vec![MonthlyPoint::new("Jan 2026", 1000.125)];
        let trend = trend_series(&points, 1).unwrap();
        let text = render_trend(&points, &trend, 1);
        let row = text.lines().nth(1).unwrap();
        assert_eq!(row.matches("1,000.13").count(), 2);
    }

    #[test]
    fn sip_lists_all_three_amounts() {
        let text = render_sip(&SipResult {
            total_investment: 600000.0,
            total_returns: 561695.36,
            final_amount: 1161695.36,
        });
        assert!(text.contains("₹6,00,000"));
        assert!(text.contains("₹5,61,695.36"));
        assert!(text.contains("₹11,61,695.36"));
    }

    #[test]
    fn trend_table_marks_missing_values() {
        let points = vec![
            MonthlyPoint::new("Jan 2026", 10.0),
            MonthlyPoint::new("Feb 2026", 20.0),
            MonthlyPoint::new("Mar 2026", 30.0),
        ];
        let trend = trend_series(&points, 3).unwrap();
        let text = render_trend(&points, &trend, 3);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("3-Month Trend"));
        assert!(lines[1].trim_end().ends_with('-'));
        assert!(lines[3].trim_end().ends_with("20"));
    }

    #[test]
    fn empty_views_have_placeholders() {
        assert_eq!(render_trend(&[], &[], 3).trim(), NO_TREND_DATA);
        assert_eq!(render_breakdown(&ExpenseAnalysis::default()).trim(), NO_EXPENSES);
        assert_eq!(render_alerts(&[]).trim(), "No budget alerts");
    }

    #[test]
    fn breakdown_and_alerts() {
        let mut analysis = ExpenseAnalysis {
            total_spent: 1500.0,
            ..ExpenseAnalysis::default()
        };
        analysis.breakdown.insert(
            "Rent".into(),
            CategoryShare {
                amount: 1500.0,
                percentage: 100.0,
            },
        );
        let text = render_breakdown(&analysis);
        assert!(text.contains("Rent"));
        assert!(text.contains("100.0%"));
        assert!(text.ends_with("Total: ₹1,500\n"));

        let alerts = render_alerts(&[BudgetAlert {
            category: "Food".into(),
            severity: AlertSeverity::Danger,
            message: "Critical: You have spent 95.0% of your Food budget".into(),
        }]);
        assert!(alerts.starts_with("[DANGER] Food: Critical"));
    }

    #[test]
    fn market_and_savings() {
        let snapshot = MarketSnapshot {
            nifty50: Some(IndexQuote {
                price: 22450.5,
                change: -35.2,
                change_percent: "-0.16%".into(),
                last_updated: "2026-03-15".into(),
            }),
            error: None,
        };
        assert_eq!(
            render_market(&snapshot),
            "NIFTY 50: 22,450.5 (-35.20, -0.16%) as of 2026-03-15\n"
        );
        assert!(render_market(&MarketSnapshot::default()).contains("unavailable"));

        let plan = SavingsPlan::Plan {
            monthly_saving_needed: 8333.33,
            total_amount_needed: 100000.0,
            months_remaining: 12.0,
        };
        assert_eq!(
            render_savings_plan(&plan),
            "Save ₹8,333.33 per month for 12.0 months (₹1,00,000 in total)\n"
        );
    }
}
