//! Chart figures for the external plotting library.
//!
//! Figures are plain serializable data (traces plus layout); nothing here
//! draws anything.

use crate::models::{ExpenseAnalysis, MonthlyPoint};
use crate::trend::{TrendError, TrendSmoother};
use serde::Serialize;

const EXPENSE_COLOR: &str = "#0d6efd";
const TREND_COLOR: &str = "#dc3545";
const PIE_COLORS: [&str; 8] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40", "#FF6384", "#36A2EB",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter(ScatterTrace),
    Pie(PieTrace),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterTrace {
    pub name: String,
    pub mode: String,
    pub x: Vec<String>,
    pub y: Vec<Option<f64>>,
    pub line: Line,
    pub hovertemplate: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Line {
    pub color: String,
    pub width: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieTrace {
    pub labels: Vec<String>,
    pub values: Vec<f64>,
    pub hole: f64,
    pub colors: Vec<String>,
    pub textinfo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Layout {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis_title: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub annotations: Vec<String>,
    pub height: u32,
    pub showlegend: bool,
}

/// Raw monthly expenses overlaid with their moving-average trend.
///
/// Returns `Ok(None)` when there are no months to plot.
pub fn trend_figure(points: &[MonthlyPoint], window: usize) -> Result<Option<Figure>, TrendError> {
    let smoother = TrendSmoother::new(window)?;
    if points.is_empty() {
        return Ok(None);
    }

    let months: Vec<String> = points.iter().map(|point| point.month.clone()).collect();
    let raw = ScatterTrace {
        name: "Monthly Expenses".to_string(),
        mode: "lines+markers".to_string(),
        x: months.clone(),
        y: points.iter().map(|point| Some(point.amount)).collect(),
        line: Line {
            color: EXPENSE_COLOR.to_string(),
            width: 2,
            dash: None,
        },
        hovertemplate: "Month: %{x}<br>Amount: ₹%{y:.2f}<extra></extra>".to_string(),
    };
    let trend = ScatterTrace {
        name: format!("{window}-Month Trend"),
        mode: "lines".to_string(),
        x: months,
        y: smoother.smooth(points),
        line: Line {
            color: TREND_COLOR.to_string(),
            width: 2,
            dash: Some("dot".to_string()),
        },
        hovertemplate: "Month: %{x}<br>Trend: ₹%{y:.2f}<extra></extra>".to_string(),
    };

    Ok(Some(Figure {
        data: vec![Trace::Scatter(raw), Trace::Scatter(trend)],
        layout: Layout {
            title: "Monthly Expense Trend (Last 12 Months)".to_string(),
            xaxis_title: Some("Month".to_string()),
            yaxis_title: Some("Total Expenses (₹)".to_string()),
            annotations: Vec::new(),
            height: 400,
            showlegend: true,
        },
    }))
}

/// Spending per category as a donut chart. `None` when nothing was spent.
pub fn breakdown_figure(analysis: &ExpenseAnalysis) -> Option<Figure> {
    if analysis.breakdown.is_empty() {
        return None;
    }

    let labels = analysis
        .breakdown
        .iter()
        .map(|(category, share)| format!("{category} ({:.1}%)", share.percentage))
        .collect();
    let values = analysis.breakdown.values().map(|share| share.amount).collect();
    let pie = PieTrace {
        labels,
        values,
        hole: 0.4,
        colors: PIE_COLORS.iter().map(|color| color.to_string()).collect(),
        textinfo: "label+percent".to_string(),
    };

    Some(Figure {
        data: vec![Trace::Pie(pie)],
        layout: Layout {
            annotations: vec![format!("Total: ₹{:.2}", analysis.total_spent)],
            height: 400,
            showlegend: true,
            ..Layout::default()
        },
    })
}
