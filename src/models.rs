use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyPoint {
    pub month: String,
    pub amount: f64,
}

impl MonthlyPoint {
    pub fn new(month: impl Into<String>, amount: f64) -> Self {
        Self {
            month: month.into(),
            amount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendPoint {
    pub month: String,
    pub value: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct CategoryShare {
    pub amount: f64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ExpenseAnalysis {
    #[serde(default)]
    pub total_spent: f64,
    #[serde(default)]
    pub breakdown: BTreeMap<String, CategoryShare>,
    #[serde(default)]
    pub monthly_trend: Vec<MonthlyPoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipRequest {
    pub monthly_investment: f64,
    pub expected_return: f64,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipResult {
    pub total_investment: f64,
    pub total_returns: f64,
    pub final_amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseRequest {
    pub amount: f64,
    pub category: String,
    #[serde(default)]
    pub description: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpenseCreated {
    pub message: String,
    pub id: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiMessage {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalRequest {
    pub name: String,
    pub target_amount: f64,
    #[serde(default)]
    pub current_amount: f64,
    pub target_date: NaiveDate,
}

/// Monthly savings needed to reach a goal, or the reason the server could not
/// compute one (for example a target date in the past).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SavingsPlan {
    Plan {
        monthly_saving_needed: f64,
        total_amount_needed: f64,
        months_remaining: f64,
    },
    Error {
        error: String,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalSaved {
    pub message: String,
    pub savings_plan: SavingsPlan,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertSeverity {
    Danger,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetAlert {
    pub category: String,
    pub severity: AlertSeverity,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IndexQuote {
    #[serde(default)]
    pub price: f64,
    #[serde(default)]
    pub change: f64,
    #[serde(default)]
    pub change_percent: String,
    #[serde(default)]
    pub last_updated: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct MarketSnapshot {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nifty50: Option<IndexQuote>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advice {
    pub text: String,
    #[serde(default)]
    pub html: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatReply {
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_analysis_defaults_every_field() {
        let analysis: ExpenseAnalysis = serde_json::from_str("{}").unwrap();
        assert_eq!(analysis, ExpenseAnalysis::default());
    }

    #[test]
    fn savings_plan_accepts_error_shape() {
        let saved: GoalSaved = serde_json::from_str(
            r#"{"message":"Goal created successfully","savings_plan":{"error":"Target date must be in the future"}}"#,
        )
        .unwrap();
        assert_eq!(
            saved.savings_plan,
            SavingsPlan::Error {
                error: "Target date must be in the future".into()
            }
        );
    }

    #[test]
    fn expense_request_serializes_date_as_iso_day() {
        let request = ExpenseRequest {
            amount: 120.5,
            category: "Food".into(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["date"], "2026-01-05");
    }
}
