use crate::errors::{AppError, Result};
use crate::models::{ExpenseRequest, GoalRequest, SipRequest};
use chrono::NaiveDate;

const CUSTOM_CATEGORY: &str = "custom";

#[derive(Debug, Clone, Default)]
pub struct ExpenseForm {
    pub amount: String,
    pub category: String,
    pub custom_category: Option<String>,
    pub description: Option<String>,
    pub date: String,
}

#[derive(Debug, Clone, Default)]
pub struct GoalForm {
    pub name: String,
    pub target_amount: String,
    pub current_amount: String,
    pub target_date: String,
}

pub fn parse_sip(monthly_investment: &str, expected_return: &str, years: &str) -> Result<SipRequest> {
    let years = years
        .trim()
        .parse::<u32>()
        .map_err(|_| AppError::invalid_argument(format!("years must be a whole number, got '{years}'")))?;

    Ok(SipRequest {
        monthly_investment: parse_amount("monthly_investment", monthly_investment)?,
        expected_return: parse_amount("expected_return", expected_return)?,
        years,
    })
}

impl ExpenseForm {
    /// Builds a form from command-line words. `rest` may carry
    /// `--custom <name>` anywhere; the remaining words form the description.
    pub fn from_args(amount: &str, category: &str, date: &str, rest: &[&str]) -> Self {
        let mut custom_category = None;
        let mut description = Vec::new();
        let mut words = rest.iter();
        while let Some(word) = words.next() {
            if *word == "--custom" {
                custom_category = words.next().map(|name| name.to_string());
            } else {
                description.push(*word);
            }
        }

        Self {
            amount: amount.to_string(),
            category: category.to_string(),
            custom_category,
            description: (!description.is_empty()).then(|| description.join(" ")),
            date: date.to_string(),
        }
    }

    /// Dates after `today` are rejected, matching the form's date picker limit.
    pub fn into_request(self, today: NaiveDate) -> Result<ExpenseRequest> {
        let category = if self.category.trim() == CUSTOM_CATEGORY {
            let custom = self.custom_category.as_deref().map(str::trim).unwrap_or_default();
            if custom.is_empty() {
                return Err(AppError::invalid_argument("Please enter a custom category"));
            }
            custom.to_string()
        } else {
            self.category.trim().to_string()
        };
        if category.is_empty() {
            return Err(AppError::invalid_argument("category is required"));
        }

        let date = parse_date("date", &self.date)?;
        if date > today {
            return Err(AppError::invalid_argument(format!(
                "date {date} is in the future"
            )));
        }

        Ok(ExpenseRequest {
            amount: parse_amount("amount", &self.amount)?,
            category,
            description: self.description.unwrap_or_default(),
            date,
        })
    }
}

impl GoalForm {
    pub fn into_request(self) -> Result<GoalRequest> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::invalid_argument("goal name is required"));
        }

        let current_amount = if self.current_amount.trim().is_empty() {
            0.0
        } else {
            parse_amount("current_amount", &self.current_amount)?
        };

        Ok(GoalRequest {
            name: name.to_string(),
            target_amount: parse_amount("target_amount", &self.target_amount)?,
            current_amount,
            target_date: parse_date("target_date", &self.target_date)?,
        })
    }
}

pub fn parse_amount(field: &str, raw: &str) -> Result<f64> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(AppError::invalid_argument(format!(
            "{field} must be a number, got '{raw}'"
        ))),
    }
}

pub fn parse_date(field: &str, raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::invalid_argument(format!("{field} must be YYYY-MM-DD, got '{raw}'"))
    })
}

pub fn parse_id(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| AppError::invalid_argument(format!("id must be an integer, got '{raw}'")))
}
