use crate::config::Config;
use crate::errors::{AppError, Result};
use crate::models::{
    Advice, ApiMessage, BudgetAlert, ChatReply, ErrorBody, ExpenseAnalysis, ExpenseCreated,
    ExpenseRequest, GoalRequest, GoalSaved, MarketSnapshot, SipRequest, SipResult,
};
use reqwest::{Client, Method, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, warn};

/// Typed client for the finance server's `/finance` endpoints.
#[derive(Debug, Clone)]
pub struct FinanceClient {
    http: Client,
    base_url: String,
}

impl FinanceClient {
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self::with_client(http, &config.base_url))
    }

    pub fn with_client(http: Client, base_url: &str) -> Self {
        Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn calculate_sip(&self, request: &SipRequest) -> Result<SipResult> {
        let builder = self.request(Method::POST, "/finance/sip-calculator").json(request);
        send(builder).await
    }

    pub async fn add_expense(&self, request: &ExpenseRequest) -> Result<ExpenseCreated> {
        let builder = self.request(Method::POST, "/finance/expenses").json(request);
        send(builder).await
    }

    pub async fn update_expense(&self, id: i64, request: &ExpenseRequest) -> Result<ApiMessage> {
        let builder = self
            .request(Method::PUT, &format!("/finance/expenses/{id}"))
            .json(request);
        send(builder).await
    }

    pub async fn delete_expense(&self, id: i64) -> Result<ApiMessage> {
        send(self.request(Method::DELETE, &format!("/finance/expenses/{id}"))).await
    }

    pub async fn expense_analysis(&self) -> Result<ExpenseAnalysis> {
        send(self.request(Method::GET, "/finance/expenses/analysis")).await
    }

    pub async fn budget_alerts(&self) -> Result<Vec<BudgetAlert>> {
        send(self.request(Method::GET, "/finance/budget/alerts")).await
    }

    pub async fn create_goal(&self, request: &GoalRequest) -> Result<GoalSaved> {
        let builder = self.request(Method::POST, "/finance/goals").json(request);
        send(builder).await
    }

    pub async fn update_goal(&self, id: i64, request: &GoalRequest) -> Result<GoalSaved> {
        let builder = self
            .request(Method::PUT, &format!("/finance/goals/{id}"))
            .json(request);
        send(builder).await
    }

    pub async fn delete_goal(&self, id: i64) -> Result<ApiMessage> {
        send(self.request(Method::DELETE, &format!("/finance/goals/{id}"))).await
    }

    pub async fn market_data(&self) -> Result<MarketSnapshot> {
        send(self.request(Method::GET, "/finance/market-data")).await
    }

    /// The server only answers with JSON when the request looks like XHR.
    pub async fn advice(&self, topic: &str) -> Result<Advice> {
        let builder = self
            .request(Method::GET, "/finance/advice")
            .query(&[("topic", topic)])
            .header("X-Requested-With", "XMLHttpRequest");
        send(builder).await
    }

    pub async fn chat(&self, message: &str) -> Result<ChatReply> {
        if message.trim().is_empty() {
            return Err(AppError::invalid_argument("No message provided"));
        }
        let builder = self
            .request(Method::GET, "/finance/chat")
            .query(&[("message", message)]);
        send(builder).await
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = format!("{}{path}", self.base_url);
        debug!(%method, %url, "finance request");
        self.http.request(method, url)
    }
}

async fn send<T: DeserializeOwned>(builder: RequestBuilder) -> Result<T> {
    let response = builder.send().await?;
    let response = check_status(response).await?;
    Ok(response.json::<T>().await?)
}

async fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = error_message(&body_or_cause(response.text().await));
    warn!(%status, %message, "finance server rejected request");
    Err(AppError::status(status, message))
}

fn body_or_cause<E: std::fmt::Display>(body: std::result::Result<String, E>) -> String {
    body.unwrap_or_else(|err| err.to_string())
}

fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(parsed) => parsed.error,
        Err(_) => body.trim().to_string(),
    }
}
