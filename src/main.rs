use chrono::Local;
use finintel::chart::{breakdown_figure, trend_figure};
use finintel::forms::{parse_id, parse_sip, ExpenseForm, GoalForm};
use finintel::{resolve_config, trend_series, ui, AppError, Config, FinanceClient};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

const USAGE: &str = "usage: finintel <command>

commands:
  trend                                         monthly expenses with moving-average trend
  chart                                         trend and breakdown figures as JSON
  breakdown                                     spending per category
  sip <monthly> <rate> <years>                  SIP projection
  alerts                                        budget alerts
  market                                        market snapshot
  expense add <amount> <category> <date> [--custom <name>] [description]
  expense update <id> <amount> <category> <date> [--custom <name>] [description]
  expense delete <id>
  goal create <name> <target> <date> [current]
  goal update <id> <name> <target> <date> [current]
  goal delete <id>
  advice [topic]
  chat <message>";

#[tokio::main]
async fn main() -> ExitCode {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(LevelFilter::INFO.into()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match start(&args).await {
        Ok(output) => {
            print!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("{err}");
            if matches!(err, AppError::InvalidArgument(_)) {
                eprintln!("{USAGE}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn start(args: &[String]) -> Result<String, AppError> {
    let config = resolve_config()?;
    let client = FinanceClient::new(&config)?;
    info!(base_url = %config.base_url, "using finance server");
    run(&client, &config, args).await
}

async fn run(client: &FinanceClient, config: &Config, args: &[String]) -> Result<String, AppError> {
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    match args.as_slice() {
        ["trend"] => {
            let analysis = client.expense_analysis().await?;
            let trend = trend_series(&analysis.monthly_trend, config.trend_window)?;
            Ok(ui::render_trend(&analysis.monthly_trend, &trend, config.trend_window))
        }
        ["chart"] => {
            let analysis = client.expense_analysis().await?;
            let figures = serde_json::json!({
                "trend": trend_figure(&analysis.monthly_trend, config.trend_window)?,
                "breakdown": breakdown_figure(&analysis),
            });
            Ok(format!("{}\n", serde_json::to_string_pretty(&figures)?))
        }
        ["breakdown"] => {
            let analysis = client.expense_analysis().await?;
            Ok(ui::render_breakdown(&analysis))
        }
        ["sip", monthly, rate, years] => {
            let request = parse_sip(monthly, rate, years)?;
            let result = client.calculate_sip(&request).await?;
            Ok(ui::render_sip(&result))
        }
        ["alerts"] => Ok(ui::render_alerts(&client.budget_alerts().await?)),
        ["market"] => Ok(ui::render_market(&client.market_data().await?)),
        ["expense", "add", amount, category, date, rest @ ..] => {
            let request = ExpenseForm::from_args(amount, category, date, rest).into_request(today())?;
            let created = client.add_expense(&request).await?;
            Ok(format!("{} (id {})\n", created.message, created.id))
        }
        ["expense", "update", id, amount, category, date, rest @ ..] => {
            let id = parse_id(id)?;
            let request = ExpenseForm::from_args(amount, category, date, rest).into_request(today())?;
            Ok(format!("{}\n", client.update_expense(id, &request).await?.message))
        }
        ["expense", "delete", id] => {
            let id = parse_id(id)?;
            Ok(format!("{}\n", client.delete_expense(id).await?.message))
        }
        ["goal", "create", name, target, date, current @ ..] => {
            let request = goal_form(name, target, date, current).into_request()?;
            let saved = client.create_goal(&request).await?;
            Ok(format!("{}\n{}", saved.message, ui::render_savings_plan(&saved.savings_plan)))
        }
        ["goal", "update", id, name, target, date, current @ ..] => {
            let id = parse_id(id)?;
            let request = goal_form(name, target, date, current).into_request()?;
            let saved = client.update_goal(id, &request).await?;
            Ok(format!("{}\n{}", saved.message, ui::render_savings_plan(&saved.savings_plan)))
        }
        ["goal", "delete", id] => {
            let id = parse_id(id)?;
            Ok(format!("{}\n", client.delete_goal(id).await?.message))
        }
        ["advice", topic @ ..] => {
            let topic = if topic.is_empty() {
                "personal finance basics".to_string()
            } else {
                topic.join(" ")
            };
            Ok(format!("{}\n", client.advice(&topic).await?.text))
        }
        ["chat", message @ ..] => Ok(format!("{}\n", client.chat(&message.join(" ")).await?.response)),
        _ => Err(AppError::invalid_argument(format!(
            "unknown command: '{}'",
            args.join(" ")
        ))),
    }
}

fn goal_form(name: &str, target: &str, date: &str, current: &[&str]) -> GoalForm {
    GoalForm {
        name: name.to_string(),
        target_amount: target.to_string(),
        current_amount: current.first().map(|value| value.to_string()).unwrap_or_default(),
        target_date: date.to_string(),
    }
}

fn today() -> chrono::NaiveDate {
    Local::now().date_naive()
}
