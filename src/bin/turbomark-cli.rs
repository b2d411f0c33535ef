use clap::{Parser, Subcommand};
use serde_json::{json, Value};

#[derive(Parser)]
#[command(name = "turbomark-cli")]
#[command(about = "Command-line client for the TURBOMARK AI Engine", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8000")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the service description
    Info,
    /// Check engine health
    Health,
    /// Generate a marketing campaign
    Campaign {
        #[arg(long)]
        campaign_type: Option<String>,
        #[arg(long)]
        audience: Option<String>,
        #[arg(long)]
        product: Option<String>,
    },
    /// Show the revenue forecast
    Forecast,
    /// Score a lead
    ScoreLead,
    /// Show campaign optimizations
    Optimize,
}

/// Campaign request body containing only the supplied fields.
fn campaign_body(
    campaign_type: Option<String>,
    audience: Option<String>,
    product: Option<String>,
) -> Value {
    let mut body = serde_json::Map::new();
    if let Some(v) = campaign_type {
        body.insert("campaign_type".into(), json!(v));
    }
    if let Some(v) = audience {
        body.insert("target_audience".into(), json!(v));
    }
    if let Some(v) = product {
        body.insert("product".into(), json!(v));
    }
    Value::Object(body)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    let res = match cli.command {
        Commands::Info => client.get(format!("{}/", base)).send().await?,
        Commands::Health => client.get(format!("{}/health", base)).send().await?,
        Commands::Campaign {
            campaign_type,
            audience,
            product,
        } => {
            client
                .post(format!("{}/ai/generate-campaign", base))
                .json(&campaign_body(campaign_type, audience, product))
                .send()
                .await?
        }
        Commands::Forecast => {
            client
                .get(format!("{}/ai/revenue-forecast", base))
                .send()
                .await?
        }
        Commands::ScoreLead => client.post(format!("{}/ai/score-lead", base)).send().await?,
        Commands::Optimize => client.get(format!("{}/ai/optimize", base)).send().await?,
    };

    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: engine returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_campaign_body_only_sends_supplied_fields() {
        assert_eq!(campaign_body(None, None, None), json!({}));
        assert_eq!(
            campaign_body(Some("sms".into()), None, Some("SaaS".into())),
            json!({"campaign_type": "sms", "product": "SaaS"})
        );
    }

    #[test]
    fn test_cli_parses_campaign_flags() {
        let cli = Cli::try_parse_from([
            "turbomark-cli",
            "--url",
            "http://engine:9000",
            "campaign",
            "--product",
            "SaaS",
        ])
        .unwrap();
        assert_eq!(cli.url, "http://engine:9000");
        match cli.command {
            Commands::Campaign { product, .. } => assert_eq!(product.as_deref(), Some("SaaS")),
            _ => panic!("expected campaign subcommand"),
        }
    }
}
