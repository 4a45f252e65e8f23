use dotenv::dotenv;
use llmgate::{CompletionGateway, GatewayConfig, build_messages};
use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
struct Analysis {
    sentiment: String,
    confidence: f32,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let gateway = CompletionGateway::new(GatewayConfig::from_env()?)?;

    let messages = build_messages(
        "Analyze: 'This library is amazing!'",
        Some("You are a sentiment analyst."),
    );
    let analysis: Analysis = gateway.generate_structured(messages).await?;

    println!(
        "Sentiment: {}, Confidence: {}",
        analysis.sentiment, analysis.confidence
    );

    Ok(())
}
