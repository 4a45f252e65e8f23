use dotenv::dotenv;
use llmgate::{CompletionGateway, GatewayConfig, build_messages};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let gateway = CompletionGateway::new(GatewayConfig::from_env()?)?;

    let verdict = gateway
        .choose(
            build_messages("Is Rust memory safe?", None),
            vec!["yes".to_string(), "no".to_string(), "mostly".to_string()],
        )
        .await?;
    println!("Verdict: {verdict}");

    let year = gateway
        .match_regex(
            build_messages("In which year was Rust 1.0 released? Answer with the year.", None),
            r"\d{4}",
        )
        .await?;
    println!("Year: {year}");

    let vector = gateway.embed("memory safety without garbage collection").await?;
    println!("Embedding dimensions: {}", vector.len());

    Ok(())
}
