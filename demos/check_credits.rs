use jusibe::JusibeClient;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let client = JusibeClient::from_env()?;
    let response = client.check_available_credits().await?;
    println!("sms_credits: {:?}", response.sms_credits());

    Ok(())
}
