use std::io;

use jusibe::{JusibeClient, SmsPayload};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let to = std::env::var("JUSIBE_TO").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "JUSIBE_TO environment variable is required",
        )
    })?;
    let from = std::env::var("JUSIBE_FROM").unwrap_or_else(|_| "Jusibe".to_owned());
    let message = std::env::var("JUSIBE_MESSAGE")
        .unwrap_or_else(|_| "Hello from the jusibe demo.".to_owned());

    let client = JusibeClient::from_env()?;
    let payload = SmsPayload::from_parts(to, from, message)?;

    let response = client.send_sms(&payload).await?;
    println!(
        "status: {:?}, message_id: {:?}, sms_credits_used: {:?}",
        response.status(),
        response.message_id(),
        response.sms_credits_used()
    );

    Ok(())
}
