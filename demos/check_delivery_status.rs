use std::io;

use jusibe::{JusibeClient, MessageId};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let message_id = std::env::var("JUSIBE_MESSAGE_ID").map_err(|_| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            "JUSIBE_MESSAGE_ID environment variable is required",
        )
    })?;

    let client = JusibeClient::from_env()?;
    let response = client
        .check_delivery_status(&MessageId::new(message_id)?)
        .await?;

    match response.invalid_message_id() {
        Some(reason) => println!("lookup failed: {reason}"),
        None => println!(
            "status: {:?}, date_sent: {:?}, date_delivered: {:?}",
            response.status(),
            response.date_sent(),
            response.date_delivered()
        ),
    }

    Ok(())
}
