use std::error::Error;
use std::io::Read;
use std::sync::Arc;

use ark_llm_service::{ArkChatService, ArkConfig};
use story_suggester::StoryService;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    // Load environment variables from .env file.
    // Fails if .env file not found, not readable or invalid.
    dotenvy::dotenv()?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("info"))
        .unwrap();

    let subscriber = FmtSubscriber::builder().with_env_filter(filter).finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cfg = ArkConfig::from_env()?;
    let client = Arc::new(ArkChatService::new(cfg)?);
    let service = StoryService::new(client);

    // One requirement per run, read from stdin; the host application is the
    // real caller and attaches at the StoryService seam.
    let mut requirement = String::new();
    std::io::stdin().read_to_string(&mut requirement)?;

    let story = service.generate_single_story(requirement.trim()).await?;
    println!("{}", serde_json::to_string_pretty(&story)?);

    Ok(())
}
