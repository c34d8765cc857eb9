use anyhow::Context;
use env_logger::Env;
use postcraft::agent::{GenerationRequest, Generator};
use postcraft::config::AppConfig;
use postcraft::gemini::GeminiClient;
use postcraft::news::NewsFeed;
use std::env;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse the specified (or default) .env file
    let dotenv_path = env::var("POSTCRAFT_DOTENV_PATH").unwrap_or_else(|_| ".env".to_string());
    let dotenv_result = dotenvy::from_path(&dotenv_path);

    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    match dotenv_result {
        Ok(()) => log::info!("Loaded env from {}", dotenv_path),
        Err(err) => log::debug!("No .env loaded from {}: {}", dotenv_path, err),
    }

    let config = AppConfig::from_env().context("Reading configuration")?;

    let args: Vec<String> = env::args().skip(1).collect();
    let request = match args.split_first() {
        Some((flag, draft)) if flag == "--improve" => {
            GenerationRequest::improve(draft.join(" "), config.persona)
        }
        _ => {
            let mut topic = args.join(" ");
            if topic.trim().is_empty() && config.seed_from_news {
                let feed = NewsFeed::new(config.feed.clone()).context("Configuring news feed")?;
                if let Some(candidate) = feed.fetch().await.first() {
                    log::info!("seeding topic from \"{}\"", candidate.title);
                    topic = candidate.to_topic();
                }
            }
            GenerationRequest::fresh(topic, config.persona)
        }
    };

    let generator = Generator::new(GeminiClient::new(config.gemini.clone())?);
    let today = chrono::Local::now().format("%B %-d, %Y").to_string();
    let post = generator.generate(&request, &today).await?;

    println!("{}", post);
    Ok(())
}
