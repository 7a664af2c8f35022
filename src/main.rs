mod completion;
mod conversion;
mod demo;

use serde::Deserialize;
use structopt::StructOpt;
use tracing_subscriber::EnvFilter;

use completion::openai::{self, OpenAiClient};
use conversion::DemoConfig;

#[derive(Deserialize, Debug)]
struct Environment {
    openai_api_key: Option<String>,
    openai_base_url: Option<String>,
}

#[derive(StructOpt, Debug)]
#[structopt(
    name = "romaji-kanji-demo",
    about = "Convert sample romaji sentences to Japanese and kanji words to hiragana with a chat-completion model"
)]
struct Args {
    /// Model identifier to request completions from (default: gpt-3.5-turbo)
    model: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let environment = envy::from_env::<Environment>()?;
    let args = Args::from_args();

    let config = DemoConfig::default().with_model(args.model);
    let base_url = environment
        .openai_base_url
        .unwrap_or_else(|| openai::DEFAULT_BASE_URL.to_owned());
    tracing::info!(model = %config.model, %base_url, "starting conversion demo");

    let client = OpenAiClient::new(base_url, environment.openai_api_key);

    let stdout = std::io::stdout();
    demo::run(&client, &config, &mut stdout.lock()).await
}
