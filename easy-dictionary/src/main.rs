use dictionary::local::{LocalExplainer, Resources};
use dictionary::Config;
use tracing::debug;
use tracing_subscriber::EnvFilter;
use utilities::{input, normalize_input};

mod utilities;

const GREETING: &str = "🧠 Hello! I can help you understand English words. Type 'exit' to stop.";
const GOODBYE: &str = "👋 Goodbye! Keep learning.";

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    if let Ok(path) = dotenvy::dotenv() {
        debug!(path = %path.display(), "loaded environment file");
    }
    let config = Config::from_env();
    let resources = Resources::load(&config.data)?;
    let explainer = LocalExplainer::from_resources(&resources);

    println!("{GREETING}");
    while let Some(line) = input("\nEnter an English word: ")? {
        let word = normalize_input(&line);
        match word.as_str() {
            "exit" => break,
            "" => continue,
            word => println!("{}", explainer.explain(word)),
        }
    }
    println!("{GOODBYE}");
    Ok(())
}
