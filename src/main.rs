mod api;
mod server;

use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::Path;

use tweetcast::banding::{compare, Winner};
use tweetcast::config::AppConfig;
use tweetcast::predict_client::{PredictClient, TweetFeatures};
use tweetcast::{auth, band_counts, format_number, RawCounts, ScoreCard};

#[derive(Parser)]
#[command(name = "tweetcast", about = "Tweet engagement prediction front-end")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Predict engagement for one draft tweet
    Predict(PredictArgs),
    /// Predict two drafts side by side and pick a winner
    Split(SplitArgs),
    /// Band raw counts without calling the prediction service
    Score(ScoreArgs),
    /// Print an OAuth2 PKCE authorization URL
    LoginUrl,
    /// Serve the webapp and JSON API
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone, Default)]
struct PredictArgs {
    #[arg(long)]
    text: Option<String>,
    #[arg(long)]
    image: bool,
    #[arg(long)]
    video: bool,
    #[arg(long)]
    link: bool,
    #[arg(long)]
    mention: bool,
    #[arg(long)]
    crypto: bool,
    #[arg(long)]
    quote: bool,
    #[arg(long)]
    poll: bool,
    /// Scheduled post time, RFC 3339; defaults to now
    #[arg(long)]
    at: Option<String>,
    #[arg(long)]
    followers: Option<u64>,
    #[arg(long)]
    views: Option<u64>,
    /// Emit the card as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct SplitArgs {
    #[arg(long)]
    text_a: String,
    #[arg(long)]
    text_b: String,
    #[arg(long)]
    at: Option<String>,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
struct ScoreArgs {
    #[arg(long)]
    likes: u64,
    #[arg(long)]
    retweets: u64,
    #[arg(long)]
    replies: u64,
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8765)]
    port: u16,
    #[arg(long, default_value = "../webapp/dist")]
    web_root: String,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    init_tracing();
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or(Command::Predict(PredictArgs::default()));

    match command {
        Command::Predict(args) => run_predict(args).await,
        Command::Split(args) => run_split(args).await,
        Command::Score(args) => run_score(args),
        Command::LoginUrl => run_login_url(),
        Command::Serve(args) => server::serve(args).await,
    }
}

async fn run_predict(args: PredictArgs) -> Result<(), String> {
    let (config, _) = AppConfig::load(None)?;
    let client = PredictClient::from_config(&config).map_err(|err| err.to_string())?;

    let time_posted = parse_post_time(args.at.as_deref())?;
    let text = read_text(args.text)?;

    let mut features = TweetFeatures::new(text, time_posted);
    features.has_image = args.image;
    features.has_video = args.video;
    features.has_link = args.link;
    features.has_mention = args.mention;
    features.has_crypto_mention = args.crypto;
    features.is_quoting = args.quote;
    features.has_poll = args.poll;
    features.follower_count = args.followers;
    features.view_count = args.views;

    let counts = client
        .predict(&features)
        .await
        .map_err(|err| err.to_string())?;

    let card = band_counts(&counts);
    if args.json {
        print_json(&api::ApiPredictResponse::from_card(card))?;
    } else {
        print_card(&card);
    }
    Ok(())
}

async fn run_split(args: SplitArgs) -> Result<(), String> {
    let (config, _) = AppConfig::load(None)?;
    let client = PredictClient::from_config(&config).map_err(|err| err.to_string())?;

    let time_posted = parse_post_time(args.at.as_deref())?;
    let features_a = TweetFeatures::new(require_text(args.text_a, "--text-a")?, time_posted);
    let features_b = TweetFeatures::new(require_text(args.text_b, "--text-b")?, time_posted);

    let (counts_a, counts_b) = tokio::join!(client.predict(&features_a), client.predict(&features_b));
    let counts_a = counts_a.map_err(|err| format!("tweet A: {}", err))?;
    let counts_b = counts_b.map_err(|err| format!("tweet B: {}", err))?;

    let outcome = compare(&counts_a, &counts_b);

    if args.json {
        print_json(&api::ApiSplitResponse::from_outcome(outcome))?;
        return Ok(());
    }

    println!("Tweet A:");
    print_card(&outcome.card_a);
    println!("\nTweet B:");
    print_card(&outcome.card_b);
    println!(
        "\nWinner: {}",
        match outcome.winner {
            Winner::TweetA => "Tweet A",
            Winner::TweetB => "Tweet B",
        }
    );

    Ok(())
}

fn run_score(args: ScoreArgs) -> Result<(), String> {
    let counts = RawCounts::new(args.likes, args.retweets, args.replies);
    let card = band_counts(&counts);
    if args.json {
        print_json(&api::ApiPredictResponse::from_card(card))?;
    } else {
        print_card(&card);
    }
    Ok(())
}

fn run_login_url() -> Result<(), String> {
    let (config, _) = AppConfig::load(None)?;
    let challenge = auth::login_challenge(&config.auth);

    println!("Authorization URL: {}", challenge.url);
    println!("Code verifier: {}", challenge.verifier);
    println!("State: {}", challenge.state);

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize output: {}", err))?;
    println!("{}", payload);
    Ok(())
}

fn print_card(card: &ScoreCard) {
    println!(
        "Likes: {} ({})",
        format_number(card.likes.value),
        card.likes.tier.label()
    );
    println!(
        "Retweets: {} ({})",
        format_number(card.retweets.value),
        card.retweets.tier.label()
    );
    println!(
        "Replies: {} ({})",
        format_number(card.replies.value),
        card.replies.tier.label()
    );
    println!(
        "Engagement score: {}/100 ({})",
        card.engagement.value,
        card.engagement.tier.label()
    );
}

fn parse_post_time(arg: Option<&str>) -> Result<DateTime<Utc>, String> {
    match arg {
        Some(raw) => DateTime::parse_from_rfc3339(raw)
            .map(|parsed| parsed.with_timezone(&Utc))
            .map_err(|err| format!("invalid --at (RFC 3339): {}", err)),
        None => Ok(Utc::now()),
    }
}

fn require_text(value: String, flag: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{} must not be empty", flag));
    }
    Ok(trimmed.to_string())
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing tweet text: pass --text or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
