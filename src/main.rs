use clap::{Args, Parser, Subcommand};
use log::{debug, error};
use post_generator::render::{render_json, render_text};
use post_generator::{GenerationResult, Platform, PostGenerator, ProviderKind};
use std::path::PathBuf;
use std::process::ExitCode;
use tokio::io::AsyncReadExt;

#[derive(Parser, Debug)]
#[command(name = "post-generator", version, about = "Turn raw text into social media posts")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Ask the LLM for posts and print them
    Generate(GenerateArgs),
    /// Split an already saved LLM response into posts
    Parse(ParseArgs),
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Raw text to write posts from (reads --file or stdin when omitted)
    text: Option<String>,

    /// Read the raw text from a file
    #[arg(short, long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Target platform, may be repeated (defaults to all)
    #[arg(short, long = "platform")]
    platforms: Vec<String>,

    /// LLM provider: openai, anthropic or google
    #[arg(long, env = "POSTGEN_PROVIDER")]
    provider: Option<String>,

    /// Model name for the provider
    #[arg(long)]
    model: Option<String>,

    /// Request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,

    /// Print JSON instead of text cards
    #[arg(long)]
    json: bool,
}

#[derive(Args, Debug)]
struct ParseArgs {
    /// Response file to parse (reads stdin when omitted)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print JSON instead of text cards
    #[arg(long)]
    json: bool,
}

async fn read_input(file: Option<&PathBuf>) -> Result<String, Box<dyn std::error::Error>> {
    match file {
        Some(path) => Ok(tokio::fs::read_to_string(path).await?),
        None => {
            let mut buffer = String::new();
            tokio::io::stdin().read_to_string(&mut buffer).await?;
            Ok(buffer)
        }
    }
}

fn print_result(result: &GenerationResult, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", render_json(result)?);
    } else {
        print!("{}", render_text(result));
    }
    Ok(())
}

async fn run_generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let text = match args.text {
        Some(text) => text,
        None => read_input(args.file.as_ref()).await?,
    };

    let platforms = if args.platforms.is_empty() {
        Platform::all()
    } else {
        args.platforms
            .iter()
            .map(|p| p.parse::<Platform>())
            .collect::<Result<Vec<_>, _>>()?
    };
    debug!("Platforms: {:?}", platforms);

    let mut builder = PostGenerator::builder().text(text).platforms(platforms);
    if let Some(provider) = args.provider {
        builder = builder.provider(provider.parse::<ProviderKind>()?);
    }
    if let Some(model) = args.model {
        builder = builder.model(model);
    }
    if let Some(timeout) = args.timeout {
        builder = builder.timeout(std::time::Duration::from_secs(timeout));
    }

    let result = builder.build().await?;
    print_result(&result, args.json)
}

async fn run_parse(args: ParseArgs) -> Result<(), Box<dyn std::error::Error>> {
    let response = read_input(args.file.as_ref()).await?;
    let result = GenerationResult::from_response(&response);
    print_result(&result, args.json)
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::init();

    let cli = Cli::parse();
    let outcome = match cli.command {
        Command::Generate(args) => run_generate(args).await,
        Command::Parse(args) => run_parse(args).await,
    };

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
