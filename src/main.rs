use clap::{Parser as ClapParser, Subcommand};
use csquery::cli::{self, CliError, RenderOptions, RenderResult};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "csquery")]
#[command(about = "csquery - Build structured search queries from JSON query documents")]
#[command(version)]
struct Cli {
    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a JSON query document to a query string
    Render {
        /// The query document (reads --input or stdin if not provided)
        #[arg(conflicts_with = "input")]
        document: Option<String>,

        /// JSON query document
        #[arg(short, long)]
        input: Option<String>,

        /// Only validate the document, don't print the query
        #[arg(long)]
        check: bool,
    },

    /// List operators and the options each accepts
    Operators,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(level.into())
                .from_env_lossy(),
        )
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Render {
            document,
            input,
            check,
        } => run_render(document.or(input), check),
        Commands::Operators => {
            print!("{}", cli::get_operators_overview());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_render(input: Option<String>, check: bool) -> Result<(), CliError> {
    let input = match input {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Some(buffer)
        }
        None => None,
    };

    if let Some(doc) = &input {
        tracing::info!(bytes = doc.len(), check, "rendering query document");
    }

    let options = RenderOptions {
        input,
        check_only: check,
    };

    match cli::execute_render(&options)? {
        RenderResult::Valid => println!("Query document is valid"),
        RenderResult::Query(query) => println!("{}", query),
    }
    Ok(())
}
