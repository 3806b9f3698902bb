use std::{
    fs::File,
    io::{self, BufWriter, Write},
    path::{Path, PathBuf},
    process::ExitCode,
    time::Instant,
};

use clap::{Parser, Subcommand};
use lemma_search::{
    analyzer::{write_lemmas, write_tokens, Analyzer},
    constants::{
        DEFAULT_DOC_MAP_FILE, DEFAULT_INDEX_FILE, DEFAULT_LEMMAS_FILE, DEFAULT_PAGES_DIR,
        DEFAULT_TOKENS_FILE, EXIT_COMMAND,
    },
    corpus::load_corpus,
    tokenizer::Tokenizer,
    IndexBuilder, LemmaDictionary, Result, SearchEngine, SearchResult,
};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Writes the distinct tokens and the lemma dictionary of the crawled pages
    Lemmas {
        /// Path to the crawled pages
        #[arg(long, default_value = DEFAULT_PAGES_DIR)]
        pages_path: PathBuf,

        /// Where to write the token list
        #[arg(long, default_value = DEFAULT_TOKENS_FILE)]
        tokens_path: PathBuf,

        /// Where to write the lemma dictionary
        #[arg(long, default_value = DEFAULT_LEMMAS_FILE)]
        lemmas_path: PathBuf,
    },

    /// Builds the inverted index of the crawled pages
    Index {
        /// Path to the crawled pages
        #[arg(long, default_value = DEFAULT_PAGES_DIR)]
        pages_path: PathBuf,

        /// Path to the lemma dictionary
        #[arg(long, default_value = DEFAULT_LEMMAS_FILE)]
        lemmas_path: PathBuf,

        /// Where to write the inverted index
        #[arg(long, default_value = DEFAULT_INDEX_FILE)]
        index_path: PathBuf,

        /// Index documents on all cores
        #[arg(long, default_value = "false")]
        parallel: bool,
    },

    /// Answers boolean queries against a built index
    Search {
        /// Path to the inverted index
        #[arg(long, default_value = DEFAULT_INDEX_FILE)]
        index_path: PathBuf,

        /// Path to the lemma dictionary
        #[arg(long, default_value = DEFAULT_LEMMAS_FILE)]
        lemmas_path: PathBuf,

        /// Crawler listing of `<id>: <url>` lines, used to show page URLs when present
        #[arg(long, default_value = DEFAULT_DOC_MAP_FILE)]
        doc_map_path: PathBuf,

        /// Run a single query instead of reading them from stdin
        #[arg(short, long)]
        query: Option<String>,

        /// Print results as JSON
        #[arg(long, default_value = "false")]
        json: bool,
    },
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("lemma_search=info")),
        )
        .init();

    let args = Args::parse();

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Lemmas {
            pages_path,
            tokens_path,
            lemmas_path,
        } => generate_lemmas(&pages_path, &tokens_path, &lemmas_path),
        Command::Index {
            pages_path,
            lemmas_path,
            index_path,
            parallel,
        } => build_index(&pages_path, &lemmas_path, &index_path, parallel),
        Command::Search {
            index_path,
            lemmas_path,
            doc_map_path,
            query,
            json,
        } => {
            let doc_map_path = doc_map_path.exists().then_some(doc_map_path.as_path());
            if doc_map_path.is_none() {
                tracing::debug!("No document map, results will show ids only");
            }

            let engine = SearchEngine::from_paths(&index_path, &lemmas_path, doc_map_path)?;

            query.map_or_else(
                || interactive(&engine, json),
                |query| print_results(&engine.search(&query), json),
            )
        }
    }
}

fn generate_lemmas(pages_path: &Path, tokens_path: &Path, lemmas_path: &Path) -> Result<()> {
    let documents = load_corpus(pages_path, &Tokenizer::new()?)?;
    let tokens = documents
        .iter()
        .flat_map(|document| document.tokens.iter().map(String::as_str));

    let mut writer = BufWriter::new(File::create(tokens_path)?);
    write_tokens(tokens.clone(), &mut writer)?;
    writer.flush()?;

    let groups = Analyzer::new().lemma_groups(tokens);
    let mut writer = BufWriter::new(File::create(lemmas_path)?);
    write_lemmas(&groups, &mut writer)?;
    writer.flush()?;

    tracing::info!(
        lemmas = groups.len(),
        path = %lemmas_path.display(),
        "Wrote lemma dictionary"
    );

    Ok(())
}

fn build_index(
    pages_path: &Path,
    lemmas_path: &Path,
    index_path: &Path,
    parallel: bool,
) -> Result<()> {
    let dictionary = LemmaDictionary::load(lemmas_path)?;
    let documents = load_corpus(pages_path, &Tokenizer::new()?)?;

    let start = Instant::now();
    let index = if parallel {
        IndexBuilder::build_parallel(&documents, &dictionary)
    } else {
        IndexBuilder::build_from(&documents, &dictionary)
    };
    tracing::info!(lemmas = index.len(), elapsed = ?start.elapsed(), "Indexed documents");

    index.save(index_path)
}

fn interactive(engine: &SearchEngine, json: bool) -> Result<()> {
    let mut buffer = String::new();

    loop {
        println!("Enter Search Query (or '{EXIT_COMMAND}' to quit):");
        buffer.clear();

        if io::stdin().read_line(&mut buffer)? == 0 {
            break;
        }

        let query = buffer.trim();
        if query.eq_ignore_ascii_case(EXIT_COMMAND) {
            break;
        }
        if query.is_empty() {
            continue;
        }

        let start = Instant::now();
        let results = engine.search(query);
        tracing::debug!(elapsed = ?start.elapsed(), "Search finished");

        if let Err(e) = print_results(&results, json) {
            tracing::error!("Failed to print results: {e}");
        }
    }

    Ok(())
}

fn print_results(results: &[SearchResult], json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(results)?);
    } else if results.is_empty() {
        println!("No results found.");
    } else {
        println!("Found {} pages:", results.len());
        for result in results {
            println!("{result}");
        }
    }

    Ok(())
}
