use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use textprep::lemmatization::LemmaStrategy;
use textprep::quality::DEFAULT_MIN_WORDS;
use textprep::request::{parse_documents_json, run, PipelineRequest, PipelineResponse};
use textprep::vectorizer::{Vectorization, VectorizerConfig, VectorizerMethod};
use textprep::{Language, PipelineConfig, TextprepError};
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
enum CliError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("config parse error: {0}")]
    TomlDe(#[from] toml::de::Error),

    #[error("config write error: {0}")]
    TomlSer(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CBOR error: {0}")]
    Cbor(#[from] ciborium::ser::Error<io::Error>),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("unsupported input file {}: expected .txt, .csv or .json", .0.display())]
    UnsupportedInput(PathBuf),

    #[error(transparent)]
    Textprep(#[from] TextprepError),

    #[error("could not find config directory")]
    NoConfigDir,
}

type Result<T> = std::result::Result<T, CliError>;

/// Settings stored in the TOML config file.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
struct Settings {
    min_words: usize,
    pipeline: PipelineConfig,
    vectorizer: VectorizerConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            min_words: DEFAULT_MIN_WORDS,
            pipeline: PipelineConfig::default(),
            vectorizer: VectorizerConfig::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
    Cbor,
    /// Document-term matrix only
    Csv,
}

/// How an input file is split into documents.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum InputFormat {
    Lines,
    Csv,
    Json,
}

impl InputFormat {
    fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("txt") => Ok(InputFormat::Lines),
            Some("csv") => Ok(InputFormat::Csv),
            Some("json") => Ok(InputFormat::Json),
            _ => Err(CliError::UnsupportedInput(path.to_path_buf())),
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    RuleBased,
    Dictionary,
    External,
}

impl From<StrategyArg> for LemmaStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::RuleBased => LemmaStrategy::RuleBased,
            StrategyArg::Dictionary => LemmaStrategy::Dictionary,
            StrategyArg::External => LemmaStrategy::External,
        }
    }
}

#[derive(Parser)]
#[command(name = "textprep")]
#[command(about = "Text preprocessing and bag-of-words / TF-IDF vectorization")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preprocess and vectorize documents
    Run {
        /// Input file: .txt (one document per line), .csv (one document per cell) or .json (array of strings). Reads stdin lines if omitted
        #[arg(long, short)]
        input: Option<PathBuf>,
        /// Config file (default: ~/.config/textprep/config.toml when present)
        #[arg(long, short)]
        config: Option<PathBuf>,
        /// Language for stopwords and lemmatization (english, turkish, other)
        #[arg(long, short)]
        language: Option<String>,
        /// Vectorizer method (count or tfidf)
        #[arg(long, short)]
        method: Option<String>,
        /// Maximum vocabulary size
        #[arg(long)]
        max_features: Option<usize>,
        /// Warn about documents with fewer final words than this
        #[arg(long)]
        min_words: Option<usize>,
        /// Lemmatization strategy
        #[arg(long, value_enum)]
        lemma_strategy: Option<StrategyArg>,
        /// Guess parts of speech for dictionary lemmatization
        #[arg(long)]
        pos: bool,
        /// Use the Unicode word tokenizer instead of a whitespace split
        #[arg(long)]
        word_tokenizer: bool,
        /// Keep stop words
        #[arg(long)]
        keep_stopwords: bool,
        /// Skip lemmatization
        #[arg(long)]
        no_lemmatize: bool,
        /// Number of top weighted terms to list in text output
        #[arg(long, default_value = "10")]
        top: usize,
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Write a config file with default settings
    InitConfig {
        /// Output file (default: ~/.config/textprep/config.toml)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

fn default_config_path() -> Result<PathBuf> {
    let mut p = dirs::config_dir().ok_or(CliError::NoConfigDir)?;
    p.push("textprep");
    p.push("config.toml");
    Ok(p)
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => match default_config_path() {
            Ok(p) if p.exists() => p,
            _ => return Ok(Settings::default()),
        },
    };
    debug!(path = %path.display(), "loading config");
    Ok(toml::from_str(&fs::read_to_string(&path)?)?)
}

fn init_config(output: Option<PathBuf>) -> Result<()> {
    let path = match output {
        Some(p) => p,
        None => default_config_path()?,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&path, toml::to_string(&Settings::default())?)?;
    println!("Config written to: {}", path.display());
    Ok(())
}

/// One document per non-empty trimmed line.
fn documents_from_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// One document per non-empty trimmed cell. No header row; rows may differ in length.
fn documents_from_csv<R: Read>(reader: R) -> Result<Vec<String>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);
    let mut documents = Vec::new();
    for record in rdr.records() {
        let record = record?;
        documents.extend(
            record
                .iter()
                .map(str::trim)
                .filter(|cell| !cell.is_empty())
                .map(str::to_string),
        );
    }
    Ok(documents)
}

fn read_documents(input: Option<&Path>) -> Result<Vec<String>> {
    let path = match input {
        Some(path) => path,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            return Ok(documents_from_lines(&buf));
        }
    };
    match InputFormat::from_path(path)? {
        InputFormat::Lines => Ok(documents_from_lines(&fs::read_to_string(path)?)),
        InputFormat::Csv => documents_from_csv(fs::File::open(path)?),
        InputFormat::Json => Ok(parse_documents_json(&fs::read_to_string(path)?)?),
    }
}

/// Document-term matrix as CSV: an empty corner cell plus the vocabulary,
/// then one `text_N` row per document.
fn write_matrix_csv<W: Write>(out: W, vectorization: &Vectorization) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(out);
    let header = std::iter::once("").chain(vectorization.vocabulary().iter().map(String::as_str));
    wtr.write_record(header)?;
    let rows: Vec<Vec<String>> = match vectorization {
        Vectorization::Count(m) => m
            .rows
            .iter()
            .map(|row| row.iter().map(u32::to_string).collect())
            .collect(),
        Vectorization::TfIdf(m) => m
            .rows
            .iter()
            .map(|row| row.iter().map(f64::to_string).collect())
            .collect(),
    };
    for (i, cells) in rows.into_iter().enumerate() {
        let label = format!("text_{}", i + 1);
        wtr.write_record(std::iter::once(label).chain(cells))?;
    }
    wtr.flush()?;
    Ok(())
}

fn write_text(
    out: &mut dyn Write,
    documents: &[String],
    response: &PipelineResponse,
    top: usize,
) -> io::Result<()> {
    writeln!(out, "Documents ({}):", documents.len())?;
    for (i, doc) in documents.iter().enumerate() {
        writeln!(out, "{:>4}. {}", i + 1, doc)?;
    }

    writeln!(out, "\nProcessed:")?;
    for (i, doc) in response.processed.iter().enumerate() {
        writeln!(out, "{:>4}. {}", i + 1, doc)?;
    }

    writeln!(out, "\nStats:")?;
    for (i, s) in response.stats.iter().enumerate() {
        writeln!(
            out,
            "{:>4}. {} words, {} stopwords removed, {} left",
            i + 1,
            s.original_word_count,
            s.stopwords_removed,
            s.final_word_count
        )?;
    }

    if !response.warnings.is_empty() {
        writeln!(out, "\nWarnings:")?;
        for w in &response.warnings {
            writeln!(out, "  {}", w)?;
        }
    }

    let (rows, cols) = response.vectorization.shape();
    writeln!(
        out,
        "\n{} matrix ({} x {}):",
        response.vectorization.method(),
        rows,
        cols
    )?;
    writeln!(out, "Vocabulary: {:?}", response.vectorization.vocabulary())?;
    match &response.vectorization {
        Vectorization::Count(m) => {
            for (i, row) in m.rows.iter().enumerate() {
                writeln!(out, "{:>4}. {:?}", i + 1, row)?;
            }
        }
        Vectorization::TfIdf(m) => {
            for (i, row) in m.rows.iter().enumerate() {
                let cells: Vec<String> = row.iter().map(|w| format!("{:.3}", w)).collect();
                writeln!(out, "{:>4}. [{}]", i + 1, cells.join(", "))?;
            }
        }
    }

    writeln!(out, "\nTop terms:")?;
    for (term, weight) in response.vectorization.top_terms(top) {
        writeln!(out, "  {:<20} {:.3}", term, weight)?;
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn run_pipeline(
    input: Option<PathBuf>,
    config: Option<PathBuf>,
    language: Option<String>,
    method: Option<String>,
    max_features: Option<usize>,
    min_words: Option<usize>,
    lemma_strategy: Option<StrategyArg>,
    pos: bool,
    word_tokenizer: bool,
    keep_stopwords: bool,
    no_lemmatize: bool,
    top: usize,
    format: OutputFormat,
    output: Option<PathBuf>,
) -> Result<()> {
    let mut settings = load_settings(config.as_deref())?;

    if let Some(language) = language {
        settings.pipeline.language = Language::from(language);
    }
    if let Some(method) = method {
        settings.vectorizer.method = method.parse::<VectorizerMethod>()?;
    }
    if let Some(max_features) = max_features {
        settings.vectorizer.max_features = max_features;
    }
    if let Some(min_words) = min_words {
        settings.min_words = min_words;
    }
    if let Some(strategy) = lemma_strategy {
        settings.pipeline.lemma_strategy = strategy.into();
    }
    if pos {
        settings.pipeline.use_pos_tagging = true;
    }
    if word_tokenizer {
        settings.pipeline.tokenize = true;
    }
    if keep_stopwords {
        settings.pipeline.remove_stopwords = false;
    }
    if no_lemmatize {
        settings.pipeline.lemmatize = false;
    }

    let documents = read_documents(input.as_deref())?;
    info!(documents = documents.len(), "read input");

    let request = PipelineRequest {
        documents,
        pipeline: settings.pipeline,
        vectorizer: settings.vectorizer,
        min_words: settings.min_words,
    };
    let response = run(&request)?;
    for w in &response.warnings {
        tracing::warn!("{}", w);
    }

    let mut out: Box<dyn Write> = match &output {
        Some(path) => Box::new(fs::File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };
    match format {
        OutputFormat::Text => write_text(&mut out, &request.documents, &response, top)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &response)?;
            writeln!(out)?;
        }
        OutputFormat::Cbor => ciborium::ser::into_writer(&response, &mut out)?,
        OutputFormat::Csv => write_matrix_csv(&mut out, &response.vectorization)?,
    }
    out.flush()?;
    if let Some(path) = output {
        info!(path = %path.display(), "output written");
    }
    Ok(())
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("textprep=info,warn")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Run {
            input,
            config,
            language,
            method,
            max_features,
            min_words,
            lemma_strategy,
            pos,
            word_tokenizer,
            keep_stopwords,
            no_lemmatize,
            top,
            format,
            output,
        } => run_pipeline(
            input,
            config,
            language,
            method,
            max_features,
            min_words,
            lemma_strategy,
            pos,
            word_tokenizer,
            keep_stopwords,
            no_lemmatize,
            top,
            format,
            output,
        ),
        Commands::InitConfig { output } => init_config(output),
    }
}
