use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use data_loader::{parser, MovieLens};
use dataset::{Catalog, Dataset};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;
use vectorizer::{ContentVectorType, UserVectorType, VectorizeConfig, Vectorizer};

/// ReelVecs - Feature vectorization for recommendation model training
#[derive(Parser)]
#[command(name = "reel-vecs")]
#[command(about = "Vectorize MovieLens ratings and content for model training", long_about = None)]
struct Cli {
    /// Path to MovieLens dataset directory
    #[arg(short, long, default_value = "data/ml-10m")]
    data_dir: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Produce user and content vectors and write them as JSONL
    Vectorize {
        /// User vector recipe: ratings, pos_ratings, ratings_to_interact, none
        #[arg(long, default_value = "ratings")]
        user_vectors: UserVectorType,

        /// Content vector recipe: genre, tags, none
        #[arg(long, default_value = "genre")]
        content_vectors: ContentVectorType,

        /// Tag vocabulary size for the tags recipe
        #[arg(long)]
        num_tags: Option<usize>,

        /// Directory for the output files
        #[arg(long, default_value = "out")]
        output: PathBuf,
    },

    /// Show the tag vocabulary the tags recipe would select
    Vocab {
        /// Number of vocabulary entries to display
        #[arg(long, default_value = "20")]
        limit: usize,
    },
}

fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Vectorize {
            user_vectors,
            content_vectors,
            num_tags,
            output,
        } => handle_vectorize(&cli.data_dir, user_vectors, content_vectors, num_tags, &output),
        Commands::Vocab { limit } => handle_vocab(&cli.data_dir, limit),
    }
}

/// Handle the 'vectorize' command
fn handle_vectorize(
    data_dir: &Path,
    user_vectors: UserVectorType,
    content_vectors: ContentVectorType,
    num_tags: Option<usize>,
    output: &Path,
) -> Result<()> {
    println!("Loading MovieLens dataset from {}...", data_dir.display());
    let start = Instant::now();
    let data = MovieLens::load_from_files(data_dir)
        .context("Failed to load MovieLens dataset")?;
    println!("{} Loaded dataset in {:?}", "✓".green(), start.elapsed());

    let MovieLens {
        ratings,
        movies,
        tags,
    } = data;

    let mut config = VectorizeConfig::default();
    if let Some(k) = num_tags {
        config.vocabulary_size = k;
    }
    config.tag_source = tags.map(Dataset::from_records);

    let mut vectorizer = Vectorizer::new(
        Dataset::from_records(ratings),
        Dataset::from_records(movies),
        user_vectors,
        content_vectors,
        Catalog::new(),
        config,
    );

    std::fs::create_dir_all(output)
        .with_context(|| format!("Failed to create output directory {}", output.display()))?;

    let start = Instant::now();

    match vectorizer.user_vectors() {
        Some(vectors) => {
            let path = output.join("user_vectors.jsonl");
            let mut writer = BufWriter::new(File::create(&path)?);
            let mut count = 0usize;
            for vector in vectors {
                serde_json::to_writer(&mut writer, &vector)?;
                writer.write_all(b"\n")?;
                count += 1;
            }
            writer.flush()?;
            println!(
                "{} Wrote {} user vectors ({}) to {}",
                "✓".green(),
                count,
                vectorizer.user_vector_type(),
                path.display()
            );
        }
        None => println!("{} No user vectors produced (recipe: none)", "•".yellow()),
    }

    let content_vector_type = vectorizer.content_vector_type();
    match vectorizer.content_vectors() {
        Some(vectors) => {
            let path = output.join("content_vectors.jsonl");
            let mut writer = BufWriter::new(File::create(&path)?);
            let mut count = 0usize;
            let mut dimensions = 0usize;
            for vector in vectors {
                dimensions = vector.features.len();
                serde_json::to_writer(&mut writer, &vector)?;
                writer.write_all(b"\n")?;
                count += 1;
            }
            writer.flush()?;
            println!(
                "{} Wrote {} content vectors of length {} to {}",
                "✓".green(),
                count,
                dimensions,
                path.display()
            );
        }
        None => println!(
            "{} No content vectors produced (recipe: {})",
            "•".yellow(),
            content_vector_type
        ),
    }

    println!("Vectorization finished in {:?}", start.elapsed());
    Ok(())
}

/// Handle the 'vocab' command
fn handle_vocab(data_dir: &Path, limit: usize) -> Result<()> {
    let tags_path = data_dir.join("tags.dat");
    let tags = parser::parse_tags(&tags_path)
        .with_context(|| format!("Failed to load tags from {}", tags_path.display()))?;
    let tags = Dataset::from_records(tags);

    let mut frequencies = tags.group_count(|t| t.tag.clone());
    // Stable descending sort: the same ordering the tags recipe uses for
    // vocabulary selection, so positions shown here are feature positions.
    frequencies.sort_by(|a, b| b.1.cmp(&a.1));

    println!(
        "{}",
        format!("Top {} of {} distinct tags:", limit, frequencies.len())
            .bold()
            .blue()
    );
    for (position, (tag, count)) in frequencies.iter().take(limit).enumerate() {
        println!("{:>5}. {} ({} uses)", position, tag, count);
    }
    Ok(())
}
