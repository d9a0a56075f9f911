//! Recommend Binary
//!
//! Fits one model on the deck history, reports top-3 accuracy on the
//! held-out tail, and with `--submit` writes answers for the query file.
//! The query file is read either way so models can enrich on it.
//!
//! Usage: recommend --model ensemble --validation 200 [--submit] [--cache data]

use clap::Parser;
use colored::Colorize;
use robodeck::cards::Corpus;
use robodeck::evaluation::evaluate;
use robodeck::load;
use robodeck::models::Kind;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about = "Recommend the last cards of partial decks", long_about = None)]
struct Args {
    #[arg(long, short, default_value = "ensemble", help = "graph | similarity | popularity | ensemble")]
    model: Kind,
    #[arg(long, default_value = "data/data_2018.csv", help = "full 30-card deck history")]
    history: PathBuf,
    #[arg(long, default_value = "data/cards_2018.csv", help = "card metadata")]
    corpus: PathBuf,
    #[arg(long, short, default_value_t = robodeck::VALIDATION_SIZE, help = "trailing decks held out")]
    validation: usize,
    #[arg(long, help = "write answers for the query file")]
    submit: bool,
    #[arg(long, default_value = "data/test.csv", help = "29-card partial decks to answer")]
    queries: PathBuf,
    #[arg(long, default_value = "submission.csv")]
    output: PathBuf,
    #[arg(long, help = "directory for cached fit artifacts")]
    cache: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    robodeck::log();
    let args = Args::parse();
    let corpus = Arc::new(Corpus::load(&args.corpus)?);
    let history = load::decks(&args.history)?;
    let finals = match load::queries(&args.queries) {
        Ok(finals) => finals,
        Err(e) if !args.submit => {
            log::warn!("no queries to enrich on: {}", e);
            Vec::new()
        }
        Err(e) => return Err(e),
    };
    let mut model = args.model.build(corpus);
    if let Some(dir) = args.cache {
        model = model.cached(dir);
    }
    log::info!("evaluating {} model", model.kind());
    let evaluation = evaluate(&mut model, &history, args.validation, &finals, args.submit);
    if let Some(ref submission) = evaluation.submission {
        submission.save(&args.output)?;
    }
    println!(
        "{} {}",
        model.kind().to_string().bold(),
        format!("{:.4}", evaluation.report.accuracy()).green()
    );
    Ok(())
}
