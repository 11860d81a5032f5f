use castpath_core::{EntityStore, IngestStats, PairQuery, load_cast_file, read_pair_queries};
use indicatif::ProgressBar;
use std::{
    error::Error,
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use crate::args::{Args, Command};
use crate::colors::ColorScheme;
use crate::display::{create_progress_bar, display_batch_summary, display_corpus_info};
use crate::search::{BatchSummary, answer_connection_queries, answer_path_queries};

pub struct CastPathApp {
    pub store: EntityStore,
    pub ingest_stats: IngestStats,
}

impl CastPathApp {
    pub fn load(cast_path: &Path) -> Result<Self, Box<dyn Error>> {
        let (store, ingest_stats) = load_cast_file(cast_path)?;
        Ok(Self {
            store,
            ingest_stats,
        })
    }

    pub fn answer<W: Write>(
        &self,
        command: &Command,
        queries: &[PairQuery],
        output: &mut W,
        progress: &ProgressBar,
    ) -> Result<BatchSummary, Box<dyn Error>> {
        let summary = match command {
            Command::Path { mode, .. } => {
                answer_path_queries(&self.store, *mode, queries, output, progress)?
            }
            Command::Connect { strategy, .. } => {
                answer_connection_queries(&self.store, *strategy, queries, output, progress)?
            }
        };
        Ok(summary)
    }
}

/// Loads every input, answers the query batch and writes the output file.
/// Nothing is written when an input cannot be read.
pub fn run(args: &Args, colors: &ColorScheme) -> Result<BatchSummary, Box<dyn Error>> {
    let command = &args.command;

    let app = CastPathApp::load(command.cast_file())?;
    let (queries, skipped_queries) = read_pair_queries(command.query_file())?;

    let output_file = File::create(command.output_file()).map_err(|error| {
        format!(
            "failed to create {}: {}",
            command.output_file().display(),
            error
        )
    })?;
    let mut output = BufWriter::new(output_file);

    if args.verbose && !args.quiet {
        display_corpus_info(&app, queries.len(), skipped_queries, colors);
    }

    let progress = create_progress_bar(queries.len(), args.quiet);
    let summary = app.answer(command, &queries, &mut output, &progress)?;
    output.flush()?;

    if !args.quiet {
        display_batch_summary(&summary, command, args.verbose, colors);
    }

    Ok(summary)
}
