use crate::error::LoadError;
use crate::store::EntityStore;
use memmap2::Mmap;
use std::{borrow::Cow, fs::File, path::Path};
use tracing::{debug, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CastRecord<'a> {
    pub actor: &'a str,
    pub title: &'a str,
    pub year: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PairQuery {
    pub from: String,
    pub to: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct IngestStats {
    pub records: usize,
    pub skipped: usize,
}

/// Splits a tab-delimited line. A single trailing empty field is dropped, so
/// `"a\tb\t"` has two fields and an empty line has none.
pub fn split_record(line: &str) -> Vec<&str> {
    let line = line.trim_end_matches(['\r', '\n']);
    let mut fields: Vec<&str> = line.split('\t').collect();

    if fields.last().is_some_and(|field| field.is_empty()) {
        fields.pop();
    }

    fields
}

pub fn parse_cast_record(line: &str) -> Option<CastRecord<'_>> {
    let fields = split_record(line);
    if fields.len() != 3 {
        return None;
    }

    let year = fields[2].trim().parse().ok()?;
    Some(CastRecord {
        actor: fields[0],
        title: fields[1],
        year,
    })
}

pub fn parse_pair_query(line: &str) -> Option<PairQuery> {
    let fields = split_record(line);
    if fields.len() != 2 {
        return None;
    }

    Some(PairQuery {
        from: fields[0].to_string(),
        to: fields[1].to_string(),
    })
}

/// Feeds every record after the header line into `store`.
pub fn ingest_cast_text(store: &mut EntityStore, text: &str) -> IngestStats {
    let mut stats = IngestStats::default();

    for (line_number, line) in text.lines().enumerate().skip(1) {
        match parse_cast_record(line) {
            Some(record) => {
                store.ingest(record.actor, record.title, record.year);
                stats.records += 1;
            }
            None => {
                debug!(line = line_number + 1, "skipping malformed cast record");
                stats.skipped += 1;
            }
        }
    }

    stats
}

pub fn parse_pair_queries(text: &str) -> (Vec<PairQuery>, usize) {
    let mut queries = Vec::new();
    let mut skipped = 0;

    for (line_number, line) in text.lines().enumerate().skip(1) {
        match parse_pair_query(line) {
            Some(query) => queries.push(query),
            None => {
                debug!(line = line_number + 1, "skipping malformed query record");
                skipped += 1;
            }
        }
    }

    (queries, skipped)
}

pub fn load_cast_file(cast_path: &Path) -> Result<(EntityStore, IngestStats), LoadError> {
    let mut store = EntityStore::new();

    let file = File::open(cast_path).map_err(|error| LoadError::unreadable(cast_path, error))?;
    let file_length = file
        .metadata()
        .map_err(|error| LoadError::unreadable(cast_path, error))?
        .len();

    if file_length == 0 {
        return Ok((store, IngestStats::default()));
    }

    // The mapping is only read, and dropped before this function returns.
    let mapped = unsafe { Mmap::map(&file) }.map_err(|error| LoadError::unreadable(cast_path, error))?;
    let stats = ingest_cast_text(&mut store, &decode_text(cast_path, &mapped));

    info!(
        path = %cast_path.display(),
        records = stats.records,
        skipped = stats.skipped,
        actors = store.actor_count(),
        movies = store.movie_count(),
        "loaded cast file"
    );

    Ok((store, stats))
}

pub fn read_pair_queries(query_path: &Path) -> Result<(Vec<PairQuery>, usize), LoadError> {
    let bytes = std::fs::read(query_path).map_err(|error| LoadError::unreadable(query_path, error))?;
    Ok(parse_pair_queries(&decode_text(query_path, &bytes)))
}

/// Invalid UTF-8 sequences become U+FFFD, so names that differ only in those
/// bytes end up equal.
pub fn decode_text<'a>(path: &Path, bytes: &'a [u8]) -> Cow<'a, str> {
    let text = String::from_utf8_lossy(bytes);
    if let Cow::Owned(_) = text {
        warn!(path = %path.display(), "input is not valid UTF-8, invalid bytes were replaced");
    }
    text
}
