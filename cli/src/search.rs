use castpath_core::{
    ConnectivityStrategy, EdgeSet, EntityStore, Network, PATH_HEADER, PairQuery, SearchMode,
    first_connected_year, reconstruct_path, render_path, report_year, search,
};
use indicatif::ProgressBar;
use std::{
    io::{self, Write},
    time::Instant,
};
use tracing::{debug, warn};

pub const CONNECTION_HEADER: &str = "Actor1\tActor2\tYear";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BatchSummary {
    pub answered: usize,
    pub unresolved: usize,
    pub edge_count: usize,
    pub search_duration: f64,
}

pub fn answer_path_queries<W: Write>(
    store: &EntityStore,
    mode: SearchMode,
    queries: &[PairQuery],
    output: &mut W,
    progress: &ProgressBar,
) -> io::Result<BatchSummary> {
    let search_timer = Instant::now();
    let edges = EdgeSet::full(store);
    let network = Network::new(store, &edges);

    writeln!(output, "{}", PATH_HEADER)?;

    let mut unresolved = 0;
    for query in queries {
        match find_path_line(network, query, mode) {
            Some(line) => writeln!(output, "{}", line)?,
            None => {
                unresolved += 1;
                writeln!(output)?;
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(BatchSummary {
        answered: queries.len(),
        unresolved,
        edge_count: edges.edge_count(),
        search_duration: search_timer.elapsed().as_secs_f64(),
    })
}

/// Rendered path for one query, or `None` when either actor is unknown or the
/// two are not connected.
pub fn find_path_line(network: Network<'_>, query: &PairQuery, mode: SearchMode) -> Option<String> {
    let store = network.store;
    let (Some(start), Some(target)) = (store.actor_id(&query.from), store.actor_id(&query.to))
    else {
        warn!(from = %query.from, to = %query.to, "path query names an unknown actor");
        return None;
    };

    let tree = search(network, start, mode);
    let Some(path) = reconstruct_path(network, &tree, target) else {
        warn!(from = %query.from, to = %query.to, "no path between actors");
        return None;
    };

    debug!(
        from = %query.from,
        to = %query.to,
        hops = path.hop_count(),
        distance = tree.distance(target).unwrap_or_default(),
        visited = tree.visited_count(),
        mode = %mode,
        "path found"
    );
    Some(render_path(store, &path))
}

pub fn answer_connection_queries<W: Write>(
    store: &EntityStore,
    strategy: ConnectivityStrategy,
    queries: &[PairQuery],
    output: &mut W,
    progress: &ProgressBar,
) -> io::Result<BatchSummary> {
    let search_timer = Instant::now();

    writeln!(output, "{}", CONNECTION_HEADER)?;

    let mut unresolved = 0;
    for query in queries {
        let year = first_connected_year(store, &query.from, &query.to, strategy);
        if year.is_none() {
            unresolved += 1;
        }

        writeln!(output, "{}\t{}\t{}", query.from, query.to, report_year(year))?;
        progress.inc(1);
    }
    progress.finish_and_clear();

    Ok(BatchSummary {
        answered: queries.len(),
        unresolved,
        edge_count: 0,
        search_duration: search_timer.elapsed().as_secs_f64(),
    })
}
