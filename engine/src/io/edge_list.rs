//! Plain text edge lists.
//!
//! The first integer field of the first record containing one gives the vertex count, other fields
//! of that record are ignored. Every following record is `from to cost` with integers only and
//! describes an arc in both directions. Fields are separated by spaces,
//! lines starting with `/` (like `// comment`) are skipped and additional fields are ignored.
//!
//! ```text
//! // five vertices
//! 5
//! 0 1 4
//! 1 2 1
//! ```

use crate::{datastr::graph::*, error::GraphError};
use csv::{ReaderBuilder, StringRecord, Trim};
use std::{fs::File, io::Read, path::Path};

#[derive(thiserror::Error, Debug)]
pub enum EdgeListError {
    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("line {line}: could not parse {field:?} as an integer")]
    Parse { line: u64, field: String },

    #[error("line {line}: expected `from to cost` but found {found} fields")]
    MissingFields { line: u64, found: usize },

    #[error("no vertex count found")]
    MissingVertexCount,

    #[error("line {line}: {source}")]
    Graph { line: u64, source: GraphError },
}

/// Build a graph from the edge list file at `path`.
pub fn load_edge_list<P: AsRef<Path>>(path: P) -> Result<HashGraph, EdgeListError> {
    read_edge_list(File::open(path)?)
}

/// Build a graph from an edge list.
pub fn read_edge_list<R: Read>(input: R) -> Result<HashGraph, EdgeListError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .delimiter(b' ')
        .comment(Some(b'/'))
        .flexible(true)
        .trim(Trim::All)
        .quoting(false)
        .from_reader(input);

    let mut graph: Option<HashGraph> = None;

    for record in reader.records() {
        let record = record?;
        let line = record.position().map_or(0, |pos| pos.line());

        match graph.as_mut() {
            None => {
                // words around the count like `vertices 5` are ignored
                if let Some(n) = record.iter().find_map(|field| field.parse::<i64>().ok()) {
                    graph = Some(HashGraph::try_new(n).map_err(|source| EdgeListError::Graph { line, source })?);
                }
            }
            Some(graph) => {
                let fields = numeric_fields(&record, line)?;
                if fields.len() < 3 {
                    return Err(EdgeListError::MissingFields { line, found: fields.len() });
                }
                let from = to_weight(fields[0], "from", line)?;
                let to = to_weight(fields[1], "to", line)?;
                let cost = to_weight(fields[2], "cost", line)?;
                graph.add_bidirectional(from, to, cost).map_err(|source| EdgeListError::Graph { line, source })?;
            }
        }
    }

    graph.ok_or(EdgeListError::MissingVertexCount)
}

// consecutive separators produce empty fields, those are skipped
fn numeric_fields(record: &StringRecord, line: u64) -> Result<Vec<i64>, EdgeListError> {
    record
        .iter()
        .filter(|field| !field.is_empty())
        .map(|field| {
            field.parse().map_err(|_| EdgeListError::Parse {
                line,
                field: field.to_string(),
            })
        })
        .collect()
}

fn to_weight(value: i64, what: &str, line: u64) -> Result<Weight, EdgeListError> {
    // NO_COST is reserved for unweighted arcs
    if value < 0 || value >= NO_COST as i64 {
        return Err(EdgeListError::Graph {
            line,
            source: GraphError::InvalidArgument(format!("{} = {}", what, value)),
        });
    }
    Ok(value as Weight)
}
