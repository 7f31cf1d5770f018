//! Reads edge-list text into any edge sink.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::graph::EdgeSink;
use crate::types::{GraphError, GraphResult, DEFAULT_WEIGHT};

/// Reader for the `<source> <target> [<weight>]` edge-list format.
#[derive(Debug, Clone, Copy)]
pub struct EdgeListReader {
    default_weight: f64,
}

impl EdgeListReader {
    /// Create a reader that assigns `DEFAULT_WEIGHT` to lines without a weight.
    pub fn new() -> Self {
        Self {
            default_weight: DEFAULT_WEIGHT,
        }
    }

    /// Create a reader that assigns the given weight to lines without a weight.
    pub fn with_default_weight(default_weight: f64) -> Self {
        Self { default_weight }
    }

    /// Weight used when a line has no weight field.
    pub fn default_weight(&self) -> f64 {
        self.default_weight
    }

    /// Read an edge-list file into a sink. Returns the number of edges added.
    pub fn load_file<S>(&self, path: &Path, sink: &mut S) -> GraphResult<usize>
    where
        S: EdgeSink + ?Sized,
    {
        let file = File::open(path)?;
        let added = self.read_into(BufReader::new(file), sink)?;
        log::debug!("Loaded {} edges from {}", added, path.display());
        Ok(added)
    }

    /// Read edge-list text into a sink. Returns the number of edges added.
    ///
    /// On a malformed weight the edges from earlier lines stay in the sink.
    pub fn read_into<R, S>(&self, reader: R, sink: &mut S) -> GraphResult<usize>
    where
        R: BufRead,
        S: EdgeSink + ?Sized,
    {
        let mut added = 0;
        for (idx, line) in reader.lines().enumerate() {
            let line = line?;
            let line_no = idx + 1;
            let line = line.strip_suffix('\r').unwrap_or(&line);

            let mut parts = line.split(' ');
            let (Some(source), Some(target)) = (parts.next(), parts.next()) else {
                log::debug!("Skipping line {line_no}: fewer than two fields");
                continue;
            };
            if source.is_empty() || target.is_empty() {
                log::debug!("Skipping line {line_no}: empty node field");
                continue;
            }

            let weight = match parts.next() {
                Some(token) => token
                    .parse::<f64>()
                    .map_err(|err| GraphError::InvalidWeight {
                        line: line_no,
                        token: token.to_string(),
                        source: err,
                    })?,
                None => self.default_weight,
            };

            sink.add_edge(source, target, weight);
            added += 1;
        }
        Ok(added)
    }
}

impl Default for EdgeListReader {
    fn default() -> Self {
        Self::new()
    }
}
