//! Writes edge lists and human-readable adjacency dumps.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::graph::WeightedAdjacency;
use crate::types::{Edge, GraphResult};

/// Writer for the edge-list format and the adjacency dump.
///
/// Output is sorted by source, then target, so it is stable across runs.
pub struct EdgeListWriter;

impl EdgeListWriter {
    /// Write edges as `source target weight` lines to a file.
    pub fn write_to_file(edges: &[Edge], path: &Path) -> GraphResult<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        Self::write_to(edges, &mut writer)?;
        writer.flush()?;
        Ok(())
    }

    /// Write edges as `source target weight` lines.
    pub fn write_to(edges: &[Edge], writer: &mut impl Write) -> GraphResult<()> {
        let mut sorted: Vec<&Edge> = edges.iter().collect();
        sorted.sort_by(|a, b| a.source.cmp(&b.source).then(a.target.cmp(&b.target)));
        for edge in sorted {
            writeln!(writer, "{} {} {}", edge.source, edge.target, edge.weight)?;
        }
        Ok(())
    }

    /// Write an adjacency as one `node:` block per source with its targets indented.
    pub fn write_adjacency(adj: &WeightedAdjacency, writer: &mut impl Write) -> GraphResult<()> {
        let mut sources: Vec<&str> = adj.get_source_nodes().into_iter().collect();
        sources.sort_unstable();
        for src in sources {
            writeln!(writer, "{src}:")?;
            let Some(nbrs) = adj.get_neighbors(src) else {
                continue;
            };
            let mut targets: Vec<(&String, &f64)> = nbrs.iter().collect();
            targets.sort_by(|a, b| a.0.cmp(b.0));
            for (tgt, w) in targets {
                writeln!(writer, " -->  {tgt}: {w:.6}")?;
            }
        }
        Ok(())
    }
}
