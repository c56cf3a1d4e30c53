//! Text rendering of computed forests.

use std::io::{self, Write};

use boruvka_core::MinimumSpanningForest;

use super::ExecutionSummary;

/// Writes the report for `forest`: a total-weight line, a heading, then one
/// `from - to : weight` line per selected edge in merge order.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
///
/// # Examples
/// ```
/// # use boruvka_cli::cli::render_report;
/// # use boruvka_core::{Edge, minimum_spanning_forest};
/// let forest = minimum_spanning_forest(3, &[Edge::new(0, 1, 4), Edge::new(2, 1, -1)])
///     .expect("valid graph");
/// let mut buffer = Vec::new();
/// render_report(&forest, &mut buffer).expect("writing to a Vec cannot fail");
/// assert_eq!(
///     String::from_utf8(buffer).expect("report is UTF-8"),
///     "Total weight of the minimum spanning tree: 3\n\
///      Minimum spanning tree edges:\n\
///      0 - 1 : 4\n\
///      2 - 1 : -1\n",
/// );
/// ```
pub fn render_report(forest: &MinimumSpanningForest, mut writer: impl Write) -> io::Result<()> {
    writeln!(
        writer,
        "Total weight of the minimum spanning tree: {}",
        forest.total_weight()
    )?;
    writeln!(writer, "Minimum spanning tree edges:")?;
    for edge in forest.edges() {
        writeln!(writer, "{} - {} : {}", edge.from(), edge.to(), edge.weight())?;
    }
    Ok(())
}

/// Writes a short human-readable summary of a run, for stdout.
///
/// # Errors
/// Returns [`io::Error`] if writing to `writer` fails.
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    let forest = &summary.forest;
    writeln!(
        writer,
        "{} vertices, {} edges read from {}",
        summary.vertex_count,
        summary.edge_count,
        summary.input.display()
    )?;
    writeln!(
        writer,
        "forest: {} edges, {} components, total weight {}, {} rounds",
        forest.edges().len(),
        forest.component_count(),
        forest.total_weight(),
        forest.rounds()
    )?;
    writeln!(writer, "report: {}", summary.output.display())?;
    Ok(())
}
