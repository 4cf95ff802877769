use crate::error::GraphError;
use crate::normalize::normalize;
use crate::style::StylePalette;
use crate::types::{CatalogGraph, EdgeRole, MessageEdge};
use catalog_protocol::MessageRecord;
use std::collections::HashSet;

/// Record excluded from a build, with its position in the batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRecord {
    pub index: usize,
    pub error: GraphError,
}

/// Per-role counters for references that resolve to no node.
///
/// Catalogs frequently reference external or unmodeled actors, so a
/// dangling reference is tallied and dropped rather than raised.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DanglingTally {
    pub producers: usize,
    pub consumers: usize,
    pub owners: usize,
}

impl DanglingTally {
    #[must_use]
    pub fn total(&self) -> usize {
        self.producers + self.consumers + self.owners
    }
}

/// Aggregate diagnostics for one catalog build.
///
/// Collected over the whole batch and reported at the end, so one bad
/// record cannot mask problems in the records after it.
#[derive(Debug, Clone, Default)]
pub struct BuildReport {
    pub skipped: Vec<SkippedRecord>,
    pub dangling: DanglingTally,
}

impl BuildReport {
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty() && self.dangling.total() == 0
    }
}

/// Finished build: the graph plus its diagnostics.
#[derive(Debug)]
pub struct CatalogBuild {
    pub graph: CatalogGraph,
    pub report: BuildReport,
}

/// Build message graphs from record batches.
pub struct CatalogBuilder {
    palette: StylePalette,
}

impl CatalogBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            palette: StylePalette::default(),
        }
    }

    #[must_use]
    pub fn with_palette(palette: StylePalette) -> Self {
        Self { palette }
    }

    /// Build a graph from one batch of records.
    ///
    /// Phase 1 normalizes records into nodes; invalid records are skipped,
    /// logged, and collected into the report. Phase 2 derives edges over
    /// the surviving node set. The build itself never fails.
    #[must_use]
    pub fn build(&self, records: &[MessageRecord]) -> CatalogBuild {
        let mut graph = CatalogGraph::new();
        let mut report = BuildReport::default();

        // Phase 1: nodes, in record order
        for (index, record) in records.iter().enumerate() {
            let outcome = if graph.contains(&record.id) {
                Err(GraphError::DuplicateIdentifier(record.id.clone()))
            } else {
                normalize(record, &self.palette)
            };

            match outcome {
                Ok(node) => {
                    graph.add_node(node);
                }
                Err(error) => {
                    log::warn!("skipping record {index}: {error}");
                    report.skipped.push(SkippedRecord { index, error });
                }
            }
        }

        // Phase 2: edges over the surviving nodes
        let (edges, dangling) = build_edges(&graph, records);
        for edge in &edges {
            if let (Some(source), Some(target)) =
                (graph.find_node(&edge.source), graph.find_node(&edge.target))
            {
                graph.add_edge(source, target, edge.role);
            }
        }
        report.dangling = dangling;

        let (nodes, edges) = graph.stats();
        log::info!(
            "Built message graph: {nodes} nodes, {edges} edges, {} skipped, {} dangling refs",
            report.skipped.len(),
            report.dangling.total()
        );

        CatalogBuild { graph, report }
    }
}

impl Default for CatalogBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Derive directed edges from the producer/consumer lists of each record.
///
/// Emits (producer → message, `produces`) and (message → consumer,
/// `consumes`) pairs whose actor id resolves to a known node; unresolved
/// references are dropped and tallied per role. Owner ids never create
/// edges but are resolution-checked the same way.
///
/// Emission order is record order, producers before consumers, list order
/// within each, so output is stable across rebuilds from the same input.
/// Each (source, target, role) triple is emitted at most once.
#[must_use]
pub fn build_edges(
    graph: &CatalogGraph,
    records: &[MessageRecord],
) -> (Vec<MessageEdge>, DanglingTally) {
    let mut edges = Vec::new();
    let mut seen: HashSet<(String, String, EdgeRole)> = HashSet::new();
    let mut tally = DanglingTally::default();

    for record in records {
        // Records that produced no node cannot anchor edges
        if !graph.contains(&record.id) {
            continue;
        }

        for producer in &record.producers {
            if graph.contains(producer) {
                push_unique(
                    &mut edges,
                    &mut seen,
                    producer.clone(),
                    record.id.clone(),
                    EdgeRole::Produces,
                );
            } else {
                log::debug!("dangling producer '{producer}' on '{}'", record.id);
                tally.producers += 1;
            }
        }

        for consumer in &record.consumers {
            if graph.contains(consumer) {
                push_unique(
                    &mut edges,
                    &mut seen,
                    record.id.clone(),
                    consumer.clone(),
                    EdgeRole::Consumes,
                );
            } else {
                log::debug!("dangling consumer '{consumer}' on '{}'", record.id);
                tally.consumers += 1;
            }
        }

        for owner in &record.owners {
            if !graph.contains(owner) {
                tally.owners += 1;
            }
        }
    }

    (edges, tally)
}

fn push_unique(
    edges: &mut Vec<MessageEdge>,
    seen: &mut HashSet<(String, String, EdgeRole)>,
    source: String,
    target: String,
    role: EdgeRole,
) {
    if seen.insert((source.clone(), target.clone(), role)) {
        edges.push(MessageEdge {
            source,
            target,
            role,
        });
    }
}
