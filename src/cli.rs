//! Command implementations shared by the binary and the integration tests.
//!
//! Each `run_*` function loads a tree file, drives one or more walks and
//! returns the value the binary prints. Nothing here writes to stdout.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use cstwalk_cst::{
    EventRecorder, PrinterConfig, SourcePrinter, SyntaxNode, Traversal, TraversalOptions,
};

use crate::error::CliError;
use crate::output::{CheckResponse, EventsResponse, WalkCheck};

/// Reads a JSON array of root nodes.
pub fn load_tree(path: &Path) -> Result<Vec<SyntaxNode>, CliError> {
    let json = fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
    let roots: Vec<SyntaxNode> =
        serde_json::from_str(&json).map_err(|e| CliError::parse(path, e))?;
    debug!(
        path = %path.display(),
        roots = roots.len(),
        "loaded tree"
    );
    Ok(roots)
}

/// Renders the tree as source text.
pub fn run_print(
    path: &Path,
    config: &PrinterConfig,
    options: &TraversalOptions,
) -> Result<String, CliError> {
    let roots = load_tree(path)?;
    let mut printer = SourcePrinter::new(config.clone());
    let report = Traversal::SourceOrder.run(&roots, &mut printer, options)?;
    info!(nodes = report.nodes, "printed tree");
    Ok(printer.into_output())
}

/// Records every event of one walk.
pub fn run_events(
    path: &Path,
    traversal: Traversal,
    options: &TraversalOptions,
) -> Result<EventsResponse, CliError> {
    let roots = load_tree(path)?;
    let mut recorder = EventRecorder::new();
    let report = traversal.run(&roots, &mut recorder, options)?;
    Ok(EventsResponse::new(traversal, report, recorder.into_events()))
}

/// Runs every walk and checks that each one reaches every node once with
/// balanced events.
///
/// Unreached nodes are counted in the report rather than failing the walk,
/// so `require_complete` in `options` is ignored. Structural mismatches and
/// the depth limit still fail.
pub fn run_check(path: &Path, options: &TraversalOptions) -> Result<CheckResponse, CliError> {
    let roots = load_tree(path)?;
    let nodes = roots.iter().map(SyntaxNode::subtree_len).sum();
    let options = options.clone().with_require_complete(false);

    let mut walks = Vec::with_capacity(Traversal::ALL.len());
    for traversal in Traversal::ALL {
        let mut recorder = EventRecorder::new();
        let report = traversal.run(&roots, &mut recorder, &options)?;
        let well_nested = recorder.is_well_nested();
        debug!(%traversal, nodes = report.nodes, well_nested, "walk checked");
        walks.push(WalkCheck {
            traversal: traversal.name().to_string(),
            report,
            well_nested,
        });
    }

    let response = CheckResponse::new(nodes, walks);
    info!(nodes, status = %response.status, "check finished");
    Ok(response)
}
