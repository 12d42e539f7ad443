//! Basic usage example of the proofdiff library

use proofdiff_core::{align, compute_diff, ChangeKind, DiffConfig, DiffEngine};
use proofdiff_core::{Proofreader, ScriptedProofreader};

const LINE: &str = "----------------------------------------";

fn main() {
    println!("=== Proofdiff Examples ===\n");

    // Example 1: Simple diff with default configuration
    example_simple_diff();

    // Example 2: Inspecting the annotated sequences
    example_annotated_sequences();

    // Example 3: Diffing against a proofreading collaborator
    example_proofread_flow();
}

fn example_simple_diff() {
    println!("Example 1: Simple Diff");
    println!("{}", LINE);

    let original = "Their going to the park tomorow.";
    let revised = "They're going to the park tomorrow.";

    let result = compute_diff(original, revised, None);

    println!("Original: {}", original);
    println!("Revised:  {}", revised);
    println!("\n{}", result.summary());
    println!("Removed: {:?}", result.removed_tokens());
    println!("Added:   {:?}", result.added_tokens());
    println!();
}

fn example_annotated_sequences() {
    println!("Example 2: Annotated Sequences");
    println!("{}", LINE);

    let (original, revised) = align("The cat sat.", "The cat sits.");

    println!("Original side:");
    for token in &original {
        let marker = match token.kind {
            ChangeKind::Removed => "-",
            _ => " ",
        };
        println!("  {} {:?}", marker, token.text);
    }

    println!("Revised side:");
    for token in &revised {
        let marker = match token.kind {
            ChangeKind::Added => "+",
            _ => " ",
        };
        println!("  {} {:?}", marker, token.text);
    }
    println!();
}

fn example_proofread_flow() {
    println!("Example 3: Proofreading Flow");
    println!("{}", LINE);

    // A scripted collaborator stands in for the remote service here; any
    // Proofreader implementation plugs into the same call.
    let proofreader = ScriptedProofreader::new().with_revision(
        "i has went to the store",
        "I went to the store",
    );

    let engine = DiffEngine::new(DiffConfig::default());
    match engine.proofread_and_diff(&proofreader, "i has went to the store") {
        Ok(result) => print!("{}", result),
        Err(err) => eprintln!("proofreading failed: {}", err),
    }

    // Failures from the collaborator are ordinary errors, not panics
    if let Err(err) = proofreader.proofread("something unscripted") {
        println!("\nExpected failure for unscripted input: {}", err);
    }
}
