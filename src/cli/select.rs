//! `routewise select`

use routewise_llm::{analyze_prompt, ModelSelection, ModelSelector, SelectionMode, UsageHistory};
use std::sync::Arc;

pub fn run(prompt: &str, mode: &SelectionMode, json: bool) -> anyhow::Result<()> {
    let selector = ModelSelector::with_builtin_catalog(Arc::new(UsageHistory::new()))?;
    let analysis = analyze_prompt(prompt);
    let selection = selector.select(prompt, &analysis, mode)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&selection)?);
    } else {
        print_selection(&selection);
    }
    Ok(())
}

/// Human-readable summary of a selection
pub fn print_selection(selection: &ModelSelection) {
    let model = &selection.selected_model;
    println!("Model:       {} ({})", model.name, model.id);
    println!("Provider:    {}, {} tier", model.provider, model.tier.label());
    println!("Confidence:  {:.0}%", selection.confidence_score * 100.0);
    println!("Est. cost:   ${:.6}", selection.estimated_cost);
    if !selection.alternatives.is_empty() {
        let names: Vec<&str> = selection
            .alternatives
            .iter()
            .map(|m| m.name.as_str())
            .collect();
        println!("Alternatives: {}", names.join(", "));
    }
    if let Some(details) = &selection.scoring_details {
        println!("Fit score:   {:.1}", details.total());
    }
    println!();
    println!("{}", selection.reasoning.trim_end());
}
