//! `routewise models`

use routewise_llm::cost::per_million;
use routewise_llm::{Catalog, ModelTier};

pub fn run() -> anyhow::Result<()> {
    let catalog = Catalog::builtin();

    for tier in ModelTier::ALL {
        println!("{} tier", tier.label());
        for model in catalog.by_tier(tier) {
            println!(
                "  {:<32} {:<11} in ${:>7.2}/1M  out ${:>7.2}/1M  {}",
                model.name,
                model.provider.as_str(),
                per_million(model.cost_per_input_token),
                per_million(model.cost_per_output_token),
                model.id
            );
        }
        println!();
    }

    Ok(())
}
