//! `routewise prefs`

use super::PrefsAction;
use crate::preferences::PreferenceStore;
use routewise_llm::Catalog;

pub fn run(action: PrefsAction) -> anyhow::Result<()> {
    let store = PreferenceStore::default_location()?;

    match action {
        PrefsAction::Show => match store.load()? {
            Some(preference) => {
                let name = Catalog::builtin()
                    .get(&preference.selected_model_id)
                    .map_or("unknown model", |m| m.name.as_str());
                println!(
                    "{} ({}), saved {}",
                    preference.selected_model_id,
                    name,
                    preference.updated_at.to_rfc3339()
                );
            }
            None => println!("No model preference stored."),
        },
        PrefsAction::Set { id } => {
            let preference = store.set(&id, Catalog::builtin())?;
            println!(
                "Manual mode will use {} (saved to {}).",
                preference.selected_model_id,
                store.path().display()
            );
        }
        PrefsAction::Clear => {
            if store.clear()? {
                println!("Model preference cleared.");
            } else {
                println!("No model preference stored.");
            }
        }
    }

    Ok(())
}
