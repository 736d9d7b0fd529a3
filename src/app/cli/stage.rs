//! Stage command implementation.

use std::path::Path;

use crate::domain::AppError;

pub fn run_stage(root: &Path, config: Option<&Path>) -> Result<(), AppError> {
    let outcome = crate::app::api::stage_at(root, config)?;
    let env = &outcome.environment;

    println!("✅ Reset staging directory {}", env.root.display());
    println!("✅ Extracted {} entries into {}", env.entries, env.root.display());
    println!(
        "✅ Configured {} for Python {}",
        env.path_config.version.path_config_file_name(),
        env.path_config.version
    );
    if outcome.archive.replaced_stale {
        println!("ℹ️  Replaced previous archive");
    }
    println!("✅ Packaged {}", outcome.archive.path.display());
    Ok(())
}
