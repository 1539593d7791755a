use anyhow::Result;
use sysport_config::Config;
use sysport_core::naming::output_file_name;
use sysport_core::Catalog;

/// Print `source -> output` for each entry, in catalog order. Writes nothing.
pub fn run(config: &Config, catalog: Catalog) -> Result<()> {
    let profile = config.profile(catalog);
    for name in &profile.files {
        println!("{} -> {}", name, output_file_name(name, &profile.tokens));
    }
    Ok(())
}
