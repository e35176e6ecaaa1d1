use anyhow::Result;

use pagedot_core::AnimationKind;

/// List the available animation styles.
pub fn run() -> Result<()> {
    println!("Available animation styles:");
    println!();
    for kind in AnimationKind::ALL {
        println!("  {:<10} {}", kind.name(), kind.description());
    }
    println!();
    println!("Pick one with `pagedot --style <name>` or set it in the config file.");
    Ok(())
}
