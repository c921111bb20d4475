use anyhow::Result;

pub fn run() -> Result<()> {
    let detectors = tutorlint_detectors::all_detectors();

    println!("{:<14} {:<32} Description", "Language", "Tags");
    println!("{}", "-".repeat(90));

    for d in &detectors {
        println!(
            "{:<14} {:<32} {}",
            d.language(),
            d.tags().join(", "),
            d.description()
        );
    }

    println!("\nTotal: {} detectors", detectors.len());
    Ok(())
}
