//! Simple utility to preview a recipe at a different scale
//! Usage: cargo run --bin scale_recipe -- <recipe.json> [factor]

use tracing_subscriber::EnvFilter;

use cookbook_scaling::models::Recipe;
use cookbook_scaling::scaling::ScaleFactor;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("cookbook_scaling=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    let path = args
        .get(1)
        .ok_or("usage: scale_recipe <recipe.json> [factor]")?;
    let factor = match args.get(2) {
        Some(raw) => ScaleFactor::from_f64(raw.parse()?)?,
        None => ScaleFactor::ONE,
    };

    let recipe: Recipe = serde_json::from_str(&std::fs::read_to_string(path)?)?;

    println!(
        "{} ({}x, serves {:.1})",
        recipe.name,
        factor,
        recipe.scaled_servings(factor)
    );
    for line in recipe.scaled_lines(factor) {
        println!("  {}", line);
    }

    Ok(())
}
