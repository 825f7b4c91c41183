use anyhow::Context as _;

use sole_catalog::seed;
use sole_merchandising::{ClassifyContext, RecencyWindow};
use sole_storefront::ShoeGrid;

fn main() -> anyhow::Result<()> {
    sole_observability::init();

    let catalog = seed::demo_catalog().context("failed to build demo catalog")?;
    let ctx = ClassifyContext::now(RecencyWindow::default());

    tracing::info!(
        catalog = %catalog.name(),
        products = catalog.len(),
        today = %ctx.today,
        "assembling shoe grid"
    );

    let grid = ShoeGrid::assemble(&catalog, &ctx);
    let json = serde_json::to_string_pretty(&grid).context("failed to serialize shoe grid")?;
    println!("{json}");

    Ok(())
}
