use anyhow::{Context, Result};
use flexi_logger::Logger;
use log::info;

use masthead::{Catalog, Magazine};

fn main() -> Result<()> {
    let _logger = Logger::try_with_env_or_str("info")
        .context("Invalid log spec")?
        .log_to_stderr()
        .start()
        .context("Failed to start logger")?;

    info!("masthead {}", masthead::VERSION);

    println!("📚 Masthead - sample catalog");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Entities
    let mut catalog = Catalog::new();
    let carol = catalog.create_author("Carol")?;
    let dana = catalog.create_author("Dana")?;
    let vogue = catalog.create_magazine("Vogue", "Fashion")?;
    let wired = catalog.create_magazine("Wired", "Tech")?;

    // 2. Articles
    carol.add_article(&mut catalog, vogue, "Autumn coats")?;
    carol.add_article(&mut catalog, vogue, "Winter boots")?;
    carol.add_article(&mut catalog, vogue, "Spring scarves")?;
    carol.add_article(&mut catalog, wired, "Tiny robots")?;
    dana.add_article(&mut catalog, wired, "Drone racing")?;
    println!("✓ {} articles registered", catalog.articles().count());

    // 3. Derived queries
    println!("\n✍️  {}", carol.name());
    let magazines: Vec<&str> = carol.magazines(&catalog).iter().map(|m| m.name()).collect();
    println!("   magazines:   {:?}", magazines);
    println!("   topic areas: {:?}", carol.topic_areas(&catalog));

    for magazine in catalog.magazines().all() {
        println!("\n📰 {} ({})", magazine.name(), magazine.category());
        println!("   titles:       {:?}", magazine.article_titles(&catalog));
        let contributors: Vec<&str> = magazine
            .contributors(&catalog)
            .iter()
            .map(|a| a.name())
            .collect();
        println!("   contributors: {:?}", contributors);
        let contributing = magazine
            .contributing_authors(&catalog)
            .map(|authors| authors.iter().map(|a| a.name()).collect::<Vec<_>>());
        println!("   contributing: {:?}", contributing);
    }

    if let Some(top) = Magazine::top_publisher(&catalog) {
        println!("\n🏆 Top publisher: {}", top.name());
    }

    info!("snapshot:\n{}", catalog.snapshot().to_json_pretty()?);

    Ok(())
}
