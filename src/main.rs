use clap::{Parser, Subcommand};
use std::path::PathBuf;
use storydeck::metadata::StaticArgsLoader;
use storydeck::parse::EsModuleExportScanner;
use storydeck::{config, output, routes};

#[derive(Parser)]
#[command(name = "storydeck")]
#[command(about = "Story discovery and route generation for component preview sites")]
#[command(long_about = "\
Story discovery and route generation for component preview sites

Your filesystem is the data source. Files matching <Name>.stories.<ext>
become modules, named exports become stories, and every story gets a
dashboard route and a standalone route.

Content structure:

  src/
  ├── storydeck.toml               # Discovery config (optional)
  ├── Card.stories.ts              # Root-level module → id \"card\"
  ├── buttons/
  │   └── Button.stories.tsx       # → id \"buttons/button\"
  │                                #   export const Primary
  │                                #   → story \"buttons/button/primary\"
  │                                #   → /dashboard/buttons/button/primary
  │                                #   → /stories/buttons/button/primary
  └── node_modules/                # Never crawled

Module requirements: a default export (the component) and at least one
named export (a story). Files missing either are skipped with a warning.")]
#[command(version)]
struct Cli {
    /// Content directory to crawl
    #[arg(long, default_value = "src", global = true)]
    source: PathBuf,

    /// Directory used to compute virtual entrypoint paths (nothing is written)
    #[arg(long, default_value = ".storydeck/pages", global = true)]
    codegen_dir: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Discover story modules and print the inventory
    Scan,
    /// Build the route table and print it as JSON
    Routes,
    /// Validate the content directory without producing output
    Check,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "storydeck=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // The pipeline requires absolute paths; resolve CLI-relative ones here.
    let root = std::path::absolute(&cli.source)?;
    let codegen_dir = std::path::absolute(&cli.codegen_dir)?;
    let cfg = config::load_config(&root)?;

    let extractor = EsModuleExportScanner::new();
    let loader = StaticArgsLoader::new();

    match cli.command {
        Command::Scan => {
            let modules = routes::story_modules(&root, &extractor, &loader, &cfg)?;
            for line in output::format_scan(&modules, &root) {
                println!("{line}");
            }
        }
        Command::Routes => {
            let table = routes::build_route_table(&root, &codegen_dir, &extractor, &loader, &cfg)?;
            println!("{}", serde_json::to_string_pretty(&table)?);
        }
        Command::Check => {
            let table = routes::build_route_table(&root, &codegen_dir, &extractor, &loader, &cfg)?;
            println!("==> {} routes from {}", table.len(), root.display());
            println!("==> Content is valid");
        }
    }

    Ok(())
}
