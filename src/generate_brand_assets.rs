use anyhow::Result;
use brand_assets_lib::{run, BrandAssetsConfig};
use clap::Parser;
use dotenv::dotenv;
use std::path::{Path, PathBuf};
use std::process;

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate favicon, app icon and navbar logo from a source logo", long_about = None)]
struct Args {
    /// Path to the source logo image
    source: PathBuf,

    /// Project root containing the app/ and public/ directories
    #[arg(long, env("BRAND_ASSETS_ROOT"), default_value = ".")]
    project_root: PathBuf,
}

impl BrandAssetsConfig for Args {
    fn source_path(&self) -> &Path {
        &self.source
    }

    fn project_root(&self) -> &Path {
        &self.project_root
    }
}

fn main() -> Result<()> {
    // Load environment variables from .env file if present
    dotenv().ok();

    // Usage errors exit with 1 rather than clap's default of 2
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let assets = run(&args)?;

    println!("\n✓ All brand assets generated successfully!");
    println!("\nFiles created:");
    println!("  - {}", assets.favicon.display());
    println!("  - {}", assets.icon.display());
    println!("  - {}", assets.logo.display());

    Ok(())
}
