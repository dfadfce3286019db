use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::fs;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use cv_render::{render_document, CvData, RenderOptions, TemplateKind};

#[derive(Parser)]
#[command(name = "cvpress")]
#[command(about = "Render CV JSON into printable HTML templates")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render a CV data file with the chosen template
    Render {
        /// Path to the CV JSON file
        data: PathBuf,
        /// Template identifier (slug, legacy id, or free text)
        #[arg(long, default_value = "modern")]
        template: String,
        /// Output file; stdout when omitted
        #[arg(long)]
        output: Option<PathBuf>,
        /// DOM id put on the page container for PDF capture tooling
        #[arg(long)]
        container_id: Option<String>,
    },
    /// List the available templates
    Templates,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Render {
            data,
            template,
            output,
            container_id,
        } => {
            let content = fs::read_to_string(&data)
                .with_context(|| format!("Failed to read CV data file: {}", data.display()))?;
            let cv: CvData = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse CV JSON: {}", data.display()))?;

            info!(template = %template, "rendering CV for {}", cv.personal_info.name);

            let opts = RenderOptions {
                container_id: container_id.as_deref(),
                extra_class: None,
            };
            let html = render_document(&cv, &template, &opts).into_string();

            match output {
                Some(path) => {
                    fs::write(&path, html)
                        .with_context(|| format!("Failed to write output: {}", path.display()))?;
                    println!("✓ Rendered {} with '{}' to {}", data.display(), template, path.display());
                }
                None => println!("{}", html),
            }
        }
        Command::Templates => {
            for kind in TemplateKind::ALL {
                println!("{:<18} {:<18} {}", kind.id(), kind.display_name(), kind.description());
            }
        }
    }

    Ok(())
}
