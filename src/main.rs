use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use url::Url;

use atompub::config::Config;
use atompub::file::{read_service, write_service};
use atompub::{QuickXmlCodec, Service, Workspace};

/// Get the config directory path (~/.config/atompub/)
fn get_config_dir() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home).join(".config").join("atompub"))
}

#[derive(Parser, Debug)]
#[command(name = "atompub", about = "Inspect and rewrite Atom Publishing Protocol service documents")]
struct Args {
    /// Config file (default: ~/.config/atompub/config.toml)
    #[arg(long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the workspaces and collections of a service document
    Show {
        file: PathBuf,
    },

    /// Parse a service document and write it back out in canonical form
    Format {
        file: PathBuf,

        /// Write to this file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Print the href of the first collection accepting a content type
    Find {
        file: PathBuf,

        /// Media type of the resource to post, e.g. image/png
        #[arg(long, value_name = "TYPE")]
        content_type: String,

        /// Only search the first workspace with this title
        #[arg(long, value_name = "TITLE")]
        workspace: Option<String>,

        /// Only match collections with this title
        #[arg(long, value_name = "TITLE")]
        title: Option<String>,

        /// Resolve relative hrefs against this URI
        #[arg(long, value_name = "URI")]
        base: Option<Url>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = match args.config {
        Some(path) => path,
        None => get_config_dir()?.join("config.toml"),
    };
    let config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config: {}", config_path.display()))?;
    let codec = QuickXmlCodec::from_config(&config);

    match args.command {
        Command::Show { file } => {
            let service = read_service(&file, &codec).await?;
            print_tree(&service);
        }
        Command::Format { file, output } => {
            let service = read_service(&file, &codec).await?;
            match output {
                Some(path) => {
                    write_service(&service, &codec, &path)?;
                    eprintln!("Wrote {}", path.display());
                }
                None => println!("{}", service.to_xml_string(&codec)?),
            }
        }
        Command::Find {
            file,
            content_type,
            workspace,
            title,
            base,
        } => {
            let service = read_service(&file, &codec).await?;
            let candidates: Vec<&Workspace> = match workspace.as_deref() {
                Some(t) => service.find_workspace(t).into_iter().collect(),
                None => service.workspaces().iter().collect(),
            };
            let found = candidates
                .into_iter()
                .find_map(|w| w.find_collection_by_title(title.as_deref(), Some(content_type.as_str())));

            let Some(collection) = found else {
                anyhow::bail!("No collection accepts {content_type}");
            };
            match base {
                Some(base) => println!(
                    "{}",
                    collection
                        .resolve_href(&base)
                        .with_context(|| format!("Invalid collection href: {}", collection.href()))?
                ),
                None => println!("{}", collection.href()),
            }
        }
    }

    Ok(())
}

fn print_tree(service: &Service) {
    if service.workspaces().is_empty() {
        println!("(no workspaces)");
        return;
    }
    for workspace in service.workspaces() {
        println!("{}", workspace.title());
        for collection in workspace.collections() {
            let accepts = if collection.accept_ranges().is_empty() {
                atompub::model::DEFAULT_ACCEPT.to_string()
            } else {
                collection.accept_ranges().join(", ")
            };
            println!("  {}  <{}>  [{}]", collection.title(), collection.href(), accepts);
            for categories in collection.categories() {
                for category in &categories.categories {
                    println!("    #{}", category.term);
                }
                if let Some(ref href) = categories.href {
                    println!("    categories: <{href}>");
                }
            }
        }
    }
}
