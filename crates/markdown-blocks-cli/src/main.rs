use anyhow::{Context, Result};
use markdown_blocks_config::Config;
use markdown_blocks_engine::{Block, BlockKind, ListFormat, io, serialize_with, to_markup};
use std::{env, path::PathBuf, process};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Output {
    Blocks,
    Markdown,
}

fn usage(program: &str) -> ! {
    eprintln!("Usage: {program} <markdown-file> [--blocks | --markdown]");
    process::exit(1);
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    let args: Vec<String> = env::args().collect();
    let program = args
        .first()
        .map(String::as_str)
        .unwrap_or("markdown-blocks-cli");

    let (path, output) = match args.as_slice() {
        [_, path] => (PathBuf::from(path), Output::Blocks),
        [_, path, flag] => match flag.as_str() {
            "--blocks" => (PathBuf::from(path), Output::Blocks),
            "--markdown" => (PathBuf::from(path), Output::Markdown),
            _ => usage(program),
        },
        _ => usage(program),
    };

    let config_path = Config::config_path();
    let config = match Config::load() {
        Ok(Some(config)) => {
            log::info!("Loaded config from {}", config_path.display());
            config
        }
        Ok(None) => {
            log::debug!("No config file at {}, using defaults", config_path.display());
            Config::default()
        }
        Err(e) => {
            eprintln!("Error: Failed to load config file: {e}");
            process::exit(1);
        }
    };

    let blocks = io::read_document(&path, &config.parse)
        .with_context(|| format!("reading {}", path.display()))?;
    log::info!("Parsed {} blocks from {}", blocks.len(), path.display());

    match output {
        Output::Blocks => {
            for (i, block) in blocks.iter().enumerate() {
                println!("{i:>4} {}", describe(block));
            }
        }
        Output::Markdown => println!("{}", serialize_with(&blocks, &config.serialize)),
    }

    Ok(())
}

/// One-line summary: kind, level or format, then the content.
fn describe(block: &Block) -> String {
    let markup = || {
        block
            .rich_text()
            .unwrap_or_default()
            .iter()
            .map(to_markup)
            .collect::<String>()
    };

    match &block.kind {
        BlockKind::Heading { level, .. } => format!("heading{level}  {}", markup()),
        BlockKind::HorizontalRule => "horizontal_rule".to_string(),
        BlockKind::Blockquote { level, .. } => format!("blockquote(level {level})  {}", markup()),
        BlockKind::ListItem { level, format, .. } => {
            let format = match format {
                ListFormat::Unordered => "bulleted".to_string(),
                ListFormat::Ordered { numbering } => format!("numbered {numbering}"),
                ListFormat::Task { checked } => format!("task checked={checked}"),
            };
            format!("list_item({format}, level {level})  {}", markup())
        }
        BlockKind::Paragraph { .. } => format!("paragraph  {}", markup()),
        BlockKind::Code { raw_text, language } => format!(
            "code({})  {} lines",
            language.as_deref().unwrap_or("plain"),
            raw_text.lines().count()
        ),
    }
}
