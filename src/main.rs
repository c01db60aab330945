// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Tracelane-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Tracelane and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Tracelane CLI entrypoint.
//!
//! Reads a C source file and the JSON trace document reported against it, then writes the
//! swimlane view as text or HTML to stdout or `--output`.

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::info;

use tracelane::capi::CapiIndex;
use tracelane::pipeline::prepare_document;
use tracelane::render::{render_document_html, render_document_unicode, RenderOptions};
use tracelane::source::SourceListing;
use tracelane::store::{load_document, load_source, write_output_atomic};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Html,
}

#[derive(Debug, Parser)]
#[command(name = "tracelane")]
#[command(about = "Render static-analysis traces as swimlanes beside the source", long_about = None)]
#[command(version)]
struct Cli {
    /// C source file the trace refers to
    source: PathBuf,

    /// JSON trace document
    report: PathBuf,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// `module function` listing used to link C-API calls (HTML only)
    #[arg(long)]
    capi_index: Option<PathBuf>,

    /// Omit the per-checkpoint commentary (text only)
    #[arg(long)]
    no_commentary: bool,

    /// Spaces between subflow columns (text only)
    #[arg(long, default_value_t = 1)]
    column_gap: usize,

    /// Truncate source rows to this many characters (text only)
    #[arg(long)]
    max_width: Option<usize>,

    /// Draw with ASCII glyphs (text only)
    #[arg(long)]
    ascii: bool,

    /// Enable debug logging
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn render_options(&self) -> RenderOptions {
        RenderOptions {
            show_commentary: !self.no_commentary,
            column_gap: self.column_gap,
            max_source_width: self.max_width,
            ascii: self.ascii,
        }
    }
}

fn init_logging(cli: &Cli) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Error);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder.target(env_logger::Target::Stderr).init();
}

fn run(cli: &Cli) -> Result<()> {
    let source = load_source(&cli.source).context("failed to load source")?;
    let doc = load_document(&cli.report).context("failed to load trace document")?;
    let listing = SourceListing::for_function(&source, &doc.function);
    info!(
        "{}: function {} spans {}, {} report(s)",
        doc.filename,
        doc.function.name,
        listing.line_range(),
        doc.reports.len()
    );

    let prepared = prepare_document(&doc, &listing);
    let rendered = match cli.format {
        OutputFormat::Text => {
            let mut text = render_document_unicode(&doc, &listing, &prepared, cli.render_options());
            text.push('\n');
            text
        }
        OutputFormat::Html => {
            let capi = cli
                .capi_index
                .as_deref()
                .map(CapiIndex::load)
                .transpose()
                .context("failed to load C-API index")?;
            render_document_html(&doc, &listing, &prepared, capi.as_ref())
        }
    };

    match &cli.output {
        Some(path) => {
            write_output_atomic(path, rendered.as_bytes())
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes()).context("failed to write to stdout")?;
            stdout.flush().context("failed to write to stdout")?;
        }
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);

    if let Err(err) = run(&cli) {
        eprintln!("tracelane: {err:#}");
        std::process::exit(1);
    }
}
