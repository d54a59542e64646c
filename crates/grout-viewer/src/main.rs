use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use grout_render::{Parameter, RenderSummary, SchemaEditor, TextContainer, load_parameter};

#[derive(Parser)]
#[command(name = "grout-viewer")]
#[command(version)]
#[command(about = "Print a text outline of a Grout record schema")]
struct Cli {
    /// Path to the parameter document (JSON or YAML)
    #[arg(short = 'f', long = "file")]
    file: PathBuf,
    /// Spaces per outline level
    #[arg(long = "indent", default_value_t = 2)]
    indent: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    // Skipped properties are reported through tracing warnings.
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .try_init();

    let parameter = load_parameter(&cli.file)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;

    println!("Schema summary for `{}`", cli.file.display());
    println!();

    let (outline, summary) = outline(&parameter, cli.indent)?;
    print!("{outline}");
    print_footer(&summary);

    Ok(())
}

fn outline(parameter: &Parameter, indent: usize) -> Result<(String, RenderSummary)> {
    let mut editor = SchemaEditor::new(TextContainer::new().with_indent_size(indent));
    let summary = editor.set(Some(parameter))?;
    Ok((editor.container().to_text(), summary))
}

fn print_footer(summary: &RenderSummary) {
    if summary.is_noop() {
        println!("No properties to show.");
        return;
    }

    println!();
    println!("Properties: {}", summary.rendered.len());
    if summary.missing_fields > 0 {
        println!("Missing metadata fields: {}", summary.missing_fields);
    }
    if !summary.skipped.is_empty() {
        println!("Without definition: {}", summary.skipped.join(", "));
    }
}
