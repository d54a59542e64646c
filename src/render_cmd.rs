use std::fs;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use grout_editor::cli::{OutputFormatArg, RenderArgs};
use grout_editor::config::GroutConfig;
use grout_render::{
    Container, HtmlContainer, MissingDefinition, RenderOptions, RenderSummary, SchemaEditor,
    TextContainer, WriterConfig, load_parameter,
};
use tracing::info;

pub fn run(args: &RenderArgs, config: &GroutConfig) -> Result<()> {
    let parameter = load_parameter(&args.input)
        .with_context(|| format!("failed to load {}", args.input.display()))?;
    let existing = match &args.container {
        Some(path) => read_container(path)?,
        None => String::new(),
    };

    let options = render_options(args, config);
    let writer = writer_config(args, config);

    let (output, summary) = match args.format {
        OutputFormatArg::Html => {
            let container = HtmlContainer::with_existing_markup(existing).with_config(writer);
            render_into(container, &parameter, options, HtmlContainer::to_html)?
        }
        OutputFormatArg::Text => {
            let container =
                TextContainer::with_existing_text(existing).with_indent_size(writer.indent_size);
            render_into(container, &parameter, options, TextContainer::to_text)?
        }
    };

    info!(
        rendered = summary.rendered.len(),
        skipped = summary.skipped.len(),
        missing_fields = summary.missing_fields,
        "rendered {}",
        args.input.display()
    );

    match args.out.as_deref().or(args.container.as_deref()) {
        Some(path) => {
            fs::write(path, output)
                .with_context(|| format!("failed to write {}", path.display()))?;
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .context("failed to write to stdout")?;
            if !output.is_empty() && !output.ends_with('\n') {
                writeln!(stdout).context("failed to write to stdout")?;
            }
        }
    }

    Ok(())
}

fn render_into<C>(
    container: C,
    parameter: &grout_render::Parameter,
    options: RenderOptions,
    serialize: fn(&C) -> String,
) -> Result<(String, RenderSummary)>
where
    C: Container,
{
    let mut editor = SchemaEditor::with_options(container, options);
    let summary = editor.set(Some(parameter))?;
    Ok((serialize(editor.container()), summary))
}

/// A container file that does not exist yet starts out empty.
fn read_container(path: &Path) -> Result<String> {
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

fn render_options(args: &RenderArgs, config: &GroutConfig) -> RenderOptions {
    let mut options = config.render.render_options();
    if let Some(placeholder) = &args.placeholder {
        options.placeholder = placeholder.clone();
    }
    if args.strict {
        options.missing_definition = MissingDefinition::Strict;
    }
    options
}

fn writer_config(args: &RenderArgs, config: &GroutConfig) -> WriterConfig {
    let mut writer = config.render.writer_config();
    if args.pretty {
        writer.pretty_print = true;
    }
    writer
}
