//! Starmark - a viewer for asterisk-delimited text.
//!
//! # Usage
//!
//! ```bash
//! starmark notes.txt
//! starmark --pager --watch notes.txt
//! echo 'Some **bold** text' | starmark --json
//! starmark --practices --pager
//! ```

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;

use starmark::ansi::{OutputFormat, write_output};
use starmark::app::App;
use starmark::config::{
    ConfigFlags, ThemeMode, clear_config_flags, global_config_path, load_config_flags,
    local_override_path, save_config_flags,
};
use starmark::markup::parse;
use starmark::perf;
use starmark::practices::{PRACTICES_TITLE, practices_markup};
use starmark::source::{STDIN_PATH, is_stdin, read_source};
use starmark::theme::{BackgroundMode, background_mode, set_background_mode};
use starmark::ui::text::LayoutOptions;

/// View text with ***heading***, **bold** and *italic* markup
#[derive(Parser, Debug)]
#[command(name = "starmark", version, about, long_about = None)]
struct Cli {
    /// File to view; `-` or no file reads standard input
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Open the interactive pager instead of printing
    #[arg(short, long)]
    pager: bool,

    /// Watch the file for changes and reload (implies --pager)
    #[arg(short, long)]
    watch: bool,

    /// Output format when printing
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Shorthand for --format plain
    #[arg(long, conflicts_with_all = ["format", "json"])]
    plain: bool,

    /// Shorthand for --format json
    #[arg(long, conflicts_with = "format")]
    json: bool,

    /// Wrap printed output at this many columns
    #[arg(long, value_name = "COLS", value_parser = clap::value_parser!(usize))]
    width: Option<usize>,

    /// Do not start headings on a new line
    #[arg(long)]
    no_heading_break: bool,

    /// Colour scheme for headings (light or dark background)
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Show the built-in cybersecurity best practices
    #[arg(long, conflicts_with = "file")]
    practices: bool,

    /// Report timing of startup phases on stderr
    #[arg(long)]
    perf: bool,

    /// Write pager events to a file
    #[arg(long, value_name = "PATH")]
    render_debug_log: Option<PathBuf>,

    /// Save current command-line flags as defaults
    #[arg(long)]
    save: bool,

    /// Clear saved defaults
    #[arg(long)]
    clear: bool,
}

impl Cli {
    /// The flags given on this command line, in config form.
    fn flags(&self) -> ConfigFlags {
        let format = if self.plain {
            Some(OutputFormat::Plain)
        } else if self.json {
            Some(OutputFormat::Json)
        } else {
            self.format
        };
        ConfigFlags {
            watch: self.watch,
            pager: self.pager,
            no_heading_break: self.no_heading_break,
            perf: self.perf,
            format,
            width: self.width.filter(|w| *w > 0),
            theme: self.theme,
            render_debug_log: self.render_debug_log.clone(),
        }
    }
}

/// Markup to display plus where it came from.
struct Input {
    file_path: Option<PathBuf>,
    title: String,
    source: String,
}

fn load_input(cli: &Cli) -> Result<Input> {
    if cli.practices {
        return Ok(Input {
            file_path: None,
            title: PRACTICES_TITLE.to_string(),
            source: practices_markup(),
        });
    }

    let path = cli
        .file
        .clone()
        .unwrap_or_else(|| PathBuf::from(STDIN_PATH));
    if is_stdin(&path) && std::io::stdin().is_terminal() {
        anyhow::bail!("No input: pass a FILE, pipe text on stdin, or use --practices");
    }
    let source = read_source(&path).with_context(|| format!("Cannot open {}", path.display()))?;
    if is_stdin(&path) {
        return Ok(Input {
            file_path: None,
            title: "stdin".to_string(),
            source,
        });
    }
    Ok(Input {
        title: display_title(&path),
        file_path: Some(path),
        source,
    })
}

fn display_title(path: &Path) -> String {
    path.file_name()
        .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned())
}

fn apply_theme(theme: Option<ThemeMode>) {
    match theme.unwrap_or(ThemeMode::Auto) {
        ThemeMode::Auto => set_background_mode(None),
        ThemeMode::Light => set_background_mode(Some(BackgroundMode::Light)),
        ThemeMode::Dark => set_background_mode(Some(BackgroundMode::Dark)),
    }
}

fn print_document(input: &Input, flags: &ConfigFlags) -> Result<()> {
    let _scope = perf::scope("print.total");
    let doc = {
        let _parse = perf::scope("print.parse");
        parse(&input.source)
    };
    let stdout = std::io::stdout();
    let is_tty = stdout.is_terminal();
    let width = flags.width.or_else(|| {
        is_tty
            .then(crossterm::terminal::size)
            .and_then(Result::ok)
            .map(|(cols, _)| usize::from(cols))
    });
    // Escape codes are only useful on a terminal unless asked for explicitly.
    let format = flags.format.unwrap_or(if is_tty {
        OutputFormat::Styled
    } else {
        OutputFormat::Plain
    });
    let options = LayoutOptions {
        width,
        strip_heading_breaks: flags.no_heading_break,
    };
    tracing::debug!(?format, ?width, spans = doc.len(), "printing document");

    let mut out = stdout.lock();
    match write_output(&mut out, &doc, format, options, background_mode()) {
        Err(err) if err.kind() == std::io::ErrorKind::BrokenPipe => Ok(()),
        other => other.context("Failed to write output"),
    }
}

fn init_logging(flags: &ConfigFlags) {
    use tracing_subscriber::prelude::*;

    let event_log_path = flags
        .render_debug_log
        .clone()
        .or_else(|| std::env::var_os("STARMARK_EVENT_LOG").map(PathBuf::from));
    let event_log = event_log_path
        .as_deref()
        .and_then(|path| match perf::event_log_layer(path) {
            Ok(layer) => Some(layer),
            Err(err) => {
                eprintln!("[warn] Cannot open event log {}: {err}", path.display());
                None
            }
        });

    tracing_subscriber::registry()
        .with(event_log)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_filter(perf::stderr_filter(flags.perf)),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let global_path = global_config_path();
    let local_path = local_override_path();
    let cli_flags = cli.flags();

    if cli.clear {
        clear_config_flags(&global_path)?;
    }
    if cli.save {
        save_config_flags(&global_path, &cli_flags)?;
        eprintln!("Saved defaults to {}", global_path.display());
    }

    let file_flags = if cli.clear {
        ConfigFlags::default()
    } else {
        let global_flags = load_config_flags(&global_path)?;
        let local_flags = load_config_flags(&local_path)?;
        global_flags.union(&local_flags)
    };
    let effective = file_flags.union(&cli_flags);
    init_logging(&effective);

    apply_theme(effective.theme);

    // --save/--clear with nothing to show are complete on their own.
    if (cli.save || cli.clear) && cli.file.is_none() && !cli.practices {
        return Ok(());
    }

    let input = load_input(&cli)?;
    if effective.pager || effective.watch {
        let app = App::new(input.file_path, input.title, input.source)
            .with_watch(effective.watch)
            .with_strip_heading_breaks(effective.no_heading_break);
        return app.run().context("Pager error");
    }
    print_document(&input, &effective)
}
