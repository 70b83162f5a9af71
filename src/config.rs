use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::ansi::OutputFormat;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeMode {
    Auto,
    Light,
    Dark,
}

/// Flags that may be persisted in a config file.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ConfigFlags {
    pub watch: bool,
    pub pager: bool,
    pub no_heading_break: bool,
    pub perf: bool,
    pub format: Option<OutputFormat>,
    pub width: Option<usize>,
    pub theme: Option<ThemeMode>,
    pub render_debug_log: Option<PathBuf>,
}

impl ConfigFlags {
    /// Merge `other` over `self`: booleans are OR'ed, options from `other` win.
    pub fn union(&self, other: &Self) -> Self {
        Self {
            watch: self.watch || other.watch,
            pager: self.pager || other.pager,
            no_heading_break: self.no_heading_break || other.no_heading_break,
            perf: self.perf || other.perf,
            format: other.format.or(self.format),
            width: other.width.or(self.width),
            theme: other.theme.or(self.theme),
            render_debug_log: other
                .render_debug_log
                .clone()
                .or_else(|| self.render_debug_log.clone()),
        }
    }
}

pub fn global_config_path() -> PathBuf {
    #[cfg(target_os = "windows")]
    {
        if let Some(appdata) = std::env::var_os("APPDATA") {
            return PathBuf::from(appdata).join("starmark").join("config");
        }
    }

    #[cfg(target_os = "macos")]
    {
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join("Library")
                .join("Application Support")
                .join("starmark")
                .join("config");
        }
    }

    #[cfg(not(any(target_os = "windows", target_os = "macos")))]
    {
        if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
            return PathBuf::from(xdg).join("starmark").join("config");
        }
        if let Some(home) = std::env::var_os("HOME") {
            return PathBuf::from(home)
                .join(".config")
                .join("starmark")
                .join("config");
        }
    }

    local_override_path()
}

pub fn local_override_path() -> PathBuf {
    PathBuf::from(".starmarkrc")
}

/// Load flags from a config file; a missing file yields defaults.
pub fn load_config_flags(path: &Path) -> Result<ConfigFlags> {
    if !path.exists() {
        return Ok(ConfigFlags::default());
    }
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    let tokens = content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .flat_map(|line| line.split_whitespace().map(ToOwned::to_owned))
        .collect::<Vec<_>>();
    tracing::debug!(path = %path.display(), tokens = tokens.len(), "loaded config");
    Ok(parse_flag_tokens(&tokens))
}

pub fn save_config_flags(path: &Path, flags: &ConfigFlags) -> Result<()> {
    let mut lines = Vec::new();
    lines.push("# starmark defaults (saved with --save)".to_string());
    if flags.watch {
        lines.push("--watch".to_string());
    }
    if flags.pager {
        lines.push("--pager".to_string());
    }
    if flags.no_heading_break {
        lines.push("--no-heading-break".to_string());
    }
    if let Some(format) = flags.format {
        lines.push(format!("--format {}", format_name(format)));
    }
    if let Some(width) = flags.width {
        lines.push(format!("--width {width}"));
    }
    if let Some(theme) = flags.theme {
        let theme_str = match theme {
            ThemeMode::Auto => "auto",
            ThemeMode::Light => "light",
            ThemeMode::Dark => "dark",
        };
        lines.push(format!("--theme {theme_str}"));
    }
    if flags.perf {
        lines.push("--perf".to_string());
    }
    if let Some(path) = &flags.render_debug_log {
        lines.push(format!("--render-debug-log {}", path.display()));
    }
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }
    fs::write(path, format!("{}\n", lines.join("\n")))
        .with_context(|| format!("Failed to write config {}", path.display()))
}

pub fn clear_config_flags(path: &Path) -> Result<()> {
    if path.exists() {
        fs::remove_file(path).with_context(|| format!("Failed to remove {}", path.display()))?;
    }
    Ok(())
}

/// Extract known flags from a token list; unknown tokens are ignored.
pub fn parse_flag_tokens(tokens: &[String]) -> ConfigFlags {
    let mut flags = ConfigFlags::default();
    let mut i = 0;
    while i < tokens.len() {
        let token = tokens[i].as_str();
        let (name, inline_value) = match token.split_once('=') {
            Some((name, value)) if name.starts_with("--") => (name, Some(value)),
            _ => (token, None),
        };
        let takes_value = matches!(
            name,
            "--format" | "--width" | "--theme" | "--render-debug-log"
        );
        let value = if takes_value && inline_value.is_none() {
            i += 1;
            tokens.get(i).map(String::as_str)
        } else {
            inline_value
        };

        match (name, value) {
            ("--watch", None) => flags.watch = true,
            ("--pager", None) => flags.pager = true,
            ("--no-heading-break", None) => flags.no_heading_break = true,
            ("--perf", None) => flags.perf = true,
            ("--plain", None) => flags.format = Some(OutputFormat::Plain),
            ("--json", None) => flags.format = Some(OutputFormat::Json),
            ("--format", Some(v)) => flags.format = parse_format(v),
            ("--width", Some(v)) => flags.width = v.parse().ok().filter(|w| *w > 0),
            ("--theme", Some(v)) => flags.theme = parse_theme(v),
            ("--render-debug-log", Some(v)) => flags.render_debug_log = Some(PathBuf::from(v)),
            _ => {}
        }
        i += 1;
    }
    flags
}

fn parse_theme(s: &str) -> Option<ThemeMode> {
    match s {
        "auto" => Some(ThemeMode::Auto),
        "light" => Some(ThemeMode::Light),
        "dark" => Some(ThemeMode::Dark),
        _ => None,
    }
}

fn parse_format(s: &str) -> Option<OutputFormat> {
    match s {
        "styled" => Some(OutputFormat::Styled),
        "plain" => Some(OutputFormat::Plain),
        "json" => Some(OutputFormat::Json),
        _ => None,
    }
}

const fn format_name(format: OutputFormat) -> &'static str {
    match format {
        OutputFormat::Styled => "styled",
        OutputFormat::Plain => "plain",
        OutputFormat::Json => "json",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_parse_flag_tokens_extracts_known_flags() {
        let args = tokens(&[
            "starmark",
            "--watch",
            "--pager",
            "--no-heading-break",
            "--theme",
            "dark",
            "--format=json",
            "--width",
            "72",
            "--render-debug-log=render.log",
            "notes.txt",
        ]);
        let flags = parse_flag_tokens(&args);
        assert!(flags.watch);
        assert!(flags.pager);
        assert!(flags.no_heading_break);
        assert_eq!(flags.theme, Some(ThemeMode::Dark));
        assert_eq!(flags.format, Some(OutputFormat::Json));
        assert_eq!(flags.width, Some(72));
        assert_eq!(flags.render_debug_log, Some(PathBuf::from("render.log")));
    }

    #[test]
    fn test_invalid_values_are_ignored() {
        let flags = parse_flag_tokens(&tokens(&["--width", "0", "--theme=neon", "--format", "xml"]));
        assert_eq!(flags.width, None);
        assert_eq!(flags.theme, None);
        assert_eq!(flags.format, None);
    }

    #[test]
    fn test_format_shorthands() {
        assert_eq!(
            parse_flag_tokens(&tokens(&["--plain"])).format,
            Some(OutputFormat::Plain)
        );
        assert_eq!(
            parse_flag_tokens(&tokens(&["--plain", "--json"])).format,
            Some(OutputFormat::Json)
        );
    }

    #[test]
    fn test_config_union_merges_cli_over_file_for_options() {
        let file = ConfigFlags {
            watch: true,
            theme: Some(ThemeMode::Light),
            width: Some(60),
            ..ConfigFlags::default()
        };
        let cli = ConfigFlags {
            pager: true,
            theme: Some(ThemeMode::Dark),
            ..ConfigFlags::default()
        };
        let merged = file.union(&cli);
        assert!(merged.watch);
        assert!(merged.pager);
        assert_eq!(merged.theme, Some(ThemeMode::Dark));
        assert_eq!(merged.width, Some(60));
    }

    #[test]
    fn test_save_load_and_clear_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config");
        let flags = ConfigFlags {
            watch: true,
            pager: true,
            no_heading_break: true,
            perf: true,
            format: Some(OutputFormat::Plain),
            width: Some(100),
            theme: Some(ThemeMode::Dark),
            render_debug_log: Some(PathBuf::from("render.log")),
        };

        save_config_flags(&path, &flags).unwrap();
        let loaded = load_config_flags(&path).unwrap();
        assert_eq!(loaded, flags);

        clear_config_flags(&path).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_missing_config_is_default() {
        let dir = tempdir().unwrap();
        let loaded = load_config_flags(&dir.path().join("absent")).unwrap();
        assert_eq!(loaded, ConfigFlags::default());
    }
}
