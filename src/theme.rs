//! Terminal background detection.
//!
//! Heading colours depend on whether the terminal background is light or
//! dark. An explicit `--theme` wins, then `COLORFGBG`, then dark.

use std::sync::{Mutex, OnceLock};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackgroundMode {
    Dark,
    Light,
}

static BACKGROUND_OVERRIDE: OnceLock<Mutex<Option<BackgroundMode>>> = OnceLock::new();

/// Force a background mode, or `None` to fall back to detection.
pub fn set_background_mode(mode: Option<BackgroundMode>) {
    let lock = BACKGROUND_OVERRIDE.get_or_init(|| Mutex::new(None));
    let mut guard = lock.lock().expect("theme background lock");
    *guard = mode;
}

pub fn background_mode() -> BackgroundMode {
    let lock = BACKGROUND_OVERRIDE.get_or_init(|| Mutex::new(None));
    if let Ok(guard) = lock.lock()
        && let Some(mode) = *guard
    {
        return mode;
    }
    background_mode_from_colorfgbg(std::env::var("COLORFGBG").ok().as_deref())
}

/// Heading colour as a 256-colour palette index.
///
/// Index 6 is the terminal's own cyan; 24 is a deep blue that stays
/// readable on light backgrounds.
pub const fn heading_color_index(mode: BackgroundMode) -> u8 {
    match mode {
        BackgroundMode::Dark => 6,
        BackgroundMode::Light => 24,
    }
}

fn background_mode_from_colorfgbg(colorfgbg: Option<&str>) -> BackgroundMode {
    let Some(value) = colorfgbg else {
        return BackgroundMode::Dark;
    };
    let bg_str = value.rsplit(';').next().unwrap_or(value);
    let Ok(bg) = bg_str.parse::<u8>() else {
        return BackgroundMode::Dark;
    };

    if bg >= 7 {
        BackgroundMode::Light
    } else {
        BackgroundMode::Dark
    }
}
