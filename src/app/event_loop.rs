use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use ratatui::DefaultTerminal;

use crate::app::{App, Message, Model, ToastLevel, update};
use crate::watcher::FileWatcher;

pub(super) struct ResizeDebouncer {
    delay_ms: u64,
    pending: Option<(u16, u16, u64)>,
}

impl ResizeDebouncer {
    pub(super) const fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            pending: None,
        }
    }

    pub(super) const fn queue(&mut self, width: u16, height: u16, now_ms: u64) {
        self.pending = Some((width, height, now_ms));
    }

    pub(super) fn take_ready(&mut self, now_ms: u64) -> Option<(u16, u16)> {
        let (width, height, queued_at) = self.pending?;
        if now_ms.saturating_sub(queued_at) >= self.delay_ms {
            self.pending = None;
            Some((width, height))
        } else {
            None
        }
    }

    pub(super) const fn is_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl App {
    /// Run the pager until the user quits.
    ///
    /// # Errors
    ///
    /// Returns an error if the terminal cannot be initialized or the event
    /// loop hits an I/O failure.
    pub fn run(self) -> Result<()> {
        let _run_scope = crate::perf::scope("app.run.total");

        let init_scope = crate::perf::scope("app.ratatui_init");
        let mut terminal = ratatui::try_init()
            .context("Failed to initialize terminal - the pager requires an interactive terminal")?;
        let size = terminal.size()?;
        drop(init_scope);

        let layout_scope = crate::perf::scope("app.initial_layout");
        let mut model = Model::new(
            self.file_path,
            self.title,
            self.source,
            (size.width, size.height),
        )
        .with_strip_heading_breaks(self.strip_heading_breaks)
        .with_theme(crate::ui::style::Theme::current());
        model.watch_enabled = self.watch_enabled && model.file_path.is_some();
        drop(layout_scope);
        crate::perf::log_event(
            "init.layout",
            format!(
                "terminal={}x{} lines={}",
                size.width,
                size.height,
                model.lines.len()
            ),
        );

        let result = Self::event_loop(&mut terminal, &mut model);

        ratatui::restore();
        result
    }

    fn event_loop(terminal: &mut DefaultTerminal, model: &mut Model) -> Result<()> {
        let start = Instant::now();
        let mut resize_debouncer = ResizeDebouncer::new(100);
        let mut file_watcher = Self::initial_watcher(model);
        let mut frame_idx: u64 = 0;
        let mut needs_render = true;

        loop {
            if model.expire_toast(Instant::now()) {
                needs_render = true;
            }

            let now_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            if let Some((width, height)) = resize_debouncer.take_ready(now_ms) {
                crate::perf::log_event(
                    "event.resize.apply",
                    format!("frame={frame_idx} width={width} height={height}"),
                );
                *model = update(std::mem::take(model), Message::Resize(width, height));
                needs_render = true;
            }

            if model.watch_enabled
                && file_watcher
                    .as_mut()
                    .is_some_and(FileWatcher::take_change_ready)
            {
                *model = update(std::mem::take(model), Message::FileChanged);
                Self::handle_message_side_effects(model, &mut file_watcher, &Message::FileChanged);
                needs_render = true;
            }

            if needs_render {
                terminal.draw(|frame| crate::ui::render(model, frame))?;
                frame_idx += 1;
                needs_render = false;
            }

            if model.should_quit {
                break;
            }

            let poll_ms = if resize_debouncer.is_pending() { 10 } else { 250 };
            // Drain every queued event before the next render.
            let mut timeout = Duration::from_millis(poll_ms);
            while event::poll(timeout)? {
                timeout = Duration::ZERO;
                let event_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
                let Some(msg) =
                    Self::handle_event(&event::read()?, model, event_ms, &mut resize_debouncer)
                else {
                    continue;
                };
                crate::perf::log_event("event.message", format!("frame={frame_idx} msg={msg:?}"));
                let side_msg = msg.clone();
                *model = update(std::mem::take(model), msg);
                Self::handle_message_side_effects(model, &mut file_watcher, &side_msg);
                needs_render = true;
                if model.should_quit {
                    break;
                }
            }
        }

        Ok(())
    }

    fn initial_watcher(model: &mut Model) -> Option<FileWatcher> {
        if !model.watch_enabled {
            return None;
        }
        let path = model.file_path.clone()?;
        match Self::make_file_watcher(&path) {
            Ok(watcher) => Some(watcher),
            Err(err) => {
                model.watch_enabled = false;
                model.show_toast(ToastLevel::Warning, format!("Watch unavailable: {err}"));
                tracing::warn!(path = %path.display(), error = %err, "file watcher unavailable");
                None
            }
        }
    }
}
