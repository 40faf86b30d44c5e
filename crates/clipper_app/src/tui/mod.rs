mod render;

use std::io::{stdout, Stdout};
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use client_logging::client_warn;
use clipper_client::{ApiError, ClientEvent, ClientHandle, ClientSettings, RemoteFile};
use clipper_core::{update, AppState, Effect, FileEntry, Msg};
use crossterm::cursor::{Hide, Show};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tui_input::backend::crossterm::EventHandler;
use tui_input::Input;

/// Tick cadence driving debounce, notice timers and event draining.
const TICK_INTERVAL: Duration = Duration::from_millis(75);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Focus {
    Input,
    Files,
}

pub fn run(settings: ClientSettings) -> Result<()> {
    let handle = ClientHandle::new(settings)?;
    let mut terminal = TerminalSession::enter()?;
    event_loop(&mut terminal, handle)
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalSession {
    fn enter() -> Result<Self> {
        enable_raw_mode().context("failed to enable raw mode")?;

        let mut out = stdout();
        if let Err(error) = execute!(out, EnterAlternateScreen, Hide) {
            let _ = disable_raw_mode();
            return Err(error).context("failed to enter alternate screen");
        }

        let backend = CrosstermBackend::new(stdout());
        match Terminal::new(backend) {
            Ok(terminal) => Ok(Self { terminal }),
            Err(error) => {
                let mut out = stdout();
                let _ = execute!(out, Show, LeaveAlternateScreen);
                let _ = disable_raw_mode();
                Err(error).context("failed to create terminal backend")
            }
        }
    }

    fn draw<F>(&mut self, draw_fn: F) -> Result<()>
    where
        F: FnOnce(&mut ratatui::Frame<'_>),
    {
        self.terminal
            .draw(draw_fn)
            .context("failed to render terminal")?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = execute!(self.terminal.backend_mut(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Signal {
    Continue,
    Quit,
}

struct Ui {
    state: AppState,
    input: Input,
    focus: Focus,
    handle: ClientHandle,
    needs_redraw: bool,
}

fn event_loop(terminal: &mut TerminalSession, handle: ClientHandle) -> Result<()> {
    let mut ui = Ui {
        state: AppState::new(),
        input: Input::default(),
        focus: Focus::Input,
        handle,
        needs_redraw: true,
    };

    // Startup: load the existing listing before the first frame arrives.
    ui.run_effects(vec![Effect::FetchFiles]);

    let mut last_tick = Instant::now();
    loop {
        // Drain completions from the background client first.
        while let Some(event) = ui.handle.try_recv() {
            let msg = map_client_event(event);
            ui.dispatch(msg);
        }

        if last_tick.elapsed() >= TICK_INTERVAL {
            ui.dispatch(Msg::Tick);
            last_tick = Instant::now();
        }

        if ui.state.consume_dirty() || ui.needs_redraw {
            ui.needs_redraw = false;
            let view = ui.state.view();
            terminal.draw(|frame| render::draw(frame, &view, &ui.input, ui.focus))?;
        }

        let timeout = TICK_INTERVAL.saturating_sub(last_tick.elapsed());
        if event::poll(timeout).context("failed to poll terminal events")? {
            match event::read().context("failed to read terminal event")? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if ui.on_key(key) == Signal::Quit {
                        break;
                    }
                }
                Event::Resize(_, _) => ui.needs_redraw = true,
                _ => {}
            }
        }
    }

    Ok(())
}

impl Ui {
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.run_effects(effects);
    }

    fn run_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::SubmitExtraction { url } => self.handle.submit_extraction(url),
                Effect::FetchFiles => self.handle.fetch_files(),
                Effect::ListFiles => self.handle.list_files(),
                Effect::DownloadFile { name } => self.handle.download(name),
                Effect::DeleteFile { name } => self.handle.delete(name),
                Effect::PurgeRecent { days } => self.handle.purge(days),
                Effect::RefreshAfterExtraction => self.handle.refresh_after_extraction(),
            }
        }
    }

    fn on_key(&mut self, key: KeyEvent) -> Signal {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return Signal::Quit;
        }

        if self.state.purge_confirm_open() {
            match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                    self.dispatch(Msg::PurgeAnswered { accepted: true });
                }
                KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                    self.dispatch(Msg::PurgeAnswered { accepted: false });
                }
                _ => {}
            }
            return Signal::Continue;
        }

        match self.focus {
            Focus::Input => match key.code {
                KeyCode::Enter => self.dispatch(Msg::SubmitRequested),
                KeyCode::Esc => return Signal::Quit,
                KeyCode::Tab | KeyCode::Down => self.set_focus(Focus::Files),
                _ => {
                    if self.input.handle_event(&Event::Key(key)).is_some() {
                        self.dispatch(Msg::InputChanged(self.input.value().to_string()));
                    }
                }
            },
            Focus::Files => match key.code {
                KeyCode::Tab | KeyCode::BackTab => self.set_focus(Focus::Input),
                KeyCode::Up | KeyCode::Char('k') => self.dispatch(Msg::SelectionMoved(-1)),
                KeyCode::Down | KeyCode::Char('j') => self.dispatch(Msg::SelectionMoved(1)),
                KeyCode::Enter | KeyCode::Char('d') => self.dispatch(Msg::DownloadRequested),
                KeyCode::Char('r') => self.dispatch(Msg::RefreshRequested),
                KeyCode::Char('x') => self.dispatch(Msg::PurgeRequested),
                KeyCode::Delete => self.dispatch(Msg::DeleteRequested),
                KeyCode::Esc | KeyCode::Char('q') => return Signal::Quit,
                _ => {}
            },
        }
        Signal::Continue
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.needs_redraw = true;
    }
}

fn map_client_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::ExtractionFinished { result } => Msg::ExtractionFinished {
            result: result.map(|_| ()).map_err(log_api_error),
        },
        ClientEvent::FilesFetched { result } => Msg::FilesFetched {
            result: result.map(to_entries).map_err(log_api_error),
        },
        ClientEvent::ListingFetched { result } => Msg::ListingFetched {
            result: result
                .map(|listing| to_entries(listing.files))
                .map_err(log_api_error),
        },
        ClientEvent::DownloadFinished { name, result } => Msg::DownloadFinished {
            name,
            result: result
                .map(|path| path.display().to_string())
                .map_err(log_api_error),
        },
        ClientEvent::DeleteFinished { name, result } => Msg::DeleteFinished {
            name,
            result: result.map_err(log_api_error),
        },
        ClientEvent::PurgeFinished { result } => Msg::PurgeFinished {
            result: result.map(|summary| summary.message).map_err(log_api_error),
        },
        ClientEvent::SweepFinished { removed } => Msg::SweepFinished { removed },
    }
}

fn log_api_error(err: ApiError) -> String {
    client_warn!("Backend call failed: {err}");
    err.to_string()
}

fn to_entries(files: Vec<RemoteFile>) -> Vec<FileEntry> {
    files
        .into_iter()
        .map(|file| FileEntry {
            name: file.name,
            size: file.size,
            modified: file.modified,
        })
        .collect()
}
