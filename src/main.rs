//! Terminal 2048 runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout). Advice runs on a background runtime and is
//! polled between key events.
//!
//! Logging goes to stderr and is off unless `RUST_LOG` is set; redirect it
//! (`RUST_LOG=debug tui-2048 2>game.log`) to keep the screen clean.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_2048::advice::{Advice, AdviceConfig, AdviceService, Advisor, ConfiguredAdvisor};
use tui_2048::core::{GameSnapshot, GameState, Grid};
use tui_2048::input::{handle_key_event, should_quit, KeyCommand};
use tui_2048::term::{AdviceView, FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_2048::types::GameAction;

const POLL_MS: u64 = 50;

/// Advice lifecycle for the grid on screen.
enum AdviceSlot {
    Idle,
    Pending { token: u64, grid: Grid },
    Ready { grid: Grid, advice: Advice },
    Failed { grid: Grid, message: String },
}

struct App {
    game: GameState,
    service: AdviceService<ConfiguredAdvisor>,
    slot: AdviceSlot,
    next_token: u64,
}

impl App {
    fn request_advice(&mut self) {
        if !self.service.advisor().is_enabled() {
            return;
        }
        let grid = *self.game.grid();
        if let AdviceSlot::Pending { grid: pending, .. } = &self.slot {
            if *pending == grid {
                return;
            }
        }
        self.next_token += 1;
        self.service.request(self.next_token, grid);
        self.slot = AdviceSlot::Pending {
            token: self.next_token,
            grid,
        };
    }

    fn use_advice(&mut self) {
        let dir = match &self.slot {
            AdviceSlot::Ready { grid, advice } if grid == self.game.grid() => advice.suggested_move,
            _ => return,
        };
        self.apply(GameAction::Move(dir));
    }

    fn apply(&mut self, action: GameAction) {
        if self.game.apply_action(action) {
            self.slot = AdviceSlot::Idle;
        }
    }

    fn poll_advice(&mut self) {
        while let Some(done) = self.service.try_recv() {
            let grid = match &self.slot {
                AdviceSlot::Pending { token, grid } if *token == done.token => *grid,
                // Superseded request.
                _ => continue,
            };
            self.slot = match done.result {
                Ok(advice) => AdviceSlot::Ready { grid, advice },
                Err(e) => AdviceSlot::Failed {
                    grid,
                    message: e.to_string(),
                },
            };
        }
    }

    fn advice_view(&self) -> AdviceView<'_> {
        if !self.service.advisor().is_enabled() {
            return AdviceView::Off;
        }
        let current = self.game.grid();
        match &self.slot {
            AdviceSlot::Pending { grid, .. } if grid == current => AdviceView::Pending,
            AdviceSlot::Ready { grid, advice } if grid == current => AdviceView::Ready {
                direction: advice.suggested_move,
                confidence: advice.confidence,
                reasoning: &advice.reasoning,
            },
            AdviceSlot::Failed { grid, message } if grid == current => AdviceView::Failed(message),
            _ => AdviceView::Idle,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let seed = seed_from_env();
    let config = AdviceConfig::from_env();
    let advisor = config.build();
    info!("seed={seed} advisor={} timeout={}ms", advisor.name(), config.timeout_ms);

    let service =
        AdviceService::new(advisor, config.timeout()).context("failed to start advice runtime")?;
    let mut app = App {
        game: GameState::new(seed),
        service,
        slot: AdviceSlot::Idle,
        next_token: 0,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut snap = GameSnapshot::default();

    loop {
        app.poll_advice();

        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.game.snapshot_into(&mut snap);
        view.render_into(&snap, app.advice_view(), Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        if !event::poll(Duration::from_millis(POLL_MS))? {
            continue;
        }
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit with score {}", app.game.score());
                    return Ok(());
                }
                match handle_key_event(key) {
                    Some(KeyCommand::Game(action)) => app.apply(action),
                    Some(KeyCommand::RequestAdvice) => app.request_advice(),
                    Some(KeyCommand::UseAdvice) => app.use_advice(),
                    None => {}
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}

/// `TUI_2048_SEED`, or a time-derived seed when unset or unparsable.
fn seed_from_env() -> u32 {
    std::env::var("TUI_2048_SEED")
        .ok()
        .and_then(|s| s.trim().parse().ok())
        .unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
}
