//! Weather card - terminal front end

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Mutex;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_card::action::Action;
use weather_card::components::{Component, ForecastScreen, ForecastScreenProps};
use weather_card::config::{Config, Overrides};
use weather_card::effect::Effect;
use weather_card::forecast::TempUnit;
use weather_card::reducer::reducer;
use weather_card::source::{self, ForecastSource, SampleSource, TomlFileSource};
use weather_card::state::AppState;

/// Environment variable holding the log filter
const LOG_ENV: &str = "WEATHER_CARD_LOG";

/// Weather card - a static weather screen in the terminal
#[derive(Parser, Debug)]
#[command(name = "weather-card")]
#[command(about = "Current conditions, hourly and weekly forecast in the terminal")]
struct Args {
    /// Forecast TOML file (defaults to the built-in sample data)
    #[arg(long)]
    data: Option<PathBuf>,

    /// Config file (defaults to <config dir>/weather-card/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Display unit, overrides the config file
    #[arg(long, value_enum)]
    unit: Option<TempUnit>,

    /// Show the week section below the hourly row
    #[arg(long)]
    week: bool,

    /// Append logs to this file (filter with WEATHER_CARD_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum CardComponentId {
    Screen,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum CardContext {
    Main,
}

impl EventRoutingState<CardComponentId, CardContext> for AppState {
    fn focused(&self) -> Option<CardComponentId> {
        Some(CardComponentId::Screen)
    }

    fn modal(&self) -> Option<CardComponentId> {
        None
    }

    fn binding_context(&self, id: CardComponentId) -> CardContext {
        match id {
            CardComponentId::Screen => CardContext::Main,
        }
    }

    fn default_context(&self) -> CardContext {
        CardContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        data,
        config: config_path,
        unit,
        week,
        log_file,
        debug: debug_args,
    } = Args::parse();

    if let Some(path) = &log_file {
        init_logging(path)?;
    }

    let config = match Config::load_or_default(config_path.as_deref()) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let Config {
        unit,
        show_week,
        data_file,
    } = config.merge(Overrides {
        data_file: data,
        unit,
        show_week: week,
    });

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(move || async move {
            let source: Box<dyn ForecastSource + Send> = match &data_file {
                Some(path) => Box::new(TomlFileSource::new(path)),
                None => Box::new(SampleSource),
            };
            tracing::info!(source = %source.name(), "loading forecast");

            let forecast = match source.load() {
                Ok(forecast) => forecast,
                Err(e) => {
                    eprintln!("Error: {}", e);
                    eprintln!("Run without --data to use the built-in sample forecast.");
                    std::process::exit(1);
                }
            };

            let mut state = AppState::new(forecast);
            state.unit = unit;
            state.show_week = show_week;
            state.data_file = data_file;
            Ok::<AppState, io::Error>(state)
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &debug, store, replay_actions).await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging(path: &Path) -> io::Result<()> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| "weather_card=info".into()))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

struct CardUi {
    screen: ForecastScreen,
}

impl CardUi {
    fn new() -> Self {
        Self {
            screen: ForecastScreen,
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<CardComponentId>,
    ) {
        event_ctx.set_component_area(CardComponentId::Screen, area);

        let props = ForecastScreenProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.screen.render(frame, area, props);
    }

    fn handle_screen_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = ForecastScreenProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self.screen.handle_event(event, props).into_iter().collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(CardUi::new()));
    let mut bus: EventBus<AppState, Action, CardComponentId, CardContext> = EventBus::new();
    let keybindings: Keybindings<CardContext> = Keybindings::new();

    let ui_screen = Rc::clone(&ui);
    bus.register(CardComponentId::Screen, move |event, state| {
        ui_screen
            .borrow_mut()
            .handle_screen_event(&event.kind, state)
    });

    // Re-render on terminal resize; the visible card count depends on width
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::Render),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            handle_effect,
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::LoadForecast { path } => {
            ctx.tasks().spawn("forecast", async move {
                match source::load_forecast_file(&path).await {
                    Ok(data) => Action::ForecastDidLoad(data),
                    Err(e) => Action::ForecastDidError(e.to_string()),
                }
            });
        }
    }
}
