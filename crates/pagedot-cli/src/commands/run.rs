use std::io;
use std::time::Instant;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen, SetTitle},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    Terminal,
};
use tracing::info;

use pagedot_core::{AppConfig, Orientation};
use pagedot_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::{handle_key_event, Action},
    theme::Theme,
    widgets::{HelpWidget, IndicatorWidget, PageWidget, StatusBarWidget},
};

pub fn run(config: AppConfig) -> Result<()> {
    // Setup terminal
    install_panic_hook();
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("pagedot"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let event_handler = EventHandler::new(config.tick_rate(), config.animation_tick_rate());
    let mut app = App::new(config, Theme::default());

    info!(pages = app.pages.len(), "pagedot starting");

    // Track whether the next iteration needs the animation tick rate.
    // Checked at the END of each iteration so a fresh transition gets fast
    // frames immediately.
    let mut needs_fast_update = false;

    // Main loop
    loop {
        // Advance the running transition (and the idle fade) before drawing
        app.advance(Instant::now());

        terminal.draw(|frame| {
            let area = frame.area();
            let main = Layout::vertical([Constraint::Min(1), Constraint::Length(1)]).split(area);

            match app.indicator.indicator().orientation() {
                Orientation::Horizontal => {
                    let rows = Layout::vertical([Constraint::Min(1), Constraint::Length(2)])
                        .split(main[0]);
                    PageWidget::render(frame, rows[0], &app);
                    IndicatorWidget::render(frame, rows[1], &mut app);
                }
                Orientation::Vertical => {
                    let cols = Layout::horizontal([Constraint::Min(1), Constraint::Length(4)])
                        .split(main[0]);
                    PageWidget::render(frame, cols[0], &app);
                    IndicatorWidget::render(frame, cols[1], &mut app);
                }
            }

            StatusBarWidget::render(frame, main[1], &app);

            if app.show_help {
                HelpWidget::render(frame, &app);
            }
        })?;

        // Handle events (faster tick rate while a transition runs)
        let event = if needs_fast_update {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            let now = Instant::now();
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, &app);
                    handle_action(&mut app, action, now);
                }
                AppEvent::Mouse(mouse) => {
                    app.handle_mouse(mouse, now);
                }
                AppEvent::Resize(_, _) => {
                    // The next draw lays everything out again
                    app.strip = None;
                }
                AppEvent::Tick => {
                    app.tick_status();
                }
            }
        }

        needs_fast_update = app.indicator.is_animating();

        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    info!("pagedot exiting");
    Ok(())
}

fn handle_action(app: &mut App, action: Action, now: Instant) {
    match action {
        Action::Quit => app.should_quit = true,
        Action::NextPage => app.next_page(now),
        Action::PrevPage => app.prev_page(now),
        Action::FirstPage => app.goto_page(0, now),
        Action::LastPage => app.goto_page(app.pages.len().saturating_sub(1), now),
        Action::GotoPage(index) => app.goto_page(index, now),
        Action::CycleStyle => app.cycle_style(false),
        Action::CycleStyleBack => app.cycle_style(true),
        Action::ToggleOrientation => app.toggle_orientation(),
        Action::ToggleInteractive => app.toggle_interactive(),
        Action::AddPage => app.add_page(),
        Action::RemovePage => app.remove_page(),
        Action::ToggleHelp => app.show_help = !app.show_help,
        Action::ExitMode => app.show_help = false,
        Action::None => {}
    }
}

/// Install a panic hook that restores the terminal before printing the panic
fn install_panic_hook() {
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        default_hook(panic_info);
    }));
}
