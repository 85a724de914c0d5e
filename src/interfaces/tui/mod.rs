//! Terminal User Interface (TUI) module
//!
//! Provides an interactive terminal interface for editing the Homepage
//! dashboard configuration

use std::io;

use ratatui::{
    Terminal,
    backend::CrosstermBackend,
    crossterm::{
        event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
};
use tracing::{error, info};

mod app;
mod constants;
mod event_handler;
mod input_handler;
mod ui;

use app::{App, CurrentScreen};
use constants::TICK_RATE;
use ui::ui;

/// Run the TUI application
pub async fn run_tui() -> Result<(), Box<dyn std::error::Error>> {
    install_panic_hook()?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let mut app = App::new();
    app.bootstrap().await;
    info!("TUI started");
    let res = run_app(&mut terminal, &mut app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        error!("TUI loop failed: {}", err);
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

/// 崩溃时先恢复终端，再由 color-eyre 打印报告
fn install_panic_hook() -> Result<(), Box<dyn std::error::Error>> {
    let (panic_hook, eyre_hook) = color_eyre::config::HookBuilder::default().into_hooks();
    eyre_hook.install()?;
    let panic_hook = panic_hook.into_panic_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen, DisableMouseCapture);
        panic_hook(info);
    }));
    Ok(())
}

/// Main application loop
async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stderr>>,
    app: &mut App,
) -> io::Result<()> {
    loop {
        // Render UI
        terminal.draw(|f| ui(f, app))?;

        // 超时返回用于刷新过期的提示消息
        if event::poll(TICK_RATE)?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            let should_exit = event_handler::handle_key_event(app, key).await?;
            if should_exit {
                return Ok(());
            }

            // 任何请求返回 401 后回到登录界面
            if app.session.take_login_request() && app.current_screen != CurrentScreen::Login {
                app.require_login(Some("Session expired, please log in again"));
            }
        }

        app.dashboard.notifier_mut().prune();
    }
}
