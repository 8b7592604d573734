use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use showreel::config::Config;
use showreel::controller::AppController;
use showreel::typewriter::Typewriter;
use showreel::view::AppView;
use showreel::{acquire_audio, logging, PlayerSettings, PlaylistPlayer};

#[tokio::main]
async fn main() -> Result<()> {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: Failed to initialize logging: {}", e);
    }

    tracing::info!("=== Showreel Starting ===");

    let config_path = std::env::args().nth(1).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;

    let audio = acquire_audio(&config);
    tracing::info!(output = audio.name(), "Audio output acquired");

    let player = PlaylistPlayer::mount(
        config.tracks(),
        audio,
        PlayerSettings {
            initial_volume: config.player.initial_volume,
            sample_interval: config.sample_interval(),
        },
    )
    .await?;

    let controller = AppController::new(
        player,
        config.testimonials.clone(),
        config.autoplay_interval(),
    )?;
    let headline = config.hero.typewriter();

    tracing::info!("Starting TUI...");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &controller, &headline).await;

    controller.shutdown().await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = ?err, "Application error");
    }

    tracing::info!("Showreel shutting down");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    controller: &AppController,
    headline: &Typewriter,
) -> io::Result<()> {
    loop {
        let state = controller.view_state().await;

        terminal.draw(|f| {
            let frame = headline.frame(state.ui.started_at.elapsed());
            AppView::render(f, &state, &frame);
        })?;

        // Short poll keeps the progress bar and typing effect smooth
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                controller.handle_key_event(key).await;
            }
        }

        if controller.should_quit().await {
            break;
        }
    }

    Ok(())
}
