use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use vitrine::build_info;
use vitrine::card::CardState;
use vitrine::deck::Deck;
use vitrine::grades::{GradeFetcher, StubGradeFetcher};
use vitrine::profiles;
use vitrine::ui;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();
    let mut document_path: Option<String> = None;

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "vitrine {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Vitrine - Terminal Profile Card Deck\n");
                println!("Usage: vitrine [profiles.yaml]\n");
                println!("Arguments:");
                println!("  profiles.yaml  Load profiles from an external YAML document");
                println!("                 (omit to use the embedded demo dataset)\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message\n");
                println!("Set VITRINE_LOG=<file> to write tracing output to a log file.");
                std::process::exit(0);
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'vitrine --help' for usage.");
                std::process::exit(1);
            }
            path => document_path = Some(path.to_string()),
        }
    }

    init_logging();

    // Load fails closed: a bad document leaves us with an empty deck, not
    // an error path.
    let data = match &document_path {
        Some(path) => profiles::load_from_path(Path::new(path)),
        None => profiles::load(),
    };

    let fetcher: Arc<dyn GradeFetcher> =
        Arc::new(StubGradeFetcher::new().with_methods(&data.grade_fetching_methods));

    let mut deck = Deck::from_app_data(&data);
    let mut card = CardState::new();
    if let Some(profile) = deck.current() {
        card.bind(profile);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Main loop
    loop {
        terminal.draw(|frame| ui::draw(frame, &deck, &card, &data.achievement_badges))?;

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Left | KeyCode::Char('h') => {
                        deck.previous();
                        if let Some(profile) = deck.current() {
                            card.bind(profile);
                        }
                    }
                    KeyCode::Right | KeyCode::Char('l') => {
                        deck.next();
                        if let Some(profile) = deck.current() {
                            card.bind(profile);
                        }
                    }
                    KeyCode::Char(c @ '1'..='9') => {
                        if let Some(profile) = deck.current() {
                            let index = (c as usize) - ('1' as usize);
                            card.select(index, profile, fetcher.clone());
                        }
                    }
                    KeyCode::Esc => card.clear_selection(),
                    KeyCode::Char('q') => break,
                    _ => {}
                }
            }
        }

        // Harvest fetch completions and expire the status message.
        card.tick(Instant::now());
    }

    // Restore terminal
    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;

    Ok(())
}

/// Routes tracing output to the file named by VITRINE_LOG. Logging straight
/// to the terminal would scribble over the alternate screen, so without the
/// variable nothing is recorded.
fn init_logging() {
    let Ok(path) = std::env::var("VITRINE_LOG") else {
        return;
    };
    match std::fs::File::create(&path) {
        Ok(file) => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
                )
                .with_writer(Arc::new(file))
                .with_ansi(false)
                .init();
        }
        Err(err) => {
            eprintln!("Warning: could not open log file {}: {}", path, err);
        }
    }
}
