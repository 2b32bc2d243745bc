use std::io;
use std::panic;
use std::path::PathBuf;
use std::time::Duration;

use clap::{Parser, Subcommand};
use crossterm::{
    event::{self, DisableBracketedPaste, DisableMouseCapture, EnableBracketedPaste, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use tamu::app::{App, KioskOptions};
use tamu::guestbook::GuestbookStore;

#[derive(Parser)]
#[command(name = "tamu", version, about = "A terminal guestbook kiosk")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// File the guestbook entries are appended to (one JSON line each)
    #[arg(long, default_value = "guestbook.jsonl")]
    entries: PathBuf,

    /// Directory holding the avatar images (1.png, 2.png, ...)
    #[arg(long, default_value = "assets/char")]
    assets: PathBuf,

    /// Number of avatar cards in the carousel
    #[arg(long, default_value_t = 5)]
    cards: usize,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the saved guestbook entries and exit
    Entries,
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Entries) => return print_entries(&cli.entries),
        None => {}
    }

    if cli.cards == 0 {
        eprintln!("Error: --cards must be at least 1");
        std::process::exit(1);
    }

    run_kiosk(cli.entries, cli.assets, cli.cards)
}

/// Handles `tamu entries` — lists saved submissions and exits.
fn print_entries(path: &PathBuf) -> io::Result<()> {
    let store = GuestbookStore::open(path.clone());
    let entries = store.entries()?;
    if entries.is_empty() {
        println!("No entries yet.");
        return Ok(());
    }
    for entry in &entries {
        println!("[avatar {}] {} — {}", entry.avatar, entry.name, entry.comment);
    }
    println!("{} entries", entries.len());
    Ok(())
}

/// Sets up the terminal, runs the kiosk, and restores the terminal on exit.
fn run_kiosk(entries: PathBuf, assets: PathBuf, cards: usize) -> io::Result<()> {
    // Setup panic hook to restore terminal
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // The loop geometry is measured once at startup; resizing the terminal
    // afterwards re-lays the chrome out but keeps the strip as built.
    let (terminal_width, _) = crossterm::terminal::size()?;

    let result = run_app(
        &mut terminal,
        KioskOptions {
            entries,
            assets,
            cards,
            terminal_width,
        },
    );

    restore_terminal()?;

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    options: KioskOptions,
) -> io::Result<()> {
    let mut app = App::new(options);

    loop {
        app.render_frame(terminal)?;

        // Block up to 100ms waiting for the first event (prevents busy-loop,
        // gives tick() a chance to run ~10x/sec for animation and timers).
        if event::poll(Duration::from_millis(100))? {
            // Drain all queued events without blocking, then render immediately.
            loop {
                let ev = event::read()?;
                app.handle_event(ev);
                if app.should_quit {
                    break;
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(
        io::stdout(),
        LeaveAlternateScreen,
        DisableMouseCapture,
        DisableBracketedPaste
    )?;
    Ok(())
}
