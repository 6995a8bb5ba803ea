use std::io;
use std::time::{Duration, Instant};

use chrono::Utc;
use crossterm::event::{self, Event, KeyCode};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::{backend::CrosstermBackend, Terminal};

use skyhopper::build_info;
use skyhopper::constants::{FRAME_INTERVAL_MS, VIEWPORT_HEIGHT, VIEWPORT_WIDTH};
use skyhopper::engine::{BellAudio, Viewport};
use skyhopper::game::Scene;
use skyhopper::highscores::HighScores;
use skyhopper::ui;

fn main() -> io::Result<()> {
    // Handle CLI arguments
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 1 {
        match args[1].as_str() {
            "--version" | "-v" => {
                println!(
                    "skyhopper {} ({})",
                    build_info::BUILD_DATE,
                    build_info::BUILD_COMMIT
                );
                std::process::exit(0);
            }
            "--help" | "-h" => {
                println!("Skyhopper - Terminal Flappy-Bird Arcade Game\n");
                println!("Usage: skyhopper [option]\n");
                println!("Options:");
                println!("  --version  Show version information");
                println!("  --help     Show this help message");
                println!("\nIn game: Space/Up to flap, r to restart, q to quit.");
                std::process::exit(0);
            }
            other => {
                eprintln!("Unknown option: {}", other);
                eprintln!("Run 'skyhopper --help' for usage.");
                std::process::exit(1);
            }
        }
    }

    let mut highscores = HighScores::load();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut highscores);

    // Cleanup terminal before surfacing any error
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;

    result
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    highscores: &mut HighScores,
) -> io::Result<()> {
    let viewport = Viewport::new(VIEWPORT_WIDTH, VIEWPORT_HEIGHT);
    let mut rng = rand::thread_rng();
    let mut scene = Scene::new(viewport, Box::new(BellAudio), &mut rng)?;
    let mut run_recorded = false;
    let mut last_frame = Instant::now();

    loop {
        terminal.draw(|frame| {
            ui::play_scene::render_scene(frame, frame.size(), &scene, highscores.best);
        })?;

        // Poll for input for at most one frame interval
        if event::poll(Duration::from_millis(FRAME_INTERVAL_MS))? {
            if let Event::Key(key_event) = event::read()? {
                match key_event.code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => break,
                    KeyCode::Char(' ') | KeyCode::Up | KeyCode::Enter => scene.flap(),
                    KeyCode::Char('r') | KeyCode::Char('R') if scene.is_over() => {
                        scene = Scene::new(viewport, Box::new(BellAudio), &mut rng)?;
                        run_recorded = false;
                    }
                    _ => {}
                }
            }
        }

        // Advance the simulation by measured wall time. The scene keeps
        // updating after a crash so the bird settles and the clouds drift.
        let delta_ms = last_frame.elapsed().as_secs_f64() * 1000.0;
        last_frame = Instant::now();
        scene.update(delta_ms, &mut rng);

        if scene.is_over() && !run_recorded {
            highscores.record(scene.score().whole(), Utc::now().timestamp());
            highscores.save()?;
            run_recorded = true;
        }
    }

    Ok(())
}
