// algotty: step-through classic-algorithm visualizer for the terminal

mod algorithms;
mod catalog;
mod input;
mod runner;
mod scene;
mod snapshot;
mod ui;

use std::io;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use catalog::{Category, LESSONS};
use ui::App;

fn print_catalogue() {
    let mut last_category: Option<Category> = None;
    for lesson in LESSONS {
        if last_category != Some(lesson.category) {
            println!();
            println!("{}", lesson.category.name());
            last_category = Some(lesson.category);
        }
        println!(
            "  {:<18} {:<34} {}",
            lesson.id, lesson.title, lesson.complexity
        );
    }
    println!();
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <lesson-id> [input]", program_name);
    eprintln!();
    eprintln!("Examples:");
    eprintln!(
        "  {} binary-search                       # Run with the built-in input",
        program_name
    );
    eprintln!(
        "  {} binary-search '-1,0,3,5,9,12 | 9'   # Supply your own input",
        program_name
    );
    eprintln!(
        "  {} --list                              # List all lessons",
        program_name
    );
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("algotty");

    if args.len() < 2 {
        eprintln!("Error: No lesson id provided");
        eprintln!();
        print_usage(program_name);
        std::process::exit(1);
    }

    if args[1] == "--list" || args[1] == "-l" {
        print_catalogue();
        return Ok(());
    }

    let lesson = match catalog::find(&args[1]) {
        Ok(lesson) => lesson,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            eprintln!("Run `{} --list` to see every lesson id.", program_name);
            std::process::exit(1);
        }
    };

    let raw_input = args
        .get(2)
        .map(|s| s.as_str())
        .unwrap_or(lesson.default_input);

    eprintln!("Building \"{}\" with input: {}", lesson.title, raw_input);
    let runner = match lesson.build_runner(raw_input) {
        Ok(runner) => runner,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(runner, lesson);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
