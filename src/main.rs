use clap::Parser;
use laby_solver::bin::ascii_utils::{render_ascii, render_status_line};
use laby_solver::{LabyError, Maze, MazeDescription};
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

/// Résolution pas à pas d'un labyrinthe (parcours en profondeur avec retour arrière).
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Fichier JSON décrivant le labyrinthe (labyrinthe 6x5 par défaut)
    #[arg(long)]
    maze: Option<PathBuf>,

    /// Résout sans attendre l'utilisateur
    #[arg(long)]
    auto: bool,

    /// Affiche l'état final en JSON
    #[arg(long)]
    json: bool,
}

fn draw(maze: &Maze) {
    println!("{}", render_ascii(maze));
    println!("{}", render_status_line(maze));
}

/// Un pas par appui sur Entrée, `q` pour quitter.
fn interactive(maze: &mut Maze) -> Result<(), LabyError> {
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    draw(maze);
    while !maze.status().is_terminal() {
        print!("Appuyez sur Entrée pour faire un pas (q pour quitter)... ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            break;
        };
        if line?.trim() == "q" {
            break;
        }
        let outcome = maze.advance_step()?;
        println!("{}", maze.outcome_json(&outcome));
        draw(maze);
    }
    Ok(())
}

fn run(args: &Args) -> Result<(), LabyError> {
    let description = MazeDescription::load(args.maze.as_deref())?;
    let mut maze = description.build()?;
    info!(
        "maze {}x{} loaded, start {:?}, end {:?}",
        description.width, description.height, description.start, description.end
    );

    if args.auto {
        let steps = maze.solve()?;
        draw(&maze);
        println!("{} pas", steps);
    } else {
        interactive(&mut maze)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&maze.snapshot())?);
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Erreur: {}", e);
            ExitCode::FAILURE
        }
    }
}
