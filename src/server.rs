use clap::Parser;
use laby_solver::{LabyError, MazeDescription, MazeStreamHandler, ADDRESS};
use log::{error, info};
use std::net::TcpListener;
use std::path::PathBuf;
use std::process::ExitCode;

/// Serveur de résolution : chaque client pilote son propre labyrinthe.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Adresse d'écoute
    #[arg(long, default_value = ADDRESS)]
    address: String,

    /// Fichier JSON décrivant le labyrinthe (labyrinthe 6x5 par défaut)
    #[arg(long)]
    maze: Option<PathBuf>,
}

fn serve(args: &Args) -> Result<(), LabyError> {
    let description = MazeDescription::load(args.maze.as_deref())?;
    // valide la description avant d'accepter des clients
    description.build()?;

    let listener = TcpListener::bind(&args.address)?;
    info!("Server started on {}", args.address);

    // un client à la fois : les pas ne sont jamais entrelacés
    for stream in listener.incoming() {
        let stream = match stream {
            Ok(s) => s,
            Err(e) => {
                error!("connection failed: {}", e);
                continue;
            }
        };
        match stream.peer_addr() {
            Ok(peer) => info!("New connection: {}", peer),
            Err(_) => info!("New connection"),
        }

        let mut handler = MazeStreamHandler::new(stream, description.build()?);
        if let Err(e) = handler.handle() {
            error!("client error: {}", e);
        }
    }
    Ok(())
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    match serve(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Erreur: {}", e);
            ExitCode::FAILURE
        }
    }
}
