use log::{debug, info, warn};
use serde_json::json;
use std::io::{self, Read, Write};

pub mod bin;

use crate::bin::{json_utils, network, session};

pub use crate::bin::cell::{Cell, CellIndex};
pub use crate::bin::description::MazeDescription;
pub use crate::bin::direction::Direction;
pub use crate::bin::error::LabyError;
pub use crate::bin::map::Grid;
pub use crate::bin::maze::{Maze, SolveStatus, StepOutcome};

pub const ADDRESS: &str = "localhost:8778";

// -----------------------------------------------------------------------------
// MazeStreamHandler
// -----------------------------------------------------------------------------

/// Pilote un labyrinthe à distance : un message reçu, une réponse envoyée.
///
/// Chaque connexion possède son propre labyrinthe.
pub struct MazeStreamHandler<S: Read + Write> {
    stream: S,
    pub maze: bin::maze::Maze,
}

impl<S: Read + Write> MazeStreamHandler<S> {
    pub fn new(stream: S, maze: bin::maze::Maze) -> Self {
        Self { stream, maze }
    }

    /// Envoie la réponse ; si elle dépasse la taille d'une trame, le client
    /// reçoit une `CommandError` à la place.
    fn answer(&mut self, response: &serde_json::Value) -> io::Result<()> {
        match network::send_message(&mut self.stream, &response.to_string()) {
            Err(e) if e.kind() == io::ErrorKind::InvalidInput => {
                warn!("reply not sent: {}", e);
                let fallback = json!({ "CommandError": format!("ReplyTooLarge: {}", e) });
                network::send_message(&mut self.stream, &fallback.to_string())
            }
            other => other,
        }
    }

    /// Boucle principale : s'arrête proprement quand le client ferme la connexion
    /// entre deux messages. Une trame coupée en cours de route est une erreur.
    pub fn handle(&mut self) -> io::Result<()> {
        loop {
            let Some(msg) = network::try_receive_message(&mut self.stream)? else {
                info!("client disconnected");
                return Ok(());
            };
            debug!("received message: {}", msg);

            let response = match json_utils::parse_json(&msg) {
                Ok(parsed_msg) => session::process_message(&mut self.maze, &parsed_msg),
                Err(e) => {
                    warn!("invalid message: {}", e);
                    json!({ "CommandError": format!("InvalidJson: {}", e) })
                }
            };
            self.answer(&response)?;
        }
    }

    pub fn into_inner(self) -> S {
        self.stream
    }
}
