use crate::bin::error::LabyError;
use crate::bin::maze::Maze;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Labyrinthe 6x5 utilisé quand aucun fichier n'est fourni.
pub const DEFAULT_ENCODING: &str = concat!(
    "_ _   _| | |",
    "  _| |     |",
    "  _ _ _| | |",
    " |_     _|_|",
    "_ _ _|_ _ _|",
);

/// Tout ce qu'il faut pour construire et lancer un labyrinthe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MazeDescription {
    pub encoding: String,
    pub width: usize,
    pub height: usize,
    pub start: (usize, usize),
    pub end: (usize, usize),
}

impl Default for MazeDescription {
    fn default() -> Self {
        Self {
            encoding: DEFAULT_ENCODING.to_string(),
            width: 6,
            height: 5,
            start: (0, 0),
            end: (5, 4),
        }
    }
}

impl MazeDescription {
    pub fn from_json_str(json: &str) -> Result<Self, LabyError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LabyError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    /// Charge le fichier s'il est donné, sinon le labyrinthe par défaut.
    pub fn load(path: Option<&Path>) -> Result<Self, LabyError> {
        match path {
            Some(p) => Self::from_file(p),
            None => Ok(Self::default()),
        }
    }

    /// Construit le labyrinthe et place le départ et l'arrivée.
    pub fn build(&self) -> Result<Maze, LabyError> {
        let mut maze = Maze::new(&self.encoding, self.width, self.height)?;
        maze.set_start(self.start.0, self.start.1)?;
        maze.set_end(self.end.0, self.end.1)?;
        Ok(maze)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bin::maze::SolveStatus;

    #[test]
    fn test_default_description_builds() {
        let maze = MazeDescription::default().build().unwrap();
        assert_eq!((maze.width(), maze.height()), (6, 5));
        assert_eq!(maze.start().map(|c| c.position()), Some((0, 0)));
        assert_eq!(maze.end().map(|c| c.position()), Some((5, 4)));
        assert_eq!(maze.status(), SolveStatus::Searching);
    }

    #[test]
    fn test_parse_json_description() {
        let json = r#"{"encoding": "_|", "width": 2, "height": 1, "start": [0, 0], "end": [1, 0]}"#;
        let desc = MazeDescription::from_json_str(json).unwrap();
        assert_eq!(desc.start, (0, 0));
        assert_eq!(desc.end, (1, 0));
        let mut maze = desc.build().unwrap();
        maze.solve().unwrap();
        assert_eq!(maze.status(), SolveStatus::NoSolution);
    }

    #[test]
    fn test_invalid_json_and_bad_end() {
        assert!(matches!(
            MazeDescription::from_json_str("{\"width\": 2"),
            Err(LabyError::Json(_))
        ));
        let desc = MazeDescription {
            end: (9, 9),
            ..MazeDescription::default()
        };
        assert!(matches!(desc.build(), Err(LabyError::OutOfBounds { .. })));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let res = MazeDescription::from_file("/nonexistent/laby.json");
        assert!(matches!(res, Err(LabyError::Io(_))));
        assert_eq!(MazeDescription::load(None).unwrap(), MazeDescription::default());
    }
}
