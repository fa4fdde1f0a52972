use thiserror::Error;

/// Erreurs du labyrinthe et de son chargement.
///
/// L'absence de solution n'en fait pas partie : c'est un état terminal
/// normal, rendu par `Maze::advance_step`.
#[derive(Debug, Error)]
pub enum LabyError {
    #[error("maze encoding for {width}x{height} must hold {min}..={max} characters, got {actual}")]
    Encoding {
        width: usize,
        height: usize,
        min: usize,
        max: usize,
        actual: usize,
    },
    #[error("maze dimensions must be non-zero, got {width}x{height}")]
    EmptyGrid { width: usize, height: usize },
    #[error("cell ({x}, {y}) is outside the {width}x{height} maze")]
    OutOfBounds {
        x: usize,
        y: usize,
        width: usize,
        height: usize,
    },
    #[error("start cell is already set")]
    StartAlreadySet,
    #[error("start cell is not set")]
    StartNotSet,
    #[error("end cell is not set")]
    EndNotSet,
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
