use crate::bin::direction::Direction;

/// Indice d'une case dans la grille (ligne par ligne).
pub type CellIndex = usize;

/// Représente une case du labyrinthe.
///
/// Une case connaît sa position, ses voisins (par indice dans la grille qui la
/// possède) et deux drapeaux posés pendant la résolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cell {
    x: usize,
    y: usize,
    visited: bool,
    dead_end: bool,
    /// Voisins dans l'ordre haut, droite, bas, gauche.
    neighbors: [Option<CellIndex>; 4],
}

impl Cell {
    /// Crée une case à la position (x, y), sans voisin ni drapeau.
    ///
    /// La position n'est plus modifiable ensuite.
    pub fn new(x: usize, y: usize) -> Self {
        Self {
            x,
            y,
            visited: false,
            dead_end: false,
            neighbors: [None; 4],
        }
    }

    pub fn x(&self) -> usize {
        self.x
    }

    pub fn y(&self) -> usize {
        self.y
    }

    pub fn position(&self) -> (usize, usize) {
        (self.x, self.y)
    }

    /// Marque la case comme visitée.
    pub fn mark_visited(&mut self) {
        self.visited = true;
    }

    /// Marque la case comme impasse.
    pub fn mark_dead_end(&mut self) {
        self.dead_end = true;
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn is_dead_end(&self) -> bool {
        self.dead_end
    }

    /// Voisin dans la direction donnée, s'il existe.
    pub fn neighbor(&self, direction: Direction) -> Option<CellIndex> {
        self.neighbors[direction.index()]
    }

    pub fn up(&self) -> Option<CellIndex> {
        self.neighbor(Direction::North)
    }

    pub fn right(&self) -> Option<CellIndex> {
        self.neighbor(Direction::East)
    }

    pub fn down(&self) -> Option<CellIndex> {
        self.neighbor(Direction::South)
    }

    pub fn left(&self) -> Option<CellIndex> {
        self.neighbor(Direction::West)
    }

    /// Nombre de liens posés.
    pub fn link_count(&self) -> usize {
        self.neighbors.iter().filter(|n| n.is_some()).count()
    }

    /// Pose le lien dans une direction si elle est encore libre.
    ///
    /// Retourne `false` (sans rien changer) si un voisin était déjà posé.
    pub(crate) fn set_neighbor(&mut self, direction: Direction, index: CellIndex) -> bool {
        let slot = &mut self.neighbors[direction.index()];
        if slot.is_some() {
            return false;
        }
        *slot = Some(index);
        true
    }
}
