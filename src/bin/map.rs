use crate::bin::cell::{Cell, CellIndex};
use crate::bin::direction::Direction;
use log::trace;

/// Grille du labyrinthe : seule propriétaire de toutes les cases.
///
/// Les cases sont rangées ligne par ligne dans un vecteur plat, les liens
/// entre voisins sont de simples indices dans ce vecteur.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Crée une grille `width` x `height` sans aucun lien (tous les murs fermés).
    pub fn new(width: usize, height: usize) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(Cell::new(x, y));
            }
        }
        Self { width, height, cells }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Indice de la case (x, y), ou `None` hors de la grille.
    pub fn index_of(&self, x: usize, y: usize) -> Option<CellIndex> {
        if x < self.width && y < self.height {
            Some(y * self.width + x)
        } else {
            None
        }
    }

    /// Récupère une cellule en lecture seule.
    pub fn get_cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.index_of(x, y).map(|i| &self.cells[i])
    }

    pub fn cell_at(&self, index: CellIndex) -> Option<&Cell> {
        self.cells.get(index)
    }

    pub(crate) fn cell_at_mut(&mut self, index: CellIndex) -> Option<&mut Cell> {
        self.cells.get_mut(index)
    }

    /// Relie la case (x, y) à sa voisine dans `direction`, dans les deux sens.
    ///
    /// Sans effet si la case a déjà un voisin dans cette direction ou si la
    /// voisine sort de la grille. Retourne `true` si un lien a été posé.
    pub fn link(&mut self, x: usize, y: usize, direction: Direction) -> bool {
        let Some(from) = self.index_of(x, y) else {
            return false;
        };
        let Some((nx, ny)) = direction.step_from(x, y, self.width, self.height) else {
            return false;
        };
        let to = ny * self.width + nx;

        if !self.cells[from].set_neighbor(direction, to) {
            return false;
        }
        // La voisine ne peut avoir dans la direction opposée que `from` lui-même.
        self.cells[to].set_neighbor(direction.turn_back(), from);
        trace!("link ({}, {}) {} -> ({}, {})", x, y, direction.name(), nx, ny);
        true
    }

    pub fn link_up(&mut self, x: usize, y: usize) -> bool {
        self.link(x, y, Direction::North)
    }

    pub fn link_right(&mut self, x: usize, y: usize) -> bool {
        self.link(x, y, Direction::East)
    }

    pub fn link_down(&mut self, x: usize, y: usize) -> bool {
        self.link(x, y, Direction::South)
    }

    pub fn link_left(&mut self, x: usize, y: usize) -> bool {
        self.link(x, y, Direction::West)
    }

    /// Vrai si les deux cases sont reliées (dans un sens ou dans l'autre).
    pub fn are_linked(&self, a: CellIndex, b: CellIndex) -> bool {
        match self.cells.get(a) {
            Some(cell) => Direction::ALL.iter().any(|&d| cell.neighbor(d) == Some(b)),
            None => false,
        }
    }

    /// Nombre total de liens (chaque lien compté une fois).
    pub fn link_count(&self) -> usize {
        self.cells.iter().map(Cell::link_count).sum::<usize>() / 2
    }
}
