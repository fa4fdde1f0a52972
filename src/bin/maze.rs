use crate::bin::cell::{Cell, CellIndex};
use crate::bin::direction::Direction;
use crate::bin::error::LabyError;
use crate::bin::map::Grid;
use crate::bin::walls::parse_walls;
use log::{debug, info, warn};
use serde_json::{json, Value};

/// Résultat d'un pas de résolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Le chemin s'est allongé d'une case.
    Advanced {
        from: CellIndex,
        to: CellIndex,
        direction: Direction,
    },
    /// La case courante était une impasse : elle a été retirée du chemin.
    Backtracked { from: CellIndex },
    /// La case courante est l'arrivée, rien n'a changé.
    Solved,
    /// Le chemin est vide, il n'existe aucune solution.
    NoSolution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveStatus {
    Searching,
    Solved,
    NoSolution,
}

impl SolveStatus {
    pub fn name(self) -> &'static str {
        match self {
            SolveStatus::Searching => "Searching",
            SolveStatus::Solved => "Solved",
            SolveStatus::NoSolution => "NoSolution",
        }
    }

    pub fn is_terminal(self) -> bool {
        self != SolveStatus::Searching
    }
}

/// Labyrinthe et état de sa résolution pas à pas.
///
/// La case courante est toujours la dernière du chemin ; elle n'est jamais
/// stockée à part.
#[derive(Debug, Clone)]
pub struct Maze {
    grid: Grid,
    start: Option<CellIndex>,
    end: Option<CellIndex>,
    path: Vec<CellIndex>,
    no_solution_reported: bool,
}

impl Maze {
    /// Construit le labyrinthe à partir de l'encodage des murs.
    pub fn new(encoding: &str, width: usize, height: usize) -> Result<Self, LabyError> {
        Ok(Self::from_grid(parse_walls(encoding, width, height)?))
    }

    /// Utilise une grille déjà reliée.
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            start: None,
            end: None,
            path: Vec::new(),
            no_solution_reported: false,
        }
    }

    fn index_checked(&self, x: usize, y: usize) -> Result<CellIndex, LabyError> {
        self.grid.index_of(x, y).ok_or(LabyError::OutOfBounds {
            x,
            y,
            width: self.grid.width(),
            height: self.grid.height(),
        })
    }

    /// Définit la case de départ, la marque visitée et initialise le chemin.
    ///
    /// Ne peut être appelée qu'une fois.
    pub fn set_start(&mut self, x: usize, y: usize) -> Result<(), LabyError> {
        if self.start.is_some() {
            return Err(LabyError::StartAlreadySet);
        }
        let index = self.index_checked(x, y)?;
        if let Some(cell) = self.grid.cell_at_mut(index) {
            cell.mark_visited();
        }
        self.start = Some(index);
        self.path = vec![index];
        debug!("start set to ({}, {})", x, y);
        Ok(())
    }

    /// Définit la case d'arrivée.
    pub fn set_end(&mut self, x: usize, y: usize) -> Result<(), LabyError> {
        let index = self.index_checked(x, y)?;
        self.end = Some(index);
        debug!("end set to ({}, {})", x, y);
        Ok(())
    }

    /// Premier voisin relié et non visité, dans l'ordre droite, haut, gauche, bas.
    fn next_candidate(&self, current: CellIndex) -> Option<(Direction, CellIndex)> {
        let cell = self.grid.cell_at(current)?;
        Direction::SEARCH_ORDER.iter().find_map(|&direction| {
            let next = cell.neighbor(direction)?;
            match self.grid.cell_at(next) {
                Some(n) if !n.is_visited() => Some((direction, next)),
                _ => None,
            }
        })
    }

    /// Avance ou recule d'exactement une case.
    pub fn advance_step(&mut self) -> Result<StepOutcome, LabyError> {
        if self.start.is_none() {
            return Err(LabyError::StartNotSet);
        }
        let end = self.end.ok_or(LabyError::EndNotSet)?;

        let Some(&current) = self.path.last() else {
            self.report_no_solution();
            return Ok(StepOutcome::NoSolution);
        };
        if current == end {
            return Ok(StepOutcome::Solved);
        }

        match self.next_candidate(current) {
            Some((direction, next)) => {
                if let Some(cell) = self.grid.cell_at_mut(next) {
                    cell.mark_visited();
                }
                self.path.push(next);
                debug!(
                    "advance {} to {:?}",
                    direction.name(),
                    self.position_of(next)
                );
                if next == end {
                    info!("maze solved, path length {}", self.path.len());
                }
                Ok(StepOutcome::Advanced {
                    from: current,
                    to: next,
                    direction,
                })
            }
            None => {
                if let Some(cell) = self.grid.cell_at_mut(current) {
                    cell.mark_dead_end();
                }
                self.path.pop();
                debug!("dead end at {:?}, backtrack", self.position_of(current));
                if self.path.is_empty() {
                    self.report_no_solution();
                }
                Ok(StepOutcome::Backtracked { from: current })
            }
        }
    }

    fn report_no_solution(&mut self) {
        if !self.no_solution_reported {
            warn!("no path exists from start to end");
            self.no_solution_reported = true;
        }
    }

    /// Enchaîne les pas jusqu'à un état terminal et retourne le nombre de pas effectués.
    pub fn solve(&mut self) -> Result<usize, LabyError> {
        // chaque case est visitée au plus une fois et abandonnée au plus une fois
        let limit = 2 * self.grid.len() + 1;
        let mut steps = 0;
        while steps < limit {
            match self.advance_step()? {
                StepOutcome::Solved | StepOutcome::NoSolution => break,
                _ => steps += 1,
            }
        }
        Ok(steps)
    }

    pub fn status(&self) -> SolveStatus {
        if self.start.is_none() {
            return SolveStatus::Searching;
        }
        match self.path.last() {
            None => SolveStatus::NoSolution,
            Some(&current) if Some(current) == self.end => SolveStatus::Solved,
            Some(_) => SolveStatus::Searching,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn cell(&self, x: usize, y: usize) -> Option<&Cell> {
        self.grid.get_cell(x, y)
    }

    /// Chemin courant, du départ à la case courante.
    pub fn path(&self) -> &[CellIndex] {
        &self.path
    }

    pub fn path_positions(&self) -> Vec<(usize, usize)> {
        self.path
            .iter()
            .filter_map(|&i| self.position_of(i))
            .collect()
    }

    pub fn position_of(&self, index: CellIndex) -> Option<(usize, usize)> {
        self.grid.cell_at(index).map(Cell::position)
    }

    /// Case courante : la dernière du chemin.
    pub fn current(&self) -> Option<&Cell> {
        self.path.last().and_then(|&i| self.grid.cell_at(i))
    }

    pub fn start(&self) -> Option<&Cell> {
        self.start.and_then(|i| self.grid.cell_at(i))
    }

    pub fn end(&self) -> Option<&Cell> {
        self.end.and_then(|i| self.grid.cell_at(i))
    }

    fn position_json(&self, index: Option<CellIndex>) -> Value {
        match index.and_then(|i| self.position_of(i)) {
            Some((x, y)) => json!([x, y]),
            None => Value::Null,
        }
    }

    /// Décrit un résultat de pas avec des positions plutôt que des indices.
    pub fn outcome_json(&self, outcome: &StepOutcome) -> Value {
        match *outcome {
            StepOutcome::Advanced {
                from,
                to,
                direction,
            } => json!({
                "Advanced": {
                    "from": self.position_json(Some(from)),
                    "to": self.position_json(Some(to)),
                    "direction": direction.name(),
                }
            }),
            StepOutcome::Backtracked { from } => json!({
                "Backtracked": { "from": self.position_json(Some(from)) }
            }),
            StepOutcome::Solved => json!("Solved"),
            StepOutcome::NoSolution => json!("NoSolution"),
        }
    }

    /// Photographie complète de l'état, pour un afficheur distant.
    pub fn snapshot(&self) -> Value {
        let cells: Vec<Value> = self
            .grid
            .cells()
            .iter()
            .map(|cell| {
                let links: Vec<&str> = Direction::ALL
                    .iter()
                    .filter(|&&d| cell.neighbor(d).is_some())
                    .map(|d| d.name())
                    .collect();
                json!({
                    "x": cell.x(),
                    "y": cell.y(),
                    "visited": cell.is_visited(),
                    "dead_end": cell.is_dead_end(),
                    "links": links,
                })
            })
            .collect();

        json!({
            "width": self.width(),
            "height": self.height(),
            "status": self.status().name(),
            "start": self.position_json(self.start),
            "end": self.position_json(self.end),
            "current": self.position_json(self.path.last().copied()),
            "path": self.path_positions(),
            "cells": cells,
        })
    }
}
