/*!
 * # Affichage ASCII du labyrinthe
 *
 * Chaque case occupe 3 colonnes et 2 lignes :
 *
 * ```text
 * +--+--+
 * |S    |
 * +  +--+
 * |   E |
 * +--+--+
 * ```
 *
 * Un lien absent est dessiné comme un mur, le bord extérieur est toujours fermé.
 */

use crate::bin::cell::{Cell, CellIndex};
use crate::bin::maze::Maze;

/// Caractère affiché au centre d'une case.
fn cell_marker(maze: &Maze, index: CellIndex, cell: &Cell, on_path: &[bool]) -> char {
    let is = |other: Option<&Cell>| other.map(Cell::position) == Some(cell.position());

    if is(maze.current()) {
        '@'
    } else if is(maze.start()) {
        'S'
    } else if is(maze.end()) {
        'E'
    } else if on_path[index] {
        'o'
    } else if cell.is_dead_end() {
        'x'
    } else if cell.is_visited() {
        '.'
    } else {
        ' '
    }
}

/// Génère une représentation ASCII du labyrinthe et de son chemin courant.
pub fn render_ascii(maze: &Maze) -> String {
    let grid = maze.grid();
    let (width, height) = (grid.width(), grid.height());

    let mut on_path = vec![false; grid.len()];
    for &i in maze.path() {
        on_path[i] = true;
    }

    let mut lines = Vec::with_capacity(2 * height + 1);
    lines.push(format!("+{}", "--+".repeat(width)));

    for y in 0..height {
        let mut middle = String::from("|");
        let mut bottom = String::from("+");
        for x in 0..width {
            let Some(index) = grid.index_of(x, y) else {
                continue;
            };
            let cell = &grid.cells()[index];

            middle.push(cell_marker(maze, index, cell, &on_path));
            middle.push(' ');
            middle.push(if cell.right().is_some() { ' ' } else { '|' });

            bottom.push_str(if cell.down().is_some() { "  " } else { "--" });
            bottom.push('+');
        }
        lines.push(middle);
        lines.push(bottom);
    }

    lines.join("\n")
}

/// Ligne de résumé affichée sous le labyrinthe.
pub fn render_status_line(maze: &Maze) -> String {
    let current = match maze.current() {
        Some(cell) => format!("({}, {})", cell.x(), cell.y()),
        None => "-".to_string(),
    };
    format!(
        "{} - longueur du chemin {} - case courante {}",
        maze.status().name(),
        maze.path().len(),
        current
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_maze() -> Maze {
        let mut maze = Maze::new("  _|_ ", 2, 2).unwrap();
        maze.set_start(0, 0).unwrap();
        maze.set_end(1, 1).unwrap();
        maze
    }

    #[test]
    fn test_render_walls_and_markers() {
        let maze = small_maze();
        let expected = [
            "+--+--+",
            "|@    |",
            "+  +--+",
            "|   E |",
            "+--+--+",
        ]
        .join("\n");
        assert_eq!(render_ascii(&maze), expected);
    }

    #[test]
    fn test_render_path_and_dead_ends() {
        let mut maze = small_maze();
        maze.advance_step().unwrap(); // vers (1,0)
        maze.advance_step().unwrap(); // impasse, retour
        maze.advance_step().unwrap(); // vers (0,1)
        let expected = [
            "+--+--+",
            "|S  x |",
            "+  +--+",
            "|@  E |",
            "+--+--+",
        ]
        .join("\n");
        assert_eq!(render_ascii(&maze), expected);

        maze.solve().unwrap();
        let rendered = render_ascii(&maze);
        assert!(rendered.contains("|o  @ |"));
    }

    #[test]
    fn test_status_line() {
        let mut maze = Maze::new("_|", 2, 1).unwrap();
        maze.set_start(0, 0).unwrap();
        maze.set_end(1, 0).unwrap();
        assert_eq!(
            render_status_line(&maze),
            "Searching - longueur du chemin 1 - case courante (0, 0)"
        );
        maze.advance_step().unwrap();
        assert_eq!(
            render_status_line(&maze),
            "NoSolution - longueur du chemin 0 - case courante -"
        );
    }
}
