/// Direction d'un lien entre deux cases voisines.
///
/// Les lignes sont numérotées de haut en bas : `North` correspond donc à la
/// ligne `y - 1` et `South` à la ligne `y + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Ordre dans lequel le solveur essaie les voisins : droite, haut, gauche, bas.
    pub const SEARCH_ORDER: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    /// Toutes les directions, dans l'ordre de stockage des liens d'une case.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Fait demi tour (par ex. North -> South)
    pub fn turn_back(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Indice du lien dans le tableau `neighbors` d'une case.
    pub fn index(self) -> usize {
        match self {
            Direction::North => 0,
            Direction::East => 1,
            Direction::South => 2,
            Direction::West => 3,
        }
    }

    /// Position voisine dans une grille `width` x `height`,
    /// ou `None` si on sort de la grille.
    pub fn step_from(self, x: usize, y: usize, width: usize, height: usize) -> Option<(usize, usize)> {
        let (nx, ny) = match self {
            Direction::North => (Some(x), y.checked_sub(1)),
            Direction::East => (x.checked_add(1), Some(y)),
            Direction::South => (Some(x), y.checked_add(1)),
            Direction::West => (x.checked_sub(1), Some(y)),
        };
        match (nx, ny) {
            (Some(nx), Some(ny)) if nx < width && ny < height => Some((nx, ny)),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::North => "Up",
            Direction::East => "Right",
            Direction::South => "Down",
            Direction::West => "Left",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_back_is_involution() {
        for dir in Direction::ALL {
            assert_eq!(dir.turn_back().turn_back(), dir);
            assert_ne!(dir.turn_back(), dir);
        }
    }

    #[test]
    fn test_search_order_right_up_left_down() {
        let names: Vec<&str> = Direction::SEARCH_ORDER.iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["Right", "Up", "Left", "Down"]);
    }

    #[test]
    fn test_step_from_stays_inside_grid() {
        assert_eq!(Direction::North.step_from(0, 0, 3, 3), None);
        assert_eq!(Direction::West.step_from(0, 2, 3, 3), None);
        assert_eq!(Direction::East.step_from(2, 1, 3, 3), None);
        assert_eq!(Direction::South.step_from(1, 2, 3, 3), None);
        assert_eq!(Direction::East.step_from(0, 0, 3, 3), Some((1, 0)));
        assert_eq!(Direction::South.step_from(0, 0, 3, 3), Some((0, 1)));
        assert_eq!(Direction::North.step_from(1, 1, 3, 3), Some((1, 0)));
    }
}
