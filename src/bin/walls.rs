/*!
 * # Décodage des murs
 *
 * Le labyrinthe est fourni sous forme d'une chaîne plate, deux caractères par
 * case, ligne par ligne. Pour la case (i, j) :
 * - le caractère `j*2W + 2i` indique le mur du bas (espace = passage) ;
 * - le caractère `j*2W + 2i + 1` indique le mur de droite (espace = passage).
 *
 * Les murs du bas de la dernière ligne et de droite de la dernière colonne ne
 * sont jamais lus.
 */

use crate::bin::error::LabyError;
use crate::bin::map::Grid;
use log::debug;

const OPEN: char = ' ';

/// Nombre minimal de caractères à fournir : jusqu'au dernier caractère lu.
pub fn required_len(width: usize, height: usize) -> usize {
    let mut min = 0;
    if height == 0 {
        return min;
    }
    if width >= 2 {
        // mur de droite de la case (W-2, H-1)
        min = min.max((height - 1) * 2 * width + 2 * (width - 2) + 2);
    }
    if height >= 2 {
        // mur du bas de la case (W-1, H-2)
        min = min.max((height - 2) * 2 * width + 2 * (width - 1) + 1);
    }
    min
}

/// Construit la grille reliée à partir de l'encodage des murs.
///
/// `width` et `height` doivent être non nuls. L'encodage doit compter entre
/// `required_len(width, height)` et `2 * width * height` caractères : il peut
/// s'arrêter après le dernier caractère lu, mais jamais avant. Par exemple un
/// labyrinthe 2x2 lit le caractère d'indice 5 (mur de droite de la case
/// (0, 1)) et accepte donc 6 à 8 caractères ; `"    "` est refusé.
/// Hors de cet intervalle : `LabyError::Encoding`.
pub fn parse_walls(encoding: &str, width: usize, height: usize) -> Result<Grid, LabyError> {
    if width == 0 || height == 0 {
        return Err(LabyError::EmptyGrid { width, height });
    }

    let chars: Vec<char> = encoding.chars().collect();
    let min = required_len(width, height);
    let max = 2 * width * height;
    if chars.len() < min || chars.len() > max {
        return Err(LabyError::Encoding {
            width,
            height,
            min,
            max,
            actual: chars.len(),
        });
    }

    let mut grid = Grid::new(width, height);
    let row_len = 2 * width;
    for j in 0..height {
        for i in 0..width {
            if j < height - 1 && chars[j * row_len + 2 * i] == OPEN {
                grid.link_down(i, j);
            }
            if i < width - 1 && chars[j * row_len + 2 * i + 1] == OPEN {
                grid.link_right(i, j);
            }
        }
    }

    debug!(
        "maze {}x{} decoded: {} links",
        width,
        height,
        grid.link_count()
    );
    Ok(grid)
}
