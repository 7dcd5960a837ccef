//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Formatter};

/// Format the playable area into a labelled grid.
/// `glyph` is called once per space with interior `(row, col)` coordinates, in row-major order.
pub fn format_grid<F>(f: &mut Formatter, glyph: F) -> fmt::Result
where
    F: Fn(usize, usize) -> char,
{
    write!(f, "   A B C D E F G H")?;

    for row in 0..EDGE_LENGTH {
        write!(f, "\n {} ", row + 1)?;
        for col in 0..EDGE_LENGTH {
            write!(f, "{} ", glyph(row, col))?;
        }
    }

    Ok(())
}
