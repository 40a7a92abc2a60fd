use super::element::{self, ElementError};
use nalgebra::Point3;

/// Represents a single atom of an extracted structure.
///
/// Only the information an XYZ frame needs is kept: the element identity and
/// the Cartesian position. Atoms are stored in the order they appear in the
/// source file, and that order is significant.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    /// The atomic number (1-based index into the element table).
    pub atomic_number: u32,
    /// The 3D coordinates of the atom in Angstroms.
    pub position: Point3<f64>,
}

impl Atom {
    /// Creates a new atom from its atomic number and Cartesian coordinates.
    pub fn new(atomic_number: u32, x: f64, y: f64, z: f64) -> Self {
        Self {
            atomic_number,
            position: Point3::new(x, y, z),
        }
    }

    /// Returns the chemical symbol of this atom.
    ///
    /// # Errors
    ///
    /// Returns an [`ElementError`] if the atomic number is not in the element table.
    pub fn symbol(&self) -> Result<&'static str, ElementError> {
        element::symbol(self.atomic_number)
    }
}
