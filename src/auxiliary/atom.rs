//! Atoms and element data.

use std::collections::HashMap;
use std::fmt;

use nalgebra::Point3;
use periodic_table;
use serde::{Deserialize, Serialize};

#[cfg(test)]
#[path = "atom_tests.rs"]
mod atom_tests;

/// A struct storing a look-up of element symbols to give atomic numbers and atomic
/// masses.
pub struct ElementMap<'a> {
    /// A [`HashMap`] from a symbol string to a tuple of atomic number and atomic mass.
    map: HashMap<&'a str, (u32, f64)>,
}

impl Default for ElementMap<'static> {
    fn default() -> Self {
        Self::new()
    }
}

impl ElementMap<'static> {
    /// Creates a new [`ElementMap`] for all elements in the periodic table.
    #[must_use]
    pub fn new() -> ElementMap<'static> {
        let mut map = HashMap::new();
        let elements = periodic_table::periodic_table();
        for element in elements {
            let mass = parse_atomic_mass(element.atomic_mass);
            map.insert(element.symbol, (element.atomic_number, mass));
        }
        ElementMap { map }
    }
}

impl<'a> ElementMap<'a> {
    /// Looks up an element symbol, returning its atomic number and atomic mass.
    pub fn get(&self, symbol: &str) -> Option<&(u32, f64)> {
        self.map.get(symbol)
    }
}

/// An auxiliary function that parses the atomic mass string in the format of
/// [`periodic_table`] to a single float value.
///
/// # Arguments
///
/// * `mass_str` - A string of mass value that is either `x.y(z)` where the uncertain
///     digit `z` is enclosed in parentheses, or `[x]` where `x` is the mass number in
///     place of precise experimental values.
///
/// # Returns
///
/// The numeric mass value.
fn parse_atomic_mass(mass_str: &str) -> f64 {
    let mass = mass_str.replace(&['(', ')', '[', ']'][..], "");
    mass.parse::<f64>()
        .unwrap_or_else(|_| panic!("Unable to parse atomic mass string {mass}."))
}

/// A struct representing an atom in a molecular geometry.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Atom {
    /// The atomic number of the atom.
    pub atomic_number: u32,

    /// The atomic symbol of the atom.
    pub atomic_symbol: String,

    /// The weighted-average atomic mass for all naturally occurring isotopes.
    pub atomic_mass: f64,

    /// The position of the atom in Ångström.
    pub coordinates: Point3<f64>,
}

impl Atom {
    /// Parses one line of a geometry file to construct an [`Atom`].
    ///
    /// # Arguments
    ///
    /// * `line` - A line containing an atomic symbol and three Cartesian coordinates
    ///     in Ångström.
    /// * `emap` - A hash map between atomic symbols and atomic numbers and masses.
    ///
    /// # Returns
    ///
    /// The parsed [`Atom`] struct if the line has the correct format, otherwise
    /// [`None`].
    #[must_use]
    pub fn from_geometry_line(line: &str, emap: &ElementMap) -> Option<Atom> {
        let split: Vec<&str> = line.split_whitespace().collect();
        if split.len() != 4 {
            return None;
        };
        let atomic_symbol = *split.first()?;
        let &(atomic_number, atomic_mass) = emap.get(atomic_symbol)?;
        let coordinates = Point3::new(
            split.get(1)?.parse::<f64>().ok()?,
            split.get(2)?.parse::<f64>().ok()?,
            split.get(3)?.parse::<f64>().ok()?,
        );
        Some(Atom {
            atomic_number,
            atomic_symbol: atomic_symbol.to_string(),
            atomic_mass,
            coordinates,
        })
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:>3} {:+14.8} {:+14.8} {:+14.8}",
            self.atomic_symbol, self.coordinates[0], self.coordinates[1], self.coordinates[2],
        )
    }
}
