use super::Val;

/// Handle to one memory cell. The generation names the scope the cell
/// was addressed in, so a handle outlives a scope pop without aliasing
/// whatever scope takes its place.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub generation: u64,
    pub index: i64,
}

/// Addressable storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ref {
    Counter,
    Cell(Cell),
}

/// Result of evaluating an expression.
///
/// Only `Mutable` can be written. Elements of an `Array` are always
/// `Value` or `Mutable`, never another `Array`.
#[derive(Debug, Clone, PartialEq)]
pub enum Operand {
    Value(Val),
    Mutable(Ref),
    Array(Vec<Operand>),
}

impl Operand {
    pub fn is_array(&self) -> bool {
        matches!(self, Operand::Array(_))
    }

    pub fn from_vals(vals: Vec<Val>) -> Operand {
        Operand::Array(vals.into_iter().map(Operand::Value).collect())
    }

    pub fn from_cells(cells: Vec<Cell>) -> Operand {
        Operand::Array(
            cells
                .into_iter()
                .map(|cell| Operand::Mutable(Ref::Cell(cell)))
                .collect(),
        )
    }
}

impl From<Val> for Operand {
    fn from(val: Val) -> Self {
        Operand::Value(val)
    }
}
