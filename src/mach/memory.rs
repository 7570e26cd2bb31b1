use super::{Cell, Stack, Val};
use crate::error;
use crate::lang::Error;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
struct Scope {
    generation: u64,
    cells: Vec<Val>,
}

/// ## Memory stack
///
/// All addressing targets the top scope. Every scope has the same
/// length and the bottom scope is never removed.

#[derive(Debug)]
pub struct Memory {
    size: usize,
    top: Scope,
    below: Stack<Scope>,
    generations: u64,
}

impl Memory {
    pub fn new(size: usize, max_depth: usize) -> Memory {
        Memory {
            size,
            top: Scope {
                generation: 0,
                cells: vec![Val::default(); size],
            },
            below: Stack::new("memory scope overflow", max_depth),
            generations: 0,
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of scopes, always at least one.
    pub fn depth(&self) -> usize {
        self.below.len() + 1
    }

    pub fn push(&mut self) -> Result<()> {
        self.below.reserve()?;
        self.generations += 1;
        let scope = Scope {
            generation: self.generations,
            cells: vec![Val::default(); self.size],
        };
        let previous = std::mem::replace(&mut self.top, scope);
        self.below.push(previous)?;
        debug!(depth = self.depth(), "memory scope pushed");
        Ok(())
    }

    pub fn pop(&mut self) {
        if let Some(scope) = self.below.pop() {
            self.top = scope;
            debug!(depth = self.depth(), "memory scope popped");
        }
    }

    /// Adds the length once to a negative index.
    pub fn wrap(&self, index: i64) -> i64 {
        if index < 0 {
            index + self.size as i64
        } else {
            index
        }
    }

    fn check(&self, index: i64) -> Result<i64> {
        if index < 0 || index >= self.size as i64 {
            return Err(error!(Runtime; "memory index {} out of bounds", index));
        }
        Ok(index)
    }

    fn cell_at(&self, index: i64) -> Cell {
        Cell {
            generation: self.top.generation,
            index,
        }
    }

    /// Errors name the index as written, before wraparound.
    pub fn address(&self, index: Val) -> Result<Cell> {
        let written = index.to_index();
        match self.check(self.wrap(written)) {
            Ok(index) => Ok(self.cell_at(index)),
            Err(_) => Err(error!(Runtime; "memory index {} out of bounds", written)),
        }
    }

    /// Half-open `start..end` walked by `step`. A negative step over
    /// ascending bounds walks `end-1` down to `start`.
    pub fn fixed_range(
        &self,
        start: Option<Val>,
        end: Option<Val>,
        step: Option<Val>,
    ) -> Result<Vec<Cell>> {
        let mut start = self.wrap(start.map_or(0, |v| v.to_index()));
        let mut end = self.wrap(end.map_or(self.size as i64, |v| v.to_index()));
        let step = step.map_or(1, |v| v.to_index());
        if step == 0 {
            return Err(error!(Runtime; "range step cannot be zero"));
        }
        if step < 0 && start < end {
            let swapped = start;
            start = end - 1;
            end = swapped - 1;
        }
        let mut cells = vec![];
        let mut index = start;
        while (index - end).signum() == -step.signum() {
            cells.push(self.cell_at(self.check(index)?));
            index += step;
        }
        Ok(cells)
    }

    /// Exactly `count` cells from `start` by `step`. Indices are only
    /// checked when the cells are read or written, but the count can
    /// never exceed the scope size.
    pub fn relative_range(
        &self,
        start: Option<Val>,
        count: Val,
        step: Option<Val>,
    ) -> Result<Vec<Cell>> {
        let start = self.wrap(start.map_or(0, |v| v.to_index()));
        let step = step.map_or(1, |v| v.to_index());
        let count = count.to_index().max(0);
        if count > self.size as i64 {
            return Err(error!(Runtime;
                "relative range count {} exceeds scope size {}",
                count,
                self.size
            ));
        }
        Ok((0..count)
            .map(|n| self.cell_at(start.wrapping_add(n.wrapping_mul(step))))
            .collect())
    }

    fn resolve(&self, cell: &Cell) -> Result<usize> {
        if cell.generation != self.top.generation {
            return Err(error!(Runtime; "memory cell belongs to a popped scope"));
        }
        Ok(self.check(cell.index)? as usize)
    }

    pub fn get(&self, cell: &Cell) -> Result<Val> {
        let index = self.resolve(cell)?;
        Ok(self.top.cells[index])
    }

    pub fn set(&mut self, cell: &Cell, val: Val) -> Result<()> {
        let index = self.resolve(cell)?;
        self.top.cells[index] = val;
        Ok(())
    }

    /// Cell values of the top scope.
    pub fn cells(&self) -> &[Val] {
        &self.top.cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn indices(cells: Vec<Cell>) -> Vec<i64> {
        cells.iter().map(|c| c.index).collect()
    }

    #[test]
    fn test_negative_wraparound() {
        let m = Memory::new(10, 8);
        assert_eq!(m.address(Val::Integer(-1)).unwrap().index, 9);
        assert_eq!(m.address(Val::Integer(-10)).unwrap().index, 0);
        assert!(m.address(Val::Integer(-11)).is_err());
        assert!(m.address(Val::Integer(10)).is_err());
        assert_eq!(m.address(Val::Float(3.9)).unwrap().index, 3);
    }

    #[test]
    fn test_fixed_range() {
        let m = Memory::new(10, 8);
        let range = |s: i32, e: i32, st: i32| {
            indices(
                m.fixed_range(
                    Some(Val::Integer(s)),
                    Some(Val::Integer(e)),
                    Some(Val::Integer(st)),
                )
                .unwrap(),
            )
        };
        assert_eq!(range(5, 2, -1), vec![5, 4, 3]);
        assert_eq!(range(2, 5, -1), vec![4, 3, 2]);
        assert_eq!(range(0, 3, 1), vec![0, 1, 2]);
        assert_eq!(range(0, 10, 4), vec![0, 4, 8]);
        assert_eq!(range(5, 2, 1), Vec::<i64>::new());
        assert_eq!(range(-3, -1, 1), vec![7, 8]);
    }

    #[test]
    fn test_fixed_range_defaults() {
        let m = Memory::new(4, 8);
        assert_eq!(indices(m.fixed_range(None, None, None).unwrap()), vec![0, 1, 2, 3]);
        assert_eq!(
            indices(m.fixed_range(None, None, Some(Val::Integer(-1))).unwrap()),
            vec![3, 2, 1, 0]
        );
        assert!(m.fixed_range(None, None, Some(Val::Integer(0))).is_err());
        assert!(m.fixed_range(None, Some(Val::Integer(5)), None).is_err());
    }

    #[test]
    fn test_relative_range_ignores_bounds() {
        let m = Memory::new(3, 8);
        let cells = m
            .relative_range(Some(Val::Integer(0)), Val::Integer(3), Some(Val::Integer(2)))
            .unwrap();
        assert_eq!(indices(cells.clone()), vec![0, 2, 4]);
        assert!(m.get(&cells[1]).is_ok());
        assert!(m.get(&cells[2]).is_err());
    }

    #[test]
    fn test_relative_range_count_is_limited() {
        let m = Memory::new(3, 8);
        assert_eq!(
            m.relative_range(None, Val::Integer(4), Some(Val::Integer(0)))
                .unwrap_err()
                .text(),
            "relative range count 4 exceeds scope size 3"
        );
        assert!(m.relative_range(None, Val::Float(f32::INFINITY), None).is_err());
        assert_eq!(m.relative_range(None, Val::Integer(-2), None), Ok(vec![]));
    }

    #[test]
    fn test_address_error_names_written_index() {
        let m = Memory::new(10, 8);
        assert_eq!(
            m.address(Val::Integer(-11)).unwrap_err().text(),
            "memory index -11 out of bounds"
        );
        assert_eq!(
            m.address(Val::Integer(12)).unwrap_err().text(),
            "memory index 12 out of bounds"
        );
    }

    #[test]
    fn test_scopes() {
        let mut m = Memory::new(2, 8);
        let outer = m.address(Val::Integer(0)).unwrap();
        m.set(&outer, Val::Integer(7)).unwrap();
        m.push().unwrap();
        assert_eq!(m.depth(), 2);
        let inner = m.address(Val::Integer(0)).unwrap();
        assert_eq!(m.get(&inner), Ok(Val::Integer(0)));
        assert!(m.get(&outer).is_err());
        m.pop();
        m.pop();
        assert_eq!(m.depth(), 1);
        assert_eq!(m.get(&outer), Ok(Val::Integer(7)));
    }

    #[test]
    fn test_overflow_keeps_top_scope() {
        let mut m = Memory::new(2, 1);
        m.push().unwrap();
        let cell = m.address(Val::Integer(1)).unwrap();
        m.set(&cell, Val::Integer(3)).unwrap();
        assert_eq!(m.push().unwrap_err().text(), "memory scope overflow");
        assert_eq!(m.depth(), 2);
        assert_eq!(m.get(&cell), Ok(Val::Integer(3)));
    }
}
