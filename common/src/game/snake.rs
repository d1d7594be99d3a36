use std::collections::{HashSet, VecDeque};

use super::types::{Cell, Heading};

/// Ordered body, head first, with a set mirror for membership checks.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    body_set: HashSet<Cell>,
    heading: Heading,
}

impl Snake {
    pub fn new(start: Cell, heading: Heading) -> Self {
        Self {
            body: VecDeque::from([start]),
            body_set: HashSet::from([start]),
            heading,
        }
    }

    /// Builds a snake from explicit cells, head first. Returns `None` for an
    /// empty body or a body that crosses itself.
    pub fn from_cells(cells: &[Cell], heading: Heading) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        let body_set: HashSet<Cell> = cells.iter().copied().collect();
        if body_set.len() != cells.len() {
            return None;
        }
        Some(Self {
            body: cells.iter().copied().collect(),
            body_set,
            heading,
        })
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.body_set.contains(cell)
    }

    pub fn occupied(&self) -> &HashSet<Cell> {
        &self.body_set
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    /// Changes heading unless `requested` would reverse into the neck.
    pub fn turn(&mut self, requested: Heading) -> bool {
        if requested.is_opposite(&self.heading) {
            return false;
        }
        self.heading = requested;
        true
    }

    pub fn next_head(&self) -> Cell {
        self.head() + self.heading
    }

    /// Moves onto `new_head`. The tail stays in place when `grow` is set.
    pub fn advance(&mut self, new_head: Cell, grow: bool) {
        if !grow
            && let Some(tail) = self.body.pop_back()
        {
            self.body_set.remove(&tail);
        }
        self.body.push_front(new_head);
        self.body_set.insert(new_head);
    }
}
