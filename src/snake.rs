use log::debug;

use crate::grid::Cell;
use crate::input::Heading;

/// Ordered snake body, head first.
///
/// Movement is a shift: every segment takes its predecessor's cell and the
/// head steps one cell along the heading. The body never holds more cells
/// than the grid has.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Snake {
    body: Vec<Cell>,
    capacity: usize,
}

impl Snake {
    /// Creates a straight snake with its head at `start`, the remaining
    /// `length - 1` segments trailing along the negative x axis.
    ///
    /// Callers pass a length already checked against the grid by
    /// [`crate::config::GameConfig::validate`].
    pub(crate) fn new(start: Cell, length: usize, capacity: usize) -> Self {
        let body = std::iter::successors(Some(start), |cell| Some(cell.step(Heading::Left)))
            .take(length.max(1))
            .collect();

        Self { body, capacity }
    }

    /// Creates a snake from explicit body segments (front is head).
    ///
    /// Returns `None` for an empty body or one longer than `capacity`.
    #[must_use]
    pub fn from_segments(segments: Vec<Cell>, capacity: usize) -> Option<Self> {
        if segments.is_empty() || segments.len() > capacity {
            return None;
        }

        Some(Self {
            body: segments,
            capacity,
        })
    }

    /// Extends the body by one segment that the next [`Snake::advance`]
    /// turns into the retained tail.
    pub fn grow(&mut self) {
        if self.body.len() >= self.capacity {
            debug!("snake already covers all {} cells, not growing", self.capacity);
            return;
        }

        let tail = self.tail();
        self.body.push(tail);
    }

    /// Shifts the body one cell along `heading`.
    pub fn advance(&mut self, heading: Heading) {
        let head = self.head();

        for z in (1..self.body.len()).rev() {
            self.body[z] = self.body[z - 1];
        }

        self.body[0] = head.step(heading);
    }

    /// Returns the current head position.
    #[must_use]
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Returns the current tail position.
    #[must_use]
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Returns true if any segment occupies `cell`.
    #[must_use]
    pub fn occupies(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Returns true if the head shares its cell with a segment at index
    /// `exempt_segments` or later.
    #[must_use]
    pub fn head_hits_body(&self, exempt_segments: usize) -> bool {
        let head = self.head();
        self.body
            .iter()
            .skip(exempt_segments.max(1))
            .any(|segment| *segment == head)
    }

    /// Returns current segment count.
    #[must_use]
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; every constructor keeps at least the head.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Body segments from head to tail.
    #[must_use]
    pub fn segments(&self) -> &[Cell] {
        &self.body
    }
}
