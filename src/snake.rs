use crate::Position;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    /// Unit vector as `(d_row, d_col)`.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (-1, 0),
            Down => (1, 0),
            Left => (0, -1),
            Right => (0, 1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }
}

/// Body segments ordered tail (index 0) to head (last index).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    segments: Vec<Position>,
    direction: Direction,
}

impl Snake {
    /// # Panics
    ///
    /// Panics if `segments` is empty.
    pub fn new(segments: Vec<Position>, direction: Direction) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least one segment");
        Snake { segments, direction }
    }

    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn head(&self) -> Position {
        self.segments[self.segments.len() - 1]
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn velocity(&self) -> (i32, i32) {
        self.direction.delta()
    }

    /// Turns the snake unless `new_direction` would reverse it onto itself.
    /// Returns whether the turn was taken.
    pub fn set_direction(&mut self, new_direction: Direction) -> bool {
        if new_direction == self.direction.opposite() {
            return false;
        }
        self.direction = new_direction;
        true
    }

    /// Appends the next head in the current direction and returns it.
    pub fn push_head(&mut self) -> Position {
        let new_head = self.head().step(self.direction);
        self.segments.push(new_head);
        new_head
    }

    /// Removes the tail. The last remaining segment is never removed.
    pub fn drop_tail(&mut self) -> Option<Position> {
        if self.segments.len() > 1 {
            Some(self.segments.remove(0))
        } else {
            None
        }
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// True when the head shares a cell with any other segment.
    pub fn bites_itself(&self) -> bool {
        match self.segments.split_last() {
            Some((head, body)) => body.contains(head),
            None => false,
        }
    }
}
