//! Room nodes of the mansion map.

use std::fmt;

/// Exit direction out of a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// The left path, command `e`
    Left,
    /// The right path, command `d`
    Right,
}

impl Direction {
    /// Command key the player types to take this path.
    pub fn key(self) -> char {
        match self {
            Direction::Left => 'e',
            Direction::Right => 'd',
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Left => write!(f, "esquerda"),
            Direction::Right => write!(f, "direita"),
        }
    }
}

/// A room of the mansion. Children are owned by their parent.
#[derive(Debug)]
pub struct Room {
    /// Room name, unique within the map
    pub name: String,

    /// Room reached through the left path
    pub left: Option<Box<Room>>,

    /// Room reached through the right path
    pub right: Option<Box<Room>>,

    /// Whether the clue of this room was already collected
    pub clue_collected: bool,
}

impl Room {
    /// Creates a leaf room with no clue collected.
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            left: None,
            right: None,
            clue_collected: false,
        }
    }

    /// Builder-style helper attaching the left child.
    pub fn with_left(mut self, room: Room) -> Self {
        self.left = Some(Box::new(room));
        self
    }

    /// Builder-style helper attaching the right child.
    pub fn with_right(mut self, room: Room) -> Self {
        self.right = Some(Box::new(room));
        self
    }

    /// A room without exits ends the exploration.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// The child in `direction`, if that path exists.
    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left.as_deref(),
            Direction::Right => self.right.as_deref(),
        }
    }

    /// Mutable access to the child in `direction`.
    pub fn child_mut(&mut self, direction: Direction) -> Option<&mut Room> {
        match direction {
            Direction::Left => self.left.as_deref_mut(),
            Direction::Right => self.right.as_deref_mut(),
        }
    }

    /// Existing exits in left, right order.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, &Room)> + '_ {
        [Direction::Left, Direction::Right]
            .into_iter()
            .filter_map(move |direction| self.child(direction).map(|room| (direction, room)))
    }
}
