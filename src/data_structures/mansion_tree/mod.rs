//! Mansion Tree Implementation
//!
//! The mansion is a fixed binary tree of rooms. Each room owns the rooms behind
//! its left and right exits, and the [`Mansion`] owns the entrance hall.
//!
//! ```text
//! Hall de Entrada
//! ├── (e) Biblioteca
//! │   ├── (e) Escritorio
//! │   └── (d) Quarto Principal
//! └── (d) Sala de Jantar
//!     ├── (e) Cozinha
//!     └── (d) Jardim de Inverno
//! ```
//!
//! The topology is static configuration. Five rooms hide a clue, looked up by
//! room name through [`hidden_clue`].

mod room;

pub use room::{Direction, Room};

/// Name of the entrance hall, the root of the map.
pub const ENTRANCE_HALL: &str = "Hall de Entrada";

/// A clue hidden in one room of the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HiddenClue {
    /// Room holding the clue
    pub room: &'static str,

    /// Where the clue lies, as printed on discovery ("na Biblioteca")
    pub place: &'static str,

    /// Clue text
    pub clue: &'static str,
}

/// Clue hidden in each clue-bearing room.
pub const ROOM_CLUES: [HiddenClue; 5] = [
    HiddenClue {
        room: "Biblioteca",
        place: "na Biblioteca",
        clue: "Bilhete rasgado com data antiga",
    },
    HiddenClue {
        room: "Escritorio",
        place: "no Escritório",
        clue: "Chave dourada com brasao",
    },
    HiddenClue {
        room: "Quarto Principal",
        place: "no Quarto Principal",
        clue: "Diario com anotacoes estranhas",
    },
    HiddenClue {
        room: "Cozinha",
        place: "na Cozinha",
        clue: "Copo quebrado",
    },
    HiddenClue {
        room: "Jardim de Inverno",
        place: "no Jardim de Inverno",
        clue: "Pegadas na lama",
    },
];

/// Returns the clue hidden in the room called `name`, if any.
pub fn hidden_clue(name: &str) -> Option<HiddenClue> {
    ROOM_CLUES.into_iter().find(|hidden| hidden.room == name)
}

/// Returns the text of the clue hidden in the room called `name`, if any.
pub fn clue_for_room(name: &str) -> Option<&'static str> {
    hidden_clue(name).map(|hidden| hidden.clue)
}

/// Allocates a leaf room called `name` with no clue collected.
pub fn create_room(name: &str) -> Room {
    Room::new(name)
}

/// The mansion map.
#[derive(Debug)]
pub struct Mansion {
    root: Option<Box<Room>>,
}

impl Mansion {
    /// Wraps an already wired tree of rooms.
    pub fn new(root: Room) -> Self {
        Self {
            root: Some(Box::new(root)),
        }
    }

    /// Builds the fixed seven room map.
    pub fn build() -> Self {
        let library = create_room("Biblioteca")
            .with_left(create_room("Escritorio"))
            .with_right(create_room("Quarto Principal"));

        let dining_room = create_room("Sala de Jantar")
            .with_left(create_room("Cozinha"))
            .with_right(create_room("Jardim de Inverno"));

        let hall = create_room(ENTRANCE_HALL)
            .with_left(library)
            .with_right(dining_room);

        let mansion = Self::new(hall);
        tracing::debug!(rooms = mansion.room_count(), "Mansion map built");
        mansion
    }

    /// The entrance room.
    pub fn root(&self) -> Option<&Room> {
        self.root.as_deref()
    }

    /// Mutable access to the entrance room, where exploration starts.
    pub fn root_mut(&mut self) -> Option<&mut Room> {
        self.root.as_deref_mut()
    }

    /// Follows `path` from the entrance.
    ///
    /// # Returns
    ///
    /// The room at the end of the path, or `None` if some step has no exit.
    pub fn room_at(&self, path: &[Direction]) -> Option<&Room> {
        let mut room = self.root.as_deref()?;
        for &direction in path {
            room = room.child(direction)?;
        }
        Some(room)
    }

    /// Mutable variant of [`Mansion::room_at`].
    pub fn room_at_mut(&mut self, path: &[Direction]) -> Option<&mut Room> {
        let mut room = self.root.as_deref_mut()?;
        for &direction in path {
            room = room.child_mut(direction)?;
        }
        Some(room)
    }

    /// Finds a room by name anywhere in the map.
    pub fn find(&self, name: &str) -> Option<&Room> {
        let mut pending: Vec<&Room> = self.root().into_iter().collect();
        while let Some(room) = pending.pop() {
            if room.name == name {
                return Some(room);
            }
            pending.extend(room.right.as_deref());
            pending.extend(room.left.as_deref());
        }
        None
    }

    /// Total number of rooms.
    pub fn room_count(&self) -> usize {
        let mut count = 0;
        let mut pending: Vec<&Room> = self.root().into_iter().collect();
        while let Some(room) = pending.pop() {
            count += 1;
            pending.extend(room.left.as_deref());
            pending.extend(room.right.as_deref());
        }
        count
    }

    /// Consumes the map, releasing rooms children-first.
    ///
    /// # Returns
    ///
    /// The number of rooms released.
    pub fn teardown(mut self) -> usize {
        self.release_all()
    }

    fn release_all(&mut self) -> usize {
        let mut released = 0;
        let mut pending: Vec<Box<Room>> = self.root.take().into_iter().collect();

        while let Some(mut room) = pending.pop() {
            if room.is_leaf() {
                drop(room);
                released += 1;
                continue;
            }

            let left = room.left.take();
            let right = room.right.take();
            pending.push(room);
            pending.extend(right);
            pending.extend(left);
        }

        if released > 0 {
            tracing::debug!(released, "Mansion rooms released");
        }
        released
    }
}

impl Default for Mansion {
    fn default() -> Self {
        Self::build()
    }
}

impl Drop for Mansion {
    fn drop(&mut self) {
        self.release_all();
    }
}
