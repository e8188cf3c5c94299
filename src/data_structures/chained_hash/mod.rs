//! Chained Hash Table implementation for clue to suspect lookup.
//!
//! A fixed-size hash table resolving collisions by separate chaining. Every
//! bucket holds a singly linked chain with the most recently inserted entry at
//! its head. The table never resizes: the key set is small and known up front.
//!
//! # Example
//!
//! ```
//! use detective_quest_lib::data_structures::chained_hash::{ChainedHashTable, InsertOutcome};
//!
//! let mut table = ChainedHashTable::new();
//! table.insert("Copo quebrado", "Mordomo");
//! assert_eq!(table.lookup("Copo quebrado"), Some("Mordomo"));
//! assert_eq!(table.lookup("Carta de amor"), None);
//!
//! // Re-inserting a clue overwrites its suspect in place
//! let outcome = table.insert("Copo quebrado", "Jardineiro");
//! assert_eq!(outcome, InsertOutcome::Updated { previous: "Mordomo".to_string() });
//! assert_eq!(table.len(), 1);
//! ```

mod entry;
mod hash;

pub use entry::{ChainIter, HashEntry};
pub use hash::{bucket_index, rolling_hash, BUCKET_COUNT, HASH_MULTIPLIER};

/// Result of [`ChainedHashTable::insert`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    /// A new entry was prepended to the chain of `bucket`
    Inserted {
        /// Bucket the clue hashed to
        bucket: usize,
    },

    /// The clue already existed and its suspect was replaced
    Updated {
        /// Suspect stored before the overwrite
        previous: String,
    },
}

/// Fixed-size clue to suspect table with separate chaining.
#[derive(Debug)]
pub struct ChainedHashTable {
    /// Bucket heads, always `BUCKET_COUNT` long
    buckets: Vec<Option<Box<HashEntry>>>,

    /// Total entries across every chain
    len: usize,
}

impl ChainedHashTable {
    /// Creates a table with `BUCKET_COUNT` empty buckets.
    pub fn new() -> Self {
        let mut buckets = Vec::with_capacity(BUCKET_COUNT);
        buckets.resize_with(BUCKET_COUNT, || None);
        Self { buckets, len: 0 }
    }

    /// Associates `clue` with `suspect`.
    ///
    /// Scans the bucket chain first; an existing clue has its suspect
    /// overwritten in place, otherwise a new entry is prepended to the chain.
    pub fn insert<C, S>(&mut self, clue: C, suspect: S) -> InsertOutcome
    where
        C: Into<String>,
        S: Into<String>,
    {
        let clue = clue.into();
        let suspect = suspect.into();
        let index = bucket_index(&clue);

        let mut current = self.buckets[index].as_deref_mut();
        while let Some(entry) = current {
            if entry.clue == clue {
                let previous = std::mem::replace(&mut entry.suspect, suspect);
                tracing::debug!(
                    clue = %entry.clue,
                    previous = %previous,
                    suspect = %entry.suspect,
                    "Overwrote suspect for existing clue"
                );
                return InsertOutcome::Updated { previous };
            }
            current = entry.next.as_deref_mut();
        }

        let head = self.buckets[index].take();
        self.buckets[index] = Some(Box::new(HashEntry::new(clue, suspect, head)));
        self.len += 1;
        InsertOutcome::Inserted { bucket: index }
    }

    /// Looks up the suspect associated with `clue`.
    ///
    /// # Returns
    ///
    /// The suspect name, or `None` when the clue was never inserted.
    pub fn lookup(&self, clue: &str) -> Option<&str> {
        self.chain(bucket_index(clue))
            .find(|(candidate, _)| *candidate == clue)
            .map(|(_, suspect)| suspect)
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the table holds no entries.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets, fixed for the life of the table.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    /// Iterates the chain stored at `index`, head first.
    ///
    /// An out of range index yields an empty chain.
    pub fn chain(&self, index: usize) -> ChainIter<'_> {
        ChainIter::new(self.buckets.get(index).and_then(|head| head.as_deref()))
    }

    /// Iterates every bucket in index order together with its chain.
    pub fn buckets(&self) -> impl Iterator<Item = (usize, ChainIter<'_>)> + '_ {
        self.buckets
            .iter()
            .enumerate()
            .map(|(index, head)| (index, ChainIter::new(head.as_deref())))
    }

    /// Iterates every `(clue, suspect)` pair in bucket order, then chain order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.buckets().flat_map(|(_, chain)| chain)
    }

    /// Consumes the table, releasing every chain from head to tail.
    ///
    /// # Returns
    ///
    /// The number of entries released.
    pub fn teardown(mut self) -> usize {
        self.release_all()
    }

    fn release_all(&mut self) -> usize {
        let mut released = 0;
        for head in &mut self.buckets {
            let mut current = head.take();
            while let Some(mut entry) = current {
                current = entry.next.take();
                drop(entry);
                released += 1;
            }
        }

        self.len = 0;
        if released > 0 {
            tracing::debug!(released, "Suspect table released");
        }
        released
    }
}

impl Default for ChainedHashTable {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ChainedHashTable {
    fn drop(&mut self) {
        self.release_all();
    }
}

impl<C, S> FromIterator<(C, S)> for ChainedHashTable
where
    C: Into<String>,
    S: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (C, S)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (clue, suspect) in iter {
            table.insert(clue, suspect);
        }
        table
    }
}
