//! Bucket chain entries for the chained suspect table.

/// One `(clue, suspect)` association in a bucket chain.
#[derive(Debug)]
pub struct HashEntry {
    /// Clue text, unique within its chain
    pub clue: String,

    /// Suspect the clue points at
    pub suspect: String,

    /// Next entry in the same bucket
    pub next: Option<Box<HashEntry>>,
}

impl HashEntry {
    /// Creates an entry that will sit in front of `next`.
    pub fn new(clue: String, suspect: String, next: Option<Box<HashEntry>>) -> Self {
        Self {
            clue,
            suspect,
            next,
        }
    }
}

/// Iterator over one bucket chain, head first.
#[derive(Debug, Clone)]
pub struct ChainIter<'a> {
    current: Option<&'a HashEntry>,
}

impl<'a> ChainIter<'a> {
    pub(crate) fn new(head: Option<&'a HashEntry>) -> Self {
        Self { current: head }
    }
}

impl<'a> Iterator for ChainIter<'a> {
    type Item = (&'a str, &'a str);

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.current?;
        self.current = entry.next.as_deref();
        Some((entry.clue.as_str(), entry.suspect.as_str()))
    }
}
