/// A set of tile values.
///
/// Used as the "immovable" set of the placement solver: tiles whose value is in
/// the set must not be moved. The set is `Copy`, so a recursive call can extend
/// its own copy without affecting the caller.
///
/// # Examples
///
/// ```
/// use tileslide_solver::TileSet;
///
/// let placed = TileSet::up_to(3);
/// assert!(placed.contains(1) && placed.contains(3));
/// assert!(!placed.contains(4));
///
/// let scoped = placed.with(7);
/// assert!(scoped.contains(7));
/// assert!(!placed.contains(7));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct TileSet {
    bits: [u64; 4],
}

impl TileSet {
    /// The empty set.
    pub const EMPTY: Self = Self { bits: [0; 4] };

    /// Creates an empty set.
    #[must_use]
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Creates the set `{1, 2, ..., value}`.
    #[must_use]
    pub fn up_to(value: u8) -> Self {
        (1..=value).collect()
    }

    /// Inserts a value, returning `true` if it was not present.
    pub fn insert(&mut self, value: u8) -> bool {
        let (word, bit) = Self::locate(value);
        let present = self.bits[word] & bit != 0;
        self.bits[word] |= bit;
        !present
    }

    /// Removes a value, returning `true` if it was present.
    pub fn remove(&mut self, value: u8) -> bool {
        let (word, bit) = Self::locate(value);
        let present = self.bits[word] & bit != 0;
        self.bits[word] &= !bit;
        present
    }

    /// Returns a copy of the set with `value` added.
    #[must_use]
    pub fn with(mut self, value: u8) -> Self {
        self.insert(value);
        self
    }

    /// Returns `true` if the set contains `value`.
    #[must_use]
    pub fn contains(&self, value: u8) -> bool {
        let (word, bit) = Self::locate(value);
        self.bits[word] & bit != 0
    }

    /// Returns the number of values in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bits.iter().map(|word| word.count_ones() as usize).sum()
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bits.iter().all(|&word| word == 0)
    }

    /// Returns the values in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (0..=u8::MAX).filter(|&value| self.contains(value))
    }

    fn locate(value: u8) -> (usize, u64) {
        (usize::from(value / 64), 1 << (value % 64))
    }
}

impl FromIterator<u8> for TileSet {
    fn from_iter<T: IntoIterator<Item = u8>>(iter: T) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<u8> for TileSet {
    fn extend<T: IntoIterator<Item = u8>>(&mut self, iter: T) {
        for value in iter {
            self.insert(value);
        }
    }
}

impl<const N: usize> From<[u8; N]> for TileSet {
    fn from(values: [u8; N]) -> Self {
        values.into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_remove() {
        let mut set = TileSet::new();
        assert!(set.is_empty());
        assert!(set.insert(5));
        assert!(!set.insert(5));
        assert!(set.insert(255));
        assert_eq!(set.len(), 2);
        assert!(set.remove(5));
        assert!(!set.remove(5));
        assert_eq!(set.iter().collect::<Vec<_>>(), [255]);
    }

    #[test]
    fn test_up_to() {
        assert!(TileSet::up_to(0).is_empty());
        assert_eq!(TileSet::up_to(4).iter().collect::<Vec<_>>(), [1, 2, 3, 4]);
    }

    #[test]
    fn test_with_leaves_original_untouched() {
        let base = TileSet::from([1, 2]);
        let extended = base.with(64);
        assert_eq!(base.len(), 2);
        assert_eq!(extended.len(), 3);
        assert!(extended.contains(64));
    }
}
