//! Auto-growing variable store.

/// Byte-valued variable store backing all program state.
///
/// Conceptually an unbounded zero-initialized array: reading a never-written
/// index returns 0 without growing, writes extend the backing storage with
/// zeroes to cover the index, and the store never shrinks.
#[derive(Debug, Default)]
pub struct Vars {
    vals: Vec<u8>,
}

impl Vars {
    /// Creates an empty store; every read returns 0 until the first write.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the value of variable `index`, 0 if it was never written.
    pub fn get(&self, index: usize) -> u8 {
        self.vals.get(index).copied().unwrap_or(0)
    }

    /// Stores `value` into variable `index`, growing the store to cover it.
    pub fn set(&mut self, index: usize, value: u8) {
        self.expand(index);
        self.vals[index] = value;
    }

    /// Increments variable `index`, wrapping modulo 256.
    pub fn increment(&mut self, index: usize) {
        self.expand(index);
        self.vals[index] = self.vals[index].wrapping_add(1);
    }

    /// Decrements variable `index`, wrapping modulo 256.
    pub fn decrement(&mut self, index: usize) {
        self.expand(index);
        self.vals[index] = self.vals[index].wrapping_sub(1);
    }

    /// Number of variable slots currently materialized.
    pub fn len(&self) -> usize {
        self.vals.len()
    }

    /// Returns whether no variable has ever been written.
    pub fn is_empty(&self) -> bool {
        self.vals.is_empty()
    }

    /// Extends the backing storage with zeroes to cover `index`.
    fn expand(&mut self, index: usize) {
        if self.vals.len() <= index {
            self.vals.resize(index + 1, 0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unwritten_reads_are_zero() {
        let vars = Vars::new();
        assert_eq!(vars.get(0), 0);
        assert_eq!(vars.get(1000), 0);
        assert!(vars.is_empty());
    }

    #[test]
    fn reads_do_not_grow_the_store() {
        let vars = Vars::new();
        let _ = vars.get(42);
        assert_eq!(vars.len(), 0);
    }

    #[test]
    fn writes_grow_with_zero_fill() {
        let mut vars = Vars::new();
        vars.set(3, 9);
        assert_eq!(vars.len(), 4);
        assert_eq!(vars.get(0), 0);
        assert_eq!(vars.get(2), 0);
        assert_eq!(vars.get(3), 9);
    }

    #[test]
    fn increment_wraps_after_256_steps() {
        let mut vars = Vars::new();
        for _ in 0..256 {
            vars.increment(0);
        }
        assert_eq!(vars.get(0), 0);
    }

    #[test]
    fn decrement_wraps_below_zero() {
        let mut vars = Vars::new();
        vars.decrement(5);
        assert_eq!(vars.get(5), 255);
    }

    #[test]
    fn store_never_shrinks() {
        let mut vars = Vars::new();
        vars.set(10, 1);
        vars.set(0, 2);
        assert_eq!(vars.len(), 11);
    }
}
