/// Number of leading characters that participate in the hash.
///
/// Keys sharing this prefix always land on the same home slot. This is part of
/// the table's contract and must not be widened.
pub const HASHED_PREFIX_LEN: usize = 8;

/// Horner multiplier.
pub const HORNER_BASE: u64 = 31;

/// Horner's-rule hash of at most the first [`HASHED_PREFIX_LEN`] characters of
/// `key`, reduced modulo `capacity`.
///
/// `h = h * 31 + code_point` over the prefix. Eight code points below
/// `0x110000` keep `h` well inside `u64`, so no wrapping is needed.
pub fn horner_hash(key: &str, capacity: usize) -> usize {
    debug_assert!(capacity > 0, "capacity must be positive");

    let h = key
        .chars()
        .take(HASHED_PREFIX_LEN)
        .fold(0u64, |h, c| h * HORNER_BASE + u64::from(c));

    (h % capacity as u64) as usize
}

/// Lazily evaluated quadratic probe sequence.
///
/// Yields `(home + i*i) mod capacity` for `i in 0..capacity`. The square is
/// maintained incrementally (`(i+1)^2 = i^2 + 2i + 1`) so large capacities
/// never overflow.
///
/// Quadratic probing over a composite capacity does not visit every slot, so a
/// very full table could miss a free slot that exists. The 0.5 load-factor cap
/// enforced by the table is the only mitigation.
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    home: usize,
    capacity: usize,
    offset: usize,
    step: usize,
}

impl ProbeSequence {
    pub fn new(home: usize, capacity: usize) -> Self {
        debug_assert!(home < capacity);
        Self {
            home,
            capacity,
            offset: 0,
            step: 0,
        }
    }

    /// Probe sequence for `key` in a table of `capacity` slots.
    pub fn for_key(key: &str, capacity: usize) -> Self {
        Self::new(horner_hash(key, capacity), capacity)
    }

    pub fn home(&self) -> usize {
        self.home
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.step >= self.capacity {
            return None;
        }

        let index = (self.home + self.offset) % self.capacity;

        // offset tracks step^2 mod capacity
        self.offset = (self.offset + 2 * self.step + 1) % self.capacity;
        self.step += 1;

        Some(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.capacity - self.step;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ProbeSequence {}
