//! Counting Sort Implementation
//!
//! Non-comparison sort for unsigned integer keys. A frequency table sized
//! to the maximum key is filled in one pass, then the slice is rewritten by
//! emitting each key its counted number of times in ascending order.
//!
//! Keys above 2^29 are rejected to bound the auxiliary table; the input is
//! left untouched in that case.
//!
//! Complexity: O(n + max) time, O(max) space.

/// Largest key the frequency table may be sized for.
pub const MAX_KEY: u64 = 2u64.pow(29);

/// Unsigned integer key type usable as a frequency-table index.
pub trait CountingKey: Copy + Ord {
    fn as_u64(self) -> u64;
    fn from_u64(value: u64) -> Self;
}

macro_rules! counting_key {
    ($($t:ty),+ $(,)?) => {$(
        impl CountingKey for $t {
            #[inline]
            fn as_u64(self) -> u64 {
                self as u64
            }

            #[inline]
            fn from_u64(value: u64) -> Self {
                value as $t
            }
        }
    )+};
}

counting_key!(u8, u16, u32, u64, usize);

/// Sort a slice in-place using counting sort.
///
/// Returns an error without touching the slice when the maximum key exceeds
/// [`MAX_KEY`]. An empty slice is a no-op.
pub fn try_sort<T: CountingKey>(data: &mut [T]) -> Result<(), String> {
    let max = match data.iter().max() {
        Some(&max) => max.as_u64(),
        None => return Ok(()),
    };
    if max > MAX_KEY {
        return Err(format!(
            "maximum value {} exceeds the counting sort bound 2^29",
            max
        ));
    }

    let mut freq = vec![0usize; max as usize + 1];
    for value in data.iter() {
        freq[value.as_u64() as usize] += 1;
    }

    let mut idx = 0;
    for (key, &count) in freq.iter().enumerate() {
        for _ in 0..count {
            data[idx] = T::from_u64(key as u64);
            idx += 1;
        }
    }

    Ok(())
}

/// Registry-facing wrapper: reports a rejected domain on stderr and leaves
/// the slice unmodified, so a driver checking sortedness discards the run.
pub fn sort<T: CountingKey>(data: &mut [T]) {
    if let Err(err) = try_sort(data) {
        eprintln!("counting_sort: {}", err);
    }
}
