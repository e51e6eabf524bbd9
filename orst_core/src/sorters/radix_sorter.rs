use crate::algorithm::{AlgorithmInfo, Complexity, Value};
use crate::probe::Probe;
use crate::registry::AlgorithmId;
use crate::Sorter;

static INFO: AlgorithmInfo = AlgorithmInfo {
    id: AlgorithmId::Radix,
    name: "Radix Sort",
    summary: "Stable counting sort on each digit, least significant first",
    best: Complexity::Digits,
    average: Complexity::Digits,
    worst: Complexity::Digits,
    space: Complexity::LinearPlusBase,
    stable: true,
    in_place: false,
};

/// Types that can be sorted digit by digit.
///
/// `radix_key` must preserve order: `a < b` if and only if `a.radix_key() < b.radix_key()`.
pub trait RadixKey: Ord + Clone {
    fn radix_key(&self) -> u64;
}

macro_rules! impl_radix_key_unsigned {
    ($($t:ty),*) => {
        $(impl RadixKey for $t {
            #[inline]
            fn radix_key(&self) -> u64 {
                *self as u64
            }
        })*
    };
}

macro_rules! impl_radix_key_signed {
    ($($t:ty),*) => {
        $(impl RadixKey for $t {
            // Flipping the sign bit maps the signed range onto the unsigned one in order.
            #[inline]
            fn radix_key(&self) -> u64 {
                (*self as i64 as u64) ^ (1 << 63)
            }
        })*
    };
}

impl_radix_key_unsigned!(u8, u16, u32, u64, usize);
impl_radix_key_signed!(i8, i16, i32, i64, isize);

/// An implementation of least significant digit [Radix Sort](https://en.wikipedia.org/wiki/Radix_sort)
///
/// # Usage
///```
/// use orst_core::{RadixSorter, Sorter};
///
/// let mut slice = [170, -45, 75, -90, 802, 24, 2, 66];
/// RadixSorter::default().sort(&mut slice);
/// assert_eq!(slice, [-90, -45, 2, 24, 66, 75, 170, 802]);
///```
///
/// # Algorithm
///
/// Radix sort never compares elements. Each pass distributes the elements by one digit of their
/// key with a stable counting sort, starting from the least significant digit. After the pass for
/// the most significant digit the slice is sorted.
///
/// Keys are taken relative to the smallest key in the slice, so negative numbers work and small
/// ranges need few passes.
#[derive(Debug, Clone, Copy)]
pub struct RadixSorter {
    base: u64,
}

impl RadixSorter {
    /// Largest base [`RadixSorter::new`] accepts.
    pub const MAX_BASE: u64 = 1 << 16;

    /// Creates a sorter working in the given `base`.
    ///
    /// # Panics
    ///
    /// Panics if `base` is less than 2 or greater than [`RadixSorter::MAX_BASE`].
    pub fn new(base: u64) -> Self {
        assert!(
            (2..=Self::MAX_BASE).contains(&base),
            "radix base must be between 2 and {}, got {base}",
            Self::MAX_BASE
        );
        Self { base }
    }

    pub fn base(&self) -> u64 {
        self.base
    }
}

impl Default for RadixSorter {
    fn default() -> Self {
        Self::new(10)
    }
}

pub(crate) fn radix_sort<T: RadixKey>(probe: &mut Probe<'_, T>, base: u64) {
    let len = probe.len();
    if len < 2 {
        return;
    }

    let keys = (0..len).map(|i| probe.get(i).radix_key());
    let (min, max) = keys.fold((u64::MAX, u64::MIN), |(min, max), key| {
        (min.min(key), max.max(key))
    });
    let range = max - min;

    let mut place = 1;
    loop {
        counting_pass(probe, min, place, base);
        if range / place < base {
            break;
        }
        place *= base;
    }
}

// One stable counting sort on the digit at `place`.
fn counting_pass<T: RadixKey>(probe: &mut Probe<'_, T>, min: u64, place: u64, base: u64) {
    let len = probe.len();
    let snapshot: Vec<T> = (0..len).map(|i| probe.get(i).clone()).collect();
    let digits: Vec<usize> = snapshot
        .iter()
        .map(|value| ((value.radix_key() - min) / place % base) as usize)
        .collect();

    let mut starts = vec![0; base as usize];
    for &digit in &digits {
        starts[digit] += 1;
    }
    let mut total = 0;
    for start in starts.iter_mut() {
        let count = *start;
        *start = total;
        total += count;
    }

    let mut order = vec![0; len];
    for (index, &digit) in digits.iter().enumerate() {
        order[starts[digit]] = index;
        starts[digit] += 1;
    }

    for (position, &index) in order.iter().enumerate() {
        probe.set(position, snapshot[index].clone());
    }
}

impl<T> Sorter<T> for RadixSorter
where
    T: RadixKey,
{
    fn sort(&self, slice: &mut [T]) {
        radix_sort(&mut Probe::new(slice), self.base)
    }
}

impl crate::SortingAlgorithm for RadixSorter {
    fn info(&self) -> &'static AlgorithmInfo {
        &INFO
    }

    fn sort_probed(&self, probe: &mut Probe<'_, Value>) {
        radix_sort(probe, self.base)
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn arbitrary_array() {
        let mut slice = [1, 5, 4, 2, 3];
        RadixSorter::default().sort(&mut slice);
        assert_eq!(slice, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn very_unsorted() {
        let mut slice = (1..1000).rev().collect::<Vec<_>>();
        RadixSorter::default().sort(&mut slice);
        assert_eq!(slice, (1..1000).collect::<Vec<_>>());
    }

    #[test]
    fn negative_and_extreme_values() {
        let mut slice = vec![i64::MAX, -3, 0, i64::MIN, 42, -3];
        RadixSorter::default().sort(&mut slice);
        assert_eq!(slice, vec![i64::MIN, -3, -3, 0, 42, i64::MAX]);
    }

    #[test]
    fn unsigned_values_in_other_bases() {
        for base in [2, 16, 256] {
            let mut slice: Vec<u32> = vec![4096, 17, 0, 255, 256, 3];
            RadixSorter::new(base).sort(&mut slice);
            assert_eq!(slice, vec![0, 3, 17, 255, 256, 4096]);
        }
    }

    #[test]
    fn largest_base_sorts() {
        let mut slice: Vec<u64> = vec![70_000, 1, 65_536, 65_535, 0];
        RadixSorter::new(RadixSorter::MAX_BASE).sort(&mut slice);
        assert_eq!(slice, vec![0, 1, 65_535, 65_536, 70_000]);
    }

    #[test]
    #[should_panic(expected = "radix base must be between 2 and 65536")]
    fn rejects_huge_base() {
        RadixSorter::new(RadixSorter::MAX_BASE + 1);
    }

    #[test]
    #[should_panic(expected = "radix base must be between 2 and 65536")]
    fn rejects_base_one() {
        RadixSorter::new(1);
    }

    #[test]
    fn never_compares() {
        let mut slice = [9, 1, 8, 2, 7, 3];
        let mut probe = Probe::new(&mut slice);
        radix_sort(&mut probe, 10);
        assert_eq!(probe.stats().comparisons, 0);
        assert_eq!(probe.stats().swaps, 0);
        assert_eq!(slice, [1, 2, 3, 7, 8, 9]);
    }

    #[test]
    fn passes_follow_the_range() {
        // Range 0..=99 in base 10 needs exactly two passes.
        let mut slice: Vec<i64> = (0..100).rev().collect();
        let mut probe = Probe::new(&mut slice);
        radix_sort(&mut probe, 10);
        assert_eq!(probe.stats().writes, 200);
    }

    #[test]
    fn all_equal_takes_one_pass() {
        let mut slice = [5, 5, 5];
        let mut probe = Probe::new(&mut slice);
        radix_sort(&mut probe, 10);
        assert_eq!(probe.stats().writes, 3);
    }

    #[test]
    #[should_panic(expected = "radix base must be at least 2")]
    fn rejects_base_one_at_least_two() {
        RadixSorter::new(1);
    }

    #[test]
    fn keeps_equal_keys_in_order() {
        // Ordered and keyed by the first field only.
        #[derive(Debug, Clone, PartialEq, Eq)]
        struct Keyed(u8, char);
        impl PartialOrd for Keyed {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl Ord for Keyed {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                self.0.cmp(&other.0)
            }
        }
        impl RadixKey for Keyed {
            fn radix_key(&self) -> u64 {
                self.0 as u64
            }
        }

        let mut slice = vec![
            Keyed(2, 'a'),
            Keyed(1, 'b'),
            Keyed(2, 'c'),
            Keyed(1, 'd'),
            Keyed(0, 'e'),
            Keyed(2, 'f'),
        ];
        RadixSorter::new(2).sort(&mut slice);
        let tags: String = slice.iter().map(|k| k.1).collect();
        assert_eq!(tags, "ebdacf");
    }
}
