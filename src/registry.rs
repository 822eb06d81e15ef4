//! Algorithm Registry
//!
//! Builds the ordered list of sorting methods applicable to an element
//! type. The list is an explicit value constructed once per benchmark run
//! and handed to the harness; there is no process-wide dispatch table.
//!
//! Counting sort only works for unsigned integer keys, so the element trait
//! carries a capability hook the registry consults once at construction:
//! unsigned integer types answer with their counting sort entry, every
//! other comparable type inherits the `None` default and gets the
//! comparison sorts alone.

use crate::{bubble_sort, counting_sort, merge_sort, quick_sort, std_sort};

/// One registered sorting method: an in-place sort over a whole slice plus
/// the display name used in reports.
pub struct SortMethod<T> {
    pub name: &'static str,
    pub run: fn(&mut [T]),
}

/// Element type that can be driven through the benchmark registry.
pub trait SortElement: Ord + Clone {
    /// Counting sort entry for this element type, if it supports one.
    fn counting_sort() -> Option<SortMethod<Self>>
    where
        Self: Sized,
    {
        None
    }
}

macro_rules! counting_element {
    ($($t:ty),+ $(,)?) => {$(
        impl SortElement for $t {
            fn counting_sort() -> Option<SortMethod<Self>> {
                Some(SortMethod {
                    name: "counting_sort",
                    run: counting_sort::sort::<$t>,
                })
            }
        }
    )+};
}

macro_rules! comparison_element {
    ($($t:ty),+ $(,)?) => {$(
        impl SortElement for $t {}
    )+};
}

counting_element!(u8, u16, u32, u64, usize);
comparison_element!(i8, i16, i32, i64, isize, char, String);

/// Fixed, ordered list of sorting methods for one element type.
pub struct Registry<T> {
    methods: Vec<SortMethod<T>>,
}

impl<T: SortElement> Registry<T> {
    /// Build the registry for `T`: the counting sort entry when the element
    /// type supports one, followed by the comparison sorts and the standard
    /// library baseline, always in the same order.
    pub fn new() -> Self {
        let mut methods = Vec::with_capacity(5);
        if let Some(counting) = T::counting_sort() {
            methods.push(counting);
        }
        methods.push(SortMethod {
            name: "bubble_sort",
            run: bubble_sort::sort::<T>,
        });
        methods.push(SortMethod {
            name: "merge_sort",
            run: merge_sort::sort::<T>,
        });
        methods.push(SortMethod {
            name: "quick_sort",
            run: quick_sort::sort::<T>,
        });
        methods.push(SortMethod {
            name: "std::sort_unstable",
            run: std_sort::sort::<T>,
        });
        Registry { methods }
    }
}

impl<T: SortElement> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Registry<T> {
    /// Assemble a registry from an explicit method list. Used by tests and
    /// callers that want a synthetic or reduced line-up.
    pub fn from_methods(methods: Vec<SortMethod<T>>) -> Self {
        Registry { methods }
    }

    pub fn methods(&self) -> &[SortMethod<T>] {
        &self.methods
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.methods.iter().map(|m| m.name).collect()
    }
}
