use std::cmp::Ordering;

/// Deterministic ordering used when list sorting is requested
pub trait Comparable {
    fn compare(&self, other: &Self) -> Ordering;
}

/// Collects a repository into a list, sorted when `sort` is set.
///
/// Without sorting the iteration order of the source is preserved.
/// The sort is stable, so equal elements keep their relative order.
pub fn ordered<'a, T, I>(items: I, sort: bool) -> Vec<&'a T>
where
    T: Comparable + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut list: Vec<&'a T> = items.into_iter().collect();
    if sort {
        list.sort_by(|a, b| a.compare(b));
    }
    list
}

/// Compares two optional strings, absent values first
pub(crate) fn compare_optional(a: Option<&str>, b: Option<&str>) -> Ordering {
    a.unwrap_or_default().cmp(b.unwrap_or_default())
}
