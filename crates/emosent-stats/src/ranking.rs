//! Order-preserving selection helpers.
//!
//! All functions here break ties by input order: of two equal items, the one
//! that appears first wins. `Iterator::max_by` returns the *last* maximum, so
//! it is not used.

use std::cmp::Ordering;

/// Returns up to `k` items ordered greatest first by `compare`.
///
/// The sort is stable: items that compare equal keep their input order.
/// If `items` has fewer than `k` elements, all of them are returned.
/// Float keys can be ranked with [`f64::total_cmp`].
#[must_use]
pub fn top_k_by<T, F>(items: &[T], k: usize, mut compare: F) -> Vec<&T>
where
    F: FnMut(&T, &T) -> Ordering,
{
    let mut sorted = items.iter().collect::<Vec<_>>();
    sorted.sort_by(|a, b| compare(b, a));
    sorted.truncate(k);
    sorted
}

/// Returns the first item for which no later item compares greater.
#[must_use]
pub fn first_max_by<I, F>(items: I, mut compare: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    items.into_iter().reduce(|best, item| {
        if compare(&item, &best) == Ordering::Greater {
            item
        } else {
            best
        }
    })
}

/// Returns the first item for which no later item compares less.
#[must_use]
pub fn first_min_by<I, F>(items: I, mut compare: F) -> Option<I::Item>
where
    I: IntoIterator,
    F: FnMut(&I::Item, &I::Item) -> Ordering,
{
    items.into_iter().reduce(|best, item| {
        if compare(&item, &best) == Ordering::Less {
            item
        } else {
            best
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_top_k_is_stable() {
        let items = [("a", 5_i32), ("b", 7), ("c", 5), ("d", 7), ("e", 1)];
        let top = top_k_by(&items, 4, |a, b| a.1.cmp(&b.1));
        let names = top.iter().map(|(name, _)| *name).collect::<Vec<_>>();
        assert_eq!(names, ["b", "d", "a", "c"]);
    }

    #[test]
    fn test_top_k_larger_than_input() {
        let items = [3_i32, 1, 2];
        let top = top_k_by(&items, 10, Ord::cmp);
        assert_eq!(top, vec![&3, &2, &1]);
    }

    #[test]
    fn test_top_k_zero() {
        let items = [3_i32, 1, 2];
        assert!(top_k_by(&items, 0, Ord::cmp).is_empty());
    }

    #[test]
    fn test_top_k_float_keys() {
        let items = [("a", 600.5_f64), ("b", 601.0), ("c", 600.5), ("d", 12.25)];
        let top = top_k_by(&items, 3, |a, b| a.1.total_cmp(&b.1));
        let names = top.iter().map(|(name, _)| *name).collect::<Vec<_>>();
        assert_eq!(names, ["b", "a", "c"]);
    }

    #[test]
    fn test_first_max_wins_ties() {
        let items = [(0, 1.0_f64), (1, 3.0), (2, 3.0), (3, -1.0)];
        let best = first_max_by(items.iter(), |a, b| a.1.total_cmp(&b.1)).unwrap();
        assert_eq!(best.0, 1);
    }

    #[test]
    fn test_first_min_wins_ties() {
        let items = [(0, 1.0_f64), (1, -3.0), (2, -3.0), (3, 4.0)];
        let worst = first_min_by(items.iter(), |a, b| a.1.total_cmp(&b.1)).unwrap();
        assert_eq!(worst.0, 1);
    }

    #[test]
    fn test_empty_input() {
        let items: [f64; 0] = [];
        assert!(first_max_by(items.iter(), |a, b| a.total_cmp(b)).is_none());
        assert!(first_min_by(items.iter(), |a, b| a.total_cmp(b)).is_none());
    }
}
