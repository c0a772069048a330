//! Sliding conversation window helpers.

/// The last `n` items of `items`, order preserved.
pub fn recent<T>(items: &[T], n: usize) -> &[T] {
    &items[items.len().saturating_sub(n)..]
}

/// Drop the oldest items so at most `n` remain.
pub fn keep_recent<T>(items: &mut Vec<T>, n: usize) {
    let excess = items.len().saturating_sub(n);
    if excess > 0 {
        items.drain(..excess);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recent_returns_tail_in_order() {
        let items: Vec<u32> = (1..=15).collect();
        assert_eq!(recent(&items, 10), &(6..=15).collect::<Vec<_>>()[..]);
    }

    #[test]
    fn recent_shorter_than_window_is_unchanged() {
        let items = vec![1, 2, 3];
        assert_eq!(recent(&items, 10), &[1, 2, 3]);
        assert!(recent::<u32>(&[], 10).is_empty());
    }

    #[test]
    fn keep_recent_evicts_oldest() {
        let mut items: Vec<u32> = (1..=12).collect();
        keep_recent(&mut items, 10);
        assert_eq!(items.len(), 10);
        assert_eq!(items.first(), Some(&3));
        assert_eq!(items.last(), Some(&12));

        keep_recent(&mut items, 0);
        assert!(items.is_empty());
    }
}
