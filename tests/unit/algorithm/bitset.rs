//! Tests for the pip-value bitset

#[cfg(test)]
mod tests {

    use pips_solver::algorithm::bitset::PipSet;

    #[test]
    fn test_insert_reports_duplicates() {
        let mut set = PipSet::new();

        assert!(set.insert(3));
        assert!(set.insert(0));
        assert!(!set.insert(3));
        assert_eq!(set.count(), 2);
        assert_eq!(set.to_vec(), vec![0, 3]);
    }

    #[test]
    fn test_contains_and_empty() {
        let mut set = PipSet::default();
        assert!(set.is_empty());
        assert!(!set.contains(6));

        set.insert(6);
        assert!(!set.is_empty());
        assert!(set.contains(6));
        assert!(!set.contains(5));
    }

    // Values past the set's capacity never count as new
    #[test]
    fn test_out_of_range_values_are_rejected() {
        let mut set = PipSet::new();

        assert!(set.insert(7));
        assert!(!set.insert(8));
        assert!(!set.insert(u8::MAX));
        assert!(!set.contains(200));
        assert_eq!(set.count(), 1);
    }

    #[test]
    fn test_display_lists_values() {
        let mut set = PipSet::new();
        set.insert(5);
        set.insert(1);

        assert_eq!(set.to_string(), "PipSet([1, 5])");
    }
}
