//! Points per word length.

/// Points awarded for a word of `len` letters.
///
/// | letters | points |
/// |---------|--------|
/// | ≤4      | 1      |
/// | 5       | 2      |
/// | 6       | 3      |
/// | 7       | 5      |
/// | ≥8      | 11     |
pub fn points_for(len: usize) -> u32 {
    match len {
        0..=4 => 1,
        5 => 2,
        6 => 3,
        7 => 5,
        _ => 11,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table() {
        assert_eq!(points_for(3), 1);
        assert_eq!(points_for(4), 1);
        assert_eq!(points_for(5), 2);
        assert_eq!(points_for(6), 3);
        assert_eq!(points_for(7), 5);
        assert_eq!(points_for(8), 11);
    }

    #[test]
    fn test_saturates() {
        assert_eq!(points_for(12), 11);
        assert_eq!(points_for(16), 11);
    }
}
