//! Splitting a count into hands for illustration.

/// Fingers on one hand.
pub const FINGERS_PER_HAND: u8 = 5;

/// Finger counts per hand, filled left to right.
///
/// Every hand but the last is full, so 7 is drawn as `[5, 2]` and 10 as `[5, 5]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HandGroups(Vec<u8>);

impl HandGroups {
    pub(crate) fn for_count(count: u8) -> Self {
        let mut hands = Vec::with_capacity(usize::from(count.div_ceil(FINGERS_PER_HAND)));
        let mut remaining = count;
        while remaining > 0 {
            let fingers = remaining.min(FINGERS_PER_HAND);
            hands.push(fingers);
            remaining -= fingers;
        }
        Self(hands)
    }

    #[must_use]
    pub fn hands(&self) -> &[u8] {
        &self.0
    }

    #[must_use]
    pub fn total(&self) -> u8 {
        self.0.iter().sum()
    }
}

#[cfg(test)]
mod tests {
    use crate::Number;

    fn groups(n: u8) -> Vec<u8> {
        Number::new(n).unwrap().hand_groups().hands().to_vec()
    }

    #[test]
    fn small_counts_use_one_hand() {
        assert_eq!(groups(1), vec![1]);
        assert_eq!(groups(3), vec![3]);
        assert_eq!(groups(5), vec![5]);
    }

    #[test]
    fn seven_is_five_then_two() {
        assert_eq!(groups(7), vec![5, 2]);
    }

    #[test]
    fn ten_is_two_full_hands() {
        assert_eq!(groups(10), vec![5, 5]);
    }

    #[test]
    fn total_matches_count() {
        for n in Number::all() {
            assert_eq!(n.hand_groups().total(), n.get());
        }
    }
}
