/// Round-robin order for a pool of `n`, as pairs of 1-based positions in the
/// weight-sorted pool.
///
/// Uses the circle method: position 1 stays put while the others rotate, and
/// an odd pool gets a bye slot. Each pair appears exactly once, round by round.
pub fn round_robin_pairings(n: usize) -> Vec<(usize, usize)> {
    if n < 2 {
        return Vec::new();
    }

    // 0 marks the bye
    let mut slots: Vec<usize> = (1..=n).collect();
    if n % 2 == 1 {
        slots.push(0);
    }

    let m = slots.len();
    let mut pairings = Vec::with_capacity(n * (n - 1) / 2);

    for _ in 0..m - 1 {
        for i in 0..m / 2 {
            let (a, b) = (slots[i], slots[m - 1 - i]);
            if a != 0 && b != 0 {
                pairings.push((a.min(b), a.max(b)));
            }
        }
        slots[1..].rotate_right(1);
    }

    pairings
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_small_pools() {
        assert!(round_robin_pairings(0).is_empty());
        assert!(round_robin_pairings(1).is_empty());
        assert_eq!(round_robin_pairings(2), vec![(1, 2)]);
    }

    #[test]
    fn test_pool_of_four_order() {
        assert_eq!(
            round_robin_pairings(4),
            vec![(1, 4), (2, 3), (1, 3), (2, 4), (1, 2), (3, 4)]
        );
    }

    #[test]
    fn test_every_pair_once() {
        for n in 2..=8 {
            let pairings = round_robin_pairings(n);
            assert_eq!(pairings.len(), n * (n - 1) / 2, "n = {}", n);

            let unique: HashSet<_> = pairings.iter().copied().collect();
            assert_eq!(unique.len(), pairings.len());
            assert!(pairings.iter().all(|(a, b)| a < b && *b <= n));
        }
    }

    #[test]
    fn test_odd_pool_everyone_fights_everyone() {
        let pairings = round_robin_pairings(5);
        for position in 1..=5 {
            let fights = pairings.iter().filter(|(a, b)| *a == position || *b == position).count();
            assert_eq!(fights, 4);
        }
    }
}
