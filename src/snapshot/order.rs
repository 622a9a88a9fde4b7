use super::schema::Round;

/// Rounds in running order (`sequence_nr` ascending, id as fallback so
/// the ordering is total even on un-renumbered data).
pub fn rounds_in_order(rounds: &[Round]) -> Vec<&Round> {
    let mut ordered: Vec<&Round> = rounds.iter().collect();
    ordered.sort_by(|a, b| {
        a.sequence_nr
            .cmp(&b.sequence_nr)
            .then_with(|| a.id.cmp(&b.id))
    });
    ordered
}

/// Move a round to `target_index` (0-based, clamped to the running
/// order) and rewrite every `sequence_nr` as a contiguous 1..N
/// sequence.
///
/// This replaces pairwise nr-swapping: the whole ordering is recomputed
/// from the target position, so the result is always contiguous no
/// matter what the input numbering looked like. An unknown `round_id`
/// leaves the order untouched but still renumbers.
pub fn resequence(rounds: &[Round], round_id: u64, target_index: usize) -> Vec<Round> {
    let mut ordered: Vec<Round> = rounds_in_order(rounds).into_iter().cloned().collect();

    if let Some(from) = ordered.iter().position(|r| r.id == round_id) {
        let moved = ordered.remove(from);
        let to = target_index.min(ordered.len());
        ordered.insert(to, moved);
    }

    for (index, round) in ordered.iter_mut().enumerate() {
        round.sequence_nr = (index + 1) as u32;
    }
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round(id: u64, sequence_nr: u32) -> Round {
        Round {
            id,
            title: format!("Round {}", id),
            sequence_nr,
            max_score: 10.0,
            exclude_from_scale: false,
            is_tiebreak: false,
        }
    }

    #[test]
    fn test_rounds_in_order_sorts_by_sequence_nr() {
        let rounds = vec![round(1, 3), round(2, 1), round(3, 2)];
        let ordered = rounds_in_order(&rounds);
        let ids: Vec<u64> = ordered.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_resequence_moves_and_renumbers() {
        let rounds = vec![round(1, 1), round(2, 2), round(3, 3)];
        let result = resequence(&rounds, 3, 0);
        let ids: Vec<u64> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        let nrs: Vec<u32> = result.iter().map(|r| r.sequence_nr).collect();
        assert_eq!(nrs, vec![1, 2, 3]);
    }

    #[test]
    fn test_resequence_target_beyond_end_clamps() {
        let rounds = vec![round(1, 1), round(2, 2), round(3, 3)];
        let result = resequence(&rounds, 1, 99);
        let ids: Vec<u64> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn test_resequence_repairs_gappy_numbering() {
        // Numbering with gaps and duplicates comes out contiguous.
        let rounds = vec![round(1, 5), round(2, 5), round(3, 9)];
        let result = resequence(&rounds, 2, 2);
        let nrs: Vec<u32> = result.iter().map(|r| r.sequence_nr).collect();
        assert_eq!(nrs, vec![1, 2, 3]);
        assert_eq!(result[2].id, 2);
    }

    #[test]
    fn test_resequence_unknown_round_only_renumbers() {
        let rounds = vec![round(1, 4), round(2, 8)];
        let result = resequence(&rounds, 99, 0);
        let ids: Vec<u64> = result.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2]);
        let nrs: Vec<u32> = result.iter().map(|r| r.sequence_nr).collect();
        assert_eq!(nrs, vec![1, 2]);
    }
}
