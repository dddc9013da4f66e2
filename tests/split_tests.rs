use word_tree::split::{entropy, partition, score_query};
use word_tree::best_split;

fn words(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_entropy_uniform() {
    assert_eq!(entropy([1, 1, 1, 1]), 2.0);
    assert_eq!(entropy([4]), 0.0);
}

#[test]
fn test_entropy_uneven() {
    assert_eq!(entropy([1, 2, 1]), 1.5);
}

#[test]
fn test_partition_groups_by_mask() {
    let words = words(&["cat", "car", "can", "bat"]);
    let parts = partition(&words, &[0, 1, 2, 3], "cat");

    assert_eq!(parts.len(), 3);
    assert_eq!(parts["cat"], vec![0]);
    assert_eq!(parts["ca_"], vec![1, 2]);
    assert_eq!(parts["_at"], vec![3]);
}

#[test]
fn test_root_split_uses_empty_query() {
    let words = words(&["cat", "car", "can", "bat"]);
    let split = best_split(&words, &[0, 1, 2, 3], 0);

    assert_eq!(split.query, None);
    assert_eq!(split.entropy, 0.0);
    assert_eq!(split.partition.len(), 1);
    assert_eq!(split.partition["___"], vec![0, 1, 2, 3]);
}

#[test]
fn test_ties_keep_first_query() {
    let words = words(&["cat", "car", "can", "bat"]);
    let split = best_split(&words, &[0, 1, 2, 3], 1);

    assert_eq!(split.query, Some(0));
    assert_eq!(split.entropy, 1.5);
    assert_eq!(split.partition.len(), 3);
}

#[test]
fn test_strictly_better_query_wins() {
    let words = words(&["abc", "xyz", "xyw", "xzz"]);
    let split = best_split(&words, &[0, 1, 2, 3], 1);

    assert_eq!(split.query, Some(1));
    assert_eq!(split.entropy, 2.0);
    assert!(score_query(&words, &[0, 1, 2, 3], 0) < split.entropy);
}

#[test]
fn test_query_is_drawn_from_candidates() {
    let words = words(&["abc", "xyz", "xyw", "xzz"]);
    let split = best_split(&words, &[2, 3], 1);

    assert!(matches!(split.query, Some(2) | Some(3)));
    let total: usize = split.partition.values().map(Vec::len).sum();
    assert_eq!(total, 2);
}

#[test]
fn test_score_pair() {
    let words = words(&["cat", "car", "can", "bat"]);
    assert_eq!(score_query(&words, &[1, 2], 1), 1.0);
}
