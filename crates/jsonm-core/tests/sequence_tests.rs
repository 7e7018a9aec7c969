use jsonm_core::Sequence;

fn collect(seq: &Sequence<i32>) -> Vec<i32> {
    seq.iter().copied().collect()
}

#[test]
fn new_sequence_is_empty() {
    let seq: Sequence<i32> = Sequence::new();
    assert!(seq.is_empty());
    assert_eq!(seq.len(), 0);
    assert_eq!(seq.front(), None);
    assert_eq!(seq.back(), None);
}

#[test]
fn push_at_both_ends() {
    let mut seq = Sequence::new();
    seq.push_back(2);
    seq.push_front(1);
    seq.push_back(3);
    assert_eq!(collect(&seq), vec![1, 2, 3]);
    assert_eq!(seq.front(), Some(&1));
    assert_eq!(seq.back(), Some(&3));
}

#[test]
fn pop_at_both_ends() {
    let mut seq: Sequence<i32> = vec![1, 2, 3, 4].into();
    assert_eq!(seq.pop_front(), Some(1));
    assert_eq!(seq.pop_back(), Some(4));
    assert_eq!(collect(&seq), vec![2, 3]);
    seq.pop_back();
    seq.pop_back();
    assert_eq!(seq.pop_front(), None);
    assert_eq!(seq.pop_back(), None);
}

#[test]
fn duplicates_are_kept() {
    let seq: Sequence<i32> = [7, 7, 7].into_iter().collect();
    assert_eq!(seq.len(), 3);
}

#[test]
fn positional_access() {
    let mut seq: Sequence<i32> = vec![10, 20, 30].into();
    assert_eq!(seq[1], 20);
    assert_eq!(seq.get(2), Some(&30));
    assert_eq!(seq.get(3), None);
    seq[0] = 11;
    *seq.get_mut(2).unwrap() = 33;
    assert_eq!(collect(&seq), vec![11, 20, 33]);
}

#[test]
fn equality_is_elementwise_in_order() {
    let a: Sequence<i32> = vec![1, 2].into();
    let b: Sequence<i32> = vec![1, 2].into();
    let c: Sequence<i32> = vec![2, 1].into();
    assert_eq!(a, b);
    assert_ne!(a, c);
    assert_ne!(a, Sequence::from(vec![1]));
}

#[test]
fn clone_is_independent() {
    let original: Sequence<String> = vec!["a".to_string()].into();
    let mut copy = original.clone();
    copy.push_back("b".to_string());
    copy[0].push('!');
    assert_eq!(original.len(), 1);
    assert_eq!(original[0], "a");
}

#[test]
fn append_copies_other_to_back() {
    let mut a: Sequence<i32> = vec![1, 2].into();
    let b: Sequence<i32> = vec![3, 4].into();
    a.append(&b).append(&b);
    assert_eq!(collect(&a), vec![1, 2, 3, 4, 3, 4]);
    assert_eq!(collect(&b), vec![3, 4]);
}

#[test]
fn iter_mut_and_extend() {
    let mut seq: Sequence<i32> = vec![1, 2].into();
    for n in &mut seq {
        *n *= 2;
    }
    seq.extend([5, 6]);
    assert_eq!(collect(&seq), vec![2, 4, 5, 6]);
    assert_eq!(seq.iter().len(), 4);
}

#[test]
fn owned_iteration_and_clear() {
    let mut seq: Sequence<i32> = vec![1, 2, 3].into();
    let doubled: Vec<i32> = seq.clone().into_iter().map(|n| n * 2).collect();
    assert_eq!(doubled, vec![2, 4, 6]);
    seq.clear();
    assert!(seq.is_empty());
}
