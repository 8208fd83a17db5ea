use std::collections::HashMap;

use anylist::{algorithms, IterWrapper, List};
use rand::{thread_rng, Rng};


fn multiset(items: &[i32]) -> HashMap<i32, usize> {
    let mut counts = HashMap::new();
    for item in items { *counts.entry(*item).or_insert(0) += 1; }
    counts
}

#[test]
fn sort_is_ordered_permutation() {
    let mut rand = thread_rng();
    for n in 0..200 {
        let original: Vec<i32> = (0..n).map(|_| rand.gen_range(-50..50)).collect();

        let mut list = List::from(original.clone());
        list.sort();

        assert!(list.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(multiset(&list), multiset(&original));
    }
}

#[test]
fn sort_by_key_is_ordered() {
    let mut rand = thread_rng();
    let mut pairs: Vec<(u8, u8)> = (0..500).map(|_| (rand.gen_range(0..10), rand.gen_range(0..10))).collect();

    algorithms::sort_by(&mut pairs, |a, b| a.0.cmp(&b.0));
    assert!(pairs.windows(2).all(|w| w[0].0 <= w[1].0));
}

#[test]
fn reverse_twice_is_identity() {
    let mut rand = thread_rng();
    for n in 0..50 {
        let original: List<i32> = (0..n).map(|_| rand.gen_range(0..100)).collect();

        let mut list = original.clone();
        list.reverse();
        list.reverse();
        assert_eq!(list, original);
    }
}

#[test]
fn index_of_sentinel() {
    let list = List::from([10, 20, 30]);

    assert_eq!(list.index_of(&20), Some(1));
    assert_eq!(list.index_of(&99), None);
    assert_eq!(list.index_of(&99).unwrap_or(algorithms::NOT_FOUND), algorithms::NOT_FOUND);
}

#[test]
fn through_pointer_range() {
    let data = [7, 3, 7, 1];
    let view = unsafe {
        let range = data.as_ptr_range();
        IterWrapper::from_raw(range.start, range.end)
    };

    assert!(algorithms::exists(&view, |x| *x == 1));
    assert_eq!(algorithms::last_index_of(&view, &7), Some(2));

    let sevens: List<i32> = algorithms::find_all(&view, |x| *x == 7);
    assert_eq!(sevens, [7, 7]);

    let copy = List::from_range(&view);
    assert_eq!(copy, data);
}
