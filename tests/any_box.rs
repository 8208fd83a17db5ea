use std::{sync::Barrier, thread};

use anylist::{AnyBox, AnyError, List, TypeTag};


#[test]
fn assign_changes_held_type() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut value = AnyBox::empty();
    value.assign(42i32);
    assert_eq!(value.get::<i32>(), Ok(&42));

    value.assign(String::from("x"));
    assert!(matches!(value.get::<i32>(), Err(AnyError::BadCast { .. })));
    assert_eq!(value.cast::<String>().as_deref(), Ok("x"));
}

#[test]
fn reads_on_empty_fail() {
    let mut value = AnyBox::default();

    assert_eq!(value.get::<u8>(), Err(AnyError::Empty));
    assert_eq!(value.cast::<u8>(), Err(AnyError::Empty));
    assert_eq!(value.release::<u8>(), Err(AnyError::Empty));
    assert_eq!(value.current_type(), TypeTag::empty());
}

#[test]
fn boxes_in_a_list() {
    let mut list = List::new();
    list.add(AnyBox::new(1u32));
    list.add(AnyBox::new(List::from([1, 2])));
    list.add(AnyBox::empty());

    let copy = list.clone();
    list[1].get_mut::<List<i32>>().unwrap().add(3);

    assert_eq!(copy[1].get::<List<i32>>().unwrap(), &[1, 2]);
    assert_eq!(list[1].get::<List<i32>>().unwrap(), &[1, 2, 3]);
    assert!(copy[2].is_empty());
    assert_eq!(list.find_index(|b| b.is::<u32>()), Some(0));
}

#[test]
fn one_tag_per_type_across_threads() {
    struct Fresh;

    let barrier = Barrier::new(8);
    let tags: Vec<usize> = thread::scope(|s| {
        let handles: Vec<_> = (0..8)
            .map(|_| s.spawn(|| {
                barrier.wait();
                TypeTag::of::<Fresh>() as *const TypeTag as usize
            }))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    assert!(tags.windows(2).all(|w| w[0] == w[1]));
}
