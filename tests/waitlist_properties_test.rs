use waitlist::{RemoveOutcome, Waitlist};

#[derive(Clone, Copy)]
enum Op {
    Front(&'static str),
    End(&'static str),
}

fn build(ops: &[Op]) -> Waitlist {
    let mut list = Waitlist::new();
    for op in ops {
        match *op {
            Op::Front(name) => list.insert_front(name),
            Op::End(name) => list.insert_end(name),
        }
    }
    list
}

#[test]
fn test_documented_walkthrough() {
    let mut list = Waitlist::new();
    assert!(list.snapshot().is_empty());

    list.insert_end("Alice");
    list.insert_end("Bob");
    assert_eq!(list.snapshot(), ["Alice", "Bob"]);

    list.insert_front("Carl");
    assert_eq!(list.snapshot(), ["Carl", "Alice", "Bob"]);

    assert_eq!(list.remove_first("Alice"), RemoveOutcome::Removed);
    assert_eq!(list.snapshot(), ["Carl", "Bob"]);

    assert_eq!(list.remove_first("Zed"), RemoveOutcome::NotFound);
    assert_eq!(list.snapshot(), ["Carl", "Bob"]);
}

#[test]
fn test_interleaved_insertions_keep_order() {
    let list = build(&[
        Op::End("a"),
        Op::Front("b"),
        Op::End("c"),
        Op::Front("d"),
        Op::Front("e"),
        Op::End("f"),
    ]);

    assert_eq!(list.snapshot(), ["e", "d", "b", "a", "c", "f"]);
}

#[test]
fn test_length_tracks_insertions_and_removals() {
    let mut list = build(&[Op::End("a"), Op::End("b"), Op::Front("c"), Op::End("d")]);
    let inserted = 4;
    let mut removed = 0;

    for name in ["b", "missing", "c"] {
        if list.remove_first(name).is_found() {
            removed += 1;
        }
    }

    assert_eq!(removed, 2);
    assert_eq!(list.snapshot().len(), inserted - removed);
    assert_eq!(list.len(), inserted - removed);
}

#[test]
fn test_snapshot_is_repeatable_and_detached() {
    let mut list = build(&[Op::End("a"), Op::End("b")]);

    let first = list.snapshot();
    let second = list.snapshot();
    assert_eq!(first, second);

    list.insert_end("c");
    assert_eq!(first, ["a", "b"]);
    assert_eq!(list.snapshot(), ["a", "b", "c"]);
}

#[test]
fn test_remove_miss_leaves_list_unchanged() {
    let mut list = build(&[Op::End("a"), Op::End("b")]);
    let before = list.clone();

    assert!(!bool::from(list.remove_first("z")));
    assert_eq!(list, before);
}

#[test]
fn test_duplicates_remove_front_most_only() {
    let mut list = Waitlist::new();
    list.insert_end("Sam");
    list.insert_end("Pat");
    list.insert_end("Sam");

    assert!(list.remove_first("Sam").is_found());
    assert_eq!(list.snapshot(), ["Pat", "Sam"]);
}

#[test]
fn test_second_of_two_duplicates_survives() {
    let mut list = Waitlist::new();
    list.insert_front("Sam");
    list.insert_end("Sam");
    list.insert_front("Lee");

    list.remove_first("Sam");
    assert_eq!(list.snapshot(), ["Lee", "Sam"]);
    assert_eq!(list.iter().filter(|name| *name == "Sam").count(), 1);
}
