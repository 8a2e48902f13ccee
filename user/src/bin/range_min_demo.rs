use std::fmt::Display;

use range_min_tree::{RangeMinError, RangeMinTree};
use str_sep::{OrElse, SpaceSep};

fn print_snapshot<T: Ord + Clone + Display>(tree: &RangeMinTree<T>) {
    let snap = tree.snapshot();
    println!("{}", SpaceSep(snap.iter().map(|x| OrElse(x.as_ref(), "_"))));
}

fn show<T: Display>(what: &str, res: Result<T, RangeMinError>) {
    match res {
        Ok(x) => println!("{what} = {x}"),
        Err(e) => println!("{what} failed: {e}"),
    }
}

fn main() {
    eprintln!("program started");

    let mut tree: RangeMinTree<i32> = vec![2, 8, 5, 3, 9, 4, 1].into();
    eprintln!("built a tree of length {}", tree.len());
    print_snapshot(&tree);

    for (l, r) in [(0, 6), (0, 5), (1, 1), (4, 5)] {
        show(&format!("query({l}, {r})"), tree.query(l, r));
    }
    show("update(5, 6)", tree.update(5, 6).map(|()| "ok"));
    print_snapshot(&tree);
    for (l, r) in [(4, 5), (0, 6)] {
        show(&format!("query({l}, {r})"), tree.query(l, r));
    }

    show("query(2, 1)", tree.query(2, 1));
    show("query(0, 7)", tree.query(0, 7));
    show("update(7, 0)", tree.update(7, 0).map(|()| "ok"));

    let small: RangeMinTree<i32> = vec![4, 5, 1].into();
    print_snapshot(&small);
    show("query(0, 2)", small.query(0, 2));
    show("query(0, 1)", small.query(0, 1));

    let empty: RangeMinTree<i32> = vec![].into();
    print_snapshot(&empty);
    show("query(0, 0)", empty.query(0, 0));

    eprintln!("program finished");
}
