extern crate bounded_sparse_set;
use bounded_sparse_set::SparseSet;

fn main() {
    // keys can be anything from 0 to 9
    let mut elements = SparseSet::new(10);
    elements.insert(4, "1");
    elements.insert(7, "2");
    elements.insert(1, "3");

    elements.swap_remove(4);
    elements.insert(9, "4");

    // out of range, ignored
    elements.insert(10, "5");

    if !elements.contains(4) {
        println!("Key 4 is not in the container");
    }

    // Prints 3 2 4
    for v in elements.values() {
        print!("{} ", v);
    }
    println!();

    // Prints 1=3 7=2 9=4
    for (k, v) in &elements {
        print!("{}={} ", k, v);
    }
    println!();
}
