use textbook_sort_rs::search::binary_search;
use textbook_sort_rs::unstable::selection_sort;
use textbook_sort_rs::SequenceError;

const LENGTH: usize = 6;
const NEEDLE: i32 = 42;

fn print_list(list: &[i32]) {
    for val in list {
        println!("{val:>10}");
    }
}

fn main() -> Result<(), SequenceError> {
    env_logger::init();

    let mut list = [100, 45, 89, 27, 317, 17];
    println!("unsorted list: ");
    print_list(&list);

    selection_sort::sort_prefix(&mut list, LENGTH)?;
    println!("list in order: ");
    print_list(&list);

    println!("test if {NEEDLE} is in the array...");
    let found = binary_search::search_prefix(&NEEDLE, &list, LENGTH)?;
    log::info!("search for {NEEDLE} over {LENGTH} elements: {found}");
    println!("{}", if found { " YES" } else { " NO" });

    Ok(())
}
