use textbook_sort_rs::stable::insertion_sort;
use textbook_sort_rs::SequenceError;

const LENGTH: usize = 8;

fn print_list(list: &[i32]) {
    for val in list {
        println!("{val:>10}");
    }
}

fn main() -> Result<(), SequenceError> {
    env_logger::init();

    let mut list = [28, 4, 100, 9, 224, 111, 72, 53];
    println!("unsorted list: ");
    print_list(&list);

    insertion_sort::sort_prefix(&mut list, LENGTH)?;
    println!("list in order: ");
    print_list(&list);

    Ok(())
}
