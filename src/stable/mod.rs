// Adjacent-swap insertion sort.
pub mod insertion_sort;
