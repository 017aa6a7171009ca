// Max-to-back selection sort.
pub mod selection_sort;
