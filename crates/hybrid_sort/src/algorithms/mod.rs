pub mod hybrid;
pub mod insertion_sort;
pub mod merge;
pub mod merge_sort;
pub mod min_run;
