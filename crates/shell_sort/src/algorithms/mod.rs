pub mod bubble_sort;
pub mod shell_sort;
