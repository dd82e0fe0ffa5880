pub mod insertion_sort;
pub mod lsb_sort;
pub mod out_of_place_sort;
pub mod sign_sort;
