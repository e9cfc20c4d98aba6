pub mod address_index;
pub mod distance_matrix;
pub mod package;
pub mod package_store;
pub mod truck;
