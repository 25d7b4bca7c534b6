pub mod point_handle;
