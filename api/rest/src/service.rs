pub mod marks;
pub mod root;
