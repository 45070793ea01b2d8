pub mod collect;
pub mod scaffold;
pub mod summary;
