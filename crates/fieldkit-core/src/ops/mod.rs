pub mod soft_delete_ops;
pub mod store;

pub use store::Store;
