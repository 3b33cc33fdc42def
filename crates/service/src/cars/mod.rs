pub mod repository;
pub mod store;

pub use repository::CarRepository;
pub use store::CarStore;
