pub mod errors;
pub mod car;

pub use car::CarRecord;
