pub mod gf2;

pub use gf2::BinaryMatrix;
