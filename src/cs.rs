pub mod ecc;
