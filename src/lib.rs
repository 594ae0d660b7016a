pub mod cs;
pub mod error;
pub mod math;

pub use cs::ecc::hamming::{
    correct_error, decode, encode, random_message, simulate, syndrome, translate_syndrome,
    Channel, ChannelModel, HammingCode, SimulationConfig, SimulationRun,
};
pub use error::{Error, Result};
pub use math::gf2::BinaryMatrix;
