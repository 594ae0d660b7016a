//! Hamming single-error-correcting codes built from GF(2) matrices.
//!
//! A Hamming code places parity bits at the power-of-two positions of the
//! codeword (1-based) and data bits everywhere else. Parity bit `2^i` covers
//! every position whose binary index has bit `i` set, so the syndrome of a
//! received word spells out the position of a single flipped bit.
//!
//! Every matrix here is derived from one parity-position table:
//! - G, the generator, maps a message to a codeword
//! - H, the parity-check matrix, maps a received word to its syndrome
//! - R, the recovery matrix, selects the data bits of a corrected codeword
//!
//! The free functions rebuild the matrices from the vector they are given on
//! every call. [`HammingCode`] builds them once for repeated use.
//!
//! # Example
//!
//! ```rust
//! use hamming_sim::cs::ecc::hamming::{correct_error, decode, encode, syndrome, translate_syndrome};
//!
//! let codeword = encode(&[1, 0, 1, 1]).unwrap();
//! let mut received = codeword.clone();
//! received[4] ^= 1;
//!
//! let position = translate_syndrome(&syndrome(&received).unwrap());
//! assert_eq!(position, 5);
//!
//! correct_error(&mut received, position).unwrap();
//! assert_eq!(received, codeword);
//! assert_eq!(decode(&received).unwrap(), vec![1, 0, 1, 1]);
//! ```

pub mod channel;
pub mod codec;
pub mod matrices;
pub mod shape;
pub mod simulation;
pub mod syndrome;
pub mod table;


pub use channel::{random_message, Channel, ChannelModel, Transmission};
pub use codec::{decode, encode, HammingCode};
pub use matrices::{data_bits_for_length, generator_matrix, parity_check_matrix, recovery_matrix};
pub use shape::CodewordShape;
pub use simulation::{run_with_message, simulate, SimulationConfig, SimulationRun};
pub use syndrome::{correct_error, corrected, syndrome, translate_syndrome};
pub use table::ParityPositionTable;
