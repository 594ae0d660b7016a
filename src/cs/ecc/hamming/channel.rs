//! Random message generation and a single-fault transmission channel.

use crate::error::{Error, Result};
use log::debug;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

/// How the channel disturbs the bit it picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChannelModel {
    /// The chosen bit is forced to 1. A bit that was already 1 arrives
    /// unchanged, so a trial may carry no error at all.
    #[default]
    StuckAtOne,
    /// The chosen bit is always inverted.
    BitFlip,
}

impl ChannelModel {
    fn apply(self, bit: u8) -> u8 {
        match self {
            ChannelModel::StuckAtOne => bit | 1,
            ChannelModel::BitFlip => bit ^ 1,
        }
    }
}

impl fmt::Display for ChannelModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChannelModel::StuckAtOne => write!(f, "stuck-at-one"),
            ChannelModel::BitFlip => write!(f, "bit-flip"),
        }
    }
}

impl FromStr for ChannelModel {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "stuck-at-one" => Ok(ChannelModel::StuckAtOne),
            "bit-flip" => Ok(ChannelModel::BitFlip),
            other => Err(Error::invalid_input(format!(
                "unknown channel model '{}', expected stuck-at-one or bit-flip",
                other
            ))),
        }
    }
}

/// A codeword after it has crossed the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transmission {
    received: Vec<u8>,
    position: usize,
    changed: bool,
}

impl Transmission {
    pub fn received(&self) -> &[u8] {
        &self.received
    }

    pub fn into_received(self) -> Vec<u8> {
        self.received
    }

    /// 0-based index of the bit the channel picked.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the picked bit actually changed value.
    pub fn changed(&self) -> bool {
        self.changed
    }
}

/// Channel that disturbs exactly one uniformly chosen bit per codeword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Channel {
    model: ChannelModel,
}

impl Channel {
    pub fn new(model: ChannelModel) -> Self {
        Channel { model }
    }

    pub fn model(&self) -> ChannelModel {
        self.model
    }

    /// Sends `codeword` across the channel.
    ///
    /// # Errors
    ///
    /// `InvalidLength` for an empty codeword.
    pub fn transmit<R: Rng + ?Sized>(&self, codeword: &[u8], rng: &mut R) -> Result<Transmission> {
        if codeword.is_empty() {
            return Err(Error::InvalidLength(0));
        }

        let position = rng.gen_range(0..codeword.len());
        Ok(self.transmit_at(codeword, position))
    }

    /// Sends `codeword` with the disturbance placed at 0-based `position`.
    ///
    /// # Panics
    ///
    /// Panics if `position` is out of range.
    pub fn transmit_at(&self, codeword: &[u8], position: usize) -> Transmission {
        let mut received = codeword.to_vec();
        received[position] = self.model.apply(codeword[position]);
        let changed = received[position] != codeword[position];
        debug!(
            "{} channel hit bit {} ({})",
            self.model,
            position + 1,
            if changed { "changed" } else { "unchanged" }
        );

        Transmission {
            received,
            position,
            changed,
        }
    }
}

/// Draws `data_bits` independent uniform bits.
pub fn random_message<R: Rng + ?Sized>(data_bits: usize, rng: &mut R) -> Vec<u8> {
    (0..data_bits).map(|_| rng.gen_range(0..=1)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_random_message_lengths() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for n in [0, 1, 10, 20] {
            let message = random_message(n, &mut rng);
            assert_eq!(message.len(), n);
            assert!(message.iter().all(|&b| b <= 1));
        }
    }

    #[test]
    fn test_random_message_reproducible() {
        let a = random_message(64, &mut ChaCha8Rng::seed_from_u64(42));
        let b = random_message(64, &mut ChaCha8Rng::seed_from_u64(42));
        assert_eq!(a, b);
        assert!(a.contains(&0) && a.contains(&1));
    }

    #[test]
    fn test_stuck_at_one() {
        let channel = Channel::new(ChannelModel::StuckAtOne);
        let t = channel.transmit_at(&[0, 1, 1], 0);
        assert_eq!(t.received(), &[1, 1, 1]);
        assert!(t.changed());

        let t = channel.transmit_at(&[0, 1, 1], 1);
        assert_eq!(t.received(), &[0, 1, 1]);
        assert!(!t.changed());
    }

    #[test]
    fn test_bit_flip_always_changes() {
        let channel = Channel::new(ChannelModel::BitFlip);
        let t = channel.transmit_at(&[0, 1, 1], 1);
        assert_eq!(t.received(), &[0, 0, 1]);
        assert!(t.changed());
        assert_eq!(t.position(), 1);
    }

    #[test]
    fn test_transmit_touches_one_bit() {
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let channel = Channel::new(ChannelModel::BitFlip);
        let codeword = vec![0, 1, 1, 0, 0, 1, 1];
        for _ in 0..50 {
            let t = channel.transmit(&codeword, &mut rng).unwrap();
            assert!(t.position() < codeword.len());
            let diffs = codeword
                .iter()
                .zip(t.received())
                .filter(|(a, b)| a != b)
                .count();
            assert_eq!(diffs, 1);
        }
    }

    #[test]
    fn test_transmit_empty() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(
            Channel::default().transmit(&[], &mut rng),
            Err(Error::InvalidLength(0))
        );
    }

    #[test]
    fn test_model_parse() {
        assert_eq!("stuck-at-one".parse::<ChannelModel>(), Ok(ChannelModel::StuckAtOne));
        assert_eq!("bit-flip".parse::<ChannelModel>(), Ok(ChannelModel::BitFlip));
        assert!("xor".parse::<ChannelModel>().is_err());
        assert_eq!(ChannelModel::BitFlip.to_string(), "bit-flip");
    }
}
