//! One end-to-end run: message, encode, transmit, syndrome, correct, decode.

use super::channel::{random_message, Channel, ChannelModel, Transmission};
use super::codec::{decode, encode};
use super::syndrome::{correct_error, syndrome, translate_syndrome};
use crate::error::{Error, Result};
use log::{debug, info};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;

/// Parameters of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of data bits per message.
    pub data_bits: i64,
    pub channel: ChannelModel,
    /// Seed for the run's generator; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        SimulationConfig {
            data_bits: 4,
            channel: ChannelModel::default(),
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn new(data_bits: i64) -> Self {
        SimulationConfig {
            data_bits,
            ..Self::default()
        }
    }

    pub fn with_channel(mut self, channel: ChannelModel) -> Self {
        self.channel = channel;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Generator for this configuration.
    pub fn rng(&self) -> ChaCha20Rng {
        match self.seed {
            Some(seed) => ChaCha20Rng::seed_from_u64(seed),
            None => ChaCha20Rng::from_entropy(),
        }
    }
}

/// Every vector produced by one run, in pipeline order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationRun {
    message: Vec<u8>,
    codeword: Vec<u8>,
    transmission: Transmission,
    syndrome: Vec<u8>,
    error_position: usize,
    corrected: Vec<u8>,
    decoded: Vec<u8>,
}

impl SimulationRun {
    pub fn message(&self) -> &[u8] {
        &self.message
    }

    pub fn codeword(&self) -> &[u8] {
        &self.codeword
    }

    pub fn received(&self) -> &[u8] {
        self.transmission.received()
    }

    pub fn transmission(&self) -> &Transmission {
        &self.transmission
    }

    pub fn syndrome(&self) -> &[u8] {
        &self.syndrome
    }

    /// 1-based position flagged by the syndrome, 0 if none.
    pub fn error_position(&self) -> usize {
        self.error_position
    }

    pub fn corrected(&self) -> &[u8] {
        &self.corrected
    }

    pub fn decoded(&self) -> &[u8] {
        &self.decoded
    }

    /// True when the decoded message matches the original.
    pub fn recovered(&self) -> bool {
        self.decoded == self.message
    }
}

/// Runs the pipeline on a random message drawn from `rng`.
///
/// # Errors
///
/// `InvalidBitCount` when `config.data_bits <= 0`; nothing is drawn from
/// `rng` in that case.
pub fn simulate<R: Rng + ?Sized>(config: &SimulationConfig, rng: &mut R) -> Result<SimulationRun> {
    if config.data_bits <= 0 {
        return Err(Error::InvalidBitCount(config.data_bits));
    }
    let message = random_message(config.data_bits as usize, rng);
    run_with_message(message, Channel::new(config.channel), rng)
}

/// Runs the pipeline on a caller-supplied message.
pub fn run_with_message<R: Rng + ?Sized>(
    message: Vec<u8>,
    channel: Channel,
    rng: &mut R,
) -> Result<SimulationRun> {
    let codeword = encode(&message)?;
    debug!("encoded {} data bits into {} bits", message.len(), codeword.len());

    let transmission = channel.transmit(&codeword, rng)?;
    let syndrome = syndrome(transmission.received())?;
    let error_position = translate_syndrome(&syndrome);

    let mut corrected = transmission.received().to_vec();
    correct_error(&mut corrected, error_position)?;
    let decoded = decode(&corrected)?;

    let run = SimulationRun {
        message,
        codeword,
        transmission,
        syndrome,
        error_position,
        corrected,
        decoded,
    };
    info!(
        "run complete: error position {}, recovered {}",
        run.error_position,
        run.recovered()
    );
    Ok(run)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_simulate_invalid() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        assert_eq!(
            simulate(&SimulationConfig::new(0), &mut rng),
            Err(Error::InvalidBitCount(0))
        );
        assert_eq!(
            simulate(&SimulationConfig::new(-3), &mut rng),
            Err(Error::InvalidBitCount(-3))
        );
    }

    #[test]
    fn test_simulate_shapes() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let run = simulate(&SimulationConfig::new(4), &mut rng).unwrap();
        assert_eq!(run.message().len(), 4);
        assert_eq!(run.codeword().len(), 7);
        assert_eq!(run.received().len(), 7);
        assert_eq!(run.syndrome().len(), 3);
        assert_eq!(run.corrected(), run.codeword());
        assert_eq!(run.decoded(), run.message());
        assert!(run.recovered());
    }

    #[test]
    fn test_seeded_runs_repeat() {
        let config = SimulationConfig::new(11)
            .with_channel(ChannelModel::BitFlip)
            .with_seed(2021);
        let a = simulate(&config, &mut config.rng()).unwrap();
        let b = simulate(&config, &mut config.rng()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_bit_flip_always_located() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let config = SimulationConfig::new(7).with_channel(ChannelModel::BitFlip);
        for _ in 0..100 {
            let run = simulate(&config, &mut rng).unwrap();
            assert_eq!(run.error_position(), run.transmission().position() + 1);
            assert!(run.recovered());
        }
    }

    #[test]
    fn test_stuck_at_one_without_change() {
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        let run = run_with_message(
            vec![1, 1, 1, 1],
            Channel::new(ChannelModel::StuckAtOne),
            &mut rng,
        )
        .unwrap();
        // Every bit of the all-ones codeword is already 1.
        assert_eq!(run.codeword(), &[1, 1, 1, 1, 1, 1, 1]);
        assert!(!run.transmission().changed());
        assert_eq!(run.error_position(), 0);
        assert_eq!(run.decoded(), &[1, 1, 1, 1]);
    }

    #[test]
    fn test_default_config() {
        let config = SimulationConfig::default();
        assert_eq!(config.data_bits, 4);
        assert_eq!(config.channel, ChannelModel::StuckAtOne);
        assert_eq!(config.seed, None);
    }
}
