use clap::Parser;
use std::io::{self, BufRead, Write};

use hamming_sim::cs::ecc::hamming::{simulate, ChannelModel, HammingCode, SimulationConfig};
use hamming_sim::BinaryMatrix;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Simulate a Hamming-coded transmission with a single-bit fault"
)]
struct Args {
    #[arg(
        allow_negative_numbers = true,
        help = "Number of data bits; prompts on stdin when omitted"
    )]
    bits: Option<i64>,

    #[arg(long, help = "Seed for a reproducible run")]
    seed: Option<u64>,

    #[arg(
        short = 'c',
        long = "channel",
        default_value = "stuck-at-one",
        help = "Channel model: [ stuck-at-one | bit-flip ]"
    )]
    channel: ChannelModel,

    #[arg(long, help = "Print G, H and R before the run")]
    show_matrices: bool,
}

/// Renders a vector as `[b b b]`.
fn format_vector(v: &[u8]) -> String {
    let bits: Vec<String> = v.iter().map(|b| b.to_string()).collect();
    format!("[{}]", bits.join(" "))
}

fn print_matrix(name: &str, m: &BinaryMatrix) {
    println!("{} ({} x {}):", name, m.nrows(), m.ncols());
    for row in m.rows() {
        println!("    {}", format_vector(&row));
    }
}

/// Reads the bit count from stdin. Anything that is not an integer maps to 0,
/// which the caller rejects.
fn prompt_bit_count() -> io::Result<i64> {
    print!("Enter number of databits:  ");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().parse().unwrap_or(0))
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let bits = match args.bits {
        Some(bits) => bits,
        None => match prompt_bit_count() {
            Ok(bits) => bits,
            Err(e) => {
                eprintln!("Failed to read number of bits: {}", e);
                std::process::exit(1);
            }
        },
    };
    if bits <= 0 {
        println!("That is not a valid number of bits!");
        std::process::exit(1);
    }

    let mut config = SimulationConfig::new(bits).with_channel(args.channel);
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    if args.show_matrices {
        match HammingCode::new(bits) {
            Ok(code) => {
                print_matrix("G", code.generator());
                print_matrix("H", code.parity_check());
                print_matrix("R", code.recovery());
                println!();
            }
            Err(e) => {
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }

    let run = match simulate(&config, &mut config.rng()) {
        Ok(run) => run,
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("Message          :  {}", format_vector(run.message()));
    println!("Send Vector      :  {}", format_vector(run.codeword()));
    println!("Received Message :  {}", format_vector(run.received()));
    println!("Parity Check     :  {}", format_vector(run.syndrome()));
    println!("Corrected Message:  {}", format_vector(run.corrected()));
    println!("Decoded Message  :  {}", format_vector(run.decoded()));
}
