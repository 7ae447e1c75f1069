use std::process::ExitCode;

use ark_std::rand::rngs::StdRng;
use ark_std::rand::SeedableRng;
use clap::{Parser, ValueEnum};

use msm_cost::cost::DEFAULT_MULTIPLY_WEIGHT;
use msm_cost::curve::Bls12381G1;
use msm_cost::surrogate::ModularGroup;
use msm_cost::{compare, BenchmarkConfig, CostReport, GroupArithmetic, ProblemInstance, Result};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Group {
    /// Integers modulo 2^127 - 1
    Surrogate,
    /// BLS12-381 G1
    #[value(name = "bls12-381")]
    Bls12381,
}

/// Compares operation counts of naive and windowed (Pippenger) MSM.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Number of points
    #[arg(short = 'n', long, default_value_t = 4096)]
    points: usize,

    /// Scalar bit length
    #[arg(short, long, default_value_t = 256)]
    bits: usize,

    /// Window width, repeat to compare several widths on the same instance
    #[arg(short = 'c', long = "window", default_values_t = vec![12])]
    windows: Vec<usize>,

    /// Cost of a scalar multiplication in additions
    #[arg(short, long, default_value_t = DEFAULT_MULTIPLY_WEIGHT)]
    weight: u64,

    /// Seed of the instance generator
    #[arg(short, long, default_value_t = 0)]
    seed: u64,

    #[arg(short, long, value_enum, default_value_t = Group::Surrogate)]
    group: Group,
}

fn reports<G: GroupArithmetic>(group: &G, args: &Args) -> Result<Vec<CostReport>> {
    for &window_width in &args.windows {
        BenchmarkConfig {
            point_count: args.points,
            scalar_bit_length: args.bits,
            window_width,
            multiply_weight: args.weight,
        }.validate()?;
    }
    let rng = &mut StdRng::seed_from_u64(args.seed);
    let instance = ProblemInstance::sample(group, args.points, args.bits, rng)?;
    args.windows.iter()
        .map(|&c| compare(group, &instance, c, args.weight))
        .collect()
}

fn main() -> ExitCode {
    let args = Args::parse();
    let reports = match args.group {
        Group::Surrogate => reports(&ModularGroup, &args),
        Group::Bls12381 => reports(&Bls12381G1::new(), &args),
    };
    match reports {
        Ok(reports) => {
            for report in reports {
                println!("{}\n", report);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
