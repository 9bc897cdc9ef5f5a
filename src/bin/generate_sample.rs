use std::fs::File;
use std::io::{BufWriter, Write};

use anyhow::{Context, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, Normal};

// Matrix sizes swept by the benchmark: 2, 4, …, 1024.
const START_SIZE: usize = 2;
const END_SIZE: usize = 1024;
const STEP_SIZE: usize = 2;
const NUM_RUNS: usize = 100;

/// Rough cost model: CPU time grows with n³, GPU time is dominated by
/// handle setup and launch latency until n gets large.
fn cpu_seconds(n: f64) -> f64 {
    2.0e-6 + 1.6e-12 * n.powi(3)
}

fn gpu_seconds(n: f64) -> f64 {
    4.0e-4 + 1.5e-13 * n.powi(3)
}

/// Median of `NUM_RUNS` noisy measurements around `mean`.
fn median_of_runs(mean: f64, rng: &mut StdRng) -> Result<f64> {
    let noise = Normal::new(0.0, mean * 0.05).context("building noise distribution")?;
    let mut run_times: Vec<f64> = (0..NUM_RUNS)
        .map(|_| (mean + noise.sample(rng)).max(0.0))
        .collect();
    run_times.sort_by(f64::total_cmp);

    let mid = run_times.len() / 2;
    if run_times.len() % 2 == 0 {
        Ok((run_times[mid - 1] + run_times[mid]) / 2.0)
    } else {
        Ok(run_times[mid])
    }
}

fn main() -> Result<()> {
    let mut rng = StdRng::seed_from_u64(42);

    let output_path = "data.txt";
    let file = File::create(output_path).context("creating output file")?;
    let mut out = BufWriter::new(file);

    let mut sizes = 0;
    for n in (START_SIZE..=END_SIZE).step_by(STEP_SIZE) {
        let n = n as f64;
        writeln!(out, "{}", median_of_runs(cpu_seconds(n), &mut rng)?)?;
        writeln!(out, "{}", median_of_runs(gpu_seconds(n), &mut rng)?)?;
        sizes += 1;
    }
    out.flush().context("flushing output file")?;

    println!(
        "Wrote {} samples ({sizes} matrix sizes, cpu/gpu interleaved) to {output_path}",
        sizes * 2
    );
    Ok(())
}
