/// Pure Rust core benchmarks for the rdwgs conversions.
///
/// Uses std::time::Instant for timing, a deterministic LCG PRNG for data generation,
/// and std::hint::black_box to prevent dead-code elimination.
use std::hint::black_box;
use std::time::{Duration, Instant};

use rdwgs_core::batch;
use rdwgs_core::constants::{X_MAX, X_MIN, Y_MAX, Y_MIN};

const REPEATS: usize = 7;

/// Simple LCG PRNG for deterministic RD points inside the validity box.
fn make_data(n: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut state = seed;
    let mut next_f64 = || -> f64 {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (state >> 33) as f64 / (1u64 << 31) as f64
    };

    let x: Vec<f64> = (0..n).map(|_| X_MIN + next_f64() * (X_MAX - X_MIN)).collect();
    let y: Vec<f64> = (0..n).map(|_| Y_MIN + next_f64() * (Y_MAX - Y_MIN)).collect();
    (x, y)
}

/// Run a closure `REPEATS` times, return the median duration.
fn median_time<F: FnMut()>(mut f: F) -> Duration {
    let mut times: Vec<Duration> = (0..REPEATS)
        .map(|_| {
            let start = Instant::now();
            f();
            start.elapsed()
        })
        .collect();
    times.sort();
    times[REPEATS / 2]
}

fn bench_rd_to_wgs84(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();

    for &n in sizes {
        let (x, y) = make_data(n, 42);

        // Warmup
        let _ = black_box(batch::rd_to_wgs84(&x, &y));

        let dur = median_time(|| {
            let _ = black_box(batch::rd_to_wgs84(&x, &y));
        });
        results.push(("rd_to_wgs84", n, dur));
    }
    results
}

fn bench_wgs84_to_rd(sizes: &[usize]) -> Vec<(&'static str, usize, Duration)> {
    let mut results = Vec::new();

    for &n in sizes {
        let (x, y) = make_data(n, 7);
        let Ok(geo) = batch::rd_to_wgs84(&x, &y) else {
            continue;
        };

        // Warmup
        let _ = black_box(batch::wgs84_to_rd(geo.phi(), geo.labda()));

        let dur = median_time(|| {
            let _ = black_box(batch::wgs84_to_rd(geo.phi(), geo.labda()));
        });
        results.push(("wgs84_to_rd", n, dur));
    }
    results
}

fn main() {
    println!("Pure Rust Core Benchmarks");
    println!("============================================================");
    println!("{:<18} {:>8}   {:>12}   {:>9}", "Direction", "N", "Median (ms)", "ns/point");
    println!("------------------------------------------------------------");

    let mut all_results: Vec<(&str, usize, Duration)> = Vec::new();

    all_results.extend(bench_rd_to_wgs84(&[1_000, 100_000, 1_000_000]));
    all_results.extend(bench_wgs84_to_rd(&[1_000, 100_000, 1_000_000]));

    for (direction, n, dur) in &all_results {
        let ms = dur.as_secs_f64() * 1000.0;
        let per_point = dur.as_nanos() as f64 / *n as f64;
        println!("{:<18} {:>8}      {:>9.2}   {:>9.2}", direction, n, ms, per_point);
    }

    println!("============================================================");
}
