use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

/// Command line for the sample roster generator.
#[derive(Debug, Parser)]
#[command(name = "generate_sample", about = "Write a demo marks file")]
struct Args {
    /// File to write
    #[arg(default_value = "sample_roster.txt")]
    output: PathBuf,

    /// Number of students
    #[arg(default_value_t = 20)]
    count: usize,
}

/// Deterministic mark source (splitmix64 stream).
struct MarkRng(u64);

impl MarkRng {
    fn next_f64(&mut self) -> f64 {
        self.0 = self.0.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.0;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^= z >> 31;
        (z >> 11) as f64 / (1u64 << 53) as f64
    }

    /// A mark in 0..=100 near `ability`; the sum of three uniforms gives a
    /// rough bell shape.
    fn mark(&mut self, ability: f64) -> i32 {
        let spread: f64 = (0..3).map(|_| self.next_f64()).sum::<f64>() - 1.5;
        (ability + spread * 20.0).round().clamp(0.0, 100.0) as i32
    }
}

const FIRST_NAMES: [&str; 10] = [
    "Alice", "Bob", "Chen", "Dana", "Emeka", "Farah", "Goran", "Hana", "Ivan", "Jun",
];

fn main() -> Result<()> {
    let Args { output, count } = Args::parse();
    let mut rng = MarkRng(42);

    let file = File::create(&output)
        .with_context(|| format!("creating {}", output.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "# Generated by generate_sample")?;
    writeln!(out, "# name,id,mark1,mark2,mark3")?;
    writeln!(out)?;
    writeln!(out, "Programming Fundamentals")?;

    let mut writer = csv::Writer::from_writer(out);
    for i in 0..count {
        let name = format!("{}{}", FIRST_NAMES[i % FIRST_NAMES.len()], i / FIRST_NAMES.len());
        let id = format!("S{:04}", i + 1);
        let ability = 40.0 + rng.next_f64() * 50.0;
        let marks = [rng.mark(ability), rng.mark(ability), rng.mark(ability)];

        writer
            .write_record([
                name,
                id,
                marks[0].to_string(),
                marks[1].to_string(),
                marks[2].to_string(),
            ])
            .with_context(|| format!("writing student {i}"))?;
    }

    let mut out = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("flushing records: {}", e.error()))?;

    // One malformed line of each kind so the skip path shows up.
    writeln!(out, "# the next two lines are rejected by the loader")?;
    writeln!(out, "Broken,S9998,10,20")?;
    writeln!(out, "Broken,S9999,ten,20,30")?;
    out.flush()?;

    println!("Wrote {count} students to {}", output.display());
    Ok(())
}
