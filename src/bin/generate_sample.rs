use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    // One year of sales: upward trend, mild seasonal swing, gaussian noise.
    let base = 150.0;
    let trend_per_month = 18.0;
    let seasonal_amplitude = 25.0;

    let output_path = "sales_data.csv";
    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer.write_record(["month", "sales"])?;

    for (i, month) in MONTHS.iter().enumerate() {
        let t = i as f64;
        let seasonal =
            seasonal_amplitude * (2.0 * std::f64::consts::PI * t / 12.0).sin();
        let sales = base + trend_per_month * t + seasonal + rng.gauss(0.0, 12.0);
        writer.write_record([month.to_string(), format!("{:.0}", sales.max(0.0))])?;
    }
    writer.flush().context("writing sales data")?;

    println!("Wrote {} months of sales to {output_path}", MONTHS.len());
    Ok(())
}
