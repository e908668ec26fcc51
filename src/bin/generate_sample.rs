use anyhow::{Context, Result};
use serde::Serialize;

/// One output row. Header names match the dashboard's input schema; the
/// flight number is an extra column the loader is expected to ignore.
#[derive(Serialize)]
struct SampleLaunch {
    #[serde(rename = "Flight Number")]
    flight_number: u32,
    #[serde(rename = "Launch Site")]
    launch_site: &'static str,
    #[serde(rename = "class")]
    class: u8,
    #[serde(rename = "Payload Mass (kg)")]
    payload_mass_kg: f64,
    #[serde(rename = "Booster Version")]
    booster_version: &'static str,
}

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

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);

    let sites = [
        "CCAFS LC-40",
        "CCAFS SLC-40",
        "KSC LC-39A",
        "VAFB SLC-4E",
    ];

    // Booster eras: (version, payload mean kg, payload sd kg, success rate, flights)
    let eras: [(&str, f64, f64, f64, u32); 5] = [
        ("F9 v1.0", 600.0, 150.0, 0.40, 5),
        ("F9 v1.1", 3000.0, 900.0, 0.55, 12),
        ("F9 FT", 5500.0, 2200.0, 0.72, 18),
        ("F9 B4", 6500.0, 2500.0, 0.80, 10),
        ("F9 B5", 8000.0, 3500.0, 0.90, 11),
    ];

    let output_path = "spacex_launch_dash.csv";
    let mut writer =
        csv::Writer::from_path(output_path).with_context(|| format!("creating {output_path}"))?;

    let mut flight_number: u32 = 1;
    for &(booster_version, payload_mean, payload_sd, success_rate, flights) in &eras {
        for _ in 0..flights {
            let launch_site = sites[(rng.next_u64() % sites.len() as u64) as usize];
            let payload_mass_kg =
                (rng.gauss(payload_mean, payload_sd).max(0.0) * 10.0).round() / 10.0;
            let class = u8::from(rng.next_f64() < success_rate);

            writer.serialize(SampleLaunch {
                flight_number,
                launch_site,
                class,
                payload_mass_kg,
                booster_version,
            })?;
            flight_number += 1;
        }
    }

    writer.flush().context("flushing CSV")?;
    println!("Wrote {} launches to {output_path}", flight_number - 1);
    Ok(())
}
