use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::Normal;

const ROWS: usize = 20;

/// Points along a noisy rising spiral, one `x,y,z` triple per row.
fn generate_rows(rng: &mut StdRng) -> Vec<[f64; 3]> {
    let noise = Normal::new(0.0, 0.05).expect("valid normal distribution");
    (0..ROWS)
        .map(|i| {
            let t = i as f64 / (ROWS - 1) as f64 * 4.0 * std::f64::consts::PI;
            let r = 1.0 + rng.gen_range(-0.1..0.1);
            [
                r * t.cos() + rng.sample(noise),
                r * t.sin() + rng.sample(noise),
                t / (4.0 * std::f64::consts::PI),
            ]
        })
        .collect()
}

fn main() {
    let mut rng = StdRng::seed_from_u64(42);
    let rows = generate_rows(&mut rng);

    // No header: every line of data.csv is read as data.
    let output_path = "data.csv";
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(output_path)
        .expect("Failed to create output file");
    for row in &rows {
        writer
            .write_record(row.iter().map(|v| format!("{v:.4}")))
            .expect("Failed to write row");
    }
    writer.flush().expect("Failed to flush writer");

    println!("Wrote {} rows to {output_path}", rows.len());
}
