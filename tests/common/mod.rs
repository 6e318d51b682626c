use pyrand::mersenne::{IntoSeedWords, Random};

/// Render a double with ten decimal digits, truncating instead of rounding the last one
#[allow(dead_code)]
pub fn ten_digits(v: f64) -> String {
    let s = format!("{:.11}", v);
    s[..s.len() - 1].to_string()
}

/// Seed a generator and discard `skip` calls to random()
#[allow(dead_code)]
pub fn seeded<S: IntoSeedWords>(seed: S, skip: usize) -> Random {
    let mut rng = Random::new(seed);
    skip_random(&mut rng, skip);
    rng
}

/// Seed a generator from hex and discard `skip` calls to random()
#[allow(dead_code)]
pub fn seeded_hex(hex: &str, skip: usize) -> Random {
    let mut rng = Random::from_hex(hex).unwrap();
    skip_random(&mut rng, skip);
    rng
}

#[allow(dead_code)]
fn skip_random(rng: &mut Random, skip: usize) {
    for _i in 0..skip {
        let _ = rng.random();
    }
}
