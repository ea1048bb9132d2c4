use afl::fuzz;
use br_utils::{
    cnpj, cpf, CnpjFormatter, CnpjGenerator, CpfFormatter, CpfGenerator, FormatterOverrides,
    GeneratorOverrides,
};
use rand::{rngs::StdRng, Rng, SeedableRng};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn split_bytes_once(input: &[u8]) -> Option<(&[u8], &[u8])> {
    if let Some(i) = input.iter().position(|b| *b == b',') {
        Some((&input[0..i], &input[i + 1..]))
    } else {
        None
    }
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let (input, rand_seed) = split_bytes_once(bytes)?;
    let input_str = std::str::from_utf8(input).ok()?;

    let mut rng_seed: u64 = 0;
    for i in 0..8 {
        if rand_seed.len() > i {
            rng_seed <<= 8;
            rng_seed += rand_seed[i] as u64;
        }
    }

    let rng = StdRng::seed_from_u64(rng_seed);
    run_fuzz(input_str, rng);

    Some(())
}

fn gen_key(rng: &mut StdRng) -> String {
    const KEYS: &[&str] = &["", ".", "-", "/", " ", "<", "&", "\"", "ñ", "9"];
    KEYS[rng.gen_range(0..KEYS.len())].to_string()
}

fn gen_overrides(rng: &mut StdRng) -> FormatterOverrides {
    FormatterOverrides::new()
        .hidden(rng.gen_bool(0.5))
        .hidden_key(&gen_key(rng))
        // bounds may fall outside the document
        .hidden_range(rng.gen_range(-2..16), rng.gen_range(-2..16))
        .dot_key(&gen_key(rng))
        .dash_key(&gen_key(rng))
        .slash_key(&gen_key(rng))
        .escape(rng.gen_bool(0.5))
}

fn run_fuzz(input: &str, mut rng: StdRng) {
    let overrides = gen_overrides(&mut rng);

    #[cfg(feature = "manual_test")]
    {
        println!("Input: {:?}", input);
        println!("Overrides: {:?}", overrides);
    }

    // formatting must never panic, whatever the options
    let _ = CpfFormatter::default().format_with(input, &overrides);
    let _ = CnpjFormatter::default().format_with(input, &overrides);

    // a formatted valid document stays valid
    if cpf::is_valid(input) {
        assert!(cpf::is_valid(&cpf::format(input)));
    }
    if cnpj::is_valid(input) {
        assert!(cnpj::is_valid(&cnpj::format(input)));
    }

    // the input doubles as a generator prefix
    if let Ok(generated) = CpfGenerator::from_overrides(
        &GeneratorOverrides::new().prefix(input),
    )
    .and_then(|generator| generator.generate_with_rng(&mut rng))
    {
        assert!(cpf::is_valid(&generated), "{generated}");
    }
    if let Ok(generated) = CnpjGenerator::from_overrides(
        &GeneratorOverrides::new().prefix(input),
    )
    .and_then(|generator| generator.generate_with_rng(&mut rng))
    {
        assert!(cnpj::is_valid(&generated), "{generated}");
    }
}
