use monomer_lattice::app::encoder::encode;
use monomer_lattice::domain::matrix::transpose;
use monomer_lattice::domain::monomer::domain_tokens;
use monomer_lattice::domain::normaliz_format::EquationSystem;
use monomer_lattice::domain::vector::encode_monomer;
use monomer_lattice::{SingletonConfig, Vocabulary};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const DOMAINS: [&str; 6] = ["d1", "d2", "d3", "h", "t", "x"];

fn random_monomer(rng: &mut StdRng) -> String {
    let len = rng.gen_range(0..8);
    (0..len)
        .map(|_| {
            let domain = DOMAINS[rng.gen_range(0..DOMAINS.len())];
            if rng.gen_bool(0.4) {
                format!("{}*", domain)
            } else {
                domain.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn random_batch(seed: u64) -> Vec<String> {
    let mut rng = StdRng::seed_from_u64(seed);
    let count = rng.gen_range(1..12);
    (0..count).map(|_| random_monomer(&mut rng)).collect()
}

#[test]
fn test_vocabulary_is_first_seen_order() {
    for seed in 0..50 {
        let monomers = random_batch(seed);
        let vocabulary = Vocabulary::from_monomers(&monomers);

        let mut expected: Vec<&str> = Vec::new();
        for monomer in &monomers {
            for token in domain_tokens(monomer) {
                if !expected.contains(&token.base) {
                    expected.push(token.base);
                }
            }
        }
        assert_eq!(vocabulary.domains(), expected.as_slice());
    }
}

#[test]
fn test_vector_length_and_sum() {
    for seed in 0..50 {
        let monomers = random_batch(seed);
        let vocabulary = Vocabulary::from_monomers(&monomers);

        for monomer in &monomers {
            let vector = encode_monomer(monomer, &vocabulary);
            let net: i64 = domain_tokens(monomer).map(|token| token.sign).sum();
            assert_eq!(vector.len(), vocabulary.len());
            assert_eq!(vector.iter().sum::<i64>(), net);
        }
    }
}

#[test]
fn test_transpose_twice_is_identity() {
    for seed in 0..50 {
        let monomers = random_batch(seed);
        let encoding = encode(&monomers, SingletonConfig::default());
        if encoding.vocabulary.is_empty() {
            continue;
        }

        assert_eq!(transpose(&transpose(&encoding.vectors)), encoding.vectors);
        assert_eq!(encoding.equation_system().generators(), encoding.vectors);
    }
}

#[test]
fn test_equation_system_text_round_trip() {
    for seed in 0..20 {
        let encoding = encode(&random_batch(seed), SingletonConfig::default());
        let system = encoding.equation_system();

        let parsed = EquationSystem::from_text(&system.to_text()).unwrap();
        assert_eq!(parsed, system);
        assert_eq!(parsed.num_equations(), encoding.vocabulary.len());
    }
}
