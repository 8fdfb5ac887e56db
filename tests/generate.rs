use std::collections::HashSet;

use passforge::{
    CharacterClass, GenerationRequest, OutputShape, ValidationError, Warning, generate,
};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn request(count: usize, length: usize) -> GenerationRequest {
    GenerationRequest {
        count,
        length,
        ..Default::default()
    }
}

#[test]
fn count_one_yields_bare_string() {
    let generation = generate(&request(1, 16), true, &mut rand::rng()).unwrap();
    let OutputShape::Single(password) = generation.output else {
        panic!("expected a bare password");
    };
    assert_eq!(password.chars().count(), 16);
}

#[test]
fn five_labeled_passwords() {
    let generation = generate(&request(5, 12), false, &mut rand::rng()).unwrap();
    let OutputShape::Labeled(map) = generation.output else {
        panic!("expected labeled output");
    };
    let keys: Vec<String> = map.keys().cloned().collect();
    let expected: Vec<String> = (1..=5).map(|i| format!("Password {i}")).collect();
    assert_eq!(keys, expected);
    assert!(map.values().all(|p| p.chars().count() == 12));
}

#[test]
fn three_exportable_records() {
    let generation = generate(&request(3, 20), true, &mut rand::rng()).unwrap();
    let OutputShape::Records(records) = generation.output else {
        panic!("expected records");
    };
    assert_eq!(
        records.iter().map(|r| r.number).collect::<Vec<_>>(),
        [1, 2, 3]
    );
    assert!(records.iter().all(|r| r.value.chars().count() == 20));
}

#[test]
fn all_classes_excluded_produces_nothing() {
    let req = GenerationRequest {
        include_uppercase: false,
        include_lowercase: false,
        include_digits: false,
        include_specials: false,
        ..request(3, 12)
    };
    assert_eq!(
        generate(&req, false, &mut rand::rng()).unwrap_err(),
        ValidationError::NoCharacterTypes
    );
}

#[test]
fn short_length_rejected_regardless_of_flags() {
    for exportable in [false, true] {
        let req = GenerationRequest {
            include_specials: false,
            custom_specials: Some("ab".into()),
            ..request(2, 5)
        };
        assert_eq!(
            generate(&req, exportable, &mut rand::rng()).unwrap_err(),
            ValidationError::LengthTooShort(5)
        );
    }
}

#[test]
fn custom_specials_filtered_and_warned() {
    let req = GenerationRequest {
        custom_specials: Some("ab!".into()),
        ..request(4, 10)
    };
    let generation = generate(&req, false, &mut StdRng::seed_from_u64(99)).unwrap();
    assert_eq!(
        generation.warnings,
        [Warning::UnsupportedSpecial('a'), Warning::UnsupportedSpecial('b')]
    );

    let OutputShape::Labeled(map) = generation.output else {
        panic!("expected labeled output");
    };
    for password in map.values() {
        for c in password.chars() {
            assert!(
                c == '!' || !CharacterClass::Special.contains(c),
                "unexpected special {c:?}"
            );
        }
    }
}

#[test]
fn only_selected_classes_appear() {
    let req = GenerationRequest {
        include_uppercase: false,
        include_specials: false,
        ..request(50, 16)
    };
    let generation = generate(&req, true, &mut rand::rng()).unwrap();
    let OutputShape::Records(records) = generation.output else {
        panic!("expected records");
    };
    for record in &records {
        assert!(
            record
                .value
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }
}

#[test]
fn length_above_pool_rejected() {
    let req = GenerationRequest {
        include_uppercase: false,
        include_lowercase: false,
        include_specials: false,
        ..request(1, 12)
    };
    assert_eq!(
        generate(&req, false, &mut rand::rng()).unwrap_err(),
        ValidationError::LengthExceedsPool { length: 12, pool: 10 }
    );
}

#[test]
fn repeated_calls_differ() {
    let passwords: HashSet<String> = (0..100)
        .map(|_| {
            match generate(&request(1, 16), false, &mut rand::rng())
                .unwrap()
                .output
            {
                OutputShape::Single(p) => p.to_string(),
                other => panic!("expected single, got {other:?}"),
            }
        })
        .collect();
    assert_eq!(passwords.len(), 100);
}

#[test]
fn character_frequencies_are_roughly_uniform() {
    let req = GenerationRequest {
        include_uppercase: false,
        include_lowercase: false,
        include_specials: false,
        ..request(2000, 6)
    };
    let generation = generate(&req, true, &mut rand::rng()).unwrap();
    let OutputShape::Records(records) = generation.output else {
        panic!("expected records");
    };

    let mut counts = [0usize; 10];
    for record in &records {
        for c in record.value.chars() {
            counts[c.to_digit(10).unwrap() as usize] += 1;
        }
    }
    // 12_000 draws over 10 digits: expect ~1200 each.
    assert!(counts.iter().all(|&n| (900..1500).contains(&n)), "{counts:?}");
}
