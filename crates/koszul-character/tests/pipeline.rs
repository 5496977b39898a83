//! End-to-end pipeline tests: compute, dump, read back.

use koszul_character::{
    character, character_dump, character_of_v, ideal, read_character_dump, CharacterContext,
};
use koszul_perm::partitions;
use koszul_rings::{Q, Ring};

#[test]
fn dump_range_and_read_back() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chars.bin");

    character_dump(4, 5, 2, &path).unwrap();

    let records = read_character_dump(&path).unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0].n, 4);
    assert_eq!(records[0].power, 2);
    assert_eq!(records[0].values.len(), 5);

    assert_eq!(records[1].n, 5);
    assert_eq!(records[1].power, 2);
    assert_eq!(records[1].values.len(), 7);
}

#[test]
fn dump_matches_direct_computation() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("chars.bin");

    character_dump(4, 4, 2, &path).unwrap();

    let records = read_character_dump(&path).unwrap();
    let stored = records[0].rationals().unwrap();
    let direct = character(4, 2).unwrap();
    assert_eq!(stored, direct);
}

#[test]
fn dump_is_deterministic() {
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("a.bin");
    let second = dir.path().join("b.bin");

    character_dump(4, 5, 2, &first).unwrap();
    character_dump(4, 5, 2, &second).unwrap();

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap()
    );
}

#[test]
fn quotient_character_dimensions() {
    // At the identity class the character value is the quotient
    // dimension: dim Λⁱ(V_n) minus the ideal rank.
    for (n, i) in [(4u32, 2usize), (5, 2), (5, 3)] {
        let values = character(n, i).unwrap();
        let rank = ideal(n, i).len();

        let mut ctx = CharacterContext::new();
        let id = partitions(n as usize)
            .into_iter()
            .next()
            .unwrap();
        let ext_dim = ctx.exterior_power_character(&id, i);

        let expected = ext_dim - Q::from_integer(i64::try_from(rank).unwrap());
        assert_eq!(values[0], expected);
    }
}

#[test]
fn degree_one_quotient_is_v() {
    // No relations live in degree one, so the quotient character is
    // the pair-counting character itself.
    for n in 4u32..=6 {
        let values = character(n, 1).unwrap();
        let expected: Vec<Q> = partitions(n as usize).iter().map(character_of_v).collect();
        assert_eq!(values, expected);
    }
}

#[test]
fn zeroth_power_is_trivial_representation() {
    let values = character(5, 0).unwrap();
    assert_eq!(values, vec![Q::one(); 7]);
}

#[test]
fn character_values_are_integral() {
    for (n, i) in [(4u32, 2usize), (5, 2)] {
        for value in character(n, i).unwrap() {
            assert!(value.is_integer(), "non-integer character value {value}");
        }
    }
}
