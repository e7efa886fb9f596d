// Double-key schedule round trips across both rings and all strategies.

use ternary_engine::{CipherContext, IntegerRing, KeySchedule, PolyRing, ResidueRing, RingOps};

const SCHEDULES: [KeySchedule; 3] = [
    KeySchedule::Sequential,
    KeySchedule::Interleaved,
    KeySchedule::NilpotentShift,
];

// First symbols with value ≡ 2 (mod 3) keep the key itself, its inverse and
// the nilpotent-shifted half-keys all invertible.
const PAIRS: &[(&str, &str)] = &[
    ("HELLOWORLD", "CAT"),
    ("THEQUICKBROWNFOX", "LIME"),
    ("ABCDEFG", "C"),
    ("RIGHT", "RIGHT"),
];

fn assert_schedules_roundtrip<R: ResidueRing + Copy>(ring: R) {
    let ctx = CipherContext::builtin();
    let ops = RingOps::new(ring, &ctx.standard);
    for schedule in SCHEDULES {
        for &(text, key) in PAIRS {
            let encrypted = ops.double_product(text, key, schedule).unwrap();
            assert_eq!(
                ops.double_quotient(&encrypted, key, schedule).unwrap(),
                text,
                "{:?} t={} k={}",
                schedule,
                text,
                key
            );
        }
    }
}

#[test]
fn integer_schedules_roundtrip() {
    assert_schedules_roundtrip(IntegerRing);
}

#[test]
fn poly_schedules_roundtrip() {
    assert_schedules_roundtrip(PolyRing);
}

#[test]
fn longer_key_roundtrip_pads_with_zeros() {
    let ctx = CipherContext::builtin();
    let ops = RingOps::new(IntegerRing, &ctx.standard);
    for schedule in SCHEDULES {
        let encrypted = ops.double_product("HI", "CRYPTIC", schedule).unwrap();
        assert_eq!(
            ops.double_quotient(&encrypted, "CRYPTIC", schedule).unwrap(),
            "HIAAAAA",
            "{:?}",
            schedule
        );
    }
}

#[test]
fn split_schedules_recover_from_degenerate_high_half() {
    // Key 'B' inverts to value 1, whose doubled-length text is 'B' plus
    // all-zero padding: the high half is not invertible until the fold-in
    // fix-up replaces it with the sum of the halves. The round trip passing
    // proves the fix-up fires identically on both sides.
    let ctx = CipherContext::builtin();
    let ops = RingOps::new(IntegerRing, &ctx.standard);
    for schedule in [KeySchedule::Sequential, KeySchedule::Interleaved] {
        let encrypted = ops.double_product("HELLO", "B", schedule).unwrap();
        assert_eq!(
            ops.double_quotient(&encrypted, "B", schedule).unwrap(),
            "HELLO",
            "{:?}",
            schedule
        );
    }
}

#[test]
fn nilpotent_shift_rejects_keys_whose_inverse_shifts_to_zero() {
    // Key 'B' inverts to 1; adding the one-character increment 'C' (value
    // 2) lands on 3 ≡ 0 (mod 3), so no half-key exists.
    let ctx = CipherContext::builtin();
    let ops = RingOps::new(IntegerRing, &ctx.standard);
    assert!(ops
        .double_product("HELLO", "B", KeySchedule::NilpotentShift)
        .is_err());
}

#[test]
fn double_product_differs_from_single_product() {
    let ctx = CipherContext::builtin();
    let ops = RingOps::new(IntegerRing, &ctx.standard);
    let single = ops.product("HELLOWORLD", "CAT").unwrap();
    for schedule in SCHEDULES {
        let double = ops.double_product("HELLOWORLD", "CAT", schedule).unwrap();
        assert_ne!(double, single, "{:?}", schedule);
    }
}

#[test]
fn schedules_produce_distinct_ciphertexts() {
    let ctx = CipherContext::builtin();
    let ops = RingOps::new(IntegerRing, &ctx.standard);
    let outputs: Vec<String> = SCHEDULES
        .iter()
        .map(|&s| ops.double_product("HELLOWORLD", "CAT", s).unwrap())
        .collect();
    assert_ne!(outputs[0], outputs[2]);
    assert_ne!(outputs[1], outputs[2]);
}

#[test]
fn zero_divisor_key_is_rejected_by_every_schedule() {
    let ctx = CipherContext::builtin();
    let ops = RingOps::new(IntegerRing, &ctx.standard);
    for schedule in SCHEDULES {
        assert!(
            ops.double_product("HELLO", "D", schedule).is_err(),
            "{:?}",
            schedule
        );
    }
}
