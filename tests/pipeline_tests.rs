// Fixed-order pipeline: forward runs mirrored by backward runs.

use ternary_engine::{CipherContext, CipherError, KeySchedule, Pipeline, RingChoice};

#[test]
fn keyless_forward_backward_identity() {
    let ctx = CipherContext::builtin();
    let forward = Pipeline {
        compress: true,
        mix: true,
        ..Pipeline::default()
    };
    let backward = Pipeline {
        unmix: true,
        decompress: true,
        ..Pipeline::default()
    };
    let packed = forward.run(&ctx, "ATTACK AT DAWN").unwrap();
    assert_eq!(backward.run(&ctx, &packed).unwrap(), "ATTACK+AT+DAWN");
}

#[test]
fn frobnicate_stage_is_self_inverse() {
    let ctx = CipherContext::builtin();
    let stage = Pipeline {
        frobnicate: true,
        ..Pipeline::default()
    };
    let once = stage.run(&ctx, "HELLO").unwrap();
    assert_eq!(stage.run(&ctx, &once).unwrap(), "HELLO");
}

#[test]
fn keyed_forward_backward_identity() {
    let ctx = CipherContext::builtin();
    let key = Some("CAT".to_string());
    let forward = Pipeline {
        compress: true,
        heisenberg_add: true,
        product: true,
        mix: true,
        key: key.clone(),
        ..Pipeline::default()
    };
    let backward = Pipeline {
        unmix: true,
        quotient: true,
        heisenberg_subtract: true,
        decompress: true,
        key,
        ..Pipeline::default()
    };
    let encrypted = forward.run(&ctx, "MEET ME AT NOON").unwrap();
    assert_ne!(encrypted, "MEET+ME+AT+NOON");
    assert_eq!(backward.run(&ctx, &encrypted).unwrap(), "MEET+ME+AT+NOON");
}

#[test]
fn ring_add_subtract_through_pipeline() {
    let ctx = CipherContext::builtin();
    let key = Some("LEMON".to_string());
    let forward = Pipeline {
        add: true,
        key: key.clone(),
        ..Pipeline::default()
    };
    let backward = Pipeline {
        subtract: true,
        key,
        ..Pipeline::default()
    };
    let shifted = forward.run(&ctx, "HELLOWORLD").unwrap();
    assert_eq!(backward.run(&ctx, &shifted).unwrap(), "HELLOWORLD");
}

#[test]
fn double_product_roundtrip_per_schedule() {
    let ctx = CipherContext::builtin();
    for schedule in [
        KeySchedule::Sequential,
        KeySchedule::Interleaved,
        KeySchedule::NilpotentShift,
    ] {
        let key = Some("CAT".to_string());
        let forward = Pipeline {
            double_product: true,
            schedule,
            key: key.clone(),
            ..Pipeline::default()
        };
        let backward = Pipeline {
            double_quotient: true,
            schedule,
            key,
            ..Pipeline::default()
        };
        let encrypted = forward.run(&ctx, "HELLOWORLD").unwrap();
        assert_eq!(
            backward.run(&ctx, &encrypted).unwrap(),
            "HELLOWORLD",
            "{:?}",
            schedule
        );
    }
}

#[test]
fn polynomial_ring_pipeline_roundtrip() {
    let ctx = CipherContext::builtin();
    let key = Some("LIME".to_string());
    let forward = Pipeline {
        product: true,
        ring: RingChoice::Polynomial,
        key: key.clone(),
        ..Pipeline::default()
    };
    let backward = Pipeline {
        quotient: true,
        ring: RingChoice::Polynomial,
        key,
        ..Pipeline::default()
    };
    let encrypted = forward.run(&ctx, "HELLOWORLD").unwrap();
    assert_eq!(backward.run(&ctx, &encrypted).unwrap(), "HELLOWORLD");
}

#[test]
fn missing_key_surfaces_per_stage_names() {
    let ctx = CipherContext::builtin();
    let mut pipeline = Pipeline {
        add: true,
        quotient: true,
        mix: true,
        ..Pipeline::default()
    };
    assert_eq!(pipeline.keyed_stages(), vec!["add", "divide"]);
    assert_eq!(
        pipeline.run(&ctx, "HELLO"),
        Err(CipherError::MissingKey("add"))
    );
    // After dropping the keyed stages the keyless remainder still runs.
    pipeline.drop_keyed_stages();
    assert!(pipeline.run(&ctx, "HELLO").is_ok());
}

#[test]
fn invalid_key_is_a_hard_error() {
    let ctx = CipherContext::builtin();
    let pipeline = Pipeline {
        quotient: true,
        key: Some("D".to_string()),
        ..Pipeline::default()
    };
    assert_eq!(
        pipeline.run(&ctx, "HELLO"),
        Err(CipherError::NotInvertible)
    );
}
