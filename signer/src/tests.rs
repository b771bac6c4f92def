use std::cell::RefCell;

use num_bigint::BigUint;
use rand::RngCore;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde_json::{Value, json};

use codec::{Command, LeHexNum, biguint_from_limbs_le, compose_withdraw_limbs};

use super::*;

/// Trivial backend for protocol-level tests: the additive group of integers
/// modulo the Goldilocks prime. `G = 1`, point addition is field addition,
/// and the "x coordinate" is the group value itself, so the Schnorr
/// equation reads `s == R + H·P (mod q)`.
struct MockBackend;

fn q() -> BigUint {
    BigUint::from(0xffff_ffff_0000_0001u64)
}

impl CurveBackend for MockBackend {
    type Point = BigUint;
    type Scalar = BigUint;
    type Field = BigUint;

    fn element_width(&self) -> usize {
        8
    }

    fn base_point(&self) -> BigUint {
        BigUint::from(1u32)
    }

    fn identity(&self) -> BigUint {
        BigUint::from(0u32)
    }

    fn is_identity(&self, p: &BigUint) -> bool {
        *p == BigUint::from(0u32)
    }

    fn add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % q()
    }

    fn scalar_mul(&self, p: &BigUint, k: &BigUint) -> BigUint {
        (p * k) % q()
    }

    fn negate(&self, p: &BigUint) -> BigUint {
        (q() - p) % q()
    }

    fn point_from_coords(&self, x: &BigUint, _y: &BigUint) -> BigUint {
        x % q()
    }

    fn coords(&self, p: &BigUint) -> (BigUint, BigUint) {
        (p.clone(), BigUint::from(0u32))
    }

    fn scalar_from_decimal(&self, value: &str) -> Option<BigUint> {
        value.parse::<BigUint>().ok().map(|v| v % q())
    }

    fn scalar_from_biguint(&self, value: &BigUint) -> BigUint {
        value % q()
    }

    fn scalar_to_biguint(&self, k: &BigUint) -> BigUint {
        k.clone()
    }

    fn scalar_add(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a + b) % q()
    }

    fn scalar_mul_scalar(&self, a: &BigUint, b: &BigUint) -> BigUint {
        (a * b) % q()
    }

    fn random_scalar(&self, rng: &mut dyn RngCore) -> BigUint {
        let mut buf = [0u8; 8];
        rng.fill_bytes(&mut buf);
        BigUint::from_bytes_le(&buf) % q()
    }

    fn field_from_biguint(&self, value: &BigUint) -> BigUint {
        value % q()
    }

    fn field_to_biguint(&self, e: &BigUint) -> BigUint {
        e.clone()
    }

    fn sponge(&self, inputs: &[BigUint]) -> BigUint {
        inputs
            .iter()
            .fold(BigUint::from(7u32), |acc, e| (acc * 31u32 + e) % q())
    }
}

fn flip_low_bit(hex: &str) -> String {
    let mut bytes = hex::decode(hex).expect("test hex");
    bytes[0] ^= 1;
    hex::encode(bytes)
}

#[test]
fn mock_sign_verifies() {
    let ctx = MockBackend;
    let key = SigningKey::from_decimal(&ctx, "424242").expect("key");
    let nonce = BigUint::from(99u32);
    let record = key.sign_with_nonce(&ctx, &nonce, &[1, 2, 3, 4, 5]);
    assert!(verify_record(&ctx, &record).expect("well-formed"));
}

#[test]
fn mock_sign_is_bit_for_bit_reproducible() {
    let ctx = MockBackend;
    let key = SigningKey::from_decimal(&ctx, "31337").expect("key");
    let nonce = BigUint::from(7777u32);
    let a = key.sign_with_nonce(&ctx, &nonce, &[10, 20, 30]);
    let b = key.sign_with_nonce(&ctx, &nonce, &[10, 20, 30]);
    assert_eq!(a, b);
}

#[test]
fn mock_verify_rejects_single_bit_flips() {
    let ctx = MockBackend;
    let key = SigningKey::from_decimal(&ctx, "55555").expect("key");
    let record = key.sign_with_nonce(&ctx, &BigUint::from(123u32), &[8, 9, 10]);

    let mut tampered = record.clone();
    tampered.sigr = flip_low_bit(&record.sigr);
    assert!(!verify_record(&ctx, &tampered).expect("well-formed"));

    let mut tampered = record.clone();
    tampered.sigx = flip_low_bit(&record.sigx);
    assert!(!verify_record(&ctx, &tampered).expect("well-formed"));

    let mut tampered = record.clone();
    tampered.hash = flip_low_bit(&record.hash);
    assert!(!verify_record(&ctx, &tampered).expect("well-formed"));
}

#[test]
fn mock_verify_rejects_wrong_key() {
    let ctx = MockBackend;
    let key = SigningKey::from_decimal(&ctx, "1000").expect("key");
    let other = SigningKey::from_decimal(&ctx, "1001").expect("key");
    let nonce = BigUint::from(5u32);

    let mut record = key.sign_with_nonce(&ctx, &nonce, &[1, 2]);
    let forged = other.sign_with_nonce(&ctx, &nonce, &[1, 2]);
    record.pkx = forged.pkx;
    assert!(!verify_record(&ctx, &record).expect("well-formed"));
}

#[test]
fn record_msg_is_the_raw_fold_of_the_limbs() {
    let ctx = MockBackend;
    let key = SigningKey::from_decimal(&ctx, "9").expect("key");
    let limbs = [0xdead_beefu64, 42, u64::MAX, 7];
    let record = key.sign_with_nonce(&ctx, &BigUint::from(1u32), &limbs);

    let msg = LeHexNum::new(&record.msg).expect("msg hex");
    assert_eq!(msg.to_biguint(), biguint_from_limbs_le(&limbs));
    assert_eq!(msg.to_limbs(limbs.len()), limbs.to_vec());
}

#[test]
fn malformed_record_hex_is_a_codec_error_not_a_mismatch() {
    let ctx = MockBackend;
    let key = SigningKey::from_decimal(&ctx, "12").expect("key");
    let mut record = key.sign_with_nonce(&ctx, &BigUint::from(3u32), &[1]);
    record.sigr = "zz".to_string();
    assert!(matches!(
        verify_record(&ctx, &record),
        Err(SignError::Codec(_))
    ));
}

#[test]
fn non_numeric_private_key_is_rejected() {
    let ctx = MockBackend;
    for bad in ["", "0xabc", "12 34", "-7", "seed phrase"] {
        assert!(matches!(
            SigningKey::<MockBackend>::from_decimal(&ctx, bad),
            Err(SignError::InvalidKeyMaterial)
        ));
    }
}

#[test]
fn jubjub_sign_verify_round_trip() {
    let ctx = JubjubBackend;
    let mut rng = StdRng::seed_from_u64(42);
    let key = SigningKey::from_decimal(&ctx, "1234567890123456789").expect("key");

    let cmd = Command::new(5, 3, vec![10, 20]).expect("command");
    let record = key.sign(&ctx, &mut rng, &cmd.encode());
    assert!(verify_record(&ctx, &record).expect("well-formed"));

    let mut tampered = record.clone();
    tampered.sigr = flip_low_bit(&record.sigr);
    assert!(!verify_record(&ctx, &tampered).expect("well-formed"));
}

#[test]
fn jubjub_fixed_nonce_signing_is_deterministic() {
    let ctx = JubjubBackend;
    let key = SigningKey::from_decimal(&ctx, "271828182845904523536").expect("key");
    let nonce = ctx.scalar_from_biguint(&BigUint::from(0xabcdefu32));

    let a = key.sign_with_nonce(&ctx, &nonce, &[1, 2, 3, 4]);
    let b = key.sign_with_nonce(&ctx, &nonce, &[1, 2, 3, 4]);
    assert_eq!(a, b);
    assert!(verify_record(&ctx, &a).expect("well-formed"));
}

#[test]
fn jubjub_verify_rejects_wrong_message_digest() {
    let ctx = JubjubBackend;
    let key = SigningKey::from_decimal(&ctx, "777").expect("key");
    let nonce = ctx.scalar_from_biguint(&BigUint::from(31u32));
    let record = key.sign_with_nonce(&ctx, &nonce, &[100, 200]);

    let other = key.sign_with_nonce(&ctx, &nonce, &[100, 201]);
    let mut crossed = record.clone();
    crossed.hash = other.hash;
    assert!(!verify_record(&ctx, &crossed).expect("well-formed"));
}

#[test]
fn query_pkx_matches_the_verifying_key() {
    let ctx = JubjubBackend;
    let key = SigningKey::from_decimal(&ctx, "31415926535").expect("key");
    let (pkx, _) = key.verifying_key(&ctx).to_hex(&ctx);
    assert_eq!(query_pkx(&ctx, "31415926535").expect("key"), pkx);
    assert!(matches!(
        query_pkx(&ctx, "not a key"),
        Err(SignError::InvalidKeyMaterial)
    ));
}

/// Records outgoing transactions and serves a canned state blob.
struct RecordingTransport {
    sent: RefCell<Vec<(Vec<u64>, String)>>,
    state: Value,
}

impl RecordingTransport {
    fn with_nonce(nonce: Value) -> Self {
        Self {
            sent: RefCell::new(Vec::new()),
            state: json!({ "data": { "player": { "nonce": nonce } } }),
        }
    }
}

impl Transport for RecordingTransport {
    fn send_transaction(&self, cmd: &[u64], processing_key: &str) -> Result<Value, ClientError> {
        self.sent
            .borrow_mut()
            .push((cmd.to_vec(), processing_key.to_string()));
        Ok(json!({ "success": true }))
    }

    fn query_state(&self, _processing_key: &str) -> Result<Value, ClientError> {
        Ok(self.state.clone())
    }

    fn query_config(&self) -> Result<Value, ClientError> {
        Ok(json!({ "version": 1 }))
    }
}

#[test]
fn deposit_sends_the_packed_command() {
    let transport = RecordingTransport::with_nonce(json!(5));
    let client = PlayerConvention::new("key-1", transport, 1, 2);
    client.deposit(11, 22, 333).expect("deposit");

    let sent = client.transport().sent.borrow();
    assert_eq!(sent.len(), 1);
    let header = (5u64 << 16) | (4 << 8) | 1;
    assert_eq!(sent[0].0, vec![header, 11, 22, 333]);
    assert_eq!(sent[0].1, "key-1");
}

#[test]
fn withdraw_sends_the_three_limb_layout() {
    let transport = RecordingTransport::with_nonce(json!("9"));
    let client = PlayerConvention::new("key-2", transport, 1, 2);
    client
        .withdraw_rewards("0x0102030405060708090a0b0c0d0e0f1011121314", 1000)
        .expect("withdraw");

    let address = BigUint::from_bytes_be(&(1u8..=20).collect::<Vec<u8>>());
    let limbs = compose_withdraw_limbs(&address, 1000).expect("limbs");

    let sent = client.transport().sent.borrow();
    let header = (9u64 << 16) | (4 << 8) | 2;
    assert_eq!(sent[0].0, vec![header, limbs[0], limbs[1], limbs[2]]);
}

#[test]
fn withdraw_rejects_oversized_amounts() {
    let transport = RecordingTransport::with_nonce(json!(0));
    let client = PlayerConvention::new("key-3", transport, 1, 2);
    let err = client
        .withdraw_rewards("0x0102030405060708090a0b0c0d0e0f1011121314", 1 << 32)
        .expect_err("overflow");
    assert!(matches!(
        err,
        ClientError::Codec(codec::CodecError::AmountOverflow(_))
    ));
    assert!(client.transport().sent.borrow().is_empty());
}

#[test]
fn nonce_accepts_string_encoded_state() {
    let transport = RecordingTransport {
        sent: RefCell::new(Vec::new()),
        state: json!({ "data": "{\"player\":{\"nonce\":\"17\"}}" }),
    };
    let client = PlayerConvention::new("key-4", transport, 1, 2);
    assert_eq!(client.nonce().expect("nonce"), 17);
}
