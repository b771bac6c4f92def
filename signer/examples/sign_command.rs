use rand::SeedableRng;
use rand::rngs::StdRng;
use signer::{JubjubBackend, SignatureRecord, SigningKey, verify_record};

fn main() {
    let ctx = JubjubBackend;
    let mut rng = StdRng::seed_from_u64(42);
    let key = SigningKey::from_decimal(&ctx, "1234567890123456789").expect("key");

    let cmd = codec::Command::new(5, 3, vec![10, 20]).expect("command");
    let record = key.sign(&ctx, &mut rng, &cmd.encode());

    let record_bytes = bincode::serialize(&record).expect("serialize record");
    let record2: SignatureRecord = bincode::deserialize(&record_bytes).expect("deserialize record");

    let ok = verify_record(&ctx, &record2).expect("verify");
    assert!(ok);

    println!("pkx  = {}", record2.pkx);
    println!("sigr = {}", record2.sigr);
}
