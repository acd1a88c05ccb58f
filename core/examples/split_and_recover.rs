use math::prelude::*;
use shamir_core::{ShamirScheme, StandardPrime};

const PARTICIPANTS: usize = 5;
const THRESHOLD: usize = 3;

/// Split a secret over the 127-bit Mersenne prime, then recover it from two
/// different subsets of three shares. Set `RUST_LOG=debug` to see the
/// library's tracing events.
fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let scheme = ShamirScheme::with_standard_prime(
        StandardPrime::Mersenne127,
        PARTICIPANTS,
        THRESHOLD,
    )
    .expect("valid scheme configuration");

    let secret = uint!(20_241_019);
    let shares = scheme.split(&secret).expect("split should succeed");
    for share in &shares {
        println!("share {share}");
    }

    let front = scheme
        .interpolate(&shares[..THRESHOLD])
        .expect("first three shares reconstruct");
    let back = scheme
        .interpolate(&shares[PARTICIPANTS - THRESHOLD..])
        .expect("last three shares reconstruct");

    assert_eq!(front, secret);
    assert_eq!(back, secret);
    println!("Recovered {front} from two different share subsets.");

    let short = scheme.interpolate(&shares[..THRESHOLD - 1]);
    println!("With {} shares: {}", THRESHOLD - 1, short.unwrap_err());
}
