//! SHA-2 family known-answer tests.
//!
//! Vectors come from FIPS 180-4 / RFC 6234 and the NIST example documents:
//! the empty message, "abc", and the standard one- and two-block alphabet
//! messages for each variant.

use hashes::{Algorithm, digest};

fn hex(algorithm: Algorithm, input: &[u8]) -> String {
    digest(algorithm, input).expect("in-memory hashing").to_string()
}

const TWO_BLOCK_32: &[u8] = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";
const TWO_BLOCK_64: &[u8] = b"abcdefghbcdefghicdefghijdefghijkefghijklfghijklmghijklmn\
hijklmnoijklmnopjklmnopqklmnopqrlmnopqrsmnopqrstnopqrstu";

// ============================================================================
// SHA-224
// ============================================================================

#[test]
fn sha224_empty() {
    assert_eq!(
        hex(Algorithm::Sha224, b""),
        "d14a028c2a3a2bc9476102bb288234c415a2b01f828ea62ac5b3e42f"
    );
}

#[test]
fn sha224_abc() {
    assert_eq!(
        hex(Algorithm::Sha224, b"abc"),
        "23097d223405d8228642a477bda255b32aadbce4bda0b3f7e36c9da7"
    );
}

#[test]
fn sha224_two_blocks() {
    assert_eq!(
        hex(Algorithm::Sha224, TWO_BLOCK_32),
        "75388b16512776cc5dba5da1fd890150b0c6455cb4f58b1952522525"
    );
}

// ============================================================================
// SHA-256
// ============================================================================

#[test]
fn sha256_empty() {
    assert_eq!(
        hex(Algorithm::Sha256, b""),
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
    );
}

#[test]
fn sha256_abc() {
    assert_eq!(
        hex(Algorithm::Sha256, b"abc"),
        "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
    );
}

#[test]
fn sha256_two_blocks() {
    assert_eq!(
        hex(Algorithm::Sha256, TWO_BLOCK_32),
        "248d6a61d20638b8e5c026930c3e6039a33ce45964ff2167f6ecedd419db06c1"
    );
}

#[test]
fn sha256_million_a() {
    let input = vec![b'a'; 1_000_000];
    assert_eq!(
        hex(Algorithm::Sha256, &input),
        "cdc76e5c9914fb9281a1c7e284d73e67f1809a48a497200e046d39ccc7112cd0"
    );
}

// ============================================================================
// SHA-384
// ============================================================================

#[test]
fn sha384_empty() {
    assert_eq!(
        hex(Algorithm::Sha384, b""),
        "38b060a751ac96384cd9327eb1b1e36a21fdb71114be07434c0cc7bf63f6e1da\
         274edebfe76f65fbd51ad2f14898b95b"
    );
}

#[test]
fn sha384_abc() {
    assert_eq!(
        hex(Algorithm::Sha384, b"abc"),
        "cb00753f45a35e8bb5a03d699ac65007272c32ab0eded1631a8b605a43ff5bed\
         8086072ba1e7cc2358baeca134c825a7"
    );
}

#[test]
fn sha384_two_blocks() {
    assert_eq!(
        hex(Algorithm::Sha384, TWO_BLOCK_64),
        "09330c33f71147e83d192fc782cd1b4753111b173b3b05d22fa08086e3b0f712\
         fcc7c71a557e2db966c3e9fa91746039"
    );
}

// ============================================================================
// SHA-512
// ============================================================================

#[test]
fn sha512_empty() {
    assert_eq!(
        hex(Algorithm::Sha512, b""),
        "cf83e1357eefb8bdf1542850d66d8007d620e4050b5715dc83f4a921d36ce9ce\
         47d0d13c5d85f2b0ff8318d2877eec2f63b931bd47417a81a538327af927da3e"
    );
}

#[test]
fn sha512_abc() {
    assert_eq!(
        hex(Algorithm::Sha512, b"abc"),
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f"
    );
}

#[test]
fn sha512_two_blocks() {
    assert_eq!(
        hex(Algorithm::Sha512, TWO_BLOCK_64),
        "8e959b75dae313da8cf4f72814fc143f8f7779c6eb9f7fa17299aeadb6889018\
         501d289e4900f7e4331b99dec4b5433ac7d329eeb6dd26545e96e55b874be909"
    );
}

// ============================================================================
// Truncation
// ============================================================================

#[test]
fn truncated_lengths_match_declarations() {
    for (algorithm, len) in [(Algorithm::Sha224, 28), (Algorithm::Sha384, 48)] {
        let d = digest(algorithm, b"truncation check").unwrap();
        assert_eq!(d.len(), len);
        assert_eq!(d.as_bytes().len(), len);
        assert_eq!(d.to_string().len(), len * 2);
    }
}

// 112 bytes is to SHA-384/512 what 56 is to the 64-byte-block family: the
// marker byte displaces the 16-byte length field into an extra block.
#[test]
fn sha512_padding_boundary_at_112_bytes() {
    let below: Vec<u8> = (0..111).map(|i| b'a' + (i % 26) as u8).collect();
    let at: Vec<u8> = (0..112).map(|i| b'a' + (i % 26) as u8).collect();
    // Both must hash cleanly and differently; the padded buffer sizes are
    // covered by the preprocessor unit tests.
    assert_ne!(hex(Algorithm::Sha512, &below), hex(Algorithm::Sha512, &at));
}
