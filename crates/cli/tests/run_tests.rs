//! In-process front-end tests driving [`cli::run_with`] with captured output
//! handles, so no binary is spawned and standard input is never touched.

use std::io::Write as _;

fn run(args: &[&str]) -> (u8, String, String) {
    let mut stdout = Vec::new();
    let mut stderr = Vec::new();
    let code = cli::run_with(args.iter().copied(), &mut stdout, &mut stderr);
    (
        code,
        String::from_utf8(stdout).expect("stdout is UTF-8"),
        String::from_utf8(stderr).expect("stderr is UTF-8"),
    )
}

// ============================================================================
// String mode (-s)
// ============================================================================

#[test]
fn string_mode_default_format() {
    let (code, stdout, stderr) = run(&["rdigest", "sha256", "-s", "abc"]);
    assert_eq!(code, cli::EXIT_OK);
    assert_eq!(
        stdout,
        "SHA256(\"abc\")= ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad\n"
    );
    assert!(stderr.is_empty());
}

#[test]
fn string_mode_quiet() {
    let (code, stdout, _) = run(&["rdigest", "md5", "-q", "-s", "abc"]);
    assert_eq!(code, cli::EXIT_OK);
    assert_eq!(stdout, "900150983cd24fb0d6963f7d28e17f72\n");
}

#[test]
fn string_mode_reverse() {
    let (code, stdout, _) = run(&["rdigest", "md5", "-r", "-s", "abc"]);
    assert_eq!(code, cli::EXIT_OK);
    assert_eq!(stdout, "900150983cd24fb0d6963f7d28e17f72 \"abc\"\n");
}

#[test]
fn multiple_strings_hash_in_order() {
    let (code, stdout, _) = run(&["rdigest", "md5", "-q", "-s", "", "-s", "abc"]);
    assert_eq!(code, cli::EXIT_OK);
    assert_eq!(
        stdout,
        "d41d8cd98f00b204e9800998ecf8427e\n900150983cd24fb0d6963f7d28e17f72\n"
    );
}

#[test]
fn sha512_string_mode() {
    let (code, stdout, _) = run(&["rdigest", "sha512", "-q", "-s", "abc"]);
    assert_eq!(code, cli::EXIT_OK);
    assert_eq!(
        stdout,
        "ddaf35a193617abacc417349ae20413112e6fa4e89a97ea20a9eeee64b55d39a\
         2192992a274fc1a836ba3c23a3feebbd454d4423643ce80e2a9ac94fa54ca49f\n"
    );
}

// ============================================================================
// File operands
// ============================================================================

#[test]
fn file_operand_default_format() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(b"abc").expect("write temp file");
    let path = file.path().display().to_string();

    let (code, stdout, stderr) = run(&["rdigest", "md5", &path]);
    assert_eq!(code, cli::EXIT_OK);
    assert_eq!(stdout, format!("MD5({path})= 900150983cd24fb0d6963f7d28e17f72\n"));
    assert!(stderr.is_empty());
}

#[test]
fn missing_file_is_reported_and_processing_continues() {
    let mut file = tempfile::NamedTempFile::new().expect("create temp file");
    file.write_all(b"abc").expect("write temp file");
    let path = file.path().display().to_string();

    let (code, stdout, stderr) = run(&["rdigest", "md5", "/no/such/file", &path]);
    assert_eq!(code, cli::EXIT_FAILURE);
    // The good file must still be hashed after the bad one failed.
    assert_eq!(stdout, format!("MD5({path})= 900150983cd24fb0d6963f7d28e17f72\n"));
    assert!(stderr.contains("/no/such/file"));
}

#[test]
fn empty_file_hashes_to_empty_message_digest() {
    let file = tempfile::NamedTempFile::new().expect("create temp file");
    let path = file.path().display().to_string();

    let (code, stdout, _) = run(&["rdigest", "sha256", "-q", &path]);
    assert_eq!(code, cli::EXIT_OK);
    assert_eq!(
        stdout,
        "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855\n"
    );
}

// ============================================================================
// Usage errors
// ============================================================================

#[test]
fn unknown_algorithm_is_a_usage_error() {
    let (code, stdout, stderr) = run(&["rdigest", "sha1", "-s", "abc"]);
    assert_eq!(code, cli::EXIT_USAGE);
    assert!(stdout.is_empty());
    assert!(stderr.contains("unknown algorithm 'sha1'"));
    assert!(stderr.contains("usage:"));
}

#[test]
fn missing_algorithm_is_a_usage_error() {
    let (code, _, stderr) = run(&["rdigest"]);
    assert_eq!(code, cli::EXIT_USAGE);
    assert!(stderr.contains("usage:"));
}

#[test]
fn unknown_flag_is_a_usage_error() {
    let (code, _, stderr) = run(&["rdigest", "md5", "-z", "-s", "abc"]);
    assert_eq!(code, cli::EXIT_USAGE);
    assert!(stderr.contains("usage:"));
}

#[test]
fn dangling_string_flag_is_a_usage_error() {
    let (code, _, stderr) = run(&["rdigest", "md5", "-s"]);
    assert_eq!(code, cli::EXIT_USAGE);
    assert!(stderr.contains("usage:"));
}

#[test]
fn help_prints_to_stdout_and_succeeds() {
    let (code, stdout, stderr) = run(&["rdigest", "--help"]);
    assert_eq!(code, cli::EXIT_OK);
    assert!(stdout.contains("Usage: rdigest"));
    assert!(stdout.contains("sha384"));
    assert!(stderr.is_empty());
}
