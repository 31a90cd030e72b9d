//! Record-replay round trip.
//!
//! 1. Generate identifiers through a recording context.
//! 2. Replay the cassette and generate again with the same selectors.
//! 3. Assert identical identifiers, twice over for determinism.
//! 4. Do the same through the CLI with `FREEGUID_RECORD` / `FREEGUID_REPLAY`.

use std::path::Path;
use std::process::Command;

use freeguid::context::ServiceContext;
use freeguid::generator::GeneratorFactory;
use freeguid::Selector;

fn generate_all(ctx: &ServiceContext) -> Vec<String> {
    let factory = GeneratorFactory::new(ctx);
    Selector::ALL.into_iter().map(|s| factory.create_for(s).generate()).collect()
}

#[test]
fn record_then_replay_produces_identical_ids() {
    let dir = std::env::temp_dir().join("freeguid_record_replay_test");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette = dir.join("roundtrip.cassette.yaml");

    let ctx = ServiceContext::recording(&cassette);
    let recorded = generate_all(&ctx);
    assert_eq!(ctx.finish().unwrap().as_deref(), Some(cassette.as_path()));

    let replayed = generate_all(&ServiceContext::replaying(&cassette).unwrap());
    assert_eq!(recorded, replayed);

    let again = generate_all(&ServiceContext::replaying(&cassette).unwrap());
    assert_eq!(replayed, again, "replays differ");

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn hand_written_cassette_drives_composite_ids() {
    let dir = std::env::temp_dir().join("freeguid_hand_cassette_test");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette = dir.join("fixed.cassette.yaml");
    std::fs::write(
        &cassette,
        "name: fixed\n\
         recorded_at: 2023-11-14T22:13:20Z\n\
         interactions:\n\
         - { seq: 0, port: clock, method: now, output: \"2023-11-14T22:13:20Z\" }\n\
         - { seq: 1, port: entropy, method: below, input: { bound: 1000000 }, output: 784124 }\n",
    )
    .unwrap();

    let ctx = ServiceContext::replaying(&cassette).unwrap();
    let id = GeneratorFactory::new(&ctx).create("timestamp").unwrap().generate();
    assert_eq!(id, "1700000000000-784124");

    let _ = std::fs::remove_dir_all(&dir);
}

fn cli(args: &[&str], env: (&str, &Path)) -> String {
    let output = Command::new(env!("CARGO_BIN_EXE_freeguid"))
        .args(args)
        .env_remove("FREEGUID_RECORD")
        .env_remove("FREEGUID_REPLAY")
        .env_remove("FREEGUID_DEFAULT_TYPE")
        .env(env.0, env.1)
        .output()
        .expect("failed to run freeguid binary");
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn cli_replay_reproduces_recorded_run() {
    let dir = std::env::temp_dir().join("freeguid_cli_record_replay_test");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette = dir.join("cli.cassette.yaml");

    for selector in ["guid-typescript", "randomNumber"] {
        let args = ["generate", "--type", selector, "--count", "4"];
        let recorded = cli(&args, ("FREEGUID_RECORD", &cassette));
        let replayed = cli(&args, ("FREEGUID_REPLAY", &cassette));
        assert_eq!(recorded.lines().count(), 4);
        assert_eq!(recorded, replayed, "{selector}");
    }

    let _ = std::fs::remove_dir_all(&dir);
}

#[test]
fn cli_replay_past_end_of_cassette_aborts() {
    let dir = std::env::temp_dir().join("freeguid_cli_replay_exhausted_test");
    std::fs::create_dir_all(&dir).unwrap();
    let cassette = dir.join("short.cassette.yaml");

    cli(&["generate", "--type", "uuidv4", "--count", "2"], ("FREEGUID_RECORD", &cassette));

    let output = Command::new(env!("CARGO_BIN_EXE_freeguid"))
        .args(["generate", "--type", "uuidv4", "--count", "3"])
        .env_remove("FREEGUID_RECORD")
        .env_remove("FREEGUID_DEFAULT_TYPE")
        .env("FREEGUID_REPLAY", &cassette)
        .output()
        .expect("failed to run freeguid binary");
    let stderr = String::from_utf8_lossy(&output.stderr);
    // Rust's panic exit status.
    assert_eq!(output.status.code(), Some(101));
    assert!(stderr.contains("Cassette exhausted"), "{stderr}");

    let _ = std::fs::remove_dir_all(&dir);
}
