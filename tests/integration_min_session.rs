// Drives the compiled binary through a PTY so the real event loop and
// crossterm input handling run end to end.
//
// Needs a pseudo terminal (expectrl), so it is Unix-only and ignored by
// default. Run with: `cargo test --test integration_min_session -- --ignored`.

#![cfg(unix)]

use std::time::Duration;

use expectrl::{spawn, Eof};

#[test]
#[ignore]
fn offline_game_starts_and_exits() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let bin = assert_cmd::cargo::cargo_bin("hangman");
    let cmd = format!(
        "{} --offline --length 5 --config {}",
        bin.display(),
        dir.path().join("config.json").display()
    );

    let mut p = spawn(cmd)?;

    // Let the terminal switch to the alternate screen and the word load.
    std::thread::sleep(Duration::from_millis(300));

    p.send("e")?;
    p.send("1")?;
    std::thread::sleep(Duration::from_millis(100));

    p.send("\x1b")?; // ESC

    p.expect(Eof)?;
    Ok(())
}
