//! The `tango init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("tango.toml").exists() {
        println!("tango.toml already exists, skipping.");
    } else {
        std::fs::write("tango.toml", SAMPLE_CONFIG)?;
        println!("Created tango.toml");
    }

    std::fs::create_dir_all("words")?;
    let sample_path = std::path::Path::new("words/sample.toml");
    if sample_path.exists() {
        println!("words/sample.toml already exists, skipping.");
    } else {
        std::fs::write(sample_path, SAMPLE_WORDS)?;
        println!("Created words/sample.toml");
    }

    println!("\nNext steps:");
    println!("  1. Point [gateway] base_url at your high-score server");
    println!("  2. Run: tango validate --words words/sample.toml");
    println!("  3. Run: tango practice --count 5");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# tango configuration

[gateway]
type = "http"
base_url = "http://localhost:8000"
timeout_secs = 5

# Offline play:
# [gateway]
# type = "memory"

[words]
path = "words/sample.toml"

[quiz]
count = 50
allow_duplicates = false
shuffle = true
direction = "jp2en"
choices = 8

[game]
duration_secs = 120
feedback_delay_ms = 80
"#;

const SAMPLE_WORDS: &str = r#"[word_list]
name = "sample"

[[entries]]
no = 1
en = "create"
jp = "創り出す"

[[entries]]
no = 2
en = "increase"
jp = "増える"

[[entries]]
no = 3
en = "improve"
jp = "改善する"

[[entries]]
no = 4
en = "mean"
jp = "意味する"

[[entries]]
no = 5
en = "own"
jp = "所有する"

[[entries]]
no = 6
en = "provide"
jp = "供給する"

[[entries]]
no = 7
en = "offer"
jp = "提供する"

[[entries]]
no = 8
en = "allow"
jp = "許す"

[[entries]]
no = 9
en = "suggest"
jp = "提案する"

[[entries]]
no = 10
en = "consider"
jp = "よく考える"
"#;
