use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

const EXPORTED_INDEX: &str = r#"<html>
<head>
<link rel="stylesheet" href="libs/reveal.js/font-awesome-4.7.0/css/font-awesome.min.css">
</head>
<body>
<div class="slides">
<section data-markdown="/markdown.md" data-separator="^[\r\n]+---[\r\n]+$">
</section>
</div>
</body>
</html>
"#;

fn run_command(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_reveal-bundle"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

fn write_markdown(dir: &Path, name: &str, content: &str) -> String {
    let path = dir.join(name);
    fs::write(&path, content).expect("Failed to write markdown file");
    path.to_str().unwrap().to_string()
}

fn create_deck(dir: &Path) -> String {
    let deck = dir.join("export");
    fs::create_dir(&deck).expect("Failed to create deck dir");
    fs::write(deck.join("index.html"), EXPORTED_INDEX).expect("Failed to write index.html");
    deck.to_str().unwrap().to_string()
}

#[test]
fn test_help_exits_cleanly() {
    let output = run_command(&["--help"]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--input"));
    assert!(stdout.contains("--removeLines"));
    assert!(stdout.contains("--dataSeparatorVertical"));
    assert!(stdout.contains("--imageDir"));
}

#[test]
fn test_missing_required_arguments_is_a_usage_error() {
    let output = run_command(&["-i", "slides.md"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("--output"), "Unexpected stderr: {}", stderr);
}

#[test]
fn test_bundle_command() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_markdown(
        temp_dir.path(),
        "slides.md",
        "front\nmatter\n\n# Hello\n\nWorld\n",
    );
    let deck = create_deck(temp_dir.path());

    let output = run_command(&[
        "-i",
        input.as_str(),
        "-o",
        deck.as_str(),
        "-r",
        "2",
        "-d",
        "===",
        "-v",
        "==",
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let html = fs::read_to_string(Path::new(&deck).join("index.html")).unwrap();
    assert!(html.contains(r#"data-separator="^\n===$" data-separator-vertical="^\n==$""#));
    assert!(html.contains("                    # Hello\n                    \n                    World\n"));
    assert!(!html.contains("front"));
    assert!(html.contains(r#"<link rel="stylesheet" href="css/font-awesome.min.css">"#));

    for asset in [
        "css/font-awesome.min.css",
        "fonts/fontawesome-webfont.svg",
        "fonts/FontAwesome.otf",
        "fonts/fontawesome-webfont.woff2",
        "fonts/fontawesome-webfont.woff",
        "fonts/fontawesome-webfont.eot",
    ] {
        assert!(Path::new(&deck).join(asset).is_file(), "Missing asset {}", asset);
    }
}

#[test]
fn test_lowercase_aliases_and_image_dir() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_markdown(temp_dir.path(), "slides.md", "# Slide\n");
    let deck = create_deck(temp_dir.path());
    let images = temp_dir.path().join("assets-img");
    fs::create_dir_all(images.join("sub")).unwrap();
    fs::write(images.join("sub/photo.jpg"), [0xffu8, 0xd8, 0xff]).unwrap();

    let output = run_command(&[
        "--input",
        input.as_str(),
        "--output",
        deck.as_str(),
        "--removelines",
        "0",
        "--imagedir",
        images.to_str().unwrap(),
    ]);

    assert!(output.status.success(), "Command failed: {:?}", output);
    let copied = Path::new(&deck).join("assets-img/sub/photo.jpg");
    assert_eq!(fs::read(copied).unwrap(), vec![0xffu8, 0xd8, 0xff]);
    let html = fs::read_to_string(Path::new(&deck).join("index.html")).unwrap();
    assert!(html.contains("                    # Slide\n"));
}

#[test]
fn test_rejects_non_markdown_input() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_markdown(temp_dir.path(), "slides.txt", "# Slide\n");
    let deck = create_deck(temp_dir.path());

    let output = run_command(&["-i", input.as_str(), "-o", deck.as_str()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("is not a markdown file"), "Unexpected stderr: {}", stderr);
    assert_eq!(
        fs::read_to_string(Path::new(&deck).join("index.html")).unwrap(),
        EXPORTED_INDEX
    );
    assert!(!Path::new(&deck).join("css").exists());
}

#[test]
fn test_missing_index_html_fails_without_writes() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let input = write_markdown(temp_dir.path(), "slides.md", "# Slide\n");
    let deck = temp_dir.path().join("empty-export");
    fs::create_dir(&deck).unwrap();

    let output = run_command(&["-i", input.as_str(), "-o", deck.to_str().unwrap()]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("index.html not found"), "Unexpected stderr: {}", stderr);
    assert_eq!(fs::read_dir(&deck).unwrap().count(), 0);
}
