use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

fn dicgen() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("dicgen"));
    cmd.env_remove("DICGEN_INPUT")
        .env_remove("DICGEN_OUTPUT")
        .env_remove("DICGEN_ENCODING")
        .arg("--no-color");
    cmd
}

fn parse_jsonl(stdout: &[u8]) -> Vec<Value> {
    let s = String::from_utf8_lossy(stdout);
    s.lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str::<Value>(l).expect("valid jsonl line"))
        .collect()
}

fn write_file(path: &Path, content: impl AsRef<[u8]>) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn collect(input: &Path, output: &Path) -> Command {
    let mut cmd = dicgen();
    cmd.arg("collect")
        .arg("--input")
        .arg(input)
        .arg("--output")
        .arg(output);
    cmd
}

// ============== collect ==============

#[test]
fn collect_writes_lowercased_vocabulary_in_first_encounter_order() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    write_file(&input.join("a.txt"), "The Cat sat");
    write_file(&input.join("b.txt"), "cat sat down");
    let output = temp.path().join("test.dic");

    collect(&input, &output).assert().success().stdout("");

    assert_eq!(fs::read_to_string(&output).unwrap(), "the\ncat\nsat\ndown\n");
}

#[test]
fn collect_merges_case_variants_across_files() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    write_file(&input.join("a.txt"), "Hello");
    write_file(&input.join("b.txt"), "hello");
    let output = temp.path().join("test.dic");

    collect(&input, &output).assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "hello\n");
}

#[test]
fn collect_splits_on_any_whitespace() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    write_file(&input.join("a.txt"), "foo\tbar  baz\n");
    let output = temp.path().join("test.dic");

    collect(&input, &output).assert().success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "foo\nbar\nbaz\n");
}

#[test]
fn collect_splits_on_information_separators() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    write_file(&input.join("a.txt"), "unit\u{1f}record\u{1e}Group\u{1d}file\u{1c}end");
    let output = temp.path().join("test.dic");

    collect(&input, &output).assert().success();

    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "unit\nrecord\ngroup\nfile\nend\n"
    );
}

#[test]
fn collect_empty_directory_writes_empty_file() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    fs::create_dir(&input).unwrap();
    let output = temp.path().join("test.dic");

    collect(&input, &output)
        .assert()
        .success()
        .stderr(predicate::str::contains("(no tokens)"));

    assert!(output.exists());
    assert_eq!(fs::read_to_string(&output).unwrap(), "");
}

#[test]
fn collect_defaults_output_to_test_dic_in_working_dir() {
    let temp = tempdir().unwrap();
    write_file(&temp.path().join("txt/a.txt"), "Sphinx");

    dicgen()
        .current_dir(temp.path())
        .arg("collect")
        .arg("--input")
        .arg("txt")
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(temp.path().join("test.dic")).unwrap(),
        "sphinx\n"
    );
}

#[test]
fn collect_reads_input_and_output_from_env() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    write_file(&input.join("a.txt"), "From Env");
    let output = temp.path().join("env.dic");

    dicgen()
        .env("DICGEN_INPUT", &input)
        .env("DICGEN_OUTPUT", &output)
        .arg("collect")
        .assert()
        .success();

    assert_eq!(fs::read_to_string(&output).unwrap(), "from\nenv\n");
}

#[test]
fn collect_is_byte_identical_across_runs() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    write_file(&input.join("z.txt"), "Zulu yankee");
    write_file(&input.join("m.txt"), "mike Zulu");
    write_file(&input.join("a.txt"), "alpha mike");
    let output = temp.path().join("test.dic");

    collect(&input, &output).assert().success();
    let first = fs::read(&output).unwrap();
    collect(&input, &output).assert().success();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
    assert_eq!(first, b"alpha\nmike\nzulu\nyankee\n");
}

#[test]
fn collect_missing_input_fails_without_output() {
    let temp = tempdir().unwrap();
    let output = temp.path().join("test.dic");

    collect(&temp.path().join("missing"), &output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("INPUT_NOT_FOUND"))
        .stderr(predicate::str::contains("input directory not found"));

    assert!(!output.exists());
}

#[test]
fn collect_invalid_utf8_fails_in_strict_mode() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    write_file(&input.join("a.txt"), "fine");
    write_file(&input.join("b.txt"), [0xFFu8, 0xFE, b'o', b'k']);
    let output = temp.path().join("test.dic");

    collect(&input, &output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("INVALID_UTF8"));

    assert!(!output.exists());
}

#[test]
fn collect_invalid_utf8_lossy_and_skip() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    write_file(&input.join("a.txt"), "fine");
    write_file(&input.join("b.txt"), [0xFFu8, b' ', b'o', b'k']);
    let output = temp.path().join("test.dic");

    collect(&input, &output)
        .arg("--encoding")
        .arg("lossy")
        .assert()
        .success()
        .stderr(predicate::str::contains("LOSSY_CONVERSION"));
    assert_eq!(
        fs::read_to_string(&output).unwrap(),
        "fine\n\u{FFFD}\nok\n"
    );

    collect(&input, &output)
        .arg("--encoding")
        .arg("skip")
        .assert()
        .success()
        .stderr(predicate::str::contains("FILE_SKIPPED_ENCODING"))
        .stderr(predicate::str::contains("1 skipped"));
    assert_eq!(fs::read_to_string(&output).unwrap(), "fine\n");
}

#[test]
fn collect_binary_file_fails_in_strict_mode() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    write_file(&input.join("blob.bin"), [0x00u8, 0x01, 0x02]);
    let output = temp.path().join("test.dic");

    collect(&input, &output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("BINARY_FILE"));
}

#[test]
fn collect_subdirectory_requires_recursive() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    write_file(&input.join("a.txt"), "top");
    write_file(&input.join("nested/b.txt"), "Inner");
    let output = temp.path().join("test.dic");

    collect(&input, &output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("NOT_A_FILE"));

    collect(&input, &output)
        .arg("--recursive")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&output).unwrap(), "top\ninner\n");
}

#[test]
fn collect_verbose_reports_each_source() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    write_file(&input.join("a.txt"), "The Cat sat");
    write_file(&input.join("b.txt"), "cat sat down");
    let output = temp.path().join("test.dic");

    collect(&input, &output)
        .arg("--verbose")
        .assert()
        .success()
        .stderr(predicate::str::contains("a.txt (3 tokens, 3 distinct)"))
        .stderr(predicate::str::contains("b.txt (3 tokens, 3 distinct)"))
        .stderr(predicate::str::contains("Wrote 4 words"));
}

#[test]
fn collect_quiet_is_silent() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    write_file(&input.join("a.txt"), "quiet please");
    let output = temp.path().join("test.dic");

    collect(&input, &output)
        .arg("--quiet")
        .assert()
        .success()
        .stdout("")
        .stderr("");
}

// ============== count ==============

#[test]
fn count_reports_case_sensitive_frequencies() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    write_file(&input.join("a.txt"), "The Cat sat");
    write_file(&input.join("b.txt"), "cat sat down");

    let assert = dicgen()
        .arg("count")
        .arg("--input")
        .arg(&input)
        .assert()
        .success();
    let items = parse_jsonl(&assert.get_output().stdout);
    let (summary, tokens) = items.split_last().unwrap();

    let pairs: Vec<_> = tokens
        .iter()
        .map(|v| {
            (
                v["token"].as_str().unwrap().to_string(),
                v["count"].as_u64().unwrap(),
            )
        })
        .collect();
    assert_eq!(
        pairs,
        vec![
            ("The".to_string(), 1),
            ("Cat".to_string(), 1),
            ("sat".to_string(), 2),
            ("cat".to_string(), 1),
            ("down".to_string(), 1),
        ]
    );
    assert!(tokens.iter().all(|v| v["kind"] == "token"));

    assert_eq!(summary["kind"], "summary");
    assert_eq!(summary["summary"]["files"], 2);
    assert_eq!(summary["summary"]["skipped"], 0);
    assert_eq!(summary["summary"]["tokens"], 6);
    assert_eq!(summary["summary"]["distinct"], 5);
}

#[test]
fn count_fold_case_raw_by_count() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    write_file(&input.join("a.txt"), "The Cat sat");
    write_file(&input.join("b.txt"), "cat sat down");

    dicgen()
        .arg("--format")
        .arg("raw")
        .arg("count")
        .arg("--input")
        .arg(&input)
        .arg("--fold-case")
        .arg("--order")
        .arg("count")
        .arg("--top")
        .arg("2")
        .assert()
        .success()
        .stdout("cat\t2\nsat\t2\n");
}

#[test]
fn count_missing_input_fails() {
    let temp = tempdir().unwrap();

    dicgen()
        .arg("count")
        .arg("--input")
        .arg(temp.path().join("missing"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("INPUT_NOT_FOUND"));
}

// ============== scan ==============

#[test]
fn scan_lists_sources_in_read_order() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    write_file(&input.join("b.txt"), "b");
    write_file(&input.join("a.txt"), "a");
    write_file(&input.join("sub/c.txt"), "c");

    let assert = dicgen()
        .arg("scan")
        .arg("--input")
        .arg(&input)
        .arg("--recursive")
        .assert()
        .success();
    let items = parse_jsonl(&assert.get_output().stdout);
    let (summary, sources) = items.split_last().unwrap();

    let paths: Vec<_> = sources
        .iter()
        .map(|v| v["path"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(paths, vec!["a.txt", "b.txt", "sub/c.txt"]);
    assert!(sources.iter().all(|v| v["meta"]["size"] == 1));
    assert_eq!(summary["kind"], "summary");
    assert_eq!(summary["summary"]["files"], 3);
    assert_eq!(summary["summary"]["bytes"], 3);
}

#[test]
fn scan_matches_collect_order_across_subdirectories() {
    let temp = tempdir().unwrap();
    let input = temp.path().join("txt");
    write_file(&input.join("a/x.txt"), "Inner");
    write_file(&input.join("a-b.txt"), "outer");
    let output = temp.path().join("test.dic");

    let assert = dicgen()
        .arg("--format")
        .arg("raw")
        .arg("scan")
        .arg("--input")
        .arg(&input)
        .arg("--recursive")
        .assert()
        .success();
    assert_eq!(
        String::from_utf8_lossy(&assert.get_output().stdout),
        "a/x.txt\na-b.txt\n"
    );

    collect(&input, &output)
        .arg("--recursive")
        .assert()
        .success();
    assert_eq!(fs::read_to_string(&output).unwrap(), "inner\nouter\n");
}
