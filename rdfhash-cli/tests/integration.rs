use assert_cmd::cargo_bin_cmd;
use assert_cmd::Command;
use predicates::prelude::*;
use std::path::PathBuf;
use tempfile::TempDir;

/// `rdfhash` command running in `work_dir` with color disabled.
fn rdfhash_cmd(work_dir: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("rdfhash");
    cmd.current_dir(work_dir.path());
    cmd.env("NO_COLOR", "1");
    cmd.env_remove("RUST_LOG");
    cmd
}

fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

const SIMPLE_SHA256: &str = "3f72eb28e293e31a63b91485e4525133b397512fb90a4fcfb62247a372cf1756";
const EMPTY_SHA256: &str = "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855";

// ============================================================================
// Flags
// ============================================================================

#[test]
fn version_flag() {
    cargo_bin_cmd!("rdfhash")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rdfhash"));
}

#[test]
fn help_flag() {
    cargo_bin_cmd!("rdfhash")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("blank-node-invariant"))
        .stdout(predicate::str::contains("--hash"))
        .stdout(predicate::str::contains("--input-format"));
}

#[test]
fn help_explains_ntriples_parsing() {
    cargo_bin_cmd!("rdfhash")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parsed as Turtle"));
}

#[test]
fn short_debug_flag() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "a.nt", "<ex:a> <ex:p> <ex:b> .\n");
    rdfhash_cmd(&tmp)
        .args(["-d", "a.nt"])
        .assert()
        .success()
        .stdout(format!("{SIMPLE_SHA256}  a.nt\n"))
        .stderr(predicate::str::contains("hashed graph"));
}

#[test]
fn verbose_quiet_conflict() {
    cargo_bin_cmd!("rdfhash")
        .args(["--verbose", "--quiet", "a.ttl"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn missing_files_is_usage_error() {
    cargo_bin_cmd!("rdfhash").assert().code(2);
}

#[test]
fn unsupported_algorithm() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "a.nt", "<ex:a> <ex:p> <ex:b> .\n");
    rdfhash_cmd(&tmp)
        .args(["-a", "md5", "a.nt"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unsupported hash algorithm 'md5'"));
}

// ============================================================================
// Hashing
// ============================================================================

#[test]
fn hashes_file() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "a.nt", "<ex:a> <ex:p> <ex:b> .\n");
    rdfhash_cmd(&tmp)
        .arg("a.nt")
        .assert()
        .success()
        .stdout(format!("{SIMPLE_SHA256}  a.nt\n"));
}

#[test]
fn none_prints_canonical_form() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "blank.ttl", "_:x <ex:p> \"v\" .\n_:y <ex:p> \"v\" .\n");
    rdfhash_cmd(&tmp)
        .args(["--hash", "none", "blank.ttl"])
        .assert()
        .success()
        .stdout("{*(ex:p[\"v\"])}{*(ex:p[\"v\"])}  blank.ttl\n");
}

#[test]
fn empty_file() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "empty.ttl", "");
    rdfhash_cmd(&tmp)
        .arg("empty.ttl")
        .assert()
        .success()
        .stdout(format!("{EMPTY_SHA256}  empty.ttl\n"));
}

#[test]
fn blank_labels_and_order_do_not_matter() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp,
        "one.ttl",
        r#"
        @prefix ex: <http://example.org/> .
        ex:alice ex:knows [ ex:name "Bob" ; ex:age 42 ] .
        "#,
    );
    write(
        &tmp,
        "two.nt",
        concat!(
            "_:b9 <http://example.org/age> \"042\"^^<http://www.w3.org/2001/XMLSchema#integer> .\n",
            "_:b9 <http://example.org/name> \"Bob\" .\n",
            "<http://example.org/alice> <http://example.org/knows> _:b9 .\n",
        ),
    );

    let output = rdfhash_cmd(&tmp)
        .args(["one.ttl", "two.nt"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let digests: Vec<&str> = text
        .lines()
        .map(|line| line.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(digests.len(), 2);
    assert_eq!(digests[0], digests[1]);
    assert!(text.lines().next().unwrap().ends_with("  one.ttl"));
    assert!(text.lines().nth(1).unwrap().ends_with("  two.nt"));
}

#[test]
fn relative_iris_resolve_against_file_location() {
    let tmp = TempDir::new().unwrap();
    let path = write(&tmp, "card.ttl", "<#me> <http://e/p> <> .\n");
    let base = format!(
        "file://{}",
        std::fs::canonicalize(&path).unwrap().to_string_lossy()
    );

    rdfhash_cmd(&tmp)
        .args(["-a", "none", "card.ttl"])
        .assert()
        .success()
        .stdout(format!("{{{base}#me(http://e/p[{base}])}}  card.ttl\n"));
}

#[test]
fn relative_iris_on_stdin_need_base() {
    let tmp = TempDir::new().unwrap();
    rdfhash_cmd(&tmp)
        .args(["-I", "ttl", "-"])
        .write_stdin("<#me> <http://e/p> <> .\n")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("without a base IRI"));

    rdfhash_cmd(&tmp)
        .args(["-I", "ttl", "-a", "none", "--base", "http://example.org/card", "-"])
        .write_stdin("<#me> <http://e/p> <> .\n")
        .assert()
        .success()
        .stdout("{http://example.org/card#me(http://e/p[http://example.org/card])}  -\n");
}

#[test]
fn reads_stdin_with_explicit_format() {
    let tmp = TempDir::new().unwrap();
    rdfhash_cmd(&tmp)
        .args(["-I", "nt", "-"])
        .write_stdin("<ex:a> <ex:p> <ex:b> .\n")
        .assert()
        .success()
        .stdout(format!("{SIMPLE_SHA256}  -\n"));
}

#[test]
fn stdin_needs_format() {
    let tmp = TempDir::new().unwrap();
    rdfhash_cmd(&tmp)
        .arg("-")
        .write_stdin("<ex:a> <ex:p> <ex:b> .\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot guess RDF format from stdin"));
}

#[test]
fn rebase_and_root() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp,
        "old.ttl",
        r#"
        @prefix ex: <http://old.example/> .
        ex:alice ex:knows [ ex:name "Bob" ] .
        ex:carol ex:name "Carol" .
        "#,
    );
    write(
        &tmp,
        "new.ttl",
        r#"
        @prefix ex: <http://new.example/> .
        ex:alice ex:knows [ ex:name "Bob" ] .
        "#,
    );

    let output = rdfhash_cmd(&tmp)
        .args([
            "--rebase",
            "http://old.example/=http://new.example/",
            "--root",
            "http://new.example/alice",
            "old.ttl",
            "new.ttl",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let text = String::from_utf8(output).unwrap();
    let digests: Vec<&str> = text
        .lines()
        .filter_map(|line| line.split_whitespace().next())
        .collect();
    assert_eq!(digests.len(), 2);
    assert_eq!(digests[0], digests[1]);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn missing_file() {
    let tmp = TempDir::new().unwrap();
    rdfhash_cmd(&tmp)
        .arg("nope.ttl")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read nope.ttl"));
}

#[test]
fn unknown_extension() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "data.rdf", "<ex:a> <ex:p> <ex:b> .\n");
    rdfhash_cmd(&tmp)
        .arg("data.rdf")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot guess RDF format of data.rdf"));
}

#[test]
fn syntax_error_stops_run() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "good.nt", "<ex:a> <ex:p> <ex:b> .\n");
    write(&tmp, "bad.ttl", "<ex:a> <ex:p> .\n");
    rdfhash_cmd(&tmp)
        .args(["good.nt", "bad.ttl", "good.nt"])
        .assert()
        .code(1)
        .stdout(format!("{SIMPLE_SHA256}  good.nt\n"))
        .stderr(predicate::str::contains("bad.ttl"));
}

#[test]
fn malformed_literal_strict_and_lenient() {
    let tmp = TempDir::new().unwrap();
    write(
        &tmp,
        "lit.ttl",
        "@prefix xsd: <http://www.w3.org/2001/XMLSchema#> .\n<ex:a> <ex:p> \"many\"^^xsd:integer .\n",
    );
    rdfhash_cmd(&tmp)
        .arg("lit.ttl")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("malformed literal"))
        .stderr(predicate::str::contains("--lenient"));

    rdfhash_cmd(&tmp)
        .args(["--lenient", "-a", "none", "lit.ttl"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "\"many\"^^<http://www.w3.org/2001/XMLSchema#integer>",
        ));
}

#[test]
fn verbose_logs_to_stderr() {
    let tmp = TempDir::new().unwrap();
    write(&tmp, "a.nt", "<ex:a> <ex:p> <ex:b> .\n");
    rdfhash_cmd(&tmp)
        .args(["--verbose", "a.nt"])
        .assert()
        .success()
        .stdout(format!("{SIMPLE_SHA256}  a.nt\n"))
        .stderr(predicate::str::contains("hashed graph"));
}
