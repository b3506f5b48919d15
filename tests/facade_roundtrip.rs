use assert_fs::prelude::*;
use predicates::prelude::*;
use serde::{Deserialize, Serialize};

use filekit::File;

#[test]
fn output_copy_move_remove_cycle() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;

    // output_file creates the parent chain.
    let report = File::new(temp.child("reports/2026/august.txt").path());
    report.output_file(b"line one\nline two\n")?;
    temp.child("reports/2026/august.txt")
        .assert(predicate::path::is_file());
    assert_eq!(report.read_lines()?, ["line one", "line two", ""]);

    // Copy the whole tree, then verify the mirror.
    let src = File::new(temp.child("reports").path());
    let mirror = temp.child("backup");
    src.copy_to(mirror.path())?;
    mirror
        .child("2026/august.txt")
        .assert(predicate::str::contains("line two"));

    // Move the mirror away and make sure the source side is gone.
    let parked = temp.child("parked");
    File::new(mirror.path()).move_to(parked.path())?;
    mirror.assert(predicate::path::missing());
    parked.child("2026/august.txt").assert(predicate::path::exists());

    // Remove is recursive and idempotent.
    let parked_file = File::new(parked.path());
    parked_file.remove()?;
    parked_file.remove()?;
    parked.assert(predicate::path::missing());

    temp.close()?;
    Ok(())
}

#[test]
fn empty_dir_and_ensure_helpers() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;

    let cache = File::new(temp.child("cache").path());
    cache.empty_dir()?;
    temp.child("cache").assert(predicate::path::is_dir());

    temp.child("cache/junk.txt").write_str("old")?;
    temp.child("cache/sub/more.txt").write_str("older")?;
    cache.empty_dir()?;
    temp.child("cache").assert(predicate::path::is_dir());
    temp.child("cache/junk.txt").assert(predicate::path::missing());
    temp.child("cache/sub").assert(predicate::path::missing());

    let marker = File::new(temp.child("state/ready.marker").path());
    marker.ensure_file()?;
    marker.ensure_file()?;
    temp.child("state/ready.marker").assert(predicate::path::is_file());

    temp.close()?;
    Ok(())
}

#[derive(Debug, Serialize, Deserialize, PartialEq)]
struct Settings {
    name: String,
    retries: u32,
}

#[test]
fn json_and_xml_reads() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;

    let settings = Settings {
        name: "facade".into(),
        retries: 3,
    };
    let config = File::new(temp.child("conf/settings.json").path());
    config.output_json(&settings)?;
    let back: Settings = config.read_json()?;
    assert_eq!(back, settings);

    temp.child("feed.xml").write_str(
        r#"<feed version="1">
             <item id="first">hello</item>
             <item id="second"/>
           </feed>"#,
    )?;
    let root = File::new(temp.child("feed.xml").path()).read_xml()?;
    assert_eq!(root.name, "feed");
    assert_eq!(root.attr("version"), Some("1"));
    assert_eq!(root.children.len(), 2);
    assert_eq!(root.child("item").unwrap().text, "hello");

    temp.close()?;
    Ok(())
}

#[cfg(unix)]
#[test]
fn links_point_back_at_the_wrapped_path() -> Result<(), Box<dyn std::error::Error>> {
    let temp = assert_fs::TempDir::new()?;

    let target = File::new(temp.child("data/source.txt").path());
    target.output_file(b"shared bytes")?;

    target.ensure_link(temp.child("aliases/hard").path())?;
    assert_eq!(
        std::fs::read(temp.child("aliases/hard").path())?,
        b"shared bytes"
    );

    target.ensure_symlink(temp.child("aliases/soft").path())?;
    let soft = File::new(temp.child("aliases/soft").path());
    assert_eq!(soft.read_link()?, target.path());

    temp.close()?;
    Ok(())
}
