use std::path::PathBuf;

use crate::{Cli, run};

const DICTIONARY_XML: &str = r"
    <dic>
      <l>
        <w><c>box</c><d>estuche</d></w>
      </l>
      <l>
        <w><c>hot</c><d>caliente</d></w>
        <w><c>note</c><d>note: see other entry</d></w>
      </l>
    </dic>";

/// Scratch directory with icon assets and a dictionary file, removed on
/// drop so failed tests do not accumulate garbage in the temp dir.
struct Scratch {
    root: PathBuf,
}

impl Scratch {
    fn new(name: &str, icons: &[&str], dictionary_xml: &str) -> Self {
        let root = std::env::temp_dir().join(format!("lupa-{}-{}", name, std::process::id()));
        let icons_dir = root.join("icons");
        std::fs::create_dir_all(&icons_dir).expect("create scratch dirs");
        for icon in icons {
            std::fs::write(icons_dir.join(format!("{icon}.svg")), "<svg/>").expect("write icon");
        }
        // A non-svg file that must be ignored by the listing
        std::fs::write(icons_dir.join("README.txt"), "not an icon").expect("write readme");
        std::fs::write(root.join("en-es.xml"), dictionary_xml).expect("write dictionary");
        Self { root }
    }

    fn cli(&self) -> Cli {
        Cli {
            icons_dir: self.root.join("icons"),
            dictionary: self.root.join("en-es.xml"),
            out: self.root.join("spanish_map.json"),
        }
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.root);
    }
}

#[tokio::test]
async fn builds_the_full_map_end_to_end() {
    let scratch = Scratch::new("e2e", &["box", "hot-tub"], DICTIONARY_XML);
    let cli = scratch.cli();
    let out = cli.out.clone();

    run(cli).await.expect("pipeline succeeds");

    let json = std::fs::read_to_string(&out).expect("output written");
    let map: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    // override wins over the derived "estuche"
    assert_eq!(map["caja"], serde_json::json!(["box"]));
    assert_eq!(map["caliente"], serde_json::json!(["hot-tub"]));
    // "tub" and "hot tub" come from the override table
    assert_eq!(map["tina"], serde_json::json!(["hot-tub"]));
    assert_eq!(map["jacuzi"], serde_json::json!(["hot-tub"]));
    // identity entries
    assert_eq!(map["box"], serde_json::json!(["box"]));
    assert_eq!(map["hot-tub"], serde_json::json!(["hot-tub"]));
}

#[tokio::test]
async fn output_is_byte_identical_across_runs() {
    let scratch = Scratch::new("idempotent", &["box", "hot-tub"], DICTIONARY_XML);

    run(scratch.cli()).await.expect("first run");
    let first = std::fs::read(&scratch.cli().out).expect("first output");

    run(scratch.cli()).await.expect("second run");
    let second = std::fs::read(&scratch.cli().out).expect("second output");

    assert_eq!(first, second);
}

#[tokio::test]
async fn unresolved_term_aborts_before_writing() {
    let scratch = Scratch::new("unresolved", &["zzyzx"], DICTIONARY_XML);
    let cli = scratch.cli();
    let out = cli.out.clone();

    let err = run(cli).await.expect_err("unknown word must fail");
    assert!(err.to_string().contains("zzyzx"), "unexpected error: {err}");
    assert!(!out.exists(), "no output may exist after a failed run");
}

#[tokio::test]
async fn missing_dictionary_file_is_an_error() {
    let scratch = Scratch::new("missing-dict", &["box"], DICTIONARY_XML);
    let mut cli = scratch.cli();
    cli.dictionary = scratch.root.join("does-not-exist.xml");

    assert!(run(cli).await.is_err());
}
