use insta::assert_snapshot;
use std::path::PathBuf;

use ldsheet::loader::{CsvFile, load_table};
use ldsheet::models::OutputFormat;
use ldsheet::{Compiler, Config, Table};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn organization_table(config: &Config) -> Table {
    load_table(&CsvFile::new(fixture("organization.csv")), &config.layout).unwrap()
}

#[test]
fn compiles_fixture_sheet_to_json_blocks() {
    let config = Config::default();
    let compilation = Compiler::new(&config).compile(&organization_table(&config));

    assert!(compilation.diagnostics().is_empty());
    let output = compilation.render(OutputFormat::Json).unwrap();
    assert_snapshot!(output, @r###"
{
	"@context": "http://schema.org",
	"@id": "#org",
	"@type": "Organization",
	"name": "Acme Corp",
	"url": "https://acme.test",
	"sameAs": [
		"https://twitter.com/acme",
		"https://facebook.com/acme"
	],
	"address": {
		"@id": "#address"
	},
	"founder": {
		"@type": "Person",
		"name": "Jo Founder"
	}
}

{
	"@context": "http://schema.org",
	"@id": "#address",
	"@type": "PostalAddress",
	"streetAddress": "1 Main St",
	"addressLocality": "Springfield"
}
"###);
}

#[test]
fn every_block_parses_as_json() {
    let config = Config::default();
    let output = Compiler::new(&config)
        .compile(&organization_table(&config))
        .render(OutputFormat::Json)
        .unwrap();

    let documents: Vec<serde_json::Value> = serde_json::Deserializer::from_str(&output)
        .into_iter()
        .collect::<Result<_, _>>()
        .unwrap();

    assert_eq!(documents.len(), 2);
    for document in &documents {
        assert_eq!(document["@context"], "http://schema.org");
    }
    assert_eq!(documents[0]["address"]["@id"], documents[1]["@id"]);
}

#[test]
fn html_output_shows_blocks_as_text() {
    let config = Config::default();
    let html = Compiler::new(&config)
        .compile(&organization_table(&config))
        .render(OutputFormat::Html)
        .unwrap();

    assert!(html.starts_with("<code style=\"white-space:pre;\">"));
    assert!(html.ends_with("</code>"));
    assert_eq!(
        html.matches("&lt;script type=\"application/ld+json\"&gt;").count(),
        2
    );
    assert!(!html.contains("<script"));
}

#[test]
fn script_output_is_embeddable() {
    let config = Config::default();
    let output = Compiler::new(&config)
        .compile(&organization_table(&config))
        .render(OutputFormat::Script)
        .unwrap();

    assert_eq!(
        output.matches("<script type=\"application/ld+json\">").count(),
        2
    );
    assert_eq!(output.matches("</script>").count(), 2);
}

#[test]
fn reference_lookahead_needs_a_typed_next_row() {
    let mut config = Config::default();
    config.references.include_type = true;

    let compilation = Compiler::new(&config).compile(&organization_table(&config));
    let address = compilation.blocks()[0]
        .get("address")
        .and_then(|node| node.as_object())
        .unwrap();

    // The row after the reference opens `founder` and has no Type of its own
    assert_eq!(address.keys().collect::<Vec<_>>(), vec!["@id"]);
    assert_eq!(compilation.diagnostics().len(), 1);
    assert_eq!(compilation.diagnostics()[0].row(), 4);
}
