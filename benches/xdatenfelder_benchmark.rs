use std::path::Path;

use divan::Bencher;
use xdlint::{Output, SchemaParser, XDatenfelderParser};

fn main() {
    divan::main();
}

/// A schema with `count` data fields, every other one missing its
/// `bezeichnungEingabe` and carrying a broken `praezisierung`.
fn schema_document(count: usize) -> String {
    let mut fields = String::new();
    for i in 0..count {
        let extra = if i % 2 == 0 {
            "<xdf:bezeichnungEingabe>Feld</xdf:bezeichnungEingabe>\
             <xdf:praezisierung>{\"minLength\":\"1\"}</xdf:praezisierung>"
        } else {
            "<xdf:praezisierung>{minLength: 1}</xdf:praezisierung>"
        };
        fields.push_str(&format!(
            "<xdf:datenfeld><xdf:identifikation><xdf:id>F{}</xdf:id></xdf:identifikation>\
             <xdf:name>Feld</xdf:name>{}</xdf:datenfeld>",
            i, extra
        ));
    }

    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<xdf:xdatenfelder.stammdatenschema.0102 xmlns:xdf="urn:xoev-de:fim:standard:xdatenfelder_2">
  <xdf:stammdatenschema>
    <xdf:identifikation><xdf:id>S1</xdf:id></xdf:identifikation>
    <xdf:name>Bench</xdf:name>
    <xdf:bezeichnungEingabe>Bench</xdf:bezeichnungEingabe>
    <xdf:struktur><xdf:enthaelt>{}</xdf:enthaelt></xdf:struktur>
  </xdf:stammdatenschema>
</xdf:xdatenfelder.stammdatenschema.0102>"#,
        fields
    )
}

#[divan::bench(args = [10, 100, 1000])]
fn parse_schema(bencher: Bencher, count: usize) {
    let parser = XDatenfelderParser::new();
    let text = schema_document(count);

    bencher.bench_local(move || parser.parse(&text).expect("Failed to parse schema"));
}

#[divan::bench(args = [10, 100, 1000])]
fn flatten_and_render(bencher: Bencher, count: usize) {
    let message = XDatenfelderParser::new()
        .parse(&schema_document(count))
        .expect("Failed to parse schema");
    let output = Output::plain();
    let path = Path::new("schemas/bench.xml");

    bencher.bench_local(move || {
        message
            .warnings
            .flatten()
            .into_iter()
            .map(|warning| output.format_warning(path, warning))
            .collect::<Vec<_>>()
    });
}
