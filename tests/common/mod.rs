#![allow(dead_code)]

use std::path::Path;

/// A `stammdatenschema` document wrapping `body`.
pub fn document(body: &str) -> String {
    format!(
        r#"<?xml version="1.0" encoding="UTF-8"?>
<xdf:xdatenfelder.stammdatenschema.0102 xmlns:xdf="urn:xoev-de:fim:standard:xdatenfelder_2">
  <xdf:stammdatenschema>
    <xdf:identifikation><xdf:id>S1000</xdf:id></xdf:identifikation>
    <xdf:name>Antrag</xdf:name>
    <xdf:bezeichnungEingabe>Antrag</xdf:bezeichnungEingabe>
    {}
  </xdf:stammdatenschema>
</xdf:xdatenfelder.stammdatenschema.0102>"#,
        body
    )
}

/// Parses cleanly and has no findings.
pub fn clean_document() -> String {
    document(
        r#"<xdf:struktur><xdf:enthaelt>
  <xdf:datenfeld>
    <xdf:identifikation><xdf:id>F1</xdf:id></xdf:identifikation>
    <xdf:name>Vorname</xdf:name>
    <xdf:bezeichnungEingabe>Vorname</xdf:bezeichnungEingabe>
    <xdf:praezisierung>{"minLength":"1","maxLength":"50"}</xdf:praezisierung>
  </xdf:datenfeld>
</xdf:enthaelt></xdf:struktur>"#,
    )
}

/// Parses with exactly two findings on data field `F1`.
pub fn document_with_two_warnings() -> String {
    document(
        r#"<xdf:struktur><xdf:enthaelt>
  <xdf:datenfeld>
    <xdf:identifikation><xdf:id>F1</xdf:id></xdf:identifikation>
    <xdf:name>Vorname</xdf:name>
    <xdf:praezisierung>bad</xdf:praezisierung>
  </xdf:datenfeld>
</xdf:enthaelt></xdf:struktur>"#,
    )
}

/// Not well-formed.
pub fn malformed_document() -> String {
    "<xdf:xdatenfelder.stammdatenschema.0102><unclosed>".to_string()
}

pub fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}
