use std::io::Write;
use xml_single_line::{JoinStrategy, collapse_file, pipeline::Pipeline};

#[test]
fn collapses_ssml_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        "<speak version=\"1.0\">\n    <voice name=\"en-US-JennyNeural\">\n        <prosody rate=\"+10%\">\n            Good morning,\n            everyone.\n        </prosody>\n        <break time=\"500ms\"/>\n    </voice>\n</speak>\n"
    )
    .unwrap();

    let out = collapse_file(file.path(), JoinStrategy::Markup).unwrap();
    insta::assert_snapshot!(out, @r#"<speak version="1.0"><voice name="en-US-JennyNeural"><prosody rate="+10%"> Good morning, everyone. </prosody><break time="500ms"/></voice></speak>"#);
}

#[test]
fn pipeline_exposes_each_stage() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "<a>text\n\n  more</a>  \n").unwrap();

    let mut p = Pipeline::new();
    p.read_input(file.path()).unwrap();
    assert_eq!(p.input_lines(), ["<a>text", "", "  more</a>  "]);
    p.keep_lines();
    assert_eq!(p.kept_lines(), ["<a>text", "more</a>"]);
    p.join(JoinStrategy::Markup);
    assert_eq!(p.output(), Some("<a>text more</a>"));
}

#[test]
fn missing_file_reports_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.xml");
    let err = collapse_file(&path, JoinStrategy::Markup).unwrap_err();
    assert!(format!("{err:#}").contains("absent.xml"));
}
