use kinsfolk::batch::{build_reference, generate, Options};
use kinsfolk::input::Form;
use kinsfolk::KinsfolkError;

#[test]
fn language_tag_is_configurable() {
    let form = Form::new()
        .with("record-subject", "Q1")
        .with("family-name", "Q2")
        .with("familysearch-collection", "Deutschland, Taufen")
        .with("familysearch-url", "https://familysearch.org/ark:/61903/1:1:T1");
    let options = Options { language: "de".to_string(), ..Options::default() };
    let output = generate(&form, &options).expect("batch").to_string();
    assert_eq!(output, "Q1\tP734\tQ2\tS8091\t\"ark:/61903/1:1:T1\"\tS6333\tde:\"Deutschland, Taufen\"");
}

#[test]
fn foreign_url_rejects_before_any_row() {
    let form = Form::new()
        .with("record-subject", "Q1")
        .with("family-name", "Q2")
        .with("familysearch-url", "https://www.ancestry.com/records/123");
    match generate(&form, &Options::default()) {
        Err(e @ KinsfolkError::MalformedReferenceUrl { .. }) => {
            assert!(e.is_validation());
            assert!(e.to_string().contains("ancestry.com"));
        }
        other => panic!("expected url rejection, got {other:?}"),
    }
}

#[test]
fn empty_url_is_rejected() {
    assert!(build_reference("Texas Births", "", "en").is_err());
}

#[test]
fn line_break_in_collection_rejects_the_batch() {
    let form = Form::new()
        .with("record-subject", "Q1")
        .with("family-name", "Q2")
        .with("familysearch-collection", "Texas\nBirths")
        .with("familysearch-url", "https://www.familysearch.org/ark:/61903/1:1:ABCD-123");
    match generate(&form, &Options::default()) {
        Err(e @ KinsfolkError::MalformedReferenceText { .. }) => assert!(e.is_validation()),
        other => panic!("expected text rejection, got {other:?}"),
    }
}

#[test]
fn tab_in_ark_rejects_the_batch() {
    let form = Form::from_json(
        r#"{"record-subject": "Q1", "family-name": "Q2", "familysearch-collection": "Texas Births",
            "familysearch-url": "https://www.familysearch.org/ark:/61903/1:1:AB\tCD"}"#,
    )
    .expect("form");
    assert!(matches!(
        generate(&form, &Options::default()),
        Err(KinsfolkError::MalformedReferenceText { .. })
    ));
}

#[test]
fn url_ending_at_the_marker_is_rejected() {
    let form = Form::new()
        .with("record-subject", "Q1")
        .with("family-name", "Q2")
        .with("familysearch-collection", "c")
        .with("familysearch-url", "https://www.familysearch.org/");
    assert!(matches!(
        generate(&form, &Options::default()),
        Err(KinsfolkError::MalformedReferenceUrl { .. })
    ));
}

#[test]
fn broken_identifier_leaves_one_line_per_statement() {
    let form = Form::new()
        .with("record-subject", "Q1")
        .with("family-name", "Q2")
        .with("spouse", "Jane - person - Q9\nQ1\tP26")
        .with("familysearch-collection", "Texas Births")
        .with("familysearch-url", "https://www.familysearch.org/ark:/61903/1:1:ABCD-123");
    let batch = generate(&form, &Options::default()).expect("batch");
    assert_eq!(batch.len(), 1);
    assert_eq!(batch.to_string().lines().count(), batch.len());
}
