use std::sync::Arc;
use std::thread;

use hermetic_core::{ArtType, DesignerConfig, ErrorKind, HermeticError};
use hermetic_runtime::{Designer, GuidelineRepository, RepositoryError, RuntimeConfig, RuntimeError};

fn designer() -> Designer {
    Designer::builder().build().expect("designer should build")
}

#[test]
fn create_and_fetch_guideline() {
    let designer = designer();
    let created = designer
        .create_guideline(
            "Creo",
            "Ignem",
            "10",
            r#"{"name": "Create a fire", "description": "Heat as a torch, {level+1} to ignite"}"#,
        )
        .unwrap();
    assert_eq!(
        created.to_string(),
        "CrIg10: Create a fire. Heat as a torch, 15 to ignite"
    );

    let fetched = designer.guideline("Creo", "Ignem", "10", "0").unwrap();
    assert_eq!(fetched, Some(created.clone()));
    assert_eq!(designer.guidelines("Creo", "Ignem", "10").unwrap(), vec![created]);
}

#[test]
fn abbreviations_resolve_arts() {
    let designer = designer();
    let created = designer
        .create_guideline("Pe", "Ig", "Generic", r#"{"name": "Douse any flame"}"#)
        .unwrap();
    assert_eq!(created.technique().name(), "Perdo");
    assert_eq!(created.to_string(), "PeIgGeneric: Douse any flame.");
    assert_eq!(designer.guidelines("Perdo", "Ignem", "").unwrap().len(), 1);
}

#[test]
fn duplicate_names_are_rejected_within_a_bucket() {
    let designer = designer();
    designer
        .create_guideline("Creo", "Ignem", "5", r#"{"name": "Spark"}"#)
        .unwrap();
    let err = designer
        .create_guideline("Creo", "Ignem", "5", r#"{"name": "Spark"}"#)
        .unwrap_err();
    assert!(matches!(
        err,
        RuntimeError::Repository(RepositoryError::DuplicateGuideline { .. })
    ));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);

    designer
        .create_guideline("Creo", "Ignem", "5", r#"{"name": "Flame"}"#)
        .unwrap();
    let names: Vec<_> = designer
        .guidelines("Creo", "Ignem", "5")
        .unwrap()
        .iter()
        .map(|guideline| guideline.name().to_string())
        .collect();
    assert_eq!(names, vec!["Spark", "Flame"]);
}

#[test]
fn listing_filters_the_shared_bucket() {
    let designer = designer();
    designer
        .create_guideline("Creo", "Ignem", "5", r#"{"name": "Spark"}"#)
        .unwrap();
    designer
        .create_guideline("Rego", "Vim", "10", r#"{"name": "Ward"}"#)
        .unwrap();

    // Fully populated keys land in one bucket.
    assert_eq!(designer.repository().keys().unwrap().len(), 1);
    assert_eq!(
        designer.guideline("Rego", "Vim", "10", "1").unwrap().unwrap().name(),
        "Ward"
    );

    let rego = designer.guidelines("Re", "Vi", "10").unwrap();
    assert_eq!(rego.len(), 1);
    assert_eq!(rego[0].name(), "Ward");
    assert!(designer.guidelines("Creo", "Ignem", "10").unwrap().is_empty());
}

#[test]
fn unknown_arts_are_not_found() {
    let designer = designer();
    let err = designer
        .create_guideline("Ignem", "Creo", "5", r#"{"name": "Backwards"}"#)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NotFound);
}

#[test]
fn malformed_requests_are_invalid_arguments() {
    let designer = designer();
    for (level, body) in [
        ("5", r#"{"name": 3}"#),
        ("5", r#"["Spark"]"#),
        ("5", r#"{"name": "Bad. Name"}"#),
        ("5", r#"{"name": "Spark", "description": "{level"}"#),
        ("five", r#"{"name": "Spark"}"#),
        ("-5", r#"{"name": "Spark"}"#),
    ] {
        let err = designer
            .create_guideline("Creo", "Ignem", level, body)
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument, "{level} {body}: {err}");
    }
    assert!(designer.repository().is_empty().unwrap());
}

#[test]
fn unrenderable_descriptions_are_out_of_range() {
    let designer = designer();
    let err = designer
        .create_guideline("Creo", "Ignem", "32767", r#"{"name": "Sun", "description": "{level+1}"}"#)
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
}

#[test]
fn custom_art_names_seed_the_registry() {
    let designer = Designer::builder()
        .designer_config(DesignerConfig::with_names(
            vec!["Creo".into()],
            vec!["Ignem".into()],
        ))
        .build()
        .unwrap();
    assert_eq!(designer.arts().arts_of_type(&ArtType::TECHNIQUE).unwrap().len(), 1);
    assert!(designer.arts().technique("Rego").is_err());
}

#[test]
fn unseeded_designer_knows_no_arts() {
    let designer = Designer::builder().seed_default_arts(false).build().unwrap();
    assert!(designer.arts().types().unwrap().is_empty());
    assert!(
        designer
            .create_guideline("Creo", "Ignem", "5", r#"{"name": "Spark"}"#)
            .is_err()
    );
}

#[test]
fn loads_content_from_data_dir() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("arts.toml"),
        r#"
        [[types]]
        key = "Hermetic"
        name = "Arcane"
        category = "special"
        arts = [{ name = "Magic" }]
        "#,
    )
    .unwrap();
    std::fs::write(
        dir.path().join("guidelines.ron"),
        r#"(guidelines: [
            (technique: "Creo", form: "Ignem", level: "10", name: "Bonfire",
             description: Some("{level-1} for a torch")),
        ])"#,
    )
    .unwrap();

    let designer = Designer::builder()
        .config(RuntimeConfig {
            data_dir: Some(dir.path().to_path_buf()),
            ..RuntimeConfig::default()
        })
        .build()
        .unwrap();

    assert_eq!(designer.arts().arts_of_type_named("Arcane").unwrap().len(), 1);
    let bonfire = designer.guideline("Creo", "Ignem", "10", "0").unwrap().unwrap();
    assert_eq!(bonfire.to_string(), "CrIg10: Bonfire. 5 for a torch");
}

#[test]
fn broken_content_fails_the_build() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("guidelines.ron"), "(guidelines: [").unwrap();
    let result = Designer::builder().data_dir(dir.path()).build();
    assert!(matches!(result, Err(RuntimeError::Content(_))));
}

#[test]
fn bundled_content_loads() {
    let designer = Designer::builder()
        .data_dir(concat!(env!("CARGO_MANIFEST_DIR"), "/../hermetic/content/data"))
        .build()
        .unwrap();
    assert!(!designer.repository().is_empty().unwrap());
    assert_eq!(designer.arts().arts_of_type_named("Arcane").unwrap().len(), 1);
}

#[test]
fn concurrent_inserts_keep_names_unique() {
    let designer = Arc::new(designer());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let designer = Arc::clone(&designer);
            thread::spawn(move || {
                designer
                    .create_guideline("Creo", "Ignem", "5", r#"{"name": "Spark"}"#)
                    .is_ok()
            })
        })
        .collect();
    let created = handles
        .into_iter()
        .map(|handle| handle.join().unwrap())
        .filter(|ok| *ok)
        .count();
    assert_eq!(created, 1);
    assert_eq!(designer.repository().len().unwrap(), 1);
}
