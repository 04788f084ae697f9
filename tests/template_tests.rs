//! Tests for path template compilation and parameter extraction

use switchyard::template::PathTemplate;

#[test]
fn literal_template_matches_only_itself() {
    let template = PathTemplate::compile("/health");
    assert!(template.matches("/health"));
    assert!(template.matches("/health/"));
    assert!(!template.matches("/health/x"));
    assert!(!template.matches("/healt"));
    assert!(!template.matches("/HEALTH"));
}

#[test]
fn parameter_matches_and_extracts() {
    let template = PathTemplate::compile("/users/:id");
    assert!(template.matches("/users/42"));
    assert!(!template.matches("/users"));
    assert!(!template.matches("/users/42/posts"));

    let params = template.extract_params("/users/42");
    assert_eq!(params.len(), 1);
    assert_eq!(params[0].0.as_ref(), "id");
    assert_eq!(params[0].1, "42");
}

#[test]
fn trailing_separator_is_tolerated_and_extracts_the_same() {
    let template = PathTemplate::compile("/users/:id");
    assert!(template.matches("/users/42/"));
    let params = template.extract_params("/users/42/");
    assert_eq!(params[0].1, "42");
}

#[test]
fn wildcard_crosses_separators() {
    let template = PathTemplate::compile("/files/*");
    assert!(template.matches("/files/a/b/c"));
    assert!(template.param_names().is_empty());
    assert!(template.extract_params("/files/a/b/c").is_empty());
}

#[test]
fn embedded_wildcard_needs_its_own_segment() {
    let template = PathTemplate::compile("/a/*/c");
    assert!(template.matches("/a/x/c"));
    assert!(template.matches("/a/x/y/c"));
    assert!(!template.matches("/a/c"));
}

#[test]
fn parameters_extract_in_declaration_order() {
    let template = PathTemplate::compile("/a/:x/b/:y");
    let params = template.extract_params("/a/1/b/2");
    let names: Vec<&str> = params.iter().map(|(name, _)| name.as_ref()).collect();
    assert_eq!(names, ["x", "y"]);
    assert_eq!(params[0].1, "1");
    assert_eq!(params[1].1, "2");
}

#[test]
fn percent_encoded_values_decode() {
    let template = PathTemplate::compile("/users/:name");
    let params = template.extract_params("/users/John%20Doe");
    assert_eq!(params[0].1, "John Doe");
}

#[test]
fn non_matching_path_extracts_nothing() {
    let template = PathTemplate::compile("/users/:id");
    assert!(template.extract_params("/posts/1").is_empty());
}

#[test]
fn doubled_separators_collapse() {
    let template = PathTemplate::compile("/a//b");
    assert!(template.matches("/a/b"));
    assert!(!template.matches("/a//b"));
}

#[test]
fn matching_is_case_sensitive() {
    let template = PathTemplate::compile("/Users/:id");
    assert!(template.matches("/Users/42"));
    assert!(!template.matches("/users/42"));
}
