use super::*;

#[test]
fn config_error_converts_into_page_error() {
    let err = PageError::from(ConfigError::EmptyText);
    assert!(matches!(err, PageError::Config(ConfigError::EmptyText)));
    assert_eq!(err.to_string(), "typewriter text must not be empty");
}

#[test]
fn json_parse_error_reaches_page_error_through_question_mark() {
    fn load(raw: &str) -> Result<crate::config::PageConfig, PageError> {
        Ok(crate::config::PageConfig::from_json(raw)?)
    }
    let err = load("{not json").unwrap_err();
    assert!(matches!(err, PageError::Config(ConfigError::Parse(_))));
    assert!(err.to_string().starts_with("invalid page config:"));
}

#[test]
fn missing_element_names_the_selector() {
    let err = PageError::MissingElement("#theme-toggle".to_owned());
    assert_eq!(err.to_string(), "missing element: #theme-toggle");
}
