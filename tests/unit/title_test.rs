//! Unit tests for normalization and the title grammar

use caltally::normalize;
use caltally::title::{ParserOptions, ParserOptionsError, TitleError, TitleParser};
use caltally::ParsedTitle;

fn parser() -> TitleParser {
    TitleParser::new(ParserOptions::new("ME").unwrap())
}

#[test]
fn normalize_empty_yields_empty() {
    assert_eq!(normalize(""), "");
    assert_eq!(normalize("\u{a0}\u{a0}"), "");
}

#[test]
fn full_title_yields_every_field() {
    let parsed = parser()
        .parse("【Alpha Tower | Acme Co.】Inspection / John・Mary")
        .unwrap();
    assert_eq!(
        parsed,
        ParsedTitle {
            work_name: "Alpha Tower".to_string(),
            client_name: "Acme Co.".to_string(),
            task: "Inspection".to_string(),
            workers: vec!["John".to_string(), "Mary".to_string()],
        }
    );
}

#[test]
fn bare_title_gets_empty_client_and_fallback_worker() {
    let parsed = parser().parse("【Beta Site】Cleanup").unwrap();
    assert_eq!(parsed.client_name, "");
    assert_eq!(parsed.workers, vec!["ME"]);
}

#[test]
fn default_parser_uses_unassigned() {
    let parsed = TitleParser::default().parse("【Beta Site】Cleanup").unwrap();
    assert_eq!(parsed.workers, vec!["unassigned"]);
}

#[test]
fn full_width_and_half_width_titles_parse_identically() {
    let half = parser().parse("【Site A|Acme】Survey/John,Mary").unwrap();
    let full = parser().parse("【Ｓｉｔｅ Ａ｜Ａｃｍｅ】Ｓｕｒｖｅｙ／Ｊｏｈｎ，Ｍａｒｙ").unwrap();
    assert_eq!(half, full);
}

#[test]
fn non_breaking_spaces_are_trimmed() {
    let parsed = parser()
        .parse("\u{a0}【Gamma\u{a0}|\u{a0}Client】Survey\u{a0}/\u{a0}John\u{a0}")
        .unwrap();
    assert_eq!(parsed.work_name, "Gamma");
    assert_eq!(parsed.client_name, "Client");
    assert_eq!(parsed.task, "Survey");
    assert_eq!(parsed.workers, vec!["John"]);
}

#[test]
fn worker_tokens_are_trimmed_individually() {
    let parsed = parser().parse("【W】T / a ・ b , c").unwrap();
    assert_eq!(parsed.workers, vec!["a", "b", "c"]);
}

#[test]
fn unbracketed_title_is_rejected() {
    assert_eq!(
        parser().parse("not bracketed"),
        Err(TitleError::NoMatch {
            title: "not bracketed".to_string()
        })
    );
}

#[test]
fn leading_text_rejects_the_whole_title() {
    assert!(matches!(
        parser().parse("Re: 【Alpha】Inspection"),
        Err(TitleError::NoMatch { .. })
    ));
}

#[test]
fn missing_task_or_work_is_rejected() {
    assert!(parser().parse("【Alpha】").is_err());
    assert!(parser().parse("【】Inspection").is_err());
    assert!(parser().parse("【 | Acme】Inspection").is_err());
    assert!(parser().parse("【Alpha】   ").is_err());
}

#[test]
fn empty_title_is_its_own_error() {
    assert_eq!(parser().parse(""), Err(TitleError::Empty));
    assert_eq!(parser().parse(" \u{3000} "), Err(TitleError::Empty));
}

#[test]
fn fallback_worker_is_validated() {
    assert_eq!(
        ParserOptions::new("  "),
        Err(ParserOptionsError::EmptyFallbackWorker)
    );
    assert!(matches!(
        ParserOptions::new("a・b"),
        Err(ParserOptionsError::DelimiterInFallbackWorker(_))
    ));
    assert_eq!(ParserOptions::new(" ME ").unwrap().fallback_worker(), "ME");
}
