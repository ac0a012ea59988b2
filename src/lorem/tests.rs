use regex::Regex;

use super::core::corpus;
use super::*;
use crate::common::random::seeded;
use crate::error::DevError;

fn opts(unit: LoremUnit, count: usize, start_with_lorem: bool, format: LoremFormat) -> LoremOptions {
    LoremOptions {
        unit,
        count,
        start_with_lorem,
        format,
    }
}

// ── Words ───────────────────────────────────────────────────────────

#[test]
fn test_words_start_with_lorem() {
    let text = generate(LoremUnit::Words, 10, true, LoremFormat::Plain).unwrap();
    let tokens: Vec<&str> = text.split(' ').collect();
    assert_eq!(tokens.len(), 10);
    assert_eq!(tokens[0], "Lorem");
}

#[test]
fn test_words_random_come_from_corpus() {
    let text = generate(LoremUnit::Words, 50, false, LoremFormat::Plain).unwrap();
    let tokens: Vec<&str> = text.split(' ').collect();
    assert_eq!(tokens.len(), 50);
    assert!(tokens.iter().all(|t| corpus().contains(t)));
}

#[test]
fn test_single_word_with_lorem() {
    assert_eq!(
        generate(LoremUnit::Words, 1, true, LoremFormat::Plain).unwrap(),
        "Lorem"
    );
}

// ── Sentences ───────────────────────────────────────────────────────

#[test]
fn test_sentence_shape() {
    let mut rng = seeded(3);
    let text = generate_with(
        &opts(LoremUnit::Sentences, 20, false, LoremFormat::Plain),
        &mut rng,
    )
    .unwrap();
    let parts: Vec<&str> = text.split(". ").collect();
    assert_eq!(parts.len(), 20);
    assert!(text.ends_with('.'));
    for part in parts {
        let part = part.trim_end_matches('.');
        let n = part.split(' ').count();
        assert!((8..=22).contains(&n), "sentence has {} words", n);
        assert!(part.chars().next().unwrap().is_uppercase());
    }
}

#[test]
fn test_sentences_start_with_lorem() {
    let text = generate(LoremUnit::Sentences, 3, true, LoremFormat::Plain).unwrap();
    assert!(text.starts_with("Lorem ipsum dolor sit amet, consectetur adipiscing elit. "));
}

// ── Paragraphs ──────────────────────────────────────────────────────

#[test]
fn test_paragraphs_plain_separated_by_blank_line() {
    let text = generate(LoremUnit::Paragraphs, 4, false, LoremFormat::Plain).unwrap();
    let paras: Vec<&str> = text.split("\n\n").collect();
    assert_eq!(paras.len(), 4);
    for p in paras {
        assert!(!p.contains('\n'));
        let sentences = p.matches(". ").count() + 1;
        assert!((3..=6).contains(&sentences), "paragraph has {} sentences", sentences);
    }
}

#[test]
fn test_paragraphs_html() {
    let text = generate(LoremUnit::Paragraphs, 2, false, LoremFormat::Html).unwrap();
    let re = Regex::new(r"<p>[^<]*</p>").unwrap();
    assert_eq!(re.find_iter(&text).count(), 2);
    let between = re.replace_all(&text, "");
    assert!(between.chars().all(char::is_whitespace));
    assert!(text.contains("</p>\n\n<p>"));
}

#[test]
fn test_paragraphs_start_with_lorem() {
    let text = generate(LoremUnit::Paragraphs, 2, true, LoremFormat::Html).unwrap();
    assert!(text.starts_with("<p>Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do"));
    assert!(text.contains("id est laborum.</p>"));
}

#[test]
fn test_markdown_matches_plain() {
    let plain = generate_with(
        &opts(LoremUnit::Paragraphs, 3, true, LoremFormat::Plain),
        &mut seeded(11),
    )
    .unwrap();
    let markdown = generate_with(
        &opts(LoremUnit::Paragraphs, 3, true, LoremFormat::Markdown),
        &mut seeded(11),
    )
    .unwrap();
    assert_eq!(plain, markdown);
}

#[test]
fn test_html_ignored_for_words() {
    let text = generate(LoremUnit::Words, 5, true, LoremFormat::Html).unwrap();
    assert!(!text.contains("<p>"));
}

// ── Counts and seeding ──────────────────────────────────────────────

#[test]
fn test_count_out_of_range() {
    for count in [0, 101] {
        assert!(matches!(
            generate(LoremUnit::Words, count, false, LoremFormat::Plain),
            Err(DevError::InvalidCount { min: 1, max: 100, .. })
        ));
    }
}

#[test]
fn test_count_bounds_accepted() {
    assert!(generate(LoremUnit::Paragraphs, 1, false, LoremFormat::Plain).is_ok());
    let text = generate(LoremUnit::Words, 100, false, LoremFormat::Plain).unwrap();
    assert_eq!(text.split(' ').count(), 100);
}

#[test]
fn test_seeded_is_reproducible() {
    let o = opts(LoremUnit::Sentences, 5, false, LoremFormat::Plain);
    let a = generate_with(&o, &mut seeded(2024)).unwrap();
    let b = generate_with(&o, &mut seeded(2024)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_parse_names() {
    assert_eq!("Paragraphs".parse::<LoremUnit>().unwrap(), LoremUnit::Paragraphs);
    assert_eq!("word".parse::<LoremUnit>().unwrap(), LoremUnit::Words);
    assert_eq!("md".parse::<LoremFormat>().unwrap(), LoremFormat::Markdown);
    assert!("lines".parse::<LoremUnit>().is_err());
    assert_eq!(LoremUnit::Sentences.to_string(), "sentences");
}

#[test]
fn test_default_options() {
    let d = LoremOptions::default();
    assert_eq!(d.unit, LoremUnit::Paragraphs);
    assert_eq!(d.count, 5);
    assert!(d.start_with_lorem);
    assert_eq!(d.format, LoremFormat::Plain);
}
