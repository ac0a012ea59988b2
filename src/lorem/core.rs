use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use log::trace;
use rand::Rng;

use crate::error::{DevError, Result, check_count};

pub const MIN_COUNT: usize = 1;
pub const MAX_COUNT: usize = 100;

/// Words per generated sentence.
const SENTENCE_WORDS: RangeInclusive<usize> = 8..=22;
/// Sentences per generated paragraph.
const PARAGRAPH_SENTENCES: RangeInclusive<usize> = 3..=6;

const LOREM_WORD: &str = "Lorem";
const LOREM_SENTENCE: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit.";
const LOREM_PARAGRAPH: &str = "Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud \
exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat. Duis aute irure dolor in \
reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur. Excepteur sint \
occaecat cupidatat non proident, sunt in culpa qui officia deserunt mollit anim id est laborum.";

/// Sampling corpus, uniform with replacement.
static WORDS: &[&str] = &[
    "a", "ac", "accumsan", "ad", "adipiscing", "aenean", "aliquam", "aliquet", "amet", "ante",
    "aptent", "arcu", "at", "auctor", "augue", "bibendum", "blandit", "commodo", "condimentum",
    "congue", "consectetur", "consequat", "conubia", "convallis", "cras", "cubilia",
    "curabitur", "curae", "cursus", "dapibus", "diam", "dictum", "dictumst", "dignissim",
    "dis", "dolor", "donec", "dui", "duis", "efficitur", "egestas", "eget", "eleifend",
    "elementum", "elit", "enim", "erat", "eros", "est", "et", "etiam", "eu", "euismod", "ex",
    "facilisi", "facilisis", "fames", "faucibus", "felis", "fermentum", "feugiat", "finibus",
    "fringilla", "fusce", "gravida", "habitant", "habitasse", "hac", "hendrerit", "himenaeos",
    "iaculis", "id", "imperdiet", "in", "inceptos", "integer", "interdum", "ipsum", "justo",
    "lacinia", "lacus", "laoreet", "lectus", "leo", "libero", "ligula", "litora", "lobortis",
    "luctus", "maecenas", "magna", "magnis", "malesuada", "massa", "mattis", "mauris",
    "maximus", "metus", "mi", "molestie", "mollis", "montes", "morbi", "mus", "nam",
    "nascetur", "natoque", "nec", "neque", "netus", "nibh", "nisi", "nisl", "non", "nostra",
    "nulla", "nullam", "nunc", "odio", "orci", "ornare", "parturient", "pellentesque",
    "penatibus", "per", "pharetra", "phasellus", "placerat", "platea", "porta", "porttitor",
    "posuere", "potenti", "praesent", "pretium", "primis", "proin", "pulvinar", "purus",
    "quam", "quis", "quisque", "rhoncus", "ridiculus", "risus", "rutrum", "sagittis", "sapien",
    "scelerisque", "sed", "sem", "semper", "senectus", "sit", "sociosqu", "sodales",
    "sollicitudin", "suscipit", "suspendisse", "taciti", "tellus", "tempor", "tempus",
    "tincidunt", "torquent", "tortor", "tristique", "turpis", "ullamcorper", "ultrices",
    "ultricies", "urna", "ut", "varius", "vehicula", "vel", "velit", "venenatis", "vestibulum",
    "vitae", "vivamus", "viverra", "volutpat", "vulputate", "accusamus", "accusantium",
    "adipisci", "alias", "aliquid", "animi", "aperiam", "architecto", "asperiores",
    "aspernatur", "assumenda", "atque", "autem", "beatae", "blanditiis", "commodi",
    "consequatur", "consequuntur", "corporis", "corrupti", "culpa", "cum", "cumque",
    "cupiditate", "debitis", "delectus", "deleniti", "deserunt", "dicta", "dignissimos",
    "distinctio", "dolore", "dolorem", "doloremque", "dolores", "doloribus", "dolorum",
    "ducimus", "earum", "eius", "eligendi", "eos", "eveniet", "excepturi", "exercitationem",
    "expedita", "explicabo", "facere", "facilis", "fuga", "fugiat", "fugit", "harum", "hic",
    "illo", "illum", "impedit", "incidunt", "inventore", "ipsa", "ipsam", "iste", "itaque",
    "iure", "iusto", "labore", "laboriosam", "laborum", "laudantium", "magnam", "magni",
    "maiores", "maxime", "minima", "minus", "modi", "molestiae", "molestias", "mollitia",
    "natus", "necessitatibus", "nemo", "nesciunt", "nihil", "nobis", "nostrum", "numquam",
    "obcaecati", "odit", "officia", "officiis", "omnis", "optio", "pariatur", "perferendis",
    "perspiciatis", "placeat", "porro", "possimus", "praesentium", "provident", "quae",
    "quaerat", "quas", "quasi", "qui", "quia", "quibusdam", "quidem", "quisquam", "quo",
    "quod", "quos", "ratione", "recusandae", "reiciendis", "rem", "repellat", "repellendus",
    "reprehenderit", "repudiandae", "rerum", "saepe", "sapiente", "sequi", "similique", "sint",
    "soluta", "sunt", "tempora", "tempore", "temporibus", "tenetur", "totam", "ullam", "unde",
    "veniam", "veritatis", "vero", "voluptas", "voluptate", "voluptatem", "voluptates",
    "voluptatibus", "voluptatum", "aliqua", "aliquip", "anim", "aute", "cillum", "cupidatat",
    "eiusmod", "esse", "excepteur", "incididunt", "irure", "laboris", "minim", "nostrud",
    "occaecat", "proident", "ullamco", "exercitation",
];

/// Unit that `count` is measured in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoremUnit {
    Words,
    Sentences,
    Paragraphs,
}

impl fmt::Display for LoremUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoremUnit::Words => "words",
            LoremUnit::Sentences => "sentences",
            LoremUnit::Paragraphs => "paragraphs",
        })
    }
}

impl FromStr for LoremUnit {
    type Err = DevError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "words" | "word" => Ok(LoremUnit::Words),
            "sentences" | "sentence" => Ok(LoremUnit::Sentences),
            "paragraphs" | "paragraph" => Ok(LoremUnit::Paragraphs),
            _ => Err(DevError::UnknownOption {
                kind: "lorem unit",
                value: s.to_string(),
            }),
        }
    }
}

/// Output markup. `Html` wraps paragraphs in `<p>` tags; `Markdown`
/// output is identical to `Plain` since blank-line separated paragraphs
/// are already Markdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoremFormat {
    #[default]
    Plain,
    Html,
    Markdown,
}

impl fmt::Display for LoremFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            LoremFormat::Plain => "plain",
            LoremFormat::Html => "html",
            LoremFormat::Markdown => "markdown",
        })
    }
}

impl FromStr for LoremFormat {
    type Err = DevError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "plain" | "text" => Ok(LoremFormat::Plain),
            "html" => Ok(LoremFormat::Html),
            "markdown" | "md" => Ok(LoremFormat::Markdown),
            _ => Err(DevError::UnknownOption {
                kind: "lorem format",
                value: s.to_string(),
            }),
        }
    }
}

/// Configuration for a generation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoremOptions {
    pub unit: LoremUnit,
    /// Number of units, 1 through 100.
    pub count: usize,
    /// Replace the first unit with the canonical "Lorem ipsum…" opening.
    pub start_with_lorem: bool,
    pub format: LoremFormat,
}

impl Default for LoremOptions {
    fn default() -> Self {
        Self {
            unit: LoremUnit::Paragraphs,
            count: 5,
            start_with_lorem: true,
            format: LoremFormat::Plain,
        }
    }
}

/// Generate filler text using the thread-local random generator.
pub fn generate(
    unit: LoremUnit,
    count: usize,
    start_with_lorem: bool,
    format: LoremFormat,
) -> Result<String> {
    let opts = LoremOptions {
        unit,
        count,
        start_with_lorem,
        format,
    };
    generate_with(&opts, &mut rand::rng())
}

/// Generate filler text from a caller-supplied generator. Seeding `rng`
/// makes the output reproducible.
pub fn generate_with<R: Rng>(opts: &LoremOptions, rng: &mut R) -> Result<String> {
    check_count(opts.count, MIN_COUNT, MAX_COUNT)?;
    trace!("generating {} {}", opts.count, opts.unit);

    let text = match opts.unit {
        LoremUnit::Words => words(opts.count, opts.start_with_lorem, rng),
        LoremUnit::Sentences => sentences(opts.count, opts.start_with_lorem, rng),
        LoremUnit::Paragraphs => {
            let paras = paragraphs(opts.count, opts.start_with_lorem, rng);
            match opts.format {
                LoremFormat::Html => paras
                    .iter()
                    .map(|p| format!("<p>{}</p>", p))
                    .collect::<Vec<_>>()
                    .join("\n\n"),
                LoremFormat::Plain | LoremFormat::Markdown => paras.join("\n\n"),
            }
        }
    };
    Ok(text)
}

fn random_word<R: Rng>(rng: &mut R) -> &'static str {
    WORDS[rng.random_range(0..WORDS.len())]
}

fn words<R: Rng>(count: usize, start_with_lorem: bool, rng: &mut R) -> String {
    let mut out: Vec<&str> = Vec::with_capacity(count);
    if start_with_lorem {
        out.push(LOREM_WORD);
    }
    while out.len() < count {
        out.push(random_word(rng));
    }
    out.join(" ")
}

fn sentence<R: Rng>(rng: &mut R) -> String {
    let n = rng.random_range(SENTENCE_WORDS);
    let mut s = capitalize(random_word(rng));
    for _ in 1..n {
        s.push(' ');
        s.push_str(random_word(rng));
    }
    s.push('.');
    s
}

fn sentences<R: Rng>(count: usize, start_with_lorem: bool, rng: &mut R) -> String {
    let mut out: Vec<String> = Vec::with_capacity(count);
    if start_with_lorem {
        out.push(LOREM_SENTENCE.to_string());
    }
    while out.len() < count {
        out.push(sentence(rng));
    }
    out.join(" ")
}

fn paragraph<R: Rng>(rng: &mut R) -> String {
    let n = rng.random_range(PARAGRAPH_SENTENCES);
    sentences(n, false, rng)
}

fn paragraphs<R: Rng>(count: usize, start_with_lorem: bool, rng: &mut R) -> Vec<String> {
    let mut out: Vec<String> = Vec::with_capacity(count);
    if start_with_lorem {
        out.push(LOREM_PARAGRAPH.to_string());
    }
    while out.len() < count {
        out.push(paragraph(rng));
    }
    out
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
pub(crate) fn corpus() -> &'static [&'static str] {
    WORDS
}
