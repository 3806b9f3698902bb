//! Lemma dictionary generation.
//!
//! Groups the surface forms found in a corpus under a canonical form so the
//! result can be written in the `<lemma> <form1> <form2> ...` format that
//! [`LemmaDictionary`](crate::lemma_dictionary::LemmaDictionary) reads. The
//! canonical form is the Snowball stem of the word.

use std::{
    collections::{BTreeMap, BTreeSet, HashSet},
    io::Write,
    sync::LazyLock,
};

use rust_stemmers::{Algorithm, Stemmer};

use crate::error::Result;

static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "и", "в", "во", "не", "что", "он", "на", "я", "с", "со", "как", "а", "то", "все", "она",
        "так", "его", "но", "да", "ты", "к", "у", "же", "вы", "за", "бы", "по", "только", "ее",
        "мне", "было", "вот", "от", "меня", "еще", "нет", "о", "из", "ему", "теперь", "когда",
        "даже", "ну", "вдруг", "ли", "если", "уже", "или", "ни", "быть", "был", "него", "до",
        "вас", "нибудь", "опять", "уж", "вам", "ведь", "там", "потом", "себя", "ничего", "ей",
        "может", "они", "тут", "где", "есть", "надо", "ней", "для", "мы", "тебя", "их", "чем",
        "была", "сам", "чтоб", "без", "будто", "чего", "раз", "тоже", "себе", "под", "будет",
        "ж", "тогда", "кто", "этот", "того", "потому", "этого", "какой", "совсем", "ним",
        "здесь", "этом", "один", "почти", "мой", "тем", "чтобы", "нее", "сейчас", "были",
        "куда", "зачем", "всех", "никогда", "можно", "при", "наконец", "два", "об", "другой",
        "хоть", "после", "над", "больше", "тот", "через", "эти", "нас", "про", "всего", "них",
        "какая", "много", "разве", "три", "эту", "моя", "впрочем", "хорошо", "свою", "этой",
        "перед", "иногда", "лучше", "чуть", "том", "нельзя", "такой", "им", "более", "всегда",
        "конечно", "всю", "между",
    ]
    .into_iter()
    .collect()
});

pub type LemmaGroups = BTreeMap<String, BTreeSet<String>>;

pub struct Analyzer {
    stemmer: Stemmer,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    pub fn new() -> Self {
        Self {
            stemmer: Stemmer::create(Algorithm::Russian),
        }
    }

    /// Multi-letter, purely Cyrillic, not a stop word.
    pub fn is_content_word(token: &str) -> bool {
        token.chars().count() > 1
            && token
                .chars()
                .all(|c| matches!(c, 'а'..='я' | 'А'..='Я' | 'ё' | 'Ё'))
            && !STOP_WORDS.contains(token.to_lowercase().as_str())
    }

    pub fn lemma(&self, token: &str) -> String {
        self.stemmer.stem(&token.to_lowercase()).into_owned()
    }

    /// Content words of `tokens`, grouped by lemma.
    pub fn lemma_groups<'a>(&self, tokens: impl IntoIterator<Item = &'a str>) -> LemmaGroups {
        let mut groups = LemmaGroups::new();

        for token in tokens.into_iter().filter(|t| Self::is_content_word(t)) {
            groups
                .entry(self.lemma(token))
                .or_default()
                .insert(token.to_lowercase());
        }

        groups
    }
}

pub fn write_lemmas(groups: &LemmaGroups, writer: &mut impl Write) -> Result<()> {
    for (lemma, forms) in groups {
        let forms = forms.iter().map(String::as_str).collect::<Vec<_>>().join(" ");
        writeln!(writer, "{lemma} {forms}")?;
    }

    Ok(())
}

/// One distinct content word per line, sorted.
pub fn write_tokens<'a>(
    tokens: impl IntoIterator<Item = &'a str>,
    writer: &mut impl Write,
) -> Result<()> {
    let tokens = tokens
        .into_iter()
        .filter(|t| Analyzer::is_content_word(t))
        .map(str::to_lowercase)
        .collect::<BTreeSet<_>>();

    for token in tokens {
        writeln!(writer, "{token}")?;
    }

    Ok(())
}
