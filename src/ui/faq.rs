//! FAQ accordion

use crate::i18n::Translator;

/// Number of question/answer pairs on the home page
pub const FAQ_COUNT: usize = 5;

/// A translated question and answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqItem {
    pub question: String,
    pub answer: String,
}

/// Question and answer keys of the 1-based item `n`
pub fn faq_keys(n: usize) -> (String, String) {
    (format!("faq.q{}", n), format!("faq.a{}", n))
}

/// Translated FAQ entries (`faq.q1`/`faq.a1` ...) for the current locale
pub fn faq_items(translator: &Translator) -> Vec<FaqItem> {
    (1..=FAQ_COUNT)
        .map(|n| {
            let (question, answer) = faq_keys(n);
            FaqItem {
                question: translator.t(&question),
                answer: translator.t(&answer),
            }
        })
        .collect()
}

/// At most one item open at a time
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
}

impl FaqAccordion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open `index`, or close it if it is already open
    pub fn toggle(&mut self, index: usize) {
        self.open = if self.open == Some(index) { None } else { Some(index) };
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    pub fn open_item(&self) -> Option<usize> {
        self.open
    }
}
