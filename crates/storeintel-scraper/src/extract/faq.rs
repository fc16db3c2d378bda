use std::sync::LazyLock;

use regex::Regex;
use storeintel_core::{BrandInsights, Faq};

use crate::document::{element_text, select_within, ParsedDocument};

use super::{longer_than, truncate_chars};

const CONTAINER_SELECTORS: [&str; 5] = [
    ".faq-item",
    ".faq",
    ".accordion-item",
    ".question-answer",
    ".qa-item",
];
const QUESTION_SELECTOR: &str = "h2, h3, h4, h5, .question, .faq-question";
const ANSWER_SELECTOR: &str = ".answer, .faq-answer, p";

const MIN_QUESTION_CHARS: usize = 10;
const MAX_TEXT_MATCHES: usize = 10;
const MAX_TEXT_ANSWER_CHARS: usize = 300;

/// `Q: ...? A: ...` in running text. Group 1 is the question; the answer is
/// whatever follows the match up to the next `Q:` or `Q.` marker.
static QA_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bQ(?:[:.]\s*|\s+)([^?]+\?)\s*A(?:[:.]\s*|\s+)").expect("valid Q/A regex")
});

/// Start of any question marker, answered or not.
static Q_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bQ[:.]").expect("valid Q marker regex"));

/// FAQ entries from structured FAQ containers, or from `Q:`/`A:` text when
/// the page has none. At most 15.
#[must_use]
pub fn extract_faqs(doc: &ParsedDocument) -> Vec<Faq> {
    let mut faqs = structured_faqs(doc);
    if faqs.is_empty() {
        faqs = text_faqs(&doc.text());
    }
    faqs.truncate(BrandInsights::MAX_FAQS);
    faqs
}

fn structured_faqs(doc: &ParsedDocument) -> Vec<Faq> {
    let mut faqs: Vec<Faq> = Vec::new();
    for selector in CONTAINER_SELECTORS {
        for container in doc.select(selector) {
            let Some(question_el) = select_within(container, QUESTION_SELECTOR).into_iter().next()
            else {
                continue;
            };
            let Some(answer_el) = select_within(container, ANSWER_SELECTOR)
                .into_iter()
                .find(|el| el.id() != question_el.id())
            else {
                continue;
            };

            let faq = Faq {
                question: element_text(question_el),
                answer: element_text(answer_el),
            };
            // Containers matched by more than one selector would repeat.
            if accepted(&faq) && !faqs.contains(&faq) {
                faqs.push(faq);
            }
        }
    }
    faqs
}

fn text_faqs(text: &str) -> Vec<Faq> {
    let markers: Vec<_> = QA_MARKER.captures_iter(text).collect();
    let mut faqs = Vec::new();

    for (i, caps) in markers.iter().enumerate().take(MAX_TEXT_MATCHES) {
        let (Some(whole), Some(question)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let next_match = markers
            .get(i + 1)
            .and_then(|next| next.get(0))
            .map_or(text.len(), |next| next.start());
        let next_q = Q_START
            .find_at(text, whole.end())
            .map_or(text.len(), |m| m.start());
        let answer_end = next_match.min(next_q);
        let faq = Faq {
            question: question.as_str().trim().to_owned(),
            answer: truncate_chars(text[whole.end()..answer_end].trim(), MAX_TEXT_ANSWER_CHARS),
        };
        if accepted(&faq) {
            faqs.push(faq);
        }
    }
    faqs
}

fn accepted(faq: &Faq) -> bool {
    !faq.answer.is_empty() && longer_than(faq.question.trim(), MIN_QUESTION_CHARS)
}
