// src/domain/article/bilingual.rs
use crate::domain::article::entity::Article;
use crate::domain::article::value_objects::Locale;

/// Word budget applied to list-view titles.
pub const TITLE_WORD_BUDGET: usize = 12;
/// Word budget applied to summaries derived from content.
pub const SUMMARY_WORD_BUDGET: usize = 20;

const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BilingualField {
    Title,
    Summary,
    Content,
}

/// Resolve one bilingual field pair for a display locale.
///
/// `ur` prefers the Urdu variant and falls back to English when the Urdu
/// field is empty. `en` returns the English field directly and never falls
/// back to Urdu.
pub fn resolve_field<'a>(article: &'a Article, field: BilingualField, locale: Locale) -> &'a str {
    let (english, urdu) = match field {
        BilingualField::Title => (&article.title, &article.title_urdu),
        BilingualField::Summary => (&article.summary, &article.summary_urdu),
        BilingualField::Content => (&article.content, &article.content_urdu),
    };

    let english = english.as_deref().unwrap_or("");
    match locale {
        Locale::Ur => {
            let urdu = urdu.as_deref().unwrap_or("");
            if urdu.is_empty() { english } else { urdu }
        }
        Locale::En => english,
    }
}

/// List-view title: the resolved title trimmed to the title word budget.
pub fn display_title(article: &Article, locale: Locale) -> String {
    truncate_words(
        resolve_field(article, BilingualField::Title, locale),
        TITLE_WORD_BUDGET,
    )
}

/// List-view summary: the resolved summary when present, otherwise derived
/// from the resolved content with HTML tags stripped.
pub fn display_summary(article: &Article, locale: Locale) -> String {
    let summary = resolve_field(article, BilingualField::Summary, locale);
    if !summary.is_empty() {
        return truncate_words(summary, SUMMARY_WORD_BUDGET);
    }

    let content = resolve_field(article, BilingualField::Content, locale);
    truncate_words(&strip_tags(content), SUMMARY_WORD_BUDGET)
}

/// Whitespace-based truncation to `budget` words, appending an ellipsis
/// marker when anything was cut.
pub fn truncate_words(text: &str, budget: usize) -> String {
    let mut words = text.split_whitespace();
    let kept: Vec<&str> = words.by_ref().take(budget).collect();
    let truncated = words.next().is_some();

    let mut out = kept.join(" ");
    if truncated {
        out.push_str(ELLIPSIS);
    }
    out
}

/// Remove HTML tags, leaving the text content. Unclosed trailing tags are
/// dropped with the rest of the input.
pub fn strip_tags(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_tag = false;
    for ch in input.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            c if !in_tag => out.push(c),
            _ => {}
        }
    }
    out
}
