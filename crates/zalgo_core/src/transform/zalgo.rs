use crate::mark::MarkCategory;
use crate::model::options::TransformOptions;
use rand::Rng;

/// Longest decorated unit (base character plus marks), in Unicode scalar
/// values.
pub const MAX_UNIT_CHARS: usize = 25;

/// Returns whether `ch` is copied through without marks: Unicode whitespace
/// plus the information separators U+001C..=U+001F.
pub(crate) fn passes_through(ch: char) -> bool {
    ch.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&ch)
}

/// Transforms `text` with the thread-local random generator.
///
/// Each call produces a different, equally valid result.
pub fn transform(text: &str, options: &TransformOptions) -> String {
    transform_with_rng(text, options, &mut rand::thread_rng())
}

/// Transforms `text`, drawing all randomness from `rng`.
///
/// With a seeded generator the output is reproducible.
///
/// # Invariants
/// - Returns `text` unchanged when `options.is_noop()`.
/// - Every mark count is drawn uniformly from `[0, max]` inclusive.
/// - Marks are drawn uniformly with replacement from the category table.
pub fn transform_with_rng<R: Rng>(
    text: &str,
    options: &TransformOptions,
    rng: &mut R,
) -> String {
    if options.is_noop() {
        return text.to_string();
    }

    let budgets = MarkCategory::ALL.map(|category| (category, options.budget(category)));
    let mut out = String::with_capacity(text.len() * 4);

    for ch in text.chars() {
        if passes_through(ch) {
            out.push(ch);
            continue;
        }

        out.push(ch);
        let mut unit_chars = 1;
        for (category, max) in budgets {
            if max == 0 {
                continue;
            }
            let marks = category.marks();
            let count = rng.gen_range(0..=max);
            for _ in 0..count {
                let mark = marks[rng.gen_range(0..marks.len())];
                // Draws past the cap are still consumed so the random stream
                // per character does not depend on truncation.
                if unit_chars < MAX_UNIT_CHARS {
                    out.push(mark);
                    unit_chars += 1;
                }
            }
        }
    }

    out
}
