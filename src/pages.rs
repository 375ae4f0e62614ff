use std::collections::BTreeSet;

/// Resolve an OpenKM page range expression ("1,3-5,-1") against a page count.
///
/// Tokens are comma-separated: a bare page number, `-1` for the last page, or
/// `a-b` for an inclusive range (either order). Out-of-bounds pages are
/// clipped and malformed tokens are dropped rather than rejected. The result
/// is deduplicated and ascending; an empty result is valid.
pub fn resolve(expression: &str, num_pages: u32) -> Vec<u32> {
    let mut pages = BTreeSet::new();

    for token in expression.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        if token == "-1" {
            if num_pages >= 1 {
                pages.insert(num_pages);
            }
        } else if let Ok(page) = token.parse::<u32>() {
            if (1..=num_pages).contains(&page) {
                pages.insert(page);
            }
        } else if let Some((left, right)) = token.split_once('-')
            && let (Ok(a), Ok(b)) = (left.trim().parse::<u32>(), right.trim().parse::<u32>())
        {
            let (start, end) = if a <= b { (a, b) } else { (b, a) };
            for page in start.max(1)..=end.min(num_pages) {
                pages.insert(page);
            }
        }
    }

    pages.into_iter().collect()
}
