use crate::domain::PageLink;

/// Find the URL of the next page, if the API advertised one.
/// A `next` entry without an href has nowhere to point, so it ends the
/// pagination instead of matching.
pub fn find_next_link(links: &[PageLink]) -> Option<&str> {
    links
        .iter()
        .find(|link| is_next(link))
        .map(|link| link.href.as_str())
}

fn is_next(link: &PageLink) -> bool {
    link.rel == "next" && !link.href.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn link(rel: &str, href: &str) -> PageLink {
        PageLink {
            rel: rel.to_string(),
            href: href.to_string(),
        }
    }

    #[test]
    fn test_first_next_link_wins() {
        let links = vec![
            link("self", "https://example.org/items"),
            link("next", "https://example.org/items?offset=10"),
            link("next", "https://example.org/items?offset=20"),
        ];

        assert_eq!(
            find_next_link(&links),
            Some("https://example.org/items?offset=10")
        );
    }

    #[test]
    fn test_no_next_link() {
        let links = vec![link("self", "https://example.org/items")];
        assert_eq!(find_next_link(&links), None);
    }

    #[test]
    fn test_empty_links() {
        assert_eq!(find_next_link(&[]), None);
    }

    #[test]
    fn test_next_link_without_href_does_not_match() {
        let links = vec![link("next", "")];
        assert_eq!(find_next_link(&links), None);
    }

    #[test]
    fn test_href_less_next_entry_is_skipped_in_favor_of_a_complete_one() {
        let links = vec![
            link("next", ""),
            link("next", "https://example.org/items?offset=10"),
        ];

        assert_eq!(
            find_next_link(&links),
            Some("https://example.org/items?offset=10")
        );
    }
}
