use lexis_core::document::{DocumentNode, DocumentTree};
use scraper::{ElementRef, Html, Node, Selector};

fn selector(pattern: &str) -> Option<Selector> {
    match Selector::parse(pattern) {
        Ok(selector) => Some(selector),
        Err(e) => {
            tracing::warn!("Invalid selector '{}': {}", pattern, e);
            None
        }
    }
}

/// HTML document backed by `scraper`
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }
}

impl DocumentTree for HtmlDocument {
    type Node<'a> = HtmlNode<'a>;

    fn select_all(&self, pattern: &str) -> Vec<HtmlNode<'_>> {
        let Some(selector) = selector(pattern) else {
            return Vec::new();
        };
        self.html.select(&selector).map(HtmlNode).collect()
    }
}

#[derive(Clone, Copy)]
pub struct HtmlNode<'a>(ElementRef<'a>);

impl DocumentNode for HtmlNode<'_> {
    fn select_all(&self, pattern: &str) -> Vec<Self> {
        let Some(selector) = selector(pattern) else {
            return Vec::new();
        };
        self.0.select(&selector).map(HtmlNode).collect()
    }

    fn closest(&self, pattern: &str) -> Option<Self> {
        let selector = selector(pattern)?;
        self.0
            .ancestors()
            .filter_map(ElementRef::wrap)
            .find(|ancestor| selector.matches(ancestor))
            .map(HtmlNode)
    }

    fn text(&self) -> String {
        self.0.text().collect()
    }

    fn attr(&self, name: &str) -> Option<String> {
        self.0.value().attr(name).map(str::to_string)
    }

    fn contents(&self) -> Vec<String> {
        self.0
            .children()
            .filter_map(|child| match child.value() {
                Node::Text(text) => {
                    let text: &str = text;
                    (!text.trim().is_empty()).then(|| text.to_string())
                }
                Node::Element(_) => ElementRef::wrap(child).map(|el| el.text().collect()),
                _ => None,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MARKUP: &str = r#"
        <div class="entry" data-id="cald4">
          <div class="block">
            <span class="label">noun</span>
            <p class="item">first <b>bold</b></p>
            <p class="item">second</p>
          </div>
        </div>"#;

    #[test]
    fn selects_in_document_order() {
        let doc = HtmlDocument::parse(MARKUP);
        let items: Vec<String> = doc.select_all("p.item").iter().map(|n| n.text()).collect();
        assert_eq!(items, vec!["first bold", "second"]);
    }

    #[test]
    fn closest_walks_up_to_matching_ancestor() {
        let doc = HtmlDocument::parse(MARKUP);
        let item = doc.select_first("p.item").unwrap();

        let entry = item.closest(".entry").unwrap();
        assert_eq!(entry.attr("data-id").as_deref(), Some("cald4"));
        assert!(item.closest(".missing").is_none());
        assert!(item.closest("p.item").is_none());
    }

    #[test]
    fn contents_skip_blank_text_runs() {
        let doc = HtmlDocument::parse(MARKUP);
        let item = doc.select_first("p.item").unwrap();
        assert_eq!(item.contents(), vec!["first ", "bold"]);

        let block = doc.select_first(".block").unwrap();
        assert_eq!(block.contents().len(), 3);
    }

    #[test]
    fn invalid_pattern_matches_nothing() {
        let doc = HtmlDocument::parse(MARKUP);
        assert!(doc.select_all("p..item").is_empty());
        assert!(doc.select_first("[[").is_none());
    }
}
