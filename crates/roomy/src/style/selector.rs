//! Selector matching for the minimal cascade in [`StyleSheet::resolve`].
//!
//! Only class selectors are understood: compounds such as `.a.b` joined by
//! descendant combinators (whitespace). That covers every selector the
//! generator produces. Any other selector parses to `None` and never
//! matches.
//!
//! [`StyleSheet::resolve`]: super::StyleSheet::resolve

use cssparser::{Parser, ParserInput, Token};

/// A selector made of class compounds joined by descendant combinators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ClassSelector {
    compounds: Vec<Vec<String>>,
}

impl ClassSelector {
    pub(crate) fn parse(source: &str) -> Option<Self> {
        let mut input = ParserInput::new(source);
        let mut parser = Parser::new(&mut input);
        let mut compounds = Vec::new();
        let mut current: Vec<String> = Vec::new();
        let mut after_dot = false;

        while let Ok(token) = parser.next_including_whitespace() {
            match (token, after_dot) {
                (Token::Delim('.'), false) => after_dot = true,
                (Token::Ident(name), true) => {
                    current.push(name.to_string());
                    after_dot = false;
                }
                (Token::WhiteSpace(_), false) => {
                    if !current.is_empty() {
                        compounds.push(std::mem::take(&mut current));
                    }
                }
                _ => return None,
            }
        }

        if after_dot {
            return None;
        }
        if !current.is_empty() {
            compounds.push(current);
        }
        if compounds.is_empty() {
            None
        } else {
            Some(Self { compounds })
        }
    }

    /// Number of class selectors; all class selectors weigh the same.
    pub(crate) fn specificity(&self) -> usize {
        self.compounds.iter().map(Vec::len).sum()
    }

    /// Matches the subject against `element` and the remaining compounds
    /// against `ancestors`, nearest ancestor first.
    pub(crate) fn matches(&self, element: &[String], ancestors: &[Vec<String>]) -> bool {
        let Some((subject, rest)) = self.compounds.split_last() else {
            return false;
        };
        if !compound_matches(subject, element) {
            return false;
        }
        let mut outward = ancestors.iter();
        rest.iter()
            .rev()
            .all(|compound| outward.any(|classes| compound_matches(compound, classes)))
    }
}

fn compound_matches(compound: &[String], classes: &[String]) -> bool {
    compound.iter().all(|class| classes.contains(class))
}

/// The element a property is resolved for, with its ancestors' classes.
///
/// # Example
///
/// ```rust
/// use roomy::MatchContext;
///
/// // a span inside a container that currently satisfies XS and SM
/// let ctx = MatchContext::element(["css-1"]).inside(["css-9", "XS", "SM"]);
/// assert_eq!(ctx.ancestors().len(), 1);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchContext {
    element: Vec<String>,
    ancestors: Vec<Vec<String>>,
}

impl MatchContext {
    /// Context for an element carrying `classes`, with no ancestors.
    pub fn element<I, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            element: split_classes(classes),
            ancestors: Vec::new(),
        }
    }

    /// Adds an ancestor enclosing every ancestor added so far.
    pub fn inside<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.ancestors.push(split_classes(classes));
        self
    }

    pub fn element_classes(&self) -> &[String] {
        &self.element
    }

    /// Ancestor class lists, nearest first.
    pub fn ancestors(&self) -> &[Vec<String>] {
        &self.ancestors
    }
}

fn split_classes<I, S>(classes: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    classes
        .into_iter()
        .flat_map(|c| {
            c.as_ref()
                .split_whitespace()
                .map(str::to_string)
                .collect::<Vec<_>>()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_parse_single_class() {
        let sel = ClassSelector::parse(".css-1a2b").unwrap();
        assert_eq!(sel.specificity(), 1);
    }

    #[test]
    fn test_parse_descendant_and_compound() {
        assert_eq!(ClassSelector::parse(".SM .css-1").unwrap().specificity(), 2);
        assert_eq!(ClassSelector::parse(".css-1.SM").unwrap().specificity(), 2);
    }

    #[test]
    fn test_parse_rejects_other_selectors() {
        assert_eq!(ClassSelector::parse(".css-1 > *"), None);
        assert_eq!(ClassSelector::parse(".css-1:hover"), None);
        assert_eq!(ClassSelector::parse("div"), None);
        assert_eq!(ClassSelector::parse("."), None);
        assert_eq!(ClassSelector::parse(""), None);
    }

    #[test]
    fn test_matches_subject() {
        let sel = ClassSelector::parse(".css-1").unwrap();
        assert!(sel.matches(&classes(&["x", "css-1"]), &[]));
        assert!(!sel.matches(&classes(&["x"]), &[]));
    }

    #[test]
    fn test_matches_descendant() {
        let sel = ClassSelector::parse(".SM .css-1").unwrap();
        let element = classes(&["css-1"]);
        let container = vec![classes(&["XS", "SM"])];
        assert!(sel.matches(&element, &container));
        assert!(!sel.matches(&element, &[classes(&["XS"])]));
        // the marker on the element itself does not satisfy the ancestor part
        assert!(!sel.matches(&classes(&["css-1", "SM"]), &[]));
    }

    #[test]
    fn test_matches_any_enclosing_ancestor() {
        let sel = ClassSelector::parse(".MD .css-1").unwrap();
        let ancestors = vec![classes(&["inner"]), classes(&["MD"])];
        assert!(sel.matches(&classes(&["css-1"]), &ancestors));
    }

    #[test]
    fn test_context_splits_class_attributes() {
        let ctx = MatchContext::element(["css-1 css-2"]).inside(["XS SM"]).inside(["root"]);
        assert_eq!(ctx.element_classes(), &classes(&["css-1", "css-2"])[..]);
        assert_eq!(ctx.ancestors()[0], classes(&["XS", "SM"]));
        assert_eq!(ctx.ancestors()[1], classes(&["root"]));
    }
}
