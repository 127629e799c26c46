use scraper::ElementRef;

/// Finds elements by tag name and one attribute, either present or equal to a value.
///
/// Only strict descendants of the scope element are searched, in document order.
/// Values are compared verbatim, so a `class` locator matches the whole attribute
/// and not one token of it.
///
/// `scraper::Selector` is not used: class names come from the settings file and
/// would have to be quoted into selector syntax, and `.class` matches tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldLocator<'c> {
    tag: &'c str,
    attribute: &'c str,
    value: Option<&'c str>,
}

impl<'c> FieldLocator<'c> {
    /// `<tag attribute>` with any value.
    pub fn with_attribute(tag: &'c str, attribute: &'c str) -> Self {
        Self {
            tag,
            attribute,
            value: None,
        }
    }

    /// `<tag attribute="value">`.
    pub fn with_attribute_value(tag: &'c str, attribute: &'c str, value: &'c str) -> Self {
        Self {
            tag,
            attribute,
            value: Some(value),
        }
    }

    /// `<div class="class_name">`, the layout of every gallery block.
    pub fn div_with_class(class_name: &'c str) -> Self {
        Self::with_attribute_value("div", "class", class_name)
    }

    /// `<tag>` regardless of its attributes.
    pub fn tag(tag: &'c str) -> Self {
        Self {
            tag,
            attribute: "",
            value: None,
        }
    }

    pub fn matches(&self, element: &ElementRef<'_>) -> bool {
        let element = element.value();
        if element.name() != self.tag {
            return false;
        }
        if self.attribute.is_empty() {
            return true;
        }
        match (element.attr(self.attribute), self.value) {
            (Some(found), Some(expected)) => found == expected,
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    pub fn find_all<'a>(&self, scope: ElementRef<'a>) -> Vec<ElementRef<'a>> {
        scope
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .filter(|element| self.matches(element))
            .collect()
    }

    pub fn find_first<'a>(&self, scope: ElementRef<'a>) -> Option<ElementRef<'a>> {
        scope
            .descendants()
            .skip(1)
            .filter_map(ElementRef::wrap)
            .find(|element| self.matches(element))
    }

    /// Value of the located attribute on the first matching element.
    pub fn first_attribute<'a>(&self, scope: ElementRef<'a>) -> Option<&'a str> {
        self.find_first(scope)
            .and_then(|element| element.value().attr(self.attribute))
    }
}
