//! # Delivery Format
//!
//! The Read / Listen / Watch tabs shown on every feed card. Only `Read` does
//! anything; the other two show their call to action and stay inert.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DeliveryFormat {
    #[default]
    Read,
    Listen,
    Watch,
}

impl DeliveryFormat {
    pub const ALL: [DeliveryFormat; 3] = [
        DeliveryFormat::Read,
        DeliveryFormat::Listen,
        DeliveryFormat::Watch,
    ];

    pub fn label(self) -> &'static str {
        match self {
            DeliveryFormat::Read => "Read",
            DeliveryFormat::Listen => "Listen",
            DeliveryFormat::Watch => "Watch",
        }
    }

    pub fn call_to_action(self) -> &'static str {
        match self {
            DeliveryFormat::Read => "Read full story",
            DeliveryFormat::Listen => "Play audio version",
            DeliveryFormat::Watch => "Watch video summary",
        }
    }

    /// What the tab delivers, for status messages ("Audio versions ...").
    pub fn medium(self) -> &'static str {
        match self {
            DeliveryFormat::Read => "Text",
            DeliveryFormat::Listen => "Audio",
            DeliveryFormat::Watch => "Video",
        }
    }

    /// Whether activating this tab opens the article.
    pub fn opens_article(self) -> bool {
        matches!(self, DeliveryFormat::Read)
    }

    pub fn next(self) -> Self {
        match self {
            DeliveryFormat::Read => DeliveryFormat::Listen,
            DeliveryFormat::Listen => DeliveryFormat::Watch,
            DeliveryFormat::Watch => DeliveryFormat::Read,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            DeliveryFormat::Read => DeliveryFormat::Watch,
            DeliveryFormat::Listen => DeliveryFormat::Read,
            DeliveryFormat::Watch => DeliveryFormat::Listen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_read() {
        assert_eq!(DeliveryFormat::default(), DeliveryFormat::Read);
    }

    #[test]
    fn test_cycle_wraps_both_ways() {
        let mut format = DeliveryFormat::Read;
        for _ in 0..3 {
            format = format.next();
        }
        assert_eq!(format, DeliveryFormat::Read);
        assert_eq!(DeliveryFormat::Read.prev(), DeliveryFormat::Watch);
        assert_eq!(DeliveryFormat::Watch.next().prev(), DeliveryFormat::Watch);
    }

    #[test]
    fn test_medium_names() {
        let media: Vec<_> = DeliveryFormat::ALL.iter().map(|f| f.medium()).collect();
        assert_eq!(media, vec!["Text", "Audio", "Video"]);
    }

    #[test]
    fn test_only_read_opens_article() {
        let opening: Vec<_> = DeliveryFormat::ALL
            .iter()
            .filter(|f| f.opens_article())
            .collect();
        assert_eq!(opening, vec![&DeliveryFormat::Read]);
    }

    #[test]
    fn test_call_to_action_text() {
        assert_eq!(DeliveryFormat::Read.call_to_action(), "Read full story");
        assert_eq!(DeliveryFormat::Listen.call_to_action(), "Play audio version");
        assert_eq!(DeliveryFormat::Watch.call_to_action(), "Watch video summary");
    }
}
