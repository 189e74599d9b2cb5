/// Text carried by one slide. Only `title` reaches the screen-reader announcement.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SlideInfo {
    pub title: String,
    pub subtitle: Option<String>,
    pub badge: Option<String>,
}

impl SlideInfo {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            subtitle: None,
            badge: None,
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }

    pub fn with_badge(mut self, badge: impl Into<String>) -> Self {
        self.badge = Some(badge.into());
        self
    }

    /// Parses a `title|subtitle|badge` caption line. Missing or blank parts stay `None`;
    /// a blank line yields `None`.
    pub fn from_caption_line(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return None;
        }

        let mut parts = line.split('|').map(str::trim);
        let title = parts.next().unwrap_or_default();
        let non_empty = |part: Option<&str>| part.filter(|s| !s.is_empty()).map(str::to_string);

        Some(Self {
            title: title.to_string(),
            subtitle: non_empty(parts.next()),
            badge: non_empty(parts.next()),
        })
    }
}

/// Parses a captions file, one slide per non-blank, non-comment line.
pub fn parse_captions(text: &str) -> Vec<SlideInfo> {
    text.lines().filter_map(SlideInfo::from_caption_line).collect()
}
