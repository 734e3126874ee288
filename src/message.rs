//! Localizable chat messages.

use rustc_hash::FxHashMap;

/// The content of one message component.
#[derive(Debug, Clone, PartialEq)]
pub enum MessageContent {
    /// Text shown as-is.
    Literal(String),
    /// A translation key whose `%s` / `%1$s` placeholders are filled with `args`.
    Translation { key: String, args: Vec<Message> },
}

/// A message that is only turned into text once a locale is known.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub content: MessageContent,
    /// Components appended after this one.
    pub extra: Vec<Message>,
}

impl Message {
    pub fn literal(text: impl Into<String>) -> Self {
        Self {
            content: MessageContent::Literal(text.into()),
            extra: Vec::new(),
        }
    }

    pub fn translate(key: impl Into<String>, args: Vec<Message>) -> Self {
        Self {
            content: MessageContent::Translation {
                key: key.into(),
                args,
            },
            extra: Vec::new(),
        }
    }

    /// Appends a sibling component.
    pub fn append(mut self, other: Message) -> Self {
        self.extra.push(other);
        self
    }

    /// Renders the message to plain text using `locale`.
    pub fn to_text(&self, locale: &dyn Locale) -> String {
        let mut text = match &self.content {
            MessageContent::Literal(text) => text.clone(),
            MessageContent::Translation { key, args } => {
                let args: Vec<String> = args.iter().map(|arg| arg.to_text(locale)).collect();
                let template = locale.translate(key).unwrap_or(key.as_str());
                format_translation(template, &args)
            }
        };
        for extra in &self.extra {
            text.push_str(&extra.to_text(locale));
        }
        text
    }
}

/// Source of translated strings.
pub trait Locale {
    /// The translation template for `key`, if the locale has one.
    fn translate(&self, key: &str) -> Option<&str>;

    /// Renders `message` to text in this locale.
    fn localize(&self, message: &Message) -> String
    where
        Self: Sized,
    {
        message.to_text(self)
    }
}

/// A locale backed by a key to template table. Unknown keys render as the key itself.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    translations: FxHashMap<String, String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, template: impl Into<String>) -> &mut Self {
        self.translations.insert(key.into(), template.into());
        self
    }

    pub fn len(&self) -> usize {
        self.translations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}

impl Locale for TranslationTable {
    fn translate(&self, key: &str) -> Option<&str> {
        self.translations.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for TranslationTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            translations: iter
                .into_iter()
                .map(|(key, template)| (key.into(), template.into()))
                .collect(),
        }
    }
}

/// Fills `%s`, `%N$s` and `%%` in a translation template. Missing arguments render empty.
fn format_translation(template: &str, args: &[String]) -> String {
    let mut output = String::with_capacity(template.len());
    let mut next_arg = 0;
    let mut chars = template.chars().peekable();
    while let Some(character) = chars.next() {
        if character != '%' {
            output.push(character);
            continue;
        }
        match chars.peek().copied() {
            Some('%') => {
                chars.next();
                output.push('%');
            }
            Some('s') => {
                chars.next();
                if let Some(arg) = args.get(next_arg) {
                    output.push_str(arg);
                }
                next_arg += 1;
            }
            Some(digit) if digit.is_ascii_digit() => {
                let mut position = String::new();
                while let Some(digit) = chars.peek().copied().filter(char::is_ascii_digit) {
                    position.push(digit);
                    chars.next();
                }
                // Only `%N$s` is a positional placeholder; anything else is kept literally.
                if chars.peek() == Some(&'$') {
                    chars.next();
                    if chars.peek() == Some(&'s') {
                        chars.next();
                        let index = position.parse::<usize>().unwrap_or(0);
                        if let Some(arg) = index.checked_sub(1).and_then(|index| args.get(index)) {
                            output.push_str(arg);
                        }
                        continue;
                    }
                    output.push('%');
                    output.push_str(&position);
                    output.push('$');
                    continue;
                }
                output.push('%');
                output.push_str(&position);
            }
            _ => output.push('%'),
        }
    }
    output
}
