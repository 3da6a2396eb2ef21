// Placeholder tokenizer
//
// A placeholder is `{`, one or more characters other than `}`, then `}`.
// A `?` directly before the closing brace marks it optional.

use super::ast::Placeholder;

pub struct PlaceholderScanner<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> PlaceholderScanner<'a> {
    pub fn scan(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }
}

impl<'a> Iterator for PlaceholderScanner<'a> {
    type Item = Placeholder<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let bytes = self.input.as_bytes();

        while self.pos < bytes.len() {
            let open = self.pos + self.input[self.pos..].find('{')?;
            let Some(close_offset) = self.input[open + 1..].find('}') else {
                self.pos = bytes.len();
                return None;
            };
            let close = open + 1 + close_offset;

            // `{}` has no name; resume right after the brace pair
            if close == open + 1 {
                self.pos = close + 1;
                continue;
            }

            self.pos = close + 1;
            let inner = &self.input[open + 1..close];
            let (name, is_optional) = match inner.strip_suffix('?') {
                Some(stripped) => (stripped, true),
                None => (inner, false),
            };

            return Some(Placeholder {
                name,
                is_optional,
                start: open,
                end: close + 1,
            });
        }

        None
    }
}
