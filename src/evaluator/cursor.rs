use crate::evaluator::Evaluator;

impl Evaluator {
    /// Returns the character under the cursor, or `None` at the end of input.
    pub(crate) fn current_char(&self) -> Option<char> {
        self.buffer.get(self.pos).copied()
    }

    /// Advances the cursor past any whitespace.
    pub(crate) fn skip_whitespace(&mut self) {
        while self.current_char().is_some_and(char::is_whitespace) {
            self.pos += 1;
        }
    }

    /// Consumes `expected` if it is the next meaningful character.
    ///
    /// Skips whitespace first. When the character under the cursor equals
    /// `expected`, the cursor moves past it and the match succeeds. Otherwise
    /// the cursor stays on that character and the match fails.
    pub(crate) fn match_char(&mut self, expected: char) -> bool {
        self.skip_whitespace();
        if self.current_char() == Some(expected) {
            self.pos += 1;
            true
        } else {
            false
        }
    }
}
