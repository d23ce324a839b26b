use std::collections::VecDeque;
use yamlot_common::Token;

/// FIFO of tokens produced ahead of the one being returned.
#[derive(Clone, Debug, Default)]
pub struct TokenQueue {
    tokens: VecDeque<Token>,
}

impl TokenQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_back(&mut self, token: Token) {
        self.tokens.push_back(token);
    }

    pub fn pop_front(&mut self) -> Option<Token> {
        self.tokens.pop_front()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}
