use yamlot_common::{YamlError, YamlResult};

/// Stack of open indentation widths.
///
/// Always holds the base level 0 at the bottom; widths strictly increase
/// towards the top.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndentStack {
    levels: Vec<u32>,
}

impl Default for IndentStack {
    fn default() -> Self {
        IndentStack { levels: vec![0] }
    }
}

impl IndentStack {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn top(&self) -> u32 {
        self.levels.last().copied().unwrap_or(0)
    }

    /// Number of levels above the base one.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.levels.len() - 1
    }

    pub fn push(&mut self, width: u32) -> YamlResult<()> {
        let top = self.top();
        if width <= top {
            return Err(YamlError::IndentNotIncreasing { top, width });
        }
        self.levels.push(width);
        Ok(())
    }

    pub fn pop(&mut self) -> YamlResult<u32> {
        if self.levels.len() <= 1 {
            return Err(YamlError::PopBaseIndent);
        }
        self.levels.pop().ok_or(YamlError::PopBaseIndent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_pop() {
        let mut stack = IndentStack::new();
        assert_eq!(stack.top(), 0);
        assert_eq!(stack.depth(), 0);

        stack.push(2).unwrap();
        stack.push(4).unwrap();
        assert_eq!(stack.top(), 4);
        assert_eq!(stack.depth(), 2);

        assert_eq!(stack.pop().unwrap(), 4);
        assert_eq!(stack.pop().unwrap(), 2);
        assert_eq!(stack.top(), 0);
    }

    #[test]
    fn test_base_is_kept() {
        let mut stack = IndentStack::new();
        assert!(matches!(stack.pop(), Err(YamlError::PopBaseIndent)));
        assert_eq!(stack.depth(), 0);
        assert_eq!(stack.top(), 0);
    }

    #[test]
    fn test_rejects_non_increasing() {
        let mut stack = IndentStack::new();
        assert!(matches!(
            stack.push(0),
            Err(YamlError::IndentNotIncreasing { top: 0, width: 0 })
        ));
        stack.push(3).unwrap();
        assert!(matches!(
            stack.push(1),
            Err(YamlError::IndentNotIncreasing { top: 3, width: 1 })
        ));
        assert_eq!(stack, {
            let mut expected = IndentStack::new();
            expected.push(3).unwrap();
            expected
        });
    }
}
