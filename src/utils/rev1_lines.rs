use crate::error::{Rev1Error, Result};

//=====================================================================
// Line-oriented view over the text of a Rev-1 file. Records in the
// file live on fixed line ranges, so everything is pulled out as
// whitespace-separated tokens from a range of lines. A token never
// spans more than one line.
//=====================================================================
#[derive(Clone, Debug)]
pub struct Rev1Lines<'a> {
    lines: Vec<&'a str>,
}

impl<'a> Rev1Lines<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { lines: text.split('\n').collect() }
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn line(&self, index: usize) -> Result<&'a str> {
        self.lines.get(index).copied().ok_or_else(|| {
            Rev1Error::Range(format!(
                "line {} requested but the file only has {} lines",
                index,
                self.lines.len()
            ))
        })
    }

    // Tokens from lines [start, end), or to the end of the file when `end` is None
    pub fn tokens_in_line_range(&self, start: usize, end: Option<usize>) -> Result<Vec<&'a str>> {
        let end = end.unwrap_or(self.lines.len());
        if start > end || end > self.lines.len() {
            return Err(Rev1Error::Range(format!(
                "line range {}..{} requested but the file only has {} lines",
                start,
                end,
                self.lines.len()
            )));
        }
        Ok(self.lines[start..end]
            .iter()
            .flat_map(|line| line.split_whitespace())
            .collect())
    }
}
