use crate::error::Error;

/// An inclusive, 1-indexed range of pages within a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRange {
    pub start: u32,
    pub end: u32,
}

impl PageRange {
    /// Validate a range against a document's page count.
    ///
    /// Requires `1 <= start <= end <= total_pages`.
    pub fn new(start: u32, end: u32, total_pages: u32) -> Result<Self, Error> {
        if start == 0 || start > end || end > total_pages {
            return Err(Error::Range {
                start,
                end,
                total: total_pages,
            });
        }
        Ok(PageRange { start, end })
    }

    /// Number of pages covered by the range.
    pub fn len(&self) -> u32 {
        self.end - self.start + 1
    }

    pub fn is_single_page(&self) -> bool {
        self.start == self.end
    }

    /// Absolute page numbers covered by the range, in order.
    pub fn pages(&self) -> impl Iterator<Item = u32> {
        self.start..=self.end
    }
}
