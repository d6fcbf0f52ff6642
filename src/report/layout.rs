//! Vertical layout cursor
//!
//! Tracks the current page and the distance from the page top. Knows nothing
//! about PDF or section semantics; the canvas asks it where the next block goes
//! and opens a new page when told to.

use crate::config::ReportConfig;

/// Slack for float comparisons when a block fills a page exactly
const FIT_EPSILON_MM: f32 = 0.001;

/// Where the cursor sits relative to the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageState {
    /// Nothing placed on the current page yet
    AtPageBoundary,
    WithinPage,
}

/// Result of placing a block
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// 0-based page index the block landed on
    pub page: usize,
    /// Distance from the page top to the top of the block (mm)
    pub top: f32,
    /// Distance from the page top to the bottom of the block (mm)
    pub bottom: f32,
    /// A page break happened to make room for this block
    pub new_page: bool,
}

impl Placement {
    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }
}

/// Explicit layout state threaded through every section renderer
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutCursor {
    page: usize,
    offset: f32,
    page_height: f32,
    margin_top: f32,
    margin_bottom: f32,
}

impl LayoutCursor {
    pub fn new(page_height: f32, margin_top: f32, margin_bottom: f32) -> Self {
        Self {
            page: 0,
            offset: margin_top,
            page_height,
            margin_top,
            margin_bottom,
        }
    }

    pub fn from_config(config: &ReportConfig) -> Self {
        Self::new(config.page_height_mm, config.margin_mm, config.footer_reserve_mm)
    }

    pub fn page(&self) -> usize {
        self.page
    }

    pub fn page_count(&self) -> usize {
        self.page + 1
    }

    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Lowest offset a block may reach
    pub fn limit(&self) -> f32 {
        self.page_height - self.margin_bottom
    }

    pub fn remaining(&self) -> f32 {
        (self.limit() - self.offset).max(0.0)
    }

    pub fn state(&self) -> PageState {
        if self.offset <= self.margin_top + FIT_EPSILON_MM {
            PageState::AtPageBoundary
        } else {
            PageState::WithinPage
        }
    }

    pub fn fits(&self, height: f32) -> bool {
        self.offset + height <= self.limit() + FIT_EPSILON_MM
    }

    fn break_page(&mut self) {
        self.page += 1;
        self.offset = self.margin_top;
    }

    /// Reserve `height` mm, starting a new page first if it does not fit.
    ///
    /// A block taller than a whole page is placed at the top of a fresh page
    /// and allowed to overflow rather than emitting pages forever.
    pub fn place_block(&mut self, height: f32) -> Placement {
        let height = if height.is_finite() { height.max(0.0) } else { 0.0 };
        let new_page = !self.fits(height) && self.state() == PageState::WithinPage;
        if new_page {
            self.break_page();
        }

        let top = self.offset;
        self.offset += height;
        Placement {
            page: self.page,
            top,
            bottom: self.offset,
            new_page,
        }
    }

    /// Break the page now unless `height` still fits; does not move the cursor otherwise.
    /// Returns true when a page break happened.
    pub fn ensure_space(&mut self, height: f32) -> bool {
        if !self.fits(height) && self.state() == PageState::WithinPage {
            self.break_page();
            return true;
        }
        false
    }

    /// Add vertical spacing; spacing never pushes past the usable area
    pub fn advance(&mut self, gap: f32) {
        if gap.is_finite() && gap > 0.0 {
            self.offset = (self.offset + gap).min(self.limit().max(self.offset));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor() -> LayoutCursor {
        // 100mm page, 10mm top margin, 20mm bottom reserve: 70mm usable
        LayoutCursor::new(100.0, 10.0, 20.0)
    }

    #[test]
    fn test_blocks_stack_on_one_page() {
        let mut c = cursor();
        assert_eq!(c.state(), PageState::AtPageBoundary);

        let a = c.place_block(30.0);
        assert_eq!((a.page, a.top, a.bottom, a.new_page), (0, 10.0, 40.0, false));
        assert_eq!(c.state(), PageState::WithinPage);

        let b = c.place_block(40.0);
        assert_eq!((b.page, b.top, b.bottom, b.new_page), (0, 40.0, 80.0, false));
        assert_eq!(c.remaining(), 0.0);
    }

    #[test]
    fn test_break_when_block_does_not_fit() {
        let mut c = cursor();
        c.place_block(50.0);
        let p = c.place_block(25.0);
        assert!(p.new_page);
        assert_eq!(p.page, 1);
        assert_eq!(p.top, 10.0);
        assert_eq!(c.page_count(), 2);
    }

    #[test]
    fn test_offset_never_exceeds_limit_before_placement() {
        let mut c = cursor();
        for i in 0..200 {
            let height = 3.0 + (i % 7) as f32;
            assert!(c.offset() <= c.limit() + FIT_EPSILON_MM);
            let p = c.place_block(height);
            assert!(p.bottom <= c.limit() + FIT_EPSILON_MM);
            c.advance(1.5);
        }
        assert!(c.page_count() > 1);
    }

    #[test]
    fn test_oversized_block_gets_own_page_once() {
        let mut c = cursor();
        c.place_block(5.0);
        let big = c.place_block(500.0);
        assert!(big.new_page);
        assert_eq!(big.page, 1);
        assert_eq!(big.top, 10.0);

        let next = c.place_block(5.0);
        assert!(next.new_page);
        assert_eq!(next.page, 2);
    }

    #[test]
    fn test_oversized_block_on_fresh_page_does_not_break() {
        let mut c = cursor();
        let big = c.place_block(500.0);
        assert!(!big.new_page);
        assert_eq!(big.page, 0);
    }

    #[test]
    fn test_ensure_space() {
        let mut c = cursor();
        c.place_block(60.0);
        assert!(!c.ensure_space(5.0));
        assert_eq!(c.page(), 0);
        assert!(c.ensure_space(15.0));
        assert_eq!(c.page(), 1);
        assert_eq!(c.state(), PageState::AtPageBoundary);
        assert!(!c.ensure_space(15.0));
    }

    #[test]
    fn test_advance_clamps_to_limit() {
        let mut c = cursor();
        c.place_block(65.0);
        c.advance(50.0);
        assert_eq!(c.offset(), c.limit());
        assert_eq!(c.page(), 0);
    }

    #[test]
    fn test_exact_fit_does_not_break() {
        let mut c = cursor();
        let p = c.place_block(70.0);
        assert!(!p.new_page);
        assert_eq!(p.bottom, 80.0);
    }

    #[test]
    fn test_from_config() {
        let c = LayoutCursor::from_config(&ReportConfig::default());
        assert_eq!(c.offset(), 15.0);
        assert_eq!(c.limit(), 277.0);
    }
}
