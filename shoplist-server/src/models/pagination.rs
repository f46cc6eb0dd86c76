//! Pagination options for list queries
//!
//! Paging is all-or-nothing: it applies only when both page number and page
//! size are present and positive. Anything else returns the whole list. There
//! is no clamping.

/// Page number (1-indexed) and page size, either of which may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageOptions {
    pub page_number: Option<i32>,
    pub page_size: Option<i32>,
}

impl PageOptions {
    pub fn new(page_number: Option<i32>, page_size: Option<i32>) -> Self {
        Self {
            page_number,
            page_size,
        }
    }

    /// Both values present and > 0.
    pub fn is_valid(&self) -> bool {
        self.window().is_some()
    }

    /// `(offset, limit)` of the requested page, or `None` when paging is off.
    pub fn window(&self) -> Option<(usize, usize)> {
        match (self.page_number, self.page_size) {
            (Some(number), Some(size)) if number > 0 && size > 0 => {
                let offset = (i64::from(number) - 1) * i64::from(size);
                Some((
                    usize::try_from(offset).unwrap_or(usize::MAX),
                    usize::try_from(size).unwrap_or(usize::MAX),
                ))
            }
            _ => None,
        }
    }
}

/// Raw paging parameters as they arrive in a query string.
///
/// Values are kept as strings so that a non-numeric value disables paging
/// instead of failing the whole request.
#[derive(Debug, Clone, Default)]
pub struct PageParams {
    pub page_number: Option<String>,
    pub page_size: Option<String>,
}

impl PageParams {
    /// `None` when neither parameter was supplied.
    pub fn into_options(self) -> Option<PageOptions> {
        if self.page_number.is_none() && self.page_size.is_none() {
            return None;
        }
        Some(PageOptions::from(self))
    }
}

impl From<PageParams> for PageOptions {
    fn from(params: PageParams) -> Self {
        Self::new(
            params.page_number.and_then(|v| v.trim().parse().ok()),
            params.page_size.and_then(|v| v.trim().parse().ok()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_calculation() {
        assert_eq!(PageOptions::new(Some(1), Some(10)).window(), Some((0, 10)));
        assert_eq!(PageOptions::new(Some(3), Some(10)).window(), Some((20, 10)));
        assert_eq!(PageOptions::new(Some(2), Some(25)).window(), Some((25, 25)));
    }

    #[test]
    fn paging_is_all_or_nothing() {
        assert!(!PageOptions::new(None, Some(10)).is_valid());
        assert!(!PageOptions::new(Some(1), None).is_valid());
        assert!(!PageOptions::new(Some(0), Some(10)).is_valid());
        assert!(!PageOptions::new(Some(-1), Some(10)).is_valid());
        assert!(!PageOptions::new(Some(10), Some(0)).is_valid());
        assert!(!PageOptions::new(Some(10), Some(-1)).is_valid());
        assert!(PageOptions::new(Some(1), Some(1)).is_valid());
    }

    #[test]
    fn large_values_do_not_overflow() {
        let (offset, limit) = PageOptions::new(Some(i32::MAX), Some(i32::MAX))
            .window()
            .unwrap();
        assert!(offset > 0);
        assert_eq!(limit, i32::MAX as usize);
    }

    #[test]
    fn params_parse_leniently() {
        let params = PageParams {
            page_number: Some("2".into()),
            page_size: Some("abc".into()),
        };
        let options = params.into_options().unwrap();
        assert_eq!(options, PageOptions::new(Some(2), None));
        assert!(!options.is_valid());
    }

    #[test]
    fn no_params_means_no_options() {
        assert_eq!(PageParams::default().into_options(), None);
    }
}
