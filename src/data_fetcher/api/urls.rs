//! Page URL construction

use crate::constants::PAGE_PLACEHOLDER;
use crate::teletext_ui::PageNumber;

/// Builds the URL of a teletext page by substituting the page number into `template`.
///
/// # Example
/// ```
/// use texttv::data_fetcher::api::build_page_url;
/// use texttv::teletext_ui::PageNumber;
///
/// let page = PageNumber::parse("377")?;
/// assert_eq!(
///     build_page_url("https://www.svt.se/svttext/tv/pages/{page}.html", page),
///     "https://www.svt.se/svttext/tv/pages/377.html"
/// );
/// # Ok::<(), texttv::AppError>(())
/// ```
pub fn build_page_url(template: &str, number: PageNumber) -> String {
    template.replace(PAGE_PLACEHOLDER, &number.to_string())
}
