//! Page-level metadata: selected dropdown options and the view-online link.

use crate::parse::element_text;
use crate::types::ViewLink;
use scraper::{Html, Selector};
use std::sync::LazyLock;

static VIEW_LINK: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("div.tt_details > div.tt_detail > a").unwrap());

/// Reads the currently selected option of a dropdown control.
///
/// `control` is a CSS id selector such as `"#dept"`. With `key_mode` the
/// option's `value` attribute is returned instead of its visible label.
/// Absent controls, dropdowns with nothing selected, and missing value
/// attributes all yield an empty string; this never fails a parse.
pub fn selected_option(document: &Html, control: &str, key_mode: bool) -> String {
    let query = format!("{control} option[selected]");
    let Ok(selector) = Selector::parse(&query) else {
        return String::new();
    };
    let Some(option) = document.select(&selector).next() else {
        return String::new();
    };
    if key_mode {
        option.value().attr("value").unwrap_or_default().to_string()
    } else {
        element_text(option)
    }
}

/// First "view this timetable online" anchor of the page, if present.
///
/// The link is decoration; a page without one is still a valid timetable.
pub fn view_link(document: &Html) -> Option<ViewLink> {
    let anchor = document.select(&VIEW_LINK).next()?;
    Some(ViewLink {
        title: element_text(anchor),
        url: anchor.value().attr("href").unwrap_or_default().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn document(body: &str) -> Html {
        Html::parse_document(&format!("<html><body>{body}</body></html>"))
    }

    const DEPT_SELECT: &str = "<select id=\"dept\" name=\"dept\">\
                               <option value=\"\">All departments</option>\
                               <option value=\"SCENG\" selected>Engineering</option>\
                               <option value=\"SCSCI\">Science</option>\
                               </select>";

    #[test]
    fn test_selected_label() {
        let doc = document(DEPT_SELECT);
        assert_eq!(selected_option(&doc, "#dept", false), "Engineering");
    }

    #[test]
    fn test_selected_key() {
        let doc = document(DEPT_SELECT);
        assert_eq!(selected_option(&doc, "#dept", true), "SCENG");
    }

    #[test]
    fn test_nothing_selected_is_empty() {
        let doc = document(
            "<select id=\"dept\">\
             <option value=\"SCENG\">Engineering</option>\
             </select>",
        );
        assert_eq!(selected_option(&doc, "#dept", false), "");
        assert_eq!(selected_option(&doc, "#dept", true), "");
    }

    #[test]
    fn test_absent_control_is_empty() {
        let doc = document(DEPT_SELECT);
        assert_eq!(selected_option(&doc, "#studentgroup", false), "");
    }

    #[test]
    fn test_selected_option_without_value_attribute() {
        let doc = document(
            "<select id=\"dept\">\
             <option selected>Engineering</option>\
             </select>",
        );
        assert_eq!(selected_option(&doc, "#dept", true), "");
        assert_eq!(selected_option(&doc, "#dept", false), "Engineering");
    }

    #[test]
    fn test_unparseable_control_selector_is_empty() {
        let doc = document(DEPT_SELECT);
        assert_eq!(selected_option(&doc, "##", false), "");
    }

    #[test]
    fn test_view_link_present() {
        let doc = document(
            "<div class=\"tt_details\"><div class=\"tt_detail\">\
             <a href=\"https://example.org/view\">View or amend this timetable</a>\
             </div></div>",
        );
        let link = view_link(&doc).unwrap();
        assert_eq!(link.title, "View or amend this timetable");
        assert_eq!(link.url, "https://example.org/view");
    }

    #[test]
    fn test_view_link_absent() {
        let doc = document("<div class=\"tt_details\"></div>");
        assert!(view_link(&doc).is_none());
    }

    #[test]
    fn test_anchor_outside_the_detail_path_is_ignored() {
        let doc = document("<a href=\"https://example.org/elsewhere\">elsewhere</a>");
        assert!(view_link(&doc).is_none());
    }

    #[test]
    fn test_view_link_without_href() {
        let doc = document(
            "<div class=\"tt_details\"><div class=\"tt_detail\">\
             <a>View or amend this timetable</a>\
             </div></div>",
        );
        let link = view_link(&doc).unwrap();
        assert_eq!(link.title, "View or amend this timetable");
        assert_eq!(link.url, "");
    }
}
