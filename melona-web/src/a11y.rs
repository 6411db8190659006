// Accessibility helpers

/// Get CSS for visible focus indicators and screen reader utilities
///
/// Returns critical accessibility CSS that should be injected early in the page load.
/// Includes focus ring styles and screen reader helper classes.
#[must_use]
pub const fn visible_focus_css() -> &'static str {
    ":focus{outline:3px solid #e11d48;outline-offset:2px} .sr-only{position:absolute;width:1px;height:1px;margin:-1px;overflow:hidden;clip:rect(0 0 0 0);white-space:nowrap;}"
}

/// Update the live region status for screen readers
///
/// Updates the text content of the #deck-helper element if present.
/// This provides announcements to assistive technology users.
pub fn set_status(msg: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(node) = web_sys::window()
            .and_then(|win| win.document())
            .and_then(|doc| doc.get_element_by_id("deck-helper"))
        {
            node.set_text_content(Some(msg));
        }
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = msg;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn focus_css_targets_focus_outline() {
        assert!(visible_focus_css().contains(":focus"));
        assert!(visible_focus_css().contains(".sr-only"));
    }

    #[test]
    fn set_status_without_document_is_a_no_op() {
        set_status("tres de doce completadas");
    }
}
