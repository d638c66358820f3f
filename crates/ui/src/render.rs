//! Server-side rendering of leptos views.

use leptos::prelude::*;

/// Render a view to HTML under a fresh reactive owner.
///
/// The view is built inside the owner so components can share context while rendering.
pub fn render_to_string<V, F>(build: F) -> String
where
    V: IntoView,
    F: FnOnce() -> V,
{
    let owner = Owner::new();
    owner.with(|| build().to_html())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_static_markup() {
        let html = render_to_string(|| view! { <p class="note">"Metformin"</p> });
        assert_eq!(html, r#"<p class="note">Metformin</p>"#);
    }

    #[test]
    fn text_is_escaped() {
        let label = String::from("<b>Type 1</b> & 2");
        let html = render_to_string(move || view! { <span>{label}</span> });
        assert!(html.contains("&lt;b&gt;Type 1&lt;/b&gt; &amp; 2"));
        assert!(!html.contains("<b>"));
    }
}
