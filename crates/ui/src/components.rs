//! Presentational primitives.
//!
//! Leptos components with no domain state of their own. Interactions are reported upward
//! through a [`FormAction`]: the primitive posts a form to the action's path and the form
//! application turns that into an event.

use leptos::prelude::*;

/// Where a primitive reports an interaction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormAction {
    path: String,
}

impl FormAction {
    pub fn post(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    #[default]
    Default,
    Outline,
}

impl BadgeVariant {
    fn class(self) -> &'static str {
        match self {
            BadgeVariant::Default => "badge-default",
            BadgeVariant::Outline => "badge-outline",
        }
    }
}

fn class_list(parts: &[&str]) -> String {
    parts
        .iter()
        .map(|p| p.trim())
        .filter(|p| !p.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// A pill-shaped label; clickable when it has an action.
#[component]
pub fn Badge(
    #[prop(optional)] variant: BadgeVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_click: Option<FormAction>,
    children: Children,
) -> impl IntoView {
    let clickable = if on_click.is_some() {
        "cursor-pointer"
    } else {
        ""
    };
    let class = class_list(&["badge", variant.class(), class.as_str(), clickable]);

    match on_click {
        Some(action) => view! {
            <form method="post" class="inline" action=action.path>
                <button type="submit" class=class>{children()}</button>
            </form>
        }
        .into_any(),
        None => view! { <span class=class>{children()}</span> }.into_any(),
    }
}

/// A native checkbox. With an action, changing it submits the action's form.
#[component]
pub fn Checkbox(
    #[prop(into)] id: String,
    checked: bool,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_checked_change: Option<FormAction>,
) -> impl IntoView {
    let class = class_list(&["checkbox", class.as_str()]);

    match on_checked_change {
        Some(action) => view! {
            <form method="post" class="inline" action=action.path>
                <input
                    type="checkbox"
                    id=id
                    class=class
                    checked=checked
                    onchange="this.form.submit()"
                />
            </form>
        }
        .into_any(),
        None => view! { <input type="checkbox" id=id class=class checked=checked/> }.into_any(),
    }
}

/// Current value of the enclosing [`Select`], shared with its items.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
struct SelectedValue(Option<String>);

fn selected_value() -> Option<String> {
    use_context::<SelectedValue>().and_then(|selected| selected.0)
}

/// A native dropdown.
///
/// `value` mirrors the control's current value so a re-render shows the same choice. The
/// children are a [`SelectTrigger`] followed by a [`SelectContent`].
#[component]
pub fn Select(
    #[prop(into)] name: String,
    #[prop(optional_no_strip)] value: Option<String>,
    #[prop(optional, into)] class: String,
    #[prop(optional)] on_value_change: Option<FormAction>,
    children: Children,
) -> impl IntoView {
    provide_context(SelectedValue(value));
    let class = class_list(&["select", class.as_str()]);

    match on_value_change {
        Some(action) => view! {
            <form method="post" class="inline" action=action.path>
                <select name=name class=class onchange="this.form.submit()">
                    {children()}
                </select>
                <noscript>
                    <button type="submit">"Apply"</button>
                </noscript>
            </form>
        }
        .into_any(),
        None => view! { <select name=name class=class>{children()}</select> }.into_any(),
    }
}

/// The always-present first entry of a [`Select`]; choosing it clears the selection.
#[component]
pub fn SelectTrigger(#[prop(optional, into)] class: String, children: Children) -> impl IntoView {
    let class = class_list(&["placeholder", class.as_str()]);
    let selected = selected_value().is_none();
    view! { <option value="" class=class selected=selected>{children()}</option> }
}

/// Placeholder text shown while nothing is chosen.
#[component]
pub fn SelectValue(#[prop(into)] placeholder: String) -> impl IntoView {
    placeholder
}

#[component]
pub fn SelectContent(children: Children) -> impl IntoView {
    children()
}

/// One choice in a [`Select`].
#[component]
pub fn SelectItem(#[prop(into)] value: String, children: Children) -> impl IntoView {
    let selected = selected_value().as_deref() == Some(value.as_str());
    view! { <option value=value selected=selected>{children()}</option> }
}

#[component]
pub fn Card(children: Children) -> impl IntoView {
    view! { <div class="card">{children()}</div> }
}

#[component]
pub fn CardHeader(children: Children) -> impl IntoView {
    view! { <div class="card-header">{children()}</div> }
}

#[component]
pub fn CardTitle(children: Children) -> impl IntoView {
    view! { <h2 class="card-title">{children()}</h2> }
}

#[component]
pub fn CardContent(children: Children) -> impl IntoView {
    view! { <div class="card-content">{children()}</div> }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::render_to_string;

    fn condition_select(value: Option<String>) -> String {
        render_to_string(move || {
            view! {
                <Select name="condition" value=value>
                    <SelectTrigger>
                        <SelectValue placeholder="Choose Condition"/>
                    </SelectTrigger>
                    <SelectContent>
                        <SelectItem value="1">"Diabetes"</SelectItem>
                        <SelectItem value="2">"Hypertension"</SelectItem>
                    </SelectContent>
                </Select>
            }
        })
    }

    #[test]
    fn badge_variants_render_distinct_styles() {
        let filled = render_to_string(|| view! { <Badge>"Type 1"</Badge> });
        let outline =
            render_to_string(|| view! { <Badge variant=BadgeVariant::Outline>"Type 1"</Badge> });

        assert!(filled.contains("badge-default"));
        assert!(outline.contains("badge-outline"));
        assert!(filled.starts_with("<span"));
    }

    #[test]
    fn clickable_badge_posts_its_action() {
        let html = render_to_string(|| {
            view! {
                <Badge
                    variant=BadgeVariant::Outline
                    on_click=FormAction::post("/subcategories/2/toggle")
                >
                    "Type 2"
                </Badge>
            }
        });

        assert!(html.contains(r#"action="/subcategories/2/toggle""#));
        assert!(html.contains(r#"<button type="submit""#));
        assert!(html.contains("cursor-pointer"));
        assert!(html.contains(">Type 2</button>"));
    }

    #[test]
    fn checkbox_reflects_checked_state() {
        let checked = render_to_string(|| view! { <Checkbox id="med-1" checked=true/> });
        let unchecked = render_to_string(|| view! { <Checkbox id="med-1" checked=false/> });

        assert!(checked.contains(r#"class="checkbox" checked"#));
        assert!(!unchecked.contains(" checked"));
        assert!(checked.contains(r#"id="med-1""#));
    }

    #[test]
    fn checkbox_with_action_submits_on_change() {
        let html = render_to_string(|| {
            view! {
                <Checkbox
                    id="med-2"
                    checked=false
                    on_checked_change=FormAction::post("/medications/2/toggle")
                />
            }
        });

        assert!(html.contains(r#"action="/medications/2/toggle""#));
        assert!(html.contains("this.form.submit()"));
    }

    #[test]
    fn select_marks_placeholder_until_a_value_is_set() {
        let html = condition_select(None);
        assert!(html.contains(r#"<option value="" class="placeholder" selected>"#));
        assert!(html.contains("Choose Condition"));
        assert!(html.contains(r#"<option value="1">Diabetes</option>"#));

        let html = condition_select(Some("2".into()));
        assert!(!html.contains(r#"class="placeholder" selected"#));
        assert!(html.contains(r#"<option value="2" selected"#));
        assert!(html.contains(r#"<option value="1">Diabetes</option>"#));
    }

    #[test]
    fn select_with_action_posts_on_change() {
        let html = render_to_string(|| {
            view! {
                <Select name="condition" value=None on_value_change=FormAction::post("/condition")>
                    <SelectTrigger>
                        <SelectValue placeholder="Choose Condition"/>
                    </SelectTrigger>
                    <SelectContent>
                        <SelectItem value="1">"Diabetes"</SelectItem>
                    </SelectContent>
                </Select>
            }
        });

        assert!(html.contains(r#"action="/condition""#));
        assert!(html.contains(r#"<select name="condition" class="select" onchange="this.form.submit()""#));
    }

    #[test]
    fn labels_are_escaped() {
        let html = render_to_string(|| view! { <Badge>{"<script>".to_string()}</Badge> });
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn card_wraps_children() {
        let html = render_to_string(|| {
            view! {
                <Card>
                    <CardHeader>
                        <CardTitle>"Healthcare Audience Targeting"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <p>"body"</p>
                    </CardContent>
                </Card>
            }
        });

        assert!(html.contains(r#"<h2 class="card-title">Healthcare Audience Targeting</h2>"#));
        assert!(html.contains(r#"<div class="card-content"><p>body</p></div>"#));
    }
}
