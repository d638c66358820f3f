//! The root view of the targeting form.
//!
//! `AudienceView` owns all form state: the outcome of the one catalog load and the current
//! [`Selection`]. Rendering is a pure function of that state.

use audience_core::constants::CONDITION_PLACEHOLDER;
use audience_core::selection::parse_condition_value;
use audience_core::{Catalog, Event, Medication, Selection, SubCategory, TargetAudience};
use leptos::prelude::*;

use crate::components::{
    Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, Checkbox, FormAction, Select,
    SelectContent, SelectItem, SelectTrigger, SelectValue,
};
use crate::render::render_to_string;

/// Outcome of the catalog load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum LoadState {
    #[default]
    Pending,
    Ready(Catalog),
    Failed(String),
}

/// Root view state.
#[derive(Clone, Debug, Default)]
pub struct AudienceView {
    load: LoadState,
    selection: Selection,
}

impl AudienceView {
    /// A view that is still waiting for its catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// A view whose catalog is already available.
    pub fn with_catalog(catalog: Catalog) -> Self {
        Self {
            load: LoadState::Ready(catalog),
            selection: Selection::new(),
        }
    }

    /// Record a successful load. Only the first outcome is kept.
    pub fn finish_loading(&mut self, catalog: Catalog) {
        if self.load == LoadState::Pending {
            tracing::info!("catalog loaded with {} conditions", catalog.len());
            self.load = LoadState::Ready(catalog);
        }
    }

    /// Record a failed load. Only the first outcome is kept.
    pub fn fail_loading(&mut self, message: impl Into<String>) {
        if self.load == LoadState::Pending {
            self.load = LoadState::Failed(message.into());
        }
    }

    pub fn load_state(&self) -> &LoadState {
        &self.load
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Apply a user event. Events are ignored unless the catalog is ready.
    pub fn dispatch(&mut self, event: Event) {
        match &self.load {
            LoadState::Ready(catalog) => self.selection.apply(catalog, event),
            other => tracing::debug!("ignoring {:?} while catalog is {:?}", event, other),
        }
    }

    /// Select a condition from the dropdown's raw value.
    pub fn select_condition_value(&mut self, value: &str) {
        self.dispatch(Event::SelectCondition(parse_condition_value(value)));
    }

    pub fn target_audience(&self) -> Option<TargetAudience> {
        self.selection.target_audience()
    }

    /// Render the view body as HTML.
    pub fn render(&self) -> String {
        render_to_string(|| self.body())
    }

    /// Render the full HTML document.
    pub fn render_page(&self) -> String {
        let page = render_to_string(|| {
            let body = self.body();
            view! {
                <html lang="en">
                    <head>
                        <meta charset="utf-8"/>
                        <title>"Healthcare Audience Targeting"</title>
                        <style>{PAGE_STYLE}</style>
                    </head>
                    <body>{body}</body>
                </html>
            }
        });
        format!("<!DOCTYPE html>{page}")
    }

    fn body(&self) -> AnyView {
        match &self.load {
            LoadState::Pending => view! {
                <div class="centered">
                    <div class="loading">"Loading..."</div>
                </div>
            }
            .into_any(),
            LoadState::Failed(message) => {
                let text = format!("Error: {message}");
                view! { <div class="centered error">{text}</div> }.into_any()
            }
            LoadState::Ready(catalog) => self.form(catalog).into_any(),
        }
    }

    fn form(&self, catalog: &Catalog) -> impl IntoView {
        let conditions: Vec<(String, String)> = catalog
            .conditions()
            .iter()
            .map(|c| (c.id.to_string(), c.name.clone()))
            .collect();
        let current = self.selection.condition().map(|c| c.id.to_string());

        let details = self.selection.condition().map(|_| {
            let sub_categories: Vec<(SubCategory, bool)> = self
                .selection
                .sub_categories()
                .iter()
                .map(|s| (s.clone(), self.selection.is_sub_category_selected(s.id)))
                .collect();
            let medications: Vec<(Medication, bool)> = self
                .selection
                .medications()
                .iter()
                .map(|m| (m.clone(), self.selection.is_medication_excluded(m.id)))
                .collect();
            view! {
                <SubCategoryBadges items=sub_categories/>
                <MedicationCheckboxes items=medications/>
            }
        });
        let summary = self
            .target_audience()
            .map(|summary| view! { <AudienceSummary summary=summary/> });

        view! {
            <main class="page">
                <Card>
                    <CardHeader>
                        <CardTitle>"Healthcare Audience Targeting"</CardTitle>
                    </CardHeader>
                    <CardContent>
                        <div class="field">
                            <label class="field-label">"Select Condition"</label>
                            <Select
                                name="condition"
                                value=current
                                on_value_change=FormAction::post("/condition")
                            >
                                <SelectTrigger>
                                    <SelectValue placeholder=CONDITION_PLACEHOLDER/>
                                </SelectTrigger>
                                <SelectContent>
                                    {conditions
                                        .into_iter()
                                        .map(|(id, name)| {
                                            view! { <SelectItem value=id>{name}</SelectItem> }
                                        })
                                        .collect_view()}
                                </SelectContent>
                            </Select>
                        </div>
                        {details}
                        {summary}
                    </CardContent>
                </Card>
            </main>
        }
    }
}

#[component]
fn SubCategoryBadges(items: Vec<(SubCategory, bool)>) -> impl IntoView {
    let badges = items
        .into_iter()
        .map(|(sub, selected)| {
            let variant = if selected {
                BadgeVariant::Default
            } else {
                BadgeVariant::Outline
            };
            let action = FormAction::post(format!("/subcategories/{}/toggle", sub.id));
            let name = sub.name;
            view! { <Badge variant=variant on_click=action>{name}</Badge> }
        })
        .collect_view();

    view! {
        <div class="field">
            <h3>"Subcategories"</h3>
            <div class="badges">{badges}</div>
        </div>
    }
}

#[component]
fn MedicationCheckboxes(items: Vec<(Medication, bool)>) -> impl IntoView {
    let rows = items
        .into_iter()
        .map(|(med, excluded)| {
            let id = format!("med-{}", med.id);
            let action = FormAction::post(format!("/medications/{}/toggle", med.id));
            let name = med.name;
            view! {
                <div class="medication">
                    <Checkbox id=id.clone() checked=excluded on_checked_change=action/>
                    <label for=id>{name}</label>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class="field">
            <h3>"Exclude Medications"</h3>
            {rows}
        </div>
    }
}

#[component]
fn AudienceSummary(summary: TargetAudience) -> impl IntoView {
    let condition = format!("Condition: {}", summary.condition);
    let subcategories = (!summary.subcategories.is_empty())
        .then(|| format!("Subcategories: {}", summary.subcategories.join(", ")));
    let medications = (!summary.medications.is_empty())
        .then(|| format!("Available Medications: {}", summary.medications.join(", ")));

    view! {
        <div class="summary">
            <h4>"Target Audience Analysis"</h4>
            <div class="summary-lines">
                <p>{condition}</p>
                {subcategories.map(|line| view! { <p>{line}</p> })}
                {medications.map(|line| view! { <p>{line}</p> })}
            </div>
        </div>
    }
}

const PAGE_STYLE: &str = "
body{margin:0;font-family:system-ui,sans-serif;background:#f3f4f6}
.page{min-height:100vh;display:flex;align-items:center;justify-content:center;padding:1rem}
.centered{min-height:100vh;display:flex;align-items:center;justify-content:center}
.loading{font-size:1.25rem}
.error{color:#ef4444}
.card{width:100%;max-width:28rem;background:#fff;border-radius:.5rem;box-shadow:0 10px 15px rgba(0,0,0,.1)}
.card-header{background:#2563eb;color:#fff;border-radius:.5rem .5rem 0 0;padding:1.5rem}
.card-title{margin:0;font-size:1.5rem}
.card-content{padding:1.5rem;display:flex;flex-direction:column;gap:1.5rem}
.field-label{display:block;font-size:.875rem;color:#374151;margin-bottom:.5rem}
.select{width:100%;padding:.5rem;border:1px solid #d1d5db;border-radius:.375rem}
.badges{display:flex;flex-wrap:wrap;gap:.5rem}
.inline{display:inline}
.badge{padding:.25rem .75rem;border-radius:9999px;font-size:.875rem;border:1px solid #3b82f6}
.badge-default{background:#3b82f6;color:#fff}
.badge-outline{background:#fff;color:#3b82f6}
.cursor-pointer{cursor:pointer}
.medication{display:flex;align-items:center;gap:.5rem;margin-top:.5rem}
.summary{background:#eff6ff;padding:1rem;border-radius:.5rem}
.summary h4{margin:0 0 .5rem;color:#1e40af}
.summary-lines p{margin:.25rem 0;font-size:.875rem;color:#374151}
";
