use audience_core::constants::DEFAULT_DATA_URL;
use audience_core::{Catalog, Event, Selection, TargetAudience};
use audience_ui::CatalogLoader;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "audience")]
#[command(about = "Healthcare audience targeting CLI")]
struct Cli {
    /// Catalog endpoint to fetch conditions from
    #[arg(long, global = true, default_value = DEFAULT_DATA_URL)]
    url: String,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the conditions in the catalog
    Conditions,
    /// Print the target audience for a selection
    Summary {
        /// Condition ID
        #[arg(long)]
        condition: i64,
        /// Subcategory ID to include (repeatable; repeating an ID toggles it off again)
        #[arg(long = "subcategory")]
        subcategories: Vec<i64>,
        /// Medication ID to exclude (repeatable; repeating an ID toggles it off again)
        #[arg(long = "exclude")]
        excluded: Vec<i64>,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let Some(command) = cli.command else {
        println!("Use 'audience --help' for commands");
        return;
    };

    let catalog = match fetch(&cli.url).await {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match command {
        Commands::Conditions => {
            if catalog.is_empty() {
                println!("No conditions found.");
            }
            for line in list_conditions(&catalog) {
                println!("{}", line);
            }
        }
        Commands::Summary {
            condition,
            subcategories,
            excluded,
        } => {
            let selection = select(&catalog, condition, &subcategories, &excluded);
            println!("{}", format_summary(selection.target_audience().as_ref()));
        }
    }
}

async fn fetch(url: &str) -> Result<Catalog, audience_ui::LoadError> {
    CatalogLoader::new(url)?.fetch().await
}

fn list_conditions(catalog: &Catalog) -> Vec<String> {
    catalog
        .conditions()
        .iter()
        .map(|c| {
            let subs: Vec<String> = c
                .sub_categories
                .iter()
                .map(|s| format!("{}={}", s.id, s.name))
                .collect();
            let meds: Vec<String> = c
                .medications
                .iter()
                .map(|m| format!("{}={}", m.id, m.name))
                .collect();
            format!(
                "ID: {}, Name: {}, Subcategories: [{}], Medications: [{}]",
                c.id,
                c.name,
                subs.join(", "),
                meds.join(", ")
            )
        })
        .collect()
}

fn select(
    catalog: &Catalog,
    condition: i64,
    subcategories: &[i64],
    excluded: &[i64],
) -> Selection {
    let mut selection = Selection::new();
    selection.apply(catalog, Event::SelectCondition(Some(condition)));
    for id in subcategories {
        selection.apply(catalog, Event::ToggleSubCategory(*id));
    }
    for id in excluded {
        selection.apply(catalog, Event::ToggleMedication(*id));
    }
    selection
}

fn format_summary(summary: Option<&TargetAudience>) -> String {
    let Some(summary) = summary else {
        return "No condition selected.".into();
    };

    let mut lines = vec![format!("Condition: {}", summary.condition)];
    if !summary.subcategories.is_empty() {
        lines.push(format!("Subcategories: {}", summary.subcategories.join(", ")));
    }
    if !summary.medications.is_empty() {
        lines.push(format!(
            "Available Medications: {}",
            summary.medications.join(", ")
        ));
    }
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG: &str = r#"{"conditions": [{
        "id": 1,
        "name": "Diabetes",
        "subCategories": [{"id": 1, "name": "Type 1"}, {"id": 2, "name": "Type 2"}],
        "medications": [{"id": 1, "name": "Metformin"}, {"id": 2, "name": "Insulin"}]
    }]}"#;

    #[test]
    fn summary_applies_toggles_in_order() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let selection = select(&catalog, 1, &[2], &[1]);

        assert_eq!(
            format_summary(selection.target_audience().as_ref()),
            "Condition: Diabetes\nSubcategories: Type 2\nAvailable Medications: Insulin"
        );
    }

    #[test]
    fn repeated_id_toggles_back_off() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let selection = select(&catalog, 1, &[2, 2], &[]);
        let summary = selection.target_audience().unwrap();
        assert_eq!(summary.subcategories, vec!["Type 1", "Type 2"]);
    }

    #[test]
    fn unknown_condition_prints_no_selection() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        let selection = select(&catalog, 9, &[1], &[]);
        assert_eq!(
            format_summary(selection.target_audience().as_ref()),
            "No condition selected."
        );
    }

    #[test]
    fn conditions_list_ids_and_names() {
        let catalog = Catalog::from_json(CATALOG).unwrap();
        assert_eq!(
            list_conditions(&catalog),
            vec![
                "ID: 1, Name: Diabetes, Subcategories: [1=Type 1, 2=Type 2], Medications: [1=Metformin, 2=Insulin]"
            ]
        );
    }

    #[test]
    fn cli_parses_repeated_flags() {
        let cli = Cli::try_parse_from([
            "audience",
            "summary",
            "--condition",
            "1",
            "--subcategory",
            "1",
            "--subcategory",
            "2",
            "--exclude",
            "2",
        ])
        .unwrap();

        assert_eq!(cli.url, DEFAULT_DATA_URL);
        match cli.command {
            Some(Commands::Summary {
                condition,
                subcategories,
                excluded,
            }) => {
                assert_eq!(condition, 1);
                assert_eq!(subcategories, vec![1, 2]);
                assert_eq!(excluded, vec![2]);
            }
            _ => panic!("expected summary command"),
        }
    }
}
