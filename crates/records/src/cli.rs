use crate::prelude::{println, *};
use colored::Colorize;
use records::{RecordsClient, RecordsConfig};
use records_core::aggregate::RetrieveResponse;
use records_core::query::RetrieveOptions;

#[derive(Debug, clap::Args, Clone)]
pub struct RetrieveArgs {
    /// Page number (1-indexed)
    #[arg(short, long)]
    pub page: Option<u64>,

    /// Keep only records of this color (repeatable). Omit to request every color.
    #[arg(short, long = "color", value_name = "COLOR")]
    pub colors: Vec<String>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl RetrieveArgs {
    fn options(&self) -> RetrieveOptions {
        RetrieveOptions {
            page: self.page,
            colors: (!self.colors.is_empty()).then(|| self.colors.clone()),
        }
    }
}

pub async fn run(args: RetrieveArgs, global: crate::Global) -> Result<()> {
    let config = RecordsConfig::from_env().with_overrides(global.base_url);

    if global.verbose {
        println!("Records API: {}", config.base_url);
        println!();
    }

    let client = RecordsClient::http(config);
    let response = client
        .retrieve(Some(args.options()))
        .await
        .ok_or_else(|| eyre!("Could not retrieve records (see the error log above)"))?;

    if args.json {
        println!("{}", format_json(&response)?);
    } else {
        println!("{}", format_text(&response, args.page.unwrap_or(1)));
    }

    Ok(())
}

fn format_json(response: &RetrieveResponse) -> Result<String> {
    serde_json::to_string_pretty(response).context("JSON serialization failed")
}

fn format_text(response: &RetrieveResponse, page: u64) -> String {
    let mut result = String::new();

    result.push_str(&format!("{}\n", format!("RECORDS (Page {page})").bright_cyan().bold()));
    result.push_str(&format!(
        "{} {}   {} {}\n",
        "Records:".bold(),
        response.ids.len(),
        "Closed primary:".bold(),
        response.closed_primary_count
    ));

    if response.open.is_empty() {
        result.push_str(&format!("\n{}\n", "No open records on this page.".yellow()));
    } else {
        let mut table = new_table();
        table.add_row(prettytable::row!["ID", "COLOR", "PRIMARY"]);
        for record in &response.open {
            table.add_row(prettytable::row![record.id, record.color, record.is_primary]);
        }
        result.push('\n');
        result.push_str(&table.to_string());
    }

    let link = |page: Option<u64>| page.map_or_else(|| "-".to_string(), |p| p.to_string());
    result.push_str(&format!(
        "\n{} {}   {} {}\n",
        "Previous page:".dimmed(),
        link(response.previous_page),
        "Next page:".dimmed(),
        link(response.next_page)
    ));

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use records_core::aggregate::OpenRecord;
    use records_core::colors::Disposition;

    fn create_test_response() -> RetrieveResponse {
        RetrieveResponse {
            ids: vec![1, 2],
            open: vec![OpenRecord {
                id: 1,
                color: "brown".to_string(),
                disposition: Disposition::Open,
                is_primary: false,
            }],
            closed_primary_count: 1,
            previous_page: None,
            next_page: Some(2),
        }
    }

    #[test]
    fn test_options_without_colors_is_unfiltered() {
        let args = RetrieveArgs {
            page: None,
            colors: vec![],
            json: false,
        };
        assert_eq!(args.options(), RetrieveOptions::default());
    }

    #[test]
    fn test_options_with_colors() {
        let args = RetrieveArgs {
            page: Some(3),
            colors: vec!["red".into()],
            json: true,
        };
        assert_eq!(args.options(), RetrieveOptions::page(3).with_colors(["red"]));
    }

    #[test]
    fn test_format_json_structure() {
        let json = format_json(&create_test_response()).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["closedPrimaryCount"], 1);
        assert!(parsed["previousPage"].is_null());
        assert_eq!(parsed["nextPage"], 2);
        assert_eq!(parsed["open"][0]["isPrimary"], false);
    }

    #[test]
    fn test_format_text_includes_summary() {
        colored::control::set_override(false);
        let text = format_text(&create_test_response(), 1);

        assert!(text.contains("RECORDS (Page 1)"));
        assert!(text.contains("Records: 2"));
        assert!(text.contains("Closed primary: 1"));
        assert!(text.contains("brown"));
        assert!(text.contains("Previous page: -"));
        assert!(text.contains("Next page: 2"));
    }

    #[test]
    fn test_format_text_no_open_records() {
        colored::control::set_override(false);
        let mut response = create_test_response();
        response.open.clear();

        let text = format_text(&response, 4);
        assert!(text.contains("No open records on this page."));
    }
}
