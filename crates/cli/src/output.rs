//! Human and JSON rendering of command results

use colored::Colorize;
use plugindesk_model::{
    AppDetail, AppListItem, PagingData, PluginDetail, PluginListItem, ShareAppItem, UsagePoint,
};
use serde::Serialize;

/// Where command results go and in which shape
#[derive(Debug, Clone, Copy)]
pub struct Printer {
    json: bool,
}

impl Printer {
    pub fn new(json: bool) -> Self {
        Self { json }
    }

    /// Print `value` as pretty JSON, or `text` when JSON output is off
    pub fn emit<T: Serialize>(&self, value: &T, text: impl FnOnce(&T) -> String) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(value)?);
        } else {
            println!("{}", text(value));
        }
        Ok(())
    }

    /// Confirmation line for a finished mutation
    pub fn done(&self, message: &str, payload: serde_json::Value) -> anyhow::Result<()> {
        if self.json {
            println!("{}", serde_json::to_string_pretty(&payload)?);
        } else {
            println!("{} {}", "OK".green().bold(), message);
        }
        Ok(())
    }
}

// ============================================================================
// Text Renderers
// ============================================================================

pub fn plugin_list(items: &[PluginListItem]) -> String {
    if items.is_empty() {
        return "No plugins".dimmed().to_string();
    }
    items
        .iter()
        .map(|p| format!("{}  {}  {}", p.id.as_str().cyan(), p.name.bold(), p.intro))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn plugin_detail(plugin: &PluginDetail) -> String {
    let mut lines = vec![
        format!("{}", plugin.name.bold()),
        format!("  id:      {}", plugin.id),
        format!("  avatar:  {}", plugin.avatar),
        format!("  intro:   {}", plugin.intro),
        format!("  modules: {}", plugin.modules.len()),
    ];
    if let Some(updated) = &plugin.update_time {
        lines.push(format!("  updated: {}", updated));
    }
    lines.join("\n")
}

pub fn app_list(items: &[AppListItem]) -> String {
    if items.is_empty() {
        return "No apps".dimmed().to_string();
    }
    items
        .iter()
        .map(|a| {
            let owner = if a.is_owner { "owner" } else { "shared" };
            format!("{}  {}  [{}]", a.id.as_str().cyan(), a.name.bold(), owner)
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn app_detail(app: &AppDetail) -> String {
    let mut lines = vec![
        format!("{}", app.name.bold()),
        format!("  id:      {}", app.id),
        format!("  intro:   {}", app.intro),
        format!("  modules: {}", app.modules.len()),
        format!(
            "  shared:  {} (collected {} times)",
            yes_no(app.share.is_share),
            app.share.collection
        ),
    ];
    if let Some(kind) = &app.app_type {
        lines.insert(2, format!("  type:    {}", kind));
    }
    lines.join("\n")
}

pub fn shared_page(page: &PagingData<ShareAppItem>) -> String {
    let mut lines: Vec<String> = page
        .data
        .iter()
        .map(|a| {
            let mark = if a.is_collection { "★" } else { " " };
            format!(
                "{} {}  {}  ({})",
                mark.yellow(),
                a.id.as_str().cyan(),
                a.name.bold(),
                a.share.collection
            )
        })
        .collect();
    lines.push(
        format!(
            "page {}/{} - {} apps",
            page.page_num,
            page.page_count().max(1),
            page.total
        )
        .dimmed()
        .to_string(),
    );
    lines.join("\n")
}

pub fn usage(points: &[UsagePoint]) -> String {
    points
        .iter()
        .map(|p| format!("{}  {}", p.date, p.total))
        .collect::<Vec<_>>()
        .join("\n")
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use plugindesk_model::{AppShare, PluginId};
    use serde_json::json;

    fn plain() {
        colored::control::set_override(false);
    }

    #[test]
    fn test_plugin_list() {
        plain();
        let items = vec![PluginListItem {
            id: PluginId::from("p1"),
            name: "Search".into(),
            avatar: String::new(),
            intro: "web search".into(),
        }];
        assert_eq!(plugin_list(&items), "p1  Search  web search");
        assert_eq!(plugin_list(&[]), "No plugins");
    }

    #[test]
    fn test_shared_page_footer() {
        plain();
        let page: PagingData<ShareAppItem> = serde_json::from_value(json!({
            "pageNum": 2,
            "pageSize": 1,
            "total": 3,
            "data": [{
                "_id": "a9",
                "name": "Helper",
                "share": {"isShare": true, "isShareDetail": false, "collection": 5},
                "isCollection": true
            }]
        }))
        .unwrap();

        let text = shared_page(&page);
        assert!(text.contains("★ a9  Helper  (5)"));
        assert!(text.ends_with("page 2/3 - 3 apps"));
    }

    #[test]
    fn test_app_detail_share_line() {
        plain();
        let app = AppDetail {
            id: "a1".into(),
            user_id: None,
            name: "Bot".into(),
            app_type: Some("basic".into()),
            avatar: String::new(),
            intro: "hi".into(),
            update_time: None,
            modules: vec![json!({}), json!({})],
            share: AppShare {
                is_share: true,
                is_share_detail: false,
                collection: 2,
            },
        };

        let text = app_detail(&app);
        assert!(text.contains("type:    basic"));
        assert!(text.contains("modules: 2"));
        assert!(text.contains("shared:  yes (collected 2 times)"));
    }

    #[test]
    fn test_usage_lines() {
        let points = vec![UsagePoint {
            date: "2026-10-19T12:00:00.000Z".into(),
            total: 0.0,
        }];
        assert_eq!(usage(&points), "2026-10-19T12:00:00.000Z  0");
    }
}
