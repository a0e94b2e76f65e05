//! Command execution
//!
//! Every command builds an [`ApiClient`] from the layered configuration,
//! performs one or two requests and hands the result to the [`Printer`].

use anyhow::{Context, bail};
use chrono::Utc;
use plugindesk_client::{ApiClient, ClientConfig, PluginApi};
use plugindesk_core::{AppId, DEFAULT_AVATAR, PluginId};
use plugindesk_model::{
    AppUpdateParams, ChatLogQuery, CreateAppParams, DEFAULT_NAME_REQUIRED, PluginForm,
    RequestPaging, ShareSearch, UpdatePluginParams,
};
use serde_json::json;

use crate::cli::{AppsCommand, Cli, Command, CreateArgs, PluginsCommand, UpdateArgs};
use crate::output::{self, Printer};

// ============================================================================
// Configuration
// ============================================================================

/// Defaults, then the `--config` file, then environment and flags
///
/// Environment variables reach this function through clap, so a flag
/// given on the command line wins over the variable of the same name.
pub fn resolve_config(cli: &Cli) -> anyhow::Result<ClientConfig> {
    let mut config = match &cli.config {
        Some(path) => ClientConfig::from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => ClientConfig::default(),
    };

    if let Some(base_url) = &cli.base_url {
        config = config.with_base_url(base_url.clone());
    }
    if let Some(token) = &cli.token {
        config = config.with_token(token.clone());
    }
    if let Some(timeout) = cli.timeout {
        config = config.with_timeout_secs(timeout);
    }

    config.validate()?;
    Ok(config)
}

// ============================================================================
// Dispatch
// ============================================================================

/// Run the parsed command line
pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    tracing::debug!(base_url = %config.base_url, "resolved configuration");

    let api = ApiClient::new(&config)?;
    let printer = Printer::new(cli.json);

    match cli.command {
        Command::Apps(cmd) => run_apps(&api, printer, cmd).await,
        Command::Plugins(cmd) => run_plugins(&api, printer, cmd).await,
    }
}

async fn run_apps(api: &ApiClient, printer: Printer, cmd: AppsCommand) -> anyhow::Result<()> {
    match cmd {
        AppsCommand::List => {
            let apps = api.list_my_apps().await?;
            printer.emit(&apps, |v| output::app_list(v))
        }
        AppsCommand::Show { id } => {
            let app = api.get_app(&AppId::new(id)).await?;
            printer.emit(&app, output::app_detail)
        }
        AppsCommand::Create(args) => {
            let params = create_app_params(args)?;
            let id = api.create_app(&params).await?;
            printer.done(&format!("created app {id}"), json!({ "id": id }))
        }
        AppsCommand::Update(args) => {
            let (id, params) = app_update(args)?;
            api.update_app(&id, &params).await?;
            printer.done(&format!("updated app {id}"), json!({ "id": id }))
        }
        AppsCommand::Delete { id } => {
            let id = AppId::new(id);
            api.delete_app(&id).await?;
            printer.done(&format!("deleted app {id}"), json!({ "id": id }))
        }
        AppsCommand::Shared { search, paging } => {
            let query = ShareSearch::new(search, RequestPaging::new(paging.page, paging.page_size));
            let page = api.list_shared_apps(&query).await?;
            printer.emit(&page, output::shared_page)
        }
        AppsCommand::Collect { id } => {
            let id = AppId::new(id);
            let count = api.toggle_app_collection(&id).await?;
            printer.done(
                &format!("{id} is now collected by {count} users"),
                json!({ "id": id, "collection": count }),
            )
        }
        AppsCommand::Usage { id } => {
            let points = api.get_app_total_usage(&AppId::new(id)).await?;
            printer.emit(&points, |v| output::usage(v))
        }
        AppsCommand::Logs { id, days, paging } => {
            let query = ChatLogQuery::last_days(
                AppId::new(id),
                days,
                Utc::now(),
                RequestPaging::new(paging.page, paging.page_size),
            )?;
            let logs = api.get_app_chat_logs(&query).await?;
            // no fixed shape; printed as JSON in both modes
            println!("{}", serde_json::to_string_pretty(&logs)?);
            Ok(())
        }
    }
}

async fn run_plugins(api: &ApiClient, printer: Printer, cmd: PluginsCommand) -> anyhow::Result<()> {
    match cmd {
        PluginsCommand::List => {
            let plugins = api.list_plugins().await?;
            printer.emit(&plugins, |v| output::plugin_list(v))
        }
        PluginsCommand::Show { id } => {
            let plugin = api.get_plugin(&PluginId::new(id)).await?;
            printer.emit(&plugin, output::plugin_detail)
        }
        PluginsCommand::Create(args) => {
            let form = plugin_form(args);
            form.validate_with(DEFAULT_NAME_REQUIRED)?;
            let id = api.create_plugin(form.to_create_params()).await?;
            printer.done(&format!("created plugin {id}"), json!({ "id": id }))
        }
        PluginsCommand::Update(args) => {
            let params = plugin_update(args)?;
            let id = params.id.clone();
            api.update_plugin(params).await?;
            printer.done(&format!("updated plugin {id}"), json!({ "id": id }))
        }
        PluginsCommand::Delete { id, yes } => {
            if !yes {
                bail!("refusing to delete plugin {id} without --yes");
            }
            let id = PluginId::new(id);
            api.delete_plugin(id.clone()).await?;
            printer.done(&format!("deleted plugin {id}"), json!({ "id": id }))
        }
    }
}

// ============================================================================
// Argument Conversion
// ============================================================================

fn plugin_form(args: CreateArgs) -> PluginForm {
    let mut form = PluginForm::new()
        .with_name(args.name)
        .with_intro(args.intro.unwrap_or_default());
    if let Some(avatar) = args.avatar {
        form.avatar = avatar;
    }
    form
}

fn plugin_update(args: UpdateArgs) -> anyhow::Result<UpdatePluginParams> {
    let mut params = UpdatePluginParams::new(PluginId::new(args.id));
    params.name = args.name;
    params.avatar = args.avatar;
    params.intro = args.intro;

    if params.name.as_deref().is_some_and(|n| n.trim().is_empty()) {
        bail!("{}", DEFAULT_NAME_REQUIRED);
    }
    if !params.has_changes() {
        bail!("nothing to update; pass --name, --avatar or --intro");
    }
    Ok(params)
}

fn create_app_params(args: CreateArgs) -> anyhow::Result<CreateAppParams> {
    if args.name.trim().is_empty() {
        bail!("app name must not be empty");
    }
    Ok(CreateAppParams {
        avatar: args.avatar.unwrap_or_else(|| DEFAULT_AVATAR.to_string()),
        name: args.name,
        intro: args.intro.unwrap_or_default(),
    })
}

fn app_update(args: UpdateArgs) -> anyhow::Result<(AppId, AppUpdateParams)> {
    let params = AppUpdateParams {
        name: args.name,
        avatar: args.avatar,
        intro: args.intro,
        ..AppUpdateParams::default()
    };
    if params.is_empty() {
        bail!("nothing to update; pass --name, --avatar or --intro");
    }
    Ok((AppId::new(args.id), params))
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["plugindesk"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "base_url = \"http://file.example/api\"\ntoken = \"from-file\"\ntimeout_secs = 5"
        )
        .unwrap();
        let path = file.path().to_str().unwrap().to_string();

        let cli = parse(&[
            "--config",
            &path,
            "--base-url",
            "http://flag.example/api",
            "plugins",
            "list",
        ]);
        let config = resolve_config(&cli).unwrap();

        assert_eq!(config.base_url, "http://flag.example/api");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_missing_config_file_is_an_error() {
        let cli = parse(&["--config", "/definitely/not/here.toml", "plugins", "list"]);
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_invalid_base_url_is_rejected() {
        let cli = parse(&["--base-url", "ftp://example.com", "plugins", "list"]);
        assert!(resolve_config(&cli).is_err());
    }

    #[test]
    fn test_plugin_form_defaults() {
        let form = plugin_form(CreateArgs {
            name: "Bot".into(),
            avatar: None,
            intro: None,
        });
        assert_eq!(form.avatar, DEFAULT_AVATAR);
        assert_eq!(form.name, "Bot");
        assert!(!form.is_edit());
    }

    #[test]
    fn test_plugin_update_requires_a_change() {
        let args = UpdateArgs {
            id: "p1".into(),
            name: None,
            avatar: None,
            intro: None,
        };
        assert!(plugin_update(args).is_err());

        let args = UpdateArgs {
            id: "p1".into(),
            name: Some("   ".into()),
            avatar: None,
            intro: None,
        };
        assert!(plugin_update(args).is_err());

        let args = UpdateArgs {
            id: "p1".into(),
            name: None,
            avatar: None,
            intro: Some("new".into()),
        };
        let params = plugin_update(args).unwrap();
        assert_eq!(params.id, PluginId::from("p1"));
        assert_eq!(params.intro.as_deref(), Some("new"));
    }

    #[test]
    fn test_app_update_only_sets_given_fields() {
        let (id, params) = app_update(UpdateArgs {
            id: "a1".into(),
            name: Some("Renamed".into()),
            avatar: None,
            intro: None,
        })
        .unwrap();
        assert_eq!(id, AppId::from("a1"));
        assert_eq!(params.name.as_deref(), Some("Renamed"));
        assert!(params.avatar.is_none());
        assert!(params.share.is_none());
    }
}
