//! NatPanel admin tool entry point.
//!
//! Validates the parameters of a new NAT network against each other and
//! against the interfaces present on this host, lists those interfaces, and
//! shows the default form suggestions.
//!
//! # Usage
//!
//! ```text
//! natpanel-admin [--config <PATH>] [--json] <COMMAND>
//!
//! Commands:
//!   interfaces    List host interfaces and the gateway choices
//!   defaults      Show the pre-filled form values
//!   validate      Validate a network configuration
//!   init-config   Write the default configuration file
//! ```
//!
//! `validate` falls back to the configured suggestions for every omitted
//! flag, except `--interface`, which falls back to "none selected".
//!
//! # Exit codes
//!
//! | Code | Meaning                                          |
//! |------|--------------------------------------------------|
//! | 0    | success / configuration accepted                 |
//! | 1    | system fault (config file, interface enumeration)|
//! | 2    | configuration rejected; field errors printed     |

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use natpanel_admin::application::network_form::{build_network_form, NetworkForm};
use natpanel_admin::application::validate_network::{validate_network, ValidateNetworkError};
use natpanel_admin::infrastructure::interfaces::{InterfaceEnumerator, NativeInterfaceEnumerator};
use natpanel_admin::infrastructure::storage::config::{
    config_file_path, load_config, load_config_from, save_config_to, PanelConfig,
};
use natpanel_core::{
    interface_choices, CandidateNetworkConfig, Field, FieldErrors, NetworkDefaults,
    ValidatedNetworkConfig,
};

/// Exit code for a rejected configuration.
const EXIT_REJECTED: u8 = 2;

/// Printed under the interface table.  `--interface` is checked against the
/// interface count, not against the indices shown.
const SELECTOR_NOTE: &str = "note: --interface accepts 1..=<number of interfaces listed>; \
OS indices above that count are rejected even when the interface exists";

// ── CLI argument definitions ──────────────────────────────────────────────────

/// NatPanel administration tool.
#[derive(Debug, Parser)]
#[command(
    name = "natpanel-admin",
    about = "Validate NAT network parameters against the live host",
    version
)]
struct Cli {
    /// Path of the configuration file.  Defaults to the platform location.
    #[arg(long, global = true, env = "NATPANEL_CONFIG")]
    config: Option<PathBuf>,

    /// Print machine-readable JSON on stdout.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List host interfaces and the gateway choices offered by the form.
    #[command(after_help = SELECTOR_NOTE)]
    Interfaces,
    /// Show the pre-filled values of an empty network form.
    Defaults,
    /// Validate a network configuration.
    Validate(ValidateArgs),
    /// Write the default configuration file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
}

/// Raw form fields.  Values are passed to the validator untouched.
#[derive(Debug, Default, Args)]
struct ValidateArgs {
    /// Human label of the network.
    #[arg(long)]
    network_name: Option<String>,
    /// Host bridge device name.
    #[arg(long)]
    bridge_name: Option<String>,
    /// Network in CIDR notation.
    #[arg(long)]
    cidr: Option<String>,
    /// Address of the host inside the new network.
    #[arg(long)]
    host_ip: Option<String>,
    /// First DHCP address (inclusive).
    #[arg(long)]
    dhcp_start: Option<String>,
    /// Last DHCP address (inclusive).
    #[arg(long)]
    dhcp_end: Option<String>,
    /// OS index of the gateway interface, between 1 and the number of
    /// interfaces (see `interfaces`).
    #[arg(long)]
    interface: Option<String>,
}

impl ValidateArgs {
    /// Builds the candidate, filling omitted fields from `defaults`.
    fn into_candidate(self, defaults: &NetworkDefaults) -> CandidateNetworkConfig {
        let base = defaults.to_candidate();
        CandidateNetworkConfig {
            network_name: self.network_name.unwrap_or(base.network_name),
            bridge_name: self.bridge_name.unwrap_or(base.bridge_name),
            cidr: self.cidr.unwrap_or(base.cidr),
            host_ip: self.host_ip.unwrap_or(base.host_ip),
            dhcp_start: self.dhcp_start.unwrap_or(base.dhcp_start),
            dhcp_end: self.dhcp_end.unwrap_or(base.dhcp_end),
            interface: self.interface.unwrap_or(base.interface),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config_from(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => load_config().context("failed to load config")?,
    };

    // Logs go to stderr so `--json` output stays parseable.  `RUST_LOG`
    // overrides the configured level.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.panel.log_level)),
        )
        .init();

    let enumerator = NativeInterfaceEnumerator::new();

    match cli.command {
        Command::Interfaces => {
            let interfaces = enumerator
                .enumerate_interfaces()
                .context("failed to enumerate host interfaces")?;
            if cli.json {
                print_json(&serde_json::json!({
                    "interfaces": interfaces,
                    "choices": interface_choices(&interfaces),
                }))?;
            } else {
                println!("{:>5}  NAME", "INDEX");
                for iface in &interfaces {
                    println!("{:>5}  {}", iface.index, iface.name);
                }
                println!();
                println!("{SELECTOR_NOTE}");
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Defaults => {
            let form = build_network_form(&enumerator, &config.defaults)
                .context("failed to enumerate host interfaces")?;
            if cli.json {
                print_json(&form)?;
            } else {
                print_form(&form);
            }
            Ok(ExitCode::SUCCESS)
        }
        Command::Validate(args) => {
            let candidate = args.into_candidate(&config.defaults);
            match validate_network(&enumerator, &candidate) {
                Ok(validated) => {
                    if cli.json {
                        print_json(&validated)?;
                    } else {
                        print_validated(&validated);
                    }
                    Ok(ExitCode::SUCCESS)
                }
                Err(ValidateNetworkError::Invalid(errors)) => {
                    if cli.json {
                        print_json(&serde_json::json!({ "errors": errors }))?;
                    } else {
                        print_field_errors(&errors);
                    }
                    Ok(ExitCode::from(EXIT_REJECTED))
                }
                Err(e @ ValidateNetworkError::Enumeration(_)) => {
                    error!("cannot validate network: {e}");
                    Err(anyhow::Error::new(e).context("network validation aborted"))
                }
            }
        }
        Command::InitConfig { force } => {
            let path = match cli.config {
                Some(path) => path,
                None => config_file_path().context("no config location on this platform")?,
            };
            if path.exists() && !force {
                anyhow::bail!(
                    "{} already exists (pass --force to overwrite)",
                    path.display()
                );
            }
            save_config_to(&path, &PanelConfig::default())
                .with_context(|| format!("failed to write {}", path.display()))?;
            info!("wrote default configuration to {}", path.display());
            println!("{}", path.display());
            Ok(ExitCode::SUCCESS)
        }
    }
}

// ── Output helpers ────────────────────────────────────────────────────────────

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let text = serde_json::to_string_pretty(value).context("failed to serialize output")?;
    println!("{text}");
    Ok(())
}

fn print_form(form: &NetworkForm) {
    for field in Field::ALL {
        println!("{:<34} {}", field.label(), form.initial.get(field));
    }
    println!();
    println!("Gateway interface choices:");
    for choice in &form.interface_choices {
        println!("  {:>6}  {}", choice.value, choice.label);
    }
}

fn print_validated(validated: &ValidatedNetworkConfig) {
    let network = validated.network();
    println!("accepted");
    println!("  network name    {}", validated.network_name());
    println!("  bridge name     {}", validated.bridge_name());
    println!("  network         {}/{}", network.network, network.prefix);
    println!("  broadcast       {}", network.broadcast);
    println!("  host ip         {}", validated.host_ip());
    println!(
        "  dhcp range      {} - {}",
        validated.dhcp_start(),
        validated.dhcp_end()
    );
    println!("  interface       {}", validated.interface_index());
}

fn print_field_errors(errors: &FieldErrors) {
    println!("rejected");
    for (field, field_errors) in errors.iter() {
        for error in field_errors {
            println!("  {} ({}): {}", field.label(), field, error);
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
