use clap::{Parser, Subcommand};
use site_chrome::{config, footer, manifest, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let describe = env!("GIT_DESCRIBE");
    if describe.is_empty() {
        env!("CARGO_PKG_VERSION")
    } else {
        describe
    }
}

#[derive(Parser)]
#[command(name = "site-chrome")]
#[command(about = "Header and footer chrome builder for content sites")]
#[command(long_about = "\
Header and footer chrome builder for content sites

Configuration is the data source. config.toml declares header link targets
(page paths, taxonomy terms, the blog index), footer link columns, and
social links. 'emit' resolves every target into a canonical URL and writes
a frozen chrome.json manifest for page renderers to consume.

Site layout:

  site/
  ├── config.toml                  # Chrome config (optional — stock defaults
  │                                # cover everything; override what you need)
  └── chrome.json                  # Emitted manifest (--output)

Manifest shape:

  {
    \"header\": { \"links\": [...] },       # direct links and drop-down menus
    \"footer\": {
      \"links\": [...],                   # literal link columns
      \"socialLinks\": [...],             # with copy / QR affordances
      \"footNote\": \"© 2026 QingYe. All rights reserved.\"
    }
  }

URL resolution (header targets only — footer hrefs are literal):

  { path = \"/about\" }          → /about
  { category = \"tutorials\" }   → /category/tutorials
  { tag = \"astro\" }            → /tag/astro
  \"blog\"                       → /blog

Run 'site-chrome gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Site root containing config.toml
    #[arg(long, default_value = ".", global = true)]
    source: PathBuf,

    /// Manifest output path
    #[arg(long, default_value = "chrome.json", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Assemble the chrome and write the manifest
    Emit,
    /// Validate config and resolve all targets without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Command::Emit => {
            let config = config::load_config(&cli.source)?;
            let year = footer::copyright_year(&config.footer);
            let chrome = manifest::assemble(&config, year)?;

            let json = serde_json::to_string_pretty(&chrome)?;
            if let Some(parent) = cli.output.parent()
                && !parent.as_os_str().is_empty()
            {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&cli.output, json)?;

            output::print_chrome_output(&chrome);
            println!("==> Manifest written: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let config = config::load_config(&cli.source)?;
            let year = footer::copyright_year(&config.footer);
            let chrome = manifest::assemble(&config, year)?;
            output::print_chrome_output(&chrome);
            println!("==> Chrome is valid");
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
