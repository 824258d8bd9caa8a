use clap::Parser;
use url::Url;

/// Download a logo into ./assets and update config.json.
#[derive(Debug, Parser)]
#[command(name = "fetch-logo")]
#[command(about = "Download a logo into ./assets and update config.json", long_about = None)]
pub struct Cli {
    /// Logo image URL (png/svg/jpg).
    #[arg(long, value_parser = parse_http_url)]
    pub url: String,
}

/// Accept only absolute http(s) URLs. The original string is kept so the
/// extension check sees exactly what the user typed.
fn parse_http_url(raw: &str) -> Result<String, String> {
    let parsed = Url::parse(raw).map_err(|e| format!("invalid URL: {e}"))?;
    match parsed.scheme() {
        "http" | "https" => Ok(raw.to_string()),
        other => Err(format!("unsupported scheme `{other}`, expected http or https")),
    }
}
