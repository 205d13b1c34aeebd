// Command line interface
use crate::domain::catalog::Product;
use clap::Parser;

#[derive(Debug, Parser)]
#[command(
    name = "grafana-dashboards",
    version,
    about = "Creates the Grafana dashboards of a Prometheus job in its own organization"
)]
pub struct Cli {
    /// Configuration file, without extension. Defaults to `config/grafana` when present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<String>,

    /// Overrides `build.interval`, e.g. `1m`.
    #[arg(long)]
    pub interval: Option<String>,

    /// Print the dashboards as JSON instead of sending them to Grafana.
    #[arg(long)]
    pub dry_run: bool,

    /// Do not print progress lines.
    #[arg(long, short)]
    pub quiet: bool,

    /// Organization to create the dashboards in; also the Prometheus job name.
    pub organization: String,

    /// Products to build, matched loosely, e.g. `jvm`, `mysql`, `redis-lock`.
    #[arg(required = true, value_parser = parse_product)]
    pub products: Vec<Product>,
}

fn parse_product(value: &str) -> Result<Product, String> {
    Product::from_type(value).ok_or_else(|| {
        let known: Vec<&str> = Product::ALL.iter().map(Product::folder_name).collect();
        format!("unknown product `{value}`, expected one of: {}", known.join(", "))
    })
}
