#[macro_use]
extern crate log;

use std::env;
use std::process::exit;

use launchdarkly_api_client::models::Paginated;
use launchdarkly_api_client::{Client, ConfigBuilder, ServiceEndpointsBuilder};

use env_logger::Env;

const PAGE_SIZE: i64 = 20;

#[tokio::main]
async fn main() {
    env_logger::init_from_env(Env::new().default_filter_or("info"));

    let api_key = env::var("LAUNCHDARKLY_API_KEY").expect("Please set LAUNCHDARKLY_API_KEY");
    let project_key = env::args()
        .nth(1)
        .or_else(|| env::var("LAUNCHDARKLY_PROJECT_KEY").ok())
        .unwrap_or_else(|| "default".to_string());

    let mut config_builder = ConfigBuilder::new().api_key(&api_key);
    if let Ok(base_url) = env::var("LAUNCHDARKLY_BASE_URL") {
        let mut endpoints = ServiceEndpointsBuilder::new();
        endpoints.base_url(&base_url);
        config_builder = config_builder.service_endpoints(&endpoints);
    }

    let client = Client::build(config_builder.build()).expect("failed to build client");

    let mut offset = 0;
    loop {
        let result = client
            .feature_flags()
            .get_feature_flags(project_key.as_str())
            .summary(true)
            .limit(PAGE_SIZE)
            .offset(offset)
            .execute()
            .await;

        let (flags, response) = match result {
            Ok(page) => page,
            Err(e) => {
                error!("Failed to list flags in {}: {}", project_key, e);
                exit(1);
            }
        };

        for flag in flags.items() {
            println!(
                "{:<40} {:<10} {}",
                flag.key,
                flag.kind,
                if flag.temporary { "temporary" } else { "permanent" }
            );
        }

        debug!("Rate limit after page: {:?}", response.rate_limit());

        if flags.next_link().is_none() || flags.items().is_empty() {
            break;
        }
        offset += flags.items().len() as i64;
    }

    info!("Done");
}
