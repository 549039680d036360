use clap::Parser;
use recipe_fetch::utils::error::ErrorSeverity;
use recipe_fetch::utils::{logger, validation::Validate};
use recipe_fetch::{CliConfig, RecipeClient, RecipeError, RecipePayload, RecipeSource, TenantId};

fn report_and_exit(e: &RecipeError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());

    let exit_code = match e.severity() {
        ErrorSeverity::Critical => 3,
        _ => 1,
    };
    std::process::exit(exit_code);
}

fn print_summary(payload: &RecipePayload) {
    match payload.envelope() {
        Ok(envelope) => {
            println!(
                "🍲 {} ({} servings, {} min)",
                envelope.recipe.name, envelope.recipe.servings, envelope.recipe.cook_time
            );
            println!("   tenant: {}", envelope.subdomain);
            println!("   ingredients:");
            for ingredient in &envelope.recipe.ingredients {
                println!("     - {}", ingredient);
            }
            println!("   steps:");
            for (i, step) in envelope.recipe.steps.iter().enumerate() {
                println!("     {}. {}", i + 1, step);
            }
        }
        Err(e) => {
            tracing::warn!("Payload is not a recipe envelope: {}", e);
            println!("{}", payload.as_value());
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    if cli.json_logs {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::debug!("CLI config: {:?}", cli);

    let config = match cli.client_config() {
        Ok(config) => config,
        Err(e) => report_and_exit(&e),
    };

    // 驗證配置
    if let Err(e) = config.validate() {
        report_and_exit(&e);
    }

    let client = RecipeClient::new(config);

    if cli.dry_run {
        match client.request_url() {
            Ok(url) => {
                println!("GET {}", url);
                println!("X-Forwarded-Host: {}", cli.subdomain);
                return Ok(());
            }
            Err(e) => report_and_exit(&e),
        }
    }

    let tenant = TenantId::new(cli.subdomain.clone());
    match client.fetch_recipe(&tenant).await {
        Some(payload) if cli.typed => print_summary(&payload),
        Some(payload) => println!("{}", serde_json::to_string_pretty(payload.as_value())?),
        None => {
            // 失敗原因已寫入日誌
            println!("null");
            std::process::exit(2);
        }
    }

    Ok(())
}
